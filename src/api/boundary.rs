use anyhow::{Context, Result, bail};
use std::time::Duration;

use crate::domain::RawGeometry;

const USER_AGENT: &str = "areaview/0.1.0";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Supplies raw boundary geometry for a region slug.
///
/// Implementations fetch from wherever boundaries live (HTTP, disk, a test
/// fixture). Any failure is surfaced to the engine as an explicit
/// source-unavailable state, never as a silently empty geometry.
pub trait BoundarySource {
    fn fetch_boundary(&self, slug: &str) -> Result<RawGeometry>;
}

/// Fetches boundary GeoJSON over HTTP from `{base_url}/{slug}.geojson`.
pub struct HttpBoundarySource {
    base_url: String,
    timeout_secs: u64,
}

impl HttpBoundarySource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }
}

impl BoundarySource for HttpBoundarySource {
    fn fetch_boundary(&self, slug: &str) -> Result<RawGeometry> {
        let url = format!("{}/{}.geojson", self.base_url.trim_end_matches('/'), slug);

        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(self.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        let response = client
            .get(&url)
            .send()
            .with_context(|| format!("Failed to fetch boundary for '{}'", slug))?;

        if !response.status().is_success() {
            bail!(
                "Boundary endpoint returned error status: {}",
                response.status()
            );
        }

        let value: serde_json::Value = response
            .json()
            .context("Failed to parse boundary JSON response")?;

        extract_geometry(value).with_context(|| format!("No usable geometry for '{}'", slug))
    }
}

/// Accept either a bare GeoJSON geometry object or a Feature wrapper.
fn extract_geometry(value: serde_json::Value) -> Result<RawGeometry> {
    let geometry_value = match value.get("type").and_then(|t| t.as_str()) {
        Some("Feature") => value
            .get("geometry")
            .filter(|g| !g.is_null())
            .cloned()
            .ok_or_else(|| anyhow::anyhow!("Feature has no geometry"))?,
        Some(_) => value,
        None => bail!("Response is not GeoJSON"),
    };

    serde_json::from_value(geometry_value).context("Failed to decode geometry object")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_extract_bare_geometry() {
        let value = json!({
            "type": "Polygon",
            "coordinates": [[[0.0, 51.0], [0.1, 51.0], [0.1, 51.1], [0.0, 51.0]]]
        });

        let raw = extract_geometry(value).unwrap();
        assert_eq!(raw.geometry_type, "Polygon");
    }

    #[test]
    fn test_extract_feature_wrapper() {
        let value = json!({
            "type": "Feature",
            "properties": {"name": "Camden"},
            "geometry": {
                "type": "MultiPolygon",
                "coordinates": [[[[0.0, 51.0], [0.1, 51.0], [0.1, 51.1], [0.0, 51.0]]]]
            }
        });

        let raw = extract_geometry(value).unwrap();
        assert_eq!(raw.geometry_type, "MultiPolygon");
    }

    #[test]
    fn test_feature_with_null_geometry_is_an_error() {
        let value = json!({"type": "Feature", "geometry": null});
        assert!(extract_geometry(value).is_err());
    }

    #[test]
    fn test_untyped_response_is_an_error() {
        let value = json!({"rings": [[1.0, 2.0]]});
        assert!(extract_geometry(value).is_err());
    }
}
