use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::time::Duration;

use crate::domain::MarkerPoint;

const USER_AGENT: &str = "areaview/0.1.0";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// A business location record as returned by the marker endpoint.
#[derive(Debug, Deserialize)]
pub struct MarkerRecord {
    pub lat: f64,
    pub lon: f64,
    #[serde(default)]
    pub label: String,
}

/// Supplies point overlays for a region slug. Optional: an empty list is a
/// perfectly valid answer.
pub trait MarkerSource {
    fn fetch_markers(&self, slug: &str) -> Result<Vec<MarkerRecord>>;
}

/// Fetches marker records over HTTP from `{base_url}/{slug}/markers.json`.
pub struct HttpMarkerSource {
    base_url: String,
    timeout_secs: u64,
}

impl HttpMarkerSource {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl MarkerSource for HttpMarkerSource {
    fn fetch_markers(&self, slug: &str) -> Result<Vec<MarkerRecord>> {
        let url = format!("{}/{}/markers.json", self.base_url.trim_end_matches('/'), slug);

        let client = reqwest::blocking::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(self.timeout_secs))
            .build()
            .context("Failed to create HTTP client")?;

        let response = client
            .get(&url)
            .send()
            .with_context(|| format!("Failed to fetch markers for '{}'", slug))?;

        if !response.status().is_success() {
            bail!(
                "Marker endpoint returned error status: {}",
                response.status()
            );
        }

        response
            .json()
            .context("Failed to parse marker JSON response")
    }
}

/// Convert fetched records into domain markers. Finiteness is not checked
/// here; the projector drops bad markers individually.
pub fn to_marker_points(records: &[MarkerRecord]) -> Vec<MarkerPoint> {
    records
        .iter()
        .map(|record| MarkerPoint::new(record.lon, record.lat, record.label.clone()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_marker_records() {
        let json = r#"[
            {"lat": 51.50, "lon": -0.12, "label": "Smith & Sons Roofing"},
            {"lat": 51.52, "lon": -0.10}
        ]"#;

        let records: Vec<MarkerRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].label, "Smith & Sons Roofing");
        assert_eq!(records[1].label, "");

        let points = to_marker_points(&records);
        assert_eq!(points[0].lon, -0.12);
        assert_eq!(points[0].lat, 51.50);
    }

    #[test]
    fn test_empty_marker_list_parses() {
        let records: Vec<MarkerRecord> = serde_json::from_str("[]").unwrap();
        assert!(to_marker_points(&records).is_empty());
    }
}
