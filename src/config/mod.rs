use serde::Deserialize;
use std::path::{Path, PathBuf};

fn default_preview_width() -> f64 {
    400.0
}
fn default_preview_height() -> f64 {
    300.0
}
fn default_padding_fraction() -> f64 {
    0.1
}
fn default_viewport_width() -> f64 {
    800.0
}
fn default_viewport_height() -> f64 {
    600.0
}
fn default_padding_px() -> f64 {
    24.0
}
fn default_max_zoom() -> u8 {
    18
}

/// Destination drawing surface for the static preview renderer.
///
/// The padding fraction is part of the configuration rather than a literal
/// at each call site, so preview and dialog renders cannot drift apart.
#[derive(Debug, Clone, Deserialize)]
pub struct RenderTarget {
    #[serde(default = "default_preview_width")]
    pub width_px: f64,
    #[serde(default = "default_preview_height")]
    pub height_px: f64,
    /// Fraction of the surface reserved as whitespace around the shape
    #[serde(default = "default_padding_fraction")]
    pub padding_fraction: f64,
}

impl RenderTarget {
    pub fn new(width_px: f64, height_px: f64, padding_fraction: f64) -> Self {
        Self {
            width_px,
            height_px,
            padding_fraction,
        }
    }
}

impl Default for RenderTarget {
    fn default() -> Self {
        Self::new(
            default_preview_width(),
            default_preview_height(),
            default_padding_fraction(),
        )
    }
}

/// Viewport description for the interactive view-fit calculator.
#[derive(Debug, Clone, Deserialize)]
pub struct MapViewport {
    #[serde(default = "default_viewport_width")]
    pub width_px: f64,
    #[serde(default = "default_viewport_height")]
    pub height_px: f64,
    /// Pixels kept clear between the extent and the viewport edge
    #[serde(default = "default_padding_px")]
    pub padding_px: f64,
    #[serde(default = "default_max_zoom")]
    pub max_zoom: u8,
}

impl MapViewport {
    pub fn new(width_px: f64, height_px: f64, padding_px: f64, max_zoom: u8) -> Self {
        Self {
            width_px,
            height_px,
            padding_px,
            max_zoom,
        }
    }
}

impl Default for MapViewport {
    fn default() -> Self {
        Self::new(
            default_viewport_width(),
            default_viewport_height(),
            default_padding_px(),
            default_max_zoom(),
        )
    }
}

/// Optional on-disk configuration shared by every render call site.
#[derive(Debug, Deserialize, Default)]
pub struct FileConfig {
    #[serde(default)]
    pub preview: Option<RenderTarget>,
    #[serde(default)]
    pub map: Option<MapViewport>,
    #[serde(default)]
    pub boundary_url: Option<String>,
    #[serde(default)]
    pub markers_url: Option<String>,
}

impl FileConfig {
    /// Search the usual locations and load the first config that parses.
    pub fn load() -> Option<Self> {
        let config_paths = get_config_paths();

        for path in config_paths {
            if path.exists()
                && let Some(config) = Self::from_path(&path)
            {
                return Some(config);
            }
        }
        None
    }

    /// Read and parse one config file, warning (not failing) on bad TOML.
    pub fn from_path(path: &Path) -> Option<Self> {
        let contents = std::fs::read_to_string(path).ok()?;
        match toml::from_str(&contents) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("Warning: Failed to parse config file {:?}: {}", path, e);
                None
            }
        }
    }
}

fn get_config_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    paths.push(PathBuf::from("areaview.toml"));
    paths.push(PathBuf::from(".areaview.toml"));

    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("areaview").join("config.toml"));
        paths.push(config_dir.join("areaview.toml"));
    }

    if let Some(home) = dirs::home_dir() {
        paths.push(home.join(".areaview.toml"));
        paths.push(home.join(".config").join("areaview").join("config.toml"));
    }

    paths
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let target = RenderTarget::default();
        assert_eq!(target.width_px, 400.0);
        assert_eq!(target.padding_fraction, 0.1);

        let viewport = MapViewport::default();
        assert_eq!(viewport.max_zoom, 18);
        assert_eq!(viewport.padding_px, 24.0);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
boundary_url = "https://boundaries.example.com/regions"

[preview]
width_px = 320.0
height_px = 240.0

[map]
max_zoom = 15
"#
        )
        .unwrap();

        let config = FileConfig::from_path(file.path()).unwrap();
        assert_eq!(
            config.boundary_url.as_deref(),
            Some("https://boundaries.example.com/regions")
        );

        let preview = config.preview.unwrap();
        assert_eq!(preview.width_px, 320.0);
        // Unset fields fall back to defaults
        assert_eq!(preview.padding_fraction, 0.1);

        let map = config.map.unwrap();
        assert_eq!(map.max_zoom, 15);
        assert_eq!(map.width_px, 800.0);
    }

    #[test]
    fn test_bad_toml_is_skipped() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml [[[").unwrap();

        assert!(FileConfig::from_path(file.path()).is_none());
    }
}
