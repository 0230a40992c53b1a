/// A business location to overlay on a boundary, always in geodetic degrees.
/// Markers carry no CRS ambiguity in this system.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerPoint {
    pub lon: f64,
    pub lat: f64,
    pub label: String,
}

impl MarkerPoint {
    pub fn new(lon: f64, lat: f64, label: impl Into<String>) -> Self {
        Self {
            lon,
            lat,
            label: label.into(),
        }
    }

    pub fn is_finite(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite()
    }
}

/// A marker projected into display space (Web Mercator meters).
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectedMarker {
    pub x: f64,
    pub y: f64,
    pub label: String,
}
