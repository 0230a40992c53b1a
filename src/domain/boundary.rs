use serde::Deserialize;

/// A single boundary loop as an ordered list of coordinate pairs.
///
/// The semantic meaning of the pairs (lon/lat degrees, grid meters, or
/// pixels) depends on which pipeline stage produced them; stages are never
/// mixed within one ring.
pub type Ring = Vec<(f64, f64)>;

/// GeoJSON-shaped geometry as supplied by a boundary source, before any
/// validation. `coordinates` stays untyped until the normalizer decodes it.
#[derive(Debug, Clone, Deserialize)]
pub struct RawGeometry {
    #[serde(rename = "type")]
    pub geometry_type: String,
    pub coordinates: serde_json::Value,
}

/// Validated boundary geometry. Only the two polygon variants exist; any
/// other declared type is rejected during normalization, so unsupported
/// shapes are a compile-checked match arm rather than a runtime surprise.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Polygon(Vec<Ring>),
    MultiPolygon(Vec<Vec<Ring>>),
}

impl Geometry {
    /// Flatten into a single ring list, sub-polygon order preserved.
    ///
    /// Holes are not distinguished from exteriors: outline rendering treats
    /// every ring the same way.
    pub fn into_rings(self) -> Vec<Ring> {
        match self {
            Geometry::Polygon(rings) => rings,
            Geometry::MultiPolygon(polygons) => polygons.into_iter().flatten().collect(),
        }
    }

    /// Total ring count across all sub-polygons.
    pub fn ring_count(&self) -> usize {
        match self {
            Geometry::Polygon(rings) => rings.len(),
            Geometry::MultiPolygon(polygons) => polygons.iter().map(Vec::len).sum(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_raw_geometry() {
        let json = r#"{"type": "Polygon", "coordinates": [[[0.0, 51.0], [0.1, 51.0], [0.1, 51.1], [0.0, 51.0]]]}"#;
        let raw: RawGeometry = serde_json::from_str(json).unwrap();

        assert_eq!(raw.geometry_type, "Polygon");
        assert!(raw.coordinates.is_array());
    }

    #[test]
    fn test_into_rings_flattens_multi_polygon() {
        let geometry = Geometry::MultiPolygon(vec![
            vec![vec![(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]],
            vec![
                vec![(5.0, 5.0), (6.0, 5.0), (6.0, 6.0)],
                vec![(5.2, 5.2), (5.8, 5.2), (5.8, 5.8)],
            ],
        ]);

        assert_eq!(geometry.ring_count(), 3);

        let rings = geometry.into_rings();
        assert_eq!(rings.len(), 3);
        // Sub-polygon order is preserved
        assert_eq!(rings[0][0], (0.0, 0.0));
        assert_eq!(rings[2][0], (5.2, 5.2));
    }
}
