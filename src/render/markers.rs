//! Point marker projection into display and screen space.

use crate::domain::{MarkerPoint, ProjectedMarker};
use crate::geometry::mercator;
use crate::render::path::PathMapper;

/// A marker mapped all the way to preview pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct ScreenMarker {
    pub x: f64,
    pub y: f64,
    pub label: String,
}

/// Project markers into display meters.
///
/// Markers with non-finite coordinates are dropped individually; a bad
/// marker never discards the others or affects the boundary.
pub fn project_markers(markers: &[MarkerPoint]) -> Vec<ProjectedMarker> {
    markers
        .iter()
        .filter(|marker| marker.is_finite())
        .map(|marker| {
            let (x, y) = mercator::geodetic_to_display(marker.lon, marker.lat);
            ProjectedMarker {
                x,
                y,
                label: marker.label.clone(),
            }
        })
        .collect()
}

/// Map projected markers through the same surface transform as the boundary
/// so overlays stay in register on a static preview.
pub fn markers_to_screen(markers: &[ProjectedMarker], mapper: &PathMapper) -> Vec<ScreenMarker> {
    markers
        .iter()
        .map(|marker| {
            let (x, y) = mapper.to_screen(marker.x, marker.y);
            ScreenMarker {
                x,
                y,
                label: marker.label.clone(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_finite_markers_are_dropped_individually() {
        let markers = vec![
            MarkerPoint::new(-0.12, 51.50, "A"),
            MarkerPoint::new(f64::NAN, 51.51, "B"),
            MarkerPoint::new(-0.10, 51.52, "C"),
            MarkerPoint::new(-0.11, f64::INFINITY, "D"),
        ];

        let projected = project_markers(&markers);
        assert_eq!(projected.len(), 2);
        assert_eq!(projected[0].label, "A");
        assert_eq!(projected[1].label, "C");
    }

    #[test]
    fn test_empty_marker_list_is_fine() {
        assert!(project_markers(&[]).is_empty());
    }

    #[test]
    fn test_markers_project_into_display_bounds() {
        let markers = vec![MarkerPoint::new(-0.12, 51.50, "Electrician")];
        let projected = project_markers(&markers);

        assert!(projected[0].x.abs() < mercator::MAX_EXTENT);
        assert!(projected[0].y.abs() < mercator::MAX_EXTENT);
    }

    #[test]
    fn test_markers_stay_in_register_with_boundary() {
        use crate::config::RenderTarget;
        use crate::geometry::Bounds;

        // Boundary ring and a marker at its exact center
        let rings = vec![vec![(-0.20, 51.54), (-0.16, 51.54), (-0.16, 51.57), (-0.20, 51.57)]
            .iter()
            .map(|&(lon, lat)| mercator::geodetic_to_display(lon, lat))
            .collect::<Vec<_>>()];
        let bounds = Bounds::from_rings(&rings).unwrap();

        let target = RenderTarget::new(400.0, 300.0, 0.1);
        let mapper = PathMapper::fit(&bounds, &target).unwrap();

        let (center_x, center_y) = bounds.center();
        let on_screen = markers_to_screen(
            &[ProjectedMarker {
                x: center_x,
                y: center_y,
                label: "Center".to_string(),
            }],
            &mapper,
        );

        // The extent midpoint lands at the middle of the drawing surface
        assert_eq!(on_screen.len(), 1);
        assert!((on_screen[0].x - 200.0).abs() < 1e-6);
        assert!((on_screen[0].y - 150.0).abs() < 1e-6);
    }
}
