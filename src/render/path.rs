//! Mapping projected rings onto a fixed drawing surface as path commands.

use crate::config::RenderTarget;
use crate::domain::Ring;
use crate::geometry::Bounds;

/// Affine map from display meters into pixel space: uniform scale, centering
/// offsets, and a Y flip (display Y grows north, screen Y grows down).
#[derive(Debug, Clone)]
pub struct PathMapper {
    scale: f64,
    offset_x: f64,
    offset_y: f64,
    height_px: f64,
    min_x: f64,
    min_y: f64,
}

impl PathMapper {
    /// Build a mapper that fits `bounds` into `target` with the configured
    /// padding fraction.
    ///
    /// Returns `None` for a degenerate extent (zero width or height): the
    /// caller renders nothing instead of dividing by zero.
    pub fn fit(bounds: &Bounds, target: &RenderTarget) -> Option<Self> {
        let bbox_width = bounds.width();
        let bbox_height = bounds.height();
        if bbox_width <= 0.0 || bbox_height <= 0.0 {
            return None;
        }

        let scale = (target.width_px / bbox_width).min(target.height_px / bbox_height)
            * (1.0 - target.padding_fraction);
        if !scale.is_finite() || scale <= 0.0 {
            return None;
        }

        let offset_x = (target.width_px - bbox_width * scale) / 2.0;
        let offset_y = (target.height_px - bbox_height * scale) / 2.0;

        Some(Self {
            scale,
            offset_x,
            offset_y,
            height_px: target.height_px,
            min_x: bounds.min_x,
            min_y: bounds.min_y,
        })
    }

    /// Map one display-space point to pixels.
    pub fn to_screen(&self, x: f64, y: f64) -> (f64, f64) {
        let screen_x = (x - self.min_x) * self.scale + self.offset_x;
        let screen_y = self.height_px - ((y - self.min_y) * self.scale + self.offset_y);
        (screen_x, screen_y)
    }
}

/// Render one ring as an SVG-style path command string:
/// move to the first point, line to the rest, close.
fn ring_to_path(ring: &[(f64, f64)], mapper: &PathMapper) -> String {
    let mut d = String::new();

    for (i, &(x, y)) in ring.iter().enumerate() {
        let (sx, sy) = mapper.to_screen(x, y);
        if i == 0 {
            d += &format!("M {:.2} {:.2}", sx, sy);
        } else {
            d += &format!(" L {:.2} {:.2}", sx, sy);
        }
    }
    d += " Z";

    d
}

/// Render every ring into its own path command string, ring order preserved.
/// A degenerate extent yields no paths at all.
pub fn render_paths(rings: &[Ring], bounds: &Bounds, target: &RenderTarget) -> Vec<String> {
    let Some(mapper) = PathMapper::fit(bounds, target) else {
        return Vec::new();
    };

    rings
        .iter()
        .filter(|ring| !ring.is_empty())
        .map(|ring| ring_to_path(ring, &mapper))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn target_400x300() -> RenderTarget {
        RenderTarget::new(400.0, 300.0, 0.1)
    }

    #[test]
    fn test_square_fills_padded_target() {
        let rings = vec![vec![(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0)]];
        let bounds = Bounds::from_rings(&rings).unwrap();

        let paths = render_paths(&rings, &bounds, &target_400x300());
        assert_eq!(paths.len(), 1);
        assert!(paths[0].starts_with("M "));
        assert!(paths[0].ends_with(" Z"));

        // Height is the limiting dimension: scale = 300/100 * 0.9 = 2.7,
        // so the square spans 270px centered in both axes.
        let mapper = PathMapper::fit(&bounds, &target_400x300()).unwrap();
        let (x0, _) = mapper.to_screen(0.0, 0.0);
        let (x1, _) = mapper.to_screen(100.0, 0.0);
        assert!((x1 - x0 - 270.0).abs() < 1e-9);
        assert!((x0 - 65.0).abs() < 1e-9);
    }

    #[test]
    fn test_y_axis_is_flipped() {
        let rings = vec![vec![(0.0, 0.0), (100.0, 0.0), (100.0, 100.0), (0.0, 100.0)]];
        let bounds = Bounds::from_rings(&rings).unwrap();
        let mapper = PathMapper::fit(&bounds, &target_400x300()).unwrap();

        let (_, y_south) = mapper.to_screen(0.0, 0.0);
        let (_, y_north) = mapper.to_screen(0.0, 100.0);

        // North (larger display y) must come out nearer the top of the surface
        assert!(y_north < y_south);
    }

    #[test]
    fn test_degenerate_extent_emits_no_paths() {
        let line = vec![vec![(5.0, 0.0), (5.0, 10.0), (5.0, 20.0)]];
        let bounds = Bounds::from_rings(&line).unwrap();

        let paths = render_paths(&line, &bounds, &target_400x300());
        assert!(paths.is_empty());
    }

    #[test]
    fn test_screen_coordinates_stay_inside_target() {
        let rings = vec![vec![(-50.0, -20.0), (70.0, -20.0), (70.0, 40.0), (-50.0, 40.0)]];
        let bounds = Bounds::from_rings(&rings).unwrap();
        let mapper = PathMapper::fit(&bounds, &target_400x300()).unwrap();

        for &(x, y) in &rings[0] {
            let (sx, sy) = mapper.to_screen(x, y);
            assert!((0.0..=400.0).contains(&sx));
            assert!((0.0..=300.0).contains(&sy));
        }
    }
}
