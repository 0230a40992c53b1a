use geo::{LineString, Simplify};

use crate::geometry::Bounds;

/// Thin a dense ring with Douglas-Peucker before path emission.
///
/// Short rings pass through untouched, and a ring that would collapse below
/// a drawable polygon falls back to the original points.
pub fn simplify_ring(points: &[(f64, f64)], epsilon: f64) -> Vec<(f64, f64)> {
    if points.len() < 5 {
        return points.to_vec();
    }

    let line: LineString<f64> = points.iter().map(|&(x, y)| geo::coord! { x: x, y: y }).collect();

    let simplified = line.simplify(&epsilon);

    if simplified.0.len() < 4 {
        return points.to_vec();
    }

    simplified.0.into_iter().map(|c| (c.x, c.y)).collect()
}

/// Pick a simplification tolerance (display meters) from the extent size.
/// Small regions keep full detail; country-scale boundaries shed vertices
/// no preview pixel would ever show.
pub fn tolerance_for(bounds: &Bounds) -> f64 {
    let max_dim = bounds.width().max(bounds.height());

    if max_dim < 5_000.0 {
        0.0
    } else if max_dim < 50_000.0 {
        10.0
    } else if max_dim < 200_000.0 {
        50.0
    } else {
        200.0
    }
}
