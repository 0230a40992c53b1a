//! Per-point reprojection of validated rings into display space.

use crate::domain::Ring;
use crate::geometry::crs::{self, CrsClass};
use crate::geometry::grid;
use crate::geometry::mercator;

/// Reproject one point of unknown reference system into display meters.
///
/// Returns `None` when the conversion fails to produce finite coordinates;
/// the caller drops the point instead of aborting the geometry.
pub fn point_to_display(x: f64, y: f64) -> Option<(f64, f64)> {
    if !x.is_finite() || !y.is_finite() {
        return None;
    }

    let (lon, lat) = match crs::classify(x, y) {
        CrsClass::Geodetic => (x, y),
        CrsClass::EastingNorthing => grid::grid_to_geodetic(x, y)?,
    };

    let (dx, dy) = mercator::geodetic_to_display(lon, lat);
    (dx.is_finite() && dy.is_finite()).then_some((dx, dy))
}

/// Reproject a ring point by point. A ring left with fewer than 3 points
/// after dropping failed conversions is discarded entirely.
pub fn ring_to_display(ring: &[(f64, f64)]) -> Option<Ring> {
    let projected: Ring = ring
        .iter()
        .filter_map(|&(x, y)| point_to_display(x, y))
        .collect();

    (projected.len() >= 3).then_some(projected)
}

/// Reproject every ring, keeping ring order for the survivors.
pub fn rings_to_display(rings: &[Ring]) -> Vec<Ring> {
    rings.iter().filter_map(|ring| ring_to_display(ring)).collect()
}
