//! Raw boundary decoding and ring validation.
//!
//! Turns the untyped `{type, coordinates}` shape a boundary source supplies
//! into a flat, validated ring list:
//! - Reject geometry types other than Polygon/MultiPolygon
//! - Drop malformed or non-finite points
//! - Drop rings left with fewer than 3 distinct points
//! - Preserve ring order for the survivors

use std::collections::HashSet;

use crate::domain::{Geometry, RawGeometry, Ring};
use crate::error::RenderError;

/// What validation dropped while normalizing a boundary.
#[derive(Debug, Default)]
pub struct ValidationReport {
    /// Points discarded for being malformed or non-finite
    pub points_dropped: usize,
    /// Rings discarded for having fewer than 3 distinct points left
    pub rings_dropped: usize,
    /// Warning messages for issues found
    pub warnings: Vec<String>,
}

impl ValidationReport {
    pub fn has_issues(&self) -> bool {
        self.points_dropped > 0 || self.rings_dropped > 0
    }

    pub fn summary(&self) -> String {
        if !self.has_issues() {
            "Boundary valid: no points or rings dropped".to_string()
        } else {
            format!(
                "Boundary issues: {} points dropped, {} rings dropped",
                self.points_dropped, self.rings_dropped
            )
        }
    }
}

/// Decode a raw geometry into the typed sum, dropping malformed positions.
///
/// Any declared type other than Polygon or MultiPolygon is a typed failure:
/// the caller must be able to distinguish "unsupported shape" from "empty".
pub fn decode(raw: &RawGeometry, report: &mut ValidationReport) -> Result<Geometry, RenderError> {
    match raw.geometry_type.as_str() {
        "Polygon" => Ok(Geometry::Polygon(decode_ring_list(&raw.coordinates, report))),
        "MultiPolygon" => {
            let polygons = raw
                .coordinates
                .as_array()
                .map(|polys| {
                    polys
                        .iter()
                        .map(|rings| decode_ring_list(rings, report))
                        .collect()
                })
                .unwrap_or_default();
            Ok(Geometry::MultiPolygon(polygons))
        }
        other => Err(RenderError::InvalidGeometryType(other.to_string())),
    }
}

/// Normalize a raw boundary into validated rings.
///
/// Returns the flat ring list (Polygon rings, or every sub-polygon's rings
/// concatenated) together with a report of what was dropped. A boundary with
/// no surviving rings is an [`RenderError::EmptyAfterValidation`] failure,
/// never an empty-looking success.
pub fn normalize(raw: &RawGeometry) -> Result<(Vec<Ring>, ValidationReport), RenderError> {
    let mut report = ValidationReport::default();
    let geometry = decode(raw, &mut report)?;

    let mut valid = Vec::with_capacity(geometry.ring_count());
    for (index, ring) in geometry.into_rings().into_iter().enumerate() {
        let before = ring.len();
        let kept: Ring = ring.into_iter().filter(|&(x, y)| x.is_finite() && y.is_finite()).collect();
        report.points_dropped += before - kept.len();

        if distinct_points(&kept) >= 3 {
            valid.push(kept);
        } else {
            report.rings_dropped += 1;
            report
                .warnings
                .push(format!("ring {} dropped: fewer than 3 distinct points", index));
        }
    }

    if valid.is_empty() {
        return Err(RenderError::EmptyAfterValidation);
    }
    Ok((valid, report))
}

fn decode_ring_list(value: &serde_json::Value, report: &mut ValidationReport) -> Vec<Ring> {
    let Some(rings) = value.as_array() else {
        return Vec::new();
    };

    rings
        .iter()
        .map(|ring| {
            let Some(positions) = ring.as_array() else {
                return Vec::new();
            };
            positions
                .iter()
                .filter_map(|position| {
                    let point = decode_position(position);
                    if point.is_none() {
                        report.points_dropped += 1;
                    }
                    point
                })
                .collect()
        })
        .collect()
}

/// A GeoJSON position: an array whose first two elements are numbers.
/// Any trailing elements (altitude) are ignored.
fn decode_position(value: &serde_json::Value) -> Option<(f64, f64)> {
    let position = value.as_array()?;
    let x = position.first()?.as_f64()?;
    let y = position.get(1)?.as_f64()?;
    Some((x, y))
}

fn distinct_points(ring: &Ring) -> usize {
    ring.iter()
        .map(|&(x, y)| (x.to_bits(), y.to_bits()))
        .collect::<HashSet<_>>()
        .len()
}
