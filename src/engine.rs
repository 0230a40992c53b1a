//! End-to-end boundary rendering pipeline.
//!
//! Raw geometry flows: normalize -> per-point CRS detection and reprojection
//! -> extent -> either pixel-space path commands (static preview) or a
//! center/zoom view fit (interactive map). Every step is a pure transform
//! over owned values; nothing here performs I/O or touches shared state.

use crate::api::BoundarySource;
use crate::config::{MapViewport, RenderTarget};
use crate::domain::{RawGeometry, Ring};
use crate::error::RenderError;
use crate::geometry::{Bounds, normalize, reproject, simplify};
use crate::render::{MapView, fit_bounds, render_paths};

/// Rings past this vertex count are thinned before preview path emission.
const SIMPLIFY_THRESHOLD: usize = 400;

/// A boundary reprojected into display space with its extent.
/// Immutable once built; safe to share across render requests.
#[derive(Debug, Clone)]
pub struct ProjectedBoundary {
    pub rings: Vec<Ring>,
    pub bounds: Bounds,
}

/// Output of the static preview renderer.
#[derive(Debug, Clone)]
pub struct PreviewRender {
    /// One path command string per ring
    pub paths: Vec<String>,
    pub width_px: f64,
    pub height_px: f64,
}

impl PreviewRender {
    /// All rings as one multi-subpath expression, so holes and disjoint
    /// polygons render correctly under a single fill rule.
    pub fn combined_path(&self) -> String {
        self.paths.join(" ")
    }
}

/// Output for an interactive pan/zoom consumer: the destination view state
/// plus the projected vector geometry to draw over the base tile layer.
#[derive(Debug, Clone)]
pub struct MapRender {
    pub view: MapView,
    pub rings: Vec<Ring>,
}

/// Normalize and reproject a raw boundary into display space.
pub fn project_boundary(raw: &RawGeometry) -> Result<ProjectedBoundary, RenderError> {
    let (rings, _report) = normalize::normalize(raw)?;

    let projected = reproject::rings_to_display(&rings);
    let bounds = Bounds::from_rings(&projected).ok_or(RenderError::NoExtent)?;

    Ok(ProjectedBoundary {
        rings: projected,
        bounds,
    })
}

/// Render a raw boundary as preview path commands on the given surface.
pub fn render_preview(
    raw: &RawGeometry,
    target: &RenderTarget,
) -> Result<PreviewRender, RenderError> {
    let boundary = project_boundary(raw)?;
    Ok(render_projected_preview(&boundary, target))
}

/// Preview rendering for an already-projected boundary (cached or fresh).
pub fn render_projected_preview(
    boundary: &ProjectedBoundary,
    target: &RenderTarget,
) -> PreviewRender {
    let tolerance = simplify::tolerance_for(&boundary.bounds);
    let rings: Vec<Ring> = boundary
        .rings
        .iter()
        .map(|ring| {
            if tolerance > 0.0 && ring.len() > SIMPLIFY_THRESHOLD {
                simplify::simplify_ring(ring, tolerance)
            } else {
                ring.clone()
            }
        })
        .collect();

    PreviewRender {
        paths: render_paths(&rings, &boundary.bounds, target),
        width_px: target.width_px,
        height_px: target.height_px,
    }
}

/// Compute the interactive map destination for a raw boundary.
pub fn fit_view(raw: &RawGeometry, viewport: &MapViewport) -> Result<MapRender, RenderError> {
    let boundary = project_boundary(raw)?;
    let view = fit_bounds(&boundary.bounds, viewport);

    Ok(MapRender {
        view,
        rings: boundary.rings,
    })
}

/// Fetch a boundary by slug and render its preview. A source failure comes
/// back as [`RenderError::SourceUnavailable`] so the UI can show an explicit
/// unavailable placeholder instead of an empty shape.
pub fn render_preview_from_source(
    source: &dyn BoundarySource,
    slug: &str,
    target: &RenderTarget,
) -> Result<PreviewRender, RenderError> {
    let raw = source
        .fetch_boundary(slug)
        .map_err(|e| RenderError::SourceUnavailable(e.to_string()))?;
    render_preview(&raw, target)
}

/// Fetch a boundary by slug and compute its interactive view fit.
pub fn fit_view_from_source(
    source: &dyn BoundarySource,
    slug: &str,
    viewport: &MapViewport,
) -> Result<MapRender, RenderError> {
    let raw = source
        .fetch_boundary(slug)
        .map_err(|e| RenderError::SourceUnavailable(e.to_string()))?;
    fit_view(&raw, viewport)
}
