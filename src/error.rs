use thiserror::Error;

/// Geometry-level failures reported to the caller.
///
/// Per-point and per-ring problems (non-finite coordinates, rings that
/// collapse below 3 points, degenerate extents) are recovered by dropping
/// the offending data and never surface here, so the UI can distinguish
/// "no boundary data" from "boundary present but partially dirty".
#[derive(Debug, Error)]
pub enum RenderError {
    /// The boundary declared a geometry type this engine does not render.
    #[error("unsupported geometry type: {0}")]
    InvalidGeometryType(String),

    /// Every ring was dropped during validation.
    #[error("geometry empty after validation")]
    EmptyAfterValidation,

    /// No points survived reprojection, so the bounding box is undefined.
    #[error("boundary has no projectable points")]
    NoExtent,

    /// The boundary collaborator could not supply data.
    #[error("boundary source unavailable: {0}")]
    SourceUnavailable(String),
}
