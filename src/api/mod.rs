pub mod boundary;
pub mod markers;

pub use boundary::{BoundarySource, HttpBoundarySource};
pub use markers::{HttpMarkerSource, MarkerRecord, MarkerSource, to_marker_points};
