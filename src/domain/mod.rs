pub mod boundary;
pub mod marker;

pub use boundary::{Geometry, RawGeometry, Ring};
pub use marker::{MarkerPoint, ProjectedMarker};
