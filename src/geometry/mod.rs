pub mod crs;
pub mod extent;
pub mod grid;
pub mod mercator;
pub mod normalize;
pub mod reproject;
pub mod simplify;

pub use crs::{CrsClass, classify};
pub use extent::Bounds;
pub use grid::grid_to_geodetic;
pub use mercator::{display_to_geodetic, geodetic_to_display};
pub use normalize::ValidationReport;
pub use reproject::rings_to_display;
pub use simplify::simplify_ring;
