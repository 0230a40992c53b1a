pub mod fit;
pub mod markers;
pub mod path;

pub use fit::{MapView, fit_bounds};
pub use markers::{ScreenMarker, markers_to_screen, project_markers};
pub use path::{PathMapper, render_paths};
