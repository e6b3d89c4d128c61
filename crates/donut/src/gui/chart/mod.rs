pub mod model;
pub mod view;

pub use model::{CursorAction, State};
pub use view::draw;

/// Outline width for slices and the hole, in surface units.
pub const STROKE_WIDTH: f64 = 1.0;
pub const FONT_FACE: &str = "serif";
