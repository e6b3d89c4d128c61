//! Geometry and state for animated donut charts.
//!
//! Slices are laid out clockwise from the +x axis. Each slice gets a
//! [`CollisionRecord`](geometry::CollisionRecord) holding the two lines through the chart
//! center at its start and end angles, so hover hit-testing is a handful of half-plane
//! sign checks instead of trigonometry per pointer event.

pub mod animation;
pub mod chart;
pub mod color;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod macros;
pub mod options;
pub mod slice;

pub use animation::{AnimationState, Animator, TickOutcome};
pub use chart::Chart;
pub use color::ColorSpec;
pub use error::{AnimationError, ChartError, ColorError};
pub use geometry::{
    AngleRange, Boundary, ChartGeometry, CollisionRecord, Coverage, Edge, Point,
};
pub use hit::{HitTester, Hover};
pub use options::ChartOptions;
pub use slice::{Slice, SliceName, Slices};

/// Logical edge length of the chart surface, in pointer units.
pub const LOGICAL_SIZE: f64 = 500.0;
/// Drawing-surface units per pointer unit.
pub const SURFACE_SCALE: f64 = 2.0;
/// Edge length of the drawing surface.
pub const SURFACE_SIZE: f64 = LOGICAL_SIZE * SURFACE_SCALE;
