pub mod animation;
pub mod app;
pub mod chart;
pub mod legend;
pub mod snapshot;
pub mod theme;
