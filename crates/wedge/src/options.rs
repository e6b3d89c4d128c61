use crate::color::ColorSpec;
use serde::{Deserialize, Serialize};

pub const CENTER_RADIUS: f64 = 150.0;
pub const SLICE_RADIUS: f64 = 400.0;
pub const FONT_SIZE: f64 = 33.0;
pub const STROKE_COLOR: ColorSpec = ColorSpec::rgb(255, 255, 255);
pub const TEXT_COLOR: ColorSpec = ColorSpec::rgb(255, 255, 255);
pub const CANVAS_COLOR: ColorSpec = ColorSpec::rgb(0x1e, 0x1e, 0x1e);
pub const EMPTY_SLICE_COLOR: ColorSpec = ColorSpec::rgb(0x2d, 0x2d, 0x2d);
pub const EMPTY_SLICE_NAME: &str = "Other";

/// Construction options for a chart. Lengths are in drawing-surface units.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ChartOptions {
    /// Radius of the hole in the middle.
    pub center_radius: f64,
    /// Outer radius of the slices.
    pub slice_radius: f64,
    pub stroke_color: ColorSpec,
    pub text_color: ColorSpec,
    pub font_size: f64,
    /// Label drawn in the hole.
    pub name: String,
    pub empty_slice_color: ColorSpec,
    pub empty_slice_name: String,
    pub canvas_color: ColorSpec,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            center_radius: CENTER_RADIUS,
            slice_radius: SLICE_RADIUS,
            stroke_color: STROKE_COLOR,
            text_color: TEXT_COLOR,
            font_size: FONT_SIZE,
            name: String::new(),
            empty_slice_color: EMPTY_SLICE_COLOR,
            empty_slice_name: EMPTY_SLICE_NAME.to_string(),
            canvas_color: CANVAS_COLOR,
        }
    }
}

impl ChartOptions {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }
}
