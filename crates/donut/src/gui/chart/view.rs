use super::model::State;
use super::{FONT_FACE, STROKE_WIDTH};
use crate::gui::theme::ChartColors;
use cairo::Context;
use palette::Srgba;
use std::f64::consts::PI;
use wedge::{AngleRange, Point, Slice};

fn set_source(cr: &Context, color: Srgba<f64>) {
    let (r, g, b, a) = color.into_components();
    cr.set_source_rgba(r, g, b, a);
}

struct SliceRenderer<'a> {
    slice: &'a Slice,
    range: AngleRange,
    center: Point,
    radius: f64,
}

impl<'a> SliceRenderer<'a> {
    fn new(slice: &'a Slice, range: AngleRange, center: Point, radius: f64) -> Self {
        Self {
            slice,
            range,
            center,
            radius,
        }
    }

    fn draw(&self, cr: &Context, colors: &ChartColors) -> Result<(), cairo::Error> {
        cr.new_path();
        cr.move_to(self.center.x, self.center.y);
        cr.arc(
            self.center.x,
            self.center.y,
            self.radius,
            self.range.start,
            self.range.end,
        );
        cr.close_path();

        set_source(cr, self.slice.color.to_srgba());
        cr.fill_preserve()?;

        set_source(cr, colors.stroke);
        cr.set_line_width(STROKE_WIDTH);
        cr.stroke()
    }
}

/// Draws the chart in surface units: background, the visible part of every slice, then
/// the hole and its label on top.
pub fn draw(cr: &Context, state: &State, colors: &ChartColors) -> Result<(), cairo::Error> {
    set_source(cr, colors.canvas);
    cr.paint()?;

    let center = state.chart.surface_center();
    let radius = state.chart.options().slice_radius;

    for (i, slice) in state.chart.slices().iter().enumerate() {
        if let Some(range) = state.animator.visible_range(i) {
            SliceRenderer::new(slice, range, center, radius).draw(cr, colors)?;
        }
    }

    draw_center(cr, state, colors)
}

fn draw_center(cr: &Context, state: &State, colors: &ChartColors) -> Result<(), cairo::Error> {
    let options = state.chart.options();
    let center = state.chart.surface_center();

    cr.new_path();
    cr.arc(center.x, center.y, options.center_radius, 0.0, 2.0 * PI);
    set_source(cr, colors.canvas);
    cr.fill_preserve()?;
    set_source(cr, colors.stroke);
    cr.set_line_width(STROKE_WIDTH);
    cr.stroke()?;

    if options.name.is_empty() {
        return Ok(());
    }

    set_source(cr, colors.text);
    cr.select_font_face(FONT_FACE, cairo::FontSlant::Normal, cairo::FontWeight::Normal);
    cr.set_font_size(options.font_size);
    // horizontally centered, baseline on the center line
    let ext = cr.text_extents(&options.name)?;
    cr.move_to(center.x - ext.x_bearing() - ext.width() / 2.0, center.y);
    cr.show_text(&options.name)
}
