use crate::animation::Animator;
use crate::error::ChartError;
use crate::geometry::{ChartGeometry, Point};
use crate::hit::{HitTester, Hover};
use crate::options::ChartOptions;
use crate::slice::{Slice, Slices};
use crate::{LOGICAL_SIZE, SURFACE_SCALE, SURFACE_SIZE};

/// A donut chart: validated slices plus their precomputed hit-test geometry.
///
/// Built once and never mutated; each chart owns its own slices and records.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    options: ChartOptions,
    slices: Slices,
    hit_tester: HitTester,
}

impl Chart {
    pub fn new(options: ChartOptions, input: Vec<Slice>) -> Result<Self, ChartError> {
        let (inner, outer) = (options.center_radius, options.slice_radius);
        if !(inner > 0.0 && inner < outer && outer.is_finite()) {
            return Err(ChartError::InvalidRadii { inner, outer });
        }

        let slices = Slices::new(input, &options)?;
        let center = LOGICAL_SIZE / 2.0;
        let geometry = ChartGeometry::new(
            Point::new(center, center),
            inner / SURFACE_SCALE,
            outer / SURFACE_SCALE,
        );
        let hit_tester = HitTester::new(geometry, &slices);

        log::debug!(
            "Built chart '{}' with {} slices{}",
            options.name,
            slices.len(),
            if slices.has_filler() { " (filler added)" } else { "" }
        );

        Ok(Self {
            options,
            slices,
            hit_tester,
        })
    }

    pub fn options(&self) -> &ChartOptions {
        &self.options
    }

    pub fn slices(&self) -> &Slices {
        &self.slices
    }

    pub fn hit_tester(&self) -> &HitTester {
        &self.hit_tester
    }

    /// Center of the drawing surface, in surface units.
    pub fn surface_center(&self) -> Point {
        Point::new(SURFACE_SIZE / 2.0, SURFACE_SIZE / 2.0)
    }

    /// `cursor` is in pointer space, relative to the chart's drawing area.
    pub fn hover(&self, cursor: Point) -> Hover {
        self.hit_tester.hover(cursor, &self.slices)
    }

    pub fn animator(&self) -> Animator {
        Animator::new(self.slices.percents())
    }
}
