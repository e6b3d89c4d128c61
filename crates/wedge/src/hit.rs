use crate::geometry::{ChartGeometry, CollisionRecord, Point};
use crate::slice::Slices;

/// What the tooltip should do after a pointer move.
#[derive(Debug, Clone, PartialEq)]
pub enum Hover {
    Show {
        index: usize,
        text: String,
        at: Point,
    },
    Hide,
}

impl Hover {
    pub fn index(&self) -> Option<usize> {
        match self {
            Self::Show { index, .. } => Some(*index),
            Self::Hide => None,
        }
    }
}

/// Finds the slice under a pointer using precomputed [`CollisionRecord`]s.
#[derive(Debug, Clone, PartialEq)]
pub struct HitTester {
    geometry: ChartGeometry,
    records: Vec<CollisionRecord>,
}

impl HitTester {
    pub fn new(geometry: ChartGeometry, slices: &Slices) -> Self {
        Self {
            geometry,
            records: CollisionRecord::build(slices.iter().map(|s| s.percent), geometry.center),
        }
    }

    pub fn geometry(&self) -> &ChartGeometry {
        &self.geometry
    }

    pub fn records(&self) -> &[CollisionRecord] {
        &self.records
    }

    /// Index of the first slice containing `p`, or `None` when `p` is in the hole, outside
    /// the chart, or exactly on a boundary no slice claims.
    pub fn hit(&self, p: Point) -> Option<usize> {
        if !self.geometry.admits(p) {
            return None;
        }
        self.records.iter().position(|record| record.contains(p))
    }

    pub fn hover(&self, p: Point, slices: &Slices) -> Hover {
        self.hit(p)
            .and_then(|index| slices.get(index).map(|slice| (index, slice)))
            .map_or(Hover::Hide, |(index, slice)| Hover::Show {
                index,
                text: slice.tooltip_text(),
                at: p,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::ColorSpec;
    use crate::options::ChartOptions;
    use crate::slice::Slice;
    use std::f64::consts::TAU;

    const CENTER: Point = Point { x: 250.0, y: 250.0 };

    fn setup(percents: &[f64]) -> (HitTester, Slices) {
        let input = percents
            .iter()
            .enumerate()
            .map(|(i, &p)| Slice::new(p, ColorSpec::rgb(0, 0, 0), format!("S{i}")))
            .collect();
        let slices = Slices::new(input, &ChartOptions::default()).unwrap();
        let geometry = ChartGeometry::new(CENTER, 75.0, 200.0);
        (HitTester::new(geometry, &slices), slices)
    }

    fn at_degrees(degrees: f64, radius: f64) -> Point {
        CENTER.polar(degrees.to_radians(), radius)
    }

    #[test]
    fn test_example_wide_slice_wins_at_180() {
        let (tester, slices) = setup(&[20.0, 55.0, 25.0]);
        let p = at_degrees(180.0, 137.5);

        assert_eq!(tester.hit(p), Some(1));
        assert_eq!(
            tester.hover(p, &slices),
            Hover::Show {
                index: 1,
                text: "S1 55%".to_string(),
                at: p,
            }
        );
    }

    #[test]
    fn test_midpoints_resolve_to_their_slice() {
        let cases: Vec<Vec<f64>> = vec![
            vec![20.0, 55.0, 25.0],
            vec![25.0, 25.0, 25.0, 25.0],
            vec![50.0, 50.0],
            vec![60.0, 40.0],
            vec![10.0, 60.0],
            vec![33.3, 33.3, 33.4],
            vec![5.0; 20],
            vec![1.0, 2.0, 3.0, 4.0, 90.0],
            vec![75.0, 25.0],
            vec![12.5, 12.5, 12.5, 12.5, 50.0],
        ];

        for percents in cases {
            let (tester, _) = setup(&percents);
            let mid_radius = tester.geometry().mid_radius();
            for (i, record) in tester.records().iter().enumerate() {
                let p = CENTER.polar(record.range.mid(), mid_radius);
                assert_eq!(tester.hit(p), Some(i), "{percents:?} slice {i}");
            }
        }
    }

    #[test]
    fn test_boundary_angle_ends_are_bounded() {
        // Each slice ends exactly on 90°, 180°, 270° or 360°.
        let (tester, _) = setup(&[25.0, 25.0, 25.0, 25.0]);
        for (i, quadrant_mid) in [45.0, 135.0, 225.0, 315.0].into_iter().enumerate() {
            for delta in [-40.0, -20.0, 0.0, 20.0, 40.0] {
                let p = at_degrees(quadrant_mid + delta, 100.0);
                assert_eq!(tester.hit(p), Some(i), "angle {}", quadrant_mid + delta);
            }
        }
    }

    #[test]
    fn test_half_turn_split() {
        let (tester, _) = setup(&[50.0]);
        assert_eq!(tester.records().len(), 2);
        assert_eq!(tester.hit(at_degrees(90.0, 150.0)), Some(0));
        assert_eq!(tester.hit(at_degrees(10.0, 150.0)), Some(0));
        assert_eq!(tester.hit(at_degrees(270.0, 150.0)), Some(1));
        assert_eq!(tester.hit(at_degrees(350.0, 150.0)), Some(1));
    }

    #[test]
    fn test_wide_slice_covers_both_sides_of_its_center() {
        // Slice 1 spans 36°..252°, centered at 144°.
        let (tester, _) = setup(&[10.0, 60.0, 30.0]);
        for degrees in [40.0, 90.0, 120.0, 144.0, 170.0, 200.0, 250.0] {
            assert_eq!(tester.hit(at_degrees(degrees, 150.0)), Some(1), "{degrees}°");
        }
        for degrees in [5.0, 30.0] {
            assert_eq!(tester.hit(at_degrees(degrees, 150.0)), Some(0), "{degrees}°");
        }
        for degrees in [255.0, 300.0, 355.0] {
            assert_eq!(tester.hit(at_degrees(degrees, 150.0)), Some(2), "{degrees}°");
        }
    }

    #[test]
    fn test_filler_slice_is_hit() {
        let (tester, slices) = setup(&[30.0, 40.0]);
        assert_eq!(slices.len(), 3);
        let hover = tester.hover(at_degrees(300.0, 120.0), &slices);
        assert_eq!(hover.index(), Some(2));
        let Hover::Show { text, .. } = hover else {
            panic!("expected tooltip");
        };
        assert_eq!(text, "Other 30%");
    }

    #[test]
    fn test_single_full_slice_covers_everything() {
        let (tester, _) = setup(&[100.0]);
        for degrees in [0.0, 90.0, 180.0, 270.0, 359.0] {
            assert_eq!(tester.hit(at_degrees(degrees, 100.0)), Some(0));
        }
    }

    #[test]
    fn test_outside_the_ring_is_none() {
        let (tester, slices) = setup(&[20.0, 55.0, 25.0]);
        for step in 0..36 {
            let angle = f64::from(step) * TAU / 36.0;
            for radius in [0.0, 10.0, 74.0, 200.5, 260.0, 1000.0] {
                let p = CENTER.polar(angle, radius);
                assert_eq!(tester.hit(p), None, "angle {angle}, radius {radius}");
                assert_eq!(tester.hover(p, &slices), Hover::Hide);
            }
        }
    }

    #[test]
    fn test_zero_percent_slice_is_never_hit() {
        let (tester, _) = setup(&[25.0, 0.0, 75.0]);
        for step in 0..72 {
            let p = CENTER.polar(f64::from(step) * TAU / 72.0 + 0.01, 150.0);
            assert_ne!(tester.hit(p), Some(1));
        }
    }
}
