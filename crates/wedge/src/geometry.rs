//! Angle ranges and the boundary lines used for hover hit-testing.
//!
//! Screen space has its y axis pointing down, so angles grow clockwise starting at the
//! +x axis. A point at angle `φ` and radius `r` around center `c` sits at
//! `(c.x + r·cos φ, c.y + r·sin φ)`.

use std::f64::consts::{FRAC_PI_2, PI, TAU};
use strum::{EnumIter, IntoEnumIterator};

/// Radians per percent of the whole.
pub const PERCENT_TO_RADIANS: f64 = TAU / 100.0;

/// Decimal places kept when comparing a boundary angle with an axis angle.
const ANGLE_PRECISION: f64 = 1e5;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// The point at `angle` radians and `radius` away from `self`.
    pub fn polar(&self, angle: f64, radius: f64) -> Self {
        Self::new(
            self.x + radius * angle.cos(),
            self.y + radius * angle.sin(),
        )
    }

    pub fn distance_squared(&self, other: Point) -> f64 {
        let (dx, dy) = (other.x - self.x, other.y - self.y);
        dx * dx + dy * dy
    }
}

/// `[start, end)` in radians, clockwise from the +x axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AngleRange {
    pub start: f64,
    pub end: f64,
}

impl AngleRange {
    pub fn from_percent(start_percent: f64, percent: f64) -> Self {
        Self {
            start: start_percent * PERCENT_TO_RADIANS,
            end: (start_percent + percent) * PERCENT_TO_RADIANS,
        }
    }

    pub fn span(&self) -> f64 {
        self.end - self.start
    }

    pub fn mid(&self) -> f64 {
        (self.start + self.end) / 2.0
    }

    /// Lays out consecutive ranges for `percents`, starting at angle 0.
    pub fn partition(percents: impl IntoIterator<Item = f64>) -> Vec<Self> {
        percents
            .into_iter()
            .scan(0.0, |total, percent| {
                let range = Self::from_percent(*total, percent);
                *total += percent;
                Some(range)
            })
            .collect()
    }
}

/// Angle equality at five decimal places, absorbing drift from accumulated sums.
pub fn same_angle(a: f64, b: f64) -> bool {
    (a * ANGLE_PRECISION).round() == (b * ANGLE_PRECISION).round()
}

/// The angles at which a line through the center is axis-aligned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum AxisAngle {
    Zero,
    Quarter,
    Half,
    ThreeQuarter,
    Full,
}

impl AxisAngle {
    pub fn radians(self) -> f64 {
        match self {
            Self::Zero => 0.0,
            Self::Quarter => FRAC_PI_2,
            Self::Half => PI,
            Self::ThreeQuarter => 3.0 * FRAC_PI_2,
            Self::Full => TAU,
        }
    }

    pub fn matching(angle: f64) -> Option<Self> {
        Self::iter().find(|axis| same_angle(axis.radians(), angle))
    }
}

/// Direction of a vertical boundary ray, in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerticalRay {
    /// 90°.
    Down,
    /// 270°.
    Up,
}

/// Direction of a horizontal boundary ray, in screen space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalRay {
    /// 0° or 360°.
    Right,
    /// 180°.
    Left,
}

/// The line through the chart center at a slice's start or end angle.
///
/// Axis-aligned boundaries get their own variants: a vertical line has no finite slope,
/// and `tan` near 0° or 180° is noisy enough to flip the sign test for points close to the
/// horizontal axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Boundary {
    /// `y = slope·x + intercept`.
    Line { slope: f64, intercept: f64 },
    /// `x = x`, with the ray pointing up or down from the center.
    Vertical { x: f64, ray: VerticalRay },
    /// `y = y`, with the ray pointing left or right from the center.
    Horizontal { y: f64, ray: HorizontalRay },
}

impl Boundary {
    pub fn classify(angle: f64, center: Point) -> Self {
        match AxisAngle::matching(angle) {
            Some(AxisAngle::Quarter) => Self::Vertical {
                x: center.x,
                ray: VerticalRay::Down,
            },
            Some(AxisAngle::ThreeQuarter) => Self::Vertical {
                x: center.x,
                ray: VerticalRay::Up,
            },
            Some(AxisAngle::Zero | AxisAngle::Full) => Self::Horizontal {
                y: center.y,
                ray: HorizontalRay::Right,
            },
            Some(AxisAngle::Half) => Self::Horizontal {
                y: center.y,
                ray: HorizontalRay::Left,
            },
            None => {
                let slope = angle.tan();
                Self::Line {
                    slope,
                    intercept: center.y - slope * center.x,
                }
            }
        }
    }

    /// `y − slope·x − intercept`; only meaningful for [`Boundary::Line`].
    pub fn offset(&self, p: Point) -> f64 {
        match *self {
            Self::Line { slope, intercept } => p.y - slope * p.x - intercept,
            Self::Vertical { .. } | Self::Horizontal { .. } => 0.0,
        }
    }

    pub fn is_axis_aligned(&self) -> bool {
        !matches!(self, Self::Line { .. })
    }
}

/// One side of a wedge: its angle, boundary line and sign convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub angle: f64,
    pub boundary: Boundary,
    /// The angle lies at or right of the vertical axis (≤ 90° or ≥ 270°). A ray there
    /// points into +x, which flips which side of the line is clockwise.
    pub rightward: bool,
}

impl Edge {
    pub fn new(angle: f64, center: Point) -> Self {
        Self {
            angle,
            boundary: Boundary::classify(angle, center),
            rightward: angle <= FRAC_PI_2 || angle >= 3.0 * FRAC_PI_2,
        }
    }

    /// Positive when `p` lies within half a turn clockwise of this edge, negative when it
    /// lies within half a turn counter-clockwise, zero on the line.
    pub fn side(&self, p: Point) -> f64 {
        match self.boundary {
            Boundary::Line { .. } => {
                let offset = self.boundary.offset(p);
                if self.rightward { offset } else { -offset }
            }
            Boundary::Vertical { x, ray: VerticalRay::Down } => x - p.x,
            Boundary::Vertical { x, ray: VerticalRay::Up } => p.x - x,
            Boundary::Horizontal { y, ray: HorizontalRay::Right } => p.y - y,
            Boundary::Horizontal { y, ray: HorizontalRay::Left } => y - p.y,
        }
    }

    /// `p` is clockwise past this edge, used for a wedge's start.
    pub fn leads(&self, p: Point) -> bool {
        self.side(p) > 0.0
    }

    /// `p` is counter-clockwise before this edge, used for a wedge's end.
    pub fn trails(&self, p: Point) -> bool {
        self.side(p) < 0.0
    }
}

/// How the start and end half-plane tests combine for a wedge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Coverage {
    /// Span of at most half a turn: the wedge is the intersection of both half-planes.
    Narrow,
    /// Span over half a turn: the wedge is their union.
    Wide,
    /// The wedge is the whole circle.
    Full,
}

impl Coverage {
    pub fn of(range: &AngleRange) -> Self {
        let span = range.span();
        if same_angle(span, TAU) || span > TAU {
            Self::Full
        } else if span > PI {
            Self::Wide
        } else {
            Self::Narrow
        }
    }
}

/// Everything needed to decide whether a point lies angularly within one slice.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionRecord {
    pub range: AngleRange,
    pub start: Edge,
    pub end: Edge,
    pub coverage: Coverage,
}

impl CollisionRecord {
    pub fn new(range: AngleRange, center: Point) -> Self {
        Self {
            range,
            start: Edge::new(range.start, center),
            end: Edge::new(range.end, center),
            coverage: Coverage::of(&range),
        }
    }

    /// Builds one record per slice percent, in order.
    pub fn build(percents: impl IntoIterator<Item = f64>, center: Point) -> Vec<Self> {
        AngleRange::partition(percents)
            .into_iter()
            .map(|range| Self::new(range, center))
            .collect()
    }

    /// Angular containment only; the radial gate lives in [`ChartGeometry`].
    pub fn contains(&self, p: Point) -> bool {
        let top = self.start.leads(p);
        let bottom = self.end.trails(p);
        match self.coverage {
            Coverage::Narrow => top && bottom,
            Coverage::Wide => top || bottom,
            Coverage::Full => true,
        }
    }
}

/// Where the chart sits in pointer space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChartGeometry {
    pub center: Point,
    pub inner_radius: f64,
    pub outer_radius: f64,
}

impl ChartGeometry {
    pub fn new(center: Point, inner_radius: f64, outer_radius: f64) -> Self {
        Self {
            center,
            inner_radius,
            outer_radius,
        }
    }

    /// Whether `p` lies on the ring between the hole and the outer edge.
    pub fn admits(&self, p: Point) -> bool {
        let d2 = self.center.distance_squared(p);
        d2 >= self.inner_radius * self.inner_radius && d2 <= self.outer_radius * self.outer_radius
    }

    pub fn mid_radius(&self) -> f64 {
        (self.inner_radius + self.outer_radius) / 2.0
    }
}
