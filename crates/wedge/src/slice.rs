use crate::color::ColorSpec;
use crate::error::ChartError;
use crate::options::ChartOptions;
use derive_more::{AsRef, Deref, Display, From, Into};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Percent totals within this distance of 100 count as complete.
pub const PERCENT_EPSILON: f64 = 1e-9;

/// Decimal places shown for a percentage; anything finer is summation noise.
const PERCENT_DECIMALS: usize = 6;

/// `33.400000000000006` prints as `33.4`, `20.0` as `20`.
pub fn format_percent(percent: f64) -> String {
    let fixed = format!("{:.*}", PERCENT_DECIMALS, percent);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" => "0".to_string(),
        _ => trimmed.to_string(),
    }
}

#[derive(
    Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Display, Deref, From, Into, AsRef,
)]
#[serde(transparent)]
pub struct SliceName(String);

crate::impl_string_newtype!(SliceName);

/// One wedge of the chart: a share of the whole in percent, a fill and a label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slice {
    pub percent: f64,
    pub color: ColorSpec,
    pub name: SliceName,
}

impl Slice {
    pub fn new(percent: f64, color: ColorSpec, name: impl Into<String>) -> Self {
        Self {
            percent,
            color,
            name: SliceName::new(name),
        }
    }

    /// Text shown in the hover tooltip.
    pub fn tooltip_text(&self) -> String {
        format!("{} {}%", self.name, format_percent(self.percent))
    }
}

impl fmt::Display for Slice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}%)", self.name, format_percent(self.percent))
    }
}

/// Validated slices whose percentages add up to 100.
///
/// When the input falls short, a filler slice styled by
/// [`ChartOptions::empty_slice_color`] and [`ChartOptions::empty_slice_name`] is
/// appended to cover the rest.
#[derive(Debug, Clone, PartialEq)]
pub struct Slices {
    items: Vec<Slice>,
    filled: bool,
}

impl Slices {
    pub fn new(mut items: Vec<Slice>, options: &ChartOptions) -> Result<Self, ChartError> {
        if items.is_empty() {
            return Err(ChartError::NoSlices);
        }

        for (index, slice) in items.iter().enumerate() {
            if !slice.percent.is_finite() {
                return Err(ChartError::NonFinitePercent { index });
            }
            if slice.percent < 0.0 {
                return Err(ChartError::NegativePercent {
                    index,
                    percent: slice.percent,
                });
            }
        }

        let total: f64 = items.iter().map(|s| s.percent).sum();
        if total > 100.0 + PERCENT_EPSILON {
            return Err(ChartError::TotalExceeded { total });
        }

        let filled = total < 100.0 - PERCENT_EPSILON;
        if filled {
            items.push(Slice {
                percent: 100.0 - total,
                color: options.empty_slice_color,
                name: SliceName::new(options.empty_slice_name.clone()),
            });
        }

        Ok(Self { items, filled })
    }

    pub fn get(&self, index: usize) -> Option<&Slice> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slice> {
        self.items.iter()
    }

    /// Whether a filler slice was appended.
    pub fn has_filler(&self) -> bool {
        self.filled
    }

    pub fn percents(&self) -> Vec<f64> {
        self.items.iter().map(|s| s.percent).collect()
    }
}

impl<'a> IntoIterator for &'a Slices {
    type Item = &'a Slice;
    type IntoIter = std::slice::Iter<'a, Slice>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
