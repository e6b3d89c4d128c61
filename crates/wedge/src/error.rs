use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ChartError {
    #[error("Chart needs at least one slice")]
    NoSlices,
    #[error("Slice {index} has negative percent {percent}")]
    NegativePercent { index: usize, percent: f64 },
    #[error("Slice {index} has a non-finite percent")]
    NonFinitePercent { index: usize },
    #[error("Slice percentages add up to {total}, more than 100")]
    TotalExceeded { total: f64 },
    #[error("Invalid radii: inner {inner} must be positive and below outer {outer}")]
    InvalidRadii { inner: f64, outer: f64 },
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ColorError {
    #[error("Unrecognized color '{0}'")]
    Invalid(String),
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AnimationError {
    #[error("Animation is already running")]
    AlreadyRunning,
}
