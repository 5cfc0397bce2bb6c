//! Errors for integration methods

use crate::Float;

/// Validation errors returned by the integration entry points.
///
/// All of these are detected before any stepping begins; an integration
/// that starts runs to completion.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The initial condition vector has no components.
    #[error("initial condition vector must not be empty")]
    EmptyState,
    /// The derivative function produced a vector whose length differs
    /// from the state dimension.
    #[error("derivative function must return {expected} derivatives (got {got})")]
    DimensionMismatch { expected: usize, got: usize },
    #[error("step size h must be nonzero and finite (got {0})")]
    InvalidStepSize(Float),
    #[error("number of steps must be positive")]
    InvalidStepCount,
    #[error("final time must be greater than initial time (got t0 = {t0}, tend = {tend})")]
    InvalidTimeSpan { t0: Float, tend: Float },
    #[error("tolerance must be positive and finite (got {0})")]
    InvalidTolerance(Float),
    /// A method that integrates a (position, velocity) pair was given a
    /// state of the wrong dimension.
    #[error("{method} requires a 2-component state (got {got})")]
    StateDimension { method: &'static str, got: usize },
}
