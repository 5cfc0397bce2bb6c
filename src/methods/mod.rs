// Numerical methods

pub mod adams;
pub mod bdf;
pub mod rk;
pub mod verlet;

use crate::{error::Error, Float};

/// Shared parameter validation for the fixed-step methods.
///
/// The step size only has to be nonzero and finite here: the steppers
/// themselves are sign-agnostic and can integrate backward with `h < 0`.
/// The high-level [`crate::solve::solve_ivp`] entry point additionally
/// enforces a forward time span.
pub(crate) fn validate(y0: &[Float], h: Float, n_steps: usize) -> Result<(), Error> {
    if y0.is_empty() {
        return Err(Error::EmptyState);
    }
    if !h.is_finite() || h == 0.0 {
        return Err(Error::InvalidStepSize(h));
    }
    if n_steps == 0 {
        return Err(Error::InvalidStepCount);
    }
    Ok(())
}
