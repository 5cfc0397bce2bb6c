//! A struct representing the outputted trajectory of a numerical integrator.

use crate::Float;

use super::status::Status;

/// The output of a numerical integrator: a time grid, the state at each
/// grid point, and basic run statistics.
///
/// Grid points are recorded in the order the integrator advances, so the
/// times are non-decreasing for forward integration. The fixed-step
/// methods accumulate the grid by repeated addition (`t[i+1] = t[i] + h`)
/// rather than recomputing `t0 + i * h`; long runs therefore carry the
/// usual floating point accumulation in the last few ulps of each time.
#[derive(Clone, Debug)]
pub struct Trajectory {
    /// The time grid, one entry per recorded state.
    pub t: Vec<Float>,
    /// The state rows aligned with `t`.
    pub y: Vec<Vec<Float>>,
    /// The number of derivative evaluations.
    pub nfev: usize,
    /// The number of steps taken (attempted steps for the adaptive method).
    pub nstep: usize,
    /// The number of accepted steps.
    pub naccpt: usize,
    /// The number of rejected steps.
    pub nrejct: usize,
    /// The status of the integration process.
    pub status: Status,
}

impl Trajectory {
    pub(crate) fn with_capacity(n: usize) -> Self {
        Self {
            t: Vec::with_capacity(n),
            y: Vec::with_capacity(n),
            nfev: 0,
            nstep: 0,
            naccpt: 0,
            nrejct: 0,
            status: Status::Success,
        }
    }

    pub(crate) fn push(&mut self, x: Float, y: Vec<Float>) {
        self.t.push(x);
        self.y.push(y);
    }

    /// Final (time, state) pair, if any point was recorded.
    pub fn last(&self) -> Option<(Float, &[Float])> {
        match (self.t.last(), self.y.last()) {
            (Some(&x), Some(y)) => Some((x, y.as_slice())),
            _ => None,
        }
    }

    /// Number of recorded grid points.
    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }
}
