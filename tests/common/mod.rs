//! Shared reference systems for the integration tests.
#![allow(dead_code)]

use odeint::prelude::*;

/// Exponential decay y' = -y with closed-form solution e^{-x}.
pub struct Decay;

impl ODE for Decay {
    fn ode(&self, _x: Float, y: &[Float]) -> Vec<Float> {
        vec![-y[0]]
    }
}

/// Simple harmonic oscillator q'' = -q as the first-order pair
/// [q, p]' = [p, -q].
pub struct SHO;

impl ODE for SHO {
    fn ode(&self, _x: Float, y: &[Float]) -> Vec<Float> {
        vec![y[1], -y[0]]
    }
}

/// Global error against e^{-x} at the final grid point.
pub fn decay_error(traj: &Trajectory) -> Float {
    let (x, y) = traj.last().expect("empty trajectory");
    (y[0] - (-x).exp()).abs()
}
