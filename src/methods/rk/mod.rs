//! Explicit Runge-Kutta methods, fixed-step and adaptive.

mod fixed;
mod rkf45;

pub use fixed::{euler, rk2, rk4};
pub use rkf45::{rkf45, NMAX_DEFAULT};

pub(crate) use fixed::rk4_step;
