//! Options and method selection for solve_ivp

use bon::Builder;

use crate::Float;

/// Integration method selection.
///
/// Adding a method means adding a variant here and an arm to the
/// exhaustive dispatch in [`crate::solve::solve_ivp`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Method {
    /// Explicit Euler, order 1.
    Euler,
    /// Midpoint Runge-Kutta, order 2.
    Rk2,
    /// Classical Runge-Kutta, order 4.
    Rk4,
    /// Runge-Kutta-Fehlberg 4(5) adaptive pair.
    Rkf45,
    /// 4-step explicit Adams-Bashforth, order 4.
    AdamsBashforth4,
    /// Adams-Moulton predictor-corrector, order 4.
    AdamsMoulton4,
    /// Backward differentiation formula, order 2.
    Bdf2,
    /// Velocity-leapfrog Verlet for second-order scalar systems.
    Verlet,
    /// Störmer-Verlet in position-momentum form.
    StormerVerlet,
}

#[derive(Builder, Clone, Debug)]
/// Options for solve_ivp
pub struct Options {
    /// Method to use. Default: RKF45.
    #[builder(default = Method::Rkf45)]
    pub method: Method,
    /// Step size for the fixed-step methods, initial step size for RKF45.
    pub h: Float,
    /// Acceptance tolerance for the RKF45 local error estimate.
    #[builder(default = 1e-5)]
    pub tol: Float,
    /// Maximum number of attempted steps for RKF45.
    pub nmax: Option<usize>,
}
