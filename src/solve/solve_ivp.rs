//! solve_ivp entry point: one-time validation and dispatch to the integrators.

use log::debug;

use crate::{
    core::{accel::SecondOrderAccel, ode::ODE, trajectory::Trajectory},
    error::Error,
    methods::{
        adams::{adams_bashforth4, adams_moulton4},
        bdf::bdf2,
        rk::{euler, rk2, rk4, rkf45, NMAX_DEFAULT},
        verlet::{stormer_verlet, verlet},
    },
    Float,
};

use super::options::{Method, Options};

/// Solve an initial value problem `y' = f(x, y)`, `y(x0) = y0`, over
/// `[x0, xend]` with the selected method.
///
/// Validation happens once, before any stepping: the state must be
/// non-empty, the step size positive and finite, the time span forward,
/// the tolerance positive, and the derivative function must produce a
/// vector of the same length as `y0` (probed once at `(x0, 0)`). The
/// fixed-step methods take `ceil((xend - x0) / h)` steps of size `h`, so
/// their last grid point can land past `xend` when the span is not an
/// integer multiple of `h`; RKF45 instead clamps its last step and ends
/// on `xend` exactly.
///
/// The symplectic methods require a 2-component `[position, velocity]`
/// state. For those, `f` is adapted to a scalar acceleration by
/// evaluating it at `[q, 0]` and keeping the second derivative component.
pub fn solve_ivp<F>(
    f: &F,
    x0: Float,
    xend: Float,
    y0: &[Float],
    options: Options,
) -> Result<Trajectory, Error>
where
    F: ODE,
{
    // --- Validation (once, before dispatch) ---
    let n = y0.len();
    if n == 0 {
        return Err(Error::EmptyState);
    }
    let h = options.h;
    if !h.is_finite() || h <= 0.0 {
        return Err(Error::InvalidStepSize(h));
    }
    if xend <= x0 {
        return Err(Error::InvalidTimeSpan { t0: x0, tend: xend });
    }
    if !options.tol.is_finite() || options.tol <= 0.0 {
        return Err(Error::InvalidTolerance(options.tol));
    }

    // Probe the derivative function once for a dimension mismatch.
    let probe = f.ode(x0, &vec![0.0; n]);
    if probe.len() != n {
        return Err(Error::DimensionMismatch {
            expected: n,
            got: probe.len(),
        });
    }

    let n_steps = ((xend - x0) / h).ceil() as usize;
    if n_steps == 0 {
        return Err(Error::InvalidStepCount);
    }

    debug!(
        "solve_ivp: method = {:?}, n = {n}, h = {h}, n_steps = {n_steps}",
        options.method
    );

    match options.method {
        Method::Euler => euler(f, x0, y0, h, n_steps),
        Method::Rk2 => rk2(f, x0, y0, h, n_steps),
        Method::Rk4 => rk4(f, x0, y0, h, n_steps),
        Method::Rkf45 => rkf45(
            f,
            x0,
            y0,
            xend,
            h,
            options.tol,
            options.nmax.unwrap_or(NMAX_DEFAULT),
        ),
        Method::AdamsBashforth4 => adams_bashforth4(f, x0, y0, h, n_steps),
        Method::AdamsMoulton4 => adams_moulton4(f, x0, y0, h, n_steps),
        Method::Bdf2 => bdf2(f, x0, y0, h, n_steps),
        Method::Verlet => {
            check_pair(n, "verlet")?;
            verlet(&SecondOrderAccel::new(f), x0, y0, h, n_steps)
        }
        Method::StormerVerlet => {
            check_pair(n, "stormer_verlet")?;
            stormer_verlet(&SecondOrderAccel::new(f), x0, y0, h, n_steps)
        }
    }
}

fn check_pair(n: usize, method: &'static str) -> Result<(), Error> {
    if n != 2 {
        return Err(Error::StateDimension { method, got: n });
    }
    Ok(())
}
