//! Fixed-step explicit one-step integrators: Euler, midpoint RK2, and classical RK4.

use crate::{
    core::{ode::ODE, trajectory::Trajectory},
    error::Error,
    methods::validate,
    Float,
};

/// Explicit Euler (order 1) fixed-step integrator.
///
/// Advances `Y[i+1] = Y[i] + h * f(x[i], Y[i])` for `n_steps` steps and
/// records every grid point.
pub fn euler<F>(
    f: &F,
    x0: Float,
    y0: &[Float],
    h: Float,
    n_steps: usize,
) -> Result<Trajectory, Error>
where
    F: ODE,
{
    validate(y0, h, n_steps)?;

    let n = y0.len();
    let mut x = x0;
    let mut y = y0.to_vec();
    let mut traj = Trajectory::with_capacity(n_steps + 1);
    traj.push(x, y.clone());

    for _ in 0..n_steps {
        let k1 = f.ode(x, &y);
        for i in 0..n {
            y[i] += h * k1[i];
        }
        x += h;
        traj.push(x, y.clone());
        traj.nfev += 1;
        traj.nstep += 1;
    }

    traj.naccpt = traj.nstep;
    Ok(traj)
}

/// Midpoint Runge-Kutta (RK2, order 2) fixed-step integrator.
///
/// Two stages per step: the derivative at the current point is used to
/// reach the interval midpoint, and the derivative there advances the
/// full step.
pub fn rk2<F>(
    f: &F,
    x0: Float,
    y0: &[Float],
    h: Float,
    n_steps: usize,
) -> Result<Trajectory, Error>
where
    F: ODE,
{
    validate(y0, h, n_steps)?;

    let n = y0.len();
    let mut x = x0;
    let mut y = y0.to_vec();
    let mut yt = vec![0.0; n];
    let mut traj = Trajectory::with_capacity(n_steps + 1);
    traj.push(x, y.clone());

    for _ in 0..n_steps {
        let k1 = f.ode(x, &y);
        for i in 0..n {
            yt[i] = y[i] + 0.5 * h * k1[i];
        }
        let k2 = f.ode(x + 0.5 * h, &yt);
        for i in 0..n {
            y[i] += h * k2[i];
        }
        x += h;
        traj.push(x, y.clone());
        traj.nfev += 2;
        traj.nstep += 1;
    }

    traj.naccpt = traj.nstep;
    Ok(traj)
}

/// Classical Runge-Kutta 4 (RK4) fixed-step integrator.
pub fn rk4<F>(
    f: &F,
    x0: Float,
    y0: &[Float],
    h: Float,
    n_steps: usize,
) -> Result<Trajectory, Error>
where
    F: ODE,
{
    validate(y0, h, n_steps)?;

    let n = y0.len();
    let mut x = x0;
    let mut y = y0.to_vec();
    let mut yt = vec![0.0; n];
    let mut traj = Trajectory::with_capacity(n_steps + 1);
    traj.push(x, y.clone());

    for _ in 0..n_steps {
        traj.nfev += rk4_step(f, x, &mut y, h, &mut yt);
        x += h;
        traj.push(x, y.clone());
        traj.nstep += 1;
    }

    traj.naccpt = traj.nstep;
    Ok(traj)
}

/// Advance one classical RK4 step in place.
///
/// `yt` is scratch space of the same length as `y`. Returns the number of
/// derivative evaluations spent (always 4). Shared with the multistep
/// methods, whose bootstrap steps must match [`rk4`] exactly.
pub(crate) fn rk4_step<F>(f: &F, x: Float, y: &mut [Float], h: Float, yt: &mut [Float]) -> usize
where
    F: ODE,
{
    let n = y.len();

    let k1 = f.ode(x, y);
    for i in 0..n {
        yt[i] = y[i] + h * A21 * k1[i];
    }
    let k2 = f.ode(x + C2 * h, yt);
    for i in 0..n {
        yt[i] = y[i] + h * A32 * k2[i];
    }
    let k3 = f.ode(x + C3 * h, yt);
    for i in 0..n {
        yt[i] = y[i] + h * A43 * k3[i];
    }
    let k4 = f.ode(x + C4 * h, yt);
    for i in 0..n {
        y[i] += h * (B1 * k1[i] + B2 * k2[i] + B3 * k3[i] + B4 * k4[i]);
    }

    4
}

// Classical RK4 coefficients
const C2: Float = 0.5;
const C3: Float = 0.5;
const C4: Float = 1.0;
const A21: Float = 0.5;
const A32: Float = 0.5;
const A43: Float = 1.0;
const B1: Float = 1.0 / 6.0;
const B2: Float = 1.0 / 3.0;
const B3: Float = 1.0 / 3.0;
const B4: Float = 1.0 / 6.0;
