//! Backward differentiation formula of order 2, solved by fixed-point iteration.

use crate::{
    core::{ode::ODE, trajectory::Trajectory},
    error::Error,
    methods::validate,
    Float,
};

/// Number of fixed-point sweeps applied to the implicit relation per step.
const FIXED_POINT_ITERS: usize = 3;

/// BDF2 fixed-step integrator.
///
/// The two-step formula needs one prior point, so the first step is a
/// single explicit Euler step. Every following step solves the implicit
/// relation
///
/// `Y[i+1] = (4 Y[i] - Y[i-1] + 2 h f(x[i] + h, Y[i+1])) / 3`
///
/// by fixed-point iteration seeded with `Y[i]`. The iteration runs a
/// fixed budget of sweeps with no convergence check and the final iterate
/// is accepted unconditionally; stiff problems that need a converged
/// solve must use a smaller `h`.
pub fn bdf2<F>(
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
    let mut traj = Trajectory::with_capacity(n_steps + 1);
    traj.push(x0, y0.to_vec());

    // Euler bootstrap for the first step.
    let k1 = f.ode(x0, &traj.y[0]);
    let mut y1 = y0.to_vec();
    for i in 0..n {
        y1[i] += h * k1[i];
    }
    traj.push(x0 + h, y1);
    traj.nfev += 1;
    traj.nstep += 1;

    for i in 1..n_steps {
        let x = traj.t[i] + h;
        let mut y_guess = traj.y[i].clone();
        for _ in 0..FIXED_POINT_ITERS {
            let fg = f.ode(x, &y_guess);
            for j in 0..n {
                y_guess[j] = (4.0 * traj.y[i][j] - traj.y[i - 1][j] + 2.0 * h * fg[j]) / 3.0;
            }
            traj.nfev += 1;
        }
        traj.push(x, y_guess);
        traj.nstep += 1;
    }

    traj.naccpt = traj.nstep;
    Ok(traj)
}
