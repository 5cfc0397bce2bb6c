//! Adams multistep methods of order 4: explicit Adams-Bashforth and the
//! Adams-Moulton predictor-corrector.

use crate::{
    core::{ode::ODE, trajectory::Trajectory},
    error::Error,
    methods::{rk::rk4_step, validate},
    Float,
};

/// 4-step Adams-Bashforth (order 4) fixed-step integrator.
///
/// The multistep recurrence needs derivative values at the four most
/// recent grid points, so the first three steps are produced with the
/// classical RK4 formula. From step 3 on, each step is a single linear
/// combination of the last four derivatives:
///
/// `Y[i+1] = Y[i] + h/24 * (55 f_i - 59 f_{i-1} + 37 f_{i-2} - 9 f_{i-3})`
///
/// With `n_steps < 3` only the bootstrap runs and the output is pure RK4.
pub fn adams_bashforth4<F>(
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
    let mut traj = bootstrap(f, x0, y0, h, n_steps);

    for i in 3..n_steps {
        let f1 = f.ode(traj.t[i], &traj.y[i]);
        let f2 = f.ode(traj.t[i - 1], &traj.y[i - 1]);
        let f3 = f.ode(traj.t[i - 2], &traj.y[i - 2]);
        let f4 = f.ode(traj.t[i - 3], &traj.y[i - 3]);

        let mut y = traj.y[i].clone();
        for j in 0..n {
            y[j] += h / 24.0 * (AB1 * f1[j] + AB2 * f2[j] + AB3 * f3[j] + AB4 * f4[j]);
        }
        let x = traj.t[i] + h;
        traj.push(x, y);
        traj.nfev += 4;
        traj.nstep += 1;
    }

    traj.naccpt = traj.nstep;
    Ok(traj)
}

/// 4-step Adams-Moulton (order 4) predictor-corrector integrator.
///
/// Shares the RK4 bootstrap and the Adams-Bashforth formula with
/// [`adams_bashforth4`]; the explicit result serves as a predictor whose
/// derivative feeds the implicit Adams-Moulton formula:
///
/// `Y[i+1] = Y[i] + h/24 * (9 f_pred + 19 f_i - 5 f_{i-1} + f_{i-2})`
///
/// Exactly one corrector pass is applied per step; the implicit relation
/// is not iterated to convergence.
pub fn adams_moulton4<F>(
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
    let mut traj = bootstrap(f, x0, y0, h, n_steps);
    let mut y_pred = vec![0.0; n];

    for i in 3..n_steps {
        let f1 = f.ode(traj.t[i], &traj.y[i]);
        let f2 = f.ode(traj.t[i - 1], &traj.y[i - 1]);
        let f3 = f.ode(traj.t[i - 2], &traj.y[i - 2]);
        let f4 = f.ode(traj.t[i - 3], &traj.y[i - 3]);

        // Adams-Bashforth predictor
        for j in 0..n {
            y_pred[j] = traj.y[i][j]
                + h / 24.0 * (AB1 * f1[j] + AB2 * f2[j] + AB3 * f3[j] + AB4 * f4[j]);
        }

        // Single Adams-Moulton correction using the predicted derivative
        let x = traj.t[i] + h;
        let f_pred = f.ode(x, &y_pred);
        let mut y = traj.y[i].clone();
        for j in 0..n {
            y[j] += h / 24.0 * (AM0 * f_pred[j] + AM1 * f1[j] + AM2 * f2[j] + AM3 * f3[j]);
        }
        traj.push(x, y);
        traj.nfev += 5;
        traj.nstep += 1;
    }

    traj.naccpt = traj.nstep;
    Ok(traj)
}

/// RK4 bootstrap shared by the multistep methods: advances
/// `min(3, n_steps)` steps and records them.
fn bootstrap<F>(f: &F, x0: Float, y0: &[Float], h: Float, n_steps: usize) -> Trajectory
where
    F: ODE,
{
    let n = y0.len();
    let mut x = x0;
    let mut y = y0.to_vec();
    let mut yt = vec![0.0; n];
    let mut traj = Trajectory::with_capacity(n_steps + 1);
    traj.push(x, y.clone());

    for _ in 0..n_steps.min(3) {
        traj.nfev += rk4_step(f, x, &mut y, h, &mut yt);
        x += h;
        traj.push(x, y.clone());
        traj.nstep += 1;
    }

    traj
}

// Adams-Bashforth 4 coefficients (over a common denominator of 24)
const AB1: Float = 55.0;
const AB2: Float = -59.0;
const AB3: Float = 37.0;
const AB4: Float = -9.0;

// Adams-Moulton 4 corrector coefficients (over a common denominator of 24)
const AM0: Float = 9.0;
const AM1: Float = 19.0;
const AM2: Float = -5.0;
const AM3: Float = 1.0;
