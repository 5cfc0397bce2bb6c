//! Runge-Kutta-Fehlberg 4(5) adaptive-step integrator.

use log::{debug, warn};

use crate::{
    core::{ode::ODE, status::Status, trajectory::Trajectory},
    error::Error,
    Float,
};

/// Default cap on attempted steps.
pub const NMAX_DEFAULT: usize = 1_000_000;

/// Runge-Kutta-Fehlberg 4(5) adaptive-step integrator.
///
/// Each attempted step computes a 4th- and a 5th-order solution from six
/// shared stages. The step is accepted when the Euclidean norm of their
/// difference is below `tol`; the 5th-order solution is kept and the step
/// size may grow by up to a factor of 2. A rejected step shrinks the step
/// size by a factor between 0.1 and 0.9 and retries from the same point,
/// so the step size decreases strictly on rejection and the loop cannot
/// stall. Steps that would overshoot `xend` are clamped, so the final
/// accepted time equals `xend` exactly.
///
/// `tol` is an absolute bound on the local error estimate `||y5 - y4||`.
/// `nmax` caps the total number of attempted steps; hitting it ends the
/// run early with [`Status::NeedLargerNMax`].
pub fn rkf45<F>(
    f: &F,
    x0: Float,
    y0: &[Float],
    xend: Float,
    h0: Float,
    tol: Float,
    nmax: usize,
) -> Result<Trajectory, Error>
where
    F: ODE,
{
    // --- Input Validation ---
    if y0.is_empty() {
        return Err(Error::EmptyState);
    }
    if !h0.is_finite() || h0 <= 0.0 {
        return Err(Error::InvalidStepSize(h0));
    }
    if xend <= x0 {
        return Err(Error::InvalidTimeSpan { t0: x0, tend: xend });
    }
    if !tol.is_finite() || tol <= 0.0 {
        return Err(Error::InvalidTolerance(tol));
    }

    // --- Declarations ---
    let n = y0.len();
    let mut x = x0;
    let mut y = y0.to_vec();
    let mut h = h0;
    let mut yt = vec![0.0; n];
    let mut y4 = vec![0.0; n];
    let mut y5 = vec![0.0; n];
    let mut traj = Trajectory::with_capacity(16);
    traj.push(x, y.clone());

    // --- Main integration loop ---
    while x < xend {
        if traj.nstep >= nmax {
            warn!("rkf45: step limit {nmax} reached at x = {x}");
            traj.status = Status::NeedLargerNMax;
            break;
        }

        // Clamp the last step to land exactly on xend.
        let mut last = false;
        if x + h >= xend {
            h = xend - x;
            last = true;
        }

        // Stage 1
        let k1 = f.ode(x, &y);

        // Stage 2
        for i in 0..n {
            yt[i] = y[i] + h * A21 * k1[i];
        }
        let k2 = f.ode(x + C2 * h, &yt);

        // Stage 3
        for i in 0..n {
            yt[i] = y[i] + h * (A31 * k1[i] + A32 * k2[i]);
        }
        let k3 = f.ode(x + C3 * h, &yt);

        // Stage 4
        for i in 0..n {
            yt[i] = y[i] + h * (A41 * k1[i] + A42 * k2[i] + A43 * k3[i]);
        }
        let k4 = f.ode(x + C4 * h, &yt);

        // Stage 5
        for i in 0..n {
            yt[i] = y[i] + h * (A51 * k1[i] + A52 * k2[i] + A53 * k3[i] + A54 * k4[i]);
        }
        let k5 = f.ode(x + C5 * h, &yt);

        // Stage 6
        for i in 0..n {
            yt[i] =
                y[i] + h * (A61 * k1[i] + A62 * k2[i] + A63 * k3[i] + A64 * k4[i] + A65 * k5[i]);
        }
        let k6 = f.ode(x + C6 * h, &yt);

        traj.nfev += 6;
        traj.nstep += 1;

        // Embedded 4th- and 5th-order solutions
        for i in 0..n {
            y4[i] = y[i] + h * (B41 * k1[i] + B43 * k3[i] + B44 * k4[i] + B45 * k5[i]);
            y5[i] = y[i]
                + h * (B51 * k1[i] + B53 * k3[i] + B54 * k4[i] + B55 * k5[i] + B56 * k6[i]);
        }

        // Error estimation
        let mut err = 0.0;
        for i in 0..n {
            let d = y5[i] - y4[i];
            err += d * d;
        }
        err = err.sqrt();

        if err < tol {
            // Step accepted: keep the 5th-order solution.
            x = if last { xend } else { x + h };
            y.copy_from_slice(&y5);
            traj.push(x, y.clone());
            traj.naccpt += 1;

            h *= if err > 0.0 {
                (tol / err).powf(0.25).min(2.0)
            } else {
                2.0
            };
        } else {
            // Step rejected: shrink and retry from the same point.
            traj.nrejct += 1;
            h *= (0.9 * (tol / err).powf(0.25)).max(0.1);
            debug!("rkf45: rejected step at x = {x} (err = {err:.3e}), h -> {h:.3e}");
        }
    }

    Ok(traj)
}

// RKF45 Butcher tableau coefficients
const C2: Float = 0.25;
const C3: Float = 3.0 / 8.0;
const C4: Float = 12.0 / 13.0;
const C5: Float = 1.0;
const C6: Float = 0.5;

const A21: Float = 0.25;
const A31: Float = 3.0 / 32.0;
const A32: Float = 9.0 / 32.0;
const A41: Float = 1932.0 / 2197.0;
const A42: Float = -7200.0 / 2197.0;
const A43: Float = 7296.0 / 2197.0;
const A51: Float = 439.0 / 216.0;
const A52: Float = -8.0;
const A53: Float = 3680.0 / 513.0;
const A54: Float = -845.0 / 4104.0;
const A61: Float = -8.0 / 27.0;
const A62: Float = 2.0;
const A63: Float = -3544.0 / 2565.0;
const A64: Float = 1859.0 / 4104.0;
const A65: Float = -11.0 / 40.0;

const B41: Float = 25.0 / 216.0;
const B43: Float = 1408.0 / 2565.0;
const B44: Float = 2197.0 / 4104.0;
const B45: Float = -0.2;

const B51: Float = 16.0 / 135.0;
const B53: Float = 6656.0 / 12825.0;
const B54: Float = 28561.0 / 56430.0;
const B55: Float = -9.0 / 50.0;
const B56: Float = 2.0 / 55.0;
