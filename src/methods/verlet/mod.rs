//! Symplectic integrators for second-order scalar systems.

use crate::{
    core::{accel::ScalarAcceleration, trajectory::Trajectory},
    error::Error,
    methods::validate,
    Float,
};

/// Velocity-leapfrog Verlet integrator.
///
/// The state is the pair `[q, v]`. The first step kicks the velocity by
/// half a step with the acceleration at the initial position and drifts
/// the position a full step with the kicked velocity; every later step
/// applies a full velocity kick at the current position followed by a
/// full position drift with the new velocity. The stored velocity is
/// thereby staggered half a step behind the position grid, which is what
/// keeps the phase-space volume and long-term energy bounded.
pub fn verlet<A>(
    a: &A,
    x0: Float,
    y0: &[Float],
    h: Float,
    n_steps: usize,
) -> Result<Trajectory, Error>
where
    A: ScalarAcceleration,
{
    validate(y0, h, n_steps)?;
    if y0.len() != 2 {
        return Err(Error::StateDimension {
            method: "verlet",
            got: y0.len(),
        });
    }

    let (mut q, mut v) = (y0[0], y0[1]);
    let mut x = x0;
    let mut traj = Trajectory::with_capacity(n_steps + 1);
    traj.push(x, vec![q, v]);

    // First step: half kick, then drift with the kicked velocity.
    v += 0.5 * h * a.accel(x, q);
    q += h * v;
    x += h;
    traj.push(x, vec![q, v]);
    traj.nfev += 1;
    traj.nstep += 1;

    for _ in 1..n_steps {
        v += h * a.accel(x, q);
        q += h * v;
        x += h;
        traj.push(x, vec![q, v]);
        traj.nfev += 1;
        traj.nstep += 1;
    }

    traj.naccpt = traj.nstep;
    Ok(traj)
}

/// Störmer-Verlet integrator in position-momentum form.
///
/// Symmetric leapfrog over the pair `[q, p]`: half-step momentum kick
/// with the force at the current position, full position drift with the
/// half-stepped momentum, second half-step momentum kick with the force
/// at the new position. The two half kicks must stay split around the
/// drift; the composition is exactly time-reversible, so integrating
/// forward and then backward with `-h` returns to the initial state up
/// to round-off.
pub fn stormer_verlet<A>(
    a: &A,
    x0: Float,
    y0: &[Float],
    h: Float,
    n_steps: usize,
) -> Result<Trajectory, Error>
where
    A: ScalarAcceleration,
{
    validate(y0, h, n_steps)?;
    if y0.len() != 2 {
        return Err(Error::StateDimension {
            method: "stormer_verlet",
            got: y0.len(),
        });
    }

    let (mut q, mut p) = (y0[0], y0[1]);
    let mut x = x0;
    let mut traj = Trajectory::with_capacity(n_steps + 1);
    traj.push(x, vec![q, p]);

    for _ in 0..n_steps {
        let p_half = p + 0.5 * h * a.accel(x, q);
        q += h * p_half;
        p = p_half + 0.5 * h * a.accel(x + h, q);
        x += h;
        traj.push(x, vec![q, p]);
        traj.nfev += 2;
        traj.nstep += 1;
    }

    traj.naccpt = traj.nstep;
    Ok(traj)
}
