use approx::assert_relative_eq;
use odeint::methods::rk::{euler, rk2, rk4};
use odeint::prelude::*;

mod common;
use common::{decay_error, Decay};

#[test]
fn euler_is_first_order() {
    let e1 = decay_error(&euler(&Decay, 0.0, &[1.0], 0.1, 20).unwrap());
    let e2 = decay_error(&euler(&Decay, 0.0, &[1.0], 0.05, 40).unwrap());
    let ratio = e1 / e2;
    assert!(
        ratio > 1.6 && ratio < 2.4,
        "halving h should halve the error, got ratio {ratio}"
    );
}

#[test]
fn rk2_is_second_order() {
    let e1 = decay_error(&rk2(&Decay, 0.0, &[1.0], 0.1, 20).unwrap());
    let e2 = decay_error(&rk2(&Decay, 0.0, &[1.0], 0.05, 40).unwrap());
    let ratio = e1 / e2;
    assert!(
        ratio > 3.0 && ratio < 5.0,
        "halving h should quarter the error, got ratio {ratio}"
    );
}

#[test]
fn rk4_is_fourth_order() {
    let e1 = decay_error(&rk4(&Decay, 0.0, &[1.0], 0.1, 20).unwrap());
    let e2 = decay_error(&rk4(&Decay, 0.0, &[1.0], 0.05, 40).unwrap());
    let ratio = e1 / e2;
    assert!(
        ratio > 10.0 && ratio < 24.0,
        "halving h should cut the error ~16x, got ratio {ratio}"
    );
    assert!(e1 < 1e-6, "rk4 error at h = 0.1 was {e1}");
}

#[test]
fn grid_is_uniform_with_exact_step_count() {
    let traj = rk4(&Decay, 0.0, &[1.0], 0.1, 100).unwrap();
    assert_eq!(traj.len(), 101);
    assert_eq!(traj.y.len(), 101);
    for w in traj.t.windows(2) {
        assert_relative_eq!(w[1] - w[0], 0.1, max_relative = 1e-12);
    }
    assert_relative_eq!(traj.t[100], 10.0, max_relative = 1e-12);
}

#[test]
fn evaluation_counts_match_stage_counts() {
    let e = euler(&Decay, 0.0, &[1.0], 0.1, 20).unwrap();
    assert_eq!(e.nfev, 20);
    assert_eq!(e.nstep, 20);
    assert_eq!(e.naccpt, 20);
    assert_eq!(e.nrejct, 0);

    let two = rk2(&Decay, 0.0, &[1.0], 0.1, 20).unwrap();
    assert_eq!(two.nfev, 40);

    let four = rk4(&Decay, 0.0, &[1.0], 0.1, 20).unwrap();
    assert_eq!(four.nfev, 80);
    assert_eq!(four.status, Status::Success);
}

#[test]
fn backward_integration_with_negative_h() {
    // Steppers are sign-agnostic: integrate decay from x = 1 back to 0.
    let traj = rk4(&Decay, 1.0, &[Float::exp(-1.0)], -0.1, 10).unwrap();
    let (x, y) = traj.last().unwrap();
    assert_relative_eq!(x, 0.0, epsilon = 1e-12);
    assert_relative_eq!(y[0], 1.0, max_relative = 1e-7);
}

#[test]
fn degenerate_parameters_are_rejected() {
    assert_eq!(
        euler(&Decay, 0.0, &[1.0], 0.0, 10).unwrap_err(),
        Error::InvalidStepSize(0.0)
    );
    assert!(matches!(
        rk2(&Decay, 0.0, &[1.0], Float::NAN, 10),
        Err(Error::InvalidStepSize(_))
    ));
    assert_eq!(
        rk4(&Decay, 0.0, &[1.0], 0.1, 0).unwrap_err(),
        Error::InvalidStepCount
    );
    assert_eq!(euler(&Decay, 0.0, &[], 0.1, 10).unwrap_err(), Error::EmptyState);
}
