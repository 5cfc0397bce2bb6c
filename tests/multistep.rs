use odeint::methods::adams::{adams_bashforth4, adams_moulton4};
use odeint::methods::bdf::bdf2;
use odeint::methods::rk::rk4;
use odeint::prelude::*;

mod common;
use common::{decay_error, Decay};

#[test]
fn adams_bashforth4_is_fourth_order() {
    let e1 = decay_error(&adams_bashforth4(&Decay, 0.0, &[1.0], 0.1, 20).unwrap());
    let e2 = decay_error(&adams_bashforth4(&Decay, 0.0, &[1.0], 0.05, 40).unwrap());
    let ratio = e1 / e2;
    assert!(
        ratio > 10.0 && ratio < 24.0,
        "halving h should cut the error ~16x, got ratio {ratio}"
    );
}

#[test]
fn adams_moulton4_is_fourth_order() {
    let e1 = decay_error(&adams_moulton4(&Decay, 0.0, &[1.0], 0.1, 20).unwrap());
    let e2 = decay_error(&adams_moulton4(&Decay, 0.0, &[1.0], 0.05, 40).unwrap());
    let ratio = e1 / e2;
    assert!(
        ratio > 10.0 && ratio < 24.0,
        "halving h should cut the error ~16x, got ratio {ratio}"
    );
}

#[test]
fn corrector_improves_on_predictor() {
    let e_ab = decay_error(&adams_bashforth4(&Decay, 0.0, &[1.0], 0.1, 20).unwrap());
    let e_am = decay_error(&adams_moulton4(&Decay, 0.0, &[1.0], 0.1, 20).unwrap());
    assert!(
        e_am < e_ab,
        "corrector error {e_am} should beat predictor error {e_ab}"
    );
}

#[test]
fn short_runs_are_pure_rk4_bootstrap() {
    for n_steps in 1..=3 {
        let ab = adams_bashforth4(&Decay, 0.0, &[1.0], 0.1, n_steps).unwrap();
        let am = adams_moulton4(&Decay, 0.0, &[1.0], 0.1, n_steps).unwrap();
        let reference = rk4(&Decay, 0.0, &[1.0], 0.1, n_steps).unwrap();
        assert_eq!(ab.t, reference.t);
        assert_eq!(ab.y, reference.y);
        assert_eq!(am.t, reference.t);
        assert_eq!(am.y, reference.y);
    }
}

#[test]
fn multistep_history_costs_four_evals_per_step() {
    // 3 bootstrap steps at 4 evals each, then 4 (AB) or 5 (AM) per step.
    let ab = adams_bashforth4(&Decay, 0.0, &[1.0], 0.1, 20).unwrap();
    assert_eq!(ab.nfev, 12 + 17 * 4);
    assert_eq!(ab.len(), 21);
    let am = adams_moulton4(&Decay, 0.0, &[1.0], 0.1, 20).unwrap();
    assert_eq!(am.nfev, 12 + 17 * 5);
    assert_eq!(am.len(), 21);
}

#[test]
fn bdf2_is_second_order() {
    let e1 = decay_error(&bdf2(&Decay, 0.0, &[1.0], 0.1, 20).unwrap());
    let e2 = decay_error(&bdf2(&Decay, 0.0, &[1.0], 0.05, 40).unwrap());
    let ratio = e1 / e2;
    assert!(
        ratio > 2.5 && ratio < 8.0,
        "halving h should roughly quarter the error, got ratio {ratio}"
    );
    let e3 = decay_error(&bdf2(&Decay, 0.0, &[1.0], 0.01, 100).unwrap());
    assert!(e3 < 1e-3, "bdf2 error at h = 0.01 was {e3}");
}

#[test]
fn bdf2_first_step_is_explicit_euler() {
    let traj = bdf2(&Decay, 0.0, &[1.0], 0.1, 5).unwrap();
    assert_eq!(traj.y[1][0], 1.0 - 0.1);
    // One Euler eval plus three fixed-point sweeps per later step.
    assert_eq!(traj.nfev, 1 + 4 * 3);
}
