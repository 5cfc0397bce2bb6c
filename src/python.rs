//! Python bindings for the solve_ivp entry point.

use std::cell::RefCell;

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::{
    core::ode::ODE,
    solve::{solve_ivp, Method, Options},
    Float,
};

/// ODE adapter around a Python callable `f(x, y) -> sequence of floats`.
///
/// A Python exception raised by the callable is stashed and re-raised
/// after the integrator returns; from then on the adapter reports NaN
/// derivatives, which no adaptive step can accept and which fixed-step
/// methods simply carry to the end of their bounded run.
struct PyODE<'py> {
    py: Python<'py>,
    f: Bound<'py, PyAny>,
    err: RefCell<Option<PyErr>>,
}

impl ODE for PyODE<'_> {
    fn ode(&self, x: Float, y: &[Float]) -> Vec<Float> {
        if self.err.borrow().is_some() {
            return vec![Float::NAN; y.len()];
        }
        let result = (|| -> PyResult<Vec<Float>> {
            let arr = PyArray1::from_slice(self.py, y);
            self.f.call1((x, arr))?.extract::<Vec<Float>>()
        })();
        match result {
            Ok(dydx) => dydx,
            Err(e) => {
                *self.err.borrow_mut() = Some(e);
                vec![Float::NAN; y.len()]
            }
        }
    }
}

fn parse_method(name: &str) -> PyResult<Method> {
    match name {
        "euler" => Ok(Method::Euler),
        "rk2" => Ok(Method::Rk2),
        "rk4" => Ok(Method::Rk4),
        "rkf45" => Ok(Method::Rkf45),
        "adams_bashforth4" | "ab4" => Ok(Method::AdamsBashforth4),
        "adams_moulton4" | "am4" => Ok(Method::AdamsMoulton4),
        "bdf2" => Ok(Method::Bdf2),
        "verlet" => Ok(Method::Verlet),
        "stormer_verlet" => Ok(Method::StormerVerlet),
        other => Err(PyValueError::new_err(format!("unknown method '{other}'"))),
    }
}

/// Solve an initial value problem from Python.
///
/// Returns `(t, Y)` where `t` has one entry per grid point and `Y` has
/// one row per grid point, matching the state dimension.
#[pyfunction]
#[pyo3(name = "solve_ivp", signature = (f, x0, xend, y0, method = "rkf45", h = 0.1, tol = 1e-5))]
fn solve_ivp_py<'py>(
    py: Python<'py>,
    f: Bound<'py, PyAny>,
    x0: Float,
    xend: Float,
    y0: Vec<Float>,
    method: &str,
    h: Float,
    tol: Float,
) -> PyResult<(Bound<'py, PyArray1<Float>>, Bound<'py, PyArray2<Float>>)> {
    let ode = PyODE {
        py,
        f,
        err: RefCell::new(None),
    };
    let options = Options::builder()
        .method(parse_method(method)?)
        .h(h)
        .tol(tol)
        .build();

    let traj =
        solve_ivp(&ode, x0, xend, &y0, options).map_err(|e| PyValueError::new_err(e.to_string()))?;
    if let Some(e) = ode.err.into_inner() {
        return Err(e);
    }

    let npts = traj.t.len();
    let ncols = traj.y.first().map_or(0, Vec::len);
    let mut flat = Vec::with_capacity(npts * ncols);
    for row in &traj.y {
        flat.extend_from_slice(row);
    }
    let t = PyArray1::from_vec(py, traj.t);
    let y = PyArray1::from_vec(py, flat).reshape((npts, ncols))?;
    Ok((t, y))
}

#[pymodule]
fn odeint(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(solve_ivp_py, m)?)?;
    Ok(())
}
