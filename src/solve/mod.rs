//! High-level API: method selection, options, and the solve_ivp entry point.

pub mod options;
pub mod solve_ivp;

pub use options::{Method, Options};
pub use solve_ivp::solve_ivp;
