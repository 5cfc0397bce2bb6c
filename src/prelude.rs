//! Convenient prelude: import the most commonly used traits, types, and functions.
//!
//! Bring this into scope with:
//!
//! ```rust
//! use odeint::prelude::*;
//! ```
//!
//! Re-exports included:
//! - Core traits and types: `ODE`, `ScalarAcceleration`, `SecondOrderAccel`,
//!   `Trajectory`, `Status`, `Error`.
//! - High-level API: `solve_ivp`, `Options`, and `Method`.

pub use crate::core::{
    accel::{ScalarAcceleration, SecondOrderAccel},
    ode::ODE,
    status::Status,
    trajectory::Trajectory,
};
pub use crate::error::Error;
pub use crate::solve::{solve_ivp, Method, Options};
pub use crate::Float;
