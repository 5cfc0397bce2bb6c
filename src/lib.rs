//! A library of numerical methods for solving initial value problems (IVPs) for ordinary differential equations (ODEs).

mod error;

pub mod core;
pub mod methods;
pub mod prelude;
pub mod solve;

#[cfg(feature = "python")]
mod python;

pub use crate::core::accel::{ScalarAcceleration, SecondOrderAccel};
pub use crate::core::ode::ODE;
pub use crate::core::status::Status;
pub use crate::core::trajectory::Trajectory;
pub use crate::error::Error;

// Prevent selecting two incompatible float precision features at once.
#[cfg(all(feature = "f32", feature = "f64"))]
compile_error!(
    "features 'f32' and 'f64' cannot both be enabled; pick exactly one Float precision feature"
);

/// Change this to f64 or f32 via the precision features.
#[cfg(feature = "f32")]
pub type Float = f32;
#[cfg(feature = "f64")]
pub type Float = f64;
