//! Status codes for integrators

/// Termination status of an integration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// The integration reached its final time or step count.
    Success,
    /// The adaptive method hit its cap on attempted steps before
    /// reaching the final time.
    NeedLargerNMax,
}
