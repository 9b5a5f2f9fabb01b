// src/errors.rs

// error handling for the interval gate

// dependencies
use crate::clock::ClockError;

/// Error type for IntervalGate operations and configuration.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IntervalGateError {
    /// A required identifier was empty. Carries the argument name.
    #[error("{0} is required and must not be empty")]
    InvalidArgument(&'static str),
    #[error("default interval must be greater than zero")]
    InvalidInterval,
    #[error("clock error occurred: {0}")]
    Clock(#[from] ClockError),
}
