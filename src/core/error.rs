//! Error handling and error types for the NSRA metric library.
//!
//! This module provides error handling using Rust's Result type system,
//! ensuring clear error propagation throughout the scoring pipeline. The
//! metric itself is a pure computation, so every error here is raised
//! synchronously and never retried.

use thiserror::Error;

/// Main error type for the NSRA library.
#[derive(Error, Debug)]
pub enum NsraError {
    /// Configuration errors, including unrecognized scoring method names
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Invalid input parameters
    #[error("Invalid parameter: {parameter} = {value}, {reason}")]
    InvalidParameter {
        parameter: String,
        value: String,
        reason: String,
    },

    /// Input sequence length mismatch
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: String, actual: String },
}

impl NsraError {
    /// Create a configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        NsraError::Config {
            message: message.into(),
        }
    }

    /// Create an invalid parameter error.
    pub fn invalid_parameter<P, V, R>(parameter: P, value: V, reason: R) -> Self
    where
        P: Into<String>,
        V: Into<String>,
        R: Into<String>,
    {
        NsraError::InvalidParameter {
            parameter: parameter.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a dimension mismatch error.
    pub fn dimension_mismatch<E, A>(expected: E, actual: A) -> Self
    where
        E: Into<String>,
        A: Into<String>,
    {
        NsraError::DimensionMismatch {
            expected: expected.into(),
            actual: actual.into(),
        }
    }
}

/// Result type alias for NSRA operations.
pub type Result<T> = std::result::Result<T, NsraError>;
