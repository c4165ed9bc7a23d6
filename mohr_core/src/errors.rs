//! # Error Types
//!
//! Structured error types for mohr_core. Every validation failure carries
//! enough context (`field`, `value`, `reason`) to understand and fix the
//! offending input programmatically.
//!
//! Non-fatal numerical conditions (near-singular rosette geometry, an
//! indeterminate principal orientation) are not errors: they are emitted as
//! [`tracing`] warnings and the calculation still returns a result.
//!
//! ## Example
//!
//! ```rust
//! use mohr_core::errors::{CalcError, CalcResult};
//!
//! fn validate_modulus(young_modulus: f64) -> CalcResult<()> {
//!     if young_modulus <= 0.0 {
//!         return Err(CalcError::invalid_input(
//!             "young_modulus",
//!             young_modulus.to_string(),
//!             "Young's modulus must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for mohr_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
///
/// Each variant provides specific context about what went wrong. All
/// calculations either fully succeed or fail with one of these at the call
/// boundary; there are no retries and no partial results.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid: a non-finite or asymmetric tensor,
    /// degenerate rosette geometry, or material constants that make the
    /// constitutive relations singular.
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}
