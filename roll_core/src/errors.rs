//! # Error Types
//!
//! Structured error types for roll_core. Nothing in this engine is fatal:
//! every error describes a condition the operator can recover from by
//! changing an input, and callers are expected to render errors as
//! warnings on the quote form, not abort.
//!
//! Incomplete input (an empty or zero field) is *not* an error — the
//! calculators return `Ok(None)` for that case. `RollError` is reserved
//! for geometry that is actually infeasible as entered.
//!
//! ## Example
//!
//! ```rust
//! use roll_core::errors::{RollError, RollResult};
//!
//! fn validate_stock(stock_in: f64) -> RollResult<()> {
//!     if stock_in < 0.0 {
//!         return Err(RollError::invalid_input(
//!             "stock_length_in",
//!             stock_in.to_string(),
//!             "Stock length cannot be negative",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for roll_core operations
pub type RollResult<T> = Result<T, RollError>;

/// Structured error type for rolling calculations.
///
/// Each variant carries enough context for a caller to render a
/// meaningful warning next to the offending field.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum RollError {
    /// An input value is invalid (out of range, wrong sign, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The geometry as entered cannot be produced
    #[error("Infeasible geometry: {calculation} - {reason}")]
    Infeasible { calculation: String, reason: String },

    /// Size label not found in the catalog
    #[error("Size not found: {profile} {size_label}")]
    SizeNotFound {
        profile: String,
        size_label: String,
    },
}

impl RollError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        RollError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an Infeasible error
    pub fn infeasible(calculation: impl Into<String>, reason: impl Into<String>) -> Self {
        RollError::Infeasible {
            calculation: calculation.into(),
            reason: reason.into(),
        }
    }

    /// Create a SizeNotFound error
    pub fn size_not_found(profile: impl Into<String>, size_label: impl Into<String>) -> Self {
        RollError::SizeNotFound {
            profile: profile.into(),
            size_label: size_label.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            RollError::InvalidInput { .. } => "INVALID_INPUT",
            RollError::Infeasible { .. } => "INFEASIBLE",
            RollError::SizeNotFound { .. } => "SIZE_NOT_FOUND",
        }
    }
}
