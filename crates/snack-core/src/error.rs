//! # Error Types
//!
//! Domain-specific error types for snack-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  snack-core errors (this file)                                         │
//! │  ├── CoreError        - Cart and search domain errors                  │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  snack-catalog errors (separate crate)                                 │
//! │  └── CatalogError     - Catalog lookups / outages                      │
//! │                                                                         │
//! │  storefront errors (in app)                                            │
//! │  └── ApiError         - What the presentation layer sees (serialized)  │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Presentation           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! None of these are fatal. Every variant is reported to the caller, which
//! decides the UI response (ignore, show a retry snackbar, show an empty
//! result panel).

use thiserror::Error;

use crate::types::SnackId;

// =============================================================================
// Core Error
// =============================================================================

/// Core domain errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// A cart mutation referenced a snack that has no order line.
    ///
    /// ## When This Occurs
    /// - Quantity buttons pressed on a line that was removed meanwhile
    /// - Stale snack id coming from the presentation layer
    #[error("Snack {0} is not in the cart")]
    SnackNotInCart(SnackId),

    /// The snack id does not exist in the catalog.
    #[error("Snack not found: {0}")]
    SnackNotFound(SnackId),

    /// The call was rejected by the transient failure policy.
    ///
    /// ## User Workflow
    /// ```text
    /// Tap "+" on a cart line
    ///      │
    ///      ▼
    /// FailurePolicy says: reject this call
    ///      │
    ///      ▼
    /// TransientRejection { operation: "increase_quantity" }
    ///      │
    ///      ▼
    /// Snackbar: "...couldn't be increased. Please try again."
    /// ```
    /// Cart state is left untouched. The caller decides whether to retry.
    #[error("{operation} was rejected by a transient backend error, please retry")]
    TransientRejection { operation: &'static str },

    /// The catalog could not be read.
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// Cart has reached the maximum number of lines.
    #[error("Cart cannot have more than {max} lines")]
    CartTooLarge { max: usize },

    /// Line quantity would exceed the maximum allowed.
    #[error("Quantity {requested} exceeds maximum allowed ({max})")]
    QuantityTooLarge { requested: u32, max: u32 },

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Returns true for errors the user can simply retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, CoreError::TransientRejection { .. })
    }
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// These errors occur when input doesn't meet requirements.
/// Used for early validation before domain logic runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Duplicate value (e.g., duplicate snack id in a catalog).
    #[error("{field} '{value}' already exists")]
    Duplicate { field: String, value: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::SnackNotInCart(SnackId::new(7));
        assert_eq!(err.to_string(), "Snack 7 is not in the cart");

        let err = CoreError::TransientRejection {
            operation: "increase_quantity",
        };
        assert_eq!(
            err.to_string(),
            "increase_quantity was rejected by a transient backend error, please retry"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::TooLong {
            field: "query".to_string(),
            max: 200,
        };
        assert_eq!(err.to_string(), "query must be at most 200 characters");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::MustBePositive {
            field: "quantity".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }

    #[test]
    fn test_only_rejections_are_transient() {
        assert!(CoreError::TransientRejection { operation: "x" }.is_transient());
        assert!(!CoreError::SnackNotInCart(SnackId::new(1)).is_transient());
        assert!(!CoreError::CatalogUnavailable("down".into()).is_transient());
    }
}
