//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Presentation                 Rust Core                                 │
//! │  ────────────                 ─────────                                 │
//! │                                                                         │
//! │  increase_item(15)                                                      │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Command Function                                                │  │
//! │  │  Result<T, ApiError>                                             │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Catalog Error? ─── CatalogError::Unavailable(..) ──┐           │  │
//! │  │         │                                           │           │  │
//! │  │         ▼                                           ▼           │  │
//! │  │  Cart Error? ─── CoreError::TransientRejection ── ApiError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  { "code": "TRANSIENT_REJECTION", "message": "increase_quantity ..." } │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every code is recoverable: the presentation shows the message and the
//! session carries on.

use serde::Serialize;
use snack_catalog::CatalogError;
use snack_core::CoreError;

use crate::state::ConfigError;

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Snack not found: 404"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code
    pub code: ErrorCode,

    /// Human-readable message
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Snack unknown to the catalog or absent from the cart
    NotFound,

    /// Input validation failed
    ValidationError,

    /// Simulated backend hiccup; retrying may succeed
    TransientRejection,

    /// Catalog could not be read
    CatalogUnavailable,

    /// Cart limits exceeded
    CartError,

    /// Configuration could not be loaded
    ConfigError,
}

pub type ApiResult<T> = Result<T, ApiError>;

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: &str) -> Self {
        ApiError::new(
            ErrorCode::NotFound,
            format!("{} not found: {}", resource, id),
        )
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    /// True when retrying the same call may succeed.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self.code,
            ErrorCode::TransientRejection | ErrorCode::CatalogUnavailable
        )
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::SnackNotInCart(id) => ApiError::new(
                ErrorCode::NotFound,
                format!("Snack {} is not in the cart", id),
            ),
            CoreError::SnackNotFound(id) => ApiError::not_found("Snack", &id.to_string()),
            e @ CoreError::TransientRejection { .. } => {
                ApiError::new(ErrorCode::TransientRejection, e.to_string())
            }
            CoreError::CatalogUnavailable(reason) => {
                tracing::warn!("Catalog unavailable: {}", reason);
                ApiError::new(ErrorCode::CatalogUnavailable, "The catalog is unavailable")
            }
            CoreError::CartTooLarge { max } => ApiError::new(
                ErrorCode::CartError,
                format!("Cart cannot have more than {} lines", max),
            ),
            CoreError::QuantityTooLarge { requested, max } => ApiError::new(
                ErrorCode::ValidationError,
                format!("Quantity {} exceeds maximum allowed ({})", requested, max),
            ),
            CoreError::Validation(e) => ApiError::validation(e.to_string()),
        }
    }
}

/// Converts catalog errors to API errors.
impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::SnackNotFound(id) => ApiError::not_found("Snack", &id.to_string()),
            other => ApiError::from(CoreError::from(other)),
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        tracing::error!("Configuration error: {}", err);
        ApiError::new(ErrorCode::ConfigError, err.to_string())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
