//! # Catalog Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Repository lookup / outage                                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  CatalogError (this module)                                            │
//! │       │                                                                 │
//! │       ├──► CoreError (SnackNotFound / CatalogUnavailable)              │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ApiError (in storefront) ← Serialized for the presentation layer      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use snack_core::{CoreError, SnackId, ValidationError};
use thiserror::Error;

/// Catalog operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    /// No snack with that id.
    #[error("Snack not found: {0}")]
    SnackNotFound(SnackId),

    /// The catalog cannot be read right now.
    ///
    /// ## When This Occurs
    /// - The backing source was switched off (`Catalog::set_available(false)`)
    /// - A custom provider lost its connection
    #[error("Catalog unavailable: {0}")]
    Unavailable(String),

    /// Catalog data failed validation at construction.
    #[error("Invalid catalog data: {0}")]
    Invalid(#[from] ValidationError),
}

impl CatalogError {
    pub fn is_unavailable(&self) -> bool {
        matches!(self, CatalogError::Unavailable(_))
    }
}

/// Lets core-level code treat catalog failures uniformly.
impl From<CatalogError> for CoreError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::SnackNotFound(id) => CoreError::SnackNotFound(id),
            CatalogError::Unavailable(reason) => CoreError::CatalogUnavailable(reason),
            CatalogError::Invalid(e) => CoreError::Validation(e),
        }
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
