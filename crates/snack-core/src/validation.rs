//! # Validation Module
//!
//! Input validation for catalog data, cart quantities and search queries.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Presentation                                                 │
//! │  └── Text field limits, disabled buttons                               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Storefront commands (Rust)                                   │
//! │  └── THIS MODULE: query length, quantity bounds                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Catalog construction                                         │
//! │  └── THIS MODULE: names, prices, unique ids                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use snack_core::validation::{validate_quantity, validate_search_query};
//!
//! assert!(validate_quantity(5).is_ok());
//! assert!(validate_search_query("Chips").is_ok());
//! ```

use std::collections::HashSet;

use crate::error::ValidationError;
use crate::types::Snack;
use crate::{MAX_CART_LINES, MAX_LINE_QUANTITY, MAX_QUERY_LENGTH};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a snack name.
///
/// ## Rules
/// - Must not be empty or whitespace
/// - At most 100 characters
pub fn validate_snack_name(name: &str) -> ValidationResult<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(ValidationError::Required {
            field: "name".to_string(),
        });
    }

    if name.chars().count() > 100 {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: 100,
        });
    }

    Ok(())
}

/// Validates a search query.
///
/// ## Rules
/// - Can be empty (shows categories or suggestions)
/// - At most `MAX_QUERY_LENGTH` characters
///
/// The query is NOT trimmed: matching is a literal, case-sensitive substring
/// match and leading/trailing spaces are part of it.
///
/// ```rust
/// use snack_core::validation::validate_search_query;
///
/// assert!(validate_search_query("").is_ok());
/// assert!(validate_search_query(&"x".repeat(500)).is_err());
/// ```
pub fn validate_search_query(query: &str) -> ValidationResult<()> {
    if query.chars().count() > MAX_QUERY_LENGTH {
        return Err(ValidationError::TooLong {
            field: "query".to_string(),
            max: MAX_QUERY_LENGTH,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Validates a line quantity.
///
/// ## Rules
/// - Must be positive (> 0)
/// - Must not exceed MAX_LINE_QUANTITY
pub fn validate_quantity(qty: u32) -> ValidationResult<()> {
    if qty == 0 {
        return Err(ValidationError::MustBePositive {
            field: "quantity".to_string(),
        });
    }

    if qty > MAX_LINE_QUANTITY {
        return Err(ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: 1,
            max: MAX_LINE_QUANTITY as i64,
        });
    }

    Ok(())
}

/// Validates a price in cents. Zero is allowed (free samples).
pub fn validate_price_cents(cents: i64) -> ValidationResult<()> {
    if cents < 0 {
        return Err(ValidationError::OutOfRange {
            field: "price".to_string(),
            min: 0,
            max: i64::MAX,
        });
    }

    Ok(())
}

// =============================================================================
// Collection Validators
// =============================================================================

/// Validates that another line can be added to a cart holding `current_lines`.
pub fn validate_cart_size(current_lines: usize) -> ValidationResult<()> {
    if current_lines >= MAX_CART_LINES {
        return Err(ValidationError::OutOfRange {
            field: "cart lines".to_string(),
            min: 0,
            max: MAX_CART_LINES as i64,
        });
    }

    Ok(())
}

/// Validates a whole snack catalog before it is served.
///
/// ## Rules
/// - Every snack passes [`validate_snack_name`] and [`validate_price_cents`]
/// - Snack ids are unique
pub fn validate_catalog(snacks: &[Snack]) -> ValidationResult<()> {
    let mut seen = HashSet::with_capacity(snacks.len());

    for snack in snacks {
        validate_snack_name(&snack.name)?;
        validate_price_cents(snack.price.cents())?;

        if !seen.insert(snack.id) {
            return Err(ValidationError::Duplicate {
                field: "snack id".to_string(),
                value: snack.id.to_string(),
            });
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
