//! # snack-core: Pure Domain Logic for the Snack Storefront
//!
//! This crate holds the storefront's domain rules as plain data and pure
//! functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                     Snack Storefront Architecture                       │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                 Presentation layer (external)                   │   │
//! │  │      Feed ──► Snack detail ──► Cart ──► Search                 │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands / snapshots                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │            storefront (CartStore, SearchState)                  │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ snack-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐ ┌─────────┐  │   │
//! │  │   │  types  │ │  money  │ │  cart   │ │ search  │ │ policy  │  │   │
//! │  │   └─────────┘ └─────────┘ └─────────┘ └─────────┘ └─────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO ASYNC • PURE FUNCTIONS                           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Snack, OrderLine, collections, filters, search reference data
//! - [`money`] - Money type with integer arithmetic
//! - [`cart`] - Cart state machine and checkout totals
//! - [`search`] - Search panel classification and name matching
//! - [`policy`] - Transient failure policies for cart calls
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use snack_core::{Cart, Money, OrderLine, Snack, SnackId};
//!
//! let chips = Snack::new(15, "Chips", "A tag line", Money::from_cents(277), "");
//! let mut cart = Cart::from_lines([OrderLine::new(chips, 1)]).unwrap();
//!
//! cart.increase(SnackId::new(15)).unwrap();
//! assert_eq!(cart.subtotal().cents(), 554);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod money;
pub mod policy;
pub mod search;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartTotals, Decrease};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use policy::{EveryNth, FailurePolicy, NeverFail};
pub use search::SearchDisplay;
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct lines in a single cart.
pub const MAX_CART_LINES: usize = 100;

/// Maximum quantity a line can reach through seeding or "add to cart".
pub const MAX_LINE_QUANTITY: u32 = 99;

/// Maximum length of a search query, in characters.
pub const MAX_QUERY_LENGTH: usize = 200;
