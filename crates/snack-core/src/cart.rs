//! # Cart
//!
//! The pure cart state machine. No locking, no publishing: the storefront's
//! `CartStore` wraps this in a mutex and hands out snapshots.
//!
//! ## Line State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Order Line Lifecycle                                 │
//! │                                                                         │
//! │               add()                increase()                          │
//! │   (absent) ──────────► qty = 1 ───────────────► qty = n + 1            │
//! │       ▲                   │  ◄───────────────                           │
//! │       │                   │      decrease() (n > 1)                     │
//! │       │                   │                                             │
//! │       └───────────────────┘                                             │
//! │          decrease() at qty 1, or remove()                               │
//! │                                                                         │
//! │  A line never sits at quantity 0.                                       │
//! │  Lines keep first-insertion order; nothing reorders them.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{OrderLine, Snack, SnackId};
use crate::validation::{validate_cart_size, validate_quantity};
use crate::{MAX_CART_LINES, MAX_LINE_QUANTITY};

/// The shopping cart of one session.
///
/// ## Invariants
/// - Lines are unique by snack id
/// - Every quantity is at least 1
/// - Seeding and `add` stop at `MAX_LINE_QUANTITY`; `increase` does not
/// - At most `MAX_CART_LINES` lines
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    lines: Vec<OrderLine>,

    /// When the cart was created/last cleared
    created_at: DateTime<Utc>,
}

impl Default for Cart {
    fn default() -> Self {
        Self::new()
    }
}

/// Outcome of a successful [`Cart::decrease`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decrease {
    /// The line is still there with the new quantity.
    Decremented(u32),
    /// The line was at quantity 1 and has been removed.
    Removed,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            lines: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Creates a cart seeded with the given lines.
    ///
    /// Lines for the same snack are merged into the first occurrence.
    /// Zero quantities are rejected rather than silently dropped.
    pub fn from_lines(lines: impl IntoIterator<Item = OrderLine>) -> CoreResult<Self> {
        let mut cart = Cart::new();

        for line in lines {
            validate_quantity(line.quantity)?;

            if let Some(existing) = cart.line_mut(line.snack_id()) {
                let merged = existing.quantity + line.quantity;
                if merged > MAX_LINE_QUANTITY {
                    return Err(CoreError::QuantityTooLarge {
                        requested: merged,
                        max: MAX_LINE_QUANTITY,
                    });
                }
                existing.quantity = merged;
                continue;
            }

            if cart.lines.len() >= MAX_CART_LINES {
                return Err(CoreError::CartTooLarge {
                    max: MAX_CART_LINES,
                });
            }
            cart.lines.push(line);
        }

        Ok(cart)
    }

    /// Lines in first-insertion order.
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the line for a snack, if present.
    pub fn line(&self, snack_id: SnackId) -> Option<&OrderLine> {
        self.lines.iter().find(|l| l.snack_id() == snack_id)
    }

    fn line_mut(&mut self, snack_id: SnackId) -> Option<&mut OrderLine> {
        self.lines.iter_mut().find(|l| l.snack_id() == snack_id)
    }

    /// Quantity of a snack in the cart, if present.
    pub fn quantity_of(&self, snack_id: SnackId) -> Option<u32> {
        self.line(snack_id).map(|l| l.quantity)
    }

    /// Adds one to the line's quantity and returns the new quantity.
    ///
    /// ## Errors
    /// - `SnackNotInCart` when there is no line for the snack
    pub fn increase(&mut self, snack_id: SnackId) -> CoreResult<u32> {
        let line = self
            .line_mut(snack_id)
            .ok_or(CoreError::SnackNotInCart(snack_id))?;

        line.quantity = line.quantity.saturating_add(1);
        Ok(line.quantity)
    }

    /// Takes one off the line's quantity, removing the line at quantity 1.
    ///
    /// ## Errors
    /// - `SnackNotInCart` when there is no line for the snack
    pub fn decrease(&mut self, snack_id: SnackId) -> CoreResult<Decrease> {
        let line = self
            .line_mut(snack_id)
            .ok_or(CoreError::SnackNotInCart(snack_id))?;

        if line.quantity <= 1 {
            self.remove(snack_id);
            return Ok(Decrease::Removed);
        }

        line.quantity -= 1;
        Ok(Decrease::Decremented(line.quantity))
    }

    /// Removes the line for a snack. Returns false when there was none.
    pub fn remove(&mut self, snack_id: SnackId) -> bool {
        let initial_len = self.lines.len();
        self.lines.retain(|l| l.snack_id() != snack_id);
        self.lines.len() != initial_len
    }

    /// Adds one of `snack`: a new line at quantity 1, or +1 on an existing one.
    ///
    /// Returns the resulting quantity.
    ///
    /// ## Errors
    /// - `QuantityTooLarge` when the line is already at `MAX_LINE_QUANTITY`
    /// - `CartTooLarge` when a new line would exceed `MAX_CART_LINES`
    pub fn add(&mut self, snack: &Snack) -> CoreResult<u32> {
        if let Some(quantity) = self.quantity_of(snack.id) {
            if quantity >= MAX_LINE_QUANTITY {
                return Err(CoreError::QuantityTooLarge {
                    requested: quantity.saturating_add(1),
                    max: MAX_LINE_QUANTITY,
                });
            }
            return self.increase(snack.id);
        }

        validate_cart_size(self.lines.len()).map_err(|_| CoreError::CartTooLarge {
            max: MAX_CART_LINES,
        })?;

        self.lines.push(OrderLine::new(snack.clone(), 1));
        Ok(1)
    }

    /// Clears all lines.
    pub fn clear(&mut self) {
        self.lines.clear();
        self.created_at = Utc::now();
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Sum of all quantities.
    pub fn total_quantity(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    /// Sum of all line totals.
    pub fn subtotal(&self) -> Money {
        self.lines.iter().map(OrderLine::line_total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Computes the checkout summary with a flat shipping fee.
    pub fn totals(&self, shipping_fee: Money) -> CartTotals {
        CartTotals::compute(self, shipping_fee)
    }
}

// =============================================================================
// Totals
// =============================================================================

/// Checkout summary shown under the cart lines.
///
/// ```text
/// Subtotal            $15.67
/// Shipping             $3.69
/// ──────────────────────────
/// Total               $19.36
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartTotals {
    pub line_count: usize,
    pub total_quantity: u32,
    pub subtotal: Money,
    /// Zero for an empty cart.
    pub shipping: Money,
    pub total: Money,
}

impl CartTotals {
    pub fn compute(cart: &Cart, shipping_fee: Money) -> Self {
        let subtotal = cart.subtotal();
        let shipping = if cart.is_empty() {
            Money::zero()
        } else {
            shipping_fee
        };

        CartTotals {
            line_count: cart.line_count(),
            total_quantity: cart.total_quantity(),
            subtotal,
            shipping,
            total: subtotal + shipping,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
