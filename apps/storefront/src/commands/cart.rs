//! # Cart Commands
//!
//! Cart manipulation for the cart screen and the snack detail page.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                         │
//! │  │  Seeded  │────►│ In Cart  │────►│  Empty   │                         │
//! │  │  Cart    │     │          │     │  Cart    │                         │
//! │  └──────────┘     └──────────┘     └──────────┘                         │
//! │                        │                ▲                               │
//! │                   add_to_cart           │                               │
//! │                   increase_item         │                               │
//! │                   decrease_item ────────┤ (last unit)                   │
//! │                   remove_item  ─────────┘                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use snack_catalog::Catalog;
use snack_core::{CartTotals, OrderLine, SnackId};
use tracing::debug;

use crate::error::ApiError;
use crate::state::{CartSnapshot, CartStore};

/// Cart response including lines and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<OrderLine>,
    pub totals: CartTotals,
    pub version: u64,
}

impl From<CartSnapshot> for CartResponse {
    fn from(snapshot: CartSnapshot) -> Self {
        CartResponse {
            lines: snapshot.lines,
            totals: snapshot.totals,
            version: snapshot.version,
        }
    }
}

/// Gets the current cart contents.
///
/// ## Cart Display
/// ```text
/// ┌────────────────────────────────────────────────────────────────┐
/// │  Order (3 items)                                               │
/// ├────────────────────────────────────────────────────────────────┤
/// │  Gingerbread            − 2 +                   $9.98          │
/// │  Ice Cream Sandwich     − 3 +                  $38.97          │
/// │  KitKat                 − 1 +                   $5.49          │
/// ├────────────────────────────────────────────────────────────────┤
/// │  Subtotal                                      $54.44          │
/// │  Shipping                                       $3.69          │
/// │  Total                                         $58.13          │
/// └────────────────────────────────────────────────────────────────┘
/// ```
pub fn get_cart(cart: &CartStore) -> CartResponse {
    debug!("get_cart command");
    cart.snapshot().into()
}

/// "+" on a cart line.
///
/// ## Errors
/// * `NOT_FOUND` - snack is not in the cart
/// * `TRANSIENT_REJECTION` - simulated failure; the snackbar was notified
pub fn increase_item(cart: &CartStore, snack_id: i64) -> Result<CartResponse, ApiError> {
    debug!(snack_id, "increase_item command");
    Ok(cart.increase_quantity(SnackId::new(snack_id))?.into())
}

/// "−" on a cart line; the last unit removes the line.
pub fn decrease_item(cart: &CartStore, snack_id: i64) -> Result<CartResponse, ApiError> {
    debug!(snack_id, "decrease_item command");
    Ok(cart.decrease_quantity(SnackId::new(snack_id))?.into())
}

/// Removes a line. Never fails; unknown ids leave the cart as it is.
pub fn remove_item(cart: &CartStore, snack_id: i64) -> CartResponse {
    debug!(snack_id, "remove_item command");
    cart.remove_line(SnackId::new(snack_id)).into()
}

/// "Add to cart" on the snack detail page.
///
/// ## Flow
/// 1. Look the snack up in the catalog (current price)
/// 2. New line with quantity 1, or bump the existing line
/// 3. Return the updated cart
pub fn add_to_cart(
    catalog: &Catalog,
    cart: &CartStore,
    snack_id: i64,
) -> Result<CartResponse, ApiError> {
    debug!(snack_id, "add_to_cart command");

    let snack = catalog.snacks().get_by_id(SnackId::new(snack_id))?;
    Ok(cart.add_snack(&snack)?.into())
}
