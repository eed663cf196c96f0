//! # Commands Module
//!
//! Everything the presentation layer calls.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── cart.rs     ◄─── Cart manipulation
//! ├── search.rs   ◄─── Search page input
//! └── snack.rs    ◄─── Snack detail and home feed
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Presentation                                                           │
//! │  ────────────                                                           │
//! │  increase_item(&cart, 15)                                               │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  fn increase_item(                                                      │
//! │      cart: &CartStore,      ◄── only the state it needs                 │
//! │      snack_id: i64,         ◄── raw id from the view                    │
//! │  ) -> Result<CartResponse, ApiError>                                    │
//! │         │                                                               │
//! │         │ (serde, camelCase)                                            │
//! │         ▼                                                               │
//! │  Presentation receives: CartResponse                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod search;
pub mod snack;
