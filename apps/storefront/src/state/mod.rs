//! # State Module
//!
//! Session state owned by the storefront.
//!
//! Each piece of state is its own type and commands take only what they need.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐  ┌──────────────┐  ┌──────────────────┐              │
//! │  │  CartStore   │  │ SearchState  │  │ SnackbarManager  │              │
//! │  │              │  │              │  │                  │              │
//! │  │  Mutex<Cart> │  │  generation  │  │  message queue   │              │
//! │  │  + watch     │  │  + watch     │  │  (watch)         │              │
//! │  └──────┬───────┘  └──────────────┘  └────────▲─────────┘              │
//! │         │      notify(MessageId) on rejection  │                        │
//! │         └──────────────────────────────────────┘                        │
//! │                                                                         │
//! │  ┌──────────────────┐                                                  │
//! │  │   StoreConfig    │  read-only after startup                         │
//! │  └──────────────────┘                                                  │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • CartStore: Mutex held for the whole mutate + publish step           │
//! │  • SearchState: Mutex never held across an await                       │
//! │  • StoreConfig: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod cart;
mod config;
mod search;
mod snackbar;

pub use cart::{CartSnapshot, CartStore};
pub use config::{ConfigError, ConfigResult, StoreConfig, MAX_SEARCH_LATENCY_MS};
pub use search::{SearchState, SearchView};
pub use snackbar::{Message, MessageId, NotificationSink, SnackbarManager};
