//! # Repository Module
//!
//! Read-only repositories over the in-memory catalog.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │  Storefront state / command                                            │
//! │       │                                                                 │
//! │       │  catalog.snacks().related(id)                                  │
//! │       ▼                                                                 │
//! │  SnackRepository ─┐                                                    │
//! │  SearchRepository ├──► Arc<CatalogData> (shared, immutable)            │
//! │  FilterRepository ┘        + availability switch                       │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every call first checks the shared availability switch, so an outage is
//! visible through all repositories at once.
//!
//! ## Available Repositories
//!
//! - [`SnackRepository`] - Snacks, feed rows, related rows, initial cart
//! - [`SearchRepository`] - Search categories and suggestions
//! - [`FilterRepository`] - Filter chip groups

pub mod filter;
pub mod search;
pub mod snack;

pub use filter::FilterRepository;
pub use search::SearchRepository;
pub use snack::SnackRepository;

use std::sync::atomic::{AtomicBool, Ordering};

use crate::error::{CatalogError, CatalogResult};

/// Availability switch shared by all repositories of one catalog.
#[derive(Debug)]
pub(crate) struct CatalogStatus {
    available: AtomicBool,
}

impl CatalogStatus {
    pub(crate) fn new() -> Self {
        CatalogStatus {
            available: AtomicBool::new(true),
        }
    }

    pub(crate) fn set_available(&self, available: bool) {
        self.available.store(available, Ordering::SeqCst);
    }

    pub(crate) fn is_available(&self) -> bool {
        self.available.load(Ordering::SeqCst)
    }

    pub(crate) fn ensure_available(&self) -> CatalogResult<()> {
        if self.is_available() {
            Ok(())
        } else {
            Err(CatalogError::Unavailable(
                "snack catalog is offline".to_string(),
            ))
        }
    }
}
