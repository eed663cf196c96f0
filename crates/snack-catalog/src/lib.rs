//! # snack-catalog: Catalog Provider
//!
//! Serves the storefront's reference data from memory.
//!
//! ## Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        snack-catalog                                    │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   Catalog (entry point)                         │   │
//! │  │  catalog.snacks()  → SnackRepository                            │   │
//! │  │  catalog.search()  → SearchRepository                           │   │
//! │  │  catalog.filters() → FilterRepository                           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                              │                                          │
//! │                              ▼                                          │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │       Arc<CatalogData> (seed::sample() or caller-supplied)     │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                                                         │
//! │  CatalogProvider (trait) ◄── implemented by Catalog, consumed by the   │
//! │                              storefront's SearchState                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use snack_catalog::Catalog;
//!
//! let catalog = Catalog::sample();
//! let feed = catalog.snacks().collections().unwrap();
//! assert_eq!(feed[0].name, "Android's picks");
//! ```

pub mod error;
pub mod provider;
pub mod repository;
pub mod seed;

pub use error::{CatalogError, CatalogResult};
pub use provider::CatalogProvider;
pub use repository::{FilterRepository, SearchRepository, SnackRepository};
pub use seed::{CatalogData, FilterGroups};

use std::sync::Arc;

use snack_core::validation::validate_catalog;
use tracing::{info, warn};

use repository::CatalogStatus;

/// Handle to an in-memory catalog.
///
/// Cheap to clone; clones share data and the availability switch.
#[derive(Debug, Clone)]
pub struct Catalog {
    data: Arc<CatalogData>,
    status: Arc<CatalogStatus>,
}

impl Catalog {
    /// Creates a catalog from caller-supplied data after validating it.
    ///
    /// ## Errors
    /// `CatalogError::Invalid` when a snack has an empty name, a negative
    /// price, or a duplicate id.
    pub fn new(data: CatalogData) -> CatalogResult<Self> {
        validate_catalog(&data.snacks)?;
        Ok(Self::from_data(data))
    }

    /// The demo catalog.
    ///
    /// The seed is checked with the same rules as [`Catalog::new`]; a
    /// failure is logged rather than returned, since the data is static.
    pub fn sample() -> Self {
        let data = seed::sample();
        if let Err(err) = validate_catalog(&data.snacks) {
            warn!(error = %err, "Sample catalog failed validation");
        }

        let catalog = Self::from_data(data);
        info!(
            snacks = catalog.data.snacks.len(),
            collections = catalog.data.feed.len(),
            "Sample catalog loaded"
        );
        catalog
    }

    fn from_data(data: CatalogData) -> Self {
        Catalog {
            data: Arc::new(data),
            status: Arc::new(CatalogStatus::new()),
        }
    }

    /// Gets the snack repository.
    pub fn snacks(&self) -> SnackRepository {
        SnackRepository::new(self.data.clone(), self.status.clone())
    }

    /// Gets the search reference data repository.
    pub fn search(&self) -> SearchRepository {
        SearchRepository::new(self.data.clone(), self.status.clone())
    }

    /// Gets the filter repository.
    pub fn filters(&self) -> FilterRepository {
        FilterRepository::new(self.data.clone(), self.status.clone())
    }

    /// Simulates an outage (`false`) or recovery (`true`).
    pub fn set_available(&self, available: bool) {
        info!(available, "Catalog availability changed");
        self.status.set_available(available);
    }

    pub fn is_available(&self) -> bool {
        self.status.is_available()
    }
}
