//! # Catalog Provider
//!
//! The seam between session state and wherever snacks come from. The
//! storefront's `SearchState` only sees this trait, which lets tests plug in
//! slow or failing catalogs.

use async_trait::async_trait;
use snack_core::{Snack, SnackCollection, SnackId};
use tracing::debug;

use crate::error::CatalogResult;
use crate::Catalog;

/// Read-only access to the snack catalog.
#[async_trait]
pub trait CatalogProvider: Send + Sync {
    /// Snacks whose name contains `query` (case-sensitive).
    ///
    /// May suspend; callers run it off the UI path.
    async fn search(&self, query: &str) -> CatalogResult<Vec<Snack>>;

    /// Looks up one snack.
    fn snack(&self, id: SnackId) -> CatalogResult<Snack>;

    /// Rows of snacks related to `id`.
    fn related(&self, id: SnackId) -> CatalogResult<Vec<SnackCollection>>;
}

#[async_trait]
impl CatalogProvider for Catalog {
    async fn search(&self, query: &str) -> CatalogResult<Vec<Snack>> {
        debug!(query = %query, "CatalogProvider::search");
        self.snacks().search(query)
    }

    fn snack(&self, id: SnackId) -> CatalogResult<Snack> {
        self.snacks().get_by_id(id)
    }

    fn related(&self, id: SnackId) -> CatalogResult<Vec<SnackCollection>> {
        self.snacks().related(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_catalog_as_dyn_provider() {
        let provider: Arc<dyn CatalogProvider> = Arc::new(Catalog::sample());

        let results = provider.search("Chips").await.unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Chips");

        assert_eq!(provider.snack(SnackId::new(2)).unwrap().name, "Donut");
        assert!(!provider.related(SnackId::new(2)).unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_provider_reports_outage() {
        let catalog = Catalog::sample();
        catalog.set_available(false);

        let err = CatalogProvider::search(&catalog, "Chips").await.unwrap_err();
        assert!(err.is_unavailable());
    }
}
