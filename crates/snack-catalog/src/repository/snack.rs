//! # Snack Repository
//!
//! Snacks, feed rows and the lookups of the snack detail page.
//!
//! ## Search
//! ```text
//! User types: "Chips"
//!      │
//!      ▼
//! Linear scan over every snack name (case-sensitive substring)
//!      │
//!      ├── "Chips"        ← MATCH
//!      ├── "Apple chips"  ✗ (lowercase c)
//!      └── "Cupcake"      ✗
//!      │
//!      ▼
//! Results in catalog order: [Chips]
//! ```

use std::sync::Arc;

use snack_core::search::filter_snacks;
use snack_core::{OrderLine, Snack, SnackCollection, SnackId};
use tracing::debug;

use super::CatalogStatus;
use crate::error::{CatalogError, CatalogResult};
use crate::seed::CatalogData;

/// Repository for snack lookups.
///
/// ## Usage
/// ```rust
/// use snack_catalog::Catalog;
/// use snack_core::SnackId;
///
/// let catalog = Catalog::sample();
/// let chips = catalog.snacks().search("Chips").unwrap();
/// assert_eq!(chips[0].id, SnackId::new(15));
/// ```
#[derive(Debug, Clone)]
pub struct SnackRepository {
    data: Arc<CatalogData>,
    status: Arc<CatalogStatus>,
}

impl SnackRepository {
    pub(crate) fn new(data: Arc<CatalogData>, status: Arc<CatalogStatus>) -> Self {
        SnackRepository { data, status }
    }

    /// Every snack, in catalog order.
    pub fn all(&self) -> CatalogResult<Vec<Snack>> {
        self.status.ensure_available()?;
        Ok(self.data.snacks.clone())
    }

    /// Gets a snack by id.
    ///
    /// ## Returns
    /// * `Ok(Snack)` - Snack found
    /// * `Err(SnackNotFound)` - Unknown id
    pub fn get_by_id(&self, id: SnackId) -> CatalogResult<Snack> {
        self.status.ensure_available()?;
        self.find(id)
            .cloned()
            .ok_or(CatalogError::SnackNotFound(id))
    }

    fn find(&self, id: SnackId) -> Option<&Snack> {
        self.data.snacks.iter().find(|s| s.id == id)
    }

    /// Feed rows of the home screen.
    pub fn collections(&self) -> CatalogResult<Vec<SnackCollection>> {
        self.status.ensure_available()?;
        Ok(self.data.feed.clone())
    }

    /// Rows shown under a snack's detail page.
    ///
    /// The snack itself is left out of every row so the page never
    /// recommends what is already on screen.
    pub fn related(&self, id: SnackId) -> CatalogResult<Vec<SnackCollection>> {
        self.status.ensure_available()?;
        if self.find(id).is_none() {
            return Err(CatalogError::SnackNotFound(id));
        }

        let rows = self
            .data
            .related
            .iter()
            .map(|row| SnackCollection {
                snacks: row.snacks.iter().filter(|s| s.id != id).cloned().collect(),
                ..row.clone()
            })
            .collect();

        Ok(rows)
    }

    /// The "Inspired by your cart" row, if the catalog has one.
    pub fn inspired_by_cart(&self) -> CatalogResult<Option<SnackCollection>> {
        self.status.ensure_available()?;
        Ok(self.data.inspired_by_cart.clone())
    }

    /// Order lines a new cart session is seeded with.
    ///
    /// Entries pointing at unknown snacks are skipped.
    pub fn initial_cart(&self) -> CatalogResult<Vec<OrderLine>> {
        self.status.ensure_available()?;

        let lines = self
            .data
            .initial_cart
            .iter()
            .filter_map(|(id, qty)| match self.find(*id) {
                Some(snack) => Some(OrderLine::new(snack.clone(), *qty)),
                None => {
                    debug!(snack_id = %id, "Initial cart entry has no snack, skipping");
                    None
                }
            })
            .collect();

        Ok(lines)
    }

    /// Case-sensitive substring search on snack names.
    pub fn search(&self, query: &str) -> CatalogResult<Vec<Snack>> {
        self.status.ensure_available()?;

        debug!(query = %query, "Searching snacks");
        let results = filter_snacks(&self.data.snacks, query);
        debug!(count = results.len(), "Search returned snacks");

        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use crate::Catalog;
    use snack_core::SnackId;

    #[test]
    fn test_get_by_id() {
        let catalog = Catalog::sample();
        let snack = catalog.snacks().get_by_id(SnackId::new(1)).unwrap();
        assert_eq!(snack.name, "Cupcake");

        assert!(catalog.snacks().get_by_id(SnackId::new(999)).is_err());
    }

    #[test]
    fn test_search_is_case_sensitive() {
        let catalog = Catalog::sample();

        let names: Vec<String> = catalog
            .snacks()
            .search("Apple")
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(
            names,
            vec!["Apples", "Apple sauce", "Apple chips", "Apple juice", "Apple pie"]
        );

        let names: Vec<String> = catalog
            .snacks()
            .search("chips")
            .unwrap()
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Apple chips"]);

        assert!(catalog.snacks().search("zzzzz").unwrap().is_empty());
    }

    #[test]
    fn test_related_excludes_the_snack_itself() {
        let catalog = Catalog::sample();
        let rows = catalog.snacks().related(SnackId::new(1)).unwrap();

        assert_eq!(rows.len(), 2);
        assert!(rows
            .iter()
            .all(|row| row.snacks.iter().all(|s| s.id != SnackId::new(1))));
    }

    #[test]
    fn test_related_unknown_snack() {
        let catalog = Catalog::sample();
        assert!(catalog.snacks().related(SnackId::new(404)).is_err());
    }

    #[test]
    fn test_initial_cart() {
        let catalog = Catalog::sample();
        let lines = catalog.snacks().initial_cart().unwrap();

        let summary: Vec<(&str, u32)> = lines
            .iter()
            .map(|l| (l.snack.name.as_str(), l.quantity))
            .collect();
        assert_eq!(
            summary,
            vec![("Gingerbread", 2), ("Ice Cream Sandwich", 3), ("KitKat", 1)]
        );
    }

    #[test]
    fn test_outage_affects_every_lookup() {
        let catalog = Catalog::sample();
        catalog.set_available(false);

        assert!(catalog.snacks().all().unwrap_err().is_unavailable());
        assert!(catalog.snacks().search("Chips").unwrap_err().is_unavailable());
        assert!(catalog
            .snacks()
            .get_by_id(SnackId::new(1))
            .unwrap_err()
            .is_unavailable());

        catalog.set_available(true);
        assert!(catalog.snacks().search("Chips").is_ok());
    }
}
