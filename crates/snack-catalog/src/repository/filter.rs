//! # Filter Repository
//!
//! Filter chip groups. Each call hands out a fresh [`FilterSet`] so every
//! view toggles its own copy.

use std::sync::Arc;

use snack_core::{Filter, FilterSet};

use super::CatalogStatus;
use crate::error::CatalogResult;
use crate::seed::CatalogData;

#[derive(Debug, Clone)]
pub struct FilterRepository {
    data: Arc<CatalogData>,
    status: Arc<CatalogStatus>,
}

impl FilterRepository {
    pub(crate) fn new(data: Arc<CatalogData>, status: Arc<CatalogStatus>) -> Self {
        FilterRepository { data, status }
    }

    fn group(&self, pick: impl FnOnce(&CatalogData) -> &Vec<Filter>) -> CatalogResult<FilterSet> {
        self.status.ensure_available()?;
        Ok(FilterSet::new(pick(&self.data).clone()))
    }

    /// Chips shown above feed rows and search results.
    pub fn snack_filters(&self) -> CatalogResult<FilterSet> {
        self.group(|d| &d.filters.snack)
    }

    pub fn price_filters(&self) -> CatalogResult<FilterSet> {
        self.group(|d| &d.filters.price)
    }

    pub fn sort_filters(&self) -> CatalogResult<FilterSet> {
        self.group(|d| &d.filters.sort)
    }

    /// Label of the sort option selected by default.
    pub fn sort_default(&self) -> CatalogResult<String> {
        self.status.ensure_available()?;
        Ok(self.data.filters.sort_default.clone())
    }

    pub fn category_filters(&self) -> CatalogResult<FilterSet> {
        self.group(|d| &d.filters.category)
    }

    pub fn lifestyle_filters(&self) -> CatalogResult<FilterSet> {
        self.group(|d| &d.filters.lifestyle)
    }
}

#[cfg(test)]
mod tests {
    use crate::Catalog;

    #[test]
    fn test_groups() {
        let filters = Catalog::sample().filters();

        assert_eq!(filters.snack_filters().unwrap().filters().len(), 5);
        assert_eq!(filters.price_filters().unwrap().filters()[3].name, "$$$$");
        assert_eq!(filters.category_filters().unwrap().filters().len(), 4);
        assert_eq!(filters.lifestyle_filters().unwrap().filters().len(), 5);
    }

    #[test]
    fn test_sort_default_is_first_sort_option() {
        let filters = Catalog::sample().filters();
        let sort = filters.sort_filters().unwrap();

        assert_eq!(sort.filters()[0].name, filters.sort_default().unwrap());
        assert!(sort.filters().iter().all(|f| f.icon.is_some()));
    }

    #[test]
    fn test_each_call_returns_an_independent_copy() {
        let filters = Catalog::sample().filters();

        let mut mine = filters.snack_filters().unwrap();
        mine.toggle("Organic");

        let fresh = filters.snack_filters().unwrap();
        assert_eq!(fresh.enabled().count(), 0);
    }
}
