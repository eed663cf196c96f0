//! # Search Repository
//!
//! Reference data for the two idle panels of the search page: category tiles
//! (unfocused, empty query) and suggested terms (focused, empty query).

use std::sync::Arc;

use snack_core::{SearchCategoryCollection, SearchSuggestionGroup};

use super::CatalogStatus;
use crate::error::CatalogResult;
use crate::seed::CatalogData;

#[derive(Debug, Clone)]
pub struct SearchRepository {
    data: Arc<CatalogData>,
    status: Arc<CatalogStatus>,
}

impl SearchRepository {
    pub(crate) fn new(data: Arc<CatalogData>, status: Arc<CatalogStatus>) -> Self {
        SearchRepository { data, status }
    }

    /// Category tile groups ("Categories", "Lifestyles").
    pub fn categories(&self) -> CatalogResult<Vec<SearchCategoryCollection>> {
        self.status.ensure_available()?;
        Ok(self.data.categories.clone())
    }

    /// Suggested term groups ("Recent searches", "Popular searches").
    pub fn suggestions(&self) -> CatalogResult<Vec<SearchSuggestionGroup>> {
        self.status.ensure_available()?;
        Ok(self.data.suggestions.clone())
    }
}
