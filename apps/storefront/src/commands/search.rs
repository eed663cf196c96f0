//! # Search Commands
//!
//! Input from the search page. Every command returns the view right after
//! the change; searches it starts land later through
//! [`SearchState::subscribe`] (or [`get_search_view`]).
//!
//! ## Search Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  User types "Chi"                                                       │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  update_query("Chi") ──► validate length ──► SearchState::set_query     │
//! │       │                                              │                  │
//! │       ▼                                              ▼                  │
//! │  SearchView { searching: true, .. }        background search (tokio)    │
//! │                                                      │                  │
//! │                                                      ▼                  │
//! │                                  SearchView { results: [Chips], .. }    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Runtime
//! The commands are synchronous, but the ones that change the query spawn
//! the search with `tokio::spawn`. Call them from inside a tokio runtime
//! (an async task, or a thread that holds `Runtime::enter`); outside one
//! they panic.

use snack_core::validation::validate_search_query;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{SearchState, SearchView};

/// Replaces the query text and starts a search.
///
/// Must be called inside a tokio runtime; the search runs on a spawned task.
///
/// ## Errors
/// * `VALIDATION_ERROR` - query longer than the allowed maximum
pub fn update_query(search: &SearchState, query: String) -> Result<SearchView, ApiError> {
    debug!(query = %query, "update_query command");
    validate_search_query(&query).map_err(|e| ApiError::validation(e.to_string()))?;

    search.set_query(query);
    Ok(search.view())
}

pub fn set_search_focus(search: &SearchState, focused: bool) -> SearchView {
    debug!(focused, "set_search_focus command");
    search.set_focused(focused);
    search.view()
}

/// Back arrow on the search bar.
///
/// Must be called inside a tokio runtime, like [`update_query`].
pub fn clear_query(search: &SearchState) -> SearchView {
    debug!("clear_query command");
    search.clear_query();
    search.view()
}

/// Tap on a suggested term.
///
/// Must be called inside a tokio runtime, like [`update_query`].
pub fn select_suggestion(search: &SearchState, suggestion: String) -> Result<SearchView, ApiError> {
    debug!(suggestion = %suggestion, "select_suggestion command");
    update_query(search, suggestion)
}

/// Tap on a filter chip above the results.
///
/// ## Errors
/// * `NOT_FOUND` - no chip with that name
pub fn toggle_search_filter(search: &SearchState, name: &str) -> Result<SearchView, ApiError> {
    debug!(name, "toggle_search_filter command");
    search
        .toggle_filter(name)
        .ok_or_else(|| ApiError::not_found("Filter", name))?;
    Ok(search.view())
}

pub fn get_search_view(search: &SearchState) -> SearchView {
    search.view()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use snack_catalog::Catalog;
    use snack_core::{SearchDisplay, MAX_QUERY_LENGTH};
    use std::sync::Arc;
    use std::time::Duration;

    fn state() -> SearchState {
        let catalog = Catalog::sample();
        SearchState::with_reference(
            Arc::new(catalog.clone()),
            Duration::ZERO,
            &catalog.search(),
            catalog.filters().snack_filters().unwrap(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_update_query() {
        let search = state();

        let view = update_query(&search, "Chips".into()).unwrap();
        assert_eq!(view.query, "Chips");
        assert!(view.searching);

        let view = search.settled().await;
        assert_eq!(view.display, SearchDisplay::Results);
        assert_eq!(get_search_view(&search), view);
    }

    #[test]
    fn test_update_query_from_sync_caller_in_entered_runtime() {
        let runtime = tokio::runtime::Runtime::new().unwrap();
        let search = {
            let _guard = runtime.enter();
            let search = state();
            update_query(&search, "Chips".into()).unwrap();
            search
        };

        let view = runtime.block_on(search.settled());
        assert_eq!(view.display, SearchDisplay::Results);
    }

    #[tokio::test]
    async fn test_update_query_rejects_overlong_text() {
        let search = state();

        let err = update_query(&search, "x".repeat(MAX_QUERY_LENGTH + 1)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(search.view().query, "");
    }

    #[tokio::test]
    async fn test_focus_and_clear() {
        let search = state();

        assert_eq!(set_search_focus(&search, true).display, SearchDisplay::Suggestions);

        select_suggestion(&search, "Cheese".into()).unwrap();
        assert_eq!(search.settled().await.results[0].name, "Cheese");

        let view = clear_query(&search);
        assert_eq!(view.query, "");
        assert_eq!(view.display, SearchDisplay::Suggestions);
    }

    #[tokio::test]
    async fn test_toggle_search_filter() {
        let search = state();

        let view = toggle_search_filter(&search, "Savory").unwrap();
        assert!(view.filters.iter().any(|f| f.name == "Savory" && f.enabled));

        let err = toggle_search_filter(&search, "Spicy").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }
}
