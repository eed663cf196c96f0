//! # Search State
//!
//! State of the search page: query text, focus, the last result list, and
//! the background searches that fill it.
//!
//! ## Superseding Searches
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  set_query("a")   ──► generation = 1 ──► spawn search #1 ─┐             │
//! │  set_query("ab")  ──► generation = 2 ──► spawn search #2 ─┼─┐           │
//! │                                                           │ │           │
//! │  search #2 done: 2 == current ──► results published  ◄────┼─┘           │
//! │  search #1 done: 1 != current ──► discarded          ◄────┘             │
//! │                                                                         │
//! │  Only the latest issued generation may touch results or the busy flag. │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Locks are never held across an `.await`.

use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use serde::Serialize;
use snack_catalog::{CatalogProvider, CatalogResult, SearchRepository};
use snack_core::{
    CoreError, Filter, FilterSet, SearchCategoryCollection, SearchDisplay, SearchSuggestionGroup,
    Snack,
};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

/// Immutable view of the search page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchView {
    pub query: String,
    pub focused: bool,
    /// True while the latest search is in flight.
    pub searching: bool,
    pub results: Vec<Snack>,
    pub display: SearchDisplay,
    /// Why the last search came back empty, if it failed.
    pub last_error: Option<String>,
    pub filters: Vec<Filter>,
    pub generation: u64,
}

impl SearchView {
    /// Results that pass every enabled filter chip.
    pub fn filtered_results(&self) -> Vec<&Snack> {
        let filters = FilterSet::new(self.filters.clone());
        self.results.iter().filter(|s| filters.accepts(s)).collect()
    }
}

#[derive(Debug, Default)]
struct SearchFields {
    query: String,
    focused: bool,
    searching: bool,
    results: Vec<Snack>,
    last_error: Option<String>,
    filters: FilterSet,
    generation: u64,
}

impl SearchFields {
    fn view(&self) -> SearchView {
        SearchView {
            query: self.query.clone(),
            focused: self.focused,
            searching: self.searching,
            results: self.results.clone(),
            display: SearchDisplay::classify(&self.query, self.focused, !self.results.is_empty()),
            last_error: self.last_error.clone(),
            filters: self.filters.filters().to_vec(),
            generation: self.generation,
        }
    }
}

struct SearchShared {
    fields: Mutex<SearchFields>,
    catalog: Arc<dyn CatalogProvider>,
    latency: Duration,
    views: watch::Sender<SearchView>,
}

impl SearchShared {
    fn lock(&self) -> MutexGuard<'_, SearchFields> {
        self.fields.lock().expect("Search mutex poisoned")
    }

    fn publish(&self, fields: &SearchFields) {
        self.views.send_replace(fields.view());
    }

    fn is_current(&self, generation: u64) -> bool {
        self.lock().generation == generation
    }

    async fn run(self: Arc<Self>, generation: u64, query: String) {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        if !self.is_current(generation) {
            debug!(generation, "Search superseded before lookup");
            return;
        }

        let outcome = self.catalog.search(&query).await;

        let mut fields = self.lock();
        if fields.generation != generation {
            debug!(generation, current = fields.generation, "Discarding stale search results");
            return;
        }

        match outcome {
            Ok(results) => {
                debug!(generation, query = %query, count = results.len(), "Search finished");
                fields.results = results;
                fields.last_error = None;
            }
            Err(err) => {
                let err = CoreError::from(err);
                warn!(generation, query = %query, error = %err, "Search failed, showing no results");
                fields.results.clear();
                fields.last_error = Some(err.to_string());
            }
        }
        fields.searching = false;
        self.publish(&fields);
    }
}

/// Reference data for the idle panels, loaded once per search page.
#[derive(Debug, Clone, Default)]
struct SearchReference {
    categories: Vec<SearchCategoryCollection>,
    suggestions: Vec<SearchSuggestionGroup>,
}

/// State of one visit to the search page.
///
/// ## Usage
/// ```rust,no_run
/// use std::sync::Arc;
/// use std::time::Duration;
/// use snack_catalog::Catalog;
/// use snack_storefront::state::SearchState;
///
/// # async fn demo() {
/// let catalog = Catalog::sample();
/// let search = SearchState::new(Arc::new(catalog.clone()), Duration::ZERO);
///
/// if let Some(task) = search.set_query("Chips") {
///     task.await.unwrap();
/// }
/// assert_eq!(search.view().results[0].name, "Chips");
/// # }
/// ```
pub struct SearchState {
    shared: Arc<SearchShared>,
    reference: SearchReference,
}

impl SearchState {
    /// A search page without category or suggestion panels.
    pub fn new(catalog: Arc<dyn CatalogProvider>, latency: Duration) -> Self {
        let fields = SearchFields::default();
        let (views, _) = watch::channel(fields.view());

        SearchState {
            shared: Arc::new(SearchShared {
                fields: Mutex::new(fields),
                catalog,
                latency,
                views,
            }),
            reference: SearchReference::default(),
        }
    }

    /// A search page with its panels loaded from the catalog.
    ///
    /// ## Errors
    /// `CatalogError::Unavailable` when the reference data cannot be read.
    pub fn with_reference(
        catalog: Arc<dyn CatalogProvider>,
        latency: Duration,
        search: &SearchRepository,
        filters: FilterSet,
    ) -> CatalogResult<Self> {
        let mut state = Self::new(catalog, latency);
        state.reference = SearchReference {
            categories: search.categories()?,
            suggestions: search.suggestions()?,
        };

        {
            let mut fields = state.shared.lock();
            fields.filters = filters;
            state.shared.publish(&fields);
        }

        info!(
            categories = state.reference.categories.len(),
            suggestions = state.reference.suggestions.len(),
            "Search page opened"
        );
        Ok(state)
    }

    /// Replaces the query and starts a search for it.
    ///
    /// Results and error of the previous query are cleared right away, so the
    /// view shows `NoResults` (or an idle panel) until the new search lands.
    /// Returns the background task, or `None` when the text did not change.
    /// Must be called inside a tokio runtime.
    pub fn set_query(&self, query: impl Into<String>) -> Option<JoinHandle<()>> {
        let query = query.into();

        let generation = {
            let mut fields = self.shared.lock();
            if fields.query == query {
                return None;
            }
            fields.query = query.clone();
            fields.generation += 1;
            fields.searching = true;
            fields.results.clear();
            fields.last_error = None;
            self.shared.publish(&fields);
            fields.generation
        };

        debug!(generation, query = %query, "Search issued");
        let shared = self.shared.clone();
        Some(tokio::spawn(shared.run(generation, query)))
    }

    pub fn set_focused(&self, focused: bool) {
        let mut fields = self.shared.lock();
        if fields.focused != focused {
            fields.focused = focused;
            self.shared.publish(&fields);
        }
    }

    /// Back arrow: empties the query. Needs a tokio runtime, like `set_query`.
    pub fn clear_query(&self) -> Option<JoinHandle<()>> {
        self.set_query("")
    }

    pub fn select_suggestion(&self, suggestion: &str) -> Option<JoinHandle<()>> {
        self.set_query(suggestion)
    }

    /// Flips a filter chip; `None` if no chip has that name.
    pub fn toggle_filter(&self, name: &str) -> Option<bool> {
        let mut fields = self.shared.lock();
        let enabled = fields.filters.toggle(name)?;
        self.shared.publish(&fields);
        Some(enabled)
    }

    pub fn view(&self) -> SearchView {
        self.shared.views.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SearchView> {
        self.shared.views.subscribe()
    }

    /// Waits until no search is in flight and returns the view.
    pub async fn settled(&self) -> SearchView {
        let mut rx = self.subscribe();
        let view = match rx.wait_for(|v| !v.searching).await {
            Ok(view) => view.clone(),
            Err(_) => self.view(),
        };
        view
    }

    pub fn categories(&self) -> &[SearchCategoryCollection] {
        &self.reference.categories
    }

    pub fn suggestions(&self) -> &[SearchSuggestionGroup] {
        &self.reference.suggestions
    }

    pub fn filters(&self) -> Vec<Filter> {
        self.shared.lock().filters.filters().to_vec()
    }
}

impl std::fmt::Debug for SearchState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let view = self.view();
        f.debug_struct("SearchState")
            .field("query", &view.query)
            .field("generation", &view.generation)
            .field("searching", &view.searching)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use snack_catalog::Catalog;
    use snack_core::{SnackCollection, SnackId};

    fn names(view: &SearchView) -> Vec<&str> {
        view.results.iter().map(|s| s.name.as_str()).collect()
    }

    /// Catalog whose single-letter searches are much slower than longer ones.
    struct SlowShortQueries {
        inner: Catalog,
    }

    #[async_trait]
    impl CatalogProvider for SlowShortQueries {
        async fn search(&self, query: &str) -> CatalogResult<Vec<Snack>> {
            let delay = if query.chars().count() == 1 { 500 } else { 10 };
            tokio::time::sleep(Duration::from_millis(delay)).await;
            self.inner.snacks().search(query)
        }

        fn snack(&self, id: SnackId) -> CatalogResult<Snack> {
            self.inner.snacks().get_by_id(id)
        }

        fn related(&self, id: SnackId) -> CatalogResult<Vec<SnackCollection>> {
            self.inner.snacks().related(id)
        }
    }

    fn sample_state(latency: Duration) -> (SearchState, Catalog) {
        let catalog = Catalog::sample();
        let state = SearchState::with_reference(
            Arc::new(catalog.clone()),
            latency,
            &catalog.search(),
            catalog.filters().snack_filters().unwrap(),
        )
        .unwrap();
        (state, catalog)
    }

    #[tokio::test]
    async fn test_idle_panels() {
        let (state, _) = sample_state(Duration::ZERO);

        assert_eq!(state.view().display, SearchDisplay::Categories);
        state.set_focused(true);
        assert_eq!(state.view().display, SearchDisplay::Suggestions);
        state.set_focused(false);
        assert_eq!(state.view().display, SearchDisplay::Categories);

        assert_eq!(state.categories().len(), 2);
        assert_eq!(state.suggestions()[0].name, "Recent searches");
        assert_eq!(state.filters().len(), 5);
    }

    #[tokio::test]
    async fn test_search_results() {
        let (state, _) = sample_state(Duration::ZERO);

        state.set_query("Chips").unwrap().await.unwrap();
        let view = state.view();
        assert_eq!(view.display, SearchDisplay::Results);
        assert_eq!(names(&view), vec!["Chips"]);

        state.set_query("zzzzz").unwrap().await.unwrap();
        let view = state.view();
        assert_eq!(view.display, SearchDisplay::NoResults);
        assert!(view.results.is_empty());
        assert!(view.last_error.is_none());
    }

    #[tokio::test]
    async fn test_same_query_starts_nothing() {
        let (state, _) = sample_state(Duration::ZERO);

        state.set_query("Chips").unwrap().await.unwrap();
        assert!(state.set_query("Chips").is_none());
        assert_eq!(state.view().generation, 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_searching_flag_while_in_flight() {
        let (state, _) = sample_state(Duration::from_millis(200));

        let task = state.set_query("Apple").unwrap();
        assert!(state.view().searching);

        task.await.unwrap();
        let view = state.view();
        assert!(!view.searching);
        assert_eq!(view.results.len(), 5);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_query_drops_old_results_while_in_flight() {
        let (state, _) = sample_state(Duration::from_millis(200));

        state.set_query("Chips").unwrap().await.unwrap();
        assert_eq!(state.view().display, SearchDisplay::Results);

        let task = state.set_query("zzzzz").unwrap();
        let view = state.view();
        assert_eq!(view.query, "zzzzz");
        assert!(view.searching);
        assert!(view.results.is_empty());
        assert_eq!(view.display, SearchDisplay::NoResults);

        task.await.unwrap();
        let view = state.view();
        assert!(!view.searching);
        assert_eq!(view.display, SearchDisplay::NoResults);
    }

    #[tokio::test(start_paused = true)]
    async fn test_later_query_supersedes_slower_earlier_one() {
        let catalog = Catalog::sample();
        let state = SearchState::new(
            Arc::new(SlowShortQueries { inner: catalog }),
            Duration::ZERO,
        );

        let first = state.set_query("A").unwrap();
        let second = state.set_query("Apple").unwrap();

        second.await.unwrap();
        assert!(!state.view().searching);
        first.await.unwrap();

        let view = state.view();
        assert_eq!(view.query, "Apple");
        assert_eq!(view.generation, 2);
        assert_eq!(
            names(&view),
            vec!["Apples", "Apple sauce", "Apple chips", "Apple juice", "Apple pie"]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_stale_results_never_leak_into_empty_match() {
        let catalog = Catalog::sample();
        let state = SearchState::new(
            Arc::new(SlowShortQueries { inner: catalog }),
            Duration::ZERO,
        );

        let first = state.set_query("a").unwrap();
        let second = state.set_query("ab").unwrap();
        first.await.unwrap();
        second.await.unwrap();

        let view = state.view();
        assert_eq!(view.query, "ab");
        assert!(view.results.is_empty());
        assert_eq!(view.display, SearchDisplay::NoResults);
    }

    #[tokio::test(start_paused = true)]
    async fn test_busy_flag_stays_until_latest_search_finishes() {
        let catalog = Catalog::sample();
        let state = SearchState::new(
            Arc::new(SlowShortQueries { inner: catalog }),
            Duration::ZERO,
        );

        let _earlier = state.set_query("Ap").unwrap();
        let latest = state.set_query("C").unwrap();

        tokio::time::sleep(Duration::from_millis(50)).await;
        // "Ap" has finished by now but was superseded.
        assert!(state.view().searching);

        latest.await.unwrap();
        assert!(!state.view().searching);
    }

    #[tokio::test]
    async fn test_outage_falls_back_to_no_results() {
        let (state, catalog) = sample_state(Duration::ZERO);

        state.set_query("Chips").unwrap().await.unwrap();
        assert_eq!(state.view().display, SearchDisplay::Results);

        catalog.set_available(false);
        state.set_query("Chip").unwrap().await.unwrap();

        let view = state.view();
        assert_eq!(view.display, SearchDisplay::NoResults);
        assert!(view.results.is_empty());
        assert!(view.last_error.unwrap().contains("unavailable"));

        catalog.set_available(true);
        state.set_query("Chips").unwrap().await.unwrap();
        assert!(state.view().last_error.is_none());
    }

    #[tokio::test]
    async fn test_clear_query_and_suggestions() {
        let (state, _) = sample_state(Duration::ZERO);
        state.set_focused(true);

        state.select_suggestion("Apple sauce").unwrap().await.unwrap();
        assert_eq!(names(&state.view()), vec!["Apple sauce"]);

        state.clear_query().unwrap().await.unwrap();
        let view = state.view();
        assert_eq!(view.query, "");
        assert_eq!(view.display, SearchDisplay::Suggestions);
    }

    #[tokio::test]
    async fn test_toggle_filter_narrows_filtered_results() {
        let (state, _) = sample_state(Duration::ZERO);
        state.set_query("Apple").unwrap().await.unwrap();

        assert_eq!(state.toggle_filter("Organic"), Some(true));
        assert_eq!(state.toggle_filter("No such chip"), None);

        let view = state.view();
        assert_eq!(view.results.len(), 5);
        assert!(view
            .filtered_results()
            .iter()
            .all(|s| s.has_tag("Organic")));
    }

    #[tokio::test]
    async fn test_settled_waits_for_latest_search() {
        let (state, _) = sample_state(Duration::from_millis(20));

        state.set_query("Chips");
        let view = state.settled().await;

        assert!(!view.searching);
        assert_eq!(names(&view), vec!["Chips"]);
    }
}
