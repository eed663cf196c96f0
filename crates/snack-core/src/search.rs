//! # Search Classification
//!
//! Pure pieces of the search page: which panel to show and which snacks match
//! a query. The async part (running a search off the UI thread, dropping
//! stale results) lives in the storefront's `SearchState`.
//!
//! ## Panel Selection
//! ```text
//! ┌──────────────────┬──────────────┬─────────────────┬──────────────────┐
//! │ query            │ focused      │ last results    │ panel            │
//! ├──────────────────┼──────────────┼─────────────────┼──────────────────┤
//! │ ""               │ no           │ (ignored)       │ Categories       │
//! │ ""               │ yes          │ (ignored)       │ Suggestions      │
//! │ "Chips"          │ (ignored)    │ empty           │ NoResults        │
//! │ "Chips"          │ (ignored)    │ non-empty       │ Results          │
//! └──────────────────┴──────────────┴─────────────────┴──────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::Snack;

/// Which panel the search page shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum SearchDisplay {
    /// Browse-by-category default view.
    Categories,
    /// Recent and popular search terms.
    Suggestions,
    /// Matching snacks.
    Results,
    /// "No matches for ..." placeholder.
    NoResults,
}

impl SearchDisplay {
    /// Classifies the panel from the current search fields.
    ///
    /// ```rust
    /// use snack_core::search::SearchDisplay;
    ///
    /// assert_eq!(SearchDisplay::classify("", false, false), SearchDisplay::Categories);
    /// assert_eq!(SearchDisplay::classify("", true, false), SearchDisplay::Suggestions);
    /// assert_eq!(SearchDisplay::classify("zzzzz", true, false), SearchDisplay::NoResults);
    /// assert_eq!(SearchDisplay::classify("Chips", false, true), SearchDisplay::Results);
    /// ```
    pub fn classify(query: &str, focused: bool, has_results: bool) -> Self {
        match (query.is_empty(), focused, has_results) {
            (true, false, _) => SearchDisplay::Categories,
            (true, true, _) => SearchDisplay::Suggestions,
            (false, _, false) => SearchDisplay::NoResults,
            (false, _, true) => SearchDisplay::Results,
        }
    }
}

/// Case-sensitive substring match on the snack name.
///
/// An empty query matches every name.
#[inline]
pub fn matches_name(snack: &Snack, query: &str) -> bool {
    snack.name.contains(query)
}

/// Returns the snacks whose name contains `query`, in catalog order.
pub fn filter_snacks<'a, I>(snacks: I, query: &str) -> Vec<Snack>
where
    I: IntoIterator<Item = &'a Snack>,
{
    snacks
        .into_iter()
        .filter(|s| matches_name(s, query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn catalog() -> Vec<Snack> {
        ["Chips & crackers", "Apple chips", "Cupcake", "Chips"]
            .iter()
            .enumerate()
            .map(|(i, name)| Snack::new(i as i64, *name, "", Money::from_cents(100), ""))
            .collect()
    }

    #[test]
    fn test_classify_all_panels() {
        assert_eq!(SearchDisplay::classify("", false, true), SearchDisplay::Categories);
        assert_eq!(SearchDisplay::classify("", true, true), SearchDisplay::Suggestions);
        assert_eq!(SearchDisplay::classify("a", false, false), SearchDisplay::NoResults);
        assert_eq!(SearchDisplay::classify("a", true, true), SearchDisplay::Results);
    }

    #[test]
    fn test_filter_is_case_sensitive_substring() {
        let snacks = catalog();

        let names: Vec<String> = filter_snacks(&snacks, "Chips")
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Chips & crackers", "Chips"]);

        let names: Vec<String> = filter_snacks(&snacks, "chips")
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(names, vec!["Apple chips"]);
    }

    #[test]
    fn test_filter_no_match() {
        assert!(filter_snacks(&catalog(), "zzzzz").is_empty());
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert_eq!(filter_snacks(&catalog(), "").len(), 4);
    }
}
