//! # Domain Types
//!
//! Core domain types used throughout the storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────────┐   │
//! │  │     Snack       │   │   OrderLine     │   │  SnackCollection    │   │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────────  │   │
//! │  │  id (SnackId)   │◄──│  snack          │   │  id, name           │   │
//! │  │  name, tagline  │   │  quantity (≥1)  │   │  snacks             │   │
//! │  │  price (Money)  │   └─────────────────┘   │  kind               │   │
//! │  │  image_url      │                         └─────────────────────┘   │
//! │  └─────────────────┘                                                   │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────────┐  ┌──────────────────┐   │
//! │  │  Filter         │   │ SearchCategory...   │  │ SearchSuggestion │   │
//! │  │  FilterSet      │   │ (browse panel)      │  │ Group            │   │
//! │  └─────────────────┘   └─────────────────────┘  └──────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is immutable reference data except [`FilterSet`], whose
//! `enabled` flags are toggled by the filter chips.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Snack
// =============================================================================

/// Identifier of a snack in the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SnackId(i64);

impl SnackId {
    #[inline]
    pub const fn new(id: i64) -> Self {
        SnackId(id)
    }

    #[inline]
    pub const fn get(&self) -> i64 {
        self.0
    }
}

impl From<i64> for SnackId {
    fn from(id: i64) -> Self {
        SnackId(id)
    }
}

impl fmt::Display for SnackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A snack offered by the store. Supplied by the catalog, never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Snack {
    pub id: SnackId,

    /// Display name, also the field searched by the search panel.
    pub name: String,

    /// Short tagline shown under the name.
    pub tagline: String,

    /// Unit price.
    pub price: Money,

    /// Image reference (URL).
    pub image_url: String,

    /// Free-form tags ("Organic", "Sweet", ...) matched by filter chips.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Snack {
    /// Builds a snack with no tags.
    pub fn new(
        id: i64,
        name: impl Into<String>,
        tagline: impl Into<String>,
        price: Money,
        image_url: impl Into<String>,
    ) -> Self {
        Snack {
            id: SnackId::new(id),
            name: name.into(),
            tagline: tagline.into(),
            price,
            image_url: image_url.into(),
            tags: Vec::new(),
        }
    }

    /// Adds tags, builder style.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Whether the snack carries the given tag.
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| t == tag)
    }
}

// =============================================================================
// Order Line
// =============================================================================

/// One cart entry: a snack and how many of it.
///
/// ## Invariant
/// `quantity >= 1`. A line whose quantity would drop to zero is removed by
/// the cart instead of being kept at zero.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OrderLine {
    pub snack: Snack,
    pub quantity: u32,
}

impl OrderLine {
    pub fn new(snack: Snack, quantity: u32) -> Self {
        OrderLine { snack, quantity }
    }

    /// Snack id of this line.
    #[inline]
    pub fn snack_id(&self) -> SnackId {
        self.snack.id
    }

    /// Unit price × quantity.
    pub fn line_total(&self) -> Money {
        self.snack.price.multiply_quantity(self.quantity)
    }
}

// =============================================================================
// Snack Collections
// =============================================================================

/// How a collection row is rendered on the feed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum CollectionKind {
    #[default]
    Normal,
    /// Large gradient cards.
    Highlight,
}

/// A named row of snacks (feed rows, "Inspired by your cart", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SnackCollection {
    pub id: i64,
    pub name: String,
    pub snacks: Vec<Snack>,
    pub kind: CollectionKind,
}

// =============================================================================
// Filters
// =============================================================================

/// Icon shown next to a sort option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum FilterIcon {
    Android,
    Star,
    SortByAlpha,
}

/// A filter chip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Filter {
    pub name: String,
    pub enabled: bool,
    pub icon: Option<FilterIcon>,
}

impl Filter {
    /// A disabled chip without icon.
    pub fn new(name: impl Into<String>) -> Self {
        Filter {
            name: name.into(),
            enabled: false,
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: FilterIcon) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// An ordered group of filter chips owned by one view.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterSet {
    filters: Vec<Filter>,
}

impl FilterSet {
    pub fn new(filters: Vec<Filter>) -> Self {
        FilterSet { filters }
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    /// Flips the chip with the given name.
    ///
    /// Returns the new `enabled` value, or `None` when no chip has that name.
    pub fn toggle(&mut self, name: &str) -> Option<bool> {
        let filter = self.filters.iter_mut().find(|f| f.name == name)?;
        filter.enabled = !filter.enabled;
        Some(filter.enabled)
    }

    /// Names of the enabled chips, in display order.
    pub fn enabled(&self) -> impl Iterator<Item = &str> {
        self.filters
            .iter()
            .filter(|f| f.enabled)
            .map(|f| f.name.as_str())
    }

    /// Disables every chip.
    pub fn reset(&mut self) {
        for filter in &mut self.filters {
            filter.enabled = false;
        }
    }

    /// True when the snack carries every enabled tag.
    pub fn accepts(&self, snack: &Snack) -> bool {
        self.enabled().all(|tag| snack.has_tag(tag))
    }
}

// =============================================================================
// Search Reference Data
// =============================================================================

/// A browsable category tile on the search page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SearchCategory {
    pub name: String,
    pub image_url: String,
}

/// A titled group of category tiles ("Categories", "Lifestyles").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SearchCategoryCollection {
    pub id: i64,
    pub name: String,
    pub categories: Vec<SearchCategory>,
}

/// A titled group of suggested search terms ("Recent searches", ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SearchSuggestionGroup {
    pub id: i64,
    pub name: String,
    pub suggestions: Vec<String>,
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn chips() -> Snack {
        Snack::new(15, "Chips", "A tag line", Money::from_cents(277), "img")
            .with_tags(["Savory", "Gluten-Free"])
    }

    #[test]
    fn test_line_total() {
        let line = OrderLine::new(chips(), 3);
        assert_eq!(line.line_total().cents(), 831);
        assert_eq!(line.snack_id(), SnackId::new(15));
    }

    #[test]
    fn test_filter_toggle() {
        let mut set = FilterSet::new(vec![Filter::new("Organic"), Filter::new("Savory")]);

        assert_eq!(set.toggle("Savory"), Some(true));
        assert_eq!(set.enabled().collect::<Vec<_>>(), vec!["Savory"]);
        assert_eq!(set.toggle("Savory"), Some(false));
        assert_eq!(set.toggle("Spicy"), None);
    }

    #[test]
    fn test_filter_accepts() {
        let mut set = FilterSet::new(vec![Filter::new("Organic"), Filter::new("Savory")]);
        assert!(set.accepts(&chips()));

        set.toggle("Savory");
        assert!(set.accepts(&chips()));

        set.toggle("Organic");
        assert!(!set.accepts(&chips()));

        set.reset();
        assert_eq!(set.enabled().count(), 0);
    }

    #[test]
    fn test_snack_serializes_camel_case() {
        let json = serde_json::to_value(chips()).unwrap();
        assert_eq!(json["imageUrl"], "img");
        assert_eq!(json["price"], 277);
        assert_eq!(json["id"], 15);
    }
}
