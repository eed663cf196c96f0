//! # Sample Data
//!
//! The storefront's demo catalog: 28 snacks, the feed rows built from them,
//! filter chips, and the reference data of the search page.
//!
//! ```text
//! ┌──────────────────────────┬──────────────────────────────────────────┐
//! │ Feed row                 │ Snacks                                   │
//! ├──────────────────────────┼──────────────────────────────────────────┤
//! │ Android's picks (★)      │ Cupcake … Oreo          (ids 1-13)       │
//! │ Popular on Jetsnack      │ Chips … Almonds         (ids 15-19)      │
//! │ WFH favourites (★)       │ same as Android's picks                  │
//! │ Newly Added              │ same as Popular                          │
//! │ Only on Jetsnack (★)     │ same as Android's picks                  │
//! └──────────────────────────┴──────────────────────────────────────────┘
//! ★ = highlight row
//! ```

use snack_core::{
    CollectionKind, Filter, FilterIcon, Money, SearchCategory, SearchCategoryCollection,
    SearchSuggestionGroup, Snack, SnackCollection, SnackId,
};

/// Default sort option label.
pub const SORT_DEFAULT: &str = "Android's Favorite (default)";

const TAGLINE: &str = "A tag line";

/// Every filter chip group of the storefront.
#[derive(Debug, Clone, Default)]
pub struct FilterGroups {
    pub snack: Vec<Filter>,
    pub price: Vec<Filter>,
    pub sort: Vec<Filter>,
    pub category: Vec<Filter>,
    pub lifestyle: Vec<Filter>,
    pub sort_default: String,
}

/// Everything a catalog serves.
#[derive(Debug, Clone, Default)]
pub struct CatalogData {
    pub snacks: Vec<Snack>,
    pub feed: Vec<SnackCollection>,
    /// Rows shown under a snack's detail page.
    pub related: Vec<SnackCollection>,
    pub inspired_by_cart: Option<SnackCollection>,
    /// Order lines a new session starts with.
    pub initial_cart: Vec<(SnackId, u32)>,
    pub categories: Vec<SearchCategoryCollection>,
    pub suggestions: Vec<SearchSuggestionGroup>,
    pub filters: FilterGroups,
}

impl CatalogData {
    /// A catalog with only snacks and no reference data.
    pub fn from_snacks(snacks: Vec<Snack>) -> Self {
        CatalogData {
            snacks,
            ..Default::default()
        }
    }
}

fn unsplash(photo: &str) -> String {
    format!("https://source.unsplash.com/{}", photo)
}

fn snack(id: i64, name: &str, photo: &str, price_cents: i64, tags: &[&str]) -> Snack {
    Snack::new(id, name, TAGLINE, Money::from_cents(price_cents), unsplash(photo))
        .with_tags(tags.iter().copied())
}

fn snacks() -> Vec<Snack> {
    vec![
        snack(1, "Cupcake", "pGM4sjt_BdQ", 299, &["Sweet"]),
        snack(2, "Donut", "Yc5sL-ejk6U", 290, &["Sweet"]),
        snack(3, "Eclair", "-LojFX9NfPY", 289, &["Sweet"]),
        snack(4, "Froyo", "3U2V5WqK1PQ", 288, &["Sweet", "Gluten-Free"]),
        snack(5, "Gingerbread", "Y4YR9OjdIMk", 499, &["Sweet"]),
        snack(6, "Honeycomb", "bELvIg_KZGU", 309, &["Sweet", "Dairy-Free"]),
        snack(7, "Ice Cream Sandwich", "YgYJsFDd4AU", 1299, &["Sweet"]),
        snack(8, "Jellybean", "0u_vbeOkMpk", 109, &["Sweet", "Dairy-Free"]),
        snack(9, "KitKat", "yb16pT5F_jE", 549, &["Sweet"]),
        snack(10, "Lollipop", "AHF_ZktTL6Q", 209, &["Sweet", "Dairy-Free"]),
        snack(11, "Marshmallow", "rqFm0IgMVYY", 219, &["Sweet", "Gluten-Free"]),
        snack(12, "Nougat", "qRE_OpbVPR8", 309, &["Sweet"]),
        snack(13, "Oreo", "33fWPnyN6tU", 339, &["Sweet"]),
        snack(14, "Pie", "aX_ljOOyWJY", 249, &["Sweet"]),
        snack(15, "Chips", "UsSdMZ78Q3E", 277, &["Savory", "Gluten-Free"]),
        snack(16, "Pretzels", "7meCnGCJ5Ms", 154, &["Savory"]),
        snack(17, "Smoothies", "m741tj4Cz7M", 257, &["Organic", "Dairy-Free"]),
        snack(18, "Popcorn", "iuwMdNq0-s4", 167, &["Savory", "Gluten-Free"]),
        snack(19, "Almonds", "qgWWQU1SzqM", 123, &["Organic", "Savory", "Gluten-Free"]),
        snack(20, "Cheese", "9MzCd76xLGk", 231, &["Savory", "Gluten-Free"]),
        snack(21, "Apples", "1d9xXWMtQzQ", 221, &["Organic", "Sweet", "Gluten-Free", "Dairy-Free"]),
        snack(22, "Apple sauce", "wZxpOw84QTU", 122, &["Organic", "Sweet", "Dairy-Free"]),
        snack(23, "Apple chips", "okzeRxm_GPo", 231, &["Organic", "Sweet", "Dairy-Free"]),
        snack(24, "Apple juice", "l7imGdupuhU", 241, &["Organic", "Sweet", "Dairy-Free"]),
        snack(25, "Apple pie", "bkXzABDt08Q", 225, &["Sweet"]),
        snack(26, "Grapes", "y2MeW00BdBo", 266, &["Organic", "Sweet", "Gluten-Free"]),
        snack(27, "Kiwi", "1oMGgHn-M8k", 345, &["Organic", "Sweet", "Gluten-Free"]),
        snack(28, "Mango", "I58f47LRQYM", 245, &["Organic", "Sweet", "Gluten-Free"]),
    ]
}

fn collection(id: i64, name: &str, snacks: &[Snack], kind: CollectionKind) -> SnackCollection {
    SnackCollection {
        id,
        name: name.to_string(),
        snacks: snacks.to_vec(),
        kind,
    }
}

fn filters(names: &[&str]) -> Vec<Filter> {
    names.iter().map(|n| Filter::new(*n)).collect()
}

fn filter_groups() -> FilterGroups {
    FilterGroups {
        snack: filters(&["Organic", "Gluten-Free", "Dairy-Free", "Sweet", "Savory"]),
        price: filters(&["$", "$$", "$$$", "$$$$"]),
        sort: vec![
            Filter::new(SORT_DEFAULT).with_icon(FilterIcon::Android),
            Filter::new("Rating").with_icon(FilterIcon::Star),
            Filter::new("Alphabetical").with_icon(FilterIcon::SortByAlpha),
        ],
        category: filters(&["Chips & crackers", "Fruit snacks", "Desserts", "Nuts"]),
        lifestyle: filters(&["Organic", "Gluten-Free", "Dairy-Free", "Sweet", "Savory"]),
        sort_default: SORT_DEFAULT.to_string(),
    }
}

fn categories() -> Vec<SearchCategoryCollection> {
    let tile = |name: &str, photo: &str| SearchCategory {
        name: name.to_string(),
        image_url: unsplash(photo),
    };

    vec![
        SearchCategoryCollection {
            id: 0,
            name: "Categories".to_string(),
            categories: vec![
                tile("Chips & crackers", "UsSdMZ78Q3E"),
                tile("Fruit snacks", "SfP1PtM9Qa8"),
                tile("Desserts", "_jk8KIyN_uA"),
                tile("Nuts", "UsSdMZ78Q3E"),
            ],
        },
        SearchCategoryCollection {
            id: 1,
            name: "Lifestyles".to_string(),
            categories: vec![
                tile("Organic", "7meCnGCJ5Ms"),
                tile("Gluten Free", "m741tj4Cz7M"),
                tile("Paleo", "dt5-8tThZKg"),
                tile("Vegan", "ReXxkS1m1H0"),
                tile("Vegetarian", "IGfIGP5ONV0"),
                tile("Whole30", "9MzCd76xLGk"),
            ],
        },
    ]
}

fn suggestions() -> Vec<SearchSuggestionGroup> {
    let terms = |terms: &[&str]| terms.iter().map(|t| t.to_string()).collect();

    vec![
        SearchSuggestionGroup {
            id: 0,
            name: "Recent searches".to_string(),
            suggestions: terms(&["Cheese", "Apple sauce"]),
        },
        SearchSuggestionGroup {
            id: 1,
            name: "Popular searches".to_string(),
            suggestions: terms(&["Organic", "Gluten Free", "Paleo", "Vegan", "Vegetarian", "Whole30"]),
        },
    ]
}

/// Builds the demo catalog.
pub fn sample() -> CatalogData {
    let snacks = snacks();

    let picks = &snacks[0..13];
    let popular = &snacks[14..19];

    let feed = vec![
        collection(1, "Android's picks", picks, CollectionKind::Highlight),
        collection(2, "Popular on Jetsnack", popular, CollectionKind::Normal),
        collection(3, "WFH favourites", picks, CollectionKind::Highlight),
        collection(4, "Newly Added", popular, CollectionKind::Normal),
        collection(5, "Only on Jetsnack", picks, CollectionKind::Highlight),
    ];

    let related = vec![
        collection(6, "Customers also bought", picks, CollectionKind::Highlight),
        collection(2, "Popular on Jetsnack", popular, CollectionKind::Normal),
    ];

    CatalogData {
        inspired_by_cart: Some(collection(
            7,
            "Inspired by your cart",
            picks,
            CollectionKind::Highlight,
        )),
        initial_cart: vec![
            (snacks[4].id, 2),
            (snacks[6].id, 3),
            (snacks[8].id, 1),
        ],
        feed,
        related,
        categories: categories(),
        suggestions: suggestions(),
        filters: filter_groups(),
        snacks,
    }
}
