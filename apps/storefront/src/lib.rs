//! # Snack Storefront Library
//!
//! Session state and commands of the snack storefront, plus the scripted
//! demo session the `snack-storefront` binary runs.
//!
//! ## Module Organization
//! ```text
//! snack_storefront/
//! ├── lib.rs          ◄─── You are here (session wiring, tracing, demo)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── cart.rs     ◄─── CartStore + CartSnapshot
//! │   ├── search.rs   ◄─── SearchState + SearchView
//! │   ├── snackbar.rs ◄─── NotificationSink + SnackbarManager
//! │   └── config.rs   ◄─── StoreConfig (toml + SNACK_* env)
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── cart.rs     ◄─── Cart manipulation commands
//! │   ├── search.rs   ◄─── Search page commands
//! │   └── snack.rs    ◄─── Feed and snack detail commands
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Session Wiring
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Storefront::new                                 │
//! │                                                                         │
//! │  StoreConfig ──┬──► failure_policy() ───┐                               │
//! │                ├──► shipping_fee() ─────┼──► CartStore                  │
//! │                └──► seed_cart ──────────┤        │                      │
//! │  Catalog ─────────► initial_cart() ─────┘        │ notify(MessageId)    │
//! │                                                  ▼                      │
//! │                                           SnackbarManager               │
//! │                                                                         │
//! │  Storefront::open_search ──► SearchState (one per visit of the page)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::sync::Arc;

use snack_catalog::Catalog;
use snack_core::{Cart, SnackId};
use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;

use error::{ApiError, ApiResult};
use state::{CartStore, SearchState, SnackbarManager, StoreConfig};

/// Everything one storefront session owns.
pub struct Storefront {
    config: StoreConfig,
    catalog: Catalog,
    snackbar: Arc<SnackbarManager>,
    cart: CartStore,
}

impl Storefront {
    /// Starts a session.
    ///
    /// ## Errors
    /// * `CONFIG_ERROR` - configuration failed validation
    /// * `CATALOG_UNAVAILABLE` - the seed cart could not be read
    pub fn new(config: StoreConfig, catalog: Catalog) -> ApiResult<Self> {
        config.validate()?;

        let cart = if config.seed_cart {
            Cart::from_lines(catalog.snacks().initial_cart()?)?
        } else {
            Cart::new()
        };

        let snackbar = Arc::new(SnackbarManager::new());
        let cart = CartStore::new(
            cart,
            config.failure_policy(),
            snackbar.clone(),
            config.shipping_fee(),
        );

        info!(
            store = %config.store_name,
            session_id = %cart.session_id(),
            "Storefront session ready"
        );

        Ok(Storefront {
            config,
            catalog,
            snackbar,
            cart,
        })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn cart(&self) -> &CartStore {
        &self.cart
    }

    pub fn snackbar(&self) -> &SnackbarManager {
        &self.snackbar
    }

    /// Enters the search page. Drop the returned state when leaving it.
    pub fn open_search(&self) -> ApiResult<SearchState> {
        let filters = self.catalog.filters().snack_filters()?;
        Ok(SearchState::with_reference(
            Arc::new(self.catalog.clone()),
            self.config.search_latency(),
            &self.catalog.search(),
            filters,
        )?)
    }
}

impl std::fmt::Debug for Storefront {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Storefront")
            .field("store_name", &self.config.store_name)
            .field("cart", &self.cart)
            .finish_non_exhaustive()
    }
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=snack=trace` - Show trace for snack crates only
/// - Default: INFO, DEBUG for snack crates
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,snack=debug"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_max_level(Level::TRACE)
        .init();
}

/// Runs the scripted demo session.
///
/// ## Script
/// ```text
/// 1. Home feed
/// 2. Cart: "+" on the first line a few times, "−" the last line away,
///    add Chips from the detail page
/// 3. Search: focus, "Chips", "chips", "zzzzz", then a catalog outage
/// 4. Print the final cart as JSON
/// ```
///
/// Transient rejections are logged and the script moves on.
pub async fn run(config: StoreConfig) -> ApiResult<()> {
    let store = Storefront::new(config, Catalog::sample())?;
    let money = |amount| store.config().format_money(amount);

    // 1. Home feed
    let feed = commands::snack::get_feed(store.catalog())?;
    for row in &feed.collections {
        info!(row = %row.name, snacks = row.snacks.len(), "Feed row");
    }

    // 2. Cart
    let cart = store.cart();
    let start = commands::cart::get_cart(cart);
    info!(
        lines = start.lines.len(),
        total = %money(start.totals.total),
        "Cart opened"
    );

    if let Some(first) = start.lines.first() {
        for _ in 0..6 {
            tolerate(commands::cart::increase_item(cart, first.snack_id().get()))?;
            drain_snackbar(store.snackbar());
        }
    }
    if let Some(last) = start.lines.last() {
        for _ in 0..last.quantity {
            tolerate(commands::cart::decrease_item(cart, last.snack_id().get()))?;
            drain_snackbar(store.snackbar());
        }
    }

    let chips = SnackId::new(15);
    let detail = commands::snack::get_snack(store.catalog(), chips.get())?;
    info!(snack = %detail.snack.name, related_rows = detail.related.len(), "Snack detail");
    tolerate(commands::cart::add_to_cart(store.catalog(), cart, chips.get()))?;
    drain_snackbar(store.snackbar());

    // 3. Search
    let search = store.open_search()?;
    let view = commands::search::set_search_focus(&search, true);
    info!(display = ?view.display, "Search page focused");

    for query in ["Chips", "chips", "zzzzz"] {
        commands::search::update_query(&search, query.to_string())?;
        let view = search.settled().await;
        let names: Vec<&str> = view.results.iter().map(|s| s.name.as_str()).collect();
        info!(query, display = ?view.display, results = ?names, "Search settled");
    }

    store.catalog().set_available(false);
    commands::search::update_query(&search, "Apple".to_string())?;
    let view = search.settled().await;
    info!(
        display = ?view.display,
        error = view.last_error.as_deref().unwrap_or(""),
        "Search during catalog outage"
    );
    store.catalog().set_available(true);
    drop(search);

    // 4. Final cart
    let end = commands::cart::get_cart(cart);
    info!(
        version = end.version,
        subtotal = %money(end.totals.subtotal),
        shipping = %money(end.totals.shipping),
        total = %money(end.totals.total),
        "Session finished"
    );
    let json = serde_json::to_string_pretty(&end)
        .map_err(|e| ApiError::new(error::ErrorCode::CartError, e.to_string()))?;
    println!("{}", json);

    Ok(())
}

/// Logs and swallows retryable failures.
fn tolerate<T>(result: ApiResult<T>) -> ApiResult<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(err) if err.is_retryable() => {
            warn!(code = ?err.code, "{}", err.message);
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

fn drain_snackbar(snackbar: &SnackbarManager) {
    while let Some(message) = snackbar.current() {
        warn!(message = message.text(), "Snackbar");
        snackbar.set_message_shown(message.id);
    }
}
