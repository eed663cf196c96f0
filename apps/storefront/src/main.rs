//! # Snack Storefront Demo
//!
//! Runs one scripted storefront session and logs every state change.
//!
//! ## Startup Sequence
//! 1. Initialize tracing (logging)
//! 2. Load `storefront.toml` + `SNACK_*` overrides (defaults on failure)
//! 3. Start a session on the sample catalog
//! 4. Drive the cart and search pages, print the final cart as JSON
//!
//! ## Try
//! ```text
//! SNACK_FAILURE_EVERY=5 SNACK_SEARCH_LATENCY_MS=200 cargo run -p snack-storefront
//! ```

use snack_storefront::state::StoreConfig;
use tracing::{error, info};

#[tokio::main]
async fn main() {
    snack_storefront::init_tracing();

    let config = StoreConfig::load_or_default(None);
    info!(?config, "Starting Snack Storefront demo");

    if let Err(e) = snack_storefront::run(config).await {
        error!(code = ?e.code, "Demo session failed: {}", e.message);
        std::process::exit(1);
    }
}
