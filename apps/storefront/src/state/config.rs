//! # Storefront Configuration
//!
//! Settings loaded once at startup. Read-only afterwards, so no mutex.
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     SNACK_FAILURE_EVERY=5                                              │
//! │     SNACK_SEARCH_LATENCY_MS=200                                        │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/snack-storefront/storefront.toml (Linux)                 │
//! │     ~/Library/Application Support/com.snack.storefront/... (macOS)     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! │     no failures, no latency, $3.69 shipping, seeded cart               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # storefront.toml
//! store_name = "Jetsnack"
//! currency_symbol = "$"
//! shipping_cents = 369
//! failure_every = 5        # every 5th cart change fails; 0 = never
//! search_latency_ms = 200
//! seed_cart = true
//! ```

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use snack_core::policy::policy_for_cadence;
use snack_core::{FailurePolicy, Money};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Longest artificial search delay accepted.
pub const MAX_SEARCH_LATENCY_MS: u64 = 10_000;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Shown in the demo banner.
    pub store_name: String,

    pub currency_symbol: String,

    /// Flat shipping fee in cents, charged on non-empty carts.
    pub shipping_cents: i64,

    /// Every n-th governed cart call is rejected. `0` disables.
    pub failure_every: u64,

    /// Artificial delay before each search lookup.
    pub search_latency_ms: u64,

    /// Start sessions with the catalog's sample cart.
    pub seed_cart: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            store_name: "Jetsnack".to_string(),
            currency_symbol: "$".to_string(),
            shipping_cents: 369,
            failure_every: 0,
            search_latency_ms: 0,
            seed_cart: true,
        }
    }
}

impl StoreConfig {
    /// Loads configuration from file and environment.
    ///
    /// ## Loading Order
    /// 1. Start with defaults
    /// 2. Override with config file (if it exists)
    /// 3. Override with `SNACK_*` environment variables
    /// 4. Validate
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// Same as [`StoreConfig::load`], reading overrides from `lookup`
    /// instead of the process environment.
    pub fn load_with(
        config_path: Option<PathBuf>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(lookup);
        config.validate()?;

        Ok(config)
    }

    /// Loads configuration, falling back to defaults on any error.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load storefront config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Platform config path, e.g. `~/.config/snack-storefront/storefront.toml`.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "snack", "storefront")
            .map(|dirs| dirs.config_dir().join("storefront.toml"))
    }

    /// Applies `SNACK_*` overrides from `lookup`.
    ///
    /// Values that fail to parse are logged and skipped.
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(name) = lookup("SNACK_STORE_NAME") {
            self.store_name = name;
        }

        if let Some(every) = parsed(&lookup, "SNACK_FAILURE_EVERY") {
            debug!(every, "Overriding failure cadence from environment");
            self.failure_every = every;
        }

        if let Some(ms) = parsed(&lookup, "SNACK_SEARCH_LATENCY_MS") {
            self.search_latency_ms = ms;
        }

        if let Some(cents) = parsed(&lookup, "SNACK_SHIPPING_CENTS") {
            self.shipping_cents = cents;
        }

        if let Some(seed) = parsed(&lookup, "SNACK_SEED_CART") {
            self.seed_cart = seed;
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.store_name.trim().is_empty() {
            return Err(ConfigError::Invalid("store_name must not be empty".into()));
        }

        if self.currency_symbol.is_empty() {
            return Err(ConfigError::Invalid(
                "currency_symbol must not be empty".into(),
            ));
        }

        if self.shipping_cents < 0 {
            return Err(ConfigError::Invalid(format!(
                "shipping_cents must not be negative, got {}",
                self.shipping_cents
            )));
        }

        if self.search_latency_ms > MAX_SEARCH_LATENCY_MS {
            return Err(ConfigError::Invalid(format!(
                "search_latency_ms must be at most {}, got {}",
                MAX_SEARCH_LATENCY_MS, self.search_latency_ms
            )));
        }

        Ok(())
    }

    // =========================================================================
    // Convenience Methods
    // =========================================================================

    pub fn shipping_fee(&self) -> Money {
        Money::from_cents(self.shipping_cents)
    }

    pub fn failure_policy(&self) -> Box<dyn FailurePolicy> {
        policy_for_cadence(self.failure_every)
    }

    pub fn search_latency(&self) -> Duration {
        Duration::from_millis(self.search_latency_ms)
    }

    /// Formats an amount with the configured currency symbol.
    pub fn format_money(&self, amount: Money) -> String {
        amount.format_with(&self.currency_symbol)
    }
}

fn parsed<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "Ignoring unparsable environment override");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_are_valid() {
        let config = StoreConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.failure_every, 0);
        assert_eq!(config.search_latency(), Duration::ZERO);
        assert!(!config.failure_policy().should_reject(5));
    }

    #[test]
    fn test_parse_partial_file() {
        let config: StoreConfig = toml::from_str(
            r#"
            failure_every = 5
            search_latency_ms = 200
            "#,
        )
        .unwrap();

        assert_eq!(config.failure_every, 5);
        assert_eq!(config.search_latency(), Duration::from_millis(200));
        assert_eq!(config.store_name, "Jetsnack");
        assert!(config.failure_policy().should_reject(5));
    }

    #[test]
    fn test_env_overrides_win() {
        let mut config = StoreConfig::default();
        config.apply_overrides(env(&[
            ("SNACK_STORE_NAME", "Night Market"),
            ("SNACK_FAILURE_EVERY", "3"),
            ("SNACK_SHIPPING_CENTS", "0"),
            ("SNACK_SEED_CART", "false"),
        ]));

        assert_eq!(config.store_name, "Night Market");
        assert_eq!(config.failure_every, 3);
        assert_eq!(config.shipping_fee(), Money::zero());
        assert!(!config.seed_cart);
    }

    #[test]
    fn test_bad_env_values_are_skipped() {
        let mut config = StoreConfig::default();
        config.apply_overrides(env(&[("SNACK_SEARCH_LATENCY_MS", "soon")]));
        assert_eq!(config.search_latency_ms, 0);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = StoreConfig {
            shipping_cents: -1,
            ..StoreConfig::default()
        };
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));

        let config = StoreConfig {
            search_latency_ms: MAX_SEARCH_LATENCY_MS + 1,
            ..StoreConfig::default()
        };
        assert!(config.validate().is_err());

        let config = StoreConfig {
            store_name: "  ".into(),
            ..StoreConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("snack-storefront-missing-config.toml");
        let config = StoreConfig::load_with(Some(path), env(&[])).unwrap();
        assert_eq!(config, StoreConfig::default());
    }

    #[test]
    fn test_load_reads_file() {
        let path = std::env::temp_dir().join(format!(
            "snack-storefront-{}.toml",
            uuid::Uuid::new_v4()
        ));
        std::fs::write(&path, "store_name = \"Corner Shop\"\nshipping_cents = 500\n").unwrap();

        let config = StoreConfig::load_with(Some(path.clone()), env(&[])).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.store_name, "Corner Shop");
        assert_eq!(config.shipping_fee(), Money::from_cents(500));
    }

    #[test]
    fn test_load_env_beats_file() {
        let path = std::env::temp_dir().join(format!(
            "snack-storefront-{}.toml",
            uuid::Uuid::new_v4()
        ));
        std::fs::write(&path, "shipping_cents = 500
failure_every = 2
").unwrap();

        let config = StoreConfig::load_with(
            Some(path.clone()),
            env(&[("SNACK_SHIPPING_CENTS", "100")]),
        )
        .unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.shipping_fee(), Money::from_cents(100));
        assert_eq!(config.failure_every, 2);
    }

    #[test]
    fn test_load_rejects_invalid_override() {
        let path = std::env::temp_dir().join("snack-storefront-missing-config.toml");
        let result = StoreConfig::load_with(Some(path), env(&[("SNACK_SHIPPING_CENTS", "-1")]));
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let path = std::env::temp_dir().join(format!(
            "snack-storefront-{}.toml",
            uuid::Uuid::new_v4()
        ));
        std::fs::write(&path, "shipping_cents = \"lots\"\n").unwrap();

        let result = StoreConfig::load_with(Some(path.clone()), env(&[]));
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_format_money() {
        let config = StoreConfig {
            currency_symbol: "€".into(),
            ..StoreConfig::default()
        };
        assert_eq!(config.format_money(Money::from_cents(1234)), "€12.34");
    }
}
