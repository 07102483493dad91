//! # Store Configuration
//!
//! Settings loaded once at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`STOREFRONT_*`)
//! 2. Defaults (this file)
//!
//! Read-only after initialization, so no lock.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use storefront_core::Money;

use crate::error::{StoreError, StoreResult};

/// Simulated latency of the mock payment round trip.
pub const DEFAULT_CHECKOUT_DELAY_MS: u64 = 2000;

const ENV_CHECKOUT_DELAY_MS: &str = "STOREFRONT_CHECKOUT_DELAY_MS";
const ENV_CURRENCY_SYMBOL: &str = "STOREFRONT_CURRENCY_SYMBOL";

/// Cart store configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// How long checkout waits before answering, in milliseconds.
    pub checkout_delay_ms: u64,

    /// Currency symbol for display.
    pub currency_symbol: String,
}

impl Default for StoreConfig {
    /// Two second checkout, US dollars.
    fn default() -> Self {
        StoreConfig {
            checkout_delay_ms: DEFAULT_CHECKOUT_DELAY_MS,
            currency_symbol: "$".to_string(),
        }
    }
}

impl StoreConfig {
    /// Config with an explicit checkout latency. Tests use `Duration::ZERO`.
    pub fn with_checkout_delay(delay: Duration) -> Self {
        StoreConfig {
            checkout_delay_ms: u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            ..StoreConfig::default()
        }
    }

    pub fn checkout_delay(&self) -> Duration {
        Duration::from_millis(self.checkout_delay_ms)
    }

    /// Builds the config from process environment variables.
    ///
    /// ## Environment Variables
    /// - `STOREFRONT_CHECKOUT_DELAY_MS`: checkout latency in ms (e.g. "0")
    /// - `STOREFRONT_CURRENCY_SYMBOL`: display symbol (e.g. "€")
    pub fn from_env() -> StoreResult<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup (the environment, a map in tests).
    pub fn from_lookup<F>(lookup: F) -> StoreResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = StoreConfig::default();

        if let Some(raw) = lookup(ENV_CHECKOUT_DELAY_MS) {
            config.checkout_delay_ms =
                raw.trim()
                    .parse::<u64>()
                    .map_err(|e| StoreError::Config {
                        key: ENV_CHECKOUT_DELAY_MS,
                        value: raw.clone(),
                        reason: e.to_string(),
                    })?;
        }

        if let Some(symbol) = lookup(ENV_CURRENCY_SYMBOL) {
            if symbol.trim().is_empty() {
                return Err(StoreError::Config {
                    key: ENV_CURRENCY_SYMBOL,
                    value: symbol,
                    reason: "must not be empty".to_string(),
                });
            }
            config.currency_symbol = symbol;
        }

        Ok(config)
    }

    /// Formats an amount for display.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::Money;
    /// use storefront_store::StoreConfig;
    ///
    /// let config = StoreConfig::default();
    /// assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
    /// ```
    pub fn format_currency(&self, amount: Money) -> String {
        amount.format_with_symbol(&self.currency_symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StoreConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, StoreConfig::default());
        assert_eq!(config.checkout_delay(), Duration::from_secs(2));
    }

    #[test]
    fn test_env_overrides() {
        let config = StoreConfig::from_lookup(lookup(&[
            ("STOREFRONT_CHECKOUT_DELAY_MS", "150"),
            ("STOREFRONT_CURRENCY_SYMBOL", "€"),
        ]))
        .unwrap();

        assert_eq!(config.checkout_delay(), Duration::from_millis(150));
        assert_eq!(config.format_currency(Money::from_cents(599)), "€5.99");
    }

    #[test]
    fn test_bad_delay_is_an_error() {
        let err = StoreConfig::from_lookup(lookup(&[("STOREFRONT_CHECKOUT_DELAY_MS", "soon")]))
            .unwrap_err();
        assert!(matches!(
            err,
            StoreError::Config {
                key: "STOREFRONT_CHECKOUT_DELAY_MS",
                ..
            }
        ));
    }

    #[test]
    fn test_empty_symbol_is_an_error() {
        assert!(StoreConfig::from_lookup(lookup(&[("STOREFRONT_CURRENCY_SYMBOL", " ")])).is_err());
    }

    #[test]
    fn test_format_currency() {
        let config = StoreConfig::default();
        assert_eq!(config.format_currency(Money::from_cents(1234)), "$12.34");
        assert_eq!(config.format_currency(Money::from_cents(1)), "$0.01");
        assert_eq!(config.format_currency(Money::from_cents(-1234)), "-$12.34");
    }

    #[test]
    fn test_with_checkout_delay() {
        let config = StoreConfig::with_checkout_delay(Duration::ZERO);
        assert_eq!(config.checkout_delay(), Duration::ZERO);
        assert_eq!(config.currency_symbol, "$");
    }
}
