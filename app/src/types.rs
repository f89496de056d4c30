//! This module defines the data shared by the server and the browser: the
//! liquidity subscription that keys every indicator stream, the indicators
//! themselves, and the errors raised while loading or looking them up.
//!
//! On the server it also holds `AppState`, which carries the read-only
//! `IndicatorStore` into server functions through Leptos context.

use std::collections::HashMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(feature = "ssr")]
use axum::extract::FromRef;
#[cfg(feature = "ssr")]
use leptos::config::LeptosOptions;

#[cfg(feature = "ssr")]
#[derive(FromRef, Debug, Clone)]
pub struct AppState {
    pub indicators: std::sync::Arc<IndicatorStore>,
    pub leptos_options: std::sync::Arc<LeptosOptions>,
}

#[cfg(feature = "ssr")]
impl FromRef<AppState> for LeptosOptions {
    fn from_ref(state: &AppState) -> Self {
        state.leptos_options.as_ref().clone()
    }
}

/// Longest accepted exchange id or currency pair.
const MAX_KEY_LEN: usize = 64;

/// Identifies one stream of liquidity indicators: an exchange account and
/// the currency pair traded on it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquiditySubscription {
    pub exchange_id: String,
    pub currency_pair: String,
}

impl LiquiditySubscription {
    #[must_use]
    pub fn new(exchange_id: impl Into<String>, currency_pair: impl Into<String>) -> Self {
        Self {
            exchange_id: exchange_id.into(),
            currency_pair: currency_pair.into(),
        }
    }

    /// Checks that both parts are non-empty and only use characters that are
    /// safe in a route segment.
    pub fn validate(&self) -> Result<(), IndicatorError> {
        if is_valid_key(&self.exchange_id) && is_valid_key(&self.currency_pair) {
            Ok(())
        } else {
            Err(IndicatorError::InvalidSubscription(self.clone()))
        }
    }
}

impl fmt::Display for LiquiditySubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.exchange_id, self.currency_pair)
    }
}

fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && key.len() <= MAX_KEY_LEN
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '/')
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Indicator {
    pub name: String,
    pub value: f64,
}

impl Indicator {
    #[must_use]
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum IndicatorError {
    #[error("invalid subscription `{0}`")]
    InvalidSubscription(LiquiditySubscription),
    #[error("no indicators for `{0}`")]
    UnknownSubscription(LiquiditySubscription),
    #[error("malformed indicators snapshot: {0}")]
    Snapshot(String),
}

/// One entry of the on-disk snapshot. JSON object keys must be strings, so the
/// subscription is flattened next to its indicators instead of used as a key.
#[derive(Debug, Deserialize)]
struct SnapshotEntry {
    #[serde(flatten)]
    subscription: LiquiditySubscription,
    #[serde(default)]
    indicators: Vec<Indicator>,
}

/// Read-only indicator snapshot shared by every request.
#[derive(Debug, Clone, Default)]
pub struct IndicatorStore {
    entries: HashMap<LiquiditySubscription, Vec<Indicator>>,
}

impl IndicatorStore {
    /// Parses a snapshot of the form
    /// `[{"exchangeId": "..", "currencyPair": "..", "indicators": [..]}]`.
    ///
    /// Later entries for the same subscription replace earlier ones.
    pub fn from_json(json: &str) -> Result<Self, IndicatorError> {
        let entries: Vec<SnapshotEntry> =
            serde_json::from_str(json).map_err(|e| IndicatorError::Snapshot(e.to_string()))?;

        let mut store = Self::default();
        for entry in entries {
            entry.subscription.validate()?;
            store.insert(entry.subscription, entry.indicators);
        }
        Ok(store)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, IndicatorError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| IndicatorError::Snapshot(format!("{}: {e}", path.display())))?;
        Self::from_json(&json)
    }

    pub fn insert(&mut self, subscription: LiquiditySubscription, indicators: Vec<Indicator>) {
        self.entries.insert(subscription, indicators);
    }

    /// Returns the indicators recorded for `subscription`.
    pub fn lookup(
        &self,
        subscription: &LiquiditySubscription,
    ) -> Result<Vec<Indicator>, IndicatorError> {
        subscription.validate()?;
        self.entries
            .get(subscription)
            .cloned()
            .ok_or_else(|| IndicatorError::UnknownSubscription(subscription.clone()))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    const SNAPSHOT: &str = r#"[
        {
            "exchangeId": "binance_0",
            "currencyPair": "btc-usdt",
            "indicators": [
                {"name": "bid_depth", "value": 12.5},
                {"name": "ask_depth", "value": 9.75}
            ]
        },
        {"exchangeId": "serum_0", "currencyPair": "sol/usdc"}
    ]"#;

    #[test]
    fn test_subscription_serializes_camel_case() {
        let subscription = LiquiditySubscription::new("binance_0", "btc-usdt");
        let json = serde_json::to_value(&subscription).unwrap();

        assert_eq!(json["exchangeId"], "binance_0");
        assert_eq!(json["currencyPair"], "btc-usdt");
    }

    #[test]
    fn test_subscription_display() {
        let subscription = LiquiditySubscription::new("binance_0", "btc-usdt");
        assert_eq!(subscription.to_string(), "binance_0:btc-usdt");
    }

    #[test]
    fn test_subscription_validation() {
        assert!(LiquiditySubscription::new("serum_0", "sol/usdc").validate().is_ok());
        assert_matches!(
            LiquiditySubscription::new("", "btc-usdt").validate(),
            Err(IndicatorError::InvalidSubscription(_))
        );
        assert_matches!(
            LiquiditySubscription::new("binance_0", "btc usdt").validate(),
            Err(IndicatorError::InvalidSubscription(_))
        );
        assert_matches!(
            LiquiditySubscription::new("x".repeat(MAX_KEY_LEN + 1), "btc-usdt").validate(),
            Err(IndicatorError::InvalidSubscription(_))
        );
    }

    #[test]
    fn test_store_from_json() {
        let store = IndicatorStore::from_json(SNAPSHOT).unwrap();
        assert_eq!(store.len(), 2);

        let indicators = store
            .lookup(&LiquiditySubscription::new("binance_0", "btc-usdt"))
            .unwrap();
        assert_eq!(
            indicators,
            vec![Indicator::new("bid_depth", 12.5), Indicator::new("ask_depth", 9.75)]
        );

        let empty = store
            .lookup(&LiquiditySubscription::new("serum_0", "sol/usdc"))
            .unwrap();
        assert!(empty.is_empty());
    }

    #[test]
    fn test_store_unknown_subscription() {
        let store = IndicatorStore::from_json(SNAPSHOT).unwrap();
        let missing = LiquiditySubscription::new("kraken_0", "eth-usd");

        assert_eq!(
            store.lookup(&missing),
            Err(IndicatorError::UnknownSubscription(missing.clone()))
        );
    }

    #[test]
    fn test_store_rejects_malformed_snapshot() {
        assert_matches!(
            IndicatorStore::from_json("{not json"),
            Err(IndicatorError::Snapshot(_))
        );
        assert_matches!(
            IndicatorStore::from_json(r#"[{"exchangeId": "", "currencyPair": "btc-usdt"}]"#),
            Err(IndicatorError::InvalidSubscription(_))
        );
    }

    #[test]
    fn test_store_missing_file() {
        assert_matches!(
            IndicatorStore::from_path("/nonexistent/indicators.json"),
            Err(IndicatorError::Snapshot(msg)) if msg.contains("indicators.json")
        );
    }

    #[test]
    fn test_default_store_is_empty() {
        let store = IndicatorStore::default();
        assert!(store.is_empty());
        assert_eq!(store.len(), 0);
    }
}
