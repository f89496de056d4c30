//! Server functions backing the indicators panel.
//!
//! Indicators are served from the in-memory snapshot held in `AppState`; there
//! is no database behind them.

#![allow(deprecated)]

use leptos::prelude::{ServerFnError, server};

use crate::types::{Indicator, LiquiditySubscription};

/// Fetches the indicators recorded for one exchange/currency-pair subscription.
///
/// # Errors
///
/// Returns a `ServerFnError` when the subscription is malformed or the
/// snapshot holds nothing for it.
#[server(endpoint = "/indicators")]
pub async fn select_indicators(
    subscription: LiquiditySubscription,
) -> Result<Vec<Indicator>, ServerFnError> {
    use crate::types::AppState;
    use leptos::prelude::expect_context;

    let AppState { indicators, .. } = expect_context::<AppState>();

    indicators.lookup(&subscription).map_err(|e| {
        tracing::debug!(%subscription, error = %e, "Indicator lookup failed");
        ServerFnError::new(e)
    })
}
