//! This module defines the `indicators` panel: the liquidity indicators of one
//! exchange/currency-pair subscription, taken from the route parameters.
//!
//! Fetch failures are rendered as `Err`, so they propagate to whichever error
//! boundary wraps the panel.

use leptos::{
    html::{div, h3, li, p, ul},
    prelude::*,
};
use leptos_meta::{Title, TitleProps};
use leptos_router::hooks::use_params_map;

use crate::{
    api::select_indicators,
    components::loader,
    types::{Indicator, LiquiditySubscription},
};

/// Formats an indicator value for display, with at most four decimals.
pub fn format_value(value: f64) -> String {
    let formatted = format!("{value:.4}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" {
        "0".to_owned()
    } else {
        trimmed.to_owned()
    }
}

/// Renders the list of indicators for `subscription`.
pub fn indicator_list(
    subscription: &LiquiditySubscription,
    indicators: Vec<Indicator>,
) -> impl IntoView + use<> {
    let body = if indicators.is_empty() {
        p().class("text-gray-400").child("No indicators recorded").into_any()
    } else {
        ul().class("flex flex-col gap-1")
            .child(
                indicators
                    .into_iter()
                    .map(|indicator| {
                        li().child(format!("{}: {}", indicator.name, format_value(indicator.value)))
                    })
                    .collect_view(),
            )
            .into_any()
    };

    div().class("base-container").child((h3().child(subscription.to_string()), body))
}

/// Renders the indicators panel for the subscription named by the
/// `exchange` and `pair` route parameters.
///
/// This component:
/// 1. Builds a `LiquiditySubscription` from the route parameters.
/// 2. Fetches its indicators through a `Resource` calling `select_indicators`.
/// 3. Shows the loader inside `Suspense` until the fetch resolves.
/// 4. Renders the list, or returns the fetch error so the enclosing
///    boundary replaces the panel with its fallback.
pub fn component() -> impl IntoView {
    let params = use_params_map();
    let subscription = move || {
        params.with(|params| {
            LiquiditySubscription::new(
                params.get("exchange").unwrap_or_default(),
                params.get("pair").unwrap_or_default(),
            )
        })
    };

    let indicators = Resource::new(subscription, |subscription| async move {
        select_indicators(subscription).await
    });

    let title = Title(
        TitleProps::builder()
            .text(move || format!("Indicators \u{2013} {}", subscription()))
            .build(),
    );

    view! {
        {title}
        <Suspense fallback=loader::component>
            {move || Suspend::new(async move {
                let subscription = subscription();
                indicators
                    .await
                    .map(move |indicators| indicator_list(&subscription, indicators))
            })}
        </Suspense>
    }
}
