//! This module defines the `loader` component, shown by `Suspense` while the
//! indicators of a subscription are being fetched.

use leptos::{
    html::{div, p},
    prelude::*,
};

/// Renders a pulsing "Loading indicators..." placeholder.
///
/// Used as the `Suspense` fallback of the indicators panel while
/// `select_indicators` is in flight.
pub fn component() -> impl IntoView {
    div()
        .class("flex flex-col gap-1 justify-center items-center m-auto base-container")
        .child(
            p().class("text-sm italic animate-pulse text-muted-foreground")
                .child("Loading indicators..."),
        )
}
