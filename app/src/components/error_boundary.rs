//! Composition helpers that put a view behind a Leptos `ErrorBoundary`.
//!
//! A wrapped view renders normally until something inside it yields an `Err`.
//! From then on the boundary renders the supplied fallback instead. Caught
//! errors are logged; the boundary never retries or clears them.

use leptos::prelude::*;

use crate::components::indicator_error;

/// Wraps `view` so that any error raised while rendering it is replaced by
/// `fallback()`.
///
/// The result is itself a view-producing function, so it can be handed
/// straight to a `Route`.
///
/// # Arguments
///
/// * `name` - Identifies the boundary in log output.
/// * `view` - Produces the guarded subtree. Any `Err` rendered inside it,
///   including one resolved later under `Suspense`, trips the boundary.
/// * `fallback` - Produces what is shown instead. It never sees the errors.
///
/// # Returns
///
/// A cloneable `Fn() -> AnyView` rendering `view` inside an `ErrorBoundary`.
pub fn with_error_boundary<VF, V, FF, F>(
    name: &'static str,
    view: VF,
    fallback: FF,
) -> impl Fn() -> AnyView + Clone + Send + Sync + 'static
where
    VF: Fn() -> V + Clone + Send + Sync + 'static,
    V: IntoView + Send + 'static,
    FF: Fn() -> F + Clone + Send + Sync + 'static,
    F: IntoView + Send + 'static,
{
    move || {
        let view = view.clone();
        let fallback = fallback.clone();

        view! {
            <ErrorBoundary fallback={move |errors: ArcRwSignal<Errors>| {
                report(name, &errors.get_untracked());
                fallback()
            }}>
                {view()}
            </ErrorBoundary>
        }
        .into_any()
    }
}

/// Wraps `view` with the "Error loading indicators" notice as its fallback.
pub fn indicator_boundary<VF, V>(view: VF) -> impl Fn() -> AnyView + Clone + Send + Sync + 'static
where
    VF: Fn() -> V + Clone + Send + Sync + 'static,
    V: IntoView + Send + 'static,
{
    with_error_boundary("indicators", view, indicator_error::component)
}

/// Messages of every error currently held by a boundary.
pub fn caught_messages(errors: &Errors) -> Vec<String> {
    errors
        .clone()
        .into_iter()
        .map(|(_id, error)| error.to_string())
        .collect()
}

fn report(name: &str, errors: &Errors) {
    for message in caught_messages(errors) {
        #[cfg(feature = "ssr")]
        tracing::warn!(boundary = name, error = %message, "Rendering failed; showing fallback");
        #[cfg(not(feature = "ssr"))]
        leptos::logging::warn!("[{name}] rendering failed; showing fallback: {message}");
    }
}
