//! Route-level error page.
//!
//! Unlike the indicator fallback, which stands in for one panel, this page
//! replaces the whole route when the router cannot match a path. On the server
//! it also sets the HTTP status of the response.

use http::status::StatusCode;
use leptos::{
    html::{div, h1, h3},
    prelude::*,
};
use leptos_router::components::{A, AProps};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
}

impl AppError {
    /// Returns the HTTP status code associated with the error.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Collects the `AppError`s held in `errors`, in insertion order.
pub fn app_errors(errors: &Errors) -> Vec<AppError> {
    errors
        .clone()
        .into_iter()
        .filter_map(|(_k, v)| v.downcast_ref::<AppError>().cloned())
        .collect()
}

/// Renders an error page for the `AppError`s found in `errors`.
///
/// On the server the response status is taken from the first `AppError`.
/// Errors of other types are not shown.
///
/// # Arguments
///
/// * `errors` - The errors collected for the route, typically a single
///   `AppError::NotFound` inserted by the router fallback.
///
/// # Returns
///
/// An `impl IntoView` representing the rendered error page.
pub fn component(errors: Errors) -> impl IntoView {
    let errors = app_errors(&errors);

    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let (Some(response), Some(error)) = (use_context::<ResponseOptions>(), errors.first()) {
            response.set_status(error.status_code());
        }
    }

    div().class("grid place-content-center px-4 h-full antialiased").child((
        h1().class("mb-6 text-center").child(if errors.len() > 1 { "Errors" } else { "Error" }),
        errors
            .into_iter()
            .map(|error| {
                div().class("flex flex-col gap-1 justify-center items-center base-container").child((
                    h3().class("text-xl tracking-widest text-gray-400 uppercase")
                        .child(format!("{}| {error}", error.status_code())),
                    div().class("mt-6 text-center duration-200 hover:text-[#68b5fc]").child(
                        A(AProps::builder()
                            .href("/")
                            .children(ToChildren::to_children(|| "Go back home"))
                            .build()),
                    ),
                ))
            })
            .collect_view(),
    ))
}
