// Core application modules and components
use crate::components::{error_boundary::indicator_boundary, error_template};
use leptos::{
    html::{body, footer, h1, head, html, meta, p},
    prelude::*,
};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, Title, TitleProps, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{FlatRoutes, Route, Router},
};

pub mod api;
pub mod components;
pub mod indicators;
pub mod types;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let html_comp = html().lang("en").child((
        head().child((
            meta().charset("utf-8"),
            meta()
                .name("viewport")
                .content("width=device-width, initial-scale=1"),
            HydrationScripts(HydrationScriptsProps::builder().options(options).build()),
            MetaTags(),
            Stylesheet(
                StylesheetProps::builder()
                    .id("leptos")
                    .href("/pkg/visualization.css")
                    .build(),
            ),
            Title(TitleProps::builder().text("Indicators").build()),
        )),
        body().child(self::component),
    ));

    view! {
        <!DOCTYPE html>
        {html_comp}
    }
}

#[must_use]
pub fn component() -> impl IntoView {
    view! {
        <Router>
            <main class="container flex flex-col gap-8 px-4 pt-10 pb-14 mx-auto max-w-4xl">
                <FlatRoutes fallback=|| {
                    let mut outside_errors = Errors::default();
                    outside_errors.insert_with_default_key(error_template::AppError::NotFound);
                    error_template::component(outside_errors)
                }>
                    <Route path=StaticSegment("") view=home_component/>
                    <Route
                        path=(StaticSegment("indicators"), ParamSegment("exchange"), ParamSegment("pair"))
                        view=indicator_boundary(indicators::component)
                    />
                </FlatRoutes>
            </main>
            {footer_component()}
        </Router>
    }
}

fn home_component() -> impl IntoView {
    (
        h1().class("text-3xl font-semibold").child("Indicators"),
        p().class("text-gray-400")
            .child("Open /indicators/<exchange>/<pair> to inspect a subscription."),
    )
}

fn footer_component() -> impl IntoView {
    footer()
        .class("fixed right-0 bottom-0 left-0 z-10 py-2 text-center text-gray-400")
        .child(format!("visualization v{}", env!("CARGO_PKG_VERSION")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn test_shell_creation() {
        let options = LeptosOptions::builder().output_name("visualization").build();
        let owner = Owner::new();
        let shell_view = owner.with(|| shell(options));
        drop(shell_view);
    }

    #[test]
    fn test_component_function_signatures() {
        let _shell_fn: fn(LeptosOptions) -> _ = shell;
        let _component_fn: fn() -> _ = component;

        let options = LeptosOptions::builder().output_name("visualization").build();
        assert_eq!(options.site_addr.port(), 3000); // Default port
        assert_eq!(options.site_addr.ip().to_string(), "127.0.0.1"); // Default IP
    }

    #[test]
    fn test_home_and_footer_render() {
        assert!(home_component().to_html().contains("/indicators/"));
        assert!(footer_component().to_html().contains(env!("CARGO_PKG_VERSION")));
    }
}
