//! Static notice shown in place of the indicators panel once its error
//! boundary has caught a rendering failure.

use leptos::{
    html::{div, h3},
    prelude::*,
};

/// Text of the notice.
pub const MESSAGE: &str = "Error loading indicators";

/// Renders the "Error loading indicators" notice.
///
/// This is the fallback `indicator_boundary` swaps in once the indicators
/// panel fails. It takes nothing and touches no context, so the boundary can
/// call it any number of times and always gets the same tree.
///
/// # Returns
///
/// An `impl IntoView` of a `base-container` `div` holding a single `h3`.
pub fn component() -> impl IntoView {
    div().class("base-container").child(h3().child(MESSAGE))
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn test_renders_heading_inside_container() {
        let html = component().to_html();

        assert!(html.starts_with(r#"<div class="base-container">"#));
        assert!(html.contains("<h3>Error loading indicators</h3>"));
        assert!(html.ends_with("</div>"));
        assert_eq!(html.matches(MESSAGE).count(), 1);
    }

    #[test]
    fn test_render_is_idempotent() {
        let first = component().to_html();
        for _ in 0..3 {
            assert_eq!(component().to_html(), first);
        }
    }

    #[test]
    fn test_renders_without_runtime_or_owner() {
        // No tokio runtime, reactive owner or context is set up here.
        let html = component().to_html();
        assert!(html.contains(MESSAGE));
    }
}
