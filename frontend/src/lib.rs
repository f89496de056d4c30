//! WebAssembly entry point of the indicators visualization.
//!
//! Hydrates the server-rendered HTML and routes client-side logging to the
//! browser console, where the indicator boundaries report the errors they
//! catch.

/// Console log level: everything in debug builds, warnings and up otherwise,
/// so boundary reports still reach the console in release.
const fn console_level() -> log::Level {
    if cfg!(debug_assertions) {
        log::Level::Debug
    } else {
        log::Level::Warn
    }
}

/// Hydrates the indicators application on the client-side.
///
/// Logging is initialized before mounting so that errors caught while the
/// first render hydrates are not lost.
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn hydrate() {
    _ = console_log::init_with_level(console_level());
    console_error_panic_hook::set_once();

    leptos::mount::hydrate_body(app::component);
}
