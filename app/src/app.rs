//! Root component: context providers, theme and page dispatch.

use dioxus::prelude::*;
use lmcgtfy_core::{AppConfig, Route};
use tracing::warn;

use crate::browser;
use crate::components::{ToastFrame, use_toast_provider};
use crate::pages::{Index, NotFound, ShowQuery};

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Resolve the page for `path`. Undecodable links show the empty state.
fn resolve_route(path: &str) -> Route {
    Route::parse(path).unwrap_or_else(|err| {
        warn!(%err, path, "could not decode link");
        Route::Playback(None)
    })
}

#[component]
pub fn App() -> Element {
    use_toast_provider();
    let config = use_context_provider(AppConfig::default);
    let theme =
        use_context_provider(|| Signal::new(browser::stored_theme().unwrap_or(config.theme)));

    use_effect(move || browser::apply_theme(theme()));

    let path = use_hook(browser::pathname);
    let route = use_hook(|| resolve_route(&path));

    let page = match route {
        Route::Home => rsx! { Index {} },
        Route::Playback(query) => rsx! { ShowQuery { query } },
        Route::NotFound => rsx! { NotFound { path } },
    };

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        {page}
        ToastFrame {}
    }
}

