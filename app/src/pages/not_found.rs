use dioxus::prelude::*;
use lmcgtfy_core::copy;
use tracing::warn;

#[component]
pub fn NotFound(path: String) -> Element {
    use_hook(|| warn!(%path, "unknown route"));

    rsx! {
        div { class: "page chat-container empty-state",
            h1 { "404" }
            p { class: "muted", "{copy::NOT_FOUND}" }
            a { class: "btn-link", href: "/", "Return to Home" }
        }
    }
}
