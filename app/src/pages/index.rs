//! Home page: compose a question, get a share link.

use dioxus::prelude::*;
use lmcgtfy_core::{AppConfig, Query, copy, share_link};
use tracing::debug;

use crate::browser;
use crate::components::{ChatInput, ShareLink, ThemeToggle};

#[component]
pub fn Index() -> Element {
    let config = use_context::<AppConfig>();
    let mut link = use_signal(|| None::<String>);

    let on_submit = move |query: Query| {
        // Links point back at whichever host served this page.
        let origin = browser::origin().unwrap_or_else(|| config.share.origin.clone());
        let generated = share_link(&origin, &query);
        debug!(chars = query.char_len(), "share link generated");
        link.set(Some(generated));
    };

    rsx! {
        div { class: "page chat-container",
            header { class: "page-header",
                div { class: "brand",
                    span { class: "brand-icon", "✦" }
                    h1 { class: "brand-name", "{copy::APP_TITLE}" }
                }
                ThemeToggle {}
            }

            main { class: "home",
                div { class: "hero",
                    h2 {
                        "For those "
                        span { class: "sarcasm-text", "\"quick questions\"" }
                    }
                    p { class: "muted",
                        "When someone asks you something they could have easily asked an AI themselves."
                    }
                }

                if let Some(generated) = link() {
                    ShareLink { link: generated }
                    div { class: "center",
                        button {
                            class: "btn-link",
                            onclick: move |_| link.set(None),
                            "Create another link"
                        }
                    }
                } else {
                    p { class: "muted small center", "Type the question they should have asked:" }
                    ChatInput {
                        on_submit,
                        placeholder: copy::COMPOSER_PLACEHOLDER.to_string(),
                    }
                }
            }

            footer { class: "page-footer muted small center",
                "A loving tribute to "
                a { href: "https://lmgtfy.app", target: "_blank", rel: "noopener noreferrer", "LMGTFY" }
                " • Made with mild frustration 💚"
            }
        }
    }
}
