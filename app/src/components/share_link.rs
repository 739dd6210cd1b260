//! Generated share link with a copy button.

use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use lmcgtfy_core::copy;
use tracing::warn;

use crate::browser;
use crate::components::{ToastSeverity, use_toast};

/// How long the button reads "Copied!" after a successful copy.
const COPIED_FEEDBACK_MS: u32 = 2000;

#[component]
pub fn ShareLink(link: String) -> Element {
    let mut copied = use_signal(|| false);
    let mut toast = use_toast();

    let on_copy = {
        let link = link.clone();
        move |_: MouseEvent| {
            let link = link.clone();
            spawn(async move {
                match browser::copy_text(&link).await {
                    Ok(()) => {
                        toast.show(copy::LINK_COPIED, ToastSeverity::Info);
                        copied.set(true);
                        TimeoutFuture::new(COPIED_FEEDBACK_MS).await;
                        copied.set(false);
                    }
                    Err(err) => {
                        warn!(%err, "copy to clipboard failed");
                        toast.show(format!("Could not copy link: {err}"), ToastSeverity::Error);
                    }
                }
            });
        }
    };

    rsx! {
        div { class: "share-link fade-in-up",
            p { class: "share-hint", "{copy::SHARE_HINT}" }
            div { class: "share-link-box",
                span { class: "share-link-url", title: "{link}", "{link}" }
                button {
                    class: "btn btn-primary",
                    onclick: on_copy,
                    if copied() { "Copied!" } else { "Copy" }
                }
            }
        }
    }
}
