//! Composer input used on the home page.

use dioxus::prelude::*;
use lmcgtfy_core::{Query, compose_query, copy};

/// Single-line question input with a send button.
///
/// The button stays disabled while the trimmed input is empty, and
/// `on_submit` only ever receives a non-empty, trimmed [`Query`].
#[component]
pub fn ChatInput(
    on_submit: EventHandler<Query>,
    #[props(default = copy::INPUT_PLACEHOLDER.to_string())] placeholder: String,
    #[props(default = false)] disabled: bool,
) -> Element {
    let mut text = use_signal(String::new);
    let ready = compose_query(&text.read()).is_some() && !disabled;

    rsx! {
        form {
            class: "chat-input",
            onsubmit: move |e| {
                e.prevent_default();
                if disabled {
                    return;
                }
                if let Some(query) = compose_query(&text.read()) {
                    on_submit.call(query);
                }
            },
            div { class: "chat-input-box",
                input {
                    r#type: "text",
                    value: "{text}",
                    placeholder: "{placeholder}",
                    disabled,
                    autofocus: true,
                    oninput: move |e| text.set(e.value()),
                }
                button {
                    r#type: "submit",
                    class: "send-button",
                    disabled: !ready,
                    aria_label: "Create link",
                    "↑"
                }
            }
        }
    }
}
