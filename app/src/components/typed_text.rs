use dioxus::prelude::*;

/// The typed prefix of the question, with an optional blinking caret.
#[component]
pub fn TypedText(text: String, caret: bool) -> Element {
    rsx! {
        span { class: "typed-text",
            "{text}"
            if caret {
                span { class: "typing-cursor" }
            }
        }
    }
}
