//! Mock chat page driven by the playback engine.

use dioxus::prelude::*;
use lmcgtfy_core::{AppConfig, Phase, Query, copy};

use crate::components::TypedText;
use crate::playback::use_playback;

/// Fake chat interface that "types" `query` and then redirects.
///
/// Mount it keyed by the query: the playback runs once per mount.
#[component]
pub fn MockChat(query: Query) -> Element {
    let config = use_context::<AppConfig>();
    let show_cursor = config.playback.typing.show_cursor;
    let view = use_playback(query.clone(), config);

    let phase = *view.phase.read();
    let reveal = *view.reveal.read();
    let pressed = *view.pressed.read();

    let input_class = if phase.input_focused() {
        "chat-input-box focused"
    } else {
        "chat-input-box"
    };
    let send_class = match (phase.send_active(), pressed) {
        (true, true) => "send-button active pressed",
        (true, false) => "send-button active",
        _ => "send-button",
    };
    let pointer_class = match phase {
        Phase::Clicking => "fake-pointer clicking",
        _ => "fake-pointer",
    };

    rsx! {
        div { class: "page chat-container", "data-phase": "{phase}",
            header { class: "page-header",
                div { class: "brand",
                    span { class: "brand-icon", "✦" }
                    span { class: "brand-name", "{copy::MOCK_ASSISTANT_NAME}" }
                }
                div { class: "muted small", "{copy::MOCK_DISCLAIMER}" }
            }

            main { class: "chat-area",
                if phase.shows_comment() {
                    div { class: "comment fade-in-up",
                        p { class: "comment-headline", "{copy::COMMENT_HEADLINE}" }
                        p { class: "muted", "{copy::COMMENT_SUBLINE}" }
                    }
                }
            }

            div { class: "chat-footer",
                div { class: "chat-input",
                    div { class: input_class,
                        div { class: "chat-input-text",
                            if phase == Phase::Typing {
                                TypedText {
                                    text: query.prefix(reveal.revealed_len).to_string(),
                                    caret: show_cursor && !reveal.complete,
                                }
                            } else if phase.shows_full_query() {
                                span { "{query}" }
                            } else {
                                span { class: "muted", "{copy::INPUT_PLACEHOLDER}" }
                            }
                        }
                        div { class: send_class, "↑" }
                    }
                    if phase.shows_pointer() {
                        div { class: pointer_class, PointerIcon {} }
                    }
                }
                p { class: "muted small center", "{copy::FOOTER_TAGLINE}" }
            }
        }
    }
}

#[component]
fn PointerIcon() -> Element {
    rsx! {
        svg {
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            path {
                d: "M5.5 3.21V20.79c0 .45.54.67.85.35l4.86-4.86a.5.5 0 0 1 .35-.15h6.87c.48 0 .72-.58.38-.92L6.35 2.85a.5.5 0 0 0-.85.36Z",
                fill: "white",
                stroke: "black",
                stroke_width: "1.5",
            }
        }
    }
}
