//! Playback page for `/s/<encoded question>`.

use dioxus::prelude::*;
use lmcgtfy_core::{Query, copy};

use crate::components::MockChat;

/// Shows the playback for `query`, or the empty state when there is none.
///
/// No playback is mounted (and no timer armed) for the empty state.
#[component]
pub fn ShowQuery(query: Option<Query>) -> Element {
    match query {
        Some(query) => rsx! {
            MockChat { key: "{query}", query: query.clone() }
        },
        None => rsx! {
            div { class: "page chat-container empty-state",
                p { class: "muted", "{copy::NO_QUERY}" }
            }
        },
    }
}
