use dioxus::prelude::*;
use lmcgtfy_types::Theme;

use crate::browser;

/// Flips between the dark and light themes and remembers the choice.
#[component]
pub fn ThemeToggle() -> Element {
    let mut theme = use_context::<Signal<Theme>>();

    rsx! {
        button {
            class: "theme-toggle",
            aria_label: "Toggle theme",
            onclick: move |_| {
                let next = theme().toggled();
                browser::apply_theme(next);
                browser::store_theme(next);
                theme.set(next);
            },
            if theme() == Theme::Dark { "☀" } else { "☾" }
        }
    }
}
