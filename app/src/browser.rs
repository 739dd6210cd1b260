//! Browser bindings
//!
//! Thin wrappers over `web-sys` for the few browser features the app uses:
//! location, clipboard, the theme class on `<html>` and local storage.
//! Everything here degrades to a no-op (logged) when the API is missing.

use lmcgtfy_types::Theme;
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

const THEME_KEY: &str = "lmcgtfy-theme";

// ─────────────────────────────────────────────────────────────────────────────
// Location
// ─────────────────────────────────────────────────────────────────────────────

/// Path of the current page, `/` if unavailable.
pub fn pathname() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}

/// Origin of the current page (scheme, host and port).
pub fn origin() -> Option<String> {
    web_sys::window()?.location().origin().ok()
}

/// Leave the page for `url`.
pub fn navigate(url: &str) {
    let Some(window) = web_sys::window() else {
        warn!(url, "no window to navigate");
        return;
    };
    if let Err(e) = window.location().set_href(url) {
        warn!(url, error = ?e, "navigation failed");
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Clipboard
// ─────────────────────────────────────────────────────────────────────────────

/// Write `text` to the clipboard via `navigator.clipboard.writeText`.
///
/// Looked up dynamically so insecure contexts (no clipboard) report an error
/// instead of throwing.
pub async fn copy_text(text: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window")?;
    let navigator = window.navigator();

    let clipboard = js_sys::Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|_| "No clipboard")?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err("Clipboard is not available on this page".to_string());
    }

    let write_text = js_sys::Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .map_err(|_| "No writeText")?;
    let write_text: js_sys::Function = write_text
        .dyn_into()
        .map_err(|_| "writeText not a function")?;

    let promise = write_text
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|e| format!("writeText call failed: {:?}", e))?;
    let promise: js_sys::Promise = promise.dyn_into().map_err(|_| "not a promise")?;

    JsFuture::from(promise)
        .await
        .map(|_| ())
        .map_err(|e| e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

// ─────────────────────────────────────────────────────────────────────────────
// Theme
// ─────────────────────────────────────────────────────────────────────────────

fn storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Theme saved by a previous visit.
pub fn stored_theme() -> Option<Theme> {
    storage()
        .and_then(|s| s.get_item(THEME_KEY).ok().flatten())
        .and_then(|value| Theme::from_class_name(&value))
}

pub fn store_theme(theme: Theme) {
    let Some(storage) = storage() else {
        return;
    };
    if let Err(e) = storage.set_item(THEME_KEY, theme.class_name()) {
        warn!(error = ?e, "failed to persist theme");
    }
}

/// Put the theme's class on the document root, removing the other one.
pub fn apply_theme(theme: Theme) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        return;
    };

    let classes = root.class_list();
    for candidate in [Theme::Dark, Theme::Light] {
        if let Err(e) = classes.toggle_with_force(candidate.class_name(), candidate == theme) {
            warn!(error = ?e, "failed to update theme class");
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Randomness
// ─────────────────────────────────────────────────────────────────────────────

/// Seed for the typing jitter of one playback.
pub fn random_seed() -> u64 {
    (js_sys::Math::random() * u64::MAX as f64) as u64
}
