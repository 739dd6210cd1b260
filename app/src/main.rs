//! Web front-end for Let Me ChatGPT That For You.
//!
//! Serves three pages from a single bundle: the link composer at `/`, the
//! scripted playback at `/s/<question>` and a not-found page.

mod app;
mod browser;
mod components;
mod pages;
mod playback;

use dioxus_logger::tracing::Level;

fn main() {
    if let Err(err) = dioxus_logger::init(Level::INFO) {
        web_sys::console::error_1(&format!("failed to init logger: {err}").into());
    }
    dioxus::launch(app::App);
}
