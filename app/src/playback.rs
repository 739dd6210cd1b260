//! Browser host for the playback engine.
//!
//! The engine's timers run on `setTimeout` through [`GlooSleeper`]. The
//! playback future is owned by the component's `use_future` task, so
//! unmounting the component drops it together with every pending timer.

use std::time::Duration;

use dioxus::prelude::*;
use futures::future::LocalBoxFuture;
use lmcgtfy_core::{AppConfig, Phase, Playback, PlaybackEvent, Query, RevealState, Sleeper};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use tracing::{debug, error};

use crate::browser;

/// [`Sleeper`] backed by `gloo-timers`.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooSleeper;

impl Sleeper for GlooSleeper {
    fn sleep(&self, duration: Duration) -> LocalBoxFuture<'static, ()> {
        Box::pin(gloo_timers::future::sleep(duration))
    }
}

/// Reactive view of one running playback.
#[derive(Clone, Copy)]
pub struct PlaybackView {
    pub phase: Signal<Phase>,
    pub reveal: Signal<RevealState>,
    /// Send button held down
    pub pressed: Signal<bool>,
}

/// Start the scripted playback of `query` for the calling component.
///
/// Runs once per mount. Remount (e.g. by keying on the query) to restart.
pub fn use_playback(query: Query, config: AppConfig) -> PlaybackView {
    let view = PlaybackView {
        phase: use_signal(|| Phase::Idle),
        reveal: use_signal(RevealState::default),
        pressed: use_signal(|| false),
    };

    use_future(move || {
        let query = query.clone();
        let config = config.clone();
        let mut view = view;
        async move {
            let sink = move |event: PlaybackEvent| match event {
                PlaybackEvent::PhaseChanged(phase) => view.phase.set(phase),
                PlaybackEvent::Revealed(state) => view.reveal.set(state),
                PlaybackEvent::Pressed(pressed) => view.pressed.set(pressed),
                PlaybackEvent::Navigate(url) => browser::navigate(url.as_str()),
            };
            let rng = SmallRng::seed_from_u64(browser::random_seed());

            let playback = match Playback::new(query, &config, GlooSleeper, rng, sink) {
                Ok(playback) => playback,
                Err(err) => {
                    error!(%err, "playback not started");
                    return;
                }
            };
            if let Some(report) = playback.run().await {
                debug!(destination = %report.destination, completion = ?report.completion, "playback finished");
            }
        }
    });

    view
}
