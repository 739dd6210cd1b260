//! Async playback driver.
//!
//! Ties the [`Timeline`] controller, the [`Revealer`] and the [`Scheduler`]
//! together: commands from the controller arm timers, fired timers are routed
//! back to whichever state machine owns them, and everything observable is
//! reported to a [`PlaybackSink`].
//!
//! The driver owns all of its state, including the scheduler. Dropping the
//! future returned by [`Playback::run`] is teardown: every pending timer is
//! dropped with it and no further event reaches the sink.

use lmcgtfy_types::{AppConfig, TypingConfig};
use rand::Rng;
use serde::Serialize;
use tracing::{debug, warn};
use url::Url;

use crate::config::{ConfigError, validate};
use crate::query::Query;
use crate::reveal::{RevealState, RevealTick, RevealUpdate, Revealer};
use crate::scheduler::{Scheduler, Sleeper};
use crate::timeline::{Command, CompletionSource, Phase, TimerId, Timeline};


/// Everything a host needs to render the playback.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", content = "data", rename_all = "kebab-case")]
pub enum PlaybackEvent {
    PhaseChanged(Phase),
    /// The typed prefix grew (or the revealer started)
    Revealed(RevealState),
    /// Send button pressed or released
    Pressed(bool),
    /// Leave the page. Emitted once, as the final event.
    Navigate(Url),
}

/// Receiver of [`PlaybackEvent`]s. Implemented for any `FnMut(PlaybackEvent)`.
pub trait PlaybackSink {
    fn emit(&mut self, event: PlaybackEvent);
}

impl<F: FnMut(PlaybackEvent)> PlaybackSink for F {
    fn emit(&mut self, event: PlaybackEvent) {
        self(event)
    }
}

/// Summary of a playback that ran to the end.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlaybackReport {
    pub destination: Url,
    /// Who ended the typing phase
    pub completion: CompletionSource,
}

/// One mount of the scripted playback.
pub struct Playback<S, R, K> {
    timeline: Timeline,
    typing: TypingConfig,
    revealer: Option<Revealer>,
    scheduler: Scheduler<S>,
    rng: R,
    sink: K,
}

impl<S, R, K> Playback<S, R, K>
where
    S: Sleeper,
    R: Rng,
    K: PlaybackSink,
{
    /// Validate `config` and prepare a playback of `query`. Nothing is
    /// scheduled until [`run`](Self::run) is polled.
    pub fn new(
        query: Query,
        config: &AppConfig,
        sleeper: S,
        rng: R,
        sink: K,
    ) -> Result<Self, ConfigError> {
        validate(config)?;
        let timeline = Timeline::new(query, &config.playback, &config.redirect)?;
        Ok(Self {
            timeline,
            typing: config.playback.typing.clone(),
            revealer: None,
            scheduler: Scheduler::new(sleeper),
            rng,
            sink,
        })
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Play the whole sequence and return once navigation has been emitted.
    ///
    /// Returns `None` only if the timers ran dry before navigation, which
    /// would be a bug in the controller.
    pub async fn run(mut self) -> Option<PlaybackReport> {
        let commands = self.timeline.start();
        self.execute(commands);

        while !self.timeline.is_finished() {
            let Some(timer) = self.scheduler.next_fired().await else {
                warn!(phase = %self.timeline.phase(), "playback stalled with no armed timers");
                return None;
            };

            let commands = match timer {
                TimerId::Reveal(tick) => self.on_reveal_tick(tick),
                other => self.timeline.on_timer(other),
            };
            self.execute(commands);
        }

        self.scheduler.cancel_all();
        let completion = self.timeline.completion()?;
        debug!(?completion, "playback finished");
        Some(PlaybackReport {
            destination: self.timeline.destination().clone(),
            completion,
        })
    }

    fn on_reveal_tick(&mut self, tick: RevealTick) -> Vec<Command> {
        let Some(revealer) = self.revealer.as_mut() else {
            return Vec::new();
        };

        match revealer.fire(tick) {
            RevealUpdate::Extended(state) => {
                self.sink.emit(PlaybackEvent::Revealed(state));
                self.arm_reveal();
                Vec::new()
            }
            RevealUpdate::Completed => self.timeline.on_reveal_complete(),
            RevealUpdate::Stale => Vec::new(),
        }
    }

    fn arm_reveal(&mut self) {
        if let Some(revealer) = self.revealer.as_mut()
            && let Some((tick, delay)) = revealer.next_tick(&mut self.rng)
        {
            self.scheduler.arm(TimerId::Reveal(tick), delay);
        }
    }

    fn execute(&mut self, commands: Vec<Command>) {
        for command in commands {
            match command {
                Command::Enter(phase) => self.sink.emit(PlaybackEvent::PhaseChanged(phase)),
                Command::Arm(id, after) => self.scheduler.arm(id, after),
                Command::Disarm(id) => {
                    self.scheduler.cancel(id);
                }
                Command::StartReveal => {
                    let revealer = Revealer::new(self.timeline.query().as_str(), &self.typing);
                    self.sink.emit(PlaybackEvent::Revealed(revealer.state()));
                    self.revealer = Some(revealer);
                    self.arm_reveal();
                }
                Command::StopReveal => {
                    self.scheduler
                        .cancel_where(|id| matches!(id, TimerId::Reveal(_)));
                    self.revealer = None;
                }
                Command::Press(pressed) => self.sink.emit(PlaybackEvent::Pressed(pressed)),
                Command::Navigate(url) => self.sink.emit(PlaybackEvent::Navigate(url)),
            }
        }
    }
}
