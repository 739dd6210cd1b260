//! Timeline controller.
//!
//! The controller never sleeps. Each input (start, a fired timer, the
//! revealer finishing) returns the [`Command`]s the driver must carry out:
//! report a phase, arm or disarm a timer, start or stop the revealer, pulse
//! the send button, navigate.

use std::time::Duration;

use lmcgtfy_types::{PlaybackConfig, RedirectConfig};
use tracing::debug;
use url::Url;

use super::guard::{CompletionGuard, CompletionSource};
use super::phase::{Phase, PhaseEvent, Step, transition};
use super::timing::{phase_delay, press_pulse, typing_fallback};
use crate::config::ConfigError;
use crate::query::Query;
use crate::reveal::RevealTick;

/// Identity of an armed timer. Arming an id that is already armed replaces it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerId {
    /// Fixed delay of the current phase
    Advance,
    /// Upper bound on the typing phase
    TypingFallback,
    /// End of the send-button press pulse
    PressRelease,
    /// Next revealer step (character or grace period)
    Reveal(RevealTick),
}

/// Work the driver performs on behalf of the controller.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Report the new current phase
    Enter(Phase),
    Arm(TimerId, Duration),
    Disarm(TimerId),
    /// Begin revealing the question
    StartReveal,
    /// Abandon the revealer and cancel its timers
    StopReveal,
    /// Send button pressed (`true`) or released (`false`)
    Press(bool),
    /// Leave the page for the destination. Issued at most once.
    Navigate(Url),
}

/// Phase state machine of a single playback.
#[derive(Debug)]
pub struct Timeline {
    config: PlaybackConfig,
    query: Query,
    destination: Url,
    phase: Phase,
    guard: CompletionGuard,
    started: bool,
    navigated: bool,
}

impl Timeline {
    /// Build the timeline for `query`.
    ///
    /// The destination is resolved up front so a bad redirect setting fails
    /// here rather than at the end of the animation.
    pub fn new(
        query: Query,
        config: &PlaybackConfig,
        redirect: &RedirectConfig,
    ) -> Result<Self, ConfigError> {
        let destination = destination_url(redirect, query.as_str())?;
        Ok(Self {
            config: config.clone(),
            query,
            destination,
            phase: Phase::Idle,
            guard: CompletionGuard::new(),
            started: false,
            navigated: false,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn query(&self) -> &Query {
        &self.query
    }

    pub fn destination(&self) -> &Url {
        &self.destination
    }

    /// Which source ended typing, once it has ended.
    pub fn completion(&self) -> Option<CompletionSource> {
        self.guard.winner()
    }

    /// Navigation has been issued; nothing further will happen.
    pub fn is_finished(&self) -> bool {
        self.navigated
    }

    /// Report the initial phase and arm its timer. Later calls do nothing.
    pub fn start(&mut self) -> Vec<Command> {
        if self.started {
            return Vec::new();
        }
        self.started = true;
        debug!(query_chars = self.query.char_len(), "timeline started");
        self.entry_commands(Phase::Idle)
    }

    /// Handle a fired timer that belongs to the controller.
    ///
    /// Revealer ticks are not the controller's business and are ignored.
    pub fn on_timer(&mut self, timer: TimerId) -> Vec<Command> {
        if self.navigated || !self.started {
            return Vec::new();
        }
        match timer {
            TimerId::Advance => self.apply(PhaseEvent::DelayElapsed),
            TimerId::TypingFallback => self.finish_typing(CompletionSource::Fallback),
            TimerId::PressRelease => vec![Command::Press(false)],
            TimerId::Reveal(_) => Vec::new(),
        }
    }

    /// The revealer signalled completion (after its grace period).
    pub fn on_reveal_complete(&mut self) -> Vec<Command> {
        if self.navigated {
            return Vec::new();
        }
        self.finish_typing(CompletionSource::Revealer)
    }

    fn finish_typing(&mut self, source: CompletionSource) -> Vec<Command> {
        if self.phase != Phase::Typing {
            debug!(?source, phase = %self.phase, "typing completion outside typing phase ignored");
            return Vec::new();
        }
        let Some(token) = self.guard.claim(source) else {
            debug!(?source, "typing already concluded, duplicate completion ignored");
            return Vec::new();
        };
        debug!(?source, "typing concluded");
        self.apply(PhaseEvent::TypingFinished(token))
    }

    fn apply(&mut self, event: PhaseEvent) -> Vec<Command> {
        match transition(self.phase, event) {
            Step::Enter(next) => {
                debug!(from = %self.phase, to = %next, "phase transition");
                self.phase = next;
                self.entry_commands(next)
            }
            Step::Navigate => {
                self.navigated = true;
                debug!(destination = %self.destination, "navigating");
                vec![Command::Navigate(self.destination.clone())]
            }
            Step::Ignore => Vec::new(),
        }
    }

    /// Side effects of entering `phase`.
    fn entry_commands(&self, phase: Phase) -> Vec<Command> {
        let mut commands = vec![Command::Enter(phase)];

        match phase {
            Phase::Typing => {
                let bound = typing_fallback(&self.config.typing, self.query.char_len());
                commands.push(Command::StartReveal);
                commands.push(Command::Arm(TimerId::TypingFallback, bound));
            }
            Phase::Submitting => {
                commands.push(Command::StopReveal);
                commands.push(Command::Disarm(TimerId::TypingFallback));
                commands.push(Command::Press(true));
                commands.push(Command::Arm(TimerId::PressRelease, press_pulse(&self.config)));
            }
            _ => {}
        }

        if let Some(delay) = phase_delay(&self.config, phase) {
            commands.push(Command::Arm(TimerId::Advance, delay));
        }

        commands
    }
}

/// Destination URL: the configured base with its query replaced by the single
/// configured parameter carrying `query`. The value is form-encoded, so a
/// space becomes `+` (`q=What%27s+the+capital`).
pub fn destination_url(redirect: &RedirectConfig, query: &str) -> Result<Url, ConfigError> {
    if redirect.query_param.is_empty() {
        return Err(ConfigError::InvalidValue {
            field: "redirect.query_param",
            reason: "must not be empty".to_string(),
        });
    }

    let mut url = Url::parse(&redirect.base_url).map_err(|source| ConfigError::InvalidRedirect {
        url: redirect.base_url.clone(),
        source,
    })?;
    if url.cannot_be_a_base() {
        return Err(ConfigError::InvalidValue {
            field: "redirect.base_url",
            reason: format!("{} is not a hierarchical URL", redirect.base_url),
        });
    }

    url.query_pairs_mut()
        .clear()
        .append_pair(&redirect.query_param, query);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timeline(text: &str) -> Timeline {
        Timeline::new(
            Query::new(text).unwrap(),
            &PlaybackConfig::default(),
            &RedirectConfig::default(),
        )
        .unwrap()
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    /// Drive a timeline from Idle into Typing, returning the commands of the
    /// Typing entry.
    fn into_typing(tl: &mut Timeline) -> Vec<Command> {
        tl.start();
        tl.on_timer(TimerId::Advance);
        tl.on_timer(TimerId::Advance);
        tl.on_timer(TimerId::Advance)
    }

    #[test]
    fn test_start_reports_idle_and_arms_first_delay() {
        let mut tl = timeline("hello");
        assert_eq!(
            tl.start(),
            vec![Command::Enter(Phase::Idle), Command::Arm(TimerId::Advance, ms(500))]
        );
        assert!(tl.start().is_empty(), "start is one-shot");
    }

    #[test]
    fn test_timers_before_start_are_ignored() {
        let mut tl = timeline("hello");
        assert!(tl.on_timer(TimerId::Advance).is_empty());
        assert_eq!(tl.phase(), Phase::Idle);
    }

    #[test]
    fn test_typing_entry_starts_revealer_and_fallback() {
        let mut tl = timeline("0123456789");
        let commands = into_typing(&mut tl);
        assert_eq!(tl.phase(), Phase::Typing);
        assert_eq!(
            commands,
            vec![
                Command::Enter(Phase::Typing),
                Command::StartReveal,
                Command::Arm(TimerId::TypingFallback, ms(2200)),
            ]
        );
    }

    #[test]
    fn test_revealer_completion_then_late_fallback() {
        let mut tl = timeline("0123456789");
        into_typing(&mut tl);

        let commands = tl.on_reveal_complete();
        assert_eq!(
            commands,
            vec![
                Command::Enter(Phase::Submitting),
                Command::StopReveal,
                Command::Disarm(TimerId::TypingFallback),
                Command::Press(true),
                Command::Arm(TimerId::PressRelease, ms(180)),
                Command::Arm(TimerId::Advance, ms(500)),
            ]
        );
        assert_eq!(tl.completion(), Some(CompletionSource::Revealer));

        assert!(tl.on_timer(TimerId::TypingFallback).is_empty());
        assert!(tl.on_reveal_complete().is_empty());
        assert_eq!(tl.phase(), Phase::Submitting);
        assert_eq!(tl.completion(), Some(CompletionSource::Revealer));
    }

    #[test]
    fn test_fallback_wins_when_revealer_stalls() {
        let mut tl = timeline("hello");
        into_typing(&mut tl);

        let commands = tl.on_timer(TimerId::TypingFallback);
        assert_eq!(commands.first(), Some(&Command::Enter(Phase::Submitting)));
        assert_eq!(tl.completion(), Some(CompletionSource::Fallback));

        assert!(tl.on_reveal_complete().is_empty());
        assert_eq!(tl.phase(), Phase::Submitting);
    }

    #[test]
    fn test_completion_before_typing_does_not_burn_guard() {
        let mut tl = timeline("hello");
        tl.start();
        assert!(tl.on_reveal_complete().is_empty());
        assert_eq!(tl.completion(), None);

        into_typing(&mut tl);
        assert!(!tl.on_timer(TimerId::TypingFallback).is_empty());
        assert_eq!(tl.completion(), Some(CompletionSource::Fallback));
    }

    #[test]
    fn test_advance_is_ignored_while_typing() {
        let mut tl = timeline("hello");
        into_typing(&mut tl);
        assert!(tl.on_timer(TimerId::Advance).is_empty());
        assert_eq!(tl.phase(), Phase::Typing);
    }

    #[test]
    fn test_full_walk_navigates_once() {
        let mut tl = timeline("What's the capital of France?");
        into_typing(&mut tl);
        tl.on_reveal_complete();

        assert_eq!(tl.on_timer(TimerId::PressRelease), vec![Command::Press(false)]);

        let comment = tl.on_timer(TimerId::Advance);
        assert_eq!(
            comment,
            vec![Command::Enter(Phase::ShowingComment), Command::Arm(TimerId::Advance, ms(2000))]
        );
        let redirect = tl.on_timer(TimerId::Advance);
        assert_eq!(
            redirect,
            vec![Command::Enter(Phase::Redirecting), Command::Arm(TimerId::Advance, ms(1500))]
        );

        let nav = tl.on_timer(TimerId::Advance);
        let [Command::Navigate(url)] = nav.as_slice() else {
            panic!("expected a single navigation, got {nav:?}");
        };
        assert_eq!(
            url.as_str(),
            "https://chat.openai.com/?q=What%27s+the+capital+of+France%3F"
        );
        assert!(tl.is_finished());

        assert!(tl.on_timer(TimerId::Advance).is_empty());
        assert!(tl.on_timer(TimerId::PressRelease).is_empty());
        assert_eq!(tl.phase(), Phase::Redirecting);
    }

    #[test]
    fn test_destination_replaces_existing_query() {
        let redirect = RedirectConfig {
            base_url: "https://chat.example.com/new?model=x&q=old#top".to_string(),
            query_param: "prompt".to_string(),
        };
        let url = destination_url(&redirect, "a&b=c").unwrap();
        assert_eq!(url.as_str(), "https://chat.example.com/new?prompt=a%26b%3Dc#top");

        let pairs: Vec<_> = url.query_pairs().collect();
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].1, "a&b=c");
    }

    #[test]
    fn test_destination_form_encodes_spaces_as_plus() {
        let url = destination_url(&RedirectConfig::default(), "What's the capital").unwrap();
        assert_eq!(url.query(), Some("q=What%27s+the+capital"));
    }

    #[test]
    fn test_destination_keeps_unicode_literal() {
        let url = destination_url(&RedirectConfig::default(), "日本 🙄").unwrap();
        let (_, value) = url.query_pairs().next().unwrap();
        assert_eq!(value, "日本 🙄");
    }

    #[test]
    fn test_invalid_redirect_settings() {
        let bad_base = RedirectConfig {
            base_url: "not a url".to_string(),
            ..RedirectConfig::default()
        };
        assert!(matches!(
            destination_url(&bad_base, "q"),
            Err(ConfigError::InvalidRedirect { .. })
        ));

        let opaque = RedirectConfig {
            base_url: "mailto:someone@example.com".to_string(),
            ..RedirectConfig::default()
        };
        assert!(matches!(
            destination_url(&opaque, "q"),
            Err(ConfigError::InvalidValue { field: "redirect.base_url", .. })
        ));

        let no_param = RedirectConfig {
            query_param: String::new(),
            ..RedirectConfig::default()
        };
        assert!(matches!(
            destination_url(&no_param, "q"),
            Err(ConfigError::InvalidValue { field: "redirect.query_param", .. })
        ));
    }
}
