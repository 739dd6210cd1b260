//! Incremental text revealer.
//!
//! Simulates someone typing: the revealed prefix grows one character at a
//! time after a randomized delay, then a fixed grace period passes and
//! completion is signalled exactly once.
//!
//! Like the timeline controller this is sans-IO. [`Revealer::next_tick`]
//! says which timer to arm next; [`Revealer::fire`] applies it when it runs
//! out. Ticks carry the generation they were armed for, so ticks from before
//! a [`Revealer::retarget`] are recognised as stale and change nothing.

use std::time::Duration;

use lmcgtfy_types::TypingConfig;
use rand::Rng;
use serde::Serialize;

use crate::query::char_prefix;

/// Progress of one reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct RevealState {
    /// Characters revealed so far. Never decreases (except on retarget).
    pub revealed_len: usize,
    /// The whole text is revealed.
    pub complete: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TickKind {
    /// Reveal one more character
    Char,
    /// Grace period after the last character
    Grace,
}

/// A revealer timer, tagged with the generation it was armed for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RevealTick {
    kind: TickKind,
    generation: u32,
}

impl RevealTick {
    pub fn kind(&self) -> TickKind {
        self.kind
    }
}

/// Result of [`Revealer::fire`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealUpdate {
    /// One more character is visible
    Extended(RevealState),
    /// Grace period over: typing is complete. Returned once per target.
    Completed,
    /// The tick was not the one outstanding (old generation or duplicate)
    Stale,
}

/// Typing simulator for one target string.
#[derive(Debug, Clone)]
pub struct Revealer {
    text: String,
    len: usize,
    revealed: usize,
    config: TypingConfig,
    generation: u32,
    pending: Option<RevealTick>,
    grace_armed: bool,
    signalled: bool,
}

impl Revealer {
    pub fn new(text: impl Into<String>, config: &TypingConfig) -> Self {
        let text = text.into();
        Self {
            len: text.chars().count(),
            text,
            revealed: 0,
            config: config.clone(),
            generation: 0,
            pending: None,
            grace_armed: false,
            signalled: false,
        }
    }

    pub fn state(&self) -> RevealState {
        RevealState {
            revealed_len: self.revealed,
            complete: self.revealed == self.len,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// The part of the text typed so far.
    pub fn revealed_text(&self) -> &str {
        char_prefix(&self.text, self.revealed)
    }

    /// A blinking caret is drawn while typing is incomplete.
    pub fn caret_visible(&self) -> bool {
        self.config.show_cursor && !self.state().complete
    }

    /// Completion has been signalled for the current target.
    pub fn is_signalled(&self) -> bool {
        self.signalled
    }

    /// The next timer to arm, or `None` if one is already outstanding or the
    /// reveal has finished.
    pub fn next_tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<(RevealTick, Duration)> {
        if self.pending.is_some() || self.signalled {
            return None;
        }

        let (kind, delay) = if self.revealed < self.len {
            (TickKind::Char, reveal_delay(&self.config, rng))
        } else if !self.grace_armed {
            self.grace_armed = true;
            (TickKind::Grace, Duration::from_millis(self.config.grace_ms.into()))
        } else {
            return None;
        };

        let tick = RevealTick {
            kind,
            generation: self.generation,
        };
        self.pending = Some(tick);
        Some((tick, delay))
    }

    /// Apply a timer that ran out.
    pub fn fire(&mut self, tick: RevealTick) -> RevealUpdate {
        if self.pending != Some(tick) {
            return RevealUpdate::Stale;
        }
        self.pending = None;

        match tick.kind {
            TickKind::Char => {
                self.revealed = (self.revealed + 1).min(self.len);
                RevealUpdate::Extended(self.state())
            }
            TickKind::Grace => {
                self.signalled = true;
                RevealUpdate::Completed
            }
        }
    }

    /// Restart from an empty prefix against `text`.
    ///
    /// Any tick armed before this call becomes stale, so the old target can
    /// neither grow nor complete.
    pub fn retarget(&mut self, text: impl Into<String>) {
        let text = text.into();
        self.len = text.chars().count();
        self.text = text;
        self.revealed = 0;
        self.generation = self.generation.wrapping_add(1);
        self.pending = None;
        self.grace_armed = false;
        self.signalled = false;
    }
}

/// Delay before the next character: `base + floor(r * base * jitter)` with
/// `r` uniform in `[0, 1)`.
pub fn reveal_delay<R: Rng + ?Sized>(config: &TypingConfig, rng: &mut R) -> Duration {
    let base = u64::from(config.base_speed_ms);
    let spread = base as f64 * config.jitter.max(0.0);
    let extra = (rng.random::<f64>() * spread).floor() as u64;
    Duration::from_millis(base.saturating_add(extra))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn config() -> TypingConfig {
        TypingConfig::default()
    }

    /// Run a revealer to completion, returning every update in order.
    fn run_to_end(revealer: &mut Revealer, rng: &mut StdRng) -> Vec<(Duration, RevealUpdate)> {
        let mut updates = Vec::new();
        while let Some((tick, delay)) = revealer.next_tick(rng) {
            updates.push((delay, revealer.fire(tick)));
        }
        updates
    }

    #[test]
    fn test_reveals_every_character_then_completes_once() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut revealer = Revealer::new("héllo", &config());
        assert_eq!(revealer.state(), RevealState { revealed_len: 0, complete: false });
        assert!(revealer.caret_visible());

        let updates = run_to_end(&mut revealer, &mut rng);
        assert_eq!(updates.len(), 6);

        let mut last = 0;
        for (i, (_, update)) in updates[..5].iter().enumerate() {
            let RevealUpdate::Extended(state) = update else {
                panic!("expected extension at step {i}, got {update:?}");
            };
            assert!(state.revealed_len > last);
            last = state.revealed_len;
            assert_eq!(state.complete, i == 4);
        }
        assert_eq!(updates[5], (Duration::from_millis(800), RevealUpdate::Completed));

        assert_eq!(revealer.revealed_text(), "héllo");
        assert!(!revealer.caret_visible());
        assert!(revealer.is_signalled());
        assert!(revealer.next_tick(&mut rng).is_none());
    }

    #[test]
    fn test_empty_text_only_waits_grace() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut revealer = Revealer::new("", &config());
        assert!(revealer.state().complete);

        let updates = run_to_end(&mut revealer, &mut rng);
        assert_eq!(updates, vec![(Duration::from_millis(800), RevealUpdate::Completed)]);
    }

    #[test]
    fn test_delays_stay_within_jitter_band() {
        let mut rng = StdRng::seed_from_u64(42);
        let typing = TypingConfig {
            base_speed_ms: 80,
            ..config()
        };
        for _ in 0..1_000 {
            let d = reveal_delay(&typing, &mut rng).as_millis();
            assert!((80..144).contains(&d), "delay {d} outside [80, 144)");
        }
    }

    #[test]
    fn test_zero_jitter_is_uniform() {
        let mut rng = StdRng::seed_from_u64(3);
        let typing = TypingConfig {
            base_speed_ms: 50,
            jitter: 0.0,
            ..config()
        };
        assert_eq!(reveal_delay(&typing, &mut rng), Duration::from_millis(50));
    }

    #[test]
    fn test_huge_jitter_saturates_instead_of_overflowing() {
        let mut rng = StdRng::seed_from_u64(17);
        let typing = TypingConfig {
            base_speed_ms: u32::MAX,
            jitter: 1e20,
            ..config()
        };
        for _ in 0..100 {
            let d = reveal_delay(&typing, &mut rng);
            assert!(d >= Duration::from_millis(u64::from(u32::MAX)));
        }
    }

    #[test]
    fn test_seeded_rng_is_deterministic() {
        let delays = |seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut revealer = Revealer::new("deterministic", &config());
            run_to_end(&mut revealer, &mut rng)
                .into_iter()
                .map(|(d, _)| d)
                .collect::<Vec<_>>()
        };
        assert_eq!(delays(99), delays(99));
    }

    #[test]
    fn test_only_one_tick_outstanding() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut revealer = Revealer::new("ab", &config());
        let (tick, _) = revealer.next_tick(&mut rng).unwrap();
        assert!(revealer.next_tick(&mut rng).is_none());

        assert!(matches!(revealer.fire(tick), RevealUpdate::Extended(_)));
        assert_eq!(revealer.fire(tick), RevealUpdate::Stale, "same tick twice");
    }

    #[test]
    fn test_retarget_mid_reveal_restarts_and_stales_old_ticks() {
        let mut rng = StdRng::seed_from_u64(11);
        let mut revealer = Revealer::new("first", &config());

        let (tick, _) = revealer.next_tick(&mut rng).unwrap();
        revealer.fire(tick);
        let (old_tick, _) = revealer.next_tick(&mut rng).unwrap();

        revealer.retarget("second!");
        assert_eq!(revealer.state(), RevealState { revealed_len: 0, complete: false });
        assert_eq!(revealer.fire(old_tick), RevealUpdate::Stale);
        assert_eq!(revealer.revealed_text(), "");

        let updates = run_to_end(&mut revealer, &mut rng);
        let completions = updates
            .iter()
            .filter(|(_, u)| *u == RevealUpdate::Completed)
            .count();
        assert_eq!(completions, 1);
        assert_eq!(revealer.revealed_text(), "second!");
    }

    #[test]
    fn test_retarget_during_grace_never_completes_old_target() {
        let mut rng = StdRng::seed_from_u64(13);
        let mut revealer = Revealer::new("x", &config());
        let (tick, _) = revealer.next_tick(&mut rng).unwrap();
        revealer.fire(tick);

        let (grace, delay) = revealer.next_tick(&mut rng).unwrap();
        assert_eq!(grace.kind(), TickKind::Grace);
        assert_eq!(delay, Duration::from_millis(800));

        revealer.retarget("");
        assert_eq!(revealer.fire(grace), RevealUpdate::Stale);
        assert!(!revealer.is_signalled());

        let updates = run_to_end(&mut revealer, &mut rng);
        assert_eq!(updates, vec![(Duration::from_millis(800), RevealUpdate::Completed)]);
    }

    #[test]
    fn test_caret_hidden_when_disabled() {
        let typing = TypingConfig {
            show_cursor: false,
            ..config()
        };
        assert!(!Revealer::new("abc", &typing).caret_visible());
    }
}
