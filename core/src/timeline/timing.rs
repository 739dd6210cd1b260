//! Delay lookup for the timeline.

use std::time::Duration;

use lmcgtfy_types::{PlaybackConfig, TypingConfig};

use super::phase::Phase;

/// Fixed delay spent in `phase` before its timer fires.
///
/// Typing has no fixed delay: it ends on completion or on the fallback bound.
pub fn phase_delay(config: &PlaybackConfig, phase: Phase) -> Option<Duration> {
    let ms = match phase {
        Phase::Idle => config.idle_ms,
        Phase::MovingMouse => config.move_mouse_ms,
        Phase::Clicking => config.click_ms,
        Phase::Typing => return None,
        Phase::Submitting => config.submit_ms,
        Phase::ShowingComment => config.comment_ms,
        Phase::Redirecting => config.redirect_ms,
    };
    Some(Duration::from_millis(ms.into()))
}

/// Upper bound on the typing phase for a question of `chars` characters:
/// `max(fallback_floor_ms, fallback_per_char_ms * chars)`.
pub fn typing_fallback(typing: &TypingConfig, chars: usize) -> Duration {
    let per_char = u64::from(typing.fallback_per_char_ms).saturating_mul(chars as u64);
    Duration::from_millis(per_char.max(typing.fallback_floor_ms.into()))
}

/// How long the send button stays pressed.
pub fn press_pulse(config: &PlaybackConfig) -> Duration {
    Duration::from_millis(config.press_pulse_ms.into())
}
