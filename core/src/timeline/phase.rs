//! Playback phases and the pure transition function.
//!
//! The scripted playback moves through a fixed sequence:
//! - Idle: page shown, nothing happening yet
//! - MovingMouse: fake pointer travels towards the input
//! - Clicking: pointer clicks, input gains focus
//! - Typing: the question is revealed character by character
//! - Submitting: send button pressed
//! - ShowingComment: the sarcastic remark appears
//! - Redirecting: last pause before navigating away
//!
//! Nothing here knows about time; delays are decided by the controller.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::guard::TypingCompletion;

/// One stage of the scripted playback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Phase {
    Idle,
    MovingMouse,
    Clicking,
    Typing,
    Submitting,
    ShowingComment,
    Redirecting,
}

impl Phase {
    /// Every phase in playback order.
    pub const ALL: [Phase; 7] = [
        Phase::Idle,
        Phase::MovingMouse,
        Phase::Clicking,
        Phase::Typing,
        Phase::Submitting,
        Phase::ShowingComment,
        Phase::Redirecting,
    ];

    /// The phase that follows this one, or `None` for the last.
    pub fn successor(self) -> Option<Phase> {
        match self {
            Phase::Idle => Some(Phase::MovingMouse),
            Phase::MovingMouse => Some(Phase::Clicking),
            Phase::Clicking => Some(Phase::Typing),
            Phase::Typing => Some(Phase::Submitting),
            Phase::Submitting => Some(Phase::ShowingComment),
            Phase::ShowingComment => Some(Phase::Redirecting),
            Phase::Redirecting => None,
        }
    }

    /// Stable kebab-case name, matching the serialized form.
    pub fn as_str(self) -> &'static str {
        match self {
            Phase::Idle => "idle",
            Phase::MovingMouse => "moving-mouse",
            Phase::Clicking => "clicking",
            Phase::Typing => "typing",
            Phase::Submitting => "submitting",
            Phase::ShowingComment => "showing-comment",
            Phase::Redirecting => "redirecting",
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Presentation queries
    // ─────────────────────────────────────────────────────────────────────────

    /// The fake pointer is on screen.
    pub fn shows_pointer(self) -> bool {
        matches!(self, Phase::MovingMouse | Phase::Clicking)
    }

    /// The chat input is drawn with its focus ring.
    pub fn input_focused(self) -> bool {
        matches!(self, Phase::Clicking | Phase::Typing | Phase::Submitting)
    }

    /// The whole question sits in the input (typing is over).
    pub fn shows_full_query(self) -> bool {
        self >= Phase::Submitting
    }

    /// The send button is highlighted.
    pub fn send_active(self) -> bool {
        self >= Phase::Submitting
    }

    /// The sarcastic remark is visible.
    pub fn shows_comment(self) -> bool {
        self >= Phase::ShowingComment
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input to [`transition`].
#[derive(Debug)]
pub enum PhaseEvent {
    /// The fixed delay of the current phase ran out.
    DelayElapsed,
    /// Typing concluded. Only the completion guard can mint the token.
    TypingFinished(TypingCompletion),
}

/// Outcome of [`transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Enter(Phase),
    /// Leave the page. Terminal.
    Navigate,
    /// The event does not apply to the current phase.
    Ignore,
}

/// Pure transition function of the playback timeline.
///
/// Typing ignores its delay (it has none of its own) and only leaves on
/// [`PhaseEvent::TypingFinished`]; every other phase only leaves on
/// [`PhaseEvent::DelayElapsed`]. Redirecting is the last phase: its delay
/// yields [`Step::Navigate`].
pub fn transition(phase: Phase, event: PhaseEvent) -> Step {
    match (phase, event) {
        (Phase::Typing, PhaseEvent::TypingFinished(_)) => Step::Enter(Phase::Submitting),
        (Phase::Typing, PhaseEvent::DelayElapsed) => Step::Ignore,
        (_, PhaseEvent::TypingFinished(_)) => Step::Ignore,
        (Phase::Redirecting, PhaseEvent::DelayElapsed) => Step::Navigate,
        (phase, PhaseEvent::DelayElapsed) => match phase.successor() {
            Some(next) => Step::Enter(next),
            None => Step::Ignore,
        },
    }
}
