//! Single-assignment guard for the end of the typing phase.
//!
//! Two independent timers race to end typing: the revealer's own completion
//! and the controller's fallback. Whichever claims the guard first receives a
//! [`TypingCompletion`] token; the loser receives nothing. The Typing ->
//! Submitting transition needs the token, so it can happen at most once.

use std::cell::OnceCell;

use serde::{Deserialize, Serialize};

/// Who ended the typing phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CompletionSource {
    /// The revealer typed the whole question and its grace period ran out
    Revealer,
    /// The controller's fallback bound ran out first
    Fallback,
}

/// Proof that typing concluded. Not `Clone`; only [`CompletionGuard::claim`]
/// creates one.
#[derive(Debug)]
pub struct TypingCompletion {
    source: CompletionSource,
}

impl TypingCompletion {
    pub fn source(&self) -> CompletionSource {
        self.source
    }
}

/// First-writer-wins cell, one per playback.
#[derive(Debug, Default)]
pub struct CompletionGuard {
    winner: OnceCell<CompletionSource>,
}

impl CompletionGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `source` as the winner if nobody has claimed yet.
    pub fn claim(&self, source: CompletionSource) -> Option<TypingCompletion> {
        self.winner
            .set(source)
            .ok()
            .map(|()| TypingCompletion { source })
    }

    /// The source that won, once claimed.
    pub fn winner(&self) -> Option<CompletionSource> {
        self.winner.get().copied()
    }

    pub fn is_claimed(&self) -> bool {
        self.winner.get().is_some()
    }
}
