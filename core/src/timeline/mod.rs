//! Timeline of the scripted playback.
//!
//! - [`phase`]: phases and the pure transition function
//! - [`guard`]: first-wins guard for the end of typing
//! - [`timing`]: delay lookup from configuration
//! - [`controller`]: the sans-IO controller emitting timer commands

pub mod controller;
pub mod guard;
pub mod phase;
pub mod timing;

pub use controller::{Command, TimerId, Timeline, destination_url};
pub use guard::{CompletionGuard, CompletionSource, TypingCompletion};
pub use phase::{Phase, PhaseEvent, Step, transition};
pub use timing::{phase_delay, press_pulse, typing_fallback};
