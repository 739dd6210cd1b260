//! Scripted playback engine for LMCGTFY.
//!
//! The engine is split the same way on every host:
//! - [`timeline`]: phase state machine, completion guard and the controller
//!   that decides which timers to arm
//! - [`reveal`]: incremental text revealer simulating human typing
//! - [`scheduler`]: owner of every armed, cancellable timer
//! - [`playback`]: async driver tying the three together
//!
//! Link encoding and route parsing live in [`link`], configuration I/O in
//! [`config`].

pub mod config;
pub mod copy;
pub mod link;
pub mod playback;
pub mod query;
pub mod reveal;
pub mod scheduler;
pub mod timeline;

// Re-exports for convenience
pub use config::ConfigError;
pub use link::{LinkError, Route, compose_query, decode_segment, encode_query, share_link};
pub use playback::{Playback, PlaybackEvent, PlaybackReport, PlaybackSink};
pub use query::Query;
pub use reveal::{RevealState, Revealer};
pub use scheduler::{Scheduler, Sleeper};
pub use timeline::{CompletionGuard, CompletionSource, Phase, Timeline};

pub use lmcgtfy_types::{AppConfig, PlaybackConfig, RedirectConfig, Theme, TypingConfig};

#[cfg(feature = "tokio")]
pub use scheduler::TokioSleeper;
