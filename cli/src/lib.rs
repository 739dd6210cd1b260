//! Terminal host for the LMCGTFY playback engine.

pub mod commands;
pub mod error;
pub mod logging;
pub mod render;

pub use error::CliError;
