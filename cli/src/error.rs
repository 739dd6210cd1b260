use std::path::PathBuf;

use lmcgtfy_core::{ConfigError, LinkError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("invalid link: {0}")]
    Link(#[from] LinkError),

    #[error("{0:?} is not a playback link (expected /s/<question>)")]
    NotAPlaybackLink(String),

    #[error("nothing to play: give a link or --query")]
    MissingInput,

    #[error("no config directory on this system, pass --config")]
    NoConfigDir,

    #[error("{0:?} already exists (use --force to overwrite)")]
    ConfigExists(PathBuf),

    #[error("could not render config: {0}")]
    RenderConfig(#[from] toml::ser::Error),

    #[error("output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("interrupted")]
    Interrupted,
}
