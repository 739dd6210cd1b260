//! Shared configuration types for LMCGTFY.
//!
//! Every host (web front-end, CLI) reads the same [`AppConfig`]. All fields
//! carry serde defaults so a partial TOML file only overrides what it names.

use serde::{Deserialize, Serialize};

pub mod formatting;

// ─────────────────────────────────────────────────────────────────────────────
// Root Config
// ─────────────────────────────────────────────────────────────────────────────

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Initial colour scheme for the web front-end
    pub theme: Theme,
    /// Phase timings for the scripted playback
    pub playback: PlaybackConfig,
    /// Where the playback sends the browser at the end
    pub redirect: RedirectConfig,
    /// Share link construction
    pub share: ShareConfig,
}

/// Colour scheme. Dark is the default; there is no "follow system" mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// The other theme.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Class name applied to the document root.
    pub fn class_name(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    /// Parse a stored class name, ignoring anything unknown.
    pub fn from_class_name(name: &str) -> Option<Self> {
        match name.trim() {
            "dark" => Some(Theme::Dark),
            "light" => Some(Theme::Light),
            _ => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Playback
// ─────────────────────────────────────────────────────────────────────────────

/// Delays (milliseconds) between the phases of the scripted playback.
///
/// Each delay is measured from entering the named phase to leaving it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Idle -> MovingMouse
    pub idle_ms: u32,
    /// MovingMouse -> Clicking
    pub move_mouse_ms: u32,
    /// Clicking -> Typing
    pub click_ms: u32,
    /// Submitting -> ShowingComment
    pub submit_ms: u32,
    /// ShowingComment -> Redirecting
    pub comment_ms: u32,
    /// Redirecting -> navigation
    pub redirect_ms: u32,
    /// How long the send button stays "pressed" after submitting
    pub press_pulse_ms: u32,
    /// Typing simulation and its fallback bound
    pub typing: TypingConfig,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            idle_ms: 500,
            move_mouse_ms: 800,
            click_ms: 400,
            submit_ms: 500,
            comment_ms: 2000,
            redirect_ms: 1500,
            press_pulse_ms: 180,
            typing: TypingConfig::default(),
        }
    }
}

/// Typing simulation settings.
///
/// Per-character delay is `base_speed_ms + r * base_speed_ms * jitter` for a
/// uniform `r` in `[0, 1)`. The typing phase is forced to end after
/// `max(fallback_floor_ms, fallback_per_char_ms * len)` even if the revealer
/// has not finished.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TypingConfig {
    pub base_speed_ms: u32,
    pub jitter: f64,
    /// Pause after the last character before typing counts as complete
    pub grace_ms: u32,
    /// Render a blinking caret while typing is incomplete
    pub show_cursor: bool,
    pub fallback_floor_ms: u32,
    pub fallback_per_char_ms: u32,
}

impl Default for TypingConfig {
    fn default() -> Self {
        Self {
            base_speed_ms: 100,
            jitter: 0.8,
            grace_ms: 800,
            show_cursor: true,
            fallback_floor_ms: 2000,
            fallback_per_char_ms: 220,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Redirect / Share
// ─────────────────────────────────────────────────────────────────────────────

/// Destination of the final navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedirectConfig {
    /// Base address; any query string it carries is replaced
    pub base_url: String,
    /// Name of the single query parameter carrying the question
    pub query_param: String,
}

impl Default for RedirectConfig {
    fn default() -> Self {
        Self {
            base_url: "https://chat.openai.com/".to_string(),
            query_param: "q".to_string(),
        }
    }
}

/// Share link settings for hosts that have no page origin of their own (CLI).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShareConfig {
    pub origin: String,
}

impl Default for ShareConfig {
    fn default() -> Self {
        Self {
            origin: "https://letmechatgptthat.com".to_string(),
        }
    }
}
