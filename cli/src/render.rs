//! Terminal rendering of playback events.
//!
//! Two formats: a human-readable timeline, or one JSON object per line for
//! scripting. Both stamp each event with its offset from the start.

use std::io::Write;

use lmcgtfy_core::{Phase, PlaybackEvent, Query, copy};
use lmcgtfy_types::formatting::format_offset_ms;
use serde::Serialize;
use tokio::time::Instant;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Text,
    Json,
}

#[derive(Serialize)]
struct EventLine<'a> {
    at_ms: u64,
    #[serde(flatten)]
    event: &'a PlaybackEvent,
}

/// Writes playback events as they arrive.
pub struct Renderer<W> {
    out: W,
    format: Format,
    query: Query,
    start: Instant,
    show_cursor: bool,
    /// A typing line is open and needs a newline before the next phase
    typing_open: bool,
}

impl<W: Write> Renderer<W> {
    pub fn new(out: W, format: Format, query: Query, show_cursor: bool) -> Self {
        Self {
            out,
            format,
            query,
            start: Instant::now(),
            show_cursor,
            typing_open: false,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Render one event. Output errors are logged, never fatal to playback.
    pub fn render(&mut self, event: &PlaybackEvent) {
        let at_ms = self.start.elapsed().as_millis() as u64;
        let result = match self.format {
            Format::Json => self.render_json(at_ms, event),
            Format::Text => self.render_text(at_ms, event),
        };
        if let Err(e) = result.and_then(|()| self.out.flush()) {
            warn!(error = %e, "failed to write playback output");
        }
    }

    fn render_json(&mut self, at_ms: u64, event: &PlaybackEvent) -> std::io::Result<()> {
        serde_json::to_writer(&mut self.out, &EventLine { at_ms, event })?;
        writeln!(self.out)
    }

    fn render_text(&mut self, at_ms: u64, event: &PlaybackEvent) -> std::io::Result<()> {
        match event {
            PlaybackEvent::PhaseChanged(phase) => {
                self.close_typing_line()?;
                writeln!(self.out, "[{:>7}] {}", format_offset_ms(at_ms), phase)?;
                match phase {
                    Phase::ShowingComment => {
                        writeln!(self.out, "          {}", copy::COMMENT_HEADLINE)?;
                        writeln!(self.out, "          {}", copy::COMMENT_SUBLINE)?;
                    }
                    Phase::Submitting => {
                        writeln!(self.out, "          > {}", self.query)?;
                    }
                    _ => {}
                }
                Ok(())
            }
            PlaybackEvent::Revealed(state) => {
                let caret = if self.show_cursor && !state.complete { "▌" } else { "" };
                write!(
                    self.out,
                    "\r          > {}{}",
                    self.query.prefix(state.revealed_len),
                    caret
                )?;
                self.typing_open = true;
                Ok(())
            }
            // The press pulse is only visual
            PlaybackEvent::Pressed(_) => Ok(()),
            PlaybackEvent::Navigate(url) => {
                self.close_typing_line()?;
                writeln!(self.out, "[{:>7}] navigate {}", format_offset_ms(at_ms), url)
            }
        }
    }

    fn close_typing_line(&mut self) -> std::io::Result<()> {
        if self.typing_open {
            self.typing_open = false;
            writeln!(self.out)?;
        }
        Ok(())
    }
}
