//! Command implementations. Each writes its result to `out`.

use std::io::Write;
use std::path::Path;

use lmcgtfy_core::config;
use lmcgtfy_core::{
    AppConfig, Playback, PlaybackEvent, PlaybackReport, Query, Route, TokioSleeper, compose_query, copy,
    share_link,
};
use lmcgtfy_types::formatting::ellipsize_middle;
use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use crate::error::CliError;
use crate::render::{Format, Renderer};

/// Longest question shown in the `play` header.
const HEADER_CHARS: usize = 60;

/// Print the share link for `text` under `origin`.
pub fn link(text: &str, origin: &str, out: &mut impl Write) -> Result<(), CliError> {
    let query = compose_query(text).ok_or(lmcgtfy_core::LinkError::EmptyQuery)?;
    writeln!(out, "{}", share_link(origin, &query))?;
    Ok(())
}

/// Question carried by a link or path. `Ok(None)` is the empty state.
pub fn query_from_location(location: &str) -> Result<Option<Query>, CliError> {
    match Route::from_location(location)? {
        Route::Playback(query) => Ok(query),
        Route::Home | Route::NotFound => Err(CliError::NotAPlaybackLink(location.to_string())),
    }
}

/// Print the question carried by a link, or the empty-state message.
pub fn decode(location: &str, out: &mut impl Write) -> Result<(), CliError> {
    match query_from_location(location)? {
        Some(query) => writeln!(out, "{query}")?,
        None => writeln!(out, "{}", copy::NO_QUERY)?,
    }
    Ok(())
}

/// Pick the question to play from a link or an explicit `--query`.
pub fn resolve_play_input(
    location: Option<&str>,
    query: Option<&str>,
) -> Result<Option<Query>, CliError> {
    match (query, location) {
        (Some(text), _) => Ok(Query::new(text)),
        (None, Some(location)) => query_from_location(location),
        (None, None) => Err(CliError::MissingInput),
    }
}

/// Run the scripted playback of `query` in the terminal.
///
/// Returns once navigation is reached. Dropping the future stops the
/// playback with nothing further written.
pub async fn play<W: Write>(
    query: Query,
    config: &AppConfig,
    seed: Option<u64>,
    format: Format,
    mut out: W,
) -> Result<(Option<PlaybackReport>, W), CliError> {
    let rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    info!(chars = query.char_len(), seeded = seed.is_some(), "starting playback");
    if format == Format::Text {
        writeln!(out, "playing \"{}\"", ellipsize_middle(query.as_str(), HEADER_CHARS))?;
    }

    let mut renderer = Renderer::new(
        out,
        format,
        query.clone(),
        config.playback.typing.show_cursor,
    );
    let playback = Playback::new(query, config, TokioSleeper, rng, |event: PlaybackEvent| {
        renderer.render(&event)
    })?;
    let report = playback.run().await;

    if let Some(report) = &report {
        debug!(completion = ?report.completion, "typing ended");
    }
    Ok((report, renderer.into_inner()))
}

/// Print the effective configuration as TOML.
pub fn show_config(config: &AppConfig, out: &mut impl Write) -> Result<(), CliError> {
    write!(out, "{}", toml::to_string_pretty(config)?)?;
    Ok(())
}

/// Write the default configuration to `path`.
pub fn write_default_config(
    path: &Path,
    force: bool,
    out: &mut impl Write,
) -> Result<(), CliError> {
    if path.exists() && !force {
        return Err(CliError::ConfigExists(path.to_path_buf()));
    }
    config::save_file(path, &AppConfig::default())?;
    writeln!(out, "wrote default config to {}", path.display())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lmcgtfy_core::{CompletionSource, LinkError};

    fn run_to_string(f: impl FnOnce(&mut Vec<u8>) -> Result<(), CliError>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_link_and_decode() {
        let text = run_to_string(|out| {
            link("  What's the capital of France?  ", "https://example.com/", out)
        });
        assert_eq!(
            text,
            "https://example.com/s/What%27s%20the%20capital%20of%20France%3F\n"
        );

        let decoded = run_to_string(|out| decode(text.trim(), out));
        assert_eq!(decoded, "What's the capital of France?\n");
    }

    #[test]
    fn test_link_rejects_blank_text() {
        let err = link("   ", "https://example.com", &mut Vec::new()).unwrap_err();
        assert!(matches!(err, CliError::Link(LinkError::EmptyQuery)));
    }

    #[test]
    fn test_decode_empty_state() {
        assert_eq!(run_to_string(|out| decode("/s/", out)), "No query provided\n");
        assert!(matches!(
            decode("/elsewhere", &mut Vec::new()),
            Err(CliError::NotAPlaybackLink(_))
        ));
    }

    #[test]
    fn test_resolve_play_input() {
        assert_eq!(
            resolve_play_input(Some("/s/ignored"), Some("explicit")).unwrap(),
            Query::new("explicit")
        );
        assert_eq!(
            resolve_play_input(Some("https://x.test/s/a%20b"), None).unwrap(),
            Query::new("a b")
        );
        assert!(matches!(resolve_play_input(None, None), Err(CliError::MissingInput)));
    }

    #[tokio::test(start_paused = true)]
    async fn test_play_renders_whole_sequence() {
        let (report, out) = play(
            Query::new("hi there").unwrap(),
            &AppConfig::default(),
            Some(7),
            Format::Text,
            Vec::new(),
        )
        .await
        .unwrap();

        let report = report.expect("playback finishes");
        assert_eq!(report.completion, CompletionSource::Revealer);
        assert_eq!(report.destination.as_str(), "https://chat.openai.com/?q=hi+there");

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("playing \"hi there\"\n"));
        for phase in ["idle", "moving-mouse", "clicking", "typing", "submitting", "showing-comment", "redirecting"] {
            assert!(text.contains(&format!("] {phase}\n")), "missing {phase} in:\n{text}");
        }
        assert!(text.contains(copy::COMMENT_HEADLINE));
        assert!(text.trim_end().ends_with("navigate https://chat.openai.com/?q=hi+there"));
    }

    #[test]
    fn test_show_and_write_config() {
        let shown = run_to_string(|out| show_config(&AppConfig::default(), out));
        assert!(shown.contains("[playback.typing]"));
        assert!(shown.contains("base_speed_ms = 100"));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("lmcgtfy").join("config.toml");
        write_default_config(&path, false, &mut Vec::new()).unwrap();
        assert_eq!(config::load_file(&path).unwrap(), AppConfig::default());

        assert!(matches!(
            write_default_config(&path, false, &mut Vec::new()),
            Err(CliError::ConfigExists(_))
        ));
        write_default_config(&path, true, &mut Vec::new()).unwrap();
    }
}
