use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use lmcgtfy_cli::commands;
use lmcgtfy_cli::logging::init_logging;
use lmcgtfy_cli::render::Format;
use lmcgtfy_cli::CliError;
use lmcgtfy_core::config::{default_config_path, load_or_default};
use lmcgtfy_core::copy;

#[derive(Parser)]
#[command(version, about = "Let Me ChatGPT That For You, in a terminal")]
struct Cli {
    /// Config file (defaults to <config dir>/lmcgtfy/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the share link for a question
    Link {
        /// The question; multiple words are joined with spaces
        #[arg(required = true, num_args = 1..)]
        text: Vec<String>,
        /// Origin of the links, overriding the configured one
        #[arg(long)]
        origin: Option<String>,
    },
    /// Print the question carried by a link or path
    Decode { location: String },
    /// Play the scripted sequence in the terminal
    Play {
        /// Share link or `/s/...` path
        location: Option<String>,
        /// Play this question instead of decoding a link
        #[arg(short, long, conflicts_with = "location")]
        query: Option<String>,
        /// Seed the typing jitter for a reproducible run
        #[arg(long)]
        seed: Option<u64>,
        /// Emit one JSON object per event
        #[arg(long)]
        json: bool,
    },
    /// Print the effective config, or write the defaults
    Config {
        #[arg(long)]
        write: bool,
        /// Overwrite an existing file with --write
        #[arg(long, requires = "write")]
        force: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    init_logging();
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(?err, "command failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), CliError> {
    let config_path = match cli.config {
        Some(path) => path,
        None => default_config_path().ok_or(CliError::NoConfigDir)?,
    };
    let mut stdout = std::io::stdout();

    match cli.command {
        Commands::Link { text, origin } => {
            let config = load_or_default(&config_path)?;
            let origin = origin.unwrap_or(config.share.origin);
            commands::link(&text.join(" "), &origin, &mut stdout)
        }
        Commands::Decode { location } => commands::decode(&location, &mut stdout),
        Commands::Play {
            location,
            query,
            seed,
            json,
        } => {
            let config = load_or_default(&config_path)?;
            let Some(query) = commands::resolve_play_input(location.as_deref(), query.as_deref())?
            else {
                writeln!(stdout, "{}", copy::NO_QUERY)?;
                return Ok(());
            };
            let format = if json { Format::Json } else { Format::Text };

            // Dropping the playback future on Ctrl-C tears it down
            let (report, _) = tokio::select! {
                result = commands::play(query, &config, seed, format, stdout) => result?,
                _ = tokio::signal::ctrl_c() => return Err(CliError::Interrupted),
            };
            if report.is_none() {
                tracing::warn!("playback stopped before navigating");
            }
            Ok(())
        }
        Commands::Config { write: true, force } => {
            commands::write_default_config(&config_path, force, &mut stdout)
        }
        Commands::Config { write: false, .. } => {
            let config = load_or_default(&config_path)?;
            commands::show_config(&config, &mut stdout)
        }
    }
}
