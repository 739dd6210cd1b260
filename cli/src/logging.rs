use tracing_subscriber::filter::EnvFilter;

/// Filter directives, checked before `RUST_LOG`.
pub const LOG_ENV: &str = "LMCGTFY_LOG";
/// Append logs to this file instead of stderr.
pub const LOG_PATH_ENV: &str = "LMCGTFY_LOG_PATH";

/// Initialize logging, writing to `LMCGTFY_LOG_PATH` if set, otherwise stderr.
pub fn init_logging() {
    let builder = EnvFilter::builder().with_default_directive(tracing::Level::INFO.into());
    let filter = match std::env::var(LOG_ENV) {
        Ok(directives) => builder.parse_lossy(directives),
        Err(_) => builder.from_env_lossy(),
    };

    if let Ok(path) = std::env::var(LOG_PATH_ENV)
        && let Ok(file) = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
    {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_ansi(false)
            .with_writer(file)
            .init();
        return;
    }

    // Stderr keeps stdout clean for links and JSON output
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
