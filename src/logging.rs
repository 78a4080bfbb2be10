use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Log file written inside the data directory while the TUI owns the terminal
pub const LOG_FILE_NAME: &str = "focus-clock.log";

/// Where log records go
pub enum LogTarget<'a> {
    Stderr,
    File(&'a Path),
}

/// Build the filter: explicit level, then `RUST_LOG`, then "info".
fn build_filter(level: Option<&str>) -> EnvFilter {
    match level {
        Some(level) => EnvFilter::try_new(level.to_lowercase())
            .unwrap_or_else(|_| EnvFilter::new("info")),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    }
}

/// Pick the configured level: command line first, then `RUST_LOG` (resolved
/// later by the filter), then the config file.
pub fn choose_level(
    cli_level: Option<String>,
    rust_log_set: bool,
    config_level: Option<String>,
) -> Option<String> {
    match cli_level {
        Some(level) => Some(level),
        None if rust_log_set => None,
        None => config_level,
    }
}

/// Initialise the global `tracing` subscriber.
pub fn setup_logging(level: Option<&str>, target: LogTarget<'_>) -> Result<()> {
    let filter = build_filter(level);

    match target {
        LogTarget::Stderr => {
            let layer = fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr);
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
        LogTarget::File(path) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(path)
                .with_context(|| format!("Failed to open log file: {}", path.display()))?;
            let layer = fmt::layer()
                .with_target(false)
                .with_ansi(false)
                .with_writer(Mutex::new(file));
            tracing_subscriber::registry().with(filter).with(layer).init();
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_filter_explicit_level() {
        assert_eq!(build_filter(Some("DEBUG")).to_string(), "debug");
        assert_eq!(build_filter(Some("warn")).to_string(), "warn");
    }

    #[test]
    fn test_choose_level_precedence() {
        let cli = Some("debug".to_string());
        let config = Some("warn".to_string());

        assert_eq!(choose_level(cli.clone(), true, config.clone()), cli);
        assert_eq!(choose_level(None, true, config.clone()), None);
        assert_eq!(choose_level(None, false, config.clone()), config);
        assert_eq!(choose_level(None, false, None), None);
    }

    #[test]
    fn test_build_filter_invalid_falls_back() {
        assert_eq!(build_filter(Some("not a [level")).to_string(), "info");
    }
}
