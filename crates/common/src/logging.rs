//! Logging and tracing initialization.
//!
//! Library crates only emit `tracing` events; binaries and tests decide where
//! they go by calling one of the initializers here.

use std::fs::OpenOptions;
use std::sync::Mutex;

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;
use crate::error::FollowcamResult;

/// Initialize the tracing subscriber with the given configuration.
///
/// `RUST_LOG` wins over `config.level` when set. A global subscriber that is
/// already installed is left in place.
pub fn init_logging(config: &LoggingConfig) -> FollowcamResult<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    if let Some(path) = &config.file {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        let builder = fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .with_ansi(false)
            .with_writer(Mutex::new(file));
        if config.json {
            tracing::subscriber::set_global_default(builder.json().finish()).ok();
        } else {
            tracing::subscriber::set_global_default(builder.finish()).ok();
        }
        return Ok(());
    }

    if config.json {
        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .json()
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    } else {
        let subscriber = fmt::Subscriber::builder()
            .with_env_filter(env_filter)
            .with_target(true)
            .with_file(false)
            .with_line_number(false)
            .compact()
            .finish();
        tracing::subscriber::set_global_default(subscriber).ok();
    }
    Ok(())
}

/// Initialize logging with defaults (useful for tests and quick scripts).
pub fn init_default_logging() {
    // Default config has no log file, so nothing can fail here.
    init_logging(&LoggingConfig::default()).ok();
}

/// Build a logging config from a verbosity flag, as the CLI does.
pub fn logging_for_verbosity(verbose: bool) -> LoggingConfig {
    LoggingConfig {
        level: if verbose { "debug" } else { "info" }.to_string(),
        ..LoggingConfig::default()
    }
}
