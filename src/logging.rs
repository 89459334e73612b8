// src/logging.rs

//! Logging for `thrown` using `tracing` + `tracing-subscriber`.
//!
//! Dispatchers only *emit* events; installing a subscriber is left to the
//! application. [`init_logging`] is a convenience for binaries and tests.
//!
//! Priority for determining the subscriber level:
//! 1. explicit level passed by the caller (if provided)
//! 2. `THROWN_LOG` environment variable (e.g. "info", "debug")
//! 3. default to `info`
//!
//! Logs are sent to STDERR.

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt;

use crate::config::ConfigFile;
use crate::errors::{Result, ThrownError};
use crate::types::LogLevel;

/// Environment variable consulted when no explicit level is given.
pub const LOG_ENV: &str = "THROWN_LOG";

/// Initialise the global logging subscriber.
///
/// Fails if another global subscriber is already set.
pub fn init_logging(level: Option<LogLevel>) -> Result<()> {
    let level = resolve_level(level);

    fmt()
        .with_max_level(LevelFilter::from(level))
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| {
            ThrownError::Other(anyhow::anyhow!("failed to install tracing subscriber: {e}"))
        })?;

    Ok(())
}

/// Subscriber level: `level` if given, else `THROWN_LOG`, else `info`.
///
/// An unparsable `THROWN_LOG` counts as unset.
pub fn resolve_level(level: Option<LogLevel>) -> LogLevel {
    match level {
        Some(lvl) => lvl,
        None => std::env::var(LOG_ENV)
            .ok()
            .and_then(|s| s.parse::<LogLevel>().ok())
            .unwrap_or(LogLevel::Info),
    }
}

/// Same as [`init_logging`], taking the level from `[logging]`.
pub fn init_logging_from_config(cfg: &ConfigFile) -> Result<()> {
    init_logging(cfg.logging.level)
}

/// Target of dispatcher events, so they filter under the dispatcher module.
pub const DISPATCH_TARGET: &str = "thrown::thrown";

/// Emit one dispatcher event at a runtime-selected level.
///
/// `tracing` macros need a constant level, hence the fan-out.
pub(crate) fn emit(level: LogLevel, action: &'static str, error_type: &'static str) {
    match level {
        LogLevel::Off => {}
        LogLevel::Error => tracing::error!(target: DISPATCH_TARGET, error_type, "{action}"),
        LogLevel::Warn => tracing::warn!(target: DISPATCH_TARGET, error_type, "{action}"),
        LogLevel::Info => tracing::info!(target: DISPATCH_TARGET, error_type, "{action}"),
        LogLevel::Debug => tracing::debug!(target: DISPATCH_TARGET, error_type, "{action}"),
        LogLevel::Trace => tracing::trace!(target: DISPATCH_TARGET, error_type, "{action}"),
    }
}
