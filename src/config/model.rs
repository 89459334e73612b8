// src/config/model.rs

use serde::Deserialize;

use crate::types::LogLevel;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [dispatch]
/// match_level = "trace"
/// unmatched_level = "debug"
///
/// [logging]
/// level = "info"
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigFile {
    /// Event levels used by dispatchers, from `[dispatch]`.
    #[serde(default)]
    pub dispatch: DispatchConfig,

    /// Subscriber settings from `[logging]`.
    #[serde(default)]
    pub logging: LoggingSection,
}

/// `[dispatch]` section.
///
/// Controls the diagnostic events a [`crate::Thrown`] emits. Matching
/// behaviour itself is not configurable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct DispatchConfig {
    /// Level of the event emitted when a match attempt succeeds.
    #[serde(default = "default_match_level")]
    pub match_level: LogLevel,

    /// Level of the event emitted when an unmatched error reaches a terminal
    /// operation (`catch_any` or `rethrow_uncaught`).
    #[serde(default = "default_unmatched_level")]
    pub unmatched_level: LogLevel,
}

fn default_match_level() -> LogLevel {
    LogLevel::Trace
}

fn default_unmatched_level() -> LogLevel {
    LogLevel::Debug
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            match_level: default_match_level(),
            unmatched_level: default_unmatched_level(),
        }
    }
}

impl DispatchConfig {
    /// A config that emits no events at all.
    pub fn silent() -> Self {
        Self {
            match_level: LogLevel::Off,
            unmatched_level: LogLevel::Off,
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingSection {
    /// Max level for the subscriber; if `None`, `THROWN_LOG` or `info` is used.
    #[serde(default)]
    pub level: Option<LogLevel>,
}
