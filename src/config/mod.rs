// src/config/mod.rs

//! Configuration for thrown.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a config from text, disk or the environment (`loader.rs`).
//! - Hold the process-wide [`DispatchConfig`] used by [`crate::thrown`].

pub mod loader;
pub mod model;

use std::sync::OnceLock;

use tracing::debug;

use crate::errors::{Result, ThrownError};

pub use loader::{default_config_path, load_from_env, load_from_path, load_from_str};
pub use model::{ConfigFile, DispatchConfig, LoggingSection};

static GLOBAL: OnceLock<DispatchConfig> = OnceLock::new();

/// Install the process-wide dispatch config.
///
/// Can be done once; dispatchers created before this call keep the config
/// they were built with.
pub fn install(config: DispatchConfig) -> Result<()> {
    GLOBAL.set(config).map_err(|_| {
        ThrownError::ConfigError("a global dispatch config is already installed".to_string())
    })?;
    debug!(?config, "installed global dispatch config");
    Ok(())
}

/// The installed dispatch config, or the default one.
pub fn global() -> DispatchConfig {
    GLOBAL.get().copied().unwrap_or_default()
}
