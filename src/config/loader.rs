// src/config/loader.rs

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::model::ConfigFile;
use crate::errors::Result;

/// Environment variable naming a config file for [`load_from_env`].
pub const CONFIG_ENV: &str = "THROWN_CONFIG";

/// Parse a configuration from TOML text.
pub fn load_from_str(contents: &str) -> Result<ConfigFile> {
    let config: ConfigFile = toml::from_str(contents)?;
    Ok(config)
}

/// Load a configuration file from a given path.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<ConfigFile> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    let config = load_from_str(&contents)?;
    debug!(path = %path.display(), "loaded thrown config");
    Ok(config)
}

/// Load the file named by `THROWN_CONFIG`, or the defaults when it is unset.
///
/// A set but unreadable path is an error, not a silent fallback.
pub fn load_from_env() -> Result<ConfigFile> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) if !path.is_empty() => load_from_path(PathBuf::from(path)),
        _ => Ok(ConfigFile::default()),
    }
}

/// Conventional config file name in the current working directory.
pub fn default_config_path() -> PathBuf {
    PathBuf::from("Thrown.toml")
}
