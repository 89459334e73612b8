// src/errors.rs

//! Crate-wide error type for the configuration and logging layers.
//!
//! Dispatching itself never fails: an unmatched error comes back out of
//! [`crate::Thrown::rethrow_uncaught`] as the original [`crate::Caught`].

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ThrownError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Invalid log level: {0}")]
    InvalidLogLevel(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, ThrownError>;
