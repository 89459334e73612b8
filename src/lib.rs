// src/lib.rs

//! Fluent dispatch on the runtime type of a caught error.
//!
//! Wrap whatever a failed operation gave you, register handlers for the
//! cases you know how to deal with, and either hand the rest to a catch-all
//! or propagate it unchanged:
//!
//! ```
//! use std::io;
//!
//! use ::thrown::{Caught, thrown};
//!
//! fn open() -> Result<(), io::Error> {
//!     Err(io::Error::new(io::ErrorKind::NotFound, "missing.toml"))
//! }
//!
//! fn run() -> Result<(), Caught> {
//!     let mut fallback = false;
//!
//!     if let Err(e) = open() {
//!         thrown(Caught::error(e))
//!             .catch(|e: &io::Error| fallback = e.kind() == io::ErrorKind::NotFound)
//!             .rethrow_uncaught()?;
//!     }
//!
//!     assert!(fallback);
//!     Ok(())
//! }
//!
//! run().unwrap();
//! ```
//!
//! Only the first matching handler runs; later attempts are skipped without
//! evaluating their tests.

pub mod caught;
pub mod config;
pub mod errors;
pub mod logging;
pub mod thrown;
pub mod types;

pub use crate::caught::{Caught, ErrorRef};
pub use crate::config::DispatchConfig;
pub use crate::errors::ThrownError;
pub use crate::thrown::{ErrorExt, Thrown, thrown, thrown_with};
pub use crate::types::LogLevel;
