// src/thrown.rs

//! The dispatcher: ordered, first-match-wins handling of one caught error.
//!
//! A [`Thrown`] is a two-state machine. It starts *uncaught*; the first match
//! attempt whose test passes marks it *caught* and runs that attempt's
//! handler. Every later attempt is skipped without evaluating its test or
//! handler. The terminal operations ([`Thrown::catch_any`],
//! [`Thrown::rethrow_uncaught`], [`Thrown::rethrow_uncaught_or`]) decide what
//! happens to an error nothing matched.
//!
//! A chain that never reaches a terminal operation drops an unmatched error
//! silently.

use std::any::{Any, type_name};
use std::error::Error as StdError;

use crate::caught::{Caught, ErrorRef};
use crate::config::{self, DispatchConfig};
use crate::logging::emit;

/// Dispatcher over a single caught error.
#[derive(Debug)]
pub struct Thrown {
    err: Caught,
    caught: bool,
    config: DispatchConfig,
}

/// Build a dispatcher for `err` using the process-wide config.
pub fn thrown(err: impl Into<Caught>) -> Thrown {
    Thrown::new(err)
}

/// Build a dispatcher for `err` with an explicit config.
pub fn thrown_with(err: impl Into<Caught>, config: DispatchConfig) -> Thrown {
    Thrown::with_config(err, config)
}

/// Start a dispatch straight from a concrete error value.
///
/// `io_err.thrown()` is shorthand for `thrown(Caught::error(io_err))`.
pub trait ErrorExt {
    fn thrown(self) -> Thrown;
}

impl<E> ErrorExt for E
where
    E: StdError + Send + Sync + 'static,
{
    fn thrown(self) -> Thrown {
        Thrown::new(Caught::error(self))
    }
}

impl Thrown {
    pub fn new(err: impl Into<Caught>) -> Self {
        Self::with_config(err, config::global())
    }

    pub fn with_config(err: impl Into<Caught>, config: DispatchConfig) -> Self {
        Self {
            err: err.into(),
            caught: false,
            config,
        }
    }

    /// Catch a specific error type.
    ///
    /// Matches when the wrapped value is exactly a `T`. The type does not
    /// have to implement `std::error::Error`.
    pub fn catch<T, F>(mut self, catcher: F) -> Self
    where
        T: Any,
        F: FnOnce(&T),
    {
        if !self.caught {
            if let Some(err) = self.err.downcast_ref::<T>() {
                self.caught = true;
                self.record_match("caught by type", type_name::<T>());
                catcher(err);
            }
        }

        self
    }

    /// Catch anything that is a `std::error::Error`.
    ///
    /// This is the base of every error type: a concrete error matches both
    /// its own [`Thrown::catch`] and this, whichever comes first.
    pub fn catch_error<F>(mut self, catcher: F) -> Self
    where
        F: FnOnce(ErrorRef<'_>),
    {
        if !self.caught {
            if let Some(err) = self.err.as_error() {
                self.caught = true;
                self.record_match("caught as error", self.err.type_name());
                catcher(err);
            }
        }

        self
    }

    /// Same as [`Thrown::catch`], but using a predicate to match the error.
    ///
    /// The predicate narrows: returning `Some(view)` is a match, and the
    /// handler receives that view.
    pub fn catch_predicate<T, P, F>(mut self, predicate: P, catcher: F) -> Self
    where
        T: ?Sized,
        P: FnOnce(&Caught) -> Option<&T>,
        F: FnOnce(&T),
    {
        if !self.caught {
            if let Some(err) = predicate(&self.err) {
                self.caught = true;
                self.record_match("caught by predicate", self.err.type_name());
                catcher(err);
            }
        }

        self
    }

    /// Boolean form of [`Thrown::catch_predicate`].
    ///
    /// The handler gets the un-narrowed [`Caught`] and has to downcast
    /// itself if it needs the concrete type.
    pub fn catch_if<P, F>(mut self, predicate: P, catcher: F) -> Self
    where
        P: FnOnce(&Caught) -> bool,
        F: FnOnce(&Caught),
    {
        if !self.caught && predicate(&self.err) {
            self.caught = true;
            self.record_match("caught by predicate", self.err.type_name());
            catcher(&self.err);
        }

        self
    }

    /// Catch any error not matched by an earlier handler.
    ///
    /// Terminal: the handler takes ownership of the wrapped value. Does
    /// nothing if the error was already caught.
    pub fn catch_any<F>(self, catcher: F)
    where
        F: FnOnce(Caught),
    {
        if !self.caught {
            emit(
                self.config.unmatched_level,
                "unmatched error handed to catch-all",
                self.err.type_name(),
            );
            catcher(self.err);
        }
    }

    /// Rethrow an error that did not have a specific handler.
    ///
    /// Returns `Err` with the original value, or `Ok(())` if it was caught.
    pub fn rethrow_uncaught(self) -> Result<(), Caught> {
        self.rethrow_uncaught_or(None)
    }

    /// Rethrow `replacement` in place of an error that did not have a
    /// specific handler.
    ///
    /// `None` rethrows the original; there is no way to swallow an
    /// unmatched error through this call.
    pub fn rethrow_uncaught_or(self, replacement: Option<Caught>) -> Result<(), Caught> {
        if self.caught {
            return Ok(());
        }

        match replacement {
            Some(replacement) => {
                emit(
                    self.config.unmatched_level,
                    "rethrowing replacement for unmatched error",
                    self.err.type_name(),
                );
                Err(replacement)
            }
            None => {
                emit(
                    self.config.unmatched_level,
                    "rethrowing unmatched error",
                    self.err.type_name(),
                );
                Err(self.err)
            }
        }
    }

    /// Whether a match attempt has succeeded.
    pub fn is_caught(&self) -> bool {
        self.caught
    }

    /// The wrapped value.
    pub fn error(&self) -> &Caught {
        &self.err
    }

    pub fn config(&self) -> DispatchConfig {
        self.config
    }

    /// Give up on dispatching and take the wrapped value back.
    pub fn into_inner(self) -> Caught {
        self.err
    }

    fn record_match(&self, action: &'static str, error_type: &'static str) {
        emit(self.config.match_level, action, error_type);
    }
}
