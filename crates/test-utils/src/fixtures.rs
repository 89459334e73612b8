#![allow(dead_code)]

//! Error values shared by the integration tests.

use thiserror::Error;
use thrown::Caught;

/// A caught value that is *not* a `std::error::Error`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MyError {
    pub custom_message: String,
}

impl MyError {
    pub fn new() -> Self {
        Self {
            custom_message: "MyError".to_string(),
        }
    }
}

impl Default for MyError {
    fn default() -> Self {
        Self::new()
    }
}

/// A proper error type; matches both its own type and the base error matcher.
#[derive(Debug, Error)]
#[error("my other error")]
pub struct MyOtherError {
    pub other_custom_message: String,
}

impl MyOtherError {
    pub fn new() -> Self {
        Self {
            other_custom_message: "MyOtherError".to_string(),
        }
    }
}

impl Default for MyOtherError {
    fn default() -> Self {
        Self::new()
    }
}

/// Stand-in for a generic error carrying only a message.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct PlainError {
    pub message: String,
}

impl PlainError {
    pub fn new(message: &str) -> Self {
        Self {
            message: message.to_string(),
        }
    }
}

/// A plain record thrown as a value, e.g. a decoded error payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomError {
    pub foo: &'static str,
}

pub fn my_error() -> Caught {
    Caught::value(MyError::new())
}

pub fn my_other_error() -> Caught {
    Caught::error(MyOtherError::new())
}

pub fn plain_error(message: &str) -> Caught {
    Caught::error(PlainError::new(message))
}

/// `MyOtherError` behind an `anyhow::Error`.
pub fn anyhow_other_error() -> anyhow::Error {
    anyhow::Error::new(MyOtherError::new())
}

/// Address of the wrapped `T`, for identity checks.
pub fn address_of<T: 'static>(caught: &Caught) -> Option<*const T> {
    caught.downcast_ref::<T>().map(|v| v as *const T)
}
