// src/caught.rs

//! The type-erased value a dispatcher works on.
//!
//! A [`Caught`] owns whatever the caller got back from a failed operation:
//! a concrete error type, an `anyhow::Error`, a boxed error, or any plain
//! value (a `String`, a record struct, ...). The value lives on the heap and
//! is never copied, so its address is stable from construction until it is
//! handed back out of the dispatcher.

use std::any::{Any, type_name};
use std::error::Error as StdError;
use std::fmt;

/// Borrowed view of a wrapped value as a standard error.
pub type ErrorRef<'a> = &'a (dyn StdError + Send + Sync + 'static);

type Payload = Box<dyn Any + Send + Sync>;

/// Recovers the error view from the erased payload.
///
/// Instantiated once per concrete type at construction time, so the payload
/// can be seen as `dyn Error` without knowing its type later on.
type ErrorView = for<'a> fn(&'a (dyn Any + Send + Sync)) -> Option<ErrorRef<'a>>;

/// A caught error value of any type.
pub struct Caught {
    payload: Payload,
    type_name: &'static str,
    error_view: Option<ErrorView>,
}

impl Caught {
    /// Wrap a value implementing [`std::error::Error`].
    ///
    /// The value matches both `catch::<E>` and `catch_error` on a dispatcher.
    /// A `Caught` passed here is returned as is rather than wrapped twice.
    pub fn error<E>(err: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        let payload: Payload = Box::new(err);
        match payload.downcast::<Caught>() {
            Ok(caught) => *caught,
            Err(payload) => Self {
                payload,
                type_name: type_name::<E>(),
                error_view: Some(view_concrete::<E>),
            },
        }
    }

    /// Wrap an arbitrary value that is not (or should not be treated as)
    /// an error.
    pub fn value<T>(value: T) -> Self
    where
        T: Any + Send + Sync,
    {
        Self {
            payload: Box::new(value),
            type_name: type_name::<T>(),
            error_view: None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Whether the wrapped value can be seen as a `std::error::Error`.
    pub fn is_error(&self) -> bool {
        self.as_error().is_some()
    }

    pub fn is<T: Any>(&self) -> bool {
        self.payload.is::<T>()
    }

    /// Exact type test on the wrapped value.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        self.payload.downcast_ref::<T>()
    }

    /// Take the wrapped value out by type.
    ///
    /// On mismatch the same `Caught` is returned untouched.
    pub fn downcast<T: Any>(self) -> Result<T, Caught> {
        let Caught {
            payload,
            type_name,
            error_view,
        } = self;

        match payload.downcast::<T>() {
            Ok(value) => Ok(*value),
            Err(payload) => Err(Caught {
                payload,
                type_name,
                error_view,
            }),
        }
    }

    /// The wrapped value as a standard error, if it is one.
    ///
    /// For an `anyhow::Error` or a boxed error this is the error inside the
    /// wrapper, not the wrapper itself.
    pub fn as_error(&self) -> Option<ErrorRef<'_>> {
        self.error_view.and_then(|view| view(&*self.payload))
    }

    /// Downcast through the error view.
    ///
    /// Unlike [`Caught::downcast_ref`], this finds `E` inside an
    /// `anyhow::Error` or a `Box<dyn Error>`.
    pub fn downcast_error_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        self.as_error()?.downcast_ref::<E>()
    }

    fn as_str(&self) -> Option<&str> {
        if let Some(s) = self.payload.downcast_ref::<String>() {
            return Some(s.as_str());
        }
        self.payload.downcast_ref::<&'static str>().copied()
    }
}

fn view_concrete<E>(payload: &(dyn Any + Send + Sync)) -> Option<ErrorRef<'_>>
where
    E: StdError + Send + Sync + 'static,
{
    payload.downcast_ref::<E>().map(|err| err as ErrorRef<'_>)
}

fn view_anyhow(payload: &(dyn Any + Send + Sync)) -> Option<ErrorRef<'_>> {
    let err = payload.downcast_ref::<anyhow::Error>()?;
    Some(&**err)
}

fn view_boxed(payload: &(dyn Any + Send + Sync)) -> Option<ErrorRef<'_>> {
    payload
        .downcast_ref::<Box<dyn StdError + Send + Sync>>()
        .map(|err| &**err as ErrorRef<'_>)
}

impl From<anyhow::Error> for Caught {
    fn from(err: anyhow::Error) -> Self {
        Self {
            payload: Box::new(err),
            type_name: type_name::<anyhow::Error>(),
            error_view: Some(view_anyhow),
        }
    }
}

impl From<Box<dyn StdError + Send + Sync>> for Caught {
    fn from(err: Box<dyn StdError + Send + Sync>) -> Self {
        Self {
            payload: Box::new(err),
            type_name: type_name::<Box<dyn StdError + Send + Sync>>(),
            error_view: Some(view_boxed),
        }
    }
}

impl From<String> for Caught {
    fn from(message: String) -> Self {
        Caught::value(message)
    }
}

impl From<&'static str> for Caught {
    fn from(message: &'static str) -> Self {
        Caught::value(message)
    }
}

impl fmt::Display for Caught {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(err) = self.as_error() {
            return fmt::Display::fmt(err, f);
        }
        match self.as_str() {
            Some(s) => f.write_str(s),
            None => write!(f, "uncaught value of type `{}`", self.type_name),
        }
    }
}

impl fmt::Debug for Caught {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = f.debug_struct("Caught");
        out.field("type", &self.type_name);
        if let Some(err) = self.as_error() {
            out.field("error", &err);
        } else if let Some(s) = self.as_str() {
            out.field("value", &s);
        }
        out.finish()
    }
}

impl StdError for Caught {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.as_error().and_then(|err| err.source())
    }
}
