//! [`UnwrapError`] definition.

use std::{any, borrow::Cow};

use derive_more::{Display, Error};

/// Error of unwrapping a [`Maybe::Nothing`].
///
/// [`Maybe::Nothing`]: crate::Maybe::Nothing
#[derive(Clone, Debug, Display, Eq, Error, PartialEq)]
#[display(fmt = "{}", message)]
pub struct UnwrapError {
    /// Human-readable description of what was expected to be present.
    message: Cow<'static, str>,
}

impl UnwrapError {
    /// Creates a new [`UnwrapError`] with the provided `message`.
    #[must_use]
    pub fn new(message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Creates the [`UnwrapError`] reported by [`Maybe::unwrap()`] when no
    /// custom message is given.
    ///
    /// [`Maybe::unwrap()`]: crate::Maybe::unwrap
    #[must_use]
    pub fn of<T: ?Sized>() -> Self {
        Self::new(format!(
            "Maybe<{}> unwrapped into Nothing",
            any::type_name::<T>(),
        ))
    }

    /// Returns the message of this [`UnwrapError`].
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
