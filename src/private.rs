//! Module for utils used in proc macro expansion.

use std::any::Any;

/// Erases the type of an attribute exposed by `#[derive(Attrs)]`.
#[inline]
#[must_use]
pub fn erase<T: Any>(value: &T) -> &dyn Any {
    value
}
