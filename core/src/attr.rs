//! [`Attrs`] capability used by [`Maybe::attr()`] and [`Maybe::attr_or()`].
//!
//! [`Maybe::attr()`]: crate::Maybe::attr
//! [`Maybe::attr_or()`]: crate::Maybe::attr_or

use std::{any::Any, collections::HashMap, hash::BuildHasher};

/// Access to named attributes (fields) of a value.
///
/// Usually derived with `#[derive(Attrs)]` of the `maybetype` crate, but may
/// be implemented manually for values with dynamic attributes.
pub trait Attrs {
    /// Returns the attribute `name` of this value, if it has one.
    fn attr(&self, name: &str) -> Option<&dyn Any>;

    /// Indicates whether this value has the attribute `name`.
    fn has_attr(&self, name: &str) -> bool {
        self.attr(name).is_some()
    }
}

impl<A: Attrs + ?Sized> Attrs for &A {
    fn attr(&self, name: &str) -> Option<&dyn Any> {
        (**self).attr(name)
    }
}

impl<A: Attrs + ?Sized> Attrs for Box<A> {
    fn attr(&self, name: &str) -> Option<&dyn Any> {
        (**self).attr(name)
    }
}

impl<S: BuildHasher> Attrs for HashMap<String, Box<dyn Any>, S> {
    fn attr(&self, name: &str) -> Option<&dyn Any> {
        self.get(name).map(|v| &**v)
    }
}
