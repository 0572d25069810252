//! [`Maybe`] type and its combinators.

use std::{
    any::Any,
    borrow::Cow,
    fmt,
    hash::{Hash, Hasher},
    option,
};

use crate::{Attrs, Lookup, UnwrapError};

/// Value fed into a [`Hasher`] when hashing a [`Maybe::Nothing`].
const NOTHING_HASH: u64 = 0x4e6f_7468_696e_6721;

/// Value that is either [`Just`] present or [`Nothing`].
///
/// Unlike a bare [`Option`] it carries a combinator API for building
/// pipelines over possibly absent values, so intermediate absence checks are
/// not needed.
///
/// Hashing a [`Just`] is indistinguishable from hashing the wrapped value
/// itself, so a [`Maybe`] may be looked up in the same hashed collection as
/// plain values.
///
/// # Example
///
/// ```rust
/// # use maybetype_core::{maybe, Maybe};
/// #
/// let port = maybe("8080")
///     .and_then(Maybe::try_int)
///     .test(|p| (1..=65535).contains(p))
///     .unwrap_or(80);
/// assert_eq!(port, 8080);
///
/// match Maybe::try_int("eighty") {
///     Maybe::Just(p) => unreachable!("parsed {}", p),
///     Maybe::Nothing => {}
/// }
/// ```
///
/// [`Just`]: Maybe::Just
/// [`Nothing`]: Maybe::Nothing
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Maybe<T> {
    /// Present value.
    Just(T),

    /// Absence of a value.
    Nothing,
}

/// Wraps the given `value` into a [`Maybe`].
///
/// [`None`] becomes [`Maybe::Nothing`], any other value becomes
/// [`Maybe::Just`]. Another [`Maybe`] is wrapped as is, never flattened.
///
/// # Example
///
/// ```rust
/// # use maybetype_core::{maybe, Maybe};
/// #
/// assert_eq!(maybe(0), Maybe::Just(0));
///
/// let absent: Maybe<i32> = maybe(None);
/// assert_eq!(absent, Maybe::Nothing);
///
/// assert_eq!(
///     maybe(Maybe::<i32>::Nothing),
///     Maybe::Just(Maybe::Nothing),
/// );
/// ```
#[must_use]
pub fn maybe<T>(value: impl Into<Option<T>>) -> Maybe<T> {
    let value: Option<T> = value.into();
    Maybe::from(value)
}

/// Wraps the given `value` into a [`Maybe`], discarding it if the provided
/// `predicate` rejects it.
///
/// The `predicate` is never called for [`None`], and called exactly once
/// otherwise.
///
/// # Example
///
/// ```rust
/// # use maybetype_core::{maybe_if, Maybe};
/// #
/// assert_eq!(maybe_if(3, |n| *n > 0), Maybe::Just(3));
/// assert_eq!(maybe_if(-3, |n| *n > 0), Maybe::Nothing);
/// ```
#[must_use]
pub fn maybe_if<T, P>(value: impl Into<Option<T>>, predicate: P) -> Maybe<T>
where
    P: FnOnce(&T) -> bool,
{
    maybe(value).test(predicate)
}

impl<T> Maybe<T> {
    /// Canonical [`Maybe::Nothing`] value.
    pub const NOTHING: Self = Self::Nothing;

    /// Indicates whether this is a [`Maybe::Just`].
    ///
    /// A [`Maybe::Just`] is present regardless of the wrapped value, so even
    /// `Just(0)` or `Just(false)` return `true` here.
    #[inline]
    #[must_use]
    pub const fn is_just(&self) -> bool {
        matches!(self, Self::Just(_))
    }

    /// Indicates whether this is a [`Maybe::Nothing`].
    #[inline]
    #[must_use]
    pub const fn is_nothing(&self) -> bool {
        !self.is_just()
    }

    /// Converts `&Maybe<T>` into `Maybe<&T>`.
    #[inline]
    #[must_use]
    pub const fn as_ref(&self) -> Maybe<&T> {
        match self {
            Self::Just(v) => Maybe::Just(v),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Borrows the wrapped value as an [`Option`].
    #[inline]
    #[must_use]
    pub const fn as_option(&self) -> Option<&T> {
        match self {
            Self::Just(v) => Some(v),
            Self::Nothing => None,
        }
    }

    /// Converts this [`Maybe`] into an [`Option`].
    #[inline]
    #[must_use]
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Just(v) => Some(v),
            Self::Nothing => None,
        }
    }

    /// Returns an iterator over the (zero or one) wrapped value.
    #[inline]
    pub fn iter(&self) -> option::IntoIter<&T> {
        self.as_option().into_iter()
    }

    /// Returns the wrapped value.
    ///
    /// # Errors
    ///
    /// If this is a [`Maybe::Nothing`], with an [`UnwrapError`] naming the
    /// expected type.
    pub fn unwrap(self) -> Result<T, UnwrapError> {
        self.unwrap_or_raise(UnwrapError::of::<T>)
    }

    /// Returns the wrapped value.
    ///
    /// # Errors
    ///
    /// If this is a [`Maybe::Nothing`], with an [`UnwrapError`] carrying the
    /// provided `message`.
    pub fn unwrap_msg(
        self,
        message: impl Into<Cow<'static, str>>,
    ) -> Result<T, UnwrapError> {
        match self {
            Self::Just(v) => Ok(v),
            Self::Nothing => Err(UnwrapError::new(message)),
        }
    }

    /// Returns the wrapped value.
    ///
    /// # Errors
    ///
    /// If this is a [`Maybe::Nothing`], with the error returned by `err`.
    /// The `err` closure is only called in this case.
    pub fn unwrap_or_raise<E, F>(self, err: F) -> Result<T, E>
    where
        F: FnOnce() -> E,
    {
        self.into_option().ok_or_else(err)
    }

    /// Returns the wrapped value, or the provided `default` one.
    #[inline]
    #[must_use]
    pub fn unwrap_or(self, default: T) -> T {
        self.into_option().unwrap_or(default)
    }

    /// Returns the wrapped value, or computes it with the provided `f`.
    #[inline]
    #[must_use]
    pub fn unwrap_or_else<F: FnOnce() -> T>(self, f: F) -> T {
        self.into_option().unwrap_or_else(f)
    }

    /// Returns the wrapped value, or [`Default`] one.
    #[inline]
    #[must_use]
    pub fn unwrap_or_default(self) -> T
    where
        T: Default,
    {
        self.into_option().unwrap_or_default()
    }

    /// Looks up the provided `key` in the wrapped value.
    ///
    /// Returns [`Maybe::Nothing`] if the `key` is missing (or out of range),
    /// or if this is a [`Maybe::Nothing`] already, in which case the `key` is
    /// not inspected at all.
    ///
    /// The found element is borrowed from `self`, so use
    /// [`Maybe::copied()`] or [`Maybe::cloned()`] to get an owned one.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use std::collections::HashMap;
    /// # use maybetype_core::Maybe;
    /// #
    /// let list = Maybe::Just(vec![1, 2, 3]);
    /// assert_eq!(list.get(&1), Maybe::Just(&2));
    /// assert_eq!(list.get(&3), Maybe::Nothing);
    ///
    /// let dict = Maybe::Just(HashMap::from([("a".to_owned(), 1)]));
    /// assert_eq!(dict.get("a").copied(), Maybe::Just(1));
    /// ```
    #[must_use]
    pub fn get<Q: ?Sized>(&self, key: &Q) -> Maybe<&T::Output>
    where
        T: Lookup<Q>,
    {
        match self {
            Self::Just(v) => v.lookup(key).into(),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Returns the attribute `name` of the wrapped value, if it exists and
    /// is of type `V`.
    #[must_use]
    pub fn attr<V: Any>(&self, name: &str) -> Maybe<&V>
    where
        T: Attrs,
    {
        self.as_ref().and_then(|v| {
            Maybe::from(v.attr(name).and_then(|a| a.downcast_ref::<V>()))
        })
    }

    /// Returns a copy of the attribute `name` of the wrapped value, or the
    /// provided `default` if there is no such attribute of type `V` (or this
    /// is a [`Maybe::Nothing`]).
    ///
    /// # Example
    ///
    /// ```rust
    /// # use std::any::Any;
    /// # use maybetype_core::{Attrs, Maybe};
    /// #
    /// struct Server {
    ///     port: u16,
    /// }
    ///
    /// impl Attrs for Server {
    ///     fn attr(&self, name: &str) -> Option<&dyn Any> {
    ///         match name {
    ///             "port" => Some(&self.port),
    ///             _ => None,
    ///         }
    ///     }
    /// }
    ///
    /// let server = Maybe::Just(Server { port: 8080 });
    /// assert_eq!(server.attr_or("port", 80_u16), 8080);
    /// assert_eq!(server.attr_or("host", "localhost"), "localhost");
    /// ```
    #[must_use]
    pub fn attr_or<V: Any + Clone>(&self, name: &str, default: V) -> V
    where
        T: Attrs,
    {
        self.attr::<V>(name).cloned().unwrap_or(default)
    }

    /// Calls the provided `f` with the wrapped value, returning its result
    /// as a plain [`Option`].
    ///
    /// # Example
    ///
    /// ```rust
    /// # use maybetype_core::Maybe;
    /// #
    /// assert_eq!(Maybe::Just(0).then(|n| n.to_string()), Some("0".into()));
    /// assert_eq!(Maybe::<i32>::Nothing.then(|n| n.to_string()), None);
    /// ```
    #[inline]
    pub fn then<U, F: FnOnce(T) -> U>(self, f: F) -> Option<U> {
        self.into_option().map(f)
    }

    /// Calls the provided `f` with the wrapped value, letting it decide
    /// whether the result is present.
    ///
    /// The `f` is never called on a [`Maybe::Nothing`].
    #[inline]
    pub fn and_then<U, F>(self, f: F) -> Maybe<U>
    where
        F: FnOnce(T) -> Maybe<U>,
    {
        match self {
            Self::Just(v) => f(v),
            Self::Nothing => Maybe::Nothing,
        }
    }

    /// Keeps the wrapped value only if the provided `predicate` accepts it.
    ///
    /// The `predicate` is never called on a [`Maybe::Nothing`].
    #[must_use]
    pub fn test<P: FnOnce(&T) -> bool>(self, predicate: P) -> Self {
        match self {
            Self::Just(v) if predicate(&v) => Self::Just(v),
            Self::Just(_) | Self::Nothing => Self::Nothing,
        }
    }

    /// Returns this [`Maybe`] if it's a [`Maybe::Just`], or wraps the
    /// provided `other` value otherwise.
    #[must_use]
    pub fn this_or(self, other: T) -> Self {
        match self {
            Self::Just(v) => Self::Just(v),
            Self::Nothing => Self::Just(other),
        }
    }
}

impl<T: Clone> Maybe<&T> {
    /// Clones the referenced value.
    #[must_use]
    pub fn cloned(self) -> Maybe<T> {
        match self {
            Self::Just(v) => Maybe::Just(v.clone()),
            Self::Nothing => Maybe::Nothing,
        }
    }
}

impl<T: Copy> Maybe<&T> {
    /// Copies the referenced value.
    #[must_use]
    pub fn copied(self) -> Maybe<T> {
        match self {
            Self::Just(&v) => Maybe::Just(v),
            Self::Nothing => Maybe::Nothing,
        }
    }
}

impl<T> Default for Maybe<T> {
    fn default() -> Self {
        Self::Nothing
    }
}

impl<T: Hash> Hash for Maybe<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Self::Just(v) => v.hash(state),
            Self::Nothing => state.write_u64(NOTHING_HASH),
        }
    }
}

impl<T: fmt::Display> fmt::Display for Maybe<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Just(v) => write!(f, "Just({})", v),
            Self::Nothing => f.write_str("Nothing"),
        }
    }
}

impl<T> From<Option<T>> for Maybe<T> {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => Self::Just(v),
            None => Self::Nothing,
        }
    }
}

impl<T> IntoIterator for Maybe<T> {
    type Item = T;
    type IntoIter = option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_option().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Maybe<T> {
    type Item = &'a T;
    type IntoIter = option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(feature = "serde")]
impl<T: serde::Serialize> serde::Serialize for Maybe<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serde::Serialize::serialize(&self.as_option(), serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: serde::Deserialize<'de>> serde::Deserialize<'de> for Maybe<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        <Option<T> as serde::Deserialize<'de>>::deserialize(deserializer)
            .map(Self::from)
    }
}
