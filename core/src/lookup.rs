//! [`Lookup`] capability used by [`Maybe::get()`].
//!
//! [`Maybe::get()`]: crate::Maybe::get

use std::{
    borrow::Borrow,
    collections::{BTreeMap, HashMap, VecDeque},
    hash::{BuildHasher, Hash},
};

/// Keyed (or indexed) access to an element, which may be missing.
///
/// Types not implementing it simply cannot be [`Maybe::get()`] from, so the
/// check happens at compile time.
///
/// [`Maybe::get()`]: crate::Maybe::get
pub trait Lookup<Q: ?Sized> {
    /// Type of the looked up element.
    type Output: ?Sized;

    /// Returns the element stored under the provided `key`, if any.
    fn lookup(&self, key: &Q) -> Option<&Self::Output>;
}

impl<V> Lookup<usize> for [V] {
    type Output = V;

    fn lookup(&self, key: &usize) -> Option<&V> {
        self.get(*key)
    }
}

impl<V, const N: usize> Lookup<usize> for [V; N] {
    type Output = V;

    fn lookup(&self, key: &usize) -> Option<&V> {
        self.as_slice().get(*key)
    }
}

impl<V> Lookup<usize> for Vec<V> {
    type Output = V;

    fn lookup(&self, key: &usize) -> Option<&V> {
        self.as_slice().get(*key)
    }
}

impl<V> Lookup<usize> for VecDeque<V> {
    type Output = V;

    fn lookup(&self, key: &usize) -> Option<&V> {
        self.get(*key)
    }
}

/// Indexes by [`char`] position, not by byte offset.
impl Lookup<usize> for str {
    type Output = str;

    fn lookup(&self, key: &usize) -> Option<&str> {
        self.char_indices()
            .nth(*key)
            .map(|(at, c)| &self[at..at + c.len_utf8()])
    }
}

impl Lookup<usize> for String {
    type Output = str;

    fn lookup(&self, key: &usize) -> Option<&str> {
        self.as_str().lookup(key)
    }
}

impl<K, V, Q, S> Lookup<Q> for HashMap<K, V, S>
where
    K: Borrow<Q> + Eq + Hash,
    Q: Eq + Hash + ?Sized,
    S: BuildHasher,
{
    type Output = V;

    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V, Q> Lookup<Q> for BTreeMap<K, V>
where
    K: Borrow<Q> + Ord,
    Q: Ord + ?Sized,
{
    type Output = V;

    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<L, Q> Lookup<Q> for &L
where
    L: Lookup<Q> + ?Sized,
    Q: ?Sized,
{
    type Output = L::Output;

    fn lookup(&self, key: &Q) -> Option<&Self::Output> {
        (**self).lookup(key)
    }
}

impl<L, Q> Lookup<Q> for Box<L>
where
    L: Lookup<Q> + ?Sized,
    Q: ?Sized,
{
    type Output = L::Output;

    fn lookup(&self, key: &Q) -> Option<&Self::Output> {
        (**self).lookup(key)
    }
}
