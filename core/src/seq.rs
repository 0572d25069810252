//! Helpers operating on sequences of [`Maybe`]s.

use crate::Maybe;

impl<T> Maybe<T> {
    /// Applies the provided `f` to the value of every [`Maybe::Just`] in
    /// `vals`, keeping [`Maybe::Nothing`]s in place.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use maybetype_core::{Just, Maybe, Nothing};
    /// #
    /// assert_eq!(
    ///     Maybe::map(vec![Just(1), Nothing, Just(3)], |n| n * 10),
    ///     [Just(10), Nothing, Just(30)],
    /// );
    /// ```
    pub fn map<B, I, F>(vals: I, mut f: F) -> Vec<Maybe<B>>
    where
        I: IntoIterator<Item = Self>,
        F: FnMut(T) -> B,
    {
        vals.into_iter()
            .map(|m| match m {
                Self::Just(v) => Maybe::Just(f(v)),
                Self::Nothing => Maybe::Nothing,
            })
            .collect()
    }

    /// Unwraps every [`Maybe::Just`] in `vals`, dropping [`Maybe::Nothing`]s.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use maybetype_core::{Just, Maybe, Nothing};
    /// #
    /// assert_eq!(Maybe::cat(vec![Just(1), Nothing, Just(3), Nothing]), [1, 3]);
    /// ```
    pub fn cat<I>(vals: I) -> Vec<T>
    where
        I: IntoIterator<Item = Self>,
    {
        vals.into_iter().filter_map(Self::into_option).collect()
    }

    /// Applies the provided `f` to every value of `vals`, keeping only the
    /// present results.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use maybetype_core::Maybe;
    /// #
    /// assert_eq!(Maybe::cat_map(["1", "x", "3"], Maybe::try_int), [1, 3]);
    /// ```
    pub fn cat_map<A, I, F>(vals: I, f: F) -> Vec<T>
    where
        I: IntoIterator<Item = A>,
        F: FnMut(A) -> Self,
    {
        Self::cat(vals.into_iter().map(f))
    }

    /// Collects the values of `vals` if all of them are [`Maybe::Just`], or
    /// returns [`Maybe::Nothing`] on the first [`Maybe::Nothing`].
    ///
    /// # Example
    ///
    /// ```rust
    /// # use maybetype_core::{Just, Maybe, Nothing};
    /// #
    /// assert_eq!(Maybe::sequence([Just(1), Just(2)]), Just(vec![1, 2]));
    /// assert_eq!(Maybe::sequence([Just(1), Nothing]), Nothing);
    /// ```
    pub fn sequence<I>(vals: I) -> Maybe<Vec<T>>
    where
        I: IntoIterator<Item = Self>,
    {
        vals.into_iter().collect()
    }
}

impl<A, V: FromIterator<A>> FromIterator<Maybe<A>> for Maybe<V> {
    fn from_iter<I: IntoIterator<Item = Maybe<A>>>(iter: I) -> Self {
        iter.into_iter()
            .map(Maybe::into_option)
            .collect::<Option<V>>()
            .into()
    }
}

#[cfg(test)]
mod spec {
    use std::{cell::Cell, collections::HashSet};

    use crate::{Just, Maybe, Nothing};

    #[test]
    fn maps_present_values_only() {
        let calls = Cell::new(0);

        let mapped = Maybe::map(vec![Nothing, Just(2), Nothing], |v| {
            calls.set(calls.get() + 1);
            v.to_string()
        });

        assert_eq!(mapped, [Nothing, Just("2".to_owned()), Nothing]);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    #[should_panic(expected = "mapping failed")]
    fn propagates_panic_of_mapping() {
        let _ = Maybe::map(vec![Nothing, Just(1)], |_: i32| -> i32 {
            panic!("mapping failed")
        });
    }

    #[test]
    fn maps_empty_input() {
        let mapped = Maybe::map(Vec::<Maybe<i32>>::new(), |v| v + 1);

        assert!(mapped.is_empty());
    }

    #[test]
    fn cats_present_values() {
        assert_eq!(Maybe::cat(vec![Just(1), Nothing, Just(3), Nothing]), [1, 3]);
        assert_eq!(Maybe::cat(vec![Just("b"), Just("a")]), ["b", "a"]);
    }

    #[test]
    fn cats_all_nothing_into_empty() {
        assert!(Maybe::cat(vec![Maybe::<i32>::Nothing; 3]).is_empty());
        assert!(Maybe::<i32>::cat(vec![]).is_empty());
    }

    #[test]
    fn cat_maps_parsed_digits() {
        let digits = Maybe::cat_map(
            "abcdefghijklmnopqrstuvwxyz0123456789".chars(),
            |c| Maybe::try_int(c.to_string()),
        );

        assert_eq!(digits, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn sequences_all_present() {
        assert_eq!(
            Maybe::sequence([Just(1), Just(2), Just(3)]),
            Just(vec![1, 2, 3]),
        );
        assert_eq!(Maybe::<i32>::sequence([]), Just(vec![]));
    }

    #[test]
    fn sequence_short_circuits_on_nothing() {
        let pulled = Cell::new(0);
        let vals = [Just(1), Nothing, Just(3)].into_iter().inspect(|_| {
            pulled.set(pulled.get() + 1);
        });

        assert_eq!(Maybe::sequence(vals), Nothing);
        assert_eq!(pulled.get(), 2);
    }

    #[test]
    fn collects_into_any_collection() {
        let set: Maybe<HashSet<_>> =
            vec![Just(1), Just(1), Just(2)].into_iter().collect();

        assert_eq!(set.then(|s| s.len()), Some(2));
    }
}
