//! Parsing constructors of [`Maybe`].

use std::str::FromStr;

use crate::Maybe;

impl Maybe<i64> {
    /// Parses the given string as an integer, returning [`Maybe::Nothing`] on
    /// any failure.
    ///
    /// Surrounding whitespace is ignored. An optional `+` or `-` sign may
    /// precede the decimal digits, which may be grouped with single
    /// underscores (`1_000`). Values not fitting into [`i64`] are
    /// [`Maybe::Nothing`] as well.
    ///
    /// # Example
    ///
    /// ```rust
    /// # use maybetype_core::Maybe;
    /// #
    /// assert_eq!(Maybe::try_int(" -1_000 "), Maybe::Just(-1000));
    /// assert_eq!(Maybe::try_int("five"), Maybe::Nothing);
    /// ```
    #[must_use]
    pub fn try_int(s: impl AsRef<str>) -> Self {
        let s = s.as_ref().trim();
        let (sign, digits) = match s.strip_prefix('-') {
            Some(rest) => ("-", rest),
            None => ("", s.strip_prefix('+').unwrap_or(s)),
        };
        if !is_grouped_digits(digits) {
            return Self::Nothing;
        }

        let mut normalized = String::with_capacity(s.len());
        normalized.push_str(sign);
        normalized.extend(digits.chars().filter(|c| *c != '_'));
        Self::from(normalized.parse::<i64>().ok())
    }
}

impl<T: FromStr> Maybe<T> {
    /// Parses the given string via [`FromStr`], returning [`Maybe::Nothing`]
    /// on any failure.
    #[must_use]
    pub fn parse(s: impl AsRef<str>) -> Self {
        Self::from(s.as_ref().parse::<T>().ok())
    }
}

/// Checks whether the given `s` consists of non-empty groups of ASCII digits
/// separated by single underscores.
fn is_grouped_digits(s: &str) -> bool {
    !s.is_empty()
        && s.split('_').all(|group| {
            !group.is_empty() && group.bytes().all(|b| b.is_ascii_digit())
        })
}
