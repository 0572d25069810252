#![doc = include_str!("../README.md")]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    trivial_casts,
    trivial_numeric_casts
)]
#![forbid(non_ascii_idents, unsafe_code)]
#![warn(
    deprecated_in_future,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    unreachable_pub,
    unused_import_braces,
    unused_labels,
    unused_qualifications,
    unused_results
)]

pub mod meta;
#[doc(hidden)]
pub mod private;

#[doc(inline)]
pub use maybetype_core::{
    maybe, maybe_if, Attrs, Just, Lookup, Maybe, Nothing, UnwrapError,
};

/// Macro for deriving [`Attrs`](trait@Attrs) on structs.
///
/// # Field attributes
///
/// - `#[attr(rename = "...")]` (alias `name`): optional
///
///   Exposes the field under the given name instead of its Rust one.
///
/// - `#[attr(ignore)]` (alias `skip`): optional
///
///   Hides the field.
///
/// # Examples
///
/// ```
/// # use maybetype::{Attrs, Maybe};
/// #
/// #[derive(Attrs)]
/// struct Config {
///     #[attr(rename = "timeout")]
///     timeout_secs: u64,
///     #[attr(skip)]
///     secret: String,
/// }
///
/// let config = Maybe::Just(Config {
///     timeout_secs: 30,
///     secret: "hunter2".into(),
/// });
/// assert_eq!(config.attr_or("timeout", 10_u64), 30);
/// assert_eq!(config.attr_or("secret", String::new()), "");
/// ```
///
/// ```compile_fail
/// # use maybetype::Attrs;
/// #
/// #[derive(Attrs)]
/// enum Shape {
///     Circle(f64),
/// }
/// ```
#[cfg(feature = "derive")]
pub use maybetype_codegen::Attrs;
