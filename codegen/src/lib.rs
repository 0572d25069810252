#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(feature = "doc", deny(rustdoc::all))]
#![deny(
    macro_use_extern_crate,
    nonstandard_style,
    rust_2018_idioms,
    trivial_casts,
    trivial_numeric_casts
)]
#![forbid(non_ascii_idents, unsafe_code)]
#![warn(
    clippy::as_conversions,
    clippy::dbg_macro,
    clippy::expect_used,
    clippy::missing_docs_in_private_items,
    clippy::pedantic,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,
    clippy::use_self,
    future_incompatible,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs,
    noop_method_call,
    unreachable_pub,
    unused_crate_dependencies,
    unused_extern_crates,
    unused_import_braces,
    unused_labels,
    unused_lifetimes,
    unused_qualifications,
    unused_results
)]

// Only for generating documentation.
#[cfg(feature = "doc")]
use maybetype_core as _;

use maybetype_codegen_impl as codegen;
use proc_macro::TokenStream;

/// Macro for deriving the [`Attrs`] trait on structs.
///
/// Every field of the struct is exposed as an attribute named after the
/// field (a raw `r#` prefix is stripped). Fields of tuple structs are exposed
/// under their index (`"0"`, `"1"`, ...). Exposed fields must be `'static`.
///
/// ## Field attributes
///
/// #### `#[attr(rename = "...")]` (optional)
///
/// Aliases: `#[attr(name = "...")]`
///
/// Exposes the field under the given name instead.
///
/// #### `#[attr(ignore)]` (optional)
///
/// Aliases: `#[attr(skip)]`
///
/// Hides the field completely.
///
/// ## Example
///
/// ```rust,ignore
/// use maybetype::{Attrs, Maybe};
///
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
/// Enums and unions are rejected, as well as several fields exposed under
/// the same name.
///
/// [`Attrs`]: https://docs.rs/maybetype/latest/maybetype/trait.Attrs.html
#[proc_macro_derive(Attrs, attributes(attr))]
pub fn derive_attrs(input: TokenStream) -> TokenStream {
    codegen::attrs::derive(input.into())
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}
