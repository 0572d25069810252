#![doc = include_str!("../README.md")]
#![deny(
    nonstandard_style,
    rust_2018_idioms,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code
)]
#![forbid(non_ascii_idents)]
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

mod attr;
mod error;
mod lookup;
mod maybe;
mod parse;
mod seq;

#[doc(inline)]
pub use self::{
    attr::Attrs,
    error::UnwrapError,
    lookup::Lookup,
    maybe::{
        maybe, maybe_if, Maybe,
        Maybe::{Just, Nothing},
    },
};
