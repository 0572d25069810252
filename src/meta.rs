//! Metadata of this package.

/// Name of this package.
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Version of this package.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
