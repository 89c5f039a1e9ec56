//! # Builders
//!
//! Fluent configuration with sensible defaults.
//!
//! - [`encrypt_options`] - options for [`encrypt`](crate::encrypt) when no key file is given

pub mod encrypt_options;

pub use encrypt_options::EncryptOptions;
