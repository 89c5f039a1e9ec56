// src/encryptor/mod.rs

//! High-level encryption facade.
//!
//! Core API: `encrypt(input, output, key, &options)?` for a full container.
//! Helpers: `establish_content_key` and the write helpers for custom flows.

pub(crate) mod encrypt;
pub(crate) mod establish;
pub(crate) mod write;

pub use encrypt::{encrypt, EncryptSummary};
pub use establish::{establish_content_key, Established};
pub use write::{ciphertext_len_field, write_header, write_octets};
