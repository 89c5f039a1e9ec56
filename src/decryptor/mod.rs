// src/decryptor/mod.rs

//! High-level decryption facade.
//!
//! Core API: `decrypt(input, output, &key)?` for a full container.
//! Helpers: `read_container` (no key needed), `open_container`,
//! `recover_content_key` for custom flows.

pub(crate) mod decrypt;
pub(crate) mod read;
pub(crate) mod recover;

pub use decrypt::{decrypt, open_container, DecryptSummary};
pub use read::{read_container, Container};
pub use recover::recover_content_key;
