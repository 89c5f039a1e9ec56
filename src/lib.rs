// src/lib.rs

//! Encrypted firmware image containers.
//!
//! A container is a fixed 512-byte header followed by AES-256-GCM
//! ciphertext. The 32-byte content key is established per container with
//! either RSA-3072 (PKCS#1 v1.5 key wrap) or ECDH P-256 + HKDF-SHA256, and the
//! scheme is picked from the key file.
//!
//! ```no_run
//! use encimg_rs::{decrypt_file, encrypt_file, EncryptOptions};
//! use std::path::Path;
//!
//! encrypt_file(
//!     Path::new("app.bin"),
//!     Some(Path::new("rsa_pub_key.pem")),
//!     Path::new("app_enc.bin"),
//!     &EncryptOptions::new(),
//! )?;
//! decrypt_file(
//!     Path::new("app_enc.bin"),
//!     Path::new("rsa_priv_key.pem"),
//!     Path::new("app_dec.bin"),
//! )?;
//! # Ok::<(), encimg_rs::EncImgError>(())
//! ```

pub mod aliases;
pub mod builders;
pub mod consts;
pub mod crypto;
pub mod decryptor;
pub mod encryptor;
pub mod error;
pub mod file_ops;
pub mod header;
pub mod keys;

// High-level API
pub use builders::EncryptOptions;
pub use decryptor::{decrypt, open_container, read_container, Container, DecryptSummary};
pub use encryptor::{encrypt, EncryptSummary};
pub use error::{EncImgError, Result};
pub use file_ops::{decrypt_file, encrypt_file, inspect_file};
pub use keys::{generate_ecc_keypair, generate_rsa_keypair, DeviceKey, KeyMaterial, Scheme};

// Low-level KDFs, for device-side tooling that reproduces a derivation.
pub use crypto::kdf::hkdf::derive_content_key;
pub use crypto::kdf::pbkdf2::derive_device_scalar;

pub use header::{read_magic, ContainerHeader, LAYOUT};
