// src/crypto/mod.rs

//! Low-level crypto primitives.
//!
//! Pure in-memory operations, no I/O. The container codec in
//! [`encryptor`](crate::encryptor) and [`decryptor`](crate::decryptor) is the
//! only caller that composes them.

pub mod aead;
pub mod ecdh;
pub mod hmac;
pub mod kdf;
pub mod key_wrap;
pub mod rng;
