//! # Error Types
//!
//! This module defines the error types used throughout the library.
//! All operations return [`Result<T, EncImgError>`](EncImgError) and every
//! variant is terminal for a single encrypt or decrypt call.

use thiserror::Error;

/// The error type for all encrypted-image operations.
///
/// Each variant is a distinct failure category. "Not our format"
/// ([`EncImgError::InvalidMagic`]) and "tampered or wrong key"
/// ([`EncImgError::Authentication`]) are separate variants.
#[derive(Error, Debug)]
pub enum EncImgError {
    /// I/O error while reading input or writing output.
    ///
    /// Wraps [`std::io::Error`] and is created automatically with `?`.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Structural error in the container.
    ///
    /// Used when:
    /// - the input is too short to hold the 512-byte header
    /// - the ciphertext length field disagrees with the bytes that follow
    /// - a payload is too large for the 32-bit length field
    #[error("Header error: {0}")]
    Header(String),

    /// The first four bytes are not the container magic.
    #[error("Magic verification failed: found 0x{found:08x}")]
    InvalidMagic {
        /// Magic value actually read (little-endian).
        found: u32,
    },

    /// Key file missing, unparsable, of the wrong size, or unable to
    /// recover the content key.
    #[error("Key material error: {0}")]
    KeyMaterial(String),

    /// AES-GCM tag verification failed. No plaintext is produced.
    #[error("Authentication failed: ciphertext or tag corrupted, or wrong key")]
    Authentication,

    /// Key uses an algorithm or curve that maps to no supported scheme.
    #[error("Unsupported scheme: {0}")]
    UnsupportedScheme(String),

    /// Internal failure of a cryptographic primitive.
    #[error("Crypto error: {0}")]
    Crypto(String),
}

impl EncImgError {
    /// Process exit code for this failure category.
    ///
    /// Codes 1 and 2 are left to argument parsing.
    pub const fn exit_code(&self) -> u8 {
        match self {
            EncImgError::Io(_) => 3,
            EncImgError::Header(_) => 4,
            EncImgError::InvalidMagic { .. } => 5,
            EncImgError::KeyMaterial(_) => 6,
            EncImgError::Authentication => 7,
            EncImgError::UnsupportedScheme(_) => 8,
            EncImgError::Crypto(_) => 9,
        }
    }
}

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, EncImgError>;
