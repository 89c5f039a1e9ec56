// src/crypto/rng.rs
//! Secure randomness for fixed-size secrets
//!
//! Adds `T::random()` to every [`SpanBuffer`](crate::aliases::SpanBuffer)
//! alias (content keys, IVs, salts, device seeds). Every call is a fresh
//! draw from the operating system CSPRNG; there is no seeded or reusable
//! generator anywhere in the crate.

use rand::rngs::OsRng;
use rand::RngCore;
use secure_gate::{Fixed, RevealSecret};

/// Extension trait – gives `.random()` to all fixed-size secret types
pub trait SecureRandomExt {
    /// Generate a cryptographically secure random instance of this type
    fn random() -> Self;
}

impl<const N: usize> SecureRandomExt for Fixed<[u8; N]> {
    #[inline]
    fn random() -> Self {
        let mut bytes = [0u8; N];
        OsRng.fill_bytes(&mut bytes);
        Fixed::new(bytes)
    }
}
