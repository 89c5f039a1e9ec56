//! # Secure-Gate Type Aliases
//!
//! Fixed-size secret buffers used across the crate, all backed by
//! [`secure_gate::Fixed`]. Every type requires an explicit `.expose_secret()`
//! to read and is wiped on drop.
//!
//! ### Generic
//! - [`SpanBuffer<N>`] - secure stack buffer for any size `N`
//!
//! ### Semantic fixed-size types
//! - [`ContentKey32`] - 32-byte AES-256-GCM content key
//! - [`Iv16`] - 16-byte AES-GCM nonce
//! - [`AuthTag16`] - 16-byte AES-GCM tag
//! - [`KdfSalt32`] - 32-byte per-message HKDF salt
//! - [`DeviceSeed32`] - 32-byte device seed stretched into the device key
//! - [`SharedSecret32`] - ECDH shared X coordinate
//!
//! Randomness for all of them comes from
//! [`SecureRandomExt::random`](crate::crypto::rng::SecureRandomExt::random).

/// Generic secure stack buffer (direct alias to secure-gate's `Fixed`).
pub type SpanBuffer<const N: usize> = secure_gate::Fixed<[u8; N]>;

pub type ContentKey32 = SpanBuffer<32>;
pub type Iv16 = SpanBuffer<16>;
pub type AuthTag16 = SpanBuffer<16>;
pub type KdfSalt32 = SpanBuffer<32>;
pub type DeviceSeed32 = SpanBuffer<32>;
pub type SharedSecret32 = SpanBuffer<32>;
pub type DeviceScalar32 = SpanBuffer<32>;
