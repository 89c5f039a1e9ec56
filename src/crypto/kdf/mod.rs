//! # Key Derivation Functions (KDF)
//!
//! - [`hkdf`] - HKDF-SHA256, shared secret + salt -> content key (ECC scheme)
//! - [`pbkdf2`] - PBKDF2-HMAC-SHA256, device seed -> device private scalar
//!
//! The high-level [`encrypt`](crate::encrypt) and [`decrypt`](crate::decrypt)
//! functions call these automatically. They are public for device-side
//! tooling that needs to reproduce a derivation.

pub mod hkdf;
pub mod pbkdf2;
