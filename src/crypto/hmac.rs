// src/crypto/hmac.rs

//! HMAC-SHA256, the PRF behind device-seed stretching.

use hmac::Hmac;
use sha2::Sha256;

pub type HmacSha256 = Hmac<Sha256>;
