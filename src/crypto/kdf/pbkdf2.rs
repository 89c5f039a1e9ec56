//! src/crypto/kdf/pbkdf2.rs

use secure_gate::{RevealSecret, RevealSecretMut};
use crate::aliases::{DeviceScalar32, DeviceSeed32};
use crate::consts::{DEVICE_PBKDF2_ITERATIONS, DEVICE_PBKDF2_SALT};
use crate::crypto::hmac::HmacSha256;
use crate::error::{EncImgError, Result};

use pbkdf2::pbkdf2;

/// Stretch a device seed into a candidate P-256 private scalar.
///
/// PBKDF2-HMAC-SHA256 over the fixed device salt, 2048 iterations. The
/// output is a big-endian scalar candidate; range checking against the
/// curve order happens in [`DeviceKey`](crate::keys::DeviceKey).
#[inline]
pub fn derive_device_scalar(seed: &DeviceSeed32, out_scalar: &mut DeviceScalar32) -> Result<()> {
    pbkdf2::<HmacSha256>(
        seed.expose_secret(),
        &DEVICE_PBKDF2_SALT,
        DEVICE_PBKDF2_ITERATIONS,
        out_scalar.expose_secret_mut(),
    )
    .map_err(|e| EncImgError::Crypto(format!("PBKDF2 failed: {e}")))?;
    Ok(())
}
