//! src/keys/device.rs
//! Device key pair derived from a 32-byte seed.
//!
//! The device stores only the seed (in an eFuse HMAC key slot) and
//! re-derives its P-256 private key with PBKDF2. The host uses the same
//! derivation to produce the device public key when none is supplied.

use secure_gate::RevealSecret;
use crate::aliases::{DeviceScalar32, DeviceSeed32};
use crate::consts::DEVICE_SEED_MAX_ATTEMPTS;
use crate::crypto::kdf::pbkdf2::derive_device_scalar;
use crate::crypto::rng::SecureRandomExt;
use crate::error::{EncImgError, Result};
use p256::{FieldBytes, PublicKey, SecretKey};

/// Device seed plus the P-256 key pair it stretches into.
pub struct DeviceKey {
    seed: DeviceSeed32,
    secret: SecretKey,
}

impl DeviceKey {
    /// Derive the device key from an explicit seed.
    ///
    /// Fails if the stretched scalar is zero or not below the curve order.
    pub fn from_seed(seed: DeviceSeed32) -> Result<Self> {
        let mut scalar = DeviceScalar32::new([0u8; 32]);
        derive_device_scalar(&seed, &mut scalar)?;

        let secret = SecretKey::from_bytes(FieldBytes::from_slice(scalar.expose_secret()))
            .map_err(|_| {
                EncImgError::KeyMaterial("device seed yields an out-of-range P-256 scalar".into())
            })?;

        Ok(Self { seed, secret })
    }

    /// Draw fresh seeds from the OS until one yields a valid scalar.
    pub fn generate() -> Result<Self> {
        for attempt in 1..=DEVICE_SEED_MAX_ATTEMPTS {
            match Self::from_seed(DeviceSeed32::random()) {
                Ok(key) => return Ok(key),
                Err(EncImgError::KeyMaterial(_)) => {
                    tracing::warn!(attempt, "device seed rejected, redrawing");
                }
                Err(e) => return Err(e),
            }
        }
        Err(EncImgError::Crypto(format!(
            "no valid device seed after {DEVICE_SEED_MAX_ATTEMPTS} attempts"
        )))
    }

    pub fn seed(&self) -> &DeviceSeed32 {
        &self.seed
    }

    pub fn secret_key(&self) -> &SecretKey {
        &self.secret
    }

    pub fn public_key(&self) -> PublicKey {
        self.secret.public_key()
    }
}

impl std::fmt::Debug for DeviceKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DeviceKey").finish_non_exhaustive()
    }
}
