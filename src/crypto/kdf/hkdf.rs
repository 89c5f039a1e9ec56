//! src/crypto/kdf/hkdf.rs

use secure_gate::{RevealSecret, RevealSecretMut};
use crate::aliases::{ContentKey32, KdfSalt32, SharedSecret32};
use crate::consts::HKDF_INFO;
use crate::error::{EncImgError, Result};

use hkdf::Hkdf;
use sha2::Sha256;

/// Derive the ECC-scheme content key from an ECDH shared secret.
///
/// HKDF-SHA256 with the per-message salt and the fixed `_esp_enc_img_ecc`
/// info string. Output depends only on `(shared_secret, salt)`.
#[inline]
pub fn derive_content_key(
    shared_secret: &SharedSecret32,
    salt: &KdfSalt32,
    out_key: &mut ContentKey32,
) -> Result<()> {
    let hk = Hkdf::<Sha256>::new(Some(salt.expose_secret()), shared_secret.expose_secret());
    hk.expand(HKDF_INFO, out_key.expose_secret_mut())
        .map_err(|e| EncImgError::Crypto(format!("HKDF expand failed: {e}")))?;
    Ok(())
}
