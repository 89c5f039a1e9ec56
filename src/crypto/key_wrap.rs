//! src/crypto/key_wrap.rs
//! RSA-3072 PKCS#1 v1.5 wrapping of the content key.

use secure_gate::{RevealSecret, RevealSecretMut};
use crate::aliases::ContentKey32;
use crate::consts::{CONTENT_KEY_SIZE, KEY_BLOB_SIZE, RSA_KEY_BITS, RSA_MODULUS_SIZE};
use crate::error::{EncImgError, Result};
use rand::rngs::OsRng;
use rsa::traits::PublicKeyParts;
use rsa::{Pkcs1v15Encrypt, RsaPrivateKey, RsaPublicKey};

/// Reject any modulus that is not exactly 3072 bits.
pub fn ensure_rsa_3072(key: &impl PublicKeyParts) -> Result<()> {
    if key.size() != RSA_MODULUS_SIZE {
        return Err(EncImgError::KeyMaterial(format!(
            "RSA key must be {RSA_KEY_BITS}-bit, got {}-bit",
            key.n().bits()
        )));
    }
    Ok(())
}

/// Wrap the content key for `recipient`. The result fills the key-blob exactly.
pub fn wrap_content_key(
    recipient: &RsaPublicKey,
    content_key: &ContentKey32,
) -> Result<[u8; KEY_BLOB_SIZE]> {
    ensure_rsa_3072(recipient)?;

    let wrapped = recipient
        .encrypt(&mut OsRng, Pkcs1v15Encrypt, content_key.expose_secret())
        .map_err(|e| EncImgError::Crypto(format!("RSA wrap failed: {e}")))?;

    <[u8; KEY_BLOB_SIZE]>::try_from(wrapped.as_slice()).map_err(|_| {
        EncImgError::Crypto(format!(
            "RSA wrap produced {} bytes, expected {KEY_BLOB_SIZE}",
            wrapped.len()
        ))
    })
}

/// Unwrap the content key from an RSA key-blob.
///
/// A padding failure means a corrupted key-blob or the wrong private key;
/// both are reported as key-material errors.
pub fn unwrap_content_key(
    private_key: &RsaPrivateKey,
    wrapped: &[u8; KEY_BLOB_SIZE],
) -> Result<ContentKey32> {
    ensure_rsa_3072(private_key)?;

    let unwrapped = private_key
        .decrypt(Pkcs1v15Encrypt, wrapped)
        .map_err(|_| {
            EncImgError::KeyMaterial("RSA unwrap failed: wrong key or corrupted key blob".into())
        })?;

    if unwrapped.len() != CONTENT_KEY_SIZE {
        return Err(EncImgError::KeyMaterial(format!(
            "unwrapped content key is {} bytes, expected {CONTENT_KEY_SIZE}",
            unwrapped.len()
        )));
    }

    let mut key = ContentKey32::new([0u8; CONTENT_KEY_SIZE]);
    key.expose_secret_mut().copy_from_slice(&unwrapped);
    Ok(key)
}
