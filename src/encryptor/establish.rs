//! src/encryptor/establish.rs
//! Sender-side key establishment.
//!
//! Produces the content key and the key-blob that lets the recipient
//! recover it. This is the exact mirror of `decryptor/recover.rs`.
//! Pure crypto, no I/O.

use secure_gate::RevealSecret;
use crate::aliases::{ContentKey32, DeviceSeed32, KdfSalt32};
use crate::builders::EncryptOptions;
use crate::crypto::ecdh::agree_ephemeral;
use crate::crypto::kdf::hkdf::derive_content_key;
use crate::crypto::key_wrap::wrap_content_key;
use crate::crypto::rng::SecureRandomExt;
use crate::error::{EncImgError, Result};
use crate::header::KeyBlob;
use crate::keys::{resolve_scheme, DeviceKey, KeyMaterial, Scheme};

/// Content key plus everything the header needs to carry for it.
pub struct Established {
    pub content_key: ContentKey32,
    pub key_blob: KeyBlob,
    /// Device key generated because no key was supplied (ECC only).
    pub generated_device: Option<DeviceKey>,
}

/// Establish a fresh content key for one container.
///
/// Every call draws a new content key (RSA) or a new ephemeral key pair and
/// salt (ECC).
pub fn establish_content_key(
    key: Option<&KeyMaterial>,
    options: &EncryptOptions,
) -> Result<Established> {
    let scheme = resolve_scheme(key, options.fallback_scheme());
    tracing::debug!(%scheme, key_supplied = key.is_some(), "establishing content key");

    match (scheme, key) {
        (Scheme::Rsa3072, Some(key)) => {
            let recipient = key.rsa_public().ok_or_else(|| {
                EncImgError::KeyMaterial("RSA scheme requires an RSA key".into())
            })?;
            let content_key = ContentKey32::random();
            let wrapped = wrap_content_key(&recipient, &content_key)?;
            Ok(Established {
                content_key,
                key_blob: KeyBlob::Rsa { wrapped },
                generated_device: None,
            })
        }
        (Scheme::Rsa3072, None) => Err(EncImgError::KeyMaterial(
            "RSA scheme requires a recipient key file".into(),
        )),
        (Scheme::Ecc256, Some(key)) => {
            let recipient = key.ecc_public().ok_or_else(|| {
                EncImgError::KeyMaterial("ECC scheme requires a P-256 key".into())
            })?;
            establish_ecc(&recipient, None)
        }
        (Scheme::Ecc256, None) => {
            let device = match options.device_seed() {
                Some(seed) => DeviceKey::from_seed(DeviceSeed32::new(*seed.expose_secret()))?,
                None => DeviceKey::generate()?,
            };
            tracing::info!("no key supplied, generated ECC-256 device key");
            let recipient = device.public_key();
            establish_ecc(&recipient, Some(device))
        }
    }
}

fn establish_ecc(
    recipient: &p256::PublicKey,
    generated_device: Option<DeviceKey>,
) -> Result<Established> {
    let agreement = agree_ephemeral(recipient)?;
    let salt = KdfSalt32::random();

    let mut content_key = ContentKey32::new([0u8; 32]);
    derive_content_key(&agreement.shared_secret, &salt, &mut content_key)?;

    Ok(Established {
        content_key,
        key_blob: KeyBlob::Ecc {
            public_point: agreement.public_point,
            salt,
        },
        generated_device,
    })
}
