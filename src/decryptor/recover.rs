//! src/decryptor/recover.rs
//! Receiver-side content key recovery.
//!
//! Exact mirror of `encryptor/establish.rs`: the key-blob is interpreted
//! for the scheme of the local private key and the content key is
//! recomputed from it. Pure crypto, no I/O.

use crate::aliases::ContentKey32;
use crate::crypto::ecdh::{agree_static, decode_public_point};
use crate::crypto::kdf::hkdf::derive_content_key;
use crate::crypto::key_wrap::unwrap_content_key;
use crate::error::{EncImgError, Result};
use crate::header::{ContainerHeader, KeyBlob};
use crate::keys::KeyMaterial;

/// Recover the content key for `header` with a private key.
pub fn recover_content_key(header: &ContainerHeader, key: &KeyMaterial) -> Result<ContentKey32> {
    let blob = header.key_blob_for(key.scheme());

    match (key, blob) {
        (KeyMaterial::RsaPrivate(private), KeyBlob::Rsa { wrapped }) => {
            unwrap_content_key(private, &wrapped)
        }
        (KeyMaterial::EccPrivate(private), KeyBlob::Ecc { public_point, salt }) => {
            let peer = decode_public_point(&public_point)?;
            let shared_secret = agree_static(private, &peer);
            let mut content_key = ContentKey32::new([0u8; 32]);
            derive_content_key(&shared_secret, &salt, &mut content_key)?;
            Ok(content_key)
        }
        (KeyMaterial::RsaPublic(_) | KeyMaterial::EccPublic(_), _) => Err(
            EncImgError::KeyMaterial("decryption requires a private key".into()),
        ),
        (_, blob) => Err(EncImgError::KeyMaterial(format!(
            "key blob parsed as {} does not match the key",
            blob.scheme()
        ))),
    }
}
