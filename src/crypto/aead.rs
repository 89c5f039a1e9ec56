//! src/crypto/aead.rs
//! AES-256-GCM with a 16-byte nonce, detached tag.
//!
//! The container stores the tag in the header and the ciphertext after it,
//! so both directions work in place on the payload buffer and keep the tag
//! separate. Associated data is always empty.

use secure_gate::RevealSecret;
use crate::aliases::{AuthTag16, ContentKey32, Iv16};
use crate::error::{EncImgError, Result};
use aes::Aes256;
use aes_gcm::aead::consts::U16;
use aes_gcm::aead::{AeadInPlace, KeyInit};
use aes_gcm::{AesGcm, Nonce, Tag};

/// AES-256-GCM parameterised for the 16-byte container IV.
pub type Aes256Gcm16 = AesGcm<Aes256, U16>;

/// Encrypt `buffer` in place and return the authentication tag.
pub fn seal_in_place(key: &ContentKey32, iv: &Iv16, buffer: &mut [u8]) -> Result<AuthTag16> {
    let cipher = Aes256Gcm16::new_from_slice(key.expose_secret())
        .map_err(|e| EncImgError::Crypto(e.to_string()))?;
    let nonce = Nonce::<U16>::from_slice(iv.expose_secret());

    let tag = cipher
        .encrypt_in_place_detached(nonce, b"", buffer)
        .map_err(|e| EncImgError::Crypto(format!("AES-GCM encryption failed: {e}")))?;

    let mut out = [0u8; 16];
    out.copy_from_slice(tag.as_slice());
    Ok(AuthTag16::new(out))
}

/// Verify `tag` and decrypt `buffer` in place.
///
/// On tag mismatch the buffer is left as ciphertext and
/// [`EncImgError::Authentication`] is returned.
pub fn open_in_place(
    key: &ContentKey32,
    iv: &Iv16,
    buffer: &mut [u8],
    tag: &AuthTag16,
) -> Result<()> {
    let cipher = Aes256Gcm16::new_from_slice(key.expose_secret())
        .map_err(|e| EncImgError::Crypto(e.to_string()))?;
    let nonce = Nonce::<U16>::from_slice(iv.expose_secret());
    let tag = Tag::<U16>::from_slice(tag.expose_secret());

    cipher
        .decrypt_in_place_detached(nonce, b"", buffer, tag)
        .map_err(|_| EncImgError::Authentication)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::crypto::rng::SecureRandomExt;

    #[test]
    fn seal_then_open() {
        let key = ContentKey32::random();
        let iv = Iv16::random();
        let mut buf = b"firmware bytes".to_vec();

        let tag = seal_in_place(&key, &iv, &mut buf).unwrap();
        assert_ne!(&buf[..], b"firmware bytes");

        open_in_place(&key, &iv, &mut buf, &tag).unwrap();
        assert_eq!(&buf[..], b"firmware bytes");
    }

    #[test]
    fn wrong_tag_is_authentication_error() {
        let key = ContentKey32::random();
        let iv = Iv16::random();
        let mut buf = vec![0x5a; 64];
        let tag = seal_in_place(&key, &iv, &mut buf).unwrap();

        let mut bad = *tag.expose_secret();
        bad[0] ^= 0x01;
        let err = open_in_place(&key, &iv, &mut buf, &AuthTag16::new(bad)).unwrap_err();
        assert!(matches!(err, EncImgError::Authentication));
    }

    #[test]
    fn empty_payload_still_has_tag() {
        let key = ContentKey32::random();
        let iv = Iv16::random();
        let mut buf: Vec<u8> = Vec::new();
        let tag = seal_in_place(&key, &iv, &mut buf).unwrap();
        open_in_place(&key, &iv, &mut buf, &tag).unwrap();
        assert!(buf.is_empty());
    }
}
