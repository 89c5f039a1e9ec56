//! src/crypto/ecdh.rs
//! P-256 ECDH for the ECC scheme.
//!
//! Points travel in the key-blob as 64 raw bytes (X‖Y) without the SEC1
//! `0x04` tag; the tag is stripped on write and restored on read.

use secure_gate::{RevealSecret, RevealSecretMut};
use crate::aliases::SharedSecret32;
use crate::consts::ECC_PUBLIC_POINT_SIZE;
use crate::error::{EncImgError, Result};
use p256::ecdh::EphemeralSecret;
use p256::elliptic_curve::sec1::ToEncodedPoint;
use p256::{PublicKey, SecretKey};
use rand::rngs::OsRng;

const SEC1_UNCOMPRESSED_TAG: u8 = 0x04;

/// Result of the sender-side agreement.
pub struct EphemeralAgreement {
    /// Raw ephemeral public point for the key-blob.
    pub public_point: [u8; ECC_PUBLIC_POINT_SIZE],
    pub shared_secret: SharedSecret32,
}

/// Generate an ephemeral key pair and agree with `recipient`.
pub fn agree_ephemeral(recipient: &PublicKey) -> Result<EphemeralAgreement> {
    let ephemeral = EphemeralSecret::random(&mut OsRng);
    let public_point = encode_public_point(&ephemeral.public_key())?;
    let shared = ephemeral.diffie_hellman(recipient);

    let mut shared_secret = SharedSecret32::new([0u8; 32]);
    shared_secret
        .expose_secret_mut()
        .copy_from_slice(shared.raw_secret_bytes().as_slice());

    Ok(EphemeralAgreement {
        public_point,
        shared_secret,
    })
}

/// Receiver-side agreement with the sender's ephemeral point.
pub fn agree_static(local: &SecretKey, peer: &PublicKey) -> SharedSecret32 {
    let shared = p256::ecdh::diffie_hellman(local.to_nonzero_scalar(), peer.as_affine());
    let mut shared_secret = SharedSecret32::new([0u8; 32]);
    shared_secret
        .expose_secret_mut()
        .copy_from_slice(shared.raw_secret_bytes().as_slice());
    shared_secret
}

/// Encode a public key as raw X‖Y.
pub fn encode_public_point(key: &PublicKey) -> Result<[u8; ECC_PUBLIC_POINT_SIZE]> {
    let encoded = key.to_encoded_point(false);
    let bytes = encoded.as_bytes();
    match bytes.split_first() {
        Some((&SEC1_UNCOMPRESSED_TAG, rest)) if rest.len() == ECC_PUBLIC_POINT_SIZE => {
            let mut out = [0u8; ECC_PUBLIC_POINT_SIZE];
            out.copy_from_slice(rest);
            Ok(out)
        }
        _ => Err(EncImgError::Crypto(
            "unexpected SEC1 encoding of P-256 public key".into(),
        )),
    }
}

/// Decode raw X‖Y into a validated curve point.
pub fn decode_public_point(raw: &[u8; ECC_PUBLIC_POINT_SIZE]) -> Result<PublicKey> {
    let mut sec1 = [0u8; ECC_PUBLIC_POINT_SIZE + 1];
    sec1[0] = SEC1_UNCOMPRESSED_TAG;
    sec1[1..].copy_from_slice(raw);
    PublicKey::from_sec1_bytes(&sec1).map_err(|_| {
        EncImgError::KeyMaterial("key blob carries an invalid P-256 public point".into())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_sides_agree() {
        let receiver = SecretKey::random(&mut OsRng);
        let sent = agree_ephemeral(&receiver.public_key()).unwrap();

        let peer = decode_public_point(&sent.public_point).unwrap();
        let received = agree_static(&receiver, &peer);
        assert_eq!(sent.shared_secret.expose_secret(), received.expose_secret());
    }

    #[test]
    fn off_curve_point_rejected() {
        let err = decode_public_point(&[0x01; ECC_PUBLIC_POINT_SIZE]).unwrap_err();
        assert!(matches!(err, EncImgError::KeyMaterial(_)));
    }
}
