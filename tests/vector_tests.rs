//! tests/vector_tests.rs
//! Known-answer tests against output of the reference Python tool.

mod common;
use secure_gate::RevealSecret;
use common::{ecc_private, ecc_sec1_with_parameters_pem, key, rsa_private, vectors};

use encimg_rs::aliases::{ContentKey32, DeviceScalar32, DeviceSeed32, KdfSalt32, SharedSecret32};
use encimg_rs::crypto::ecdh::encode_public_point;
use encimg_rs::{
    decrypt, derive_content_key, derive_device_scalar, DeviceKey, EncImgError, Scheme,
};
use hex::decode;
use std::io::Cursor;

fn array32(hex_str: &str) -> [u8; 32] {
    decode(hex_str)
        .unwrap()
        .try_into()
        .unwrap_or_else(|v: Vec<u8>| panic!("expected 32 bytes, got {}", v.len()))
}

#[test]
fn hkdf_matches_reference() {
    let v = &vectors().hkdf;
    let mut out = ContentKey32::new([0u8; 32]);
    derive_content_key(
        &SharedSecret32::new(array32(&v.shared_secret_hex)),
        &KdfSalt32::new(array32(&v.salt_hex)),
        &mut out,
    )
    .unwrap();
    assert_eq!(hex::encode(out.expose_secret()), v.content_key_hex);
}

#[test]
fn device_scalar_matches_reference() {
    let v = &vectors().device_key;
    let mut scalar = DeviceScalar32::new([0u8; 32]);
    derive_device_scalar(&DeviceSeed32::new(array32(&v.seed_hex)), &mut scalar).unwrap();
    assert_eq!(hex::encode(scalar.expose_secret()), v.scalar_hex);
}

#[test]
fn device_public_key_matches_reference() {
    let v = &vectors().device_key;
    let device = DeviceKey::from_seed(DeviceSeed32::new(array32(&v.seed_hex))).unwrap();
    let point = encode_public_point(&device.public_key()).unwrap();
    assert_eq!(format!("04{}", hex::encode(point)), v.public_point_hex);

    // The ECC container vector was produced for this same device key.
    assert_eq!(
        Some(device.public_key()),
        key(&vectors().ecc.public_key_pem).ecc_public()
    );
}

#[test]
fn decrypt_reference_ecc_container() {
    let v = &vectors().ecc;
    let container = decode(&v.container_hex).unwrap();
    let mut plaintext = Vec::new();
    let summary = decrypt(Cursor::new(&container), &mut plaintext, &ecc_private()).unwrap();
    assert_eq!(summary.scheme, Scheme::Ecc256);
    assert_eq!(hex::encode(&plaintext), v.plaintext_hex);
}

#[test]
fn decrypt_reference_ecc_container_with_sec1_key() {
    let v = &vectors().ecc;
    let sec1 = v.private_key_sec1_pem.as_deref().unwrap();
    assert!(sec1.contains("BEGIN EC PRIVATE KEY"));

    let container = decode(&v.container_hex).unwrap();
    let mut plaintext = Vec::new();
    decrypt(Cursor::new(&container), &mut plaintext, &key(sec1)).unwrap();
    assert_eq!(hex::encode(&plaintext), v.plaintext_hex);
}

#[test]
fn decrypt_reference_ecc_container_with_openssl_ecparam_layout() {
    let v = &vectors().ecc;
    let container = decode(&v.container_hex).unwrap();
    let mut plaintext = Vec::new();
    decrypt(
        Cursor::new(&container),
        &mut plaintext,
        &key(&ecc_sec1_with_parameters_pem()),
    )
    .unwrap();
    assert_eq!(hex::encode(&plaintext), v.plaintext_hex);
}

#[test]
fn decrypt_reference_rsa_container() {
    let v = &vectors().rsa;
    assert!(v.private_key_pem.contains("BEGIN RSA PRIVATE KEY"));

    let container = decode(&v.container_hex).unwrap();
    let mut plaintext = Vec::new();
    let summary = decrypt(Cursor::new(&container), &mut plaintext, &rsa_private()).unwrap();
    assert_eq!(summary.scheme, Scheme::Rsa3072);
    assert_eq!(hex::encode(&plaintext), v.plaintext_hex);
}

#[test]
fn reference_containers_have_fixed_header() {
    for v in [&vectors().ecc, &vectors().rsa] {
        let container = decode(&v.container_hex).unwrap();
        let plaintext_len = v.plaintext_hex.len() / 2;
        assert_eq!(container.len(), 512 + plaintext_len);
        assert_eq!(&container[..4], &[0xcf, 0xb6, 0x88, 0x07]);
        assert_eq!(
            u32::from_le_bytes(container[404..408].try_into().unwrap()) as usize,
            plaintext_len
        );
        assert!(container[424..512].iter().all(|&b| b == 0));
    }
}

#[test]
fn reference_container_rejects_other_scheme_key() {
    let container = decode(&vectors().rsa.container_hex).unwrap();
    let err = decrypt(Cursor::new(&container), &mut Vec::new(), &ecc_private()).unwrap_err();
    assert!(
        matches!(
            err,
            EncImgError::KeyMaterial(_) | EncImgError::Authentication
        ),
        "unexpected error: {err:?}"
    );
}
