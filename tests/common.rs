//! tests/common.rs
//! Shared fixtures: known-answer vectors and key material.

#![allow(dead_code)] // Each test file uses a different subset

use encimg_rs::KeyMaterial;
use serde::Deserialize;
use std::path::Path;
use std::sync::OnceLock;

/// Standard payload used across tests
pub const TEST_PAYLOAD: &[u8] = b"firmware image payload";

#[derive(Debug, Deserialize)]
pub struct DeviceKeyVector {
    pub seed_hex: String,
    pub scalar_hex: String,
    pub public_point_hex: String,
}

#[derive(Debug, Deserialize)]
pub struct HkdfVector {
    pub shared_secret_hex: String,
    pub salt_hex: String,
    pub content_key_hex: String,
}

#[derive(Debug, Deserialize)]
pub struct ContainerVector {
    pub private_key_pem: String,
    pub public_key_pem: String,
    #[serde(default)]
    pub private_key_sec1_pem: Option<String>,
    pub plaintext_hex: String,
    pub container_hex: String,
}

/// Containers and derivations produced by the reference Python tool.
#[derive(Debug, Deserialize)]
pub struct Vectors {
    pub device_key: DeviceKeyVector,
    pub hkdf: HkdfVector,
    pub ecc: ContainerVector,
    pub rsa: ContainerVector,
    pub rsa_2048_public_key_pem: String,
    pub rsa_unrelated_private_key_pem: String,
    pub ecc_unrelated_private_key_pem: String,
    pub ecc_p384_private_key_pem: String,
    pub ecc_p384_sec1_private_key_pem: String,
    pub ed25519_private_key_pem: String,
}

pub fn vectors() -> &'static Vectors {
    static VECTORS: OnceLock<Vectors> = OnceLock::new();
    VECTORS.get_or_init(|| {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("tests")
            .join("vector")
            .join("data")
            .join("python_tool_vectors.json");
        let content = std::fs::read_to_string(&path)
            .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));
        serde_json::from_str(&content)
            .unwrap_or_else(|e| panic!("Failed to parse {}: {e}", path.display()))
    })
}

pub fn key(pem: &str) -> KeyMaterial {
    KeyMaterial::from_pem(pem).unwrap_or_else(|e| panic!("fixture key failed to load: {e}"))
}

pub fn rsa_private() -> KeyMaterial {
    key(&vectors().rsa.private_key_pem)
}

pub fn rsa_public() -> KeyMaterial {
    key(&vectors().rsa.public_key_pem)
}

pub fn ecc_private() -> KeyMaterial {
    key(&vectors().ecc.private_key_pem)
}

pub fn ecc_public() -> KeyMaterial {
    key(&vectors().ecc.public_key_pem)
}

/// Named-curve block `openssl ecparam -name prime256v1` writes ahead of the key.
pub const EC_PARAMETERS_P256: &str =
    "-----BEGIN EC PARAMETERS-----\nBggqhkjOPQMBBw==\n-----END EC PARAMETERS-----\n";

/// The reference ECC private key as `openssl ecparam -genkey` lays it out.
pub fn ecc_sec1_with_parameters_pem() -> String {
    let sec1 = vectors().ecc.private_key_sec1_pem.as_deref().unwrap();
    format!("{EC_PARAMETERS_P256}{sec1}")
}

/// Deterministic pseudo-random bytes (xorshift), for payloads.
pub fn pseudo_random_bytes(len: usize, mut state: u64) -> Vec<u8> {
    (0..len)
        .map(|_| {
            state ^= state << 13;
            state ^= state >> 7;
            state ^= state << 17;
            (state >> 24) as u8
        })
        .collect()
}
