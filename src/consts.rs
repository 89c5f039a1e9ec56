//! Global constants for the encrypted image format.
//!
//! Includes the magic, field sizes, and the fixed KDF parameters shared with
//! the on-device decryptor. Changing any of these breaks wire compatibility.

/// Container magic.
///
/// Stored little-endian as the first four bytes of every container.
pub const ENC_IMG_MAGIC: u32 = 0x0788_b6cf;

/// Total header size; the ciphertext starts at this offset.
pub const HEADER_SIZE: usize = 512;

pub const MAGIC_SIZE: usize = 4;
/// Key-establishment slot, sized for an RSA-3072 wrapped key.
pub const KEY_BLOB_SIZE: usize = 384;
pub const IV_SIZE: usize = 16;
pub const CIPHERTEXT_LEN_SIZE: usize = 4;
pub const AUTH_TAG_SIZE: usize = 16;

/// Raw uncompressed P-256 point without the `0x04` SEC1 tag.
pub const ECC_PUBLIC_POINT_SIZE: usize = 64;
pub const KDF_SALT_SIZE: usize = 32;

/// Content key length (AES-256).
pub const CONTENT_KEY_SIZE: usize = 32;

/// RSA modulus length in bytes (3072 bits).
pub const RSA_MODULUS_SIZE: usize = 384;
pub const RSA_KEY_BITS: usize = RSA_MODULUS_SIZE * 8;

/// HKDF `info` for the ECC scheme. 16 bytes, no terminator.
pub const HKDF_INFO: &[u8] = b"_esp_enc_img_ecc";

/// Device seed length ("HMAC key" on the device side).
pub const DEVICE_SEED_SIZE: usize = 32;

/// PBKDF2-HMAC-SHA256 iterations for seed -> device scalar.
pub const DEVICE_PBKDF2_ITERATIONS: u32 = 2048;

/// Fixed PBKDF2 salt for seed -> device scalar.
pub const DEVICE_PBKDF2_SALT: [u8; 32] = [
    0x0e, 0x21, 0x60, 0x64, 0x2d, 0xae, 0x76, 0xd3, 0x34, 0x48, 0xe4, 0x3d, 0x77, 0x20, 0x12, 0x3d,
    0x9f, 0x3b, 0x1e, 0xce, 0xb8, 0x8e, 0x57, 0x3a, 0x4e, 0x8f, 0x7f, 0xb9, 0x4f, 0xf0, 0xc8, 0x69,
];

/// Upper bound on redraws when generating a random device seed.
pub const DEVICE_SEED_MAX_ATTEMPTS: usize = 16;

/// Conventional file names written by key generation.
pub const DEVICE_PRIVATE_KEY_FILE: &str = "device_priv_key.pem";
pub const DEVICE_PUBLIC_KEY_FILE: &str = "device_pub_key.pem";
pub const DEVICE_SEED_FILE: &str = "device_hmac_key.bin";
pub const RSA_PRIVATE_KEY_FILE: &str = "rsa_priv_key.pem";
pub const RSA_PUBLIC_KEY_FILE: &str = "rsa_pub_key.pem";
