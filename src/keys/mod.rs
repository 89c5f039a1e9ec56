// src/keys/mod.rs

//! Key material: loading, scheme detection, device keys and generation.

pub mod device;
pub mod keygen;
pub mod material;

pub use device::DeviceKey;
pub use keygen::{generate_ecc_keypair, generate_rsa_keypair, load_device_seed, KeyFiles};
pub use material::{resolve_scheme, KeyMaterial, Scheme};
