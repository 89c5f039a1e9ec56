//! src/keys/keygen.rs
//! Key pair generation to the conventional file names.

use secure_gate::RevealSecret;
use crate::aliases::DeviceSeed32;
use crate::consts::{
    DEVICE_PRIVATE_KEY_FILE, DEVICE_PUBLIC_KEY_FILE, DEVICE_SEED_FILE, DEVICE_SEED_SIZE,
    RSA_KEY_BITS, RSA_PRIVATE_KEY_FILE, RSA_PUBLIC_KEY_FILE,
};
use crate::error::{EncImgError, Result};
use crate::file_ops::write_atomically;
use crate::keys::device::DeviceKey;
use rand::rngs::OsRng;
use rsa::pkcs1::EncodeRsaPrivateKey;
use rsa::pkcs8::{EncodePrivateKey, EncodePublicKey, LineEnding};
use rsa::RsaPrivateKey;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Paths written by a key generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyFiles {
    pub private_key: PathBuf,
    pub public_key: PathBuf,
    /// Device seed file; ECC only.
    pub seed: Option<PathBuf>,
}

/// Read a raw 32-byte device seed file.
pub fn load_device_seed(path: &Path) -> Result<DeviceSeed32> {
    let bytes = std::fs::read(path).map_err(|e| {
        EncImgError::KeyMaterial(format!("cannot read seed file {}: {e}", path.display()))
    })?;
    let seed = <[u8; DEVICE_SEED_SIZE]>::try_from(bytes.as_slice()).map_err(|_| {
        EncImgError::KeyMaterial(format!(
            "seed file must hold exactly {DEVICE_SEED_SIZE} bytes, found {}",
            bytes.len()
        ))
    })?;
    Ok(DeviceSeed32::new(seed))
}

/// Write the device key pair and its seed into `out_dir`.
///
/// With `seed == None` a fresh seed is drawn from the OS.
pub fn generate_ecc_keypair(out_dir: &Path, seed: Option<DeviceSeed32>) -> Result<KeyFiles> {
    let device = match seed {
        Some(seed) => DeviceKey::from_seed(seed)?,
        None => DeviceKey::generate()?,
    };
    write_device_key(out_dir, &device)
}

/// Persist an existing device key under the conventional names.
pub fn write_device_key(out_dir: &Path, device: &DeviceKey) -> Result<KeyFiles> {
    let private_pem = device
        .secret_key()
        .to_pkcs8_pem(LineEnding::LF)
        .map_err(|e| EncImgError::Crypto(format!("PEM encoding failed: {e}")))?;
    let public_pem = device
        .public_key()
        .to_public_key_pem(LineEnding::LF)
        .map_err(|e| EncImgError::Crypto(format!("PEM encoding failed: {e}")))?;

    let files = KeyFiles {
        private_key: out_dir.join(DEVICE_PRIVATE_KEY_FILE),
        public_key: out_dir.join(DEVICE_PUBLIC_KEY_FILE),
        seed: Some(out_dir.join(DEVICE_SEED_FILE)),
    };

    write_file(&files.private_key, private_pem.as_bytes())?;
    write_file(&files.public_key, public_pem.as_bytes())?;
    if let Some(seed_path) = &files.seed {
        write_file(seed_path, device.seed().expose_secret())?;
    }

    tracing::info!(dir = %out_dir.display(), "ECC-256 device key pair generated");
    Ok(files)
}

/// Generate an RSA-3072 key pair into `out_dir`.
///
/// The private key is PKCS#1 (`RSA PRIVATE KEY`), the public key SPKI.
pub fn generate_rsa_keypair(out_dir: &Path) -> Result<KeyFiles> {
    let private = RsaPrivateKey::new(&mut OsRng, RSA_KEY_BITS)
        .map_err(|e| EncImgError::Crypto(format!("RSA key generation failed: {e}")))?;

    let private_pem = private
        .to_pkcs1_pem(LineEnding::LF)
        .map_err(|e| EncImgError::Crypto(format!("PEM encoding failed: {e}")))?;
    let public_pem = private
        .to_public_key()
        .to_public_key_pem(LineEnding::LF)
        .map_err(|e| EncImgError::Crypto(format!("PEM encoding failed: {e}")))?;

    let files = KeyFiles {
        private_key: out_dir.join(RSA_PRIVATE_KEY_FILE),
        public_key: out_dir.join(RSA_PUBLIC_KEY_FILE),
        seed: None,
    };

    write_file(&files.private_key, private_pem.as_bytes())?;
    write_file(&files.public_key, public_pem.as_bytes())?;

    tracing::info!(dir = %out_dir.display(), "RSA-3072 key pair generated");
    Ok(files)
}

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    write_atomically(path, |file| file.write_all(contents).map_err(EncImgError::Io))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::material::{KeyMaterial, Scheme};

    #[test]
    fn ecc_files_round_trip_through_loader() {
        let dir = tempfile::tempdir().unwrap();
        let files = generate_ecc_keypair(dir.path(), Some(DeviceSeed32::new([9u8; 32]))).unwrap();

        let private = KeyMaterial::load(&files.private_key).unwrap();
        let public = KeyMaterial::load(&files.public_key).unwrap();
        assert!(matches!(private, KeyMaterial::EccPrivate(_)));
        assert!(matches!(public, KeyMaterial::EccPublic(_)));
        assert_eq!(private.ecc_public(), public.ecc_public());
        assert_eq!(public.scheme(), Scheme::Ecc256);

        let seed = load_device_seed(files.seed.as_deref().unwrap()).unwrap();
        assert_eq!(seed.expose_secret(), &[9u8; 32]);
    }

    #[test]
    fn short_seed_file_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("seed.bin");
        std::fs::write(&path, [0u8; 16]).unwrap();
        let Err(err) = load_device_seed(&path) else {
            panic!("16-byte seed accepted");
        };
        assert!(matches!(err, EncImgError::KeyMaterial(_)));
    }
}
