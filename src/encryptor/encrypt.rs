//! src/encryptor/encrypt.rs
//! Container encryption

use crate::aliases::Iv16;
use crate::builders::EncryptOptions;
use crate::consts::HEADER_SIZE;
use crate::crypto::aead::seal_in_place;
use crate::crypto::rng::SecureRandomExt;
use crate::encryptor::establish::establish_content_key;
use crate::encryptor::write::{ciphertext_len_field, write_header, write_octets};
use crate::error::Result;
use crate::header::ContainerHeader;
use crate::keys::{DeviceKey, KeyMaterial, Scheme};
use std::io::{Read, Write};

/// What a successful [`encrypt`] produced.
#[derive(Debug)]
pub struct EncryptSummary {
    pub scheme: Scheme,
    pub payload_len: usize,
    /// Header plus ciphertext.
    pub container_len: usize,
    /// Device key generated because no key was supplied. The caller must
    /// persist it or the container can never be opened.
    pub generated_device: Option<DeviceKey>,
}

/// Encrypt a payload into a container.
///
/// The whole payload is buffered; key establishment happens before
/// anything is written, so key errors leave `output` untouched.
///
/// `key` may be a public or private key of either scheme. With `key == None`
/// the fallback scheme from `options` applies (ECC-256 by default, with a
/// generated device key).
///
/// # Errors
///
/// - [`EncImgError::KeyMaterial`](crate::EncImgError::KeyMaterial) for an
///   unusable key or RSA without a key
/// - [`EncImgError::Header`](crate::EncImgError::Header) for payloads over 4 GiB
/// - [`EncImgError::Io`](crate::EncImgError::Io) on read or write failure
pub fn encrypt<R, W>(
    mut input: R,
    mut output: W,
    key: Option<&KeyMaterial>,
    options: &EncryptOptions,
) -> Result<EncryptSummary>
where
    R: Read,
    W: Write,
{
    let mut payload = Vec::new();
    input.read_to_end(&mut payload)?;
    let payload_len = payload.len();
    let ciphertext_len = ciphertext_len_field(payload_len)?;

    let established = establish_content_key(key, options)?;
    let scheme = established.key_blob.scheme();

    // Fresh nonce per container; never caller-supplied.
    let iv = Iv16::random();
    let auth_tag = seal_in_place(&established.content_key, &iv, &mut payload)?;

    let header = ContainerHeader {
        key_blob: established.key_blob.to_bytes(),
        iv,
        ciphertext_len,
        auth_tag,
    };

    write_header(&mut output, &header)?;
    write_octets(&mut output, &payload)?;
    output.flush()?;

    tracing::info!(%scheme, payload_len, "payload encrypted");

    Ok(EncryptSummary {
        scheme,
        payload_len,
        container_len: HEADER_SIZE + payload_len,
        generated_device: established.generated_device,
    })
}
