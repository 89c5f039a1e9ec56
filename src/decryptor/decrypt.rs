//! src/decryptor/decrypt.rs
//! Container decryption

use crate::crypto::aead::open_in_place;
use crate::decryptor::read::{read_container, Container};
use crate::decryptor::recover::recover_content_key;
use crate::error::Result;
use crate::keys::{KeyMaterial, Scheme};
use std::io::{Read, Write};

/// What a successful [`decrypt`] produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecryptSummary {
    pub scheme: Scheme,
    pub plaintext_len: usize,
}

/// Recover the content key and authenticate-decrypt a validated container.
///
/// Returns the plaintext only after the tag has verified.
pub fn open_container(container: Container, key: &KeyMaterial) -> Result<Vec<u8>> {
    let content_key = recover_content_key(&container.header, key)?;

    let mut buffer = container.ciphertext;
    open_in_place(
        &content_key,
        &container.header.iv,
        &mut buffer,
        &container.header.auth_tag,
    )?;
    Ok(buffer)
}

/// Decrypt a container.
///
/// Magic and structure are checked before `key` is used. Nothing is
/// written to `output` unless authentication succeeds.
///
/// # Errors
///
/// - [`EncImgError::InvalidMagic`](crate::EncImgError::InvalidMagic) - not a container
/// - [`EncImgError::Header`](crate::EncImgError::Header) - truncated or inconsistent length
/// - [`EncImgError::KeyMaterial`](crate::EncImgError::KeyMaterial) - public key, wrong
///   key, or corrupted key-blob
/// - [`EncImgError::Authentication`](crate::EncImgError::Authentication) - tag mismatch
/// - [`EncImgError::Io`](crate::EncImgError::Io) - read or write failure
pub fn decrypt<R: Read, W: Write>(
    input: R,
    mut output: W,
    key: &KeyMaterial,
) -> Result<DecryptSummary> {
    let container = read_container(input)?;
    let plaintext = open_container(container, key)?;

    output.write_all(&plaintext)?;
    output.flush()?;

    let summary = DecryptSummary {
        scheme: key.scheme(),
        plaintext_len: plaintext.len(),
    };
    tracing::info!(scheme = %summary.scheme, plaintext_len = summary.plaintext_len, "container decrypted");
    Ok(summary)
}
