//! # File Operations
//!
//! Path-based wrappers around [`encrypt`](crate::encrypt) and
//! [`decrypt`](crate::decrypt), as used by the `encimg` binary.
//!
//! Outputs are staged in a temporary file next to the destination and
//! renamed into place only on success. On any error the temporary file is
//! removed and the destination is left as it was.

use crate::builders::EncryptOptions;
use crate::decryptor::{open_container, read_container, DecryptSummary};
use crate::encryptor::{encrypt, EncryptSummary};
use crate::error::{EncImgError, Result};
use crate::header::ContainerHeader;
use crate::keys::KeyMaterial;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use tempfile::NamedTempFile;

/// Run `write` against a temporary file and atomically move it to `path`.
pub fn write_atomically<F>(path: &Path, write: F) -> Result<()>
where
    F: FnOnce(&mut File) -> Result<()>,
{
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(dir)?;
    write(staged.as_file_mut())?;
    staged.as_file_mut().sync_all()?;
    staged.persist(path).map_err(|e| EncImgError::Io(e.error))?;
    Ok(())
}

/// Encrypt the file at `input` into a container at `output`.
///
/// The key file, when given, is loaded before the payload is read.
pub fn encrypt_file(
    input: &Path,
    key_file: Option<&Path>,
    output: &Path,
    options: &EncryptOptions,
) -> Result<EncryptSummary> {
    let key = key_file.map(KeyMaterial::load).transpose()?;
    let reader = BufReader::new(File::open(input)?);

    let mut summary = None;
    write_atomically(output, |file| {
        let mut writer = BufWriter::new(file);
        summary = Some(encrypt(reader, &mut writer, key.as_ref(), options)?);
        writer.flush()?;
        Ok(())
    })?;

    summary.ok_or_else(|| EncImgError::Crypto("encryption produced no summary".into()))
}

/// Decrypt the container at `input` into `output`.
///
/// The container is read and its magic and structure checked before the key
/// file is opened, so a foreign file is rejected without touching the key.
pub fn decrypt_file(input: &Path, key_file: &Path, output: &Path) -> Result<DecryptSummary> {
    let container = read_container(BufReader::new(File::open(input)?))?;
    let key = KeyMaterial::load(key_file)?;
    let plaintext = open_container(container, &key)?;

    write_atomically(output, |file| {
        file.write_all(&plaintext)?;
        Ok(())
    })?;

    let summary = DecryptSummary {
        scheme: key.scheme(),
        plaintext_len: plaintext.len(),
    };
    tracing::info!(
        scheme = %summary.scheme,
        plaintext_len = summary.plaintext_len,
        output = %output.display(),
        "container decrypted"
    );
    Ok(summary)
}

/// Parse and validate the header of the container at `input`. No key needed.
pub fn inspect_file(input: &Path) -> Result<ContainerHeader> {
    let container = read_container(BufReader::new(File::open(input)?))?;
    Ok(container.header)
}
