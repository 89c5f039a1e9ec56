//! # Header Layout and Parsing
//!
//! The container starts with a fixed 512-byte header:
//!
//! | Field | Offset | Size |
//! |---|---|---|
//! | magic (LE `0x0788b6cf`) | 0 | 4 |
//! | key-blob | 4 | 384 |
//! | IV | 388 | 16 |
//! | ciphertext length (LE u32) | 404 | 4 |
//! | auth tag | 408 | 16 |
//! | reserved | 424 | 88 |
//!
//! Inside the key-blob the ECC scheme places the ephemeral point (64 bytes)
//! and the HKDF salt (32 bytes); the rest of the slot is zero. The RSA scheme
//! fills the whole slot with the wrapped content key.
//!
//! Every offset comes from [`LAYOUT`], shared by the writer and the reader.

use secure_gate::RevealSecret;
use crate::aliases::{AuthTag16, Iv16, KdfSalt32};
use crate::consts::{
    AUTH_TAG_SIZE, CIPHERTEXT_LEN_SIZE, ECC_PUBLIC_POINT_SIZE, ENC_IMG_MAGIC, HEADER_SIZE,
    IV_SIZE, KDF_SALT_SIZE, KEY_BLOB_SIZE, MAGIC_SIZE,
};
use crate::error::{EncImgError, Result};
use crate::keys::Scheme;
use std::fmt;
use std::io::Read;
use std::ops::Range;

/// Offset and length of one header field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpan {
    pub offset: usize,
    pub len: usize,
}

impl FieldSpan {
    const fn after(prev: FieldSpan, len: usize) -> Self {
        Self {
            offset: prev.end(),
            len,
        }
    }

    pub const fn end(&self) -> usize {
        self.offset + self.len
    }

    pub const fn range(&self) -> Range<usize> {
        self.offset..self.end()
    }
}

/// Byte layout of the header, computed once at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HeaderLayout {
    pub magic: FieldSpan,
    pub key_blob: FieldSpan,
    pub iv: FieldSpan,
    pub ciphertext_len: FieldSpan,
    pub auth_tag: FieldSpan,
    pub reserved: FieldSpan,
    /// ECC sub-fields, absolute offsets inside the header.
    pub ecc_public_point: FieldSpan,
    pub ecc_salt: FieldSpan,
    pub ecc_reserved: FieldSpan,
}

impl HeaderLayout {
    const fn new() -> Self {
        let magic = FieldSpan {
            offset: 0,
            len: MAGIC_SIZE,
        };
        let key_blob = FieldSpan::after(magic, KEY_BLOB_SIZE);
        let iv = FieldSpan::after(key_blob, IV_SIZE);
        let ciphertext_len = FieldSpan::after(iv, CIPHERTEXT_LEN_SIZE);
        let auth_tag = FieldSpan::after(ciphertext_len, AUTH_TAG_SIZE);
        let reserved = FieldSpan::after(auth_tag, HEADER_SIZE - auth_tag.end());

        let ecc_public_point = FieldSpan {
            offset: key_blob.offset,
            len: ECC_PUBLIC_POINT_SIZE,
        };
        let ecc_salt = FieldSpan::after(ecc_public_point, KDF_SALT_SIZE);
        let ecc_reserved = FieldSpan::after(ecc_salt, key_blob.end() - ecc_salt.end());

        Self {
            magic,
            key_blob,
            iv,
            ciphertext_len,
            auth_tag,
            reserved,
            ecc_public_point,
            ecc_salt,
            ecc_reserved,
        }
    }
}

/// The one layout used by both encoder and decoder.
pub const LAYOUT: HeaderLayout = HeaderLayout::new();

const _: () = assert!(LAYOUT.reserved.end() == HEADER_SIZE);
const _: () = assert!(LAYOUT.auth_tag.end() < HEADER_SIZE);
const _: () = assert!(LAYOUT.ecc_reserved.end() == LAYOUT.key_blob.end());

/// Scheme-specific content of the key-blob slot.
pub enum KeyBlob {
    /// PKCS#1 v1.5 wrapped content key, fills the whole slot.
    Rsa { wrapped: [u8; KEY_BLOB_SIZE] },
    /// Ephemeral P-256 point (X‖Y) and HKDF salt.
    Ecc {
        public_point: [u8; ECC_PUBLIC_POINT_SIZE],
        salt: KdfSalt32,
    },
}

impl KeyBlob {
    pub const fn scheme(&self) -> Scheme {
        match self {
            KeyBlob::Rsa { .. } => Scheme::Rsa3072,
            KeyBlob::Ecc { .. } => Scheme::Ecc256,
        }
    }

    /// Serialize into the 384-byte slot, zero-padding the ECC tail.
    pub fn to_bytes(&self) -> [u8; KEY_BLOB_SIZE] {
        match self {
            KeyBlob::Rsa { wrapped } => *wrapped,
            KeyBlob::Ecc { public_point, salt } => {
                let mut slot = [0u8; KEY_BLOB_SIZE];
                slot[blob_range(LAYOUT.ecc_public_point)].copy_from_slice(public_point);
                slot[blob_range(LAYOUT.ecc_salt)].copy_from_slice(salt.expose_secret());
                slot
            }
        }
    }

    /// Interpret a raw slot according to `scheme`.
    ///
    /// The ECC tail is not checked, like the header's reserved bytes.
    pub fn from_bytes(scheme: Scheme, slot: &[u8; KEY_BLOB_SIZE]) -> Self {
        match scheme {
            Scheme::Rsa3072 => KeyBlob::Rsa { wrapped: *slot },
            Scheme::Ecc256 => {
                let mut public_point = [0u8; ECC_PUBLIC_POINT_SIZE];
                public_point.copy_from_slice(&slot[blob_range(LAYOUT.ecc_public_point)]);
                let mut salt = [0u8; KDF_SALT_SIZE];
                salt.copy_from_slice(&slot[blob_range(LAYOUT.ecc_salt)]);
                KeyBlob::Ecc {
                    public_point,
                    salt: KdfSalt32::new(salt),
                }
            }
        }
    }
}

/// Range of an ECC sub-field relative to the key-blob slot.
const fn blob_range(span: FieldSpan) -> Range<usize> {
    let start = span.offset - LAYOUT.key_blob.offset;
    start..start + span.len
}

/// Parsed 512-byte header.
///
/// The key-blob is kept raw because its meaning depends on the scheme of the
/// key used to open the container.
pub struct ContainerHeader {
    pub key_blob: [u8; KEY_BLOB_SIZE],
    pub iv: Iv16,
    pub ciphertext_len: u32,
    pub auth_tag: AuthTag16,
}

impl ContainerHeader {
    /// Serialize to exactly [`HEADER_SIZE`] bytes; reserved bytes are zero.
    pub fn to_bytes(&self) -> [u8; HEADER_SIZE] {
        let mut out = [0u8; HEADER_SIZE];
        out[LAYOUT.magic.range()].copy_from_slice(&ENC_IMG_MAGIC.to_le_bytes());
        out[LAYOUT.key_blob.range()].copy_from_slice(&self.key_blob);
        out[LAYOUT.iv.range()].copy_from_slice(self.iv.expose_secret());
        out[LAYOUT.ciphertext_len.range()].copy_from_slice(&self.ciphertext_len.to_le_bytes());
        out[LAYOUT.auth_tag.range()].copy_from_slice(self.auth_tag.expose_secret());
        out
    }

    /// Parse a header from the start of `bytes`.
    ///
    /// Magic is checked first, so any input of at least four bytes with the
    /// wrong magic is [`EncImgError::InvalidMagic`]. Shorter input, or input
    /// shorter than the header, is a structural error. Reserved bytes are
    /// skipped without validation.
    pub fn parse(bytes: &[u8]) -> Result<Self> {
        let magic = bytes
            .get(LAYOUT.magic.range())
            .ok_or_else(|| EncImgError::Header(format!("input too short: {} bytes", bytes.len())))?;
        check_magic(magic)?;

        if bytes.len() < HEADER_SIZE {
            return Err(EncImgError::Header(format!(
                "truncated header: {} of {HEADER_SIZE} bytes",
                bytes.len()
            )));
        }

        let mut key_blob = [0u8; KEY_BLOB_SIZE];
        key_blob.copy_from_slice(&bytes[LAYOUT.key_blob.range()]);
        let mut iv = [0u8; IV_SIZE];
        iv.copy_from_slice(&bytes[LAYOUT.iv.range()]);
        let mut len = [0u8; CIPHERTEXT_LEN_SIZE];
        len.copy_from_slice(&bytes[LAYOUT.ciphertext_len.range()]);
        let mut tag = [0u8; AUTH_TAG_SIZE];
        tag.copy_from_slice(&bytes[LAYOUT.auth_tag.range()]);

        Ok(Self {
            key_blob,
            iv: Iv16::new(iv),
            ciphertext_len: u32::from_le_bytes(len),
            auth_tag: AuthTag16::new(tag),
        })
    }

    /// Key-blob interpreted for `scheme`.
    pub fn key_blob_for(&self, scheme: Scheme) -> KeyBlob {
        KeyBlob::from_bytes(scheme, &self.key_blob)
    }
}

impl fmt::Debug for ContainerHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContainerHeader")
            .field("ciphertext_len", &self.ciphertext_len)
            .finish_non_exhaustive()
    }
}

impl fmt::Display for ContainerHeader {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "magic:             0x{ENC_IMG_MAGIC:08x}")?;
        writeln!(f, "header size:       {HEADER_SIZE}")?;
        writeln!(f, "ciphertext length: {}", self.ciphertext_len)?;
        writeln!(f, "iv:                {}", hex::encode(self.iv.expose_secret()))?;
        writeln!(f, "auth tag:          {}", hex::encode(self.auth_tag.expose_secret()))?;
        write!(f, "key blob head:     {}", hex::encode(&self.key_blob[..16]))
    }
}

fn check_magic(magic: &[u8]) -> Result<()> {
    let mut raw = [0u8; MAGIC_SIZE];
    raw.copy_from_slice(magic);
    let found = u32::from_le_bytes(raw);
    if found != ENC_IMG_MAGIC {
        return Err(EncImgError::InvalidMagic { found });
    }
    Ok(())
}

/// Check that a reader starts with the container magic.
///
/// Reads only the first four bytes. Useful for format sniffing before
/// committing to a full read.
///
/// # Errors
///
/// - [`EncImgError::Header`] if fewer than four bytes are available
/// - [`EncImgError::InvalidMagic`] if the magic does not match
/// - [`EncImgError::Io`] on other read failures
///
/// # Example
///
/// ```
/// use encimg_rs::read_magic;
/// use std::io::Cursor;
///
/// assert!(read_magic(Cursor::new([0xcf, 0xb6, 0x88, 0x07])).is_ok());
/// assert!(read_magic(Cursor::new(b"AES\x03")).is_err());
/// ```
pub fn read_magic<R: Read>(mut reader: R) -> Result<()> {
    let mut magic = [0u8; MAGIC_SIZE];
    reader.read_exact(&mut magic).map_err(|e| {
        if e.kind() == std::io::ErrorKind::UnexpectedEof {
            EncImgError::Header("input too short for magic".into())
        } else {
            EncImgError::Io(e)
        }
    })?;
    check_magic(&magic)
}
