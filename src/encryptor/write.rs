//! src/encryptor/write.rs
//! Container write helpers

use crate::error::{EncImgError, Result};
use crate::header::ContainerHeader;
use std::io::Write;

#[inline]
pub fn write_octets<W: Write>(writer: &mut W, data: &[u8]) -> Result<()> {
    writer.write_all(data).map_err(EncImgError::Io)
}

/// Write the full 512-byte header (magic first, reserved bytes zeroed).
#[inline]
pub fn write_header<W: Write>(writer: &mut W, header: &ContainerHeader) -> Result<()> {
    write_octets(writer, &header.to_bytes())
}

/// Convert a payload length to the 32-bit header field.
#[inline]
pub fn ciphertext_len_field(len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| {
        EncImgError::Header(format!(
            "payload of {len} bytes exceeds the 32-bit length field"
        ))
    })
}
