//! src/decryptor/read.rs
//! Container reading and structural validation.
//!
//! Nothing here touches key material: a container that fails these checks
//! is rejected before any key is loaded.

use crate::consts::HEADER_SIZE;
use crate::error::{EncImgError, Result};
use crate::header::ContainerHeader;
use std::io::Read;

/// A structurally valid container: parsed header plus its ciphertext.
pub struct Container {
    pub header: ContainerHeader,
    pub ciphertext: Vec<u8>,
}

impl Container {
    /// Validate an in-memory container.
    ///
    /// Checks, in order: magic, header length, and that the ciphertext
    /// length field equals the bytes after the header.
    pub fn from_bytes(mut bytes: Vec<u8>) -> Result<Self> {
        let header = ContainerHeader::parse(&bytes)?;

        let actual = bytes.len() - HEADER_SIZE;
        let declared = header.ciphertext_len as usize;
        if declared != actual {
            return Err(EncImgError::Header(format!(
                "ciphertext length field says {declared} bytes, container holds {actual}"
            )));
        }

        let ciphertext = bytes.split_off(HEADER_SIZE);
        tracing::debug!(ciphertext_len = declared, "magic verified, header parsed");
        Ok(Self { header, ciphertext })
    }
}

/// Read a whole container from `reader` and validate its structure.
pub fn read_container<R: Read>(mut reader: R) -> Result<Container> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Container::from_bytes(bytes)
}
