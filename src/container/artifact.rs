//! Defines the self-describing on-disk format for a compressed artifact.
//! This module is the single source of truth for serialization,
//! deserialization, and efficient metadata peeking of the artifact.
//!
//! Layout, all integers little-endian:
//!
//! ```text
//! magic "TPRS" (4) | version u16 (2) | total_symbols u64 (8) |
//! cipher_len u32 (4) | cipher document UTF-8 text | bit payload
//! ```
//!
//! The payload is the MSB-first packed codeword stream, zero-padded to a
//! byte boundary. `total_symbols` bounds decoding, so the padding can never
//! materialize phantom trailing symbols even when some codeword is all
//! zeros.

use std::io::{Cursor, Read};

use crate::config::TreepressConfig;
use crate::error::TreepressError;

//==================================================================================
// Format Constants
//==================================================================================

/// The magic number identifying a treepress artifact.
pub const ARTIFACT_MAGIC: &[u8; 4] = b"TPRS";
/// The current version of the artifact format.
pub const ARTIFACT_FORMAT_VERSION: u16 = 1;
/// The fixed header size in bytes: magic(4) + ver(2) + symbols(8) + cipher_len(4).
const HEADER_SIZE: usize = 18;

//==================================================================================
// Public Structs
//==================================================================================

/// Metadata extracted from an artifact's header without reading the payload.
/// This is the return type of the efficient `peek_info` function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    /// The version of the artifact format that was parsed.
    pub format_version: u16,
    /// The number of symbols encoded in the payload.
    pub total_symbols: u64,
    /// The fixed header size in bytes.
    pub header_size: usize,
    /// The size of the embedded cipher document in bytes.
    pub cipher_size: usize,
    /// The size of the packed bit payload in bytes.
    pub payload_size: usize,
}

/// A fully materialized artifact in memory: the target of deserialization
/// and the source of serialization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub total_symbols: u64,
    /// The cipher document in its line-pair text form.
    pub cipher_text: String,
    /// The MSB-first packed codeword stream, zero-padded to a byte.
    pub payload: Vec<u8>,
}

//==================================================================================
// Core Implementation
//==================================================================================

impl Artifact {
    /// Serializes the artifact into its canonical byte form. The layout is
    /// fully determined by the fields, so equal artifacts always produce
    /// identical bytes.
    pub fn to_bytes(&self) -> Result<Vec<u8>, TreepressError> {
        let cipher_len = u32::try_from(self.cipher_text.len()).map_err(|_| {
            TreepressError::ArtifactFormat(format!(
                "cipher document ({} bytes) exceeds the u32 length field",
                self.cipher_text.len()
            ))
        })?;

        let mut buf =
            Vec::with_capacity(HEADER_SIZE + self.cipher_text.len() + self.payload.len());
        buf.extend_from_slice(ARTIFACT_MAGIC);
        buf.extend_from_slice(&ARTIFACT_FORMAT_VERSION.to_le_bytes());
        buf.extend_from_slice(&self.total_symbols.to_le_bytes());
        buf.extend_from_slice(&cipher_len.to_le_bytes());
        buf.extend_from_slice(self.cipher_text.as_bytes());
        buf.extend_from_slice(&self.payload);
        Ok(buf)
    }

    /// Deserializes a full byte slice into an `Artifact`, reading the cipher
    /// text and the entire payload into memory.
    pub fn from_bytes(bytes: &[u8], config: &TreepressConfig) -> Result<Self, TreepressError> {
        // peek_info handles all header parsing and bounds validation;
        // from_bytes only reads the two variable sections behind it.
        let info = Self::peek_info(bytes, config)?;

        let mut cursor = Cursor::new(bytes);
        cursor.set_position(HEADER_SIZE as u64);
        let map_err = |e: std::io::Error| TreepressError::ArtifactFormat(e.to_string());

        let mut cipher_buf = vec![0; info.cipher_size];
        cursor.read_exact(&mut cipher_buf).map_err(map_err)?;
        let cipher_text = String::from_utf8(cipher_buf)
            .map_err(|e| TreepressError::ArtifactFormat(e.to_string()))?;

        let mut payload = vec![0; info.payload_size];
        cursor.read_exact(&mut payload).map_err(map_err)?;

        Ok(Self {
            total_symbols: info.total_symbols,
            cipher_text,
            payload,
        })
    }

    /// Peeks into a serialized artifact's header to extract metadata without
    /// touching the (potentially large) cipher and payload sections.
    pub fn peek_info(bytes: &[u8], config: &TreepressConfig) -> Result<HeaderInfo, TreepressError> {
        if bytes.len() < HEADER_SIZE {
            return Err(TreepressError::ArtifactFormat(format!(
                "artifact is too small to be valid: minimum size {}, got {}",
                HEADER_SIZE,
                bytes.len()
            )));
        }

        let mut cursor = Cursor::new(bytes);
        let map_err = |e: std::io::Error| TreepressError::ArtifactFormat(e.to_string());

        let mut magic_buf = [0u8; 4];
        cursor.read_exact(&mut magic_buf).map_err(map_err)?;
        if magic_buf != *ARTIFACT_MAGIC {
            return Err(TreepressError::ArtifactFormat(
                "invalid artifact magic number".into(),
            ));
        }

        let mut u16_buf = [0u8; 2];
        cursor.read_exact(&mut u16_buf).map_err(map_err)?;
        let version = u16::from_le_bytes(u16_buf);
        if version != ARTIFACT_FORMAT_VERSION {
            return Err(TreepressError::ArtifactFormat(format!(
                "unsupported artifact version: expected {}, got {}",
                ARTIFACT_FORMAT_VERSION, version
            )));
        }

        let mut u64_buf = [0u8; 8];
        cursor.read_exact(&mut u64_buf).map_err(map_err)?;
        let total_symbols = u64::from_le_bytes(u64_buf);

        let mut u32_buf = [0u8; 4];
        cursor.read_exact(&mut u32_buf).map_err(map_err)?;
        let cipher_size = u32::from_le_bytes(u32_buf) as usize;

        // Validate the declared length against the configured hard limit
        // before trusting it for any allocation.
        if cipher_size > config.max_cipher_bytes {
            return Err(TreepressError::ArtifactFormat(format!(
                "declared cipher size ({} bytes) exceeds the configured maximum ({})",
                cipher_size, config.max_cipher_bytes
            )));
        }
        if HEADER_SIZE.saturating_add(cipher_size) > bytes.len() {
            return Err(TreepressError::ArtifactFormat(
                "declared cipher size exceeds the buffer length".into(),
            ));
        }

        Ok(HeaderInfo {
            format_version: version,
            total_symbols,
            header_size: HEADER_SIZE,
            cipher_size,
            payload_size: bytes.len() - HEADER_SIZE - cipher_size,
        })
    }
}

//==================================================================================
// Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_artifact() -> Artifact {
        Artifact {
            total_symbols: 14,
            cipher_text: "97\n0\n98\n10\n99\n11\n".to_string(),
            payload: vec![0b0110_0100, 0b1000_0000],
        }
    }

    #[test]
    fn test_artifact_roundtrip_is_successful() {
        let config = TreepressConfig::default();
        let original = create_test_artifact();
        let bytes = original.to_bytes().unwrap();
        let reconstructed = Artifact::from_bytes(&bytes, &config).unwrap();
        assert_eq!(original, reconstructed);
    }

    #[test]
    fn test_to_bytes_is_deterministic() {
        let bytes1 = create_test_artifact().to_bytes().unwrap();
        let bytes2 = create_test_artifact().to_bytes().unwrap();
        assert_eq!(bytes1, bytes2);
    }

    #[test]
    fn test_peek_info_is_correct() {
        let config = TreepressConfig::default();
        let original = create_test_artifact();
        let bytes = original.to_bytes().unwrap();
        let info = Artifact::peek_info(&bytes, &config).unwrap();

        assert_eq!(info.format_version, ARTIFACT_FORMAT_VERSION);
        assert_eq!(info.total_symbols, 14);
        assert_eq!(info.cipher_size, original.cipher_text.len());
        assert_eq!(info.payload_size, 2);
        assert_eq!(
            info.header_size + info.cipher_size + info.payload_size,
            bytes.len()
        );
    }

    #[test]
    fn test_parsing_errors_are_handled_gracefully() {
        let config = TreepressConfig::default();

        // Too short.
        assert!(matches!(
            Artifact::peek_info(b"short", &config),
            Err(TreepressError::ArtifactFormat(_))
        ));

        // Bad magic number.
        assert!(matches!(
            Artifact::peek_info(b"BAD_MAGIC_and_the_rest_is_long_enough", &config),
            Err(TreepressError::ArtifactFormat(_))
        ));

        // Bad version.
        let mut bytes = create_test_artifact().to_bytes().unwrap();
        bytes[4] = 0xFF;
        bytes[5] = 0xFF;
        assert!(matches!(
            Artifact::peek_info(&bytes, &config),
            Err(TreepressError::ArtifactFormat(_))
        ));
    }

    #[test]
    fn test_malformed_lengths_are_rejected() {
        let config = TreepressConfig::default();

        // Declared cipher length larger than the buffer.
        let mut bytes = create_test_artifact().to_bytes().unwrap();
        bytes[14] = 0xFF;
        bytes[15] = 0x00;
        bytes[16] = 0x00;
        bytes[17] = 0x00;
        assert!(matches!(
            Artifact::peek_info(&bytes, &config),
            Err(TreepressError::ArtifactFormat(_))
        ));

        // Declared cipher length above the configured hard limit.
        let tight = TreepressConfig {
            max_cipher_bytes: 4,
            ..Default::default()
        };
        let bytes = create_test_artifact().to_bytes().unwrap();
        assert!(matches!(
            Artifact::peek_info(&bytes, &tight),
            Err(TreepressError::ArtifactFormat(_))
        ));
    }
}
