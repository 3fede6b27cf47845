// In: src/bridge/stateless_api.rs

use std::collections::BTreeMap;
use std::sync::Arc;

use bitvec::prelude::*;

use crate::bitio::{pack_bits, SliceBitSource};
use crate::cipher::CipherDocument;
use crate::codec::{encode, Decoder};
use crate::config::TreepressConfig;
use crate::container::Artifact;
use crate::error::TreepressError;
use crate::tree;

/// The public-facing struct for artifact analysis results, returned by `analyze`.
#[derive(Debug)]
pub struct CompressionStats {
    pub header_size: usize,
    pub cipher_size: usize,
    pub payload_size: usize,
    pub total_size: usize,
    /// The number of symbols encoded in the payload.
    pub total_symbols: u64,
}

/// Compresses a byte slice into a self-contained artifact.
pub fn compress(input: &[u8]) -> Result<Vec<u8>, TreepressError> {
    // Since this is a stateless API, we don't have a user-provided config.
    compress_with_config(input, Arc::new(TreepressConfig::default()))
}

/// Compresses with an explicit, shared config.
///
/// # Errors
/// `TreepressError::EmptyAlphabet` for empty input: with no symbol counts
/// there is no tree to build, and the caller must decide what an empty
/// artifact should mean.
pub fn compress_with_config(
    input: &[u8],
    config: Arc<TreepressConfig>,
) -> Result<Vec<u8>, TreepressError> {
    let frequencies = count_frequencies(input);
    let root = tree::build(&frequencies)?;

    let cipher_text = CipherDocument::from_tree(&root).to_text();
    if cipher_text.len() > config.max_cipher_bytes {
        // Unreachable with a byte alphabet (256 leaves cap the document at a
        // few KB), but the writer honors the same limit the reader enforces.
        return Err(TreepressError::ArtifactFormat(format!(
            "cipher document ({} bytes) exceeds the configured maximum ({})",
            cipher_text.len(),
            config.max_cipher_bytes
        )));
    }

    let mut sink: BitVec<u8, Msb0> = BitVec::new();
    let total_symbols = encode(&root, input.iter().copied(), &mut sink)?;
    log::debug!(
        "compressed {} symbols into {} bits ({} distinct, {} cipher bytes)",
        total_symbols,
        sink.len(),
        frequencies.len(),
        cipher_text.len()
    );

    let artifact = Artifact {
        total_symbols,
        cipher_text,
        payload: pack_bits(sink),
    };
    artifact.to_bytes()
}

/// Decompresses an artifact produced by [`compress`] back into the original bytes.
pub fn decompress(bytes: &[u8]) -> Result<Vec<u8>, TreepressError> {
    decompress_with_config(bytes, Arc::new(TreepressConfig::default()))
}

/// Decompresses with an explicit, shared config.
pub fn decompress_with_config(
    bytes: &[u8],
    config: Arc<TreepressConfig>,
) -> Result<Vec<u8>, TreepressError> {
    let artifact = Artifact::from_bytes(bytes, &config)?;
    let root = CipherDocument::parse(&artifact.cipher_text, &config)?.into_tree()?;

    let source = SliceBitSource::new(&artifact.payload);
    let decoded: Vec<u8> = Decoder::new(&root, source)
        .take(artifact.total_symbols as usize)
        .collect();

    // The decoder silently discards a trailing partial codeword, so the only
    // way to come up short is a payload truncated below its declared count.
    if (decoded.len() as u64) < artifact.total_symbols {
        return Err(TreepressError::ArtifactFormat(format!(
            "bit payload ended after {} of {} declared symbols",
            decoded.len(),
            artifact.total_symbols
        )));
    }
    Ok(decoded)
}

/// Analyzes a compressed artifact without decoding the payload.
/// This function acts as a simple facade over the efficient `peek_info`.
pub fn analyze(bytes: &[u8]) -> Result<CompressionStats, TreepressError> {
    let config = TreepressConfig::default();
    let info = Artifact::peek_info(bytes, &config)?;

    Ok(CompressionStats {
        header_size: info.header_size,
        cipher_size: info.cipher_size,
        payload_size: info.payload_size,
        total_size: bytes.len(),
        total_symbols: info.total_symbols,
    })
}

/// Counts byte occurrences. Frequency counting is an embedding concern, not
/// part of the codec core; the core only ever sees the finished table.
fn count_frequencies(input: &[u8]) -> BTreeMap<u8, u64> {
    let mut counts = BTreeMap::new();
    for &byte in input {
        *counts.entry(byte).or_insert(0u64) += 1;
    }
    counts
}
