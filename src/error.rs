// In: src/error.rs

//! This module defines the single, unified error type for the entire treepress
//! library. It uses the `thiserror` crate to provide ergonomic, context-aware
//! error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TreepressError {
    // =========================================================================
    // === High-Level, Semantic Errors (Specific to our library's logic)
    // =========================================================================
    #[error("Frequency table contains no symbol with a positive count")]
    EmptyAlphabet,

    #[error("Symbol {symbol} at position {position} has no codeword in the encoding table")]
    UnknownSymbol { symbol: u8, position: usize },

    #[error("Malformed cipher document: {0}")]
    MalformedCipher(String),

    #[error("Artifact serialization/deserialization failed: {0}")]
    ArtifactFormat(String),

    #[error("Internal logic error (this is a bug): {0}")]
    InternalError(String),

    // =========================================================================
    // === External Error Wrappers (Using #[from] for automatic conversion)
    // =========================================================================
    /// An error originating from the underlying I/O subsystem.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An error from the Serde JSON library, typically during config parsing.
    #[error("Serde JSON error: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
