// In: src/config.rs

//! The single source of truth for all treepress configuration.
//!
//! This module defines the unified `TreepressConfig` struct, which is designed
//! to be created once at the application boundary (e.g., from a user's JSON
//! settings) and then passed down through the system via a shared, read-only
//! `Arc<TreepressConfig>`.
//!
//! Every field is a parsing hard-limit. The codec itself needs no tuning
//! knobs, but the cipher deserializer and the artifact reader both consume
//! attacker-controllable input, and each length they trust must be validated
//! against a sane maximum before any allocation happens.

use serde::{Deserialize, Serialize};

use crate::error::TreepressError;

/// The single, unified configuration for the entire treepress library.
/// This struct is created once and shared throughout the system via an `Arc`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub struct TreepressConfig {
    /// The maximum accepted size of a cipher document, in bytes. Bounds the
    /// allocation made when an artifact header declares its cipher length.
    #[serde(default = "default_max_cipher_bytes")]
    pub max_cipher_bytes: usize,

    /// The maximum accepted codeword path length, in bits. A tree over the
    /// full 256-symbol byte alphabet can never nest deeper than 255, so any
    /// longer path in a cipher document is rejected as malformed.
    #[serde(default = "default_max_path_bits")]
    pub max_path_bits: usize,
}

impl Default for TreepressConfig {
    fn default() -> Self {
        Self {
            max_cipher_bytes: default_max_cipher_bytes(),
            max_path_bits: default_max_path_bits(),
        }
    }
}

impl TreepressConfig {
    /// Parses a config from its JSON representation. Missing fields fall back
    /// to their defaults.
    pub fn from_json(json: &str) -> Result<Self, TreepressError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Helper for `serde` to provide a default for `max_cipher_bytes`. (16MB)
fn default_max_cipher_bytes() -> usize {
    16 * 1024 * 1024
}

/// Helper for `serde` to provide a default for `max_path_bits`.
fn default_max_path_bits() -> usize {
    255
}

//==================================================================================
// Unit Tests
//==================================================================================
