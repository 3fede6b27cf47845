// In: src/bridge/mod.rs

// ====================================================================================
// ARCHITECTURAL OVERVIEW: The Bridge Layer
// ====================================================================================
//
// The `bridge` is the one-shot public API of the treepress library. It wires
// the pure core components together for the common case - "compress these
// bytes", "decompress this artifact" - while each component below it stays
// independently usable.
//
// Data Flow (Compression):
//
//   1. [Stateless API (compress)]   -> Receives `&[u8]`
//         |
//         `-> a. Counts byte frequencies (the only place frequency counting
//         |      lives; the core consumes the resulting table, never raw input)
//         |
//         `-> b. `tree::build` -> tree -> `cipher::CipherDocument` -> text
//         |
//         `-> c. `codec::encode` -> packed `Msb0` bit payload
//         |
//         `-> d. `container::Artifact::to_bytes` -> final byte artifact
//
// Data Flow (Decompression):
//
//   1. [Stateless API (decompress)] -> Receives `&[u8]`
//         |
//         `-> a. `container::Artifact::from_bytes` -> cipher text + payload
//         |
//         `-> b. `cipher::CipherDocument::parse` + `into_tree` -> tree
//         |
//         `-> c. `codec::Decoder` over the payload, bounded by the stored
//                symbol count -> original bytes
//
// ====================================================================================

pub mod stateless_api;

pub use stateless_api::{analyze, compress, decompress, CompressionStats};
