//! This file is the root of the `treepress` Rust crate.
//!
//! treepress is a Huffman prefix-code compression core. It builds an optimal
//! binary symbol tree from byte frequency statistics, serializes that tree to
//! a compact textual "cipher document" (so a decoder can be reconstructed
//! without the original frequencies), and streams symbol sequences through
//! bit-level encode/decode against the tree.
//!
//! Layering, leaves first:
//! 1.  `bitio` - the `BitSource`/`BitSink` traits the codec consumes, plus
//!     in-memory adapters over packed `Msb0` bit buffers.
//! 2.  `tree` - the owning tree node type, the greedy builder, and the
//!     derived symbol-to-codeword `EncodingTable`.
//! 3.  `cipher` - the textual tree serialization format.
//! 4.  `codec` - the streaming encoder and the pull-based decoder iterator.
//! 5.  `container` - the self-describing byte artifact bundling a cipher
//!     document with its bit payload.
//! 6.  `bridge` - the stateless one-shot `compress`/`decompress`/`analyze`
//!     API most callers should use.

//==================================================================================
// 0. Constants
//==================================================================================
/// The crate version, automatically set from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

//==================================================================================
// 1. Module Declarations
//==================================================================================
pub mod bitio;
pub mod bridge;
pub mod cipher;
pub mod codec;
pub mod config;
pub mod container;
pub mod error;
pub mod tree;

//==================================================================================
// 2. Public Re-exports
//==================================================================================
pub use bridge::stateless_api::{analyze, compress, decompress, CompressionStats};
pub use config::TreepressConfig;
pub use error::TreepressError;
pub use tree::Node;
