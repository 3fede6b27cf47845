//! The streaming half of the codec: a stateless encoder that pushes codeword
//! bits to a `BitSink`, and a pull-based decoder iterator that walks the tree
//! bit-by-bit from a `BitSource`.

pub mod decoder;
pub mod encoder;

pub use decoder::Decoder;
pub use encoder::{encode, encode_with_table};
