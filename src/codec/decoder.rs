//! The pull-based decoding kernel.
//!
//! A `Decoder` is a lazy iterator of symbols: it holds a cursor into the
//! immutable tree, pulls one bit at a time from its `BitSource` (left on 0,
//! right on 1), emits the symbol when the cursor lands on a leaf, and resets
//! to the root. It blocks only on the source and holds no other resources,
//! so simply ceasing to pull symbols is always a safe way to stop early.
//!
//! Termination policy: if the source runs dry while the cursor sits at an
//! internal node, the unterminated partial codeword is discarded silently.
//! That is defined behavior, not an error. Byte-aligned transports pad the
//! final byte with filler bits, and this is what makes the padding
//! transparent. Padding made of complete codewords cannot be detected here;
//! callers that know the symbol count (e.g. the artifact container) bound
//! the iterator with `take`.

use crate::bitio::BitSource;
use crate::tree::Node;

/// A lazy symbol stream over a `BitSource`. Finite - bounded by the bits the
/// source can yield - and not restartable unless the source itself is.
pub struct Decoder<'t, S: BitSource> {
    root: &'t Node,
    source: S,
}

impl<'t, S: BitSource> Decoder<'t, S> {
    pub fn new(root: &'t Node, source: S) -> Self {
        Self { root, source }
    }
}

impl<'t, S: BitSource> Iterator for Decoder<'t, S> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        // Degenerate single-leaf tree: the root is always "at a leaf", so
        // every bit pulled (whatever its value) emits the sole symbol,
        // mirroring the encoder's one-bit-per-symbol convention.
        if let Node::Leaf { symbol, .. } = self.root {
            return self.source.next_bit().map(|_| *symbol);
        }

        let mut cursor = self.root;
        loop {
            match cursor {
                Node::Leaf { symbol, .. } => return Some(*symbol),
                Node::Internal { left, right, .. } => {
                    // Exhaustion mid-codeword: discard the partial walk.
                    let bit = self.source.next_bit()?;
                    cursor = if bit { &**right } else { &**left };
                }
            }
        }
    }
}

//==================================================================================
// Unit Tests
//==================================================================================
