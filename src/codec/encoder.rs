//! The pure, stateless encoding kernel.
//!
//! Encoding materializes the full encoding table before emitting a single
//! bit, then streams symbol-by-symbol: each input symbol's codeword is
//! appended to the sink in left-to-right bit order. Nothing is buffered
//! beyond the table itself.

use crate::bitio::BitSink;
use crate::error::TreepressError;
use crate::tree::{EncodingTable, Node};

/// Encodes `symbols` against `root`, writing codeword bits to `sink`.
/// Returns the number of symbols encoded.
///
/// # Errors
/// `TreepressError::UnknownSymbol` if a symbol has no codeword in the tree's
/// table, naming the symbol and its position. Encoding stops at that point;
/// bits already written for prior symbols remain in the sink (silently
/// skipping would desynchronize decode, and rollback is the caller's job).
pub fn encode<I, S>(root: &Node, symbols: I, sink: &mut S) -> Result<u64, TreepressError>
where
    I: IntoIterator<Item = u8>,
    S: BitSink,
{
    let table = EncodingTable::from_tree(root);
    encode_with_table(&table, symbols, sink)
}

/// Encodes against an already-derived table. Useful when many sequences are
/// encoded against the same tree within one session.
pub fn encode_with_table<I, S>(
    table: &EncodingTable,
    symbols: I,
    sink: &mut S,
) -> Result<u64, TreepressError>
where
    I: IntoIterator<Item = u8>,
    S: BitSink,
{
    let mut count = 0u64;
    for (position, symbol) in symbols.into_iter().enumerate() {
        let codeword = table
            .codeword(symbol)
            .ok_or(TreepressError::UnknownSymbol { symbol, position })?;
        for bit in codeword {
            sink.write_bit(*bit);
        }
        count += 1;
    }
    Ok(count)
}

//==================================================================================
// Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitio::pack_bits;
    use crate::tree::builder::build;
    use bitvec::prelude::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_encode_pins_msb_first_byte_layout() {
        // {a:1, b:2}: a=0, b=1. "ab" packs to 01 followed by six padding
        // zeros, i.e. 0x40. This pins the crate's MSB-first convention.
        let root = build(&BTreeMap::from([(b'a', 1), (b'b', 2)])).unwrap();
        let mut sink: BitVec<u8, Msb0> = BitVec::new();
        let count = encode(&root, *b"ab", &mut sink).unwrap();
        assert_eq!(count, 2);
        assert_eq!(pack_bits(sink), vec![0b0100_0000]);
    }

    #[test]
    fn test_unknown_symbol_reports_position_and_keeps_prior_bits() {
        let root = build(&BTreeMap::from([(b'a', 1), (b'b', 2)])).unwrap();
        let mut sink: BitVec<u8, Msb0> = BitVec::new();
        let err = encode(&root, *b"abz", &mut sink).unwrap_err();
        match err {
            TreepressError::UnknownSymbol { symbol, position } => {
                assert_eq!(symbol, b'z');
                assert_eq!(position, 2);
            }
            other => panic!("expected UnknownSymbol, got {:?}", other),
        }
        // "ab" was already emitted; no rollback.
        assert_eq!(sink.len(), 2);
    }

    #[test]
    fn test_degenerate_tree_emits_one_bit_per_symbol() {
        let root = build(&BTreeMap::from([(b'x', 7)])).unwrap();
        let mut sink: BitVec<u8, Msb0> = BitVec::new();
        let count = encode(&root, *b"xxxxx", &mut sink).unwrap();
        assert_eq!(count, 5);
        assert_eq!(sink.len(), 5);
        assert!(sink.not_any());
    }

    #[test]
    fn test_empty_input_writes_nothing() {
        let root = build(&BTreeMap::from([(b'a', 1), (b'b', 2)])).unwrap();
        let mut sink: BitVec<u8, Msb0> = BitVec::new();
        assert_eq!(encode(&root, std::iter::empty(), &mut sink).unwrap(), 0);
        assert!(sink.is_empty());
    }
}
