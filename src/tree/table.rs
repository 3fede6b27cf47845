//! The symbol-to-codeword mapping derived from a prefix-code tree.
//!
//! A codeword is the root-to-leaf path of its symbol: a 0 bit per left
//! descent, a 1 bit per right descent. Because every codeword terminates at
//! a distinct leaf, no codeword can be a prefix of another; the table
//! inherits the prefix-free property from the tree's shape for free.

use std::collections::BTreeMap;

use bitvec::prelude::*;

use crate::tree::Node;

/// Symbol -> codeword mapping, materialized once per encoding session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodingTable {
    codewords: BTreeMap<u8, BitVec<u8, Msb0>>,
}

impl EncodingTable {
    /// Derives the table by a single root-to-leaf walk of `root`.
    ///
    /// Degenerate single-leaf tree: a lone leaf has no left/right
    /// distinction, so its codeword is fixed at the single bit 0. The
    /// decoder mirrors this one-bit-per-symbol convention.
    pub fn from_tree(root: &Node) -> Self {
        let mut codewords = BTreeMap::new();
        match root {
            Node::Leaf { symbol, .. } => {
                codewords.insert(*symbol, bitvec![u8, Msb0; 0]);
            }
            Node::Internal { .. } => {
                let mut path: BitVec<u8, Msb0> = BitVec::new();
                collect(root, &mut path, &mut codewords);
            }
        }
        Self { codewords }
    }

    /// Looks up the codeword for `symbol`, if it is in the alphabet.
    pub fn codeword(&self, symbol: u8) -> Option<&BitSlice<u8, Msb0>> {
        self.codewords.get(&symbol).map(|bits| bits.as_bitslice())
    }

    /// The number of symbols in the alphabet.
    pub fn len(&self) -> usize {
        self.codewords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codewords.is_empty()
    }

    /// Iterates codewords in ascending symbol order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, &BitSlice<u8, Msb0>)> {
        self.codewords
            .iter()
            .map(|(&symbol, bits)| (symbol, bits.as_bitslice()))
    }

    /// The weighted cost of this code for the given frequency table:
    /// the sum over symbols of frequency times codeword length. Huffman's
    /// theorem guarantees the builder minimizes this quantity.
    pub fn weighted_cost(&self, frequencies: &BTreeMap<u8, u64>) -> u64 {
        self.codewords
            .iter()
            .map(|(symbol, bits)| {
                frequencies.get(symbol).copied().unwrap_or(0) * bits.len() as u64
            })
            .sum()
    }
}

fn collect(node: &Node, path: &mut BitVec<u8, Msb0>, out: &mut BTreeMap<u8, BitVec<u8, Msb0>>) {
    match node {
        Node::Leaf { symbol, .. } => {
            out.insert(*symbol, path.clone());
        }
        Node::Internal { left, right, .. } => {
            path.push(false);
            collect(left, path, out);
            path.pop();

            path.push(true);
            collect(right, path, out);
            path.pop();
        }
    }
}

//==================================================================================
// Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::builder::build;

    #[test]
    fn test_prefix_free_property() {
        let freqs = BTreeMap::from([
            (b'a', 45),
            (b'b', 13),
            (b'c', 12),
            (b'd', 16),
            (b'e', 9),
            (b'f', 5),
        ]);
        let table = EncodingTable::from_tree(&build(&freqs).unwrap());
        assert_eq!(table.len(), 6);

        let words: Vec<&BitSlice<u8, Msb0>> = table.iter().map(|(_, bits)| bits).collect();
        for (i, a) in words.iter().enumerate() {
            for (j, b) in words.iter().enumerate() {
                if i != j {
                    assert!(
                        !b.starts_with(a),
                        "codeword {:?} is a prefix of {:?}",
                        a,
                        b
                    );
                }
            }
        }
    }

    #[test]
    fn test_degenerate_single_leaf_codeword_is_one_zero_bit() {
        let table = EncodingTable::from_tree(&Node::leaf(b'x', 7));
        let word = table.codeword(b'x').unwrap();
        assert_eq!(word.len(), 1);
        assert!(!word[0]);
    }

    #[test]
    fn test_missing_symbol_has_no_codeword() {
        let freqs = BTreeMap::from([(b'a', 1), (b'b', 1)]);
        let table = EncodingTable::from_tree(&build(&freqs).unwrap());
        assert!(table.codeword(b'z').is_none());
    }

    #[test]
    fn test_two_symbol_codewords() {
        // {a:1, b:2}: a pops first, so a=0 and b=1.
        let freqs = BTreeMap::from([(b'a', 1), (b'b', 2)]);
        let table = EncodingTable::from_tree(&build(&freqs).unwrap());
        assert_eq!(table.codeword(b'a').unwrap(), bits![u8, Msb0; 0]);
        assert_eq!(table.codeword(b'b').unwrap(), bits![u8, Msb0; 1]);
    }
}
