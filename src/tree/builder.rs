//! Greedy construction of an optimal prefix-code tree from frequency counts.
//!
//! Classic Huffman construction: seed a min-heap with one leaf per symbol
//! keyed by weight, then repeatedly merge the two lightest nodes under a new
//! internal node until one root remains. O(n log n) in the number of distinct
//! symbols.
//!
//! Tie-break contract (fixed so two builders given the same frequency table
//! always produce structurally identical trees): when weights are equal,
//! leaves order by ascending symbol code, every leaf orders before every
//! internal node, and internal nodes order among themselves by creation
//! order. The first node extracted from the heap becomes the left child.

use std::cmp::{Ordering, Reverse};
use std::collections::{BTreeMap, BinaryHeap};

use crate::error::TreepressError;
use crate::tree::Node;

/// A heap entry pairing a subtree with its deterministic tie-break rank.
/// Leaves take their symbol code (0..=255) as rank; internal nodes take
/// 256 plus a creation counter, so they sort after equal-weight leaves.
struct HeapEntry {
    rank: u64,
    node: Node,
}

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.node
            .weight()
            .cmp(&other.node.weight())
            .then(self.rank.cmp(&other.rank))
    }
}

/// Builds the optimal prefix-code tree for the given frequency table.
///
/// Symbols with a zero count are excluded. A table with exactly one positive
/// entry yields a single leaf with no children; callers must handle that
/// degenerate shape (the encoding table fixes its codeword at one bit).
///
/// # Errors
/// `TreepressError::EmptyAlphabet` if no symbol has a positive count.
pub fn build(frequencies: &BTreeMap<u8, u64>) -> Result<Node, TreepressError> {
    let mut heap: BinaryHeap<Reverse<HeapEntry>> = frequencies
        .iter()
        .filter(|(_, &weight)| weight > 0)
        .map(|(&symbol, &weight)| {
            Reverse(HeapEntry {
                rank: symbol as u64,
                node: Node::leaf(symbol, weight),
            })
        })
        .collect();

    if heap.is_empty() {
        return Err(TreepressError::EmptyAlphabet);
    }
    log::debug!("seeded build heap with {} leaves", heap.len());

    let mut next_rank = 256u64;
    while heap.len() > 1 {
        // len() > 1 guarantees both pops succeed, so these .unwrap()s
        // can never panic.
        let Reverse(first) = heap.pop().unwrap();
        let Reverse(second) = heap.pop().unwrap();
        heap.push(Reverse(HeapEntry {
            rank: next_rank,
            node: Node::merge(first.node, second.node),
        }));
        next_rank += 1;
    }

    // The loop leaves exactly one entry behind.
    let Reverse(root) = heap.pop().unwrap();
    log::debug!(
        "built tree: {} leaves, root weight {}",
        root.node.leaf_count(),
        root.node.weight()
    );
    Ok(root.node)
}

//==================================================================================
// Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::EncodingTable;

    fn clrs_frequencies() -> BTreeMap<u8, u64> {
        BTreeMap::from([
            (b'a', 45),
            (b'b', 13),
            (b'c', 12),
            (b'd', 16),
            (b'e', 9),
            (b'f', 5),
        ])
    }

    #[test]
    fn test_empty_alphabet_is_rejected() {
        let empty = BTreeMap::new();
        assert!(matches!(build(&empty), Err(TreepressError::EmptyAlphabet)));

        // Zero counts are excluded, so an all-zero table is also empty.
        let zeros = BTreeMap::from([(b'a', 0), (b'b', 0)]);
        assert!(matches!(build(&zeros), Err(TreepressError::EmptyAlphabet)));
    }

    #[test]
    fn test_single_symbol_builds_a_lone_leaf() {
        let freqs = BTreeMap::from([(b'x', 7)]);
        let root = build(&freqs).unwrap();
        assert_eq!(root, Node::leaf(b'x', 7));
    }

    #[test]
    fn test_root_weight_equals_total_count() {
        let freqs = clrs_frequencies();
        let root = build(&freqs).unwrap();
        assert_eq!(root.weight(), 100);
        assert_eq!(root.leaf_count(), 6);
    }

    #[test]
    fn test_weighted_cost_is_huffman_optimal() {
        // The classic CLRS example table; the optimal weighted cost is 224
        // regardless of tie-break choices.
        let freqs = clrs_frequencies();
        let root = build(&freqs).unwrap();
        let table = EncodingTable::from_tree(&root);
        assert_eq!(table.weighted_cost(&freqs), 224);
    }

    #[test]
    fn test_tie_break_is_deterministic() {
        let freqs = BTreeMap::from([(b'a', 2), (b'b', 2), (b'c', 2), (b'd', 2)]);
        let first = build(&freqs).unwrap();
        let second = build(&freqs).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_tie_break_contract_pins_exact_codewords() {
        // With the documented tie-break (leaves by ascending symbol, then
        // internals by creation order), the CLRS table resolves to exactly
        // these codewords.
        let root = build(&clrs_frequencies()).unwrap();
        let table = EncodingTable::from_tree(&root);
        let rendered: Vec<(u8, String)> = table
            .iter()
            .map(|(symbol, bits)| {
                let word: String = bits.iter().map(|b| if *b { '1' } else { '0' }).collect();
                (symbol, word)
            })
            .collect();
        assert_eq!(
            rendered,
            vec![
                (b'a', "0".to_string()),
                (b'b', "101".to_string()),
                (b'c', "100".to_string()),
                (b'd', "111".to_string()),
                (b'e', "1101".to_string()),
                (b'f', "1100".to_string()),
            ]
        );
    }
}
