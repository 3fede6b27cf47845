//! The prefix-code tree: the owning node type, the greedy builder that
//! produces an optimal tree from frequency counts, and the derived
//! symbol-to-codeword encoding table.

pub mod builder;
pub mod table;

pub use builder::build;
pub use table::EncodingTable;

/// A node of the prefix-code tree.
///
/// Either a leaf carrying a symbol, or an internal node owning exactly two
/// children whose weight is the sum of theirs. Each child is exclusively
/// owned by its parent and there are no back references, so dropping the
/// root frees the whole tree. A node never has exactly one child; the cipher
/// deserializer rejects documents that would produce one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf {
        weight: u64,
        symbol: u8,
    },
    Internal {
        weight: u64,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    /// Constructs a leaf for `symbol` with the given weight.
    pub fn leaf(symbol: u8, weight: u64) -> Self {
        Node::Leaf { weight, symbol }
    }

    /// Combines two subtrees under a new internal node. The first argument
    /// becomes the left child.
    pub fn merge(left: Node, right: Node) -> Self {
        let weight = left.weight() + right.weight();
        Node::Internal {
            weight,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn weight(&self) -> u64 {
        match self {
            Node::Leaf { weight, .. } => *weight,
            Node::Internal { weight, .. } => *weight,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf { .. })
    }

    /// The number of symbols carried by this subtree.
    pub fn leaf_count(&self) -> usize {
        match self {
            Node::Leaf { .. } => 1,
            Node::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }
}

//==================================================================================
// Unit Tests
//==================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_sums_weights_and_keeps_order() {
        let merged = Node::merge(Node::leaf(b'a', 3), Node::leaf(b'b', 5));
        assert_eq!(merged.weight(), 8);
        assert_eq!(merged.leaf_count(), 2);
        match merged {
            Node::Internal { left, right, .. } => {
                assert_eq!(*left, Node::leaf(b'a', 3));
                assert_eq!(*right, Node::leaf(b'b', 5));
            }
            Node::Leaf { .. } => panic!("merge must produce an internal node"),
        }
    }

    #[test]
    fn test_leaf_accessors() {
        let leaf = Node::leaf(b'x', 7);
        assert!(leaf.is_leaf());
        assert_eq!(leaf.weight(), 7);
        assert_eq!(leaf.leaf_count(), 1);
    }
}
