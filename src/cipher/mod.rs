//! Textual serialization of a prefix-code tree: the "cipher document".
//!
//! A cipher document is the sole persisted form of a tree. It records one
//! `(symbol code, codeword path)` pair per leaf, in depth-first
//! left-before-right discovery order, and intentionally drops weights: only
//! the symbol-to-codeword mapping survives a round trip, which is all a
//! decoder needs.
//!
//! Text format, repeated once per leaf with no header, footer, or count
//! field:
//!
//! ```text
//! <decimal symbol code>
//! <path string of '0'/'1', possibly empty for a single-leaf tree>
//! ```

use crate::config::TreepressConfig;
use crate::error::TreepressError;
use crate::tree::Node;

//==================================================================================
// 1. Document Model
//==================================================================================

/// One leaf of the serialized tree: its symbol and its root-to-leaf path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherEntry {
    pub symbol: u8,
    pub path: String,
}

/// An ordered sequence of leaf entries, as discovered by a depth-first
/// left-before-right traversal. Constructible only through [`from_tree`]
/// or [`parse`], which guarantee every path is a valid '0'/'1' string.
///
/// [`from_tree`]: CipherDocument::from_tree
/// [`parse`]: CipherDocument::parse
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CipherDocument {
    entries: Vec<CipherEntry>,
}

impl CipherDocument {
    /// Serializes a tree into its cipher document. Internal nodes produce no
    /// output; a single-leaf tree yields exactly one pair with an empty path.
    pub fn from_tree(root: &Node) -> Self {
        let mut entries = Vec::with_capacity(root.leaf_count());
        let mut path = String::new();
        collect(root, &mut path, &mut entries);
        Self { entries }
    }

    /// Renders the document in the line-pair text format.
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for entry in &self.entries {
            text.push_str(&entry.symbol.to_string());
            text.push('\n');
            text.push_str(&entry.path);
            text.push('\n');
        }
        text
    }

    /// Parses the line-pair text format.
    ///
    /// # Errors
    /// `TreepressError::MalformedCipher` on an empty document, a dangling
    /// symbol line with no path line, a non-integer symbol line, a symbol
    /// code outside `0..=255`, a path containing characters other than
    /// '0'/'1', or a path longer than `config.max_path_bits`.
    pub fn parse(text: &str, config: &TreepressConfig) -> Result<Self, TreepressError> {
        if text.len() > config.max_cipher_bytes {
            return Err(TreepressError::MalformedCipher(format!(
                "document size ({} bytes) exceeds the configured maximum ({})",
                text.len(),
                config.max_cipher_bytes
            )));
        }

        let mut entries = Vec::new();
        let mut lines = text.lines();
        while let Some(symbol_line) = lines.next() {
            let path_line = lines.next().ok_or_else(|| {
                TreepressError::MalformedCipher(format!(
                    "dangling symbol line {:?} with no path line",
                    symbol_line
                ))
            })?;

            let code: i64 = symbol_line.parse().map_err(|_| {
                TreepressError::MalformedCipher(format!(
                    "symbol line {:?} is not an integer",
                    symbol_line
                ))
            })?;
            let symbol = u8::try_from(code).map_err(|_| {
                TreepressError::MalformedCipher(format!(
                    "symbol code {} is outside the byte range 0..=255",
                    code
                ))
            })?;

            if path_line.len() > config.max_path_bits {
                return Err(TreepressError::MalformedCipher(format!(
                    "path for symbol {} is {} bits long, exceeding the configured maximum ({})",
                    symbol,
                    path_line.len(),
                    config.max_path_bits
                )));
            }
            if let Some(bad) = path_line.chars().find(|&c| c != '0' && c != '1') {
                return Err(TreepressError::MalformedCipher(format!(
                    "path for symbol {} contains invalid character {:?}",
                    symbol, bad
                )));
            }

            entries.push(CipherEntry {
                symbol,
                path: path_line.to_string(),
            });
        }

        if entries.is_empty() {
            return Err(TreepressError::MalformedCipher(
                "document contains no leaf entries".into(),
            ));
        }
        Ok(Self { entries })
    }

    /// Reconstructs a tree from the document by replaying each entry's path
    /// from the root, creating placeholder internal nodes as needed and
    /// attaching the leaf at the final step. Reconstructed nodes carry
    /// weight 0; weights are not part of the serialized form.
    ///
    /// # Errors
    /// `TreepressError::MalformedCipher` if entries conflict (a path passes
    /// through an already-placed leaf, or lands on an occupied node) or if
    /// the replayed tree leaves an internal node with exactly one child.
    pub fn into_tree(self) -> Result<Node, TreepressError> {
        if self.entries.is_empty() {
            return Err(TreepressError::MalformedCipher(
                "document contains no leaf entries".into(),
            ));
        }

        let mut root = ProtoNode::default();
        for entry in &self.entries {
            place(&mut root, entry, &entry.path)?;
        }
        finalize(root)
    }

    /// The leaf entries in traversal order.
    pub fn entries(&self) -> &[CipherEntry] {
        &self.entries
    }
}

fn collect(node: &Node, path: &mut String, out: &mut Vec<CipherEntry>) {
    match node {
        Node::Leaf { symbol, .. } => out.push(CipherEntry {
            symbol: *symbol,
            path: path.clone(),
        }),
        Node::Internal { left, right, .. } => {
            path.push('0');
            collect(left, path, out);
            path.pop();

            path.push('1');
            collect(right, path, out);
            path.pop();
        }
    }
}

//==================================================================================
// 2. Replay Scaffolding
//==================================================================================

/// A partially built node. Children fill in as paths are replayed; the shape
/// is checked once at the end, when the proto tree is converted to a `Node`.
#[derive(Default)]
struct ProtoNode {
    symbol: Option<u8>,
    left: Option<Box<ProtoNode>>,
    right: Option<Box<ProtoNode>>,
}

/// Recursive descent along `remaining`, bounded by `max_path_bits`.
fn place(node: &mut ProtoNode, entry: &CipherEntry, remaining: &str) -> Result<(), TreepressError> {
    let Some(step) = remaining.chars().next() else {
        if node.symbol.is_some() || node.left.is_some() || node.right.is_some() {
            return Err(TreepressError::MalformedCipher(format!(
                "conflicting placement at path {:?} for symbol {}",
                entry.path, entry.symbol
            )));
        }
        node.symbol = Some(entry.symbol);
        return Ok(());
    };

    if node.symbol.is_some() {
        return Err(TreepressError::MalformedCipher(format!(
            "path {:?} for symbol {} passes through an existing leaf",
            entry.path, entry.symbol
        )));
    }
    // Paths are validated at construction, so every step is '0' or '1'.
    let child = if step == '1' {
        &mut node.right
    } else {
        &mut node.left
    };
    place(
        child.get_or_insert_with(Default::default),
        entry,
        &remaining[1..],
    )
}

fn finalize(proto: ProtoNode) -> Result<Node, TreepressError> {
    match (proto.symbol, proto.left, proto.right) {
        (Some(symbol), None, None) => Ok(Node::leaf(symbol, 0)),
        (None, Some(left), Some(right)) => Ok(Node::Internal {
            weight: 0,
            left: Box::new(finalize(*left)?),
            right: Box::new(finalize(*right)?),
        }),
        (None, None, None) => Err(TreepressError::MalformedCipher(
            "document produced an empty tree".into(),
        )),
        (None, _, _) => Err(TreepressError::MalformedCipher(
            "document leaves an internal node with exactly one child".into(),
        )),
        // place() refuses to descend through a leaf, so a symbol-bearing
        // node can never have acquired children.
        (Some(_), _, _) => Err(TreepressError::InternalError(
            "leaf node acquired children during replay".into(),
        )),
    }
}

//==================================================================================
// 3. Unit Tests
//==================================================================================
