// huffman_code/src/tree.rs

use std::collections::HashSet;
use std::fmt;

use contracts::debug_ensures;
use tracing::{debug, trace};

use crate::bits::Bit;
use crate::error::{HuffmanError, Result};
use crate::frequency::{count_frequencies, FrequencyEntry, Symbol};

/// A node of a Huffman tree. Each internal node owns its two subtrees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffNode<S> {
    Leaf {
        symbol: S,
        count: usize,
    },
    Internal {
        count: usize,
        left: Box<HuffNode<S>>,
        right: Box<HuffNode<S>>,
    },
}

impl<S: Symbol> HuffNode<S> {
    pub fn leaf(symbol: S, count: usize) -> Self {
        HuffNode::Leaf { symbol, count }
    }

    /// Occurrence count of a leaf, or the summed leaf counts below an
    /// internal node.
    pub fn count(&self) -> usize {
        match self {
            HuffNode::Leaf { count, .. } => *count,
            HuffNode::Internal { count, .. } => *count,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffNode::Leaf { .. })
    }

    /// The child selected by `bit`, or `None` on a leaf.
    pub fn child(&self, bit: Bit) -> Option<&HuffNode<S>> {
        match self {
            HuffNode::Leaf { .. } => None,
            HuffNode::Internal { left, right, .. } => match bit {
                Bit::Zero => Some(&**left),
                Bit::One => Some(&**right),
            },
        }
    }

    /// Joins the two lowest-count nodes of a round. The smallest goes on the
    /// right, the second smallest on the left.
    pub fn merge(smallest: Self, second: Self) -> Self {
        HuffNode::Internal {
            count: smallest.count() + second.count(),
            left: Box::new(second),
            right: Box::new(smallest),
        }
    }

    fn collect_leaves(&self, leaves: &mut Vec<FrequencyEntry<S>>) {
        match self {
            HuffNode::Leaf { symbol, count } => {
                leaves.push(FrequencyEntry::new(symbol.clone(), *count));
            }
            HuffNode::Internal { left, right, .. } => {
                left.collect_leaves(leaves);
                right.collect_leaves(leaves);
            }
        }
    }

    fn depth(&self) -> usize {
        match self {
            HuffNode::Leaf { .. } => 0,
            HuffNode::Internal { left, right, .. } => 1 + left.depth().max(right.depth()),
        }
    }

    fn weighted_path_length(&self, depth: usize) -> usize {
        match self {
            HuffNode::Leaf { count, .. } => count * depth,
            HuffNode::Internal { left, right, .. } => {
                left.weighted_path_length(depth + 1) + right.weighted_path_length(depth + 1)
            }
        }
    }

    fn fmt_node(&self, f: &mut fmt::Formatter<'_>, depth: usize, label: &str) -> fmt::Result {
        let indent = "  ".repeat(depth);
        match self {
            HuffNode::Leaf { symbol, count } => {
                writeln!(f, "{}{}-> Leaf: {:?} [count: {}]", indent, label, symbol, count)
            }
            HuffNode::Internal { count, left, right } => {
                writeln!(f, "{}{}-> Internal [count: {}]", indent, label, count)?;
                left.fmt_node(f, depth + 1, "L")?;
                right.fmt_node(f, depth + 1, "R")
            }
        }
    }
}

/// A finished Huffman tree. Read-only once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree<S> {
    root: HuffNode<S>,
}

impl<S: Symbol> HuffmanTree<S> {
    /// Counts `symbols` and builds the tree for them.
    ///
    /// # Errors
    ///
    /// Returns [`HuffmanError::EmptyInput`] if `symbols` is empty.
    pub fn from_symbols(symbols: &[S]) -> Result<Self> {
        build_tree(&count_frequencies(symbols))
    }

    pub fn root(&self) -> &HuffNode<S> {
        &self.root
    }

    /// Total count at the root, i.e. the length of the input the tree was
    /// built from.
    pub fn count(&self) -> usize {
        self.root.count()
    }

    /// Leaf symbols with their counts, left to right.
    pub fn leaves(&self) -> Vec<FrequencyEntry<S>> {
        let mut leaves = Vec::new();
        self.root.collect_leaves(&mut leaves);
        leaves
    }

    /// Length of the longest root-to-leaf path. Zero for a single-leaf tree.
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// Sum over leaves of count times depth. This is the number of bits the
    /// tree's own input encodes to.
    pub fn weighted_path_length(&self) -> usize {
        self.root.weighted_path_length(0)
    }
}

impl<S: Symbol> fmt::Display for HuffmanTree<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.fmt_node(f, 0, "root")
    }
}

/// Builds a Huffman tree by repeatedly merging the two lowest-count nodes.
///
/// Each round stable-sorts the working set by count, so among equal counts
/// the node that entered the set first is taken first. Leaves enter in the
/// order of `frequencies`; merged nodes are appended at the end.
///
/// # Arguments
///
/// * `frequencies` - One entry per distinct symbol, each with a count of at
///                   least one.
///
/// # Returns
///
/// * `Result<HuffmanTree<S>>` - The tree whose leaves are exactly the given
///                              entries, or an error.
///
/// # Errors
///
/// Returns [`HuffmanError::EmptyInput`] if `frequencies` is empty, and
/// [`HuffmanError::InvalidFrequencies`] if a symbol is listed twice or has a
/// zero count.
///
/// # Examples
///
/// ```
/// use huffman_code::{build_tree, FrequencyEntry};
///
/// let freqs = vec![FrequencyEntry::new('x', 3), FrequencyEntry::new('y', 1)];
/// let tree = build_tree(&freqs).unwrap();
/// assert_eq!(tree.count(), 4);
/// assert_eq!(tree.depth(), 1);
/// ```
#[debug_ensures(ret.as_ref().map_or(true, |tree| {
    tree.count() == frequencies.iter().map(|e| e.count).sum::<usize>()
}))]
pub fn build_tree<S: Symbol>(frequencies: &[FrequencyEntry<S>]) -> Result<HuffmanTree<S>> {
    if frequencies.is_empty() {
        return Err(HuffmanError::EmptyInput);
    }
    validate_frequencies(frequencies)?;

    let mut nodes: Vec<HuffNode<S>> = frequencies
        .iter()
        .map(|entry| HuffNode::leaf(entry.symbol.clone(), entry.count))
        .collect();

    while nodes.len() > 1 {
        // sort_by_key is stable
        nodes.sort_by_key(HuffNode::count);

        let smallest = nodes.remove(0);
        let second = nodes.remove(0);
        trace!(
            smallest = smallest.count(),
            second = second.count(),
            remaining = nodes.len(),
            "merging nodes"
        );
        nodes.push(HuffNode::merge(smallest, second));
    }

    let root = nodes.pop().ok_or(HuffmanError::EmptyInput)?;
    let tree = HuffmanTree { root };
    debug!(
        leaves = frequencies.len(),
        depth = tree.depth(),
        total = tree.count(),
        "built huffman tree"
    );
    Ok(tree)
}

fn validate_frequencies<S: Symbol>(frequencies: &[FrequencyEntry<S>]) -> Result<()> {
    let mut seen = HashSet::with_capacity(frequencies.len());
    for entry in frequencies {
        if entry.count == 0 {
            return Err(HuffmanError::InvalidFrequencies(format!(
                "symbol {:?} has a zero count",
                entry.symbol
            )));
        }
        if !seen.insert(&entry.symbol) {
            return Err(HuffmanError::InvalidFrequencies(format!(
                "symbol {:?} is listed more than once",
                entry.symbol
            )));
        }
    }
    Ok(())
}
