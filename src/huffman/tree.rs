use std::cmp::Ordering;
use std::collections::BinaryHeap;

use log::{debug, trace};

use crate::error::{Error, Result};
use crate::huffman::{FrequencyTable, Symbol};

/// Represents a node in the Huffman tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HuffmanNode<S: Symbol> {
    /// A leaf node contains a symbol and its frequency.
    Leaf { symbol: S, freq: usize },
    /// An internal node with left and right children and combined frequency.
    Internal {
        freq: usize,
        left: Box<HuffmanNode<S>>,
        right: Box<HuffmanNode<S>>,
    },
}

impl<S: Symbol> HuffmanNode<S> {
    /// Returns the frequency of the node.
    pub fn freq(&self) -> usize {
        match self {
            HuffmanNode::Leaf { freq, .. } => *freq,
            HuffmanNode::Internal { freq, .. } => *freq,
        }
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self, HuffmanNode::Leaf { .. })
    }

    /// Length of the longest root-to-leaf path; a lone leaf has height 0.
    pub fn height(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 0,
            HuffmanNode::Internal { left, right, .. } => 1 + left.height().max(right.height()),
        }
    }

    /// Number of leaves, i.e. distinct symbols, below this node.
    pub fn leaf_count(&self) -> usize {
        match self {
            HuffmanNode::Leaf { .. } => 1,
            HuffmanNode::Internal { left, right, .. } => left.leaf_count() + right.leaf_count(),
        }
    }

    fn merge(left: Self, right: Self) -> Self {
        HuffmanNode::Internal {
            freq: left.freq() + right.freq(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// How the tree builder orders nodes of equal frequency.
///
/// Every policy yields an optimal code; they differ only in which of the
/// equally good trees is produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TieBreak {
    /// The node created first is extracted first. Leaves are created in
    /// ascending symbol order, internal nodes after them in merge order.
    #[default]
    Sequence,
    /// The deeper subtree is extracted first, then creation order, so merged
    /// nodes are preferred over leaves of the same frequency. Produces the
    /// optimal tree with the longest maximum code.
    Deepest,
}

/// A helper wrapper for HuffmanNode for use in a BinaryHeap.
/// We want the node with the smallest key to have highest priority.
#[derive(Debug)]
struct NodeWrapper<S: Symbol> {
    freq: usize,
    rank: usize,
    seq: usize,
    height: usize,
    node: HuffmanNode<S>,
}

impl<S: Symbol> NodeWrapper<S> {
    fn new(node: HuffmanNode<S>, height: usize, seq: usize, tie_break: TieBreak) -> Self {
        let rank = match tie_break {
            TieBreak::Sequence => 0,
            TieBreak::Deepest => usize::MAX - height,
        };
        Self {
            freq: node.freq(),
            rank,
            seq,
            height,
            node,
        }
    }

    fn key(&self) -> (usize, usize, usize) {
        (self.freq, self.rank, self.seq)
    }
}

impl<S: Symbol> PartialEq for NodeWrapper<S> {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl<S: Symbol> Eq for NodeWrapper<S> {}

impl<S: Symbol> Ord for NodeWrapper<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse: lower key should come first.
        other.key().cmp(&self.key())
    }
}

impl<S: Symbol> PartialOrd for NodeWrapper<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Build the Huffman tree given a frequency table.
///
/// Nodes are merged two at a time, lowest frequency first; the first node
/// extracted becomes the left child. Ties are resolved by `tie_break`, so the
/// same table always produces the same tree. A table with a single symbol
/// yields a lone leaf.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if the frequency table is empty.
pub fn build_tree<S: Symbol>(
    freq_table: &FrequencyTable<S>,
    tie_break: TieBreak,
) -> Result<HuffmanNode<S>> {
    let leaves = freq_table.sorted();
    debug!(
        "building Huffman tree over {} symbols ({:?} tie-break)",
        leaves.len(),
        tie_break
    );

    let mut heap = BinaryHeap::with_capacity(leaves.len());
    let mut seq = 0;
    for (symbol, freq) in leaves {
        heap.push(NodeWrapper::new(
            HuffmanNode::Leaf { symbol, freq },
            0,
            seq,
            tie_break,
        ));
        seq += 1;
    }

    // Combine nodes until only one tree remains. Every pass either returns
    // the root or shrinks the heap by one, so falling out of the loop means
    // the heap started empty.
    while let Some(first) = heap.pop() {
        let Some(second) = heap.pop() else {
            debug!(
                "Huffman tree complete: weight {}, height {}",
                first.freq, first.height
            );
            return Ok(first.node);
        };
        trace!(
            "merging weights {} and {} into node {}",
            first.freq,
            second.freq,
            seq
        );
        let height = 1 + first.height.max(second.height);
        let merged = HuffmanNode::merge(first.node, second.node);
        heap.push(NodeWrapper::new(merged, height, seq, tie_break));
        seq += 1;
    }

    Err(Error::InvalidInput(
        "Cannot build a Huffman tree from an empty frequency table".to_string(),
    ))
}
