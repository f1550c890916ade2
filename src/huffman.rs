//! Huffman coding.
//!
//! This module derives an optimal prefix-free binary code from the symbol
//! frequencies of an input sequence and encodes the sequence with it:
//! - Frequency counting, sequential or sharded across threads
//! - Tree construction by greedy minimum-frequency merging with a
//!   deterministic tie-break
//! - Code table generation by depth-first traversal
//! - Encoding into a string of `'0'`/`'1'` digits
//!
//! # Examples
//!
//! ```rust
//! use huffcode::huffman::{build_tree, count_frequencies, encode, generate_codes, TieBreak};
//!
//! let input = "BCCABBDDAECCBBAEDDCC";
//! let frequencies = count_frequencies(input.chars());
//! let root = build_tree(&frequencies, TieBreak::Sequence).unwrap();
//! let codes = generate_codes(&root);
//! let bits = encode(input.chars(), &codes).unwrap();
//!
//! assert_eq!(root.freq(), 20);
//! assert!(codes.is_prefix_free());
//! assert_eq!(bits.len(), 45);
//! ```

use std::fmt::Debug;
use std::hash::Hash;

pub mod codes;
pub mod config;
pub mod encoder;
pub mod frequency;
pub mod pipeline;
pub mod tree;

#[cfg(test)]
mod tests;

pub use codes::{generate_codes, generate_codes_with, CodeTable, LONE_SYMBOL_CODE};
pub use config::HuffmanConfig;
pub use encoder::encode;
pub use frequency::{count_frequencies, count_frequencies_parallel, FrequencyTable};
pub use pipeline::{huffman_encode_bytes, huffman_encode_str, Encoded, HuffmanEncoder};
pub use tree::{build_tree, HuffmanNode, TieBreak};

/// An element of the alphabet being encoded.
///
/// Implemented for every type with value semantics and a total order, in
/// particular `u8` for byte input and `char` for text.
pub trait Symbol: Copy + Eq + Hash + Ord + Debug + Send + Sync {}

impl<T> Symbol for T where T: Copy + Eq + Hash + Ord + Debug + Send + Sync {}
