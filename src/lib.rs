//! Huffman coding in Rust.
//!
//! Counts symbol frequencies, builds a Huffman tree with a deterministic
//! tie-break, derives a prefix-free code table from it and encodes the input
//! as a string of `'0'`/`'1'` digits. See the [`huffman`] module for the
//! individual stages and [`HuffmanEncoder`] for the whole pipeline.

pub mod error;
pub mod huffman;

pub use error::{Error, Result};
pub use huffman::{
    build_tree, count_frequencies, encode, generate_codes, huffman_encode_bytes,
    huffman_encode_str, CodeTable, Encoded, FrequencyTable, HuffmanConfig, HuffmanEncoder,
    HuffmanNode, Symbol, TieBreak,
};
