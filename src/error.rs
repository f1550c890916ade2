//! Error types shared by every stage of the Huffman pipeline.

use thiserror::Error;

/// Result type for Huffman coding operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or applying a Huffman code.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// The input cannot be processed as given, e.g. an empty frequency table
    /// handed to the tree builder or an out-of-range configuration value.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A symbol in the input has no entry in the code table it is encoded with.
    #[error("No code for symbol {symbol} at position {position}")]
    MissingCode {
        /// `Debug` rendering of the offending symbol
        symbol: String,
        /// Zero-based index of the symbol in the input
        position: usize,
    },
}

impl Error {
    pub(crate) fn missing_code<S: std::fmt::Debug>(symbol: &S, position: usize) -> Self {
        Error::MissingCode {
            symbol: format!("{:?}", symbol),
            position,
        }
    }
}
