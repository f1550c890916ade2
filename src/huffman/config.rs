use crate::error::{Error, Result};
use crate::huffman::codes::LONE_SYMBOL_CODE;
use crate::huffman::TieBreak;

/// Configuration for a [`HuffmanEncoder`](crate::huffman::HuffmanEncoder).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanConfig {
    /// Ordering applied to nodes of equal frequency during tree construction
    pub tie_break: TieBreak,
    /// Code given to the symbol of a one-symbol alphabet, `'0'` or `'1'`
    pub lone_symbol_code: char,
    /// Inputs with at least this many symbols are counted in parallel
    pub parallel_threshold: usize,
    /// Number of symbols per shard when counting in parallel
    pub shard_size: usize,
}

impl Default for HuffmanConfig {
    fn default() -> Self {
        Self {
            tie_break: TieBreak::Sequence,
            lone_symbol_code: LONE_SYMBOL_CODE,
            parallel_threshold: 1 << 20,
            shard_size: 1 << 16,
        }
    }
}

impl HuffmanConfig {
    /// Checks that every field holds a usable value.
    pub fn validate(&self) -> Result<()> {
        if self.lone_symbol_code != '0' && self.lone_symbol_code != '1' {
            return Err(Error::InvalidInput(format!(
                "Lone symbol code must be '0' or '1', got {:?}",
                self.lone_symbol_code
            )));
        }
        if self.shard_size == 0 {
            return Err(Error::InvalidInput(
                "Shard size must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
