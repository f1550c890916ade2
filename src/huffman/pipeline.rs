use log::debug;

use crate::error::Result;
use crate::huffman::{
    build_tree, count_frequencies, count_frequencies_parallel, encode, generate_codes_with,
    CodeTable, FrequencyTable, HuffmanConfig, Symbol,
};

/// Output of a full encoding run: the digit string and the code table that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded<S: Symbol> {
    /// Concatenated codes, one `'0'`/`'1'` character per digit
    pub bits: String,
    /// Code for every distinct input symbol
    pub codes: CodeTable<S>,
    /// Number of symbols in the original input
    pub symbol_count: usize,
}

impl<S: Symbol> Encoded<S> {
    fn empty() -> Self {
        Self {
            bits: String::new(),
            codes: CodeTable::default(),
            symbol_count: 0,
        }
    }

    /// Number of binary digits in the output.
    pub fn bit_len(&self) -> usize {
        self.bits.len()
    }

    /// Mean code length per input symbol, `0.0` for an empty input.
    pub fn average_code_len(&self) -> f64 {
        if self.symbol_count == 0 {
            0.0
        } else {
            self.bit_len() as f64 / self.symbol_count as f64
        }
    }
}

/// Runs frequency counting, tree construction, code generation and encoding
/// in sequence under one configuration.
#[derive(Debug, Clone, Default)]
pub struct HuffmanEncoder {
    config: HuffmanConfig,
}

impl HuffmanEncoder {
    /// Creates an encoder, rejecting invalid configurations.
    pub fn new(config: HuffmanConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &HuffmanConfig {
        &self.config
    }

    /// Counts symbol frequencies, sharding across threads for large inputs.
    pub fn frequencies<S: Symbol>(&self, input: &[S]) -> Result<FrequencyTable<S>> {
        if input.len() >= self.config.parallel_threshold {
            count_frequencies_parallel(input, self.config.shard_size)
        } else {
            Ok(count_frequencies(input.iter().copied()))
        }
    }

    /// Derives a Huffman code for `input` and encodes it.
    ///
    /// An empty input yields an empty result without building a tree.
    pub fn encode<S: Symbol>(&self, input: &[S]) -> Result<Encoded<S>> {
        if input.is_empty() {
            debug!("empty input, nothing to encode");
            return Ok(Encoded::empty());
        }

        let frequencies = self.frequencies(input)?;
        let root = build_tree(&frequencies, self.config.tie_break)?;
        let codes = generate_codes_with(&root, self.config.lone_symbol_code)?;
        let bits = encode(input.iter().copied(), &codes)?;
        debug!(
            "encoded {} symbols into {} digits using {} codes",
            input.len(),
            bits.len(),
            codes.len()
        );

        Ok(Encoded {
            bits,
            codes,
            symbol_count: input.len(),
        })
    }
}

/// Convenience function: encodes the characters of `input` with the default configuration.
pub fn huffman_encode_str(input: &str) -> Result<Encoded<char>> {
    let symbols: Vec<char> = input.chars().collect();
    HuffmanEncoder::default().encode(&symbols)
}

/// Convenience function: encodes the bytes of `input` with the default configuration.
pub fn huffman_encode_bytes(input: &[u8]) -> Result<Encoded<u8>> {
    HuffmanEncoder::default().encode(input)
}
