use std::collections::HashMap;
use std::fmt;

use log::debug;

use crate::error::{Error, Result};
use crate::huffman::{FrequencyTable, HuffmanNode, Symbol};

/// Code assigned to the only symbol of a one-symbol alphabet by [`generate_codes`].
pub const LONE_SYMBOL_CODE: char = '0';

/// Mapping from each symbol to its code, a non-empty string of `'0'`/`'1'` digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable<S: Symbol> {
    codes: HashMap<S, String>,
}

impl<S: Symbol> CodeTable<S> {
    /// Builds a table from explicit `(symbol, code)` pairs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidInput`] if a code is empty, contains a digit
    /// other than `0`/`1`, or a symbol is listed twice.
    pub fn from_codes<I, C>(codes: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, C)>,
        C: Into<String>,
    {
        let mut table = HashMap::new();
        for (symbol, code) in codes {
            let code = code.into();
            if code.is_empty() || !code.chars().all(|bit| bit == '0' || bit == '1') {
                return Err(Error::InvalidInput(format!(
                    "Code {:?} for symbol {:?} is not a non-empty binary string",
                    code, symbol
                )));
            }
            if table.insert(symbol, code).is_some() {
                return Err(Error::InvalidInput(format!(
                    "Symbol {:?} has more than one code",
                    symbol
                )));
            }
        }
        Ok(Self { codes: table })
    }

    /// Returns the code for `symbol`, if the table covers it.
    pub fn get(&self, symbol: &S) -> Option<&str> {
        self.codes.get(symbol).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    pub fn contains(&self, symbol: &S) -> bool {
        self.codes.contains_key(symbol)
    }

    /// Iterates over `(symbol, code)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (S, &str)> + '_ {
        self.codes.iter().map(|(&symbol, code)| (symbol, code.as_str()))
    }

    /// Returns the entries in ascending symbol order.
    pub fn sorted(&self) -> Vec<(S, &str)> {
        let mut entries: Vec<(S, &str)> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    /// Checks that no code is a prefix of another code in the table.
    pub fn is_prefix_free(&self) -> bool {
        let mut codes: Vec<&str> = self.codes.values().map(String::as_str).collect();
        // After sorting, a prefix always sorts directly before some code it prefixes.
        codes.sort_unstable();
        codes
            .windows(2)
            .all(|pair| !pair[1].starts_with(pair[0]))
    }

    /// Number of digits produced by encoding a sequence with the counts in `frequencies`.
    ///
    /// Symbols missing from the table contribute nothing.
    pub fn encoded_len(&self, frequencies: &FrequencyTable<S>) -> usize {
        frequencies
            .iter()
            .filter_map(|(symbol, count)| self.get(&symbol).map(|code| code.len() * count))
            .sum()
    }
}

impl<S: Symbol> Default for CodeTable<S> {
    fn default() -> Self {
        Self {
            codes: HashMap::new(),
        }
    }
}

impl<S: Symbol + fmt::Display> fmt::Display for CodeTable<S> {
    /// One `symbol: code` line per entry, in ascending symbol order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (symbol, code) in self.sorted() {
            writeln!(f, "{}: {}", symbol, code)?;
        }
        Ok(())
    }
}

/// Recursively build the code table mapping symbols to their Huffman codes.
///
/// If the tree consists of a single leaf (i.e. one unique symbol), the code "0" is assigned.
pub fn generate_codes<S: Symbol>(root: &HuffmanNode<S>) -> CodeTable<S> {
    table_from_root(root, LONE_SYMBOL_CODE)
}

/// Like [`generate_codes`], but assigns `lone_symbol_code` to the symbol of a
/// single-leaf tree.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `lone_symbol_code` is not `'0'` or `'1'`.
pub fn generate_codes_with<S: Symbol>(
    root: &HuffmanNode<S>,
    lone_symbol_code: char,
) -> Result<CodeTable<S>> {
    if lone_symbol_code != '0' && lone_symbol_code != '1' {
        return Err(Error::InvalidInput(format!(
            "Lone symbol code must be '0' or '1', got {:?}",
            lone_symbol_code
        )));
    }
    Ok(table_from_root(root, lone_symbol_code))
}

fn table_from_root<S: Symbol>(root: &HuffmanNode<S>, lone_symbol_code: char) -> CodeTable<S> {
    let mut table = HashMap::new();
    collect_codes(root, String::new(), lone_symbol_code, &mut table);
    debug!("generated {} codes", table.len());
    CodeTable { codes: table }
}

fn collect_codes<S: Symbol>(
    node: &HuffmanNode<S>,
    prefix: String,
    lone_symbol_code: char,
    table: &mut HashMap<S, String>,
) {
    match node {
        HuffmanNode::Leaf { symbol, .. } => {
            let code = if prefix.is_empty() {
                lone_symbol_code.to_string()
            } else {
                prefix
            };
            table.insert(*symbol, code);
        }
        HuffmanNode::Internal { left, right, .. } => {
            let mut left_prefix = prefix.clone();
            left_prefix.push('0');
            collect_codes(left, left_prefix, lone_symbol_code, table);
            let mut right_prefix = prefix;
            right_prefix.push('1');
            collect_codes(right, right_prefix, lone_symbol_code, table);
        }
    }
}
