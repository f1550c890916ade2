use std::collections::HashMap;

use log::debug;
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::huffman::Symbol;

/// Occurrence counts for every distinct symbol of an input sequence.
///
/// A table is built once and never mutated afterwards; combining tables
/// produces a new one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrequencyTable<S: Symbol> {
    counts: HashMap<S, usize>,
}

impl<S: Symbol> FrequencyTable<S> {
    /// Builds a table from explicit `(symbol, count)` pairs.
    ///
    /// Repeated symbols have their counts added together. Symbols whose total
    /// count is zero do not occur and are left out, so every entry is at least 1.
    pub fn from_counts<I>(counts: I) -> Self
    where
        I: IntoIterator<Item = (S, usize)>,
    {
        let mut table = HashMap::new();
        for (symbol, count) in counts.into_iter().filter(|&(_, count)| count > 0) {
            *table.entry(symbol).or_insert(0) += count;
        }
        Self { counts: table }
    }

    /// Returns the count recorded for `symbol`, if it occurs.
    pub fn get(&self, symbol: &S) -> Option<usize> {
        self.counts.get(symbol).copied()
    }

    /// Number of distinct symbols.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts, i.e. the length of the counted sequence.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Iterates over `(symbol, count)` pairs in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = (S, usize)> + '_ {
        self.counts.iter().map(|(&symbol, &count)| (symbol, count))
    }

    /// Returns the entries in ascending symbol order.
    pub fn sorted(&self) -> Vec<(S, usize)> {
        let mut entries: Vec<(S, usize)> = self.iter().collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        entries
    }

    /// Combines two tables by adding their counts symbol by symbol.
    ///
    /// The operation is commutative and associative, so partial tables from
    /// independent shards can be merged in any order.
    pub fn merge(mut self, other: Self) -> Self {
        for (symbol, count) in other.counts {
            *self.counts.entry(symbol).or_insert(0) += count;
        }
        self
    }
}

impl<S: Symbol> Default for FrequencyTable<S> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }
}

impl<S: Symbol> FromIterator<S> for FrequencyTable<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        count_frequencies(iter)
    }
}

/// Build a frequency table mapping each symbol in `input` to its number of occurrences.
///
/// An empty input yields an empty table.
pub fn count_frequencies<S, I>(input: I) -> FrequencyTable<S>
where
    S: Symbol,
    I: IntoIterator<Item = S>,
{
    let mut counts = HashMap::new();
    for symbol in input {
        *counts.entry(symbol).or_insert(0) += 1;
    }
    FrequencyTable { counts }
}

/// Counts `input` in shards of `shard_size` symbols on the rayon thread pool
/// and merges the partial tables.
///
/// The result is identical to [`count_frequencies`] over the same input.
///
/// # Errors
///
/// Returns [`Error::InvalidInput`] if `shard_size` is zero.
pub fn count_frequencies_parallel<S: Symbol>(
    input: &[S],
    shard_size: usize,
) -> Result<FrequencyTable<S>> {
    if shard_size == 0 {
        return Err(Error::InvalidInput(
            "Shard size must be positive".to_string(),
        ));
    }

    debug!(
        "counting {} symbols in {} shards",
        input.len(),
        input.len().div_ceil(shard_size)
    );

    Ok(input
        .par_chunks(shard_size)
        .map(|shard| count_frequencies(shard.iter().copied()))
        .reduce(FrequencyTable::default, FrequencyTable::merge))
}
