//! Symbol sequence genome
//!
//! This module provides a fixed-length sequence genome for discrete
//! target-matching problems.

use std::fmt;
use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::genome::traits::Symbol;

/// Fixed-length sequence of symbols
///
/// The length of a sequence never changes once it is part of an
/// individual; operators only replace symbols in place.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Sequence<S> {
    symbols: Vec<S>,
}

impl<S: Symbol> Sequence<S> {
    /// Create a new sequence from the given symbols
    pub fn new(symbols: Vec<S>) -> Self {
        Self { symbols }
    }

    /// Create a sequence of `length` copies of `symbol`
    pub fn repeat(symbol: S, length: usize) -> Self {
        Self {
            symbols: vec![symbol; length],
        }
    }

    /// Number of genes
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Check if the sequence has no genes
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Get the symbol at `index`
    pub fn get(&self, index: usize) -> Option<&S> {
        self.symbols.get(index)
    }

    /// Replace the symbol at `index`; out-of-range indices are ignored
    pub fn set(&mut self, index: usize, symbol: S) {
        if let Some(slot) = self.symbols.get_mut(index) {
            *slot = symbol;
        }
    }

    /// The genes as a slice
    pub fn symbols(&self) -> &[S] {
        &self.symbols
    }

    /// The genes as a mutable slice
    pub fn symbols_mut(&mut self) -> &mut [S] {
        &mut self.symbols
    }

    /// Iterate over the genes
    pub fn iter(&self) -> std::slice::Iter<'_, S> {
        self.symbols.iter()
    }

    /// Take the underlying symbols
    pub fn into_symbols(self) -> Vec<S> {
        self.symbols
    }

    /// Length of the longest common prefix with `other`
    pub fn prefix_len(&self, other: &Self) -> usize {
        self.symbols
            .iter()
            .zip(other.symbols.iter())
            .take_while(|(a, b)| a == b)
            .count()
    }

    /// Number of positions where the two sequences differ
    ///
    /// Positions beyond the shorter sequence count as differences.
    pub fn hamming_distance(&self, other: &Self) -> usize {
        let overlap = self
            .symbols
            .iter()
            .zip(other.symbols.iter())
            .filter(|(a, b)| a != b)
            .count();
        overlap + self.len().abs_diff(other.len())
    }
}

impl<S: Symbol> Index<usize> for Sequence<S> {
    type Output = S;

    fn index(&self, index: usize) -> &Self::Output {
        &self.symbols[index]
    }
}

impl<S: Symbol> From<Vec<S>> for Sequence<S> {
    fn from(symbols: Vec<S>) -> Self {
        Self::new(symbols)
    }
}

impl<S: Symbol> FromIterator<S> for Sequence<S> {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a, S: Symbol> IntoIterator for &'a Sequence<S> {
    type Item = &'a S;
    type IntoIter = std::slice::Iter<'a, S>;

    fn into_iter(self) -> Self::IntoIter {
        self.symbols.iter()
    }
}

impl<S: Symbol> fmt::Display for Sequence<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, symbol) in self.symbols.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", symbol)?;
        }
        write!(f, "]")
    }
}
