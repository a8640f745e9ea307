//! Symbol alphabets
//!
//! This module provides the `Alphabet` type, the finite set of values a gene
//! may take.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::GenomeError;
use crate::genome::sequence::Sequence;
use crate::genome::traits::Symbol;

/// A non-empty set of distinct symbols
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alphabet<S> {
    symbols: Vec<S>,
}

impl<S: Symbol> Alphabet<S> {
    /// Create a new alphabet
    ///
    /// Fails if `symbols` is empty or contains a symbol more than once.
    pub fn new(symbols: Vec<S>) -> Result<Self, GenomeError> {
        if symbols.is_empty() {
            return Err(GenomeError::InvalidStructure(
                "Alphabet must contain at least one symbol".to_string(),
            ));
        }
        for (i, symbol) in symbols.iter().enumerate() {
            if symbols[..i].contains(symbol) {
                return Err(GenomeError::InvalidStructure(format!(
                    "Duplicate symbol in alphabet: {}",
                    symbol
                )));
            }
        }
        Ok(Self { symbols })
    }

    /// Number of distinct symbols
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Always false; an alphabet cannot be constructed empty
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Check whether `symbol` belongs to the alphabet
    pub fn contains(&self, symbol: &S) -> bool {
        self.symbols.contains(symbol)
    }

    /// The symbols in declaration order
    pub fn symbols(&self) -> &[S] {
        &self.symbols
    }

    /// Draw one symbol uniformly at random
    pub fn sample<R: Rng>(&self, rng: &mut R) -> S {
        self.symbols[rng.gen_range(0..self.symbols.len())].clone()
    }

    /// Draw a sequence of `len` independent uniform symbols
    pub fn random_sequence<R: Rng>(&self, len: usize, rng: &mut R) -> Sequence<S> {
        (0..len).map(|_| self.sample(rng)).collect()
    }

    /// Check that every symbol of `sequence` belongs to the alphabet
    pub fn validate(&self, sequence: &Sequence<S>) -> Result<(), GenomeError> {
        match sequence.iter().find(|s| !self.contains(s)) {
            Some(symbol) => Err(GenomeError::UnknownSymbol(symbol.to_string())),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_alphabet_new() {
        let alphabet = Alphabet::new(vec!['a', 'b', 'c']).unwrap();
        assert_eq!(alphabet.len(), 3);
        assert!(!alphabet.is_empty());
        assert!(alphabet.contains(&'b'));
        assert!(!alphabet.contains(&'z'));
    }

    #[test]
    fn test_alphabet_rejects_empty() {
        let result: Result<Alphabet<char>, _> = Alphabet::new(vec![]);
        assert!(matches!(result, Err(GenomeError::InvalidStructure(_))));
    }

    #[test]
    fn test_alphabet_rejects_duplicates() {
        let result = Alphabet::new(vec!['a', 'b', 'a']);
        assert!(matches!(result, Err(GenomeError::InvalidStructure(_))));
    }

    #[test]
    fn test_alphabet_sample_stays_inside() {
        let mut rng = StdRng::seed_from_u64(7);
        let alphabet = Alphabet::new(vec![1u8, 2, 3]).unwrap();
        for _ in 0..200 {
            assert!(alphabet.contains(&alphabet.sample(&mut rng)));
        }
    }

    #[test]
    fn test_alphabet_sample_reaches_every_symbol() {
        let mut rng = StdRng::seed_from_u64(11);
        let alphabet = Alphabet::new(vec!['x', 'y', 'z', 'w']).unwrap();
        let mut seen = vec![false; alphabet.len()];
        for _ in 0..500 {
            let s = alphabet.sample(&mut rng);
            let idx = alphabet.symbols().iter().position(|c| *c == s).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&b| b));
    }

    #[test]
    fn test_random_sequence_length() {
        let mut rng = StdRng::seed_from_u64(3);
        let alphabet = Alphabet::new(vec!['a', 'b']).unwrap();
        let seq = alphabet.random_sequence(11, &mut rng);
        assert_eq!(seq.len(), 11);
        assert!(alphabet.validate(&seq).is_ok());
    }

    #[test]
    fn test_validate_unknown_symbol() {
        let alphabet = Alphabet::new(vec!['a', 'b']).unwrap();
        let seq = Sequence::new(vec!['a', 'q']);
        assert_eq!(
            alphabet.validate(&seq),
            Err(GenomeError::UnknownSymbol("q".to_string()))
        );
    }
}
