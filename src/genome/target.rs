//! Target sequences
//!
//! The `Target` is the fixed sequence the search evolves toward, paired with
//! the alphabet its genes are drawn from.

use serde::{Deserialize, Serialize};

use crate::error::GenomeError;
use crate::genome::alphabet::Alphabet;
use crate::genome::sequence::Sequence;
use crate::genome::traits::Symbol;

/// A fixed target sequence over an alphabet
///
/// Symbols may repeat within the target; every one of them must belong to
/// the alphabet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target<S> {
    alphabet: Alphabet<S>,
    sequence: Sequence<S>,
}

impl<S: Symbol> Target<S> {
    /// Create a target, checking it against the alphabet
    pub fn new(alphabet: Alphabet<S>, sequence: Sequence<S>) -> Result<Self, GenomeError> {
        if sequence.is_empty() {
            return Err(GenomeError::InvalidStructure(
                "Target sequence must not be empty".to_string(),
            ));
        }
        alphabet.validate(&sequence)?;
        Ok(Self { alphabet, sequence })
    }

    /// The target sequence
    pub fn sequence(&self) -> &Sequence<S> {
        &self.sequence
    }

    /// The alphabet genes are drawn from
    pub fn alphabet(&self) -> &Alphabet<S> {
        &self.alphabet
    }

    /// Length every individual's sequence must have
    pub fn len(&self) -> usize {
        self.sequence.len()
    }

    /// Always false; a target cannot be constructed empty
    pub fn is_empty(&self) -> bool {
        self.sequence.is_empty()
    }
}
