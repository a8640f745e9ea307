//! Prefix-match fitness
//!
//! Scores a sequence by walking it left to right against the target and
//! stopping at the first wrong symbol, like a player with a single life
//! entering a cheat code. The score is the number of correct inputs before
//! that first mistake.
//!
//! Later matches never count once a mistake has been made: a sequence that
//! is wrong only at position 0 scores 0.

use crate::fitness::traits::Fitness;
use crate::genome::sequence::Sequence;
use crate::genome::target::Target;
use crate::genome::traits::Symbol;

/// Longest-matching-prefix fitness against a fixed target
#[derive(Clone, Debug)]
pub struct PrefixMatch<S> {
    target: Target<S>,
}

impl<S: Symbol> PrefixMatch<S> {
    /// Create a new prefix-match evaluator
    pub fn new(target: Target<S>) -> Self {
        Self { target }
    }

    /// The target being matched
    pub fn target(&self) -> &Target<S> {
        &self.target
    }
}

impl<S: Symbol> Fitness<S> for PrefixMatch<S> {
    fn evaluate(&self, sequence: &Sequence<S>) -> usize {
        sequence.prefix_len(self.target.sequence())
    }

    fn max_score(&self) -> usize {
        self.target.len()
    }

    fn is_match(&self, sequence: &Sequence<S>) -> bool {
        sequence == self.target.sequence()
    }
}
