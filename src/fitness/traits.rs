//! Fitness traits
//!
//! This module defines the fitness evaluation trait.

use crate::genome::sequence::Sequence;
use crate::genome::traits::Symbol;

/// Fitness evaluation trait
///
/// Scores are non-negative integers, higher is better. Evaluation only
/// reads the sequence and the evaluator's own immutable state.
pub trait Fitness<S: Symbol>: Send + Sync {
    /// Evaluate a sequence
    fn evaluate(&self, sequence: &Sequence<S>) -> usize;

    /// The highest score any sequence can reach
    fn max_score(&self) -> usize;

    /// Check whether `sequence` is an exact solution
    fn is_match(&self, sequence: &Sequence<S>) -> bool;

    /// Length every evaluated sequence must have
    fn sequence_len(&self) -> usize {
        self.max_score()
    }
}
