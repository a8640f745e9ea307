//! Individual type
//!
//! This module provides the Individual type that pairs a sequence with its
//! score.

use std::fmt;

use rand::Rng;
use serde::Serialize;

use crate::error::GenomeError;
use crate::fitness::traits::Fitness;
use crate::genome::sequence::Sequence;
use crate::genome::traits::Symbol;
use crate::operators::traits::MutationOperator;

/// An individual in the population
///
/// An individual is always fully scored: the only ways to obtain one are
/// [`Individual::evaluated`] and [`Individual::spawn`], and neither the
/// sequence nor the score can change afterwards. It serializes for
/// diagnostics but cannot be deserialized.
///
/// ```compile_fail
/// use konami_evo::population::individual::Individual;
///
/// let forged: Individual<char> = serde_json::from_str("{}").unwrap();
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Individual<S> {
    id: usize,
    sequence: Sequence<S>,
    score: usize,
    is_match: bool,
}

impl<S: Symbol> Individual<S> {
    /// Score `sequence` as-is and wrap it
    ///
    /// Fails if the sequence length differs from what `fitness` expects.
    pub fn evaluated<Fit>(
        id: usize,
        sequence: Sequence<S>,
        fitness: &Fit,
    ) -> Result<Self, GenomeError>
    where
        Fit: Fitness<S> + ?Sized,
    {
        let expected = fitness.sequence_len();
        if sequence.len() != expected {
            return Err(GenomeError::DimensionMismatch {
                expected,
                actual: sequence.len(),
            });
        }
        let score = fitness.evaluate(&sequence);
        let is_match = fitness.is_match(&sequence);
        Ok(Self {
            id,
            sequence,
            score,
            is_match,
        })
    }

    /// Mutate `sequence`, then score it
    pub fn spawn<M, Fit, R>(
        id: usize,
        mut sequence: Sequence<S>,
        mutation: &M,
        fitness: &Fit,
        rng: &mut R,
    ) -> Result<Self, GenomeError>
    where
        M: MutationOperator<S>,
        Fit: Fitness<S> + ?Sized,
        R: Rng,
    {
        mutation.mutate(&mut sequence, rng);
        Self::evaluated(id, sequence, fitness)
    }

    /// Diagnostic label; never used for ranking or reproduction
    pub fn id(&self) -> usize {
        self.id
    }

    /// The genes of this individual
    pub fn sequence(&self) -> &Sequence<S> {
        &self.sequence
    }

    /// Fitness score
    pub fn score(&self) -> usize {
        self.score
    }

    /// Whether the sequence equals the target exactly
    pub fn is_match(&self) -> bool {
        self.is_match
    }

    /// Take the sequence out of this individual
    pub fn into_sequence(self) -> Sequence<S> {
        self.sequence
    }

    /// Check if this individual scores higher than another
    pub fn is_better_than(&self, other: &Self) -> bool {
        self.score > other.score
    }
}

impl<S: Symbol> fmt::Display for Individual<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Individual_{}:", self.id)?;
        writeln!(f, "    DNA: {}", self.sequence)?;
        writeln!(f, "    SCORE: {}", self.score)?;
        write!(f, "    WINNER: {}", self.is_match)
    }
}
