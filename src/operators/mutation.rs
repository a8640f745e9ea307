//! Mutation operators
//!
//! This module provides the per-gene resampling mutation.

use rand::Rng;

use crate::error::OperatorError;
use crate::genome::alphabet::Alphabet;
use crate::genome::sequence::Sequence;
use crate::genome::traits::Symbol;
use crate::operators::traits::MutationOperator;

/// Resampling mutation for symbol sequences
///
/// Each position is independently replaced, with probability `rate`, by a
/// symbol drawn uniformly from the full alphabet. The replacement may equal
/// the symbol it replaces.
#[derive(Clone, Debug)]
pub struct ResampleMutation<S> {
    alphabet: Alphabet<S>,
    rate: f64,
}

impl<S: Symbol> ResampleMutation<S> {
    /// Create a new resampling mutation
    ///
    /// `rate` must lie in `[0, 1]`.
    pub fn new(alphabet: Alphabet<S>, rate: f64) -> Result<Self, OperatorError> {
        if !(0.0..=1.0).contains(&rate) {
            return Err(OperatorError::InvalidConfiguration(format!(
                "mutation rate must be in [0, 1], got {}",
                rate
            )));
        }
        Ok(Self { alphabet, rate })
    }

    /// The alphabet replacements are drawn from
    pub fn alphabet(&self) -> &Alphabet<S> {
        &self.alphabet
    }
}

impl<S: Symbol> MutationOperator<S> for ResampleMutation<S> {
    fn mutate<R: Rng>(&self, sequence: &mut Sequence<S>, rng: &mut R) {
        // u ~ U[0, 1) so rate 0.0 never fires and rate 1.0 always does
        for gene in sequence.symbols_mut() {
            if rng.gen::<f64>() < self.rate {
                *gene = self.alphabet.sample(rng);
            }
        }
    }

    fn mutation_probability(&self) -> f64 {
        self.rate
    }
}
