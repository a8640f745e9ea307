//! Operator traits
//!
//! This module defines the core operator traits for genetic algorithms.

use rand::Rng;

use crate::error::OperatorError;
use crate::genome::sequence::Sequence;
use crate::genome::traits::Symbol;
use crate::population::individual::Individual;
use crate::population::population::Population;

/// Selection operator trait
///
/// Picks the survivors that parent the next generation.
pub trait SelectionOperator<S: Symbol>: Send + Sync {
    /// Select survivors from the population
    ///
    /// Survivors are copies; the population is left untouched.
    fn select(&self, population: &Population<S>) -> Vec<Individual<S>>;
}

/// Crossover operator trait
///
/// Combines genetic material from two parents into one child sequence.
pub trait CrossoverOperator<S: Symbol>: Send + Sync {
    /// Apply crossover to two parents and produce one child
    fn crossover<R: Rng>(
        &self,
        parent1: &Sequence<S>,
        parent2: &Sequence<S>,
        rng: &mut R,
    ) -> Result<Sequence<S>, OperatorError>;
}

/// Mutation operator trait
///
/// Applies random changes to a sequence.
pub trait MutationOperator<S: Symbol>: Send + Sync {
    /// Apply mutation to a sequence in place
    fn mutate<R: Rng>(&self, sequence: &mut Sequence<S>, rng: &mut R);

    /// Get the mutation probability per gene
    fn mutation_probability(&self) -> f64;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Mock crossover operator for testing
    struct SwapHalves;

    impl CrossoverOperator<u8> for SwapHalves {
        fn crossover<R: Rng>(
            &self,
            parent1: &Sequence<u8>,
            parent2: &Sequence<u8>,
            _rng: &mut R,
        ) -> Result<Sequence<u8>, OperatorError> {
            let half = parent1.len() / 2;
            Ok(parent1.symbols()[..half]
                .iter()
                .chain(parent2.symbols()[half..].iter())
                .copied()
                .collect())
        }
    }

    // Mock mutation operator for testing
    struct Increment;

    impl MutationOperator<u8> for Increment {
        fn mutate<R: Rng>(&self, sequence: &mut Sequence<u8>, _rng: &mut R) {
            for gene in sequence.symbols_mut() {
                *gene = gene.wrapping_add(1);
            }
        }

        fn mutation_probability(&self) -> f64 {
            1.0
        }
    }

    #[test]
    fn test_mock_crossover() {
        let mut rng = rand::thread_rng();
        let p1 = Sequence::new(vec![1, 1, 1, 1]);
        let p2 = Sequence::new(vec![2, 2, 2, 2]);

        let child = SwapHalves.crossover(&p1, &p2, &mut rng).unwrap();
        assert_eq!(child.symbols(), &[1, 1, 2, 2]);
    }

    #[test]
    fn test_mock_mutation() {
        let mut rng = rand::thread_rng();
        let mut seq = Sequence::new(vec![0, 5, 255]);

        Increment.mutate(&mut seq, &mut rng);
        assert_eq!(seq.symbols(), &[1, 6, 0]);
        assert_eq!(Increment.mutation_probability(), 1.0);
    }
}
