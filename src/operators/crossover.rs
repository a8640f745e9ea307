//! Crossover operators
//!
//! This module provides uniform crossover and the offspring loop that
//! builds a new generation from a survivor pool.

use rand::seq::index;
use rand::Rng;

use crate::error::{EvoResult, OperatorError};
use crate::fitness::traits::Fitness;
use crate::genome::sequence::Sequence;
use crate::genome::traits::Symbol;
use crate::operators::traits::{CrossoverOperator, MutationOperator};
use crate::population::individual::Individual;
use crate::population::population::Population;

/// Uniform crossover
///
/// Each gene of the child is independently taken from either parent with
/// equal probability.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformCrossover;

impl UniformCrossover {
    /// Create a new uniform crossover
    pub fn new() -> Self {
        Self
    }
}

impl<S: Symbol> CrossoverOperator<S> for UniformCrossover {
    fn crossover<R: Rng>(
        &self,
        parent1: &Sequence<S>,
        parent2: &Sequence<S>,
        rng: &mut R,
    ) -> Result<Sequence<S>, OperatorError> {
        if parent1.len() != parent2.len() {
            return Err(OperatorError::CrossoverFailed(format!(
                "parent lengths differ: {} vs {}",
                parent1.len(),
                parent2.len()
            )));
        }

        Ok(parent1
            .iter()
            .zip(parent2.iter())
            .map(|(a, b)| if rng.gen::<bool>() { a.clone() } else { b.clone() })
            .collect())
    }
}

/// Breed `size` offspring from a survivor pool
///
/// Every child has two distinct parents. Survivors are drawn with
/// replacement across children, so one survivor may parent any number of
/// them. Children are mutated and scored on construction and numbered
/// `0..size`.
///
/// Fails with [`OperatorError::SelectionFailed`] if fewer than two
/// survivors are supplied.
pub fn breed<S, C, M, Fit, R>(
    survivors: &[Individual<S>],
    size: usize,
    crossover: &C,
    mutation: &M,
    fitness: &Fit,
    rng: &mut R,
) -> EvoResult<Population<S>>
where
    S: Symbol,
    C: CrossoverOperator<S>,
    M: MutationOperator<S>,
    Fit: Fitness<S> + ?Sized,
    R: Rng,
{
    if survivors.len() < 2 {
        return Err(OperatorError::SelectionFailed(format!(
            "crossover needs at least 2 survivors, got {}",
            survivors.len()
        ))
        .into());
    }

    let mut offspring = Population::from_individuals(Vec::with_capacity(size));
    for id in 0..size {
        let parents = index::sample(rng, survivors.len(), 2);
        let parent1 = survivors[parents.index(0)].sequence();
        let parent2 = survivors[parents.index(1)].sequence();

        let child = crossover.crossover(parent1, parent2, rng)?;
        offspring.push(Individual::spawn(id, child, mutation, fitness, rng)?);
    }
    Ok(offspring)
}
