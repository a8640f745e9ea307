//! Population type
//!
//! This module provides the Population container type.

use rand::Rng;
use serde::Serialize;

use crate::error::GenomeError;
use crate::fitness::traits::Fitness;
use crate::genome::alphabet::Alphabet;
use crate::genome::traits::Symbol;
use crate::operators::traits::MutationOperator;
use crate::population::individual::Individual;

/// A population of individuals
///
/// Order is insertion order; it only matters as the tie-break for stable
/// selection.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Population<S> {
    /// Current generation number
    generation: usize,
    /// The individuals in this population
    individuals: Vec<Individual<S>>,
}

impl<S: Symbol> Population<S> {
    /// Create an empty population
    pub fn new() -> Self {
        Self {
            generation: 0,
            individuals: Vec::new(),
        }
    }

    /// Create a population from a vector of individuals
    pub fn from_individuals(individuals: Vec<Individual<S>>) -> Self {
        Self {
            generation: 0,
            individuals,
        }
    }

    /// Create generation 0
    ///
    /// Each individual starts from a uniformly random sequence, is mutated
    /// and then scored. Identifiers run from `0` to `size - 1`.
    pub fn random<M, Fit, R>(
        size: usize,
        alphabet: &Alphabet<S>,
        mutation: &M,
        fitness: &Fit,
        rng: &mut R,
    ) -> Result<Self, GenomeError>
    where
        M: MutationOperator<S>,
        Fit: Fitness<S> + ?Sized,
        R: Rng,
    {
        let len = fitness.sequence_len();
        let individuals = (0..size)
            .map(|id| {
                let sequence = alphabet.random_sequence(len, rng);
                Individual::spawn(id, sequence, mutation, fitness, rng)
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::from_individuals(individuals))
    }

    /// Get the current generation
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// Set the generation number
    pub fn set_generation(&mut self, generation: usize) {
        self.generation = generation;
    }

    /// Get the population size
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// Check if the population is empty
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// Get an individual by index
    pub fn get(&self, index: usize) -> Option<&Individual<S>> {
        self.individuals.get(index)
    }

    /// Add an individual to the population
    pub fn push(&mut self, individual: Individual<S>) {
        self.individuals.push(individual);
    }

    /// Get an iterator over the individuals
    pub fn iter(&self) -> impl Iterator<Item = &Individual<S>> {
        self.individuals.iter()
    }

    /// Get the underlying slice of individuals
    pub fn individuals(&self) -> &[Individual<S>] {
        &self.individuals
    }

    /// Take the individuals out of this population
    pub fn into_individuals(self) -> Vec<Individual<S>> {
        self.individuals
    }

    /// Highest-scoring individual; the earliest one wins ties
    pub fn best(&self) -> Option<&Individual<S>> {
        self.individuals
            .iter()
            .reduce(|best, i| if i.is_better_than(best) { i } else { best })
    }

    /// Lowest-scoring individual
    pub fn worst(&self) -> Option<&Individual<S>> {
        self.individuals.iter().min_by_key(|i| i.score())
    }

    /// Number of individuals that match the target exactly
    pub fn winners(&self) -> usize {
        self.individuals.iter().filter(|i| i.is_match()).count()
    }

    /// Fraction of exact matches, 0.0 for an empty population
    pub fn win_fraction(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.winners() as f64 / self.len() as f64
        }
    }

    /// Compute mean score
    pub fn mean_score(&self) -> Option<f64> {
        if self.is_empty() {
            return None;
        }
        let total: usize = self.individuals.iter().map(|i| i.score()).sum();
        Some(total as f64 / self.len() as f64)
    }

    /// Compute population diversity (average pairwise Hamming distance)
    ///
    /// Quadratic in the population size; the search loop never calls it.
    pub fn diversity(&self) -> f64 {
        if self.len() < 2 {
            return 0.0;
        }

        let mut total_distance = 0usize;
        let mut count = 0usize;

        for i in 0..self.len() {
            for j in (i + 1)..self.len() {
                total_distance += self.individuals[i]
                    .sequence()
                    .hamming_distance(self.individuals[j].sequence());
                count += 1;
            }
        }

        total_distance as f64 / count as f64
    }
}

impl<S: Symbol> Default for Population<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: Symbol> std::ops::Index<usize> for Population<S> {
    type Output = Individual<S>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.individuals[index]
    }
}

impl<S: Symbol> IntoIterator for Population<S> {
    type Item = Individual<S>;
    type IntoIter = std::vec::IntoIter<Individual<S>>;

    fn into_iter(self) -> Self::IntoIter {
        self.individuals.into_iter()
    }
}

impl<S: Symbol> FromIterator<Individual<S>> for Population<S> {
    fn from_iter<I: IntoIterator<Item = Individual<S>>>(iter: I) -> Self {
        Self::from_individuals(iter.into_iter().collect())
    }
}
