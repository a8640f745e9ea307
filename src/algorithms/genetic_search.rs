//! Generational genetic search
//!
//! This module implements the evolution loop: check the win condition,
//! select survivors by truncation, breed a full replacement generation by
//! uniform crossover and resampling mutation, and repeat until the
//! population wins or the generation limit is exceeded.

use std::time::Instant;

use log::{debug, info, warn};
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::diagnostics::observer::{GenerationObserver, NoopObserver};
use crate::diagnostics::{EvolutionResult, EvolutionStats, GenerationStats};
use crate::error::{EvoResult, EvolutionError, GenomeError};
use crate::fitness::prefix::PrefixMatch;
use crate::fitness::traits::Fitness;
use crate::genome::target::Target;
use crate::genome::traits::Symbol;
use crate::operators::crossover::{breed, UniformCrossover};
use crate::operators::mutation::ResampleMutation;
use crate::operators::selection::TruncationSelection;
use crate::operators::traits::SelectionOperator;
use crate::population::population::Population;
use crate::termination::{EvolutionState, MaxGenerations, TerminationCriterion, WinPercentage};

/// Configuration for the genetic search
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GeneticSearchConfig {
    /// Number of individuals in every generation
    pub population_size: usize,
    /// Number of survivors kept by truncation selection
    pub fitness_cutoff: usize,
    /// Per-gene resampling probability
    pub mutation_rate: f64,
    /// Fraction of exact matches that ends the search
    pub win_percent: f64,
    /// Last generation that may still be produced
    pub max_iter: usize,
}

impl Default for GeneticSearchConfig {
    fn default() -> Self {
        Self {
            population_size: 25,
            fitness_cutoff: 5,
            mutation_rate: 0.05,
            win_percent: 0.75,
            max_iter: 1000,
        }
    }
}

impl GeneticSearchConfig {
    /// Check the configuration before a search starts
    ///
    /// A cutoff above the population size is allowed; selection clamps it.
    pub fn validate(&self) -> Result<(), EvolutionError> {
        if self.population_size < 2 {
            return Err(EvolutionError::Configuration(format!(
                "population_size must be at least 2, got {}",
                self.population_size
            )));
        }
        if self.fitness_cutoff < 2 {
            return Err(EvolutionError::Configuration(format!(
                "fitness_cutoff must be at least 2, got {}",
                self.fitness_cutoff
            )));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(EvolutionError::Configuration(format!(
                "mutation_rate must be in [0, 1], got {}",
                self.mutation_rate
            )));
        }
        if !(0.0..=1.0).contains(&self.win_percent) {
            return Err(EvolutionError::Configuration(format!(
                "win_percent must be in [0, 1], got {}",
                self.win_percent
            )));
        }
        Ok(())
    }

    /// Number of survivors selection will actually keep
    pub fn effective_cutoff(&self) -> usize {
        self.fitness_cutoff.min(self.population_size)
    }
}

/// Builder for GeneticSearch
pub struct GeneticSearchBuilder<S> {
    config: GeneticSearchConfig,
    target: Option<Target<S>>,
}

impl<S: Symbol> GeneticSearchBuilder<S> {
    /// Create a new builder with default configuration
    pub fn new() -> Self {
        Self {
            config: GeneticSearchConfig::default(),
            target: None,
        }
    }

    /// Replace the whole configuration
    pub fn config(mut self, config: GeneticSearchConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the population size
    pub fn population_size(mut self, size: usize) -> Self {
        self.config.population_size = size;
        self
    }

    /// Set the number of survivors per generation
    pub fn fitness_cutoff(mut self, cutoff: usize) -> Self {
        self.config.fitness_cutoff = cutoff;
        self
    }

    /// Set the per-gene mutation rate
    pub fn mutation_rate(mut self, rate: f64) -> Self {
        self.config.mutation_rate = rate;
        self
    }

    /// Set the winning fraction
    pub fn win_percent(mut self, win_percent: f64) -> Self {
        self.config.win_percent = win_percent;
        self
    }

    /// Set the generation limit
    pub fn max_iter(mut self, max_iter: usize) -> Self {
        self.config.max_iter = max_iter;
        self
    }

    /// Set the target sequence (and with it the alphabet)
    pub fn target(mut self, target: Target<S>) -> Self {
        self.target = Some(target);
        self
    }

    /// Build the GeneticSearch instance
    pub fn build(self) -> Result<GeneticSearch<S>, EvolutionError> {
        self.config.validate()?;

        let target = self
            .target
            .ok_or_else(|| EvolutionError::Configuration("Target must be specified".to_string()))?;

        if self.config.fitness_cutoff > self.config.population_size {
            warn!(
                "fitness_cutoff {} exceeds population_size {}, keeping the whole population",
                self.config.fitness_cutoff, self.config.population_size
            );
        }

        let mutation = ResampleMutation::new(target.alphabet().clone(), self.config.mutation_rate)?;

        Ok(GeneticSearch {
            selection: TruncationSelection::new(self.config.fitness_cutoff),
            crossover: UniformCrossover::new(),
            mutation,
            win: WinPercentage::new(self.config.win_percent),
            limit: MaxGenerations::new(self.config.max_iter),
            fitness: PrefixMatch::new(target),
            config: self.config,
        })
    }
}

impl<S: Symbol> Default for GeneticSearchBuilder<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Generational genetic search toward a fixed target
///
/// Holds its target, alphabet and operators as immutable values, so
/// independent searches never share state.
#[derive(Clone, Debug)]
pub struct GeneticSearch<S> {
    config: GeneticSearchConfig,
    fitness: PrefixMatch<S>,
    selection: TruncationSelection,
    crossover: UniformCrossover,
    mutation: ResampleMutation<S>,
    win: WinPercentage,
    limit: MaxGenerations,
}

impl<S: Symbol> GeneticSearch<S> {
    /// Create a builder for GeneticSearch
    pub fn builder() -> GeneticSearchBuilder<S> {
        GeneticSearchBuilder::new()
    }

    /// The validated configuration
    pub fn config(&self) -> &GeneticSearchConfig {
        &self.config
    }

    /// The fitness evaluator
    pub fn fitness(&self) -> &PrefixMatch<S> {
        &self.fitness
    }

    /// The target being searched for
    pub fn target(&self) -> &Target<S> {
        self.fitness.target()
    }

    /// Create a random generation 0
    pub fn populate<R: Rng>(&self, rng: &mut R) -> EvoResult<Population<S>> {
        let population = Population::random(
            self.config.population_size,
            self.target().alphabet(),
            &self.mutation,
            &self.fitness,
            rng,
        )?;
        Ok(population)
    }

    /// Populate randomly and evolve
    pub fn run<R: Rng>(&self, rng: &mut R) -> EvoResult<EvolutionResult<S>> {
        self.run_with_observer(rng, &mut NoopObserver)
    }

    /// Populate randomly and evolve, reporting every generation to `observer`
    pub fn run_with_observer<R, O>(
        &self,
        rng: &mut R,
        observer: &mut O,
    ) -> EvoResult<EvolutionResult<S>>
    where
        R: Rng,
        O: GenerationObserver<S>,
    {
        let population = self.populate(rng)?;
        self.evolve(population, rng, observer)
    }

    /// Evolve a supplied generation 0 until it wins or runs out of generations
    ///
    /// The population must hold exactly `population_size` individuals whose
    /// sequences have the target's length, use only alphabet symbols and were
    /// scored against this search's target. The win condition is checked at
    /// the top of every generation, so a winning generation 0 returns
    /// without any selection or breeding.
    pub fn evolve<R, O>(
        &self,
        mut population: Population<S>,
        rng: &mut R,
        observer: &mut O,
    ) -> EvoResult<EvolutionResult<S>>
    where
        R: Rng,
        O: GenerationObserver<S>,
    {
        let start_time = Instant::now();
        self.check_initial(&population)?;

        let mut stats = EvolutionStats::new();
        let mut generation = 0;
        population.set_generation(generation);

        let (outcome, reason) = loop {
            observer.on_generation(generation, &population);
            stats.record(GenerationStats::from_population(&population, generation));

            let state = EvolutionState {
                generation,
                population: &population,
            };
            if self.win.should_terminate(&state) {
                break (
                    TerminationCriterion::<S>::outcome(&self.win),
                    TerminationCriterion::<S>::reason(&self.win),
                );
            }

            let survivors = self.selection.select(&population);
            population = breed(
                &survivors,
                self.config.population_size,
                &self.crossover,
                &self.mutation,
                &self.fitness,
                rng,
            )?;
            generation += 1;
            population.set_generation(generation);
            debug!(
                "bred generation {} from {} survivors, best score {}",
                generation,
                survivors.len(),
                population.best().map(|i| i.score()).unwrap_or(0)
            );

            let state = EvolutionState {
                generation,
                population: &population,
            };
            if self.limit.should_terminate(&state) {
                break (
                    TerminationCriterion::<S>::outcome(&self.limit),
                    TerminationCriterion::<S>::reason(&self.limit),
                );
            }
        };

        stats.set_outcome(outcome, reason);
        stats.set_runtime(start_time.elapsed());
        observer.on_termination(outcome, generation);
        info!("{} after {} generations", reason, generation);

        let best = population
            .best()
            .cloned()
            .ok_or(EvolutionError::EmptyPopulation)?;

        Ok(EvolutionResult {
            outcome,
            generations: generation,
            population,
            best,
            stats,
        })
    }

    fn check_initial(&self, population: &Population<S>) -> EvoResult<()> {
        if population.is_empty() {
            return Err(EvolutionError::EmptyPopulation);
        }
        if population.len() != self.config.population_size {
            return Err(EvolutionError::Configuration(format!(
                "initial population has {} individuals, expected {}",
                population.len(),
                self.config.population_size
            )));
        }
        let expected = self.fitness.sequence_len();
        for individual in population.iter() {
            let sequence = individual.sequence();
            if sequence.len() != expected {
                return Err(GenomeError::DimensionMismatch {
                    expected,
                    actual: sequence.len(),
                }
                .into());
            }
            self.target().alphabet().validate(sequence)?;

            // Scores carried in from elsewhere must agree with this target
            if individual.score() != self.fitness.evaluate(sequence)
                || individual.is_match() != self.fitness.is_match(sequence)
            {
                return Err(GenomeError::InvalidStructure(format!(
                    "individual {} was scored against a different target",
                    individual.id()
                ))
                .into());
            }
        }
        Ok(())
    }
}
