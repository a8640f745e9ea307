//! Diagnostics and statistics
//!
//! This module provides statistics collection for search runs and the
//! per-generation observer hook.

pub mod observer;

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::genome::traits::Symbol;
use crate::population::individual::Individual;
use crate::population::population::Population;
use crate::termination::Outcome;

/// Statistics for a single generation
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// Generation number
    pub generation: usize,
    /// Best score in this generation
    pub best_score: usize,
    /// Worst score in this generation
    pub worst_score: usize,
    /// Mean score
    pub mean_score: f64,
    /// Number of exact matches
    pub winners: usize,
    /// Fraction of exact matches
    pub win_fraction: f64,
}

impl GenerationStats {
    /// Compute statistics from a population
    pub fn from_population<S: Symbol>(population: &Population<S>, generation: usize) -> Self {
        Self {
            generation,
            best_score: population.best().map(|i| i.score()).unwrap_or(0),
            worst_score: population.worst().map(|i| i.score()).unwrap_or(0),
            mean_score: population.mean_score().unwrap_or(0.0),
            winners: population.winners(),
            win_fraction: population.win_fraction(),
        }
    }
}

/// Statistics collector for an entire run
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct EvolutionStats {
    /// Statistics per generation
    pub generations: Vec<GenerationStats>,
    /// Total runtime in milliseconds
    pub total_runtime_ms: f64,
    /// How the run ended
    pub outcome: Option<Outcome>,
    /// Reason for termination
    pub termination_reason: Option<String>,
}

impl EvolutionStats {
    /// Create a new stats collector
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a generation's statistics
    pub fn record(&mut self, stats: GenerationStats) {
        self.generations.push(stats);
    }

    /// Get the number of generations recorded
    pub fn num_generations(&self) -> usize {
        self.generations.len()
    }

    /// Get the best score across all generations
    pub fn best_score(&self) -> Option<usize> {
        self.generations.iter().map(|g| g.best_score).max()
    }

    /// Get the history of best scores
    pub fn best_score_history(&self) -> Vec<usize> {
        self.generations.iter().map(|g| g.best_score).collect()
    }

    /// Get the history of mean scores
    pub fn mean_score_history(&self) -> Vec<f64> {
        self.generations.iter().map(|g| g.mean_score).collect()
    }

    /// Get the history of winner counts
    pub fn winners_history(&self) -> Vec<usize> {
        self.generations.iter().map(|g| g.winners).collect()
    }

    /// Set the outcome and the reason behind it
    pub fn set_outcome(&mut self, outcome: Outcome, reason: &str) {
        self.outcome = Some(outcome);
        self.termination_reason = Some(reason.to_string());
    }

    /// Set the total runtime
    pub fn set_runtime(&mut self, duration: Duration) {
        self.total_runtime_ms = duration.as_secs_f64() * 1000.0;
    }

    /// Get a summary of the run
    pub fn summary(&self) -> String {
        let best = self.best_score().unwrap_or(0);
        let final_winners = self.generations.last().map(|g| g.winners).unwrap_or(0);

        format!(
            "Search Summary:\n\
             - Generations checked: {}\n\
             - Best score: {}\n\
             - Winners in last checked generation: {}\n\
             - Runtime: {:.2}ms\n\
             - Termination: {}",
            self.num_generations(),
            best,
            final_winners,
            self.total_runtime_ms,
            self.termination_reason.as_deref().unwrap_or("unknown")
        )
    }
}

/// Result of a search run
#[derive(Clone, Debug, Serialize)]
pub struct EvolutionResult<S> {
    /// Which terminal state was reached
    pub outcome: Outcome,
    /// Generation counter when the run stopped
    pub generations: usize,
    /// The last population produced
    pub population: Population<S>,
    /// Best individual of the last population
    pub best: Individual<S>,
    /// Statistics for the run
    pub stats: EvolutionStats,
}

impl<S: Symbol> EvolutionResult<S> {
    /// Whether the run ended in [`Outcome::Won`]
    pub fn is_won(&self) -> bool {
        self.outcome == Outcome::Won
    }
}

pub mod prelude {
    pub use super::observer::*;
    pub use super::{EvolutionResult, EvolutionStats, GenerationStats};
}
