//! Termination criteria
//!
//! This module provides the win and generation-limit criteria that end a
//! search, and the [`Outcome`] they map to.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::genome::traits::Symbol;
use crate::population::population::Population;

/// Terminal state of a search
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Enough of the population matches the target
    Won,
    /// The generation limit was exceeded first
    Exhausted,
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Won => f.write_str("won"),
            Outcome::Exhausted => f.write_str("exhausted"),
        }
    }
}

/// Evolution state for termination checking
#[derive(Clone, Debug)]
pub struct EvolutionState<'a, S> {
    /// Current generation number
    pub generation: usize,
    /// Reference to the current population
    pub population: &'a Population<S>,
}

/// Termination criterion trait
pub trait TerminationCriterion<S: Symbol>: Send + Sync {
    /// Check if evolution should terminate
    fn should_terminate(&self, state: &EvolutionState<S>) -> bool;

    /// Outcome reported when this criterion fires
    fn outcome(&self) -> Outcome;

    /// Get a description of why termination occurred
    fn reason(&self) -> &'static str;
}

/// Terminate once the fraction of exact matches reaches a threshold
///
/// Fires when `winners >= len * win_percent`. A threshold of `0.0` is met
/// by any population.
#[derive(Clone, Debug)]
pub struct WinPercentage(pub f64);

impl WinPercentage {
    /// Create a new win percentage criterion
    pub fn new(win_percent: f64) -> Self {
        Self(win_percent)
    }
}

impl<S: Symbol> TerminationCriterion<S> for WinPercentage {
    fn should_terminate(&self, state: &EvolutionState<S>) -> bool {
        state.population.winners() as f64 >= state.population.len() as f64 * self.0
    }

    fn outcome(&self) -> Outcome {
        Outcome::Won
    }

    fn reason(&self) -> &'static str {
        "Win percentage reached"
    }
}

/// Terminate once the generation counter exceeds a limit
///
/// The limit itself is still a valid generation: with `max_iter = 5` the
/// search stops when it reaches generation 6.
#[derive(Clone, Debug)]
pub struct MaxGenerations(pub usize);

impl MaxGenerations {
    /// Create a new max generations criterion
    pub fn new(max: usize) -> Self {
        Self(max)
    }
}

impl<S: Symbol> TerminationCriterion<S> for MaxGenerations {
    fn should_terminate(&self, state: &EvolutionState<S>) -> bool {
        state.generation > self.0
    }

    fn outcome(&self) -> Outcome {
        Outcome::Exhausted
    }

    fn reason(&self) -> &'static str {
        "Maximum generations exceeded"
    }
}

pub mod prelude {
    pub use super::{EvolutionState, MaxGenerations, Outcome, TerminationCriterion, WinPercentage};
}
