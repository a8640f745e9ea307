//! Generation observers
//!
//! Observers receive every checked generation and the final outcome. They
//! are a side channel: nothing they do feeds back into the search.

use log::{debug, info, log_enabled, Level};

use crate::genome::traits::Symbol;
use crate::population::population::Population;
use crate::termination::Outcome;

/// Per-generation callback
pub trait GenerationObserver<S: Symbol> {
    /// Called at the top of every generation, before the win check
    fn on_generation(&mut self, _generation: usize, _population: &Population<S>) {}

    /// Called once when the search stops
    fn on_termination(&mut self, _outcome: Outcome, _generation: usize) {}
}

/// Observer that ignores everything
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl<S: Symbol> GenerationObserver<S> for NoopObserver {}

/// Adapts a closure into a [`GenerationObserver`]
pub struct FnObserver<F>(pub F);

impl<S, F> GenerationObserver<S> for FnObserver<F>
where
    S: Symbol,
    F: FnMut(usize, &Population<S>),
{
    fn on_generation(&mut self, generation: usize, population: &Population<S>) {
        (self.0)(generation, population)
    }
}

/// Observer that reports through the `log` facade
///
/// Logs a one-line summary per generation at `info`. At `debug` it also logs
/// the population diversity and every individual.
///
/// Diversity is quadratic in the population size and is only computed when
/// `debug` is enabled.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogObserver;

impl<S: Symbol> GenerationObserver<S> for LogObserver {
    fn on_generation(&mut self, generation: usize, population: &Population<S>) {
        info!(
            "generation {}: best={} mean={:.2} winners={}/{}",
            generation,
            population.best().map(|i| i.score()).unwrap_or(0),
            population.mean_score().unwrap_or(0.0),
            population.winners(),
            population.len()
        );
        if !log_enabled!(Level::Debug) {
            return;
        }
        debug!("generation {}: diversity={:.3}", generation, population.diversity());
        for individual in population.iter() {
            debug!(
                "  #{} {} score={} match={}",
                individual.id(),
                individual.sequence(),
                individual.score(),
                individual.is_match()
            );
        }
    }

    fn on_termination(&mut self, outcome: Outcome, generation: usize) {
        info!("search {} at generation {}", outcome, generation);
    }
}
