//! # konami-evo
//!
//! A genetic algorithm that evolves fixed-length symbol sequences toward a
//! known target.
//!
//! Candidates are scored by how long a prefix they share with the target.
//! Every generation keeps the highest-scoring survivors, breeds a full
//! replacement generation from them by uniform crossover, and resamples
//! genes at a fixed per-gene rate. The search stops once a configured
//! fraction of the population matches the target exactly, or when the
//! generation limit is exceeded.
//!
//! The bundled [`konami`] module evolves the Konami Code
//! (↑ ↑ ↓ ↓ ← → ← → B A START) over a seven-button alphabet.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use konami_evo::prelude::*;
//! use rand::SeedableRng;
//!
//! let mut rng = rand::rngs::StdRng::seed_from_u64(42);
//!
//! let result = GeneticSearch::builder()
//!     .population_size(25)
//!     .fitness_cutoff(5)
//!     .mutation_rate(0.05)
//!     .win_percent(0.75)
//!     .max_iter(1000)
//!     .target(konami::target())
//!     .build()?
//!     .run(&mut rng)?;
//! ```

pub mod algorithms;
pub mod diagnostics;
pub mod error;
pub mod fitness;
pub mod genome;
pub mod konami;
pub mod operators;
pub mod population;
pub mod termination;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithms::prelude::*;
    pub use crate::diagnostics::prelude::*;
    pub use crate::error::*;
    pub use crate::fitness::prelude::*;
    pub use crate::genome::prelude::*;
    pub use crate::konami::{self, Button, KONAMI_CODE};
    pub use crate::operators::prelude::*;
    pub use crate::population::prelude::*;
    pub use crate::termination::prelude::*;
}
