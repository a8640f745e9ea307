//! The Konami Code problem
//!
//! Gamepad buttons as genes and the classic
//! `↑ ↑ ↓ ↓ ← → ← → B A START` input sequence as the target.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::algorithms::genetic_search::{GeneticSearch, GeneticSearchConfig};
use crate::diagnostics::EvolutionResult;
use crate::error::{EvoResult, GenomeError};
use crate::genome::alphabet::Alphabet;
use crate::genome::sequence::Sequence;
use crate::genome::target::Target;

/// A gamepad input
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Button {
    Up,
    Down,
    Left,
    Right,
    B,
    A,
    Start,
}

impl Button {
    /// Every button, in alphabet order
    pub const ALL: [Button; 7] = [
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
        Button::B,
        Button::A,
        Button::Start,
    ];

    /// Label printed on the controller
    pub fn label(&self) -> &'static str {
        match self {
            Button::Up => "↑",
            Button::Down => "↓",
            Button::Left => "←",
            Button::Right => "→",
            Button::B => "B",
            Button::A => "A",
            Button::Start => "START",
        }
    }
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Button {
    type Err = GenomeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Button::ALL
            .iter()
            .copied()
            .find(|b| b.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| GenomeError::UnknownSymbol(s.to_string()))
    }
}

/// The Konami Code
pub const KONAMI_CODE: [Button; 11] = [
    Button::Up,
    Button::Up,
    Button::Down,
    Button::Down,
    Button::Left,
    Button::Right,
    Button::Left,
    Button::Right,
    Button::B,
    Button::A,
    Button::Start,
];

/// The seven-button gamepad alphabet
pub fn alphabet() -> Alphabet<Button> {
    Alphabet::new(Button::ALL.to_vec()).expect("button alphabet is non-empty and distinct")
}

/// The Konami Code as a search target
pub fn target() -> Target<Button> {
    Target::new(alphabet(), Sequence::new(KONAMI_CODE.to_vec()))
        .expect("every Konami Code input is a gamepad button")
}

/// Evolve a random population toward the Konami Code
///
/// Returns the terminal outcome, the generation it was reached at and the
/// final population inside the [`EvolutionResult`].
pub fn run<R: Rng>(
    population_size: usize,
    fitness_cutoff: usize,
    mutation_rate: f64,
    win_percent: f64,
    max_iter: usize,
    rng: &mut R,
) -> EvoResult<EvolutionResult<Button>> {
    let config = GeneticSearchConfig {
        population_size,
        fitness_cutoff,
        mutation_rate,
        win_percent,
        max_iter,
    };
    GeneticSearch::builder()
        .config(config)
        .target(target())
        .build()?
        .run(rng)
}
