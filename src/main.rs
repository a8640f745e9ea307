//! konami-evo: evolve the Konami Code with a genetic algorithm.
//!
//! ```bash
//! konami-evo
//! konami-evo -s 100 -f 10 -m 0.02 -w 0.9 -i 5000 --seed 7
//! RUST_LOG=debug konami-evo --format json -q
//! ```

use std::io::{self, Write};
use std::process;

use clap::{Parser, ValueEnum};
use log::warn;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde_json::json;

use konami_evo::prelude::*;

/// Evolve the Konami Code (↑ ↑ ↓ ↓ ← → ← → B A START) with a genetic algorithm.
#[derive(Parser, Debug)]
#[command(name = "konami-evo", version)]
#[command(about = "Evolve the Konami Code with a genetic algorithm")]
struct Cli {
    /// Number of individuals in every generation.
    #[arg(short = 's', long = "size", default_value_t = 25)]
    size: usize,

    /// Number of top individuals kept as parents.
    #[arg(short = 'f', long = "fitness-cutoff", default_value_t = 5)]
    fitness_cutoff: usize,

    /// Probability of resampling each gene.
    #[arg(short = 'm', long = "mutation-rate", default_value_t = 0.05)]
    mutation_rate: f64,

    /// Fraction of exact matches that wins.
    #[arg(short = 'w', long = "win-percent", default_value_t = 0.75)]
    win_percent: f64,

    /// Generation limit.
    #[arg(short = 'i', long = "max-iter", default_value_t = 1000)]
    max_iter: usize,

    /// Seed for a reproducible run.
    #[arg(long)]
    seed: Option<u64>,

    /// Per-generation dump format.
    #[arg(long, value_enum, default_value_t = Format::Text)]
    format: Format,

    /// Suppress the per-generation dump; progress still goes to the log (`RUST_LOG=info`).
    #[arg(short = 'q', long, default_value_t = false)]
    quiet: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Format {
    Text,
    Json,
}

/// Writes every checked generation to stdout
struct PrintObserver {
    format: Format,
}

impl GenerationObserver<Button> for PrintObserver {
    fn on_generation(&mut self, generation: usize, population: &Population<Button>) {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        let written = match self.format {
            Format::Text => write_text(&mut out, generation, population),
            Format::Json => match serde_json::to_string(population) {
                Ok(line) => writeln!(out, "{}", line),
                Err(e) => {
                    warn!("could not serialize generation {}: {}", generation, e);
                    Ok(())
                }
            },
        };
        if let Err(e) = written {
            warn!("could not write generation {}: {}", generation, e);
        }
    }
}

fn write_text(
    out: &mut impl Write,
    generation: usize,
    population: &Population<Button>,
) -> io::Result<()> {
    writeln!(out, "Generation: {}", generation)?;
    for individual in population.iter() {
        writeln!(out, "{}", individual)?;
    }
    writeln!(out)
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = GeneticSearchConfig {
        population_size: cli.size,
        fitness_cutoff: cli.fitness_cutoff,
        mutation_rate: cli.mutation_rate,
        win_percent: cli.win_percent,
        max_iter: cli.max_iter,
    };

    let search = match GeneticSearch::builder()
        .config(config)
        .target(konami::target())
        .build()
    {
        Ok(search) => search,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(2);
        }
    };

    let mut rng = match cli.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let result = if cli.quiet {
        search.run_with_observer(&mut rng, &mut LogObserver)
    } else {
        search.run_with_observer(&mut rng, &mut PrintObserver { format: cli.format })
    };

    let result = match result {
        Ok(result) => result,
        Err(e) => {
            eprintln!("error: {}", e);
            process::exit(1);
        }
    };

    match cli.format {
        Format::Text => {
            if result.is_won() {
                println!("Generation {} wins!", result.generations);
            } else {
                println!("Failed :(");
            }
            println!("{}", result.stats.summary());
        }
        Format::Json => {
            let summary = json!({
                "outcome": result.outcome,
                "generations": result.generations,
                "best": result.best,
                "stats": result.stats,
            });
            println!("{}", summary);
        }
    }
}
