//! nqueens: command-line front end for the genetic N-Queens solver.
//!
//! Runs one search with the given parameters, then prints the outcome, the
//! board and a chart of the best conflict count per generation.
//! `RUST_LOG=info` logs the run summary, `RUST_LOG=debug` every generation.

use std::process::ExitCode;

use clap::Parser;
use log::error;
use nqueens_ga::ga::{GaConfig, GaRunner, RunState};
use nqueens_ga::render;

const CHART_WIDTH: usize = 72;
const CHART_HEIGHT: usize = 12;

#[derive(Parser, Debug)]
#[command(name = "nqueens")]
#[command(author, version, about = "Solve N-Queens with a genetic algorithm", long_about = None)]
struct Cli {
    /// Number of queens (board side length)
    #[arg(short, long, default_value_t = 11)]
    queens: usize,

    /// Chromosomes per generation (at least 5)
    #[arg(short, long, default_value_t = 100)]
    population: usize,

    /// Generation budget
    #[arg(short, long, default_value_t = 600)]
    generations: usize,

    /// Probability of a swap mutation per offspring, in [0, 1]
    #[arg(short, long, default_value_t = 0.2)]
    mutation_rate: f64,

    /// Random seed; omit for a fresh one
    #[arg(short, long)]
    seed: Option<u64>,

    /// Evaluate offspring on all cores (needs the `parallel` feature)
    #[arg(long)]
    parallel: bool,

    /// Skip the progress chart
    #[arg(long)]
    no_chart: bool,
}

impl Cli {
    fn config(&self) -> GaConfig {
        let config = GaConfig::default()
            .with_queens_count(self.queens)
            .with_population_size(self.population)
            .with_generations(self.generations)
            .with_mutation_rate(self.mutation_rate)
            .with_parallel(self.parallel);
        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let mut runner = match GaRunner::new(cli.config()) {
        Ok(runner) => runner,
        Err(e) => {
            error!("{e}");
            return ExitCode::FAILURE;
        }
    };

    let result = runner.run();
    match result.state {
        RunState::Solved { generation } => {
            println!("Solution found in generation {generation}: {}", result.best)
        }
        _ => println!(
            "Best board found: {}, conflicts: {}",
            result.best, result.best_fitness
        ),
    }
    println!("Seed: {}", result.seed);

    println!("\nBoard:");
    println!("{}", render::board(result.best.genes()));

    if !cli.no_chart {
        println!("\nBest conflicts per generation:");
        println!(
            "{}",
            render::progress_chart(runner.fitness_history(), CHART_WIDTH, CHART_HEIGHT)
        );
    }

    ExitCode::SUCCESS
}
