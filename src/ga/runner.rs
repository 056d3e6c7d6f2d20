//! Evolutionary loop execution.
//!
//! [`GaRunner`] owns the population and the progress log and drives one
//! generation at a time:
//! sort → record best → stop on a solution → elitism → select, crossover,
//! mutate until the next generation is full → repeat.

use log::{debug, info, warn};
use rand::rngs::StdRng;

use super::config::GaConfig;
use super::operators::{mutate, prefix_crossover, random_permutation};
use super::selection::tournament;
use super::types::Chromosome;
use crate::error::Result;
use crate::random::{create_rng, random_seed};

/// Lifecycle of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunState {
    /// More generations remain in the budget.
    Running,

    /// A conflict-free board was found in the given (zero-based) generation.
    ///
    /// When the solution first appears in the population left behind by the
    /// last budgeted generation, `generation` equals the budget and the
    /// progress log holds no entry for it.
    Solved { generation: usize },

    /// The generation budget ran out without a conflict-free board.
    Exhausted,
}

impl RunState {
    pub fn is_terminal(self) -> bool {
        !matches!(self, RunState::Running)
    }
}

/// Result of a completed run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The solution, or the best board of the final population.
    pub best: Chromosome,

    /// Same as `best.fitness()`.
    pub best_fitness: usize,

    /// Number of generations executed (length of the progress log).
    pub generations: usize,

    /// [`RunState::Solved`] or [`RunState::Exhausted`].
    pub state: RunState,

    /// Seed the run was driven by; replaying it reproduces the run.
    pub seed: u64,
}

impl GaResult {
    pub fn is_solved(&self) -> bool {
        matches!(self.state, RunState::Solved { .. })
    }
}

/// Executes the genetic search for one N-Queens configuration.
///
/// # Usage
///
/// ```
/// use nqueens_ga::ga::{GaConfig, GaRunner};
///
/// let config = GaConfig::default()
///     .with_queens_count(6)
///     .with_population_size(30)
///     .with_generations(300)
///     .with_seed(42);
/// let mut runner = GaRunner::new(config).unwrap();
/// let result = runner.run();
/// assert_eq!(result.generations, runner.fitness_history().len());
/// ```
#[derive(Debug, Clone)]
pub struct GaRunner {
    config: GaConfig,
    seed: u64,
    rng: StdRng,
    population: Vec<Chromosome>,
    fitness_history: Vec<usize>,
    generation: usize,
    state: RunState,
    outcome: Option<GaResult>,
}

impl GaRunner {
    /// Validates `config` and builds the initial random population.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`](crate::Error::InvalidConfig) if the
    /// configuration is rejected by [`GaConfig::validate`].
    pub fn new(config: GaConfig) -> Result<Self> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(random_seed);
        let mut rng = create_rng(seed);

        let genes: Vec<Vec<usize>> = (0..config.population_size)
            .map(|_| random_permutation(config.queens_count, &mut rng))
            .collect();
        let population = evaluate(genes, config.parallel);

        if config.parallel && cfg!(not(feature = "parallel")) {
            warn!("parallel evaluation requested but the `parallel` feature is disabled; evaluating sequentially");
        }

        info!(
            "n-queens ga: {} queens, population {}, {} generations, mutation rate {}, seed {}",
            config.queens_count,
            config.population_size,
            config.generations,
            config.mutation_rate,
            seed
        );

        Ok(Self {
            fitness_history: Vec::with_capacity(config.generations),
            config,
            seed,
            rng,
            population,
            generation: 0,
            state: RunState::Running,
            outcome: None,
        })
    }

    /// Runs generations until a solution is found or the budget is spent.
    ///
    /// Calling `run` again after termination returns the same result
    /// without executing further generations.
    pub fn run(&mut self) -> GaResult {
        loop {
            if let Some(result) = &self.outcome {
                return result.clone();
            }
            self.step();
        }
    }

    /// Executes a single generation and returns the resulting state.
    ///
    /// A no-op once the run has terminated.
    pub fn step(&mut self) -> RunState {
        if self.state.is_terminal() {
            return self.state;
        }

        self.population.sort_by_key(Chromosome::fitness);
        let best = &self.population[0];
        self.fitness_history.push(best.fitness());
        debug!(
            "generation {}: best fitness {}",
            self.generation,
            best.fitness()
        );

        if best.is_solution() {
            info!("solution found in generation {}: {}", self.generation, best);
            let best = best.clone();
            self.finish(best, RunState::Solved { generation: self.generation });
            return self.state;
        }

        let size = self.config.population_size;
        let mut next_gen = Vec::with_capacity(size);
        next_gen.push(best.clone());

        let mut offspring = Vec::with_capacity(size - 1);
        while next_gen.len() + offspring.len() < size {
            let p1 = tournament(&self.population, &mut self.rng);
            let p2 = tournament(&self.population, &mut self.rng);

            let mut child = prefix_crossover(
                self.population[p1].genes(),
                self.population[p2].genes(),
                &mut self.rng,
            );
            mutate(&mut child, self.config.mutation_rate, &mut self.rng);
            offspring.push(child);
        }
        next_gen.extend(evaluate(offspring, self.config.parallel));

        self.population = next_gen;
        self.generation += 1;

        if self.generation >= self.config.generations {
            // rescan rather than trusting the elite slot
            if let Some(best) = self.population.iter().min_by_key(|c| c.fitness()).cloned() {
                if best.is_solution() {
                    info!(
                        "solution found in final population (generation {}): {}",
                        self.generation, best
                    );
                    self.finish(best, RunState::Solved { generation: self.generation });
                } else {
                    info!(
                        "generation budget exhausted; best {} with {} conflicts",
                        best,
                        best.fitness()
                    );
                    self.finish(best, RunState::Exhausted);
                }
            }
        }

        self.state
    }

    fn finish(&mut self, best: Chromosome, state: RunState) {
        self.state = state;
        self.outcome = Some(GaResult {
            best_fitness: best.fitness(),
            best,
            generations: self.fitness_history.len(),
            state,
            seed: self.seed,
        });
    }

    /// Best fitness of each executed generation, oldest first.
    pub fn fitness_history(&self) -> &[usize] {
        &self.fitness_history
    }

    /// Current population. Sorted only right after a generation records
    /// its best.
    pub fn population(&self) -> &[Chromosome] {
        &self.population
    }

    /// Number of generations fully executed so far.
    pub fn generation(&self) -> usize {
        self.generation
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    /// Final result, once the run has terminated.
    pub fn result(&self) -> Option<&GaResult> {
        self.outcome.as_ref()
    }

    pub fn config(&self) -> &GaConfig {
        &self.config
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

/// Finalizes gene vectors into chromosomes, scoring each one.
///
/// Order is preserved, so parallel and sequential evaluation produce the
/// same population.
#[cfg(feature = "parallel")]
fn evaluate(genes: Vec<Vec<usize>>, parallel: bool) -> Vec<Chromosome> {
    use rayon::prelude::*;

    if parallel {
        genes
            .into_par_iter()
            .map(Chromosome::from_permutation)
            .collect()
    } else {
        genes.into_iter().map(Chromosome::from_permutation).collect()
    }
}

/// Sequential build: the `parallel` flag has no effect without rayon.
#[cfg(not(feature = "parallel"))]
fn evaluate(genes: Vec<Vec<usize>>, _parallel: bool) -> Vec<Chromosome> {
    genes.into_iter().map(Chromosome::from_permutation).collect()
}

// ============================================================================
// Tests
// ============================================================================
