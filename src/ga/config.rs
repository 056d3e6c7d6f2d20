//! Solver configuration.
//!
//! [`GaConfig`] holds every parameter of a run. It is fixed once the
//! solver is constructed.

use super::selection::TOURNAMENT_SIZE;
use crate::error::{Error, Result};

/// Configuration for the N-Queens genetic solver.
///
/// # Defaults
///
/// The defaults reproduce the reference run: 11 queens, a population of
/// 100, at most 600 generations and a 20% mutation rate.
///
/// ```
/// use nqueens_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.queens_count, 11);
/// assert_eq!(config.population_size, 100);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use nqueens_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_queens_count(8)
///     .with_population_size(50)
///     .with_generations(300)
///     .with_mutation_rate(0.1)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Board side length and number of queens (N).
    pub queens_count: usize,

    /// Number of chromosomes in every generation.
    ///
    /// Must be at least the tournament size (5).
    pub population_size: usize,

    /// Maximum number of generations before giving up.
    pub generations: usize,

    /// Probability of applying one swap mutation to an offspring (0.0–1.0).
    pub mutation_rate: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` draws a fresh seed; the seed actually used is reported on the
    /// result.
    pub seed: Option<u64>,

    /// Whether to evaluate offspring in parallel using rayon.
    ///
    /// Only honored when the crate is built with the `parallel` feature.
    /// Results are identical to sequential evaluation.
    pub parallel: bool,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            queens_count: 11,
            population_size: 100,
            generations: 600,
            mutation_rate: 0.2,
            seed: None,
            parallel: false,
        }
    }
}

impl GaConfig {
    /// Sets the number of queens.
    pub fn with_queens_count(mut self, n: usize) -> Self {
        self.queens_count = n;
        self
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the generation budget.
    pub fn with_generations(mut self, n: usize) -> Self {
        self.generations = n;
        self
    }

    /// Sets the mutation rate.
    ///
    /// Not clamped: an out-of-range rate is reported by [`validate`](Self::validate).
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    /// Returns [`Error::InvalidConfig`] describing the first invalid parameter.
    pub fn validate(&self) -> Result<()> {
        if self.queens_count == 0 {
            return Err(Error::InvalidConfig(
                "queens_count must be at least 1".into(),
            ));
        }
        if self.population_size < TOURNAMENT_SIZE {
            return Err(Error::InvalidConfig(format!(
                "population_size must be at least {TOURNAMENT_SIZE} (tournament size), got {}",
                self.population_size
            )));
        }
        if self.generations == 0 {
            return Err(Error::InvalidConfig(
                "generations must be at least 1".into(),
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(Error::InvalidConfig(format!(
                "mutation_rate must be within [0, 1], got {}",
                self.mutation_rate
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GaConfig::default();
        assert_eq!(config.queens_count, 11);
        assert_eq!(config.population_size, 100);
        assert_eq!(config.generations, 600);
        assert!((config.mutation_rate - 0.2).abs() < 1e-10);
        assert!(config.seed.is_none());
        assert!(!config.parallel);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GaConfig::default()
            .with_queens_count(4)
            .with_population_size(20)
            .with_generations(200)
            .with_mutation_rate(0.3)
            .with_seed(7)
            .with_parallel(true);

        assert_eq!(config.queens_count, 4);
        assert_eq!(config.population_size, 20);
        assert_eq!(config.generations, 200);
        assert!((config.mutation_rate - 0.3).abs() < 1e-10);
        assert_eq!(config.seed, Some(7));
        assert!(config.parallel);
    }

    #[test]
    fn test_validate_ok() {
        assert!(GaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_zero_queens() {
        let config = GaConfig::default().with_queens_count(0);
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_validate_single_queen() {
        let config = GaConfig::default().with_queens_count(1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_population_below_tournament() {
        let config = GaConfig::default().with_population_size(4);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("population_size"), "{err}");

        let config = GaConfig::default().with_population_size(5);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_zero_generations() {
        let config = GaConfig::default().with_generations(0);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_mutation_rate_bounds() {
        for rate in [0.0, 0.5, 1.0] {
            assert!(GaConfig::default().with_mutation_rate(rate).validate().is_ok());
        }
        for rate in [-0.1, 1.01, f64::NAN, f64::INFINITY] {
            assert!(
                GaConfig::default().with_mutation_rate(rate).validate().is_err(),
                "rate {rate} should be rejected"
            );
        }
    }
}
