//! GA configuration.
//!
//! [`GaConfig`] holds the parameters fixed for an optimizer's lifetime.

use crate::error::{GaError, Result};

/// Configuration for the genetic optimizer.
///
/// # Defaults
///
/// ```
/// use u_bitga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert!((config.crossover_rate - 0.7).abs() < 1e-12);
/// assert!((config.mutation_rate - 0.001).abs() < 1e-12);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use u_bitga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(51)
///     .with_crossover_rate(0.9)
///     .with_mutation_rate(0.01)
///     .with_seed(7);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GaConfig {
    /// Number of chromosomes in every generation.
    ///
    /// Conserved across generations, odd sizes included.
    pub population_size: usize,

    /// Probability that a selected pair is replaced by its crossover
    /// children (0.0–1.0).
    pub crossover_rate: f64,

    /// Per-bit flip probability applied to every member of a new
    /// generation (0.0–1.0).
    pub mutation_rate: f64,

    /// Random seed for reproducibility.
    ///
    /// `None` seeds from operating system entropy.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            crossover_rate: 0.7,
            mutation_rate: 0.001,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns [`GaError::InvalidConfig`] if any parameter is invalid.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(GaError::InvalidConfig(format!(
                "population_size must be at least 2, got {}",
                self.population_size
            )));
        }
        check_rate("crossover_rate", self.crossover_rate)?;
        check_rate("mutation_rate", self.mutation_rate)?;
        Ok(())
    }
}

fn check_rate(name: &str, rate: f64) -> Result<()> {
    if (0.0..=1.0).contains(&rate) {
        Ok(())
    } else {
        Err(GaError::InvalidConfig(format!(
            "{name} must be within [0, 1], got {rate}"
        )))
    }
}
