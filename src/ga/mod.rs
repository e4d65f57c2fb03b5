//! Genetic Algorithm for maximizing a real function over a closed interval.
//!
//! Candidate points are encoded as 64-bit words ([`Chromosome`]) that decode
//! affinely onto a [`ClosedInterval`]. Each generation is built by
//! fitness-proportionate selection of distinct pairs, probabilistic
//! crossover, and per-bit mutation.
//!
//! # Core Trait
//!
//! - [`Genome`]: what the optimizer needs from a candidate: construction,
//!   value, fitness, crossover and mutation
//!
//! # Key Types
//!
//! - [`Chromosome`]: the 64-bit binary encoding, evaluated on construction
//! - [`SearchSpace`]: domain and objective shared by a run's chromosomes
//! - [`GaConfig`]: population size, crossover rate, mutation rate, seed
//! - [`GeneticOptimizer`]: owns the population and steps it forward
//! - [`RunSummary`]: best-ever member and fitness history of a run
//!
//! # Submodules
//!
//! - [`operators`]: bit-level crossover splice and mutation
//! - [`selection`]: roulette-wheel sampling with and without replacement
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod chromosome;
mod config;
pub mod operators;
mod runner;
pub mod selection;
mod types;

pub use chromosome::{Chromosome, ClosedInterval, SearchSpace};
pub use config::GaConfig;
pub use runner::{GenerationStats, GeneticOptimizer, RunSummary};
pub use types::Genome;
