//! Binary-encoded genetic algorithm for single-variable maximization.
//!
//! Maximizes a real objective `f(x)` over a closed interval `[l, h]`:
//!
//! - **Encoding**: each candidate is a 64-bit word decoded affinely onto
//!   the interval; the objective is evaluated once per candidate.
//! - **Selection**: roulette-wheel sampling of two distinct parents,
//!   weighted by fitness.
//! - **Variation**: mask-based crossover around a random locus, then
//!   independent per-bit mutation.
//! - **Replacement**: the whole population is replaced every generation,
//!   with no elitism.
//!
//! All randomness comes from one caller-supplied [`rand::Rng`], so a seeded
//! generator reproduces a run exactly.
//!
//! # Example
//!
//! ```
//! use u_bitga::ga::{Chromosome, GaConfig, GeneticOptimizer, SearchSpace};
//!
//! let space = SearchSpace::from_bounds(0.0, std::f64::consts::PI, |x| {
//!     x + (32.0 * x).sin().abs()
//! })?;
//! let config = GaConfig::default().with_seed(42);
//! let mut ga = GeneticOptimizer::<Chromosome>::new(&space, &config)?;
//!
//! let summary = ga.run(50)?;
//! assert!(summary.best_value > 0.0);
//! # Ok::<(), u_bitga::GaError>(())
//! ```

pub mod error;
pub mod ga;
pub mod random;

pub use error::{GaError, Result};
