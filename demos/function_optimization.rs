//! Maximizes f(x) = x + |sin(32x)| on [0, π] with 50 generations.
//!
//! Run with `RUST_LOG=debug` to see per-generation fitness summaries.

use std::f64::consts::PI;
use u_bitga::ga::{Chromosome, GaConfig, GeneticOptimizer, SearchSpace};

fn main() -> Result<(), u_bitga::GaError> {
    env_logger::init();

    let space = SearchSpace::from_bounds(0.0, PI, |x| x + (32.0 * x).sin().abs())?;
    let config = GaConfig::default();
    let mut ga = GeneticOptimizer::<Chromosome>::new(&space, &config)?;

    for _ in 0..50 {
        ga.step()?;
    }

    println!("{}", ga.best());
    Ok(())
}
