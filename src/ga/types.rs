//! Core trait definition for the GA engine.
//!
//! [`Genome`] is the contract between the generic [`GeneticOptimizer`]
//! and a concrete solution encoding such as [`Chromosome`].
//!
//! [`GeneticOptimizer`]: super::GeneticOptimizer
//! [`Chromosome`]: super::Chromosome

use rand::Rng;

/// A candidate solution the optimizer can select, recombine and mutate.
///
/// Implementors are immutable values: their decoded value and fitness are
/// fixed at construction, and both [`crossover`](Genome::crossover) and
/// [`mutate`](Genome::mutate) return fresh instances.
///
/// Higher fitness is better (maximization). Fitness doubles as the
/// roulette-wheel weight, so it must be non-negative.
///
/// # Implementing
///
/// ```ignore
/// #[derive(Clone)]
/// struct Point { x: f64 }
///
/// impl Genome for Point {
///     type Context = ();
///     fn spawn<R: Rng + ?Sized>(_: &(), rng: &mut R) -> Self { Point { x: rng.random() } }
///     fn value(&self) -> f64 { self.x }
///     fn fitness(&self) -> f64 { 1.0 - (self.x - 0.5).abs() }
///     fn crossover<R: Rng + ?Sized>(&self, other: &Self, _: &mut R) -> (Self, Self) {
///         (other.clone(), self.clone())
///     }
///     fn mutate<R: Rng + ?Sized>(&self, _: f64, _: &mut R) -> Self { self.clone() }
/// }
/// ```
pub trait Genome: Clone {
    /// Construction arguments shared by every member of a population.
    type Context;

    /// Creates a member with a uniformly random encoding.
    ///
    /// Called `population_size` times when an optimizer is built.
    fn spawn<R: Rng + ?Sized>(context: &Self::Context, rng: &mut R) -> Self;

    /// The decoded real value this member represents.
    fn value(&self) -> f64;

    /// The objective function evaluated at [`value`](Genome::value).
    fn fitness(&self) -> f64;

    /// Recombines two parents into two children.
    fn crossover<R: Rng + ?Sized>(&self, other: &Self, rng: &mut R) -> (Self, Self);

    /// Returns a copy with each encoded bit flipped with probability `rate`.
    fn mutate<R: Rng + ?Sized>(&self, rate: f64, rng: &mut R) -> Self;
}
