//! Error types shared by every fallible operation in the crate.

use thiserror::Error;

/// Errors raised by chromosome construction, weighted sampling and the
/// optimizer.
///
/// Every error is reported at the point of violation. Operations that fail
/// leave prior state untouched: a failed [`step`](crate::ga::GeneticOptimizer::step)
/// keeps the previous population.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GaError {
    /// The interval's lower bound exceeds its upper bound (or a bound is NaN).
    #[error("invalid domain: lower bound {low} exceeds upper bound {high}")]
    InvalidDomain { low: f64, high: f64 },

    /// A weight is negative or NaN, the weights do not sum to a positive
    /// value, or the weights do not line up with the values.
    #[error("invalid weights: {0}")]
    InvalidWeights(String),

    /// Sampling without replacement asked for more values than exist.
    #[error("cannot draw {requested} values without replacement from {available}")]
    OutOfRange { requested: usize, available: usize },

    /// An optimizer parameter is outside its accepted range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, GaError>;
