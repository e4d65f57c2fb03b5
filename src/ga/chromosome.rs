//! Binary-encoded chromosomes for single-variable function maximization.
//!
//! A [`Chromosome`] stores a 64-bit encoding and the two quantities derived
//! from it: the decoded point in a [`ClosedInterval`] and the objective
//! function's value at that point. Both are computed once, at construction.

use super::operators;
use super::types::Genome;
use crate::error::{GaError, Result};
use rand::Rng;
use std::fmt;
use std::sync::Arc;

/// `u64::MAX` as a float, the divisor of the decoding scale factor.
const MAX_ENCODING: f64 = u64::MAX as f64;

/// An inclusive real interval `[low, high]` with `low <= high`.
///
/// # Examples
///
/// ```
/// use u_bitga::ga::ClosedInterval;
///
/// let unit = ClosedInterval::new(0.0, 1.0).unwrap();
/// assert_eq!(unit.decode(0), 0.0);
/// assert!(ClosedInterval::new(1.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawInterval"))]
pub struct ClosedInterval {
    low: f64,
    high: f64,
}

impl ClosedInterval {
    /// Creates the interval `[low, high]`.
    ///
    /// Fails with [`GaError::InvalidDomain`] when `low > high` or either
    /// bound is NaN.
    pub fn new(low: f64, high: f64) -> Result<Self> {
        if low.is_nan() || high.is_nan() || low > high {
            return Err(GaError::InvalidDomain { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn width(&self) -> f64 {
        self.high - self.low
    }

    pub fn contains(&self, x: f64) -> bool {
        self.low <= x && x <= self.high
    }

    /// Maps an encoding affinely onto the interval.
    ///
    /// `0` decodes to `low` and `u64::MAX` to `high` (up to rounding). The
    /// map is non-decreasing in `bits`.
    pub fn decode(&self, bits: u64) -> f64 {
        let scale = self.width() / MAX_ENCODING;
        self.low + scale * bits as f64
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawInterval {
    low: f64,
    high: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawInterval> for ClosedInterval {
    type Error = GaError;

    fn try_from(raw: RawInterval) -> Result<Self> {
        Self::new(raw.low, raw.high)
    }
}

/// The objective function and domain shared by every chromosome of a run.
pub struct SearchSpace {
    domain: ClosedInterval,
    objective: Box<dyn Fn(f64) -> f64 + Send + Sync>,
}

impl SearchSpace {
    /// Bundles a domain with the objective to maximize over it.
    ///
    /// The objective must be pure and should be non-negative on the domain,
    /// since fitness is used directly as a selection weight. Wrap the result
    /// in an [`Arc`] to share it across chromosomes.
    pub fn new<F>(domain: ClosedInterval, objective: F) -> Self
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Self {
            domain,
            objective: Box::new(objective),
        }
    }

    /// Validates the bounds and returns a space ready to share.
    pub fn from_bounds<F>(low: f64, high: f64, objective: F) -> Result<Arc<Self>>
    where
        F: Fn(f64) -> f64 + Send + Sync + 'static,
    {
        Ok(Arc::new(Self::new(ClosedInterval::new(low, high)?, objective)))
    }

    pub fn domain(&self) -> &ClosedInterval {
        &self.domain
    }

    /// Evaluates the objective at `x`.
    pub fn evaluate(&self, x: f64) -> f64 {
        (self.objective)(x)
    }
}

impl fmt::Debug for SearchSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SearchSpace")
            .field("domain", &self.domain)
            .finish_non_exhaustive()
    }
}

/// A candidate point encoded as 64 bits.
///
/// Immutable: [`Genome::crossover`] and [`Genome::mutate`] build new
/// chromosomes that share this one's [`SearchSpace`].
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use u_bitga::ga::{Chromosome, ClosedInterval, Genome, SearchSpace};
///
/// let space = Arc::new(SearchSpace::new(ClosedInterval::new(0.0, 2.0).unwrap(), |x| x * x));
/// let top = Chromosome::new(u64::MAX, space);
/// assert!((top.value() - 2.0).abs() < 1e-12);
/// assert!((top.fitness() - 4.0).abs() < 1e-12);
/// ```
#[derive(Clone)]
pub struct Chromosome {
    bits: u64,
    value: f64,
    fitness: f64,
    space: Arc<SearchSpace>,
}

impl Chromosome {
    /// Builds a chromosome from an explicit encoding, decoding and
    /// evaluating it immediately.
    pub fn new(bits: u64, space: Arc<SearchSpace>) -> Self {
        let value = space.domain().decode(bits);
        let fitness = space.evaluate(value);
        Self {
            bits,
            value,
            fitness,
            space,
        }
    }

    /// Builds a chromosome from a uniformly random encoding.
    pub fn random<R: Rng + ?Sized>(space: Arc<SearchSpace>, rng: &mut R) -> Self {
        Self::new(rng.random::<u64>(), space)
    }

    pub fn bits(&self) -> u64 {
        self.bits
    }

    pub fn space(&self) -> &Arc<SearchSpace> {
        &self.space
    }

    pub fn domain(&self) -> &ClosedInterval {
        self.space.domain()
    }

    fn with_bits(&self, bits: u64) -> Self {
        Self::new(bits, Arc::clone(&self.space))
    }
}

impl Genome for Chromosome {
    type Context = Arc<SearchSpace>;

    fn spawn<R: Rng + ?Sized>(context: &Arc<SearchSpace>, rng: &mut R) -> Self {
        Self::random(Arc::clone(context), rng)
    }

    fn value(&self) -> f64 {
        self.value
    }

    fn fitness(&self) -> f64 {
        self.fitness
    }

    /// Children take `self`'s search space, whatever `other` carries.
    fn crossover<R: Rng + ?Sized>(&self, other: &Self, rng: &mut R) -> (Self, Self) {
        let (c, d) = operators::crossover(self.bits, other.bits, rng);
        (self.with_bits(c), self.with_bits(d))
    }

    fn mutate<R: Rng + ?Sized>(&self, rate: f64, rng: &mut R) -> Self {
        self.with_bits(operators::flip_bits(self.bits, rate, rng))
    }
}

impl fmt::Debug for Chromosome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Chromosome")
            .field("bits", &format_args!("{:#018x}", self.bits))
            .field("value", &self.value)
            .field("fitness", &self.fitness)
            .finish()
    }
}
