//! Fitness-proportionate (roulette wheel) sampling.
//!
//! Each index is drawn with probability proportional to its weight. Parent
//! selection calls [`choose`] without replacement so a pair is always two
//! distinct members.
//!
//! # Complexity
//! O(n) per draw (linear scan of the cumulative weights). Drawing without
//! replacement also shifts the working copies, still O(n) per draw.
//!
//! # References
//!
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and
//!   Machine Learning*, ch. 1
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use crate::error::{GaError, Result};
use rand::Rng;

/// Draws one index with probability proportional to its weight.
///
/// Draws `r` uniformly from `[0, sum)` and returns the unique `i` with
/// `sum(weights[..i]) <= r < sum(weights[..=i])`. Zero-weight entries are
/// never returned.
///
/// Fails with [`GaError::InvalidWeights`] if a weight is negative or NaN,
/// or the weights do not sum to a positive finite value.
///
/// ```
/// use u_bitga::ga::selection::choose_one;
/// use u_bitga::random::create_rng;
///
/// let mut rng = create_rng(1);
/// assert_eq!(choose_one(&[0.0, 2.0, 0.0], &mut rng).unwrap(), 1);
/// assert!(choose_one(&[1.0, -1.0], &mut rng).is_err());
/// ```
pub fn choose_one<R: Rng + ?Sized>(weights: &[f64], rng: &mut R) -> Result<usize> {
    let total = total_weight(weights)?;
    let threshold = rng.random_range(0.0..total);

    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        if cumulative + w > threshold {
            return Ok(i);
        }
        cumulative += w;
    }

    // Rounding in the running sum can leave the threshold unreached.
    Ok(weights
        .iter()
        .rposition(|&w| w > 0.0)
        .unwrap_or(weights.len() - 1))
}

/// Draws `count` indices into `weights`, in draw order.
///
/// Without replacement, each drawn index is removed from the working set
/// before the next draw, so no index repeats. With replacement, the
/// weights are left intact.
///
/// Fails with [`GaError::OutOfRange`] when drawing without replacement and
/// `count > weights.len()`, and with [`GaError::InvalidWeights`] when any
/// draw sees weights that [`choose_one`] rejects. Failure happens before
/// any result is returned.
pub fn choose_indices<R: Rng + ?Sized>(
    weights: &[f64],
    count: usize,
    replace: bool,
    rng: &mut R,
) -> Result<Vec<usize>> {
    if !replace && count > weights.len() {
        return Err(GaError::OutOfRange {
            requested: count,
            available: weights.len(),
        });
    }

    let mut pool: Vec<usize> = (0..weights.len()).collect();
    let mut remaining = weights.to_vec();
    let mut chosen = Vec::with_capacity(count);

    while chosen.len() < count {
        let idx = choose_one(&remaining, rng)?;
        chosen.push(pool[idx]);
        if !replace {
            pool.remove(idx);
            remaining.remove(idx);
        }
    }

    Ok(chosen)
}

/// Draws `count` values, weighting `values[i]` by `weights[i]`.
///
/// Same semantics as [`choose_indices`]; additionally fails with
/// [`GaError::InvalidWeights`] if the two slices differ in length.
///
/// ```
/// use u_bitga::ga::selection::choose;
/// use u_bitga::random::create_rng;
///
/// let mut rng = create_rng(42);
/// let mut picked = choose(&["a", "b", "c"], &[1.0, 1.0, 1.0], 3, false, &mut rng).unwrap();
/// picked.sort();
/// assert_eq!(picked, ["a", "b", "c"]);
/// ```
pub fn choose<T: Clone, R: Rng + ?Sized>(
    values: &[T],
    weights: &[f64],
    count: usize,
    replace: bool,
    rng: &mut R,
) -> Result<Vec<T>> {
    if values.len() != weights.len() {
        return Err(GaError::InvalidWeights(format!(
            "{} weights given for {} values",
            weights.len(),
            values.len()
        )));
    }

    let indices = choose_indices(weights, count, replace, rng)?;
    Ok(indices.into_iter().map(|i| values[i].clone()).collect())
}

/// Validates `weights` and returns their sum.
fn total_weight(weights: &[f64]) -> Result<f64> {
    if let Some((i, w)) = weights
        .iter()
        .enumerate()
        .find(|(_, w)| w.is_nan() || **w < 0.0)
    {
        return Err(GaError::InvalidWeights(format!(
            "weight at index {i} is {w}, expected a non-negative number"
        )));
    }

    let total: f64 = weights.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return Err(GaError::InvalidWeights(format!(
            "weights must sum to a positive finite value, got {total}"
        )));
    }
    Ok(total)
}
