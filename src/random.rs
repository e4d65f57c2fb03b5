//! Random number generator construction.
//!
//! Any [`rand::Rng`] works as the random source for the engine. Every
//! operation borrows it mutably, so a single generator threads through a
//! whole run and a fixed seed reproduces it exactly.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic generator from a seed.
///
/// ```
/// use rand::Rng;
/// use u_bitga::random::create_rng;
///
/// let mut a = create_rng(7);
/// let mut b = create_rng(7);
/// assert_eq!(a.random::<u64>(), b.random::<u64>());
/// ```
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator seeded from operating system entropy.
pub fn entropy_rng() -> StdRng {
    StdRng::from_os_rng()
}
