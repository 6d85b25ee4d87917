//! Random number generator construction.
//!
//! Search engines never create their own generator; callers pass one in.
//! These helpers exist for the outermost layer that decides on a seed.

use rand::rngs::StdRng;
use rand::SeedableRng;

/// Creates a deterministic generator from a seed.
///
/// ```
/// use rand::Rng;
/// use u_tabu::random::create_rng;
///
/// let a: u64 = create_rng(7).random();
/// let b: u64 = create_rng(7).random();
/// assert_eq!(a, b);
/// ```
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Creates a generator seeded from the process-level entropy source.
pub fn entropy_rng() -> StdRng {
    create_rng(rand::random())
}
