//! Uniform random income draws.

use crate::error::{GiniError, Result};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Create a seeded random number generator.
///
/// The sequence is deterministic for a given seed.
pub fn create_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Draw `n` incomes uniformly from `[min, max]` (inclusive), sorted ascending.
///
/// # Arguments
/// * `n` - Number of individuals (must be positive)
/// * `min` - Lowest possible income (must be non-negative)
/// * `max` - Highest possible income (must be at least `min`)
/// * `rng` - Source of randomness
pub fn uniform_incomes<R: Rng>(n: usize, min: i64, max: i64, rng: &mut R) -> Result<Vec<i64>> {
    if n == 0 {
        return Err(GiniError::InvalidParameter(
            "Population size must be positive".to_string(),
        ));
    }
    if min < 0 {
        return Err(GiniError::InvalidParameter(format!(
            "Minimum income must be non-negative, got {}",
            min
        )));
    }
    if min > max {
        return Err(GiniError::InvalidParameter(format!(
            "Minimum income {} exceeds maximum income {}",
            min, max
        )));
    }

    let mut incomes: Vec<i64> = (0..n).map(|_| rng.gen_range(min..=max)).collect();
    incomes.sort_unstable();
    Ok(incomes)
}
