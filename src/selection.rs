//! Environmental selection: angle-driven truncation.
//!
//! After offspring are merged in, the population is pruned one solution at
//! a time: find the two members whose normalized objective vectors are
//! closest in angle, estimate both of their shift-based densities, and
//! discard the more crowded of the two. Everything is recomputed from the
//! live population on every iteration — indices never survive a removal.

use crate::angle::nearest_pair;
use crate::density::shift_density;
use crate::types::Solution;

/// Shrinks `population` back to `target` size.
///
/// Requires `normalized_objectives` to be populated for every member (see
/// [`normalize_population`](crate::normalize::normalize_population)).
///
/// Removal rule: with nearest pair `(i, j)` and density estimates
/// `d_i`, `d_j`, a strict `d_i < d_j` removes `j`; anything else —
/// including an exact tie — removes `i`.
///
/// A population already at or below `target` is left untouched.
pub fn truncate<G>(population: &mut Vec<Solution<G>>, target: usize) {
    while population.len() > target {
        let Some((i, j)) = nearest_pair(population) else {
            // target of zero with a single survivor; nothing to pair up
            break;
        };

        let density_i = shift_density(population, i);
        let density_j = shift_density(population, j);

        if density_i < density_j {
            population.remove(j);
        } else {
            population.remove(i);
        }
    }

    debug_assert!(
        population.len() <= target || population.len() < 2,
        "truncation failed to reach target size"
    );
}
