//! Shift-based density estimation (SDE).
//!
//! A crowding metric that is fair across non-dominated fronts: before
//! measuring distance to a reference solution, every neighbor dimension
//! that falls below the reference is pulled up to the reference's value,
//! collapsing any advantage the neighbor holds over it. The k-th smallest
//! of the resulting distances estimates how crowded the reference's
//! neighborhood is.

use crate::types::Solution;

/// Euclidean distance between two equal-length vectors.
pub fn euclidean_distance(a: &[f64], b: &[f64]) -> f64 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| (x - y) * (x - y))
        .sum::<f64>()
        .sqrt()
}

/// Rebuilds every other solution's `shift_normalized_objectives` relative
/// to the reference at `index`.
///
/// For each objective `j` of a neighbor: the value is raised to the
/// reference's `normalized_objectives[j]` when it falls below it, and left
/// untouched otherwise. The reference solution itself is skipped.
pub fn shift_population<G>(population: &mut [Solution<G>], index: usize) {
    let reference = population[index].normalized_objectives.clone();

    for (i, solution) in population.iter_mut().enumerate() {
        if i == index {
            continue;
        }

        let shifted = solution
            .normalized_objectives
            .iter()
            .zip(reference.iter())
            .map(|(&value, &floor)| if value < floor { floor } else { value })
            .collect();

        solution.shift_normalized_objectives = shifted;
    }
}

/// Shift-based density estimate for the solution at `index`.
///
/// Shifts the rest of the population relative to the reference, collects
/// the Euclidean distances from each shifted vector to the unshifted
/// reference, sorts them ascending, and returns `1 / (d_k + 2)` where
/// `k = floor(sqrt(n))` and `n` is the live population size. Larger value
/// = denser (more crowded) neighborhood.
///
/// For populations too small to hold a k-th neighbor (`k >= n - 1`), `k`
/// is clamped to the last distance instead of indexing out of bounds.
///
/// # Panics
/// Panics if the population has fewer than two members — there is no
/// neighbor to measure against.
pub fn shift_density<G>(population: &mut [Solution<G>], index: usize) -> f64 {
    let n = population.len();
    assert!(n >= 2, "density estimation needs at least two solutions");

    shift_population(population, index);

    let reference = &population[index].normalized_objectives;
    let mut distances: Vec<f64> = population
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != index)
        .map(|(_, solution)| euclidean_distance(&solution.shift_normalized_objectives, reference))
        .collect();

    distances.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let k = (n as f64).sqrt() as usize;
    let k = k.min(distances.len() - 1);

    1.0 / (distances[k] + 2.0)
}
