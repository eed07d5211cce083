//! Objective-space normalization.
//!
//! Environmental selection compares solutions by the direction and spread of
//! their objective vectors, so all objectives are first rescaled into
//! [0, 1] using the per-objective minimum and maximum over the live
//! population. Bounds and normalized vectors are recomputed from scratch
//! every generation.

use crate::types::Solution;

/// Per-objective minimum and maximum over a population.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectiveBounds {
    /// Minimum of each objective across all solutions.
    pub min: Vec<f64>,
    /// Maximum of each objective across all solutions.
    pub max: Vec<f64>,
}

impl ObjectiveBounds {
    /// Scans the population once and records the minimum and maximum of
    /// each objective.
    ///
    /// # Complexity
    /// O(n * m) — every solution and every objective is visited exactly once.
    ///
    /// # Panics
    /// Panics if `population` is empty.
    pub fn from_population<G>(population: &[Solution<G>], num_objectives: usize) -> Self {
        assert!(
            !population.is_empty(),
            "cannot compute bounds of an empty population"
        );

        let mut min = vec![f64::INFINITY; num_objectives];
        let mut max = vec![f64::NEG_INFINITY; num_objectives];

        for solution in population {
            for i in 0..num_objectives {
                min[i] = min[i].min(solution.objectives[i]);
                max[i] = max[i].max(solution.objectives[i]);
            }
        }

        Self { min, max }
    }

    /// Range of objective `i`. Zero when the objective is flat across the
    /// population.
    pub fn range(&self, i: usize) -> f64 {
        self.max[i] - self.min[i]
    }
}

/// Rescales every solution's objectives into [0, 1] and writes the result
/// into its `normalized_objectives` field, overwriting the previous
/// generation's value. Raw objectives are left untouched.
///
/// A flat objective (zero range) normalizes to 0.0 for every solution;
/// the 0/0 division is never performed, so NaN cannot leak into the angle
/// and distance computations downstream.
pub fn normalize_population<G>(population: &mut [Solution<G>], bounds: &ObjectiveBounds) {
    let m = bounds.min.len();

    for solution in population.iter_mut() {
        let mut normalized = vec![0.0; m];
        for i in 0..m {
            let range = bounds.max[i] - bounds.min[i];
            if range > 0.0 {
                normalized[i] = (solution.objectives[i] - bounds.min[i]) / range;
            }
        }
        solution.normalized_objectives = normalized;
    }
}
