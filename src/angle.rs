//! Angular separation between normalized objective vectors.
//!
//! AnD identifies redundancy by direction rather than distance: the pair of
//! solutions whose normalized objective vectors point the most similar way
//! is the most redundant pair in the population.

use crate::types::Solution;

/// Cosine similarity between two equal-length vectors.
///
/// Assumes the vectors are normalized objective vectors; a zero-magnitude
/// input yields NaN, which the angle comparison treats as "no pair".
pub fn cosine(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let mag_a = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let mag_b = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    dot / (mag_a * mag_b)
}

/// Angle in radians between two equal-length vectors.
///
/// The cosine is clamped to [-1, 1] before `acos`: floating rounding can
/// push the raw cosine of near-parallel vectors slightly past 1, and
/// `acos` outside its domain would return NaN.
pub fn angle(a: &[f64], b: &[f64]) -> f64 {
    cosine(a, b).clamp(-1.0, 1.0).acos()
}

/// Finds the unordered index pair `(i, j)`, `i < j`, whose normalized
/// objective vectors have the smallest angle.
///
/// Exhaustive scan over all n*(n-1)/2 pairs. The comparison is a strict
/// `<`, so the first minimal pair in (i ascending, then j ascending) order
/// wins ties — the tie-break is deterministic by construction.
///
/// Returns `None` when the population has fewer than two members: no pair
/// exists, and that is the caller's condition to handle, not a panic.
///
/// # Complexity
/// O(n² * m). This runs once per removal, so a full truncation pass costs
/// O(offspring * n² * m) — fine at moderate population sizes (hundreds).
pub fn nearest_pair<G>(population: &[Solution<G>]) -> Option<(usize, usize)> {
    let n = population.len();
    if n < 2 {
        return None;
    }

    let mut smallest = f64::INFINITY;
    let mut pair = (0, 1);

    for i in 0..n {
        let a = &population[i].normalized_objectives;
        for j in (i + 1)..n {
            let b = &population[j].normalized_objectives;
            let theta = angle(a, b);
            if theta < smallest {
                smallest = theta;
                pair = (i, j);
            }
        }
    }

    Some(pair)
}
