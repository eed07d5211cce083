//! Core trait definitions for the AnD engine.
//!
//! [`AndProblem`] and [`Variation`] define the contract between the generic
//! engine and domain-specific problem implementations: the problem owns
//! decision encoding and objective evaluation, the variation operator owns
//! crossover/mutation mechanics, and the engine owns everything else.

use rand::Rng;

/// A candidate solution in the population.
///
/// The genome is opaque to the engine; the engine owns the objective vector
/// (written by evaluation) and the two derived vectors used by environmental
/// selection. Both derived vectors are generation-scoped: they are
/// recomputed from the live population every generation and never persisted.
#[derive(Debug, Clone)]
pub struct Solution<G> {
    /// Decision variables. Created by the problem, recombined by the
    /// variation operator, never inspected by the engine.
    pub genome: G,

    /// Raw objective values, written by [`AndProblem::evaluate`].
    /// All objectives are minimized.
    pub objectives: Vec<f64>,

    /// Objectives rescaled into [0, 1] with the current population bounds.
    /// Empty until the first normalization pass.
    pub normalized_objectives: Vec<f64>,

    /// Shifted copy of `normalized_objectives` relative to the current
    /// density reference. Scratch data, overwritten per candidate.
    pub shift_normalized_objectives: Vec<f64>,
}

impl<G> Solution<G> {
    /// Wraps a genome with an empty, not-yet-evaluated objective vector.
    pub fn new(genome: G) -> Self {
        Self {
            genome,
            objectives: Vec::new(),
            normalized_objectives: Vec::new(),
            shift_normalized_objectives: Vec::new(),
        }
    }
}

/// Defines a many-objective optimization problem.
///
/// This is the main trait that users implement to plug their domain-specific
/// logic into the engine. It covers:
///
/// 1. **Initialization**: How to create random genomes
/// 2. **Evaluation**: How to compute the objective vector
///
/// Variation lives in its own trait ([`Variation`]) so that operators can be
/// swapped independently of the problem definition.
///
/// # Thread Safety
///
/// `AndProblem` must be `Send + Sync` so that problems can be shared with a
/// cancellation watchdog or an outer experiment harness.
pub trait AndProblem: Send + Sync {
    /// The decision-variable type for this problem.
    type Genome: Clone + Send + Sync;

    /// Number of objectives `m`.
    ///
    /// Every vector returned by [`evaluate`](Self::evaluate) must have this
    /// length.
    fn num_objectives(&self) -> usize;

    /// Creates a random genome.
    ///
    /// Called during population initialization. The implementation should
    /// produce a valid (but not necessarily good) solution.
    fn create_genome<R: Rng>(&self, rng: &mut R) -> Self::Genome;

    /// Evaluates a genome and returns its objective vector.
    ///
    /// This is typically the most expensive operation. The engine batches
    /// calls over whole offspring populations. Lower values are better on
    /// every objective (minimization).
    fn evaluate(&self, genome: &Self::Genome) -> Vec<f64>;

    /// Called after each generation's truncation with the surviving
    /// population.
    ///
    /// Useful for logging, convergence tracking, or external communication.
    /// The default implementation is a no-op.
    fn on_generation(&self, _generation: usize, _population: &[Solution<Self::Genome>]) {}
}

/// A variation operator: consumes a fixed number of parents and produces
/// one or more offspring genomes.
///
/// # Implementing
///
/// ```ignore
/// struct Blend;
///
/// impl Variation<Vec<f64>> for Blend {
///     fn arity(&self) -> usize { 2 }
///
///     fn evolve<R: Rng>(&self, parents: &[&Vec<f64>], rng: &mut R) -> Vec<Vec<f64>> {
///         let child = parents[0]
///             .iter()
///             .zip(parents[1].iter())
///             .map(|(a, b)| (a + b) / 2.0 + rng.random_range(-0.1..0.1))
///             .collect();
///         vec![child]
///     }
/// }
/// ```
pub trait Variation<G>: Send + Sync {
    /// Number of parents consumed per [`evolve`](Self::evolve) call.
    fn arity(&self) -> usize;

    /// Produces offspring from the given parents.
    ///
    /// `parents.len()` equals [`arity`](Self::arity). The number of children
    /// may vary by operator but is 1 or 2 in practice.
    fn evolve<R: Rng>(&self, parents: &[&G], rng: &mut R) -> Vec<G>;
}
