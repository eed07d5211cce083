//! AnD generational loop execution.
//!
//! [`AndRunner`] orchestrates the complete process per generation:
//! offspring generation → evaluation → merge → normalization →
//! angle/density truncation, repeated until a generation or evaluation
//! budget is exhausted.

use crate::config::AndConfig;
use crate::normalize::{normalize_population, ObjectiveBounds};
use crate::selection::truncate;
use crate::types::{AndProblem, Solution, Variation};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Result of an AnD optimization run.
#[derive(Debug, Clone)]
pub struct AndResult<G> {
    /// Final population, exactly `population_size` solutions.
    pub population: Vec<Solution<G>>,

    /// Total number of generations executed.
    pub generations: usize,

    /// Total number of objective-function evaluations (NFE).
    pub evaluations: u64,

    /// Whether the run was cancelled externally.
    pub cancelled: bool,
}

impl<G> AndResult<G> {
    /// Raw objective vectors of the final population.
    pub fn objectives(&self) -> Vec<Vec<f64>> {
        self.population
            .iter()
            .map(|s| s.objectives.clone())
            .collect()
    }
}

/// Executes the AnD generational loop.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = AndConfig::default().with_seed(42);
/// let result = AndRunner::run(&problem, &MyVariation, &config);
/// for objectives in result.objectives() {
///     println!("{objectives:?}");
/// }
/// ```
pub struct AndRunner;

impl AndRunner {
    /// Runs the optimization.
    ///
    /// # Panics
    /// Panics if the configuration is invalid (call [`AndConfig::validate`]
    /// first to get a descriptive error).
    pub fn run<P, V>(problem: &P, variation: &V, config: &AndConfig) -> AndResult<P::Genome>
    where
        P: AndProblem,
        V: Variation<P::Genome>,
    {
        Self::run_with_cancel(problem, variation, config, None)
    }

    /// Runs the optimization with an optional cancellation token.
    ///
    /// Each generation is one atomic sweep; the flag is observed only at
    /// the generation boundary, and the best population found so far is
    /// returned when it fires.
    pub fn run_with_cancel<P, V>(
        problem: &P,
        variation: &V,
        config: &AndConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> AndResult<P::Genome>
    where
        P: AndProblem,
        V: Variation<P::Genome>,
    {
        config.validate().expect("invalid AndConfig");

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let target = config.population_size;
        let mut evaluations: u64 = 0;

        // 1. Initialize and evaluate the starting population
        let mut population: Vec<Solution<P::Genome>> = (0..target)
            .map(|_| Solution::new(problem.create_genome(&mut rng)))
            .collect();
        evaluate_all(problem, &mut population, &mut evaluations);

        let mut generations = 0usize;
        let mut cancelled = false;

        // 2. Generational loop
        for gen in 0..config.max_generations {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    cancelled = true;
                    break;
                }
            }

            if let Some(budget) = config.max_evaluations {
                if evaluations >= budget {
                    break;
                }
            }

            // Offspring generation: uniform parent draws with replacement.
            // Operators returning two children may overshoot the target by
            // one; the surplus is merged and pruned like everything else.
            let mut offspring: Vec<Solution<P::Genome>> = Vec::with_capacity(target + 1);
            while offspring.len() < target {
                let parents = select_parents(&population, variation.arity(), &mut rng);
                for child in variation.evolve(&parents, &mut rng) {
                    offspring.push(Solution::new(child));
                }
            }

            // Merge
            evaluate_all(problem, &mut offspring, &mut evaluations);
            population.append(&mut offspring);

            // Normalize the whole merged population, then truncate back
            let bounds = ObjectiveBounds::from_population(&population, problem.num_objectives());
            normalize_population(&mut population, &bounds);
            truncate(&mut population, target);
            debug_assert_eq!(
                population.len(),
                target,
                "population size invariant violated after truncation"
            );

            generations = gen + 1;
            problem.on_generation(generations, &population);
        }

        AndResult {
            population,
            generations,
            evaluations,
            cancelled,
        }
    }
}

/// Draws `arity` parents uniformly at random, with replacement.
fn select_parents<'a, G, R: Rng>(
    population: &'a [Solution<G>],
    arity: usize,
    rng: &mut R,
) -> Vec<&'a G> {
    (0..arity)
        .map(|_| &population[rng.random_range(0..population.len())].genome)
        .collect()
}

/// Evaluates every solution in place, counting objective-function calls.
fn evaluate_all<P: AndProblem>(
    problem: &P,
    solutions: &mut [Solution<P::Genome>],
    evaluations: &mut u64,
) {
    for solution in solutions.iter_mut() {
        solution.objectives = problem.evaluate(&solution.genome);
        *evaluations += 1;
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    // ---- A biobjective line problem: minimize (x, 1 - x) over x in [0, 1].
    // The whole Pareto front is the segment itself, so selection quality
    // shows up as spread along the line.

    struct LineProblem;

    impl AndProblem for LineProblem {
        type Genome = f64;

        fn num_objectives(&self) -> usize {
            2
        }

        fn create_genome<R: Rng>(&self, rng: &mut R) -> f64 {
            rng.random_range(0.0..1.0)
        }

        fn evaluate(&self, genome: &f64) -> Vec<f64> {
            vec![*genome, 1.0 - *genome]
        }
    }

    /// Averages two parents and nudges the result.
    struct BlendVariation;

    impl Variation<f64> for BlendVariation {
        fn arity(&self) -> usize {
            2
        }

        fn evolve<R: Rng>(&self, parents: &[&f64], rng: &mut R) -> Vec<f64> {
            let mid = (*parents[0] + *parents[1]) / 2.0;
            vec![(mid + rng.random_range(-0.05..0.05)).clamp(0.0, 1.0)]
        }
    }

    /// Returns its parents unchanged. Offspring are exact copies, so every
    /// merged individual is drawn from the initial population.
    struct IdentityVariation;

    impl Variation<f64> for IdentityVariation {
        fn arity(&self) -> usize {
            2
        }

        fn evolve<R: Rng>(&self, parents: &[&f64], _rng: &mut R) -> Vec<f64> {
            vec![*parents[0], *parents[1]]
        }
    }

    #[test]
    fn test_population_size_invariant_across_generations() {
        let config = AndConfig::default()
            .with_population_size(10)
            .with_max_generations(5)
            .with_seed(42);

        let result = AndRunner::run(&LineProblem, &BlendVariation, &config);
        assert_eq!(result.population.len(), 10);
        assert_eq!(result.generations, 5);
    }

    #[test]
    fn test_evaluation_counting() {
        // Initial population + one generation of offspring. With a
        // two-child operator and an even target, offspring count is exact.
        let config = AndConfig::default()
            .with_population_size(8)
            .with_max_generations(3)
            .with_seed(42);

        let result = AndRunner::run(&LineProblem, &IdentityVariation, &config);
        assert_eq!(result.evaluations, 8 + 3 * 8);
    }

    #[test]
    fn test_evaluation_budget_stops_early() {
        let config = AndConfig::default()
            .with_population_size(8)
            .with_max_generations(1000)
            .with_max_evaluations(40)
            .with_seed(42);

        let result = AndRunner::run(&LineProblem, &BlendVariation, &config);
        // Budget is checked at the generation boundary: the run may finish
        // the generation in flight but must not start another one past it.
        assert!(result.generations < 1000);
        assert!(result.evaluations <= 40 + 8);
        assert_eq!(result.population.len(), 8);
    }

    #[test]
    fn test_determinism_same_seed_same_population() {
        let config = AndConfig::default()
            .with_population_size(12)
            .with_max_generations(8)
            .with_seed(1234);

        let a = AndRunner::run(&LineProblem, &BlendVariation, &config);
        let b = AndRunner::run(&LineProblem, &BlendVariation, &config);

        assert_eq!(a.evaluations, b.evaluations);
        assert_eq!(a.objectives(), b.objectives());
    }

    #[test]
    fn test_end_to_end_identity_scenario() {
        // Target 4, offspring 4, identity variation: the 8 merged
        // individuals are all copies of the initial 4, so the final
        // population must be a multiset drawn from the initial genomes.
        let config = AndConfig::default()
            .with_population_size(4)
            .with_max_generations(1)
            .with_seed(99);

        let result = AndRunner::run(&LineProblem, &IdentityVariation, &config);
        assert_eq!(result.population.len(), 4);

        // Reconstruct the initial genomes from a fresh seeded stream.
        let mut rng = StdRng::seed_from_u64(99);
        let initial: Vec<f64> = (0..4).map(|_| LineProblem.create_genome(&mut rng)).collect();

        for solution in &result.population {
            assert!(
                initial.contains(&solution.genome),
                "final genome {} not drawn from the initial population",
                solution.genome
            );
        }

        // Reproducible across runs.
        let again = AndRunner::run(&LineProblem, &IdentityVariation, &config);
        assert_eq!(result.objectives(), again.objectives());
    }

    #[test]
    fn test_cancellation_before_first_generation() {
        let config = AndConfig::default()
            .with_population_size(8)
            .with_max_generations(100)
            .with_seed(42);

        let cancel = Arc::new(AtomicBool::new(true));
        let result =
            AndRunner::run_with_cancel(&LineProblem, &BlendVariation, &config, Some(cancel));

        assert!(result.cancelled);
        assert_eq!(result.generations, 0);
        // The initial population is still evaluated and returned.
        assert_eq!(result.population.len(), 8);
        assert_eq!(result.evaluations, 8);
    }

    #[test]
    fn test_on_generation_fires_each_generation() {
        use std::sync::atomic::AtomicUsize;

        struct Observed {
            calls: AtomicUsize,
        }

        impl AndProblem for Observed {
            type Genome = f64;

            fn num_objectives(&self) -> usize {
                2
            }

            fn create_genome<R: Rng>(&self, rng: &mut R) -> f64 {
                rng.random_range(0.0..1.0)
            }

            fn evaluate(&self, genome: &f64) -> Vec<f64> {
                vec![*genome, 1.0 - *genome]
            }

            fn on_generation(&self, generation: usize, population: &[Solution<f64>]) {
                assert_eq!(population.len(), 6);
                assert_eq!(generation, self.calls.load(Ordering::SeqCst) + 1);
                self.calls.fetch_add(1, Ordering::SeqCst);
            }
        }

        let problem = Observed {
            calls: AtomicUsize::new(0),
        };
        let config = AndConfig::default()
            .with_population_size(6)
            .with_max_generations(4)
            .with_seed(42);

        AndRunner::run(&problem, &IdentityVariation, &config);
        assert_eq!(problem.calls.load(Ordering::SeqCst), 4);
    }

    #[test]
    fn test_spread_is_preserved_on_the_front() {
        // With every solution on the Pareto front, truncation should keep
        // the extremes rather than collapse toward a cluster.
        let config = AndConfig::default()
            .with_population_size(20)
            .with_max_generations(30)
            .with_seed(7);

        let result = AndRunner::run(&LineProblem, &BlendVariation, &config);

        let xs: Vec<f64> = result.population.iter().map(|s| s.genome).collect();
        let min = xs.iter().cloned().fold(f64::INFINITY, f64::min);
        let max = xs.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
        assert!(
            max - min > 0.5,
            "population collapsed: spread {} after selection",
            max - min
        );
    }

    #[test]
    #[should_panic(expected = "invalid AndConfig")]
    fn test_invalid_config_panics() {
        let config = AndConfig::default().with_population_size(1);
        AndRunner::run(&LineProblem, &BlendVariation, &config);
    }
}
