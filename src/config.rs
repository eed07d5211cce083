//! Engine configuration.
//!
//! [`AndConfig`] holds all parameters that control the generational loop.

/// Configuration for the AnD engine.
///
/// # Defaults
///
/// ```
/// use and_moea::AndConfig;
///
/// let config = AndConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_generations, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use and_moea::AndConfig;
///
/// let config = AndConfig::default()
///     .with_population_size(200)
///     .with_max_evaluations(50_000)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AndConfig {
    /// Target population size. Also the number of offspring produced per
    /// generation (one-to-one overproduction), so each generation merges to
    /// roughly twice this size before truncating back down.
    ///
    /// The truncation pass costs O(population_size³) in the worst case;
    /// moderate sizes (hundreds) are the intended operating range.
    pub population_size: usize,

    /// Maximum number of generations before termination.
    pub max_generations: usize,

    /// Optional budget on objective-function evaluations (NFE).
    ///
    /// Checked at the generation boundary, so the final count may overshoot
    /// the budget by at most one generation's worth of evaluations.
    /// `None` disables evaluation-based termination.
    pub max_evaluations: Option<u64>,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed. With a fixed seed and a deterministic
    /// variation operator, runs are reproducible bit-for-bit.
    pub seed: Option<u64>,
}

impl Default for AndConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_generations: 500,
            max_evaluations: None,
            seed: None,
        }
    }
}

impl AndConfig {
    /// Sets the target population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_max_generations(mut self, n: usize) -> Self {
        self.max_generations = n;
        self
    }

    /// Sets the evaluation budget (NFE).
    pub fn with_max_evaluations(mut self, nfe: u64) -> Self {
        self.max_evaluations = Some(nfe);
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Returns `Err` with a description if any parameter is invalid.
    pub fn validate(&self) -> Result<(), String> {
        if self.population_size < 2 {
            return Err("population_size must be at least 2".into());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be at least 1".into());
        }
        if self.max_evaluations == Some(0) {
            return Err("max_evaluations must be positive or None".into());
        }
        Ok(())
    }
}
