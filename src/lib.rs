//! Many-objective evolutionary optimization with angle-based selection and
//! shift-based density estimation (AnD).
//!
//! AnD is a steady-growth generational algorithm: each generation produces
//! one population's worth of offspring, merges them with the current
//! population, and then repeatedly removes the most redundant individual
//! until the population is back at its target size. Redundancy is measured
//! in objective space — the pair of solutions whose normalized objective
//! vectors have the smallest angle is located, and the member of the pair
//! with the higher shift-based crowding density is discarded.
//!
//! # Core Traits
//!
//! - [`AndProblem`]: Problem definition — decision encoding, initialization,
//!   objective evaluation
//! - [`Variation`]: Recombination/mutation operator consuming a fixed number
//!   of parents
//!
//! # Key Types
//!
//! - [`AndConfig`]: Algorithm parameters (target size, budgets, seed)
//! - [`AndRunner`]: Executes the generational loop
//! - [`AndResult`]: Final population with run statistics
//!
//! # Submodules
//!
//! - [`normalize`]: Objective bounds and [0, 1] rescaling
//! - [`angle`]: Cosine/angle metrics and the nearest-pair search
//! - [`density`]: Shift-based density estimation (SDE)
//! - [`selection`]: The environmental truncation loop
//!
//! # References
//!
//! - Liu, Ishibuchi, Nojima, Masuyama, Shang (2018), *A Simple
//!   Multiobjective Evolutionary Algorithm with Angle-Based Selection and
//!   Shift-Based Density Estimation*
//! - Li, Yang, Liu (2014), *Shift-Based Density Estimation for
//!   Pareto-Based Algorithms in Many-Objective Optimization*

pub mod angle;
pub mod config;
pub mod density;
pub mod normalize;
pub mod runner;
pub mod selection;
pub mod types;

pub use config::AndConfig;
pub use runner::{AndResult, AndRunner};
pub use types::{AndProblem, Solution, Variation};
