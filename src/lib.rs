//! Genetic optimizer for universal basic income policy parameters.
//!
//! A run searches monthly UBI amounts, a flat tax, age cohort cutoffs and
//! program replacement rates for the best-scoring policy under budget and
//! ordering constraints, honouring any parameters the caller has locked.

pub mod config;
pub mod engines;
pub mod error;
pub mod services;
pub mod types;

pub use engines::generation::{
    optimize_for_scenario, optimize_ubi_parameters, EvolutionEngine, Genome, ProgressCallback,
    Scenario, ScenarioInputs,
};
pub use error::{OptimizerError, Result};
pub use types::{EvaluationResult, Locks, OptimizationConstraints, OptimizationTarget};
