use crate::config::economics::EconomicAssumptions;
use crate::config::evolution::EvolutionConfig;
use crate::engines::evaluation::FitnessEvaluator;
use crate::engines::generation::evolution_engine::optimize_ubi_parameters;
use crate::engines::generation::genome::Genome;
use crate::engines::generation::progress::ProgressCallback;
use crate::error::{OptimizerError, Result};
use crate::types::{
    EconomicData, EvaluationResult, Locks, ObjectiveWeights, OptimizationConstraints,
    OptimizationTarget, PopulationData,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const SCENARIO_GENERATIONS: usize = 30;
pub const SCENARIO_POPULATION_SIZE: usize = 50;

/// Named objective/constraint bundles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Scenario {
    MaximizeBenefits,
    MinimizeTaxes,
    FiscalBalance,
    PoliticalFeasible,
}

impl Scenario {
    pub const ALL: [Scenario; 4] = [
        Scenario::MaximizeBenefits,
        Scenario::MinimizeTaxes,
        Scenario::FiscalBalance,
        Scenario::PoliticalFeasible,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::MaximizeBenefits => "maximize_benefits",
            Scenario::MinimizeTaxes => "minimize_taxes",
            Scenario::FiscalBalance => "fiscal_balance",
            Scenario::PoliticalFeasible => "political_feasible",
        }
    }

    /// Objective weights and constraints for this scenario. Constraint fields
    /// the scenario does not name keep their defaults.
    pub fn preset(&self, locks: Locks) -> OptimizationTarget {
        let defaults = OptimizationConstraints { locks, ..Default::default() };

        let (objectives, constraints) = match self {
            Scenario::MaximizeBenefits => (
                weights(0.6, 0.1, 0.2, 0.1),
                OptimizationConstraints {
                    max_net_cost: 300_000_000_000.0,
                    max_gdp_percentage: 10.0,
                    ..defaults
                },
            ),
            Scenario::MinimizeTaxes => (
                weights(0.1, 0.6, 0.2, 0.1),
                OptimizationConstraints { max_tax_rate: 25.0, ..defaults },
            ),
            Scenario::FiscalBalance => (
                weights(0.2, 0.2, 0.5, 0.1),
                OptimizationConstraints { max_net_cost: 50_000_000_000.0, ..defaults },
            ),
            Scenario::PoliticalFeasible => (
                weights(0.2, 0.2, 0.2, 0.4),
                OptimizationConstraints {
                    max_tax_rate: 30.0,
                    max_gdp_percentage: 5.0,
                    ..defaults
                },
            ),
        };

        OptimizationTarget { objectives, constraints }
    }
}

fn weights(benefits: f64, tax: f64, fiscal: f64, political: f64) -> ObjectiveWeights {
    ObjectiveWeights {
        maximize_benefits: benefits,
        minimize_tax_burden: tax,
        achieve_fiscal_balance: fiscal,
        political_feasibility: political,
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Scenario {
    type Err = OptimizerError;

    fn from_str(s: &str) -> Result<Self> {
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.as_str() == s)
            .ok_or_else(|| {
                let known: Vec<&str> = Scenario::ALL.iter().map(|s| s.as_str()).collect();
                OptimizerError::InvalidInput(format!(
                    "Unknown scenario '{}', expected one of: {}",
                    s,
                    known.join(", ")
                ))
            })
    }
}

/// Caller data for a scenario run
#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioInputs {
    pub population: PopulationData,
    pub economy: EconomicData,
    pub assumptions: EconomicAssumptions,
    pub locks: Locks,
    pub current_genome: Option<Genome>,
    pub seed: Option<u64>,
}

impl ScenarioInputs {
    pub fn new(population: PopulationData, economy: EconomicData) -> Self {
        Self {
            population,
            economy,
            assumptions: EconomicAssumptions::default(),
            locks: Locks::default(),
            current_genome: None,
            seed: None,
        }
    }

    pub fn with_assumptions(mut self, assumptions: EconomicAssumptions) -> Self {
        self.assumptions = assumptions;
        self
    }

    pub fn with_locks(mut self, locks: Locks, current_genome: Genome) -> Self {
        self.locks = locks;
        self.current_genome = Some(current_genome);
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    fn evolution_config(&self) -> EvolutionConfig {
        EvolutionConfig {
            population_size: SCENARIO_POPULATION_SIZE,
            generations: SCENARIO_GENERATIONS,
            seed: self.seed,
            ..Default::default()
        }
    }
}

/// Run a preset and return the single best individual
pub fn optimize_for_scenario<C: ProgressCallback>(
    scenario: Scenario,
    inputs: &ScenarioInputs,
    callback: C,
) -> Result<EvaluationResult> {
    let evaluator = FitnessEvaluator::new(inputs.population, inputs.economy, inputs.assumptions)?;
    let target = scenario.preset(inputs.locks);

    log::info!(
        "Optimizing scenario '{}' ({} generations x {} individuals)",
        scenario,
        SCENARIO_GENERATIONS,
        SCENARIO_POPULATION_SIZE
    );

    let results = optimize_ubi_parameters(
        target,
        inputs.evolution_config(),
        evaluator,
        inputs.current_genome,
        callback,
    )?;

    results.into_iter().next().ok_or(OptimizerError::NoResults)
}
