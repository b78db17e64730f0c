use super::traits::ConfigSection;
use crate::engines::generation::genome::Genome;
use crate::error::OptimizerError;
use crate::types::{EconomicData, Locks, PopulationData};
use serde::{Deserialize, Serialize};

/// Plain-data inputs for command-line runs.
///
/// Hosts embedding the library pass these directly instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputsConfig {
    pub population: PopulationData,
    pub economy: EconomicData,
    pub locks: Locks,
    /// Values copied into every locked field
    pub current_genome: Option<Genome>,
}

impl Default for InputsConfig {
    fn default() -> Self {
        Self {
            population: PopulationData {
                child_population: 5_000_000,
                youth_population: 3_000_000,
                adult_population: 15_000_000,
                senior_population: 7_000_000,
            },
            economy: EconomicData { gdp: 2_500_000_000_000.0 },
            locks: Locks::default(),
            current_genome: None,
        }
    }
}

impl ConfigSection for InputsConfig {
    fn section_name() -> &'static str {
        "inputs"
    }

    fn validate(&self) -> Result<(), OptimizerError> {
        if self.population.total() == 0 {
            return Err(OptimizerError::Configuration(
                "Total population must be greater than zero".to_string()
            ));
        }
        if !self.economy.gdp.is_finite() || self.economy.gdp < 0.0 {
            return Err(OptimizerError::Configuration(
                "GDP must be finite and non-negative".to_string()
            ));
        }
        if self.locks.any() && self.current_genome.is_none() {
            return Err(OptimizerError::Configuration(
                "Locked parameters require a current_genome".to_string()
            ));
        }
        Ok(())
    }
}
