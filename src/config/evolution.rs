use super::traits::ConfigSection;
use crate::error::OptimizerError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvolutionConfig {
    pub population_size: usize,
    pub generations: usize,
    pub mutation_rate: f64,
    pub crossover_rate: f64,
    /// Share of each generation carried over unchanged
    pub elitism_rate: f64,
    pub tournament_size: usize,
    /// Fixed seed for reproducible runs; entropy when absent
    pub seed: Option<u64>,
}

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            generations: 50,
            mutation_rate: 0.1,
            crossover_rate: 0.8,
            elitism_rate: 0.1,
            tournament_size: 5,
            seed: None,
        }
    }
}

impl EvolutionConfig {
    pub fn elite_count(&self) -> usize {
        (self.population_size as f64 * self.elitism_rate).floor() as usize
    }
}

impl ConfigSection for EvolutionConfig {
    fn section_name() -> &'static str {
        "evolution"
    }

    fn validate(&self) -> Result<(), OptimizerError> {
        if self.population_size == 0 {
            return Err(OptimizerError::Configuration(
                "Population size must be at least 1".to_string()
            ));
        }
        if self.tournament_size == 0 {
            return Err(OptimizerError::Configuration(
                "Tournament size must be at least 1".to_string()
            ));
        }
        if !(0.0..=1.0).contains(&self.mutation_rate) {
            return Err(OptimizerError::Configuration(
                "Mutation rate must be between 0 and 1".to_string()
            ));
        }
        if !(0.0..=1.0).contains(&self.crossover_rate) {
            return Err(OptimizerError::Configuration(
                "Crossover rate must be between 0 and 1".to_string()
            ));
        }
        if !(0.0..=1.0).contains(&self.elitism_rate) {
            return Err(OptimizerError::Configuration(
                "Elitism rate must be between 0 and 1".to_string()
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let config = EvolutionConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.elite_count(), 10);
    }

    #[test]
    fn test_rejects_bad_rates() {
        let config = EvolutionConfig { mutation_rate: 1.5, ..Default::default() };
        assert!(config.validate().is_err());

        let config = EvolutionConfig { population_size: 0, ..Default::default() };
        assert!(config.validate().is_err());
    }
}
