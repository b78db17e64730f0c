use super::traits::ConfigSection;
use crate::error::OptimizerError;
use serde::{Deserialize, Serialize};

/// Fixed economic assumptions consumed by the fitness evaluator.
///
/// Kept in one table so scenario tuning and tests can swap them without
/// touching evaluator internals.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EconomicAssumptions {
    /// Average annual income per cohort ($). Children are untaxed.
    pub youth_average_income: f64,
    pub adult_average_income: f64,
    pub senior_average_income: f64,

    /// Annual program spending that a 100% replacement rate would save ($)
    pub oas_baseline: f64,
    pub ccb_baseline: f64,
    pub ei_baseline: f64,
    pub social_assistance_baseline: f64,
}

impl Default for EconomicAssumptions {
    fn default() -> Self {
        Self {
            youth_average_income: 25_000.0,
            adult_average_income: 55_000.0,
            senior_average_income: 35_000.0,
            oas_baseline: 58_000_000_000.0,
            ccb_baseline: 25_000_000_000.0,
            ei_baseline: 22_000_000_000.0,
            social_assistance_baseline: 15_000_000_000.0,
        }
    }
}

impl EconomicAssumptions {
    pub fn program_baselines(&self) -> [f64; 4] {
        [
            self.oas_baseline,
            self.ccb_baseline,
            self.ei_baseline,
            self.social_assistance_baseline,
        ]
    }
}

impl ConfigSection for EconomicAssumptions {
    fn section_name() -> &'static str {
        "economics"
    }

    fn validate(&self) -> Result<(), OptimizerError> {
        let incomes = [
            self.youth_average_income,
            self.adult_average_income,
            self.senior_average_income,
        ];
        if incomes.iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(OptimizerError::Configuration(
                "Average incomes must be finite and non-negative".to_string()
            ));
        }
        if self.program_baselines().iter().any(|v| !v.is_finite() || *v < 0.0) {
            return Err(OptimizerError::Configuration(
                "Program baselines must be finite and non-negative".to_string()
            ));
        }
        Ok(())
    }
}
