use crate::engines::generation::genome::Genome;
use serde::{Deserialize, Serialize};

/// Population counts per age cohort
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PopulationData {
    pub child_population: u64,
    pub youth_population: u64,
    pub adult_population: u64,
    pub senior_population: u64,
}

impl PopulationData {
    pub fn total(&self) -> u64 {
        self.child_population
            .saturating_add(self.youth_population)
            .saturating_add(self.adult_population)
            .saturating_add(self.senior_population)
    }
}

/// Economic aggregates the evaluator needs
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EconomicData {
    /// Nominal GDP in dollars
    pub gdp: f64,
}

/// Locks on the four monthly UBI amounts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UbiLocks {
    pub child: bool,
    pub youth: bool,
    pub adult: bool,
    pub senior: bool,
}

impl UbiLocks {
    pub fn any(&self) -> bool {
        self.child || self.youth || self.adult || self.senior
    }
}

/// Locks on the age cohorts.
///
/// The adult cohort has no cutoff of its own: it spans youth..senior, so
/// locking it freezes both of those cutoffs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AgeLocks {
    pub child: bool,
    pub youth: bool,
    pub adult: bool,
    pub senior: bool,
}

impl AgeLocks {
    pub fn child_cutoff(&self) -> bool {
        self.child
    }

    pub fn youth_cutoff(&self) -> bool {
        self.youth || self.adult
    }

    pub fn senior_cutoff(&self) -> bool {
        self.senior || self.adult
    }

    pub fn any(&self) -> bool {
        self.child || self.youth || self.adult || self.senior
    }
}

/// Locks on the flat tax parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxLocks {
    pub flat_tax_rate: bool,
    pub tax_exemption: bool,
}

impl TaxLocks {
    pub fn any(&self) -> bool {
        self.flat_tax_rate || self.tax_exemption
    }
}

/// Every caller-imposed lock. Defaults to fully unlocked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Locks {
    pub ages: AgeLocks,
    pub ubi: UbiLocks,
    pub tax: TaxLocks,
}

impl Locks {
    pub fn any(&self) -> bool {
        self.ages.any() || self.ubi.any() || self.tax.any()
    }
}

/// Weights blended into the scalar fitness. Need not sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectiveWeights {
    pub maximize_benefits: f64,
    pub minimize_tax_burden: f64,
    pub achieve_fiscal_balance: f64,
    pub political_feasibility: f64,
}

impl Default for ObjectiveWeights {
    fn default() -> Self {
        Self {
            maximize_benefits: 0.25,
            minimize_tax_burden: 0.25,
            achieve_fiscal_balance: 0.25,
            political_feasibility: 0.25,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizationConstraints {
    /// Maximum acceptable net cost in dollars
    pub max_net_cost: f64,
    /// Maximum flat tax rate (%)
    pub max_tax_rate: f64,
    /// Maximum net cost as a share of GDP (%)
    pub max_gdp_percentage: f64,
    /// Enforce child <= youth <= adult <= senior UBI
    pub enforce_ubi_progression: bool,
    pub locks: Locks,
}

impl Default for OptimizationConstraints {
    fn default() -> Self {
        Self {
            max_net_cost: 200_000_000_000.0,
            max_tax_rate: 40.0,
            max_gdp_percentage: 8.0,
            enforce_ubi_progression: true,
            locks: Locks::default(),
        }
    }
}

/// Objective weights and constraints for one optimization run
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct OptimizationTarget {
    pub objectives: ObjectiveWeights,
    pub constraints: OptimizationConstraints,
}

/// Normalized sub-scores, each in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObjectiveScores {
    pub benefit_score: f64,
    pub tax_score: f64,
    pub fiscal_score: f64,
    pub political_score: f64,
    pub total_score: f64,
}

/// Budget snapshot of a genome
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Feasibility {
    pub total_ubi_cost: f64,
    pub total_tax_revenue: f64,
    pub program_savings: f64,
    pub net_cost: f64,
    pub gdp_percentage: f64,
    pub is_feasible: bool,
}

/// Complete evaluation of one candidate policy
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub genome: Genome,
    pub fitness: f64,
    pub objectives: ObjectiveScores,
    pub feasibility: Feasibility,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adult_age_lock_freezes_both_boundaries() {
        let locks = AgeLocks { adult: true, ..Default::default() };
        assert!(!locks.child_cutoff());
        assert!(locks.youth_cutoff());
        assert!(locks.senior_cutoff());
    }

    #[test]
    fn test_population_total() {
        let population = PopulationData {
            child_population: 5,
            youth_population: 3,
            adult_population: 15,
            senior_population: 7,
        };
        assert_eq!(population.total(), 30);
        assert_eq!(PopulationData::default().total(), 0);
    }

    #[test]
    fn test_locks_default_unlocked() {
        assert!(!Locks::default().any());
    }
}
