use crate::config::economics::EconomicAssumptions;
use crate::engines::generation::genome::{Genome, GenomeField};
use crate::error::{OptimizerError, Result};
use crate::types::{
    EconomicData, EvaluationResult, Feasibility, ObjectiveScores, ObjectiveWeights,
    OptimizationConstraints, PopulationData,
};

/// Tax rate at which the tax score reaches zero
const TAX_SCORE_CEILING: f64 = 50.0;

// Political feasibility heuristics
const HIGH_TAX_RATE: f64 = 35.0;
const HIGH_TAX_PENALTY: f64 = 0.2;
const LOW_TAX_RATE: f64 = 15.0;
const LOW_TAX_PENALTY: f64 = 0.1;
const HIGH_ADULT_UBI: f64 = 1500.0;
const LOW_ADULT_UBI: f64 = 800.0;
const ADULT_UBI_PENALTY: f64 = 0.1;
const HIGH_REPLACEMENT_RATE: f64 = 80.0;
const HIGH_REPLACEMENT_PENALTY: f64 = 0.2;
const GDP_CEILING_PENALTY: f64 = 0.3;

/// `numerator / denominator`, or 0 when the result would not be finite
fn safe_ratio(numerator: f64, denominator: f64) -> f64 {
    if denominator == 0.0 {
        return 0.0;
    }
    let ratio = numerator / denominator;
    if ratio.is_finite() {
        ratio
    } else {
        0.0
    }
}

fn mean(values: &[f64]) -> f64 {
    safe_ratio(values.iter().sum(), values.len() as f64)
}

fn tax_owed(genome: &Genome, income: f64) -> f64 {
    (income - genome.tax_exemption).max(0.0) * genome.flat_tax_rate / 100.0
}

/// Budget arithmetic for a genome: cost, revenue, savings, net cost, GDP share
pub fn calculate_feasibility(
    genome: &Genome,
    constraints: &OptimizationConstraints,
    population: &PopulationData,
    economy: &EconomicData,
    assumptions: &EconomicAssumptions,
) -> Feasibility {
    let total_ubi_cost = (genome.child_ubi * population.child_population as f64
        + genome.youth_ubi * population.youth_population as f64
        + genome.adult_ubi * population.adult_population as f64
        + genome.senior_ubi * population.senior_population as f64)
        * 12.0;

    let total_tax_revenue = population.youth_population as f64
        * tax_owed(genome, assumptions.youth_average_income)
        + population.adult_population as f64 * tax_owed(genome, assumptions.adult_average_income)
        + population.senior_population as f64 * tax_owed(genome, assumptions.senior_average_income);

    let program_savings: f64 = assumptions
        .program_baselines()
        .iter()
        .zip(genome.replacement_rates())
        .map(|(baseline, rate)| baseline * rate / 100.0)
        .sum();

    let net_cost = total_ubi_cost - total_tax_revenue - program_savings;
    let gdp_percentage = safe_ratio(net_cost, economy.gdp) * 100.0;

    Feasibility {
        total_ubi_cost,
        total_tax_revenue,
        program_savings,
        net_cost,
        gdp_percentage,
        is_feasible: net_cost <= constraints.max_net_cost
            && gdp_percentage <= constraints.max_gdp_percentage,
    }
}

fn political_score(genome: &Genome, gdp_percentage: f64, constraints: &OptimizationConstraints) -> f64 {
    let mut score = 1.0;

    if genome.flat_tax_rate > HIGH_TAX_RATE {
        score -= HIGH_TAX_PENALTY;
    }
    if genome.flat_tax_rate < LOW_TAX_RATE {
        score -= LOW_TAX_PENALTY;
    }

    if genome.adult_ubi > HIGH_ADULT_UBI {
        score -= ADULT_UBI_PENALTY;
    }
    if genome.adult_ubi < LOW_ADULT_UBI {
        score -= ADULT_UBI_PENALTY;
    }

    if mean(&genome.replacement_rates()) > HIGH_REPLACEMENT_RATE {
        score -= HIGH_REPLACEMENT_PENALTY;
    }

    if gdp_percentage > constraints.max_gdp_percentage {
        score -= GDP_CEILING_PENALTY;
    }

    f64::max(0.0, score)
}

/// Score a genome. Pure and deterministic.
pub fn calculate_fitness(
    genome: &Genome,
    objectives: &ObjectiveWeights,
    constraints: &OptimizationConstraints,
    population: &PopulationData,
    economy: &EconomicData,
    assumptions: &EconomicAssumptions,
) -> EvaluationResult {
    let feasibility = calculate_feasibility(genome, constraints, population, economy, assumptions);

    let ubi_maxima: Vec<f64> = GenomeField::UBI.iter().map(|f| f.range().max).collect();
    let benefit_score = safe_ratio(mean(&genome.ubi_amounts()), mean(&ubi_maxima)).clamp(0.0, 1.0);

    let tax_score = (1.0 - safe_ratio(genome.flat_tax_rate, TAX_SCORE_CEILING)).clamp(0.0, 1.0);

    let fiscal_score = if constraints.max_net_cost > 0.0 {
        (1.0 - safe_ratio(feasibility.net_cost.abs(), constraints.max_net_cost)).clamp(0.0, 1.0)
    } else {
        0.0
    };

    let political_score = political_score(genome, feasibility.gdp_percentage, constraints).min(1.0);

    let total_score = benefit_score * objectives.maximize_benefits
        + tax_score * objectives.minimize_tax_burden
        + fiscal_score * objectives.achieve_fiscal_balance
        + political_score * objectives.political_feasibility;

    EvaluationResult {
        genome: *genome,
        fitness: total_score,
        objectives: ObjectiveScores {
            benefit_score,
            tax_score,
            fiscal_score,
            political_score,
            total_score,
        },
        feasibility,
    }
}

/// Population, economy and assumptions bound together for repeated scoring
#[derive(Debug, Clone)]
pub struct FitnessEvaluator {
    population: PopulationData,
    economy: EconomicData,
    assumptions: EconomicAssumptions,
}

impl FitnessEvaluator {
    /// Fails on an empty population or an unusable GDP figure
    pub fn new(
        population: PopulationData,
        economy: EconomicData,
        assumptions: EconomicAssumptions,
    ) -> Result<Self> {
        if population.total() == 0 {
            return Err(OptimizerError::InvalidInput(
                "Population data is missing or totals zero".to_string(),
            ));
        }
        if !economy.gdp.is_finite() || economy.gdp < 0.0 {
            return Err(OptimizerError::InvalidInput(format!(
                "GDP must be finite and non-negative, got {}",
                economy.gdp
            )));
        }

        Ok(Self {
            population,
            economy,
            assumptions,
        })
    }

    pub fn evaluate(
        &self,
        genome: &Genome,
        objectives: &ObjectiveWeights,
        constraints: &OptimizationConstraints,
    ) -> EvaluationResult {
        calculate_fitness(
            genome,
            objectives,
            constraints,
            &self.population,
            &self.economy,
            &self.assumptions,
        )
    }

    pub fn population(&self) -> &PopulationData {
        &self.population
    }

    pub fn economy(&self) -> &EconomicData {
        &self.economy
    }

    pub fn assumptions(&self) -> &EconomicAssumptions {
        &self.assumptions
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn population() -> PopulationData {
        PopulationData {
            child_population: 5_000_000,
            youth_population: 3_000_000,
            adult_population: 15_000_000,
            senior_population: 7_000_000,
        }
    }

    fn economy() -> EconomicData {
        EconomicData { gdp: 2_500_000_000_000.0 }
    }

    fn genome() -> Genome {
        Genome {
            child_ubi: 200.0,
            youth_ubi: 400.0,
            adult_ubi: 1200.0,
            senior_ubi: 1500.0,
            flat_tax_rate: 30.0,
            tax_exemption: 15_000.0,
            child_age_cutoff: 12.0,
            youth_age_cutoff: 21.0,
            senior_age_cutoff: 65.0,
            oas_replacement: 50.0,
            ccb_replacement: 80.0,
            ei_replacement: 70.0,
            social_assistance_replacement: 60.0,
        }
    }

    #[test]
    fn test_cost_revenue_and_savings() {
        let f = calculate_feasibility(
            &genome(),
            &OptimizationConstraints::default(),
            &population(),
            &economy(),
            &EconomicAssumptions::default(),
        );

        assert_eq!(f.total_ubi_cost, 368_400_000_000.0);
        // youth 3M * 3000 + adult 15M * 12000 + senior 7M * 6000
        assert_eq!(f.total_tax_revenue, 9.0e9 + 180.0e9 + 42.0e9);
        // 29 + 20 + 15.4 + 9
        assert!((f.program_savings - 73.4e9).abs() < 1.0);
        assert!((f.net_cost - (368.4e9 - 231.0e9 - 73.4e9)).abs() < 1.0);
    }

    #[test]
    fn test_zero_gdp_yields_zero_share() {
        let f = calculate_feasibility(
            &genome(),
            &OptimizationConstraints::default(),
            &population(),
            &EconomicData { gdp: 0.0 },
            &EconomicAssumptions::default(),
        );
        assert_eq!(f.gdp_percentage, 0.0);
    }

    #[test]
    fn test_zero_max_net_cost_guarded() {
        let constraints = OptimizationConstraints { max_net_cost: 0.0, ..Default::default() };
        let result = calculate_fitness(
            &genome(),
            &ObjectiveWeights::default(),
            &constraints,
            &population(),
            &economy(),
            &EconomicAssumptions::default(),
        );
        assert_eq!(result.objectives.fiscal_score, 0.0);
        assert!(result.fitness.is_finite());
    }

    #[test]
    fn test_political_penalties_floor_at_zero() {
        let extreme = Genome {
            flat_tax_rate: 45.0,
            adult_ubi: 1900.0,
            oas_replacement: 100.0,
            ccb_replacement: 100.0,
            ei_replacement: 100.0,
            social_assistance_replacement: 100.0,
            ..genome()
        };
        // tax -0.2, adult -0.1, replacement -0.2, gdp -0.3 = 0.2 left
        let constraints = OptimizationConstraints { max_gdp_percentage: -1.0, ..Default::default() };
        let score = political_score(&extreme, 1.0, &constraints);
        assert!((score - 0.2).abs() < 1e-9);

        let broke = Genome { flat_tax_rate: 5.0, adult_ubi: 100.0, ..extreme };
        let score = political_score(&broke, 1.0, &constraints);
        // -0.1 -0.1 -0.2 -0.3 = 0.3
        assert!((score - 0.3).abs() < 1e-9);
    }

    #[test]
    fn test_weighted_total() {
        let objectives = ObjectiveWeights {
            maximize_benefits: 1.0,
            minimize_tax_burden: 0.0,
            achieve_fiscal_balance: 0.0,
            political_feasibility: 0.0,
        };
        let result = calculate_fitness(
            &genome(),
            &objectives,
            &OptimizationConstraints::default(),
            &population(),
            &economy(),
            &EconomicAssumptions::default(),
        );
        // mean(200,400,1200,1500) / mean(500,800,2000,2500)
        let expected = 825.0 / 1450.0;
        assert!((result.fitness - expected).abs() < 1e-12);
        assert_eq!(result.fitness, result.objectives.total_score);
    }

    #[test]
    fn test_evaluator_rejects_empty_population() {
        let result = FitnessEvaluator::new(
            PopulationData::default(),
            economy(),
            EconomicAssumptions::default(),
        );
        assert!(matches!(result, Err(OptimizerError::InvalidInput(_))));
    }
}
