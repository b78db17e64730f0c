use crate::config::evolution::EvolutionConfig;
use crate::config::traits::ConfigSection;
use crate::engines::evaluation::FitnessEvaluator;
use crate::engines::generation::{
    genome::Genome,
    operators::{crossover, generate_random_genome, mutate, tournament_selection},
    progress::ProgressCallback,
    repair::repair_genome,
};
use crate::engines::validation::{validate_age_cutoffs, validate_ubi_amounts, AgeCutoffs, UbiAmounts};
use crate::error::{OptimizerError, Result};
use crate::types::{EvaluationResult, OptimizationTarget};
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;
use std::cmp::Ordering;

/// Sort best-first by fitness
pub fn sort_by_fitness(population: &mut [EvaluationResult]) {
    population.sort_by(|a, b| b.fitness.partial_cmp(&a.fitness).unwrap_or(Ordering::Equal));
}

/// Generational genetic algorithm over policy genomes.
///
/// Every run owns its population and generator; the population is replaced
/// wholesale each generation.
pub struct EvolutionEngine {
    config: EvolutionConfig,
    target: OptimizationTarget,
    evaluator: FitnessEvaluator,
    current_genome: Option<Genome>,
    rng: StdRng,
}

impl EvolutionEngine {
    pub fn new(config: EvolutionConfig, target: OptimizationTarget, evaluator: FitnessEvaluator) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Self {
            config,
            target,
            evaluator,
            current_genome: None,
            rng,
        }
    }

    /// Snapshot whose values seed every locked gene
    pub fn with_current_genome(mut self, genome: Genome) -> Self {
        self.current_genome = Some(genome);
        self
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    pub fn target(&self) -> &OptimizationTarget {
        &self.target
    }

    /// Reject inputs the loop could not honour
    pub fn validate(&self) -> Result<()> {
        self.config.validate()?;

        let constraints = &self.target.constraints;
        let locks = &constraints.locks;
        if !locks.any() {
            return Ok(());
        }

        let current = self.current_genome.as_ref().ok_or_else(|| {
            OptimizerError::InvalidInput(
                "Locked parameters require a current genome to copy values from".to_string(),
            )
        })?;

        if constraints.enforce_ubi_progression {
            let ubi = validate_ubi_amounts(
                &UbiAmounts::new(current.child_ubi, current.youth_ubi, current.adult_ubi, current.senior_ubi),
                &locks.ubi,
            );
            if ubi.has_lock_conflict() {
                return Err(OptimizerError::LockConflict(
                    "Locked UBI amounts violate child <= youth <= adult <= senior".to_string(),
                ));
            }
        }

        let ages = validate_age_cutoffs(
            &AgeCutoffs::new(current.child_age_cutoff, current.youth_age_cutoff, current.senior_age_cutoff),
            &locks.ages,
        );
        if ages.has_lock_conflict() {
            return Err(OptimizerError::LockConflict(
                "Locked age cutoffs violate child < youth < senior".to_string(),
            ));
        }

        Ok(())
    }

    /// Run the evolution process and return the final population, best first
    pub fn run<C: ProgressCallback>(&mut self, mut callback: C) -> Result<Vec<EvaluationResult>> {
        self.validate()?;

        let mut population = self.initialize_population();
        log::debug!(
            "Initialized {} genomes; running {} generations",
            population.len(),
            self.config.generations
        );

        for generation in 0..self.config.generations {
            sort_by_fitness(&mut population);

            let best = population.first().ok_or(OptimizerError::NoResults)?;
            callback.on_generation_complete(generation, best.fitness, &best.genome);
            log::debug!("Generation {}: best fitness = {:.4}", generation, best.fitness);

            population = self.next_generation(&population);
        }

        sort_by_fitness(&mut population);
        if let Some(best) = population.first() {
            log::info!(
                "Optimization complete: best fitness {:.4}, net cost ${:.0}, feasible: {}",
                best.fitness,
                best.feasibility.net_cost,
                best.feasibility.is_feasible
            );
        }

        Ok(population)
    }

    /// Generation 0: random genomes, repaired and evaluated
    pub fn initialize_population(&mut self) -> Vec<EvaluationResult> {
        let OptimizationTarget { objectives, constraints } = self.target;

        (0..self.config.population_size)
            .map(|_| {
                let genome = generate_random_genome(&constraints, self.current_genome.as_ref(), &mut self.rng);
                let genome = repair_genome(&genome, &constraints);
                self.evaluator.evaluate(&genome, &objectives, &constraints)
            })
            .collect()
    }

    /// Breed the next generation from `ranked`, which must be sorted best-first
    pub fn next_generation(&mut self, ranked: &[EvaluationResult]) -> Vec<EvaluationResult> {
        let OptimizationTarget { objectives, constraints } = self.target;
        let locks = constraints.locks;
        let size = self.config.population_size;

        let mut next_generation: Vec<EvaluationResult> = Vec::with_capacity(size);

        // Elitism: copy top performers
        next_generation.extend(ranked.iter().take(self.config.elite_count().min(size)).copied());

        while next_generation.len() < size {
            let (Some(parent1), Some(parent2)) = (
                tournament_selection(ranked, self.config.tournament_size, &mut self.rng),
                tournament_selection(ranked, self.config.tournament_size, &mut self.rng),
            ) else {
                break;
            };

            let (child1, child2) = if self.rng.gen::<f64>() < self.config.crossover_rate {
                crossover(&parent1.genome, &parent2.genome, &locks)
            } else {
                (parent1.genome, parent2.genome)
            };

            for child in [child1, child2] {
                if next_generation.len() >= size {
                    break;
                }
                let child = mutate(&child, self.config.mutation_rate, &locks, &mut self.rng);
                let child = repair_genome(&child, &constraints);
                next_generation.push(self.evaluator.evaluate(&child, &objectives, &constraints));
            }
        }

        next_generation
    }
}

/// Run a full optimization and return every final individual, best first
pub fn optimize_ubi_parameters<C: ProgressCallback>(
    target: OptimizationTarget,
    config: EvolutionConfig,
    evaluator: FitnessEvaluator,
    current_genome: Option<Genome>,
    callback: C,
) -> Result<Vec<EvaluationResult>> {
    let mut engine = EvolutionEngine::new(config, target, evaluator);
    if let Some(genome) = current_genome {
        engine = engine.with_current_genome(genome);
    }
    engine.run(callback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::economics::EconomicAssumptions;
    use crate::engines::generation::progress::NoopProgress;
    use crate::types::{EconomicData, Locks, OptimizationConstraints, PopulationData, UbiLocks};

    fn evaluator() -> FitnessEvaluator {
        FitnessEvaluator::new(
            PopulationData {
                child_population: 5_000_000,
                youth_population: 3_000_000,
                adult_population: 15_000_000,
                senior_population: 7_000_000,
            },
            EconomicData { gdp: 2_500_000_000_000.0 },
            EconomicAssumptions::default(),
        )
        .unwrap()
    }

    fn small_config(seed: u64) -> EvolutionConfig {
        EvolutionConfig {
            population_size: 20,
            generations: 5,
            seed: Some(seed),
            ..Default::default()
        }
    }

    #[test]
    fn test_population_size_is_fixed() {
        let mut engine = EvolutionEngine::new(small_config(1), OptimizationTarget::default(), evaluator());
        let mut population = engine.initialize_population();
        assert_eq!(population.len(), 20);
        for _ in 0..3 {
            sort_by_fitness(&mut population);
            population = engine.next_generation(&population);
            assert_eq!(population.len(), 20);
        }
    }

    #[test]
    fn test_elites_survive_unchanged() {
        let mut engine = EvolutionEngine::new(
            EvolutionConfig { elitism_rate: 0.25, ..small_config(2) },
            OptimizationTarget::default(),
            evaluator(),
        );
        let mut population = engine.initialize_population();
        sort_by_fitness(&mut population);
        let next = engine.next_generation(&population);
        assert_eq!(&next[..5], &population[..5]);
    }

    #[test]
    fn test_same_seed_same_result() {
        let run = |seed| {
            optimize_ubi_parameters(
                OptimizationTarget::default(),
                small_config(seed),
                evaluator(),
                None,
                NoopProgress,
            )
            .unwrap()
        };
        assert_eq!(run(9), run(9));
    }

    #[test]
    fn test_locks_without_current_genome_rejected() {
        let target = OptimizationTarget {
            constraints: OptimizationConstraints {
                locks: Locks {
                    ubi: UbiLocks { child: true, ..Default::default() },
                    ..Default::default()
                },
                ..Default::default()
            },
            ..Default::default()
        };
        let mut engine = EvolutionEngine::new(small_config(3), target, evaluator());
        assert!(matches!(engine.run(NoopProgress), Err(OptimizerError::InvalidInput(_))));
    }

    #[test]
    fn test_conflicting_locks_rejected() {
        let target = OptimizationTarget {
            constraints: OptimizationConstraints {
                locks: Locks {
                    ubi: UbiLocks { youth: true, adult: true, ..Default::default() },
                    ..Default::default()
                },
                ..Default::default()
            },
            ..Default::default()
        };
        let current = Genome { youth_ubi: 900.0, adult_ubi: 700.0, ..Default::default() };
        let mut engine =
            EvolutionEngine::new(small_config(4), target, evaluator()).with_current_genome(current);
        assert!(matches!(engine.run(NoopProgress), Err(OptimizerError::LockConflict(_))));
    }
}
