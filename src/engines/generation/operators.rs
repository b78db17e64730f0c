use crate::engines::generation::genome::{Genome, GenomeField};
use crate::engines::validation::{validate_ubi_amounts, UbiAmounts};
use crate::types::{EvaluationResult, Locks, OptimizationConstraints};
use rand::Rng;

/// Blend factor for crossover
pub const CROSSOVER_ALPHA: f64 = 0.5;

/// Largest mutation step as a share of a gene's range
pub const MUTATION_STRENGTH: f64 = 0.1;

/// Tournament selection: pick best of K random candidates (with replacement).
/// Returns `None` only for an empty population.
pub fn tournament_selection<'a, R: Rng>(
    population: &'a [EvaluationResult],
    tournament_size: usize,
    rng: &mut R,
) -> Option<&'a EvaluationResult> {
    if population.is_empty() {
        return None;
    }

    let mut best = &population[rng.gen_range(0..population.len())];
    for _ in 1..tournament_size {
        let candidate = &population[rng.gen_range(0..population.len())];
        if candidate.fitness > best.fitness {
            best = candidate;
        }
    }

    Some(best)
}

/// Blend crossover. Unlocked genes become rounded weighted means of the
/// parents; locked genes copy `parent1` into both children.
pub fn crossover(parent1: &Genome, parent2: &Genome, locks: &Locks) -> (Genome, Genome) {
    let mut child1 = *parent1;
    let mut child2 = *parent1;

    for field in GenomeField::ALL {
        if field.is_locked(locks) {
            continue;
        }

        let a = parent1.get(field);
        let b = parent2.get(field);
        let (low, high) = (a.min(b), a.max(b));

        let blend1 = (CROSSOVER_ALPHA * a + (1.0 - CROSSOVER_ALPHA) * b).round().clamp(low, high);
        let blend2 = ((1.0 - CROSSOVER_ALPHA) * a + CROSSOVER_ALPHA * b).round().clamp(low, high);

        child1 = child1.with(field, blend1);
        child2 = child2.with(field, blend2);
    }

    (child1, child2)
}

/// Mutation: each unlocked gene, with probability `mutation_rate`, moves by a
/// non-zero whole step of at most 10% of its range. Results may leave the
/// range; `repair_genome` brings them back.
pub fn mutate<R: Rng>(genome: &Genome, mutation_rate: f64, locks: &Locks, rng: &mut R) -> Genome {
    if mutation_rate <= 0.0 {
        return *genome;
    }

    let mut mutated = *genome;
    for field in GenomeField::ALL {
        if field.is_locked(locks) || rng.gen::<f64>() >= mutation_rate {
            continue;
        }

        let max_step = ((field.range().span() * MUTATION_STRENGTH).round() as i64).max(1);
        let step = rng.gen_range(1..=max_step) as f64;
        let delta = if rng.gen_bool(0.5) { step } else { -step };

        mutated = mutated.with(field, mutated.get(field) + delta);
    }

    mutated
}

/// Generate a random genome. Locked genes copy `current` when it is given;
/// everything else is drawn uniformly from its range. The UBI amounts are then
/// put in order without moving a locked amount.
pub fn generate_random_genome<R: Rng>(
    constraints: &OptimizationConstraints,
    current: Option<&Genome>,
    rng: &mut R,
) -> Genome {
    let locks = &constraints.locks;
    let mut genome = Genome::default();

    for field in GenomeField::ALL {
        let value = match current {
            Some(current) if field.is_locked(locks) => current.get(field),
            _ => {
                let range = field.range();
                rng.gen_range(range.min as i64..=range.max as i64) as f64
            }
        };
        genome = genome.with(field, value);
    }

    let ubi = validate_ubi_amounts(
        &UbiAmounts::new(genome.child_ubi, genome.youth_ubi, genome.adult_ubi, genome.senior_ubi),
        &locks.ubi,
    )
    .corrected_values;

    Genome {
        child_ubi: ubi.child,
        youth_ubi: ubi.youth,
        adult_ubi: ubi.adult,
        senior_ubi: ubi.senior,
        ..genome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Feasibility, ObjectiveScores, UbiLocks};
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn result_with_fitness(fitness: f64) -> EvaluationResult {
        EvaluationResult {
            genome: Genome { child_ubi: fitness, ..Default::default() },
            fitness,
            objectives: ObjectiveScores {
                benefit_score: 0.0,
                tax_score: 0.0,
                fiscal_score: 0.0,
                political_score: 0.0,
                total_score: fitness,
            },
            feasibility: Feasibility {
                total_ubi_cost: 0.0,
                total_tax_revenue: 0.0,
                program_savings: 0.0,
                net_cost: 0.0,
                gdp_percentage: 0.0,
                is_feasible: true,
            },
        }
    }

    #[test]
    fn test_tournament_picks_fittest_of_whole_population() {
        let population: Vec<_> = (0..5).map(|i| result_with_fitness(i as f64)).collect();
        let mut rng = StdRng::seed_from_u64(3);
        // A large tournament with replacement almost surely samples the best
        let winner = tournament_selection(&population, 200, &mut rng).unwrap();
        assert_eq!(winner.fitness, 4.0);
    }

    #[test]
    fn test_tournament_empty_population() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(tournament_selection(&[], 3, &mut rng).is_none());
    }

    #[test]
    fn test_crossover_blends_midpoint() {
        let p1 = Genome { adult_ubi: 1200.0, youth_ubi: 401.0, ..Default::default() };
        let p2 = Genome { adult_ubi: 1000.0, youth_ubi: 500.0, ..Default::default() };
        let (c1, c2) = crossover(&p1, &p2, &Locks::default());
        assert_eq!(c1.adult_ubi, 1100.0);
        assert_eq!(c2.adult_ubi, 1100.0);
        assert!(c1.youth_ubi >= 401.0 && c1.youth_ubi <= 500.0);
    }

    #[test]
    fn test_generate_copies_locked_values() {
        let current = Genome {
            child_ubi: 100.0,
            youth_ubi: 300.0,
            adult_ubi: 1000.0,
            senior_ubi: 1300.0,
            ..Default::default()
        };
        let constraints = OptimizationConstraints {
            locks: Locks {
                ubi: UbiLocks { adult: true, ..Default::default() },
                ..Default::default()
            },
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..50 {
            let genome = generate_random_genome(&constraints, Some(&current), &mut rng);
            assert_eq!(genome.adult_ubi, 1000.0);
            assert!(genome.child_ubi <= genome.youth_ubi);
            assert!(genome.youth_ubi <= genome.adult_ubi);
            assert!(genome.adult_ubi <= genome.senior_ubi);
        }
    }

    #[test]
    fn test_generate_without_current_ignores_missing_values() {
        let constraints = OptimizationConstraints {
            locks: Locks {
                ubi: UbiLocks { child: true, ..Default::default() },
                ..Default::default()
            },
            ..Default::default()
        };
        let mut rng = StdRng::seed_from_u64(5);
        let genome = generate_random_genome(&constraints, None, &mut rng);
        for field in GenomeField::ALL {
            if !GenomeField::UBI.contains(&field) {
                assert!(field.range().contains(genome.get(field)), "{}", field.name());
            }
        }
    }
}
