use crate::engines::generation::genome::{Genome, GenomeField};
use crate::engines::validation::{validate_age_cutoffs, validate_ubi_amounts, AgeCutoffs, UbiAmounts};
use crate::types::OptimizationConstraints;

/// Check a genome against the hard constraints without changing it
pub fn validate_genome(genome: &Genome, constraints: &OptimizationConstraints) -> bool {
    if constraints.enforce_ubi_progression
        && (genome.child_ubi > genome.youth_ubi
            || genome.youth_ubi > genome.adult_ubi
            || genome.adult_ubi > genome.senior_ubi)
    {
        return false;
    }

    if genome.flat_tax_rate > constraints.max_tax_rate {
        return false;
    }

    if genome.child_age_cutoff >= genome.youth_age_cutoff
        || genome.youth_age_cutoff >= genome.senior_age_cutoff
    {
        return false;
    }

    true
}

/// Restore range and ordering invariants without touching locked genes.
///
/// Unlocked genes are clamped to their ranges (the flat tax rate additionally
/// to `max_tax_rate`), then UBI progression and age ordering are re-enforced
/// through the constraint engine. Applying it twice gives the same genome.
pub fn repair_genome(genome: &Genome, constraints: &OptimizationConstraints) -> Genome {
    let locks = &constraints.locks;
    let mut repaired = *genome;

    for field in GenomeField::ALL {
        if field.is_locked(locks) {
            continue;
        }
        let mut range = field.range();
        if field == GenomeField::FlatTaxRate {
            range.max = range.max.min(constraints.max_tax_rate).max(range.min);
        }
        repaired = repaired.with(field, range.clamp(repaired.get(field)));
    }

    if constraints.enforce_ubi_progression {
        let ubi = validate_ubi_amounts(
            &UbiAmounts::new(
                repaired.child_ubi,
                repaired.youth_ubi,
                repaired.adult_ubi,
                repaired.senior_ubi,
            ),
            &locks.ubi,
        )
        .corrected_values;
        repaired.child_ubi = ubi.child;
        repaired.youth_ubi = ubi.youth;
        repaired.adult_ubi = ubi.adult;
        repaired.senior_ubi = ubi.senior;
    }

    let ages = validate_age_cutoffs(
        &AgeCutoffs::new(
            repaired.child_age_cutoff,
            repaired.youth_age_cutoff,
            repaired.senior_age_cutoff,
        ),
        &locks.ages,
    )
    .corrected_values;
    repaired.child_age_cutoff = ages.child;
    repaired.youth_age_cutoff = ages.youth;
    repaired.senior_age_cutoff = ages.senior;

    repaired
}
