use super::ordering::{clamp_unlocked, enforce_order, ChainLink};
use super::violation::ConstraintResult;
use crate::types::AgeLocks;
use serde::{Deserialize, Serialize};

pub const CHILD_AGE_RANGE: (f64, f64) = (0.0, 12.0);
pub const YOUTH_AGE_RANGE: (f64, f64) = (13.0, 21.0);
pub const SENIOR_AGE_RANGE: (f64, f64) = (55.0, 100.0);

/// Upper age bound of the child and youth cohorts and lower bound of seniors
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AgeCutoffs {
    pub child: f64,
    pub youth: f64,
    pub senior: f64,
}

impl AgeCutoffs {
    pub fn new(child: f64, youth: f64, senior: f64) -> Self {
        Self { child, youth, senior }
    }
}

/// Clamp unlocked cutoffs to their ranges and restore child < youth < senior.
/// Locking the adult cohort freezes both the youth and senior cutoffs.
pub fn validate_age_cutoffs(values: &AgeCutoffs, locks: &AgeLocks) -> ConstraintResult<AgeCutoffs> {
    let mut violations = Vec::new();
    let mut links = [
        ChainLink::new("child", values.child, locks.child_cutoff()),
        ChainLink::new("youth", values.youth, locks.youth_cutoff()),
        ChainLink::new("senior", values.senior, locks.senior_cutoff()),
    ];

    let ranges = [CHILD_AGE_RANGE, YOUTH_AGE_RANGE, SENIOR_AGE_RANGE];
    for (link, (min, max)) in links.iter_mut().zip(ranges) {
        clamp_unlocked(link, min, max, "age cutoff", &mut violations);
    }
    enforce_order(&mut links, 1.0, "age cutoff", &mut violations);

    let corrected = AgeCutoffs::new(links[0].value, links[1].value, links[2].value);
    ConstraintResult::new(corrected, violations)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_range_ages_are_valid() {
        let ages = AgeCutoffs::new(12.0, 21.0, 55.0);
        let result = validate_age_cutoffs(&ages, &AgeLocks::default());
        assert!(result.is_valid);
        assert_eq!(result.corrected_values, ages);
    }

    #[test]
    fn test_out_of_range_clamped() {
        let ages = AgeCutoffs::new(-3.0, 30.0, 120.0);
        let result = validate_age_cutoffs(&ages, &AgeLocks::default());
        assert_eq!(result.corrected_values, AgeCutoffs::new(0.0, 21.0, 100.0));
        assert_eq!(result.violations.len(), 3);
    }

    #[test]
    fn test_locked_child_pushes_youth_up() {
        // A locked child cutoff outside its range still wins
        let ages = AgeCutoffs::new(18.0, 15.0, 65.0);
        let locks = AgeLocks { child: true, ..Default::default() };
        let result = validate_age_cutoffs(&ages, &locks);
        assert_eq!(result.corrected_values, AgeCutoffs::new(18.0, 19.0, 65.0));
    }

    #[test]
    fn test_adult_lock_freezes_youth_and_senior() {
        let ages = AgeCutoffs::new(5.0, 30.0, 40.0);
        let locks = AgeLocks { adult: true, ..Default::default() };
        let result = validate_age_cutoffs(&ages, &locks);
        assert_eq!(result.corrected_values.youth, 30.0);
        assert_eq!(result.corrected_values.senior, 40.0);
        assert!(result.is_valid);
    }

    #[test]
    fn test_locked_conflict_reported() {
        let ages = AgeCutoffs::new(10.0, 60.0, 58.0);
        let locks = AgeLocks { youth: true, senior: true, ..Default::default() };
        let result = validate_age_cutoffs(&ages, &locks);
        assert_eq!(result.corrected_values, ages);
        assert!(result.has_lock_conflict());
    }
}
