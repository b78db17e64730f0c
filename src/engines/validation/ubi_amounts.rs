use super::ordering::{clamp_unlocked, enforce_order, ChainLink};
use super::violation::ConstraintResult;
use crate::types::UbiLocks;
use serde::{Deserialize, Serialize};

/// Absolute bounds for any monthly UBI amount
pub const MIN_UBI_AMOUNT: f64 = 0.0;
pub const MAX_UBI_AMOUNT: f64 = 5000.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Cohort {
    Child,
    Youth,
    Adult,
    Senior,
}

impl Cohort {
    pub fn as_str(&self) -> &'static str {
        match self {
            Cohort::Child => "child",
            Cohort::Youth => "youth",
            Cohort::Adult => "adult",
            Cohort::Senior => "senior",
        }
    }
}

/// Monthly UBI amount per cohort
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UbiAmounts {
    pub child: f64,
    pub youth: f64,
    pub adult: f64,
    pub senior: f64,
}

impl UbiAmounts {
    pub fn new(child: f64, youth: f64, adult: f64, senior: f64) -> Self {
        Self { child, youth, adult, senior }
    }

    pub fn get(&self, cohort: Cohort) -> f64 {
        match cohort {
            Cohort::Child => self.child,
            Cohort::Youth => self.youth,
            Cohort::Adult => self.adult,
            Cohort::Senior => self.senior,
        }
    }

    pub fn with(mut self, cohort: Cohort, value: f64) -> Self {
        match cohort {
            Cohort::Child => self.child = value,
            Cohort::Youth => self.youth = value,
            Cohort::Adult => self.adult = value,
            Cohort::Senior => self.senior = value,
        }
        self
    }
}

fn is_locked(locks: &UbiLocks, cohort: Cohort) -> bool {
    match cohort {
        Cohort::Child => locks.child,
        Cohort::Youth => locks.youth,
        Cohort::Adult => locks.adult,
        Cohort::Senior => locks.senior,
    }
}

/// Clamp unlocked amounts to [0, 5000] and restore child <= youth <= adult <= senior
/// without moving a locked amount.
pub fn validate_ubi_amounts(values: &UbiAmounts, locks: &UbiLocks) -> ConstraintResult<UbiAmounts> {
    let mut violations = Vec::new();
    let mut links = [
        ChainLink::new("child", values.child, locks.child),
        ChainLink::new("youth", values.youth, locks.youth),
        ChainLink::new("adult", values.adult, locks.adult),
        ChainLink::new("senior", values.senior, locks.senior),
    ];

    for link in links.iter_mut() {
        clamp_unlocked(link, MIN_UBI_AMOUNT, MAX_UBI_AMOUNT, "UBI", &mut violations);
    }
    enforce_order(&mut links, 0.0, "UBI", &mut violations);

    let corrected = UbiAmounts::new(links[0].value, links[1].value, links[2].value, links[3].value);
    ConstraintResult::new(corrected, violations)
}

/// Whether `cohort` can be set to `new_value` without the engine
/// pushing it somewhere else.
pub fn can_change_ubi_amount(
    cohort: Cohort,
    new_value: f64,
    current: &UbiAmounts,
    locks: &UbiLocks,
) -> bool {
    if is_locked(locks, cohort) {
        return false;
    }

    let candidate = current.with(cohort, new_value);
    let result = validate_ubi_amounts(&candidate, locks);
    result.corrected_values.get(cohort) == new_value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engines::validation::ViolationKind;

    #[test]
    fn test_valid_progression_untouched() {
        let values = UbiAmounts::new(200.0, 400.0, 1200.0, 1500.0);
        let result = validate_ubi_amounts(&values, &UbiLocks::default());
        assert!(result.is_valid);
        assert_eq!(result.corrected_values, values);
    }

    #[test]
    fn test_locked_youth_pulls_child_down() {
        let values = UbiAmounts::new(500.0, 400.0, 1200.0, 1500.0);
        let locks = UbiLocks { youth: true, ..Default::default() };
        let result = validate_ubi_amounts(&values, &locks);
        assert_eq!(result.corrected_values, UbiAmounts::new(400.0, 400.0, 1200.0, 1500.0));
        assert!(!result.is_valid);
    }

    #[test]
    fn test_locked_senior_cascades_to_every_cohort() {
        let values = UbiAmounts::new(900.0, 1000.0, 1200.0, 300.0);
        let locks = UbiLocks { senior: true, ..Default::default() };
        let result = validate_ubi_amounts(&values, &locks);
        assert_eq!(result.corrected_values, UbiAmounts::new(300.0, 300.0, 300.0, 300.0));
    }

    #[test]
    fn test_range_clamp() {
        let values = UbiAmounts::new(-20.0, 100.0, 7000.0, 7000.0);
        let result = validate_ubi_amounts(&values, &UbiLocks::default());
        assert_eq!(result.corrected_values, UbiAmounts::new(0.0, 100.0, 5000.0, 5000.0));
        assert!(result.violations.iter().all(|v| v.kind == ViolationKind::Range));
    }

    #[test]
    fn test_can_change_respects_locks_and_order() {
        let current = UbiAmounts::new(200.0, 400.0, 1200.0, 1500.0);
        let locks = UbiLocks { adult: true, ..Default::default() };

        assert!(!can_change_ubi_amount(Cohort::Adult, 1300.0, &current, &locks));
        assert!(can_change_ubi_amount(Cohort::Youth, 1000.0, &current, &locks));
        // Youth above a locked adult gets pulled back down
        assert!(!can_change_ubi_amount(Cohort::Youth, 1300.0, &current, &locks));
        // Raising senior is always fine
        assert!(can_change_ubi_amount(Cohort::Senior, 2000.0, &current, &locks));
    }
}
