use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ViolationKind {
    /// Value was outside its allowed range and got clamped
    Range,
    /// Value broke the cohort ordering and got moved
    Progression,
    /// Both sides of an ordering pair are locked and disagree; nothing moved
    LockConflict,
}

/// One correction (or refused correction) made by the constraint engine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstraintViolation {
    pub kind: ViolationKind,
    pub field: String,
    pub message: String,
    pub original_value: f64,
    pub corrected_value: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConstraintResult<T> {
    pub is_valid: bool,
    pub corrected_values: T,
    pub violations: Vec<ConstraintViolation>,
}

impl<T> ConstraintResult<T> {
    pub fn new(corrected_values: T, violations: Vec<ConstraintViolation>) -> Self {
        Self {
            is_valid: violations.is_empty(),
            corrected_values,
            violations,
        }
    }

    pub fn has_lock_conflict(&self) -> bool {
        self.violations
            .iter()
            .any(|v| v.kind == ViolationKind::LockConflict)
    }
}
