pub mod age_cutoffs;
mod ordering;
pub mod ubi_amounts;
pub mod violation;

pub use age_cutoffs::{validate_age_cutoffs, AgeCutoffs};
pub use ubi_amounts::{can_change_ubi_amount, validate_ubi_amounts, Cohort, UbiAmounts};
pub use violation::{ConstraintResult, ConstraintViolation, ViolationKind};
