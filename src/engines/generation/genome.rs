//! Genome representation for the policy optimizer
//!
//! A genome is one complete candidate policy: four monthly UBI amounts, the
//! flat tax parameters, three age cutoffs and four program replacement rates.
//! Every field holds a whole number stored as `f64` so the genetic operators
//! can treat all thirteen genes uniformly through [`GenomeField`].
//!
//! Genomes are plain `Copy` values. Operators never mutate a genome in place;
//! they return a new one.

use crate::types::Locks;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Genome {
    // Monthly UBI amounts ($)
    pub child_ubi: f64,
    pub youth_ubi: f64,
    pub adult_ubi: f64,
    pub senior_ubi: f64,

    pub flat_tax_rate: f64, // %
    pub tax_exemption: f64, // $/yr

    pub child_age_cutoff: f64,
    pub youth_age_cutoff: f64,
    pub senior_age_cutoff: f64,

    // Program replacement rates (%)
    pub oas_replacement: f64,
    pub ccb_replacement: f64,
    pub ei_replacement: f64,
    pub social_assistance_replacement: f64,
}

/// Inclusive value range of a gene
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRange {
    pub min: f64,
    pub max: f64,
}

impl FieldRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn span(&self) -> f64 {
        self.max - self.min
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.max(self.min).min(self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GenomeField {
    ChildUbi,
    YouthUbi,
    AdultUbi,
    SeniorUbi,
    FlatTaxRate,
    TaxExemption,
    ChildAgeCutoff,
    YouthAgeCutoff,
    SeniorAgeCutoff,
    OasReplacement,
    CcbReplacement,
    EiReplacement,
    SocialAssistanceReplacement,
}

impl GenomeField {
    pub const ALL: [GenomeField; 13] = [
        GenomeField::ChildUbi,
        GenomeField::YouthUbi,
        GenomeField::AdultUbi,
        GenomeField::SeniorUbi,
        GenomeField::FlatTaxRate,
        GenomeField::TaxExemption,
        GenomeField::ChildAgeCutoff,
        GenomeField::YouthAgeCutoff,
        GenomeField::SeniorAgeCutoff,
        GenomeField::OasReplacement,
        GenomeField::CcbReplacement,
        GenomeField::EiReplacement,
        GenomeField::SocialAssistanceReplacement,
    ];

    pub const UBI: [GenomeField; 4] = [
        GenomeField::ChildUbi,
        GenomeField::YouthUbi,
        GenomeField::AdultUbi,
        GenomeField::SeniorUbi,
    ];

    pub const REPLACEMENT: [GenomeField; 4] = [
        GenomeField::OasReplacement,
        GenomeField::CcbReplacement,
        GenomeField::EiReplacement,
        GenomeField::SocialAssistanceReplacement,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            GenomeField::ChildUbi => "child_ubi",
            GenomeField::YouthUbi => "youth_ubi",
            GenomeField::AdultUbi => "adult_ubi",
            GenomeField::SeniorUbi => "senior_ubi",
            GenomeField::FlatTaxRate => "flat_tax_rate",
            GenomeField::TaxExemption => "tax_exemption",
            GenomeField::ChildAgeCutoff => "child_age_cutoff",
            GenomeField::YouthAgeCutoff => "youth_age_cutoff",
            GenomeField::SeniorAgeCutoff => "senior_age_cutoff",
            GenomeField::OasReplacement => "oas_replacement",
            GenomeField::CcbReplacement => "ccb_replacement",
            GenomeField::EiReplacement => "ei_replacement",
            GenomeField::SocialAssistanceReplacement => "social_assistance_replacement",
        }
    }

    /// Valid range the optimizer searches for this gene
    pub fn range(&self) -> FieldRange {
        match self {
            GenomeField::ChildUbi => FieldRange::new(0.0, 500.0),
            GenomeField::YouthUbi => FieldRange::new(0.0, 800.0),
            GenomeField::AdultUbi => FieldRange::new(0.0, 2000.0),
            GenomeField::SeniorUbi => FieldRange::new(0.0, 2500.0),
            GenomeField::FlatTaxRate => FieldRange::new(0.0, 50.0),
            GenomeField::TaxExemption => FieldRange::new(0.0, 50_000.0),
            GenomeField::ChildAgeCutoff => FieldRange::new(0.0, 12.0),
            GenomeField::YouthAgeCutoff => FieldRange::new(13.0, 21.0),
            GenomeField::SeniorAgeCutoff => FieldRange::new(55.0, 100.0),
            GenomeField::OasReplacement
            | GenomeField::CcbReplacement
            | GenomeField::EiReplacement
            | GenomeField::SocialAssistanceReplacement => FieldRange::new(0.0, 100.0),
        }
    }

    /// Whether the caller has frozen this gene. Replacement rates are never lockable.
    pub fn is_locked(&self, locks: &Locks) -> bool {
        match self {
            GenomeField::ChildUbi => locks.ubi.child,
            GenomeField::YouthUbi => locks.ubi.youth,
            GenomeField::AdultUbi => locks.ubi.adult,
            GenomeField::SeniorUbi => locks.ubi.senior,
            GenomeField::FlatTaxRate => locks.tax.flat_tax_rate,
            GenomeField::TaxExemption => locks.tax.tax_exemption,
            GenomeField::ChildAgeCutoff => locks.ages.child_cutoff(),
            GenomeField::YouthAgeCutoff => locks.ages.youth_cutoff(),
            GenomeField::SeniorAgeCutoff => locks.ages.senior_cutoff(),
            GenomeField::OasReplacement
            | GenomeField::CcbReplacement
            | GenomeField::EiReplacement
            | GenomeField::SocialAssistanceReplacement => false,
        }
    }
}

impl Genome {
    pub fn get(&self, field: GenomeField) -> f64 {
        match field {
            GenomeField::ChildUbi => self.child_ubi,
            GenomeField::YouthUbi => self.youth_ubi,
            GenomeField::AdultUbi => self.adult_ubi,
            GenomeField::SeniorUbi => self.senior_ubi,
            GenomeField::FlatTaxRate => self.flat_tax_rate,
            GenomeField::TaxExemption => self.tax_exemption,
            GenomeField::ChildAgeCutoff => self.child_age_cutoff,
            GenomeField::YouthAgeCutoff => self.youth_age_cutoff,
            GenomeField::SeniorAgeCutoff => self.senior_age_cutoff,
            GenomeField::OasReplacement => self.oas_replacement,
            GenomeField::CcbReplacement => self.ccb_replacement,
            GenomeField::EiReplacement => self.ei_replacement,
            GenomeField::SocialAssistanceReplacement => self.social_assistance_replacement,
        }
    }

    /// Copy of this genome with one gene replaced
    pub fn with(mut self, field: GenomeField, value: f64) -> Self {
        let slot = match field {
            GenomeField::ChildUbi => &mut self.child_ubi,
            GenomeField::YouthUbi => &mut self.youth_ubi,
            GenomeField::AdultUbi => &mut self.adult_ubi,
            GenomeField::SeniorUbi => &mut self.senior_ubi,
            GenomeField::FlatTaxRate => &mut self.flat_tax_rate,
            GenomeField::TaxExemption => &mut self.tax_exemption,
            GenomeField::ChildAgeCutoff => &mut self.child_age_cutoff,
            GenomeField::YouthAgeCutoff => &mut self.youth_age_cutoff,
            GenomeField::SeniorAgeCutoff => &mut self.senior_age_cutoff,
            GenomeField::OasReplacement => &mut self.oas_replacement,
            GenomeField::CcbReplacement => &mut self.ccb_replacement,
            GenomeField::EiReplacement => &mut self.ei_replacement,
            GenomeField::SocialAssistanceReplacement => &mut self.social_assistance_replacement,
        };
        *slot = value;
        self
    }

    pub fn ubi_amounts(&self) -> [f64; 4] {
        [self.child_ubi, self.youth_ubi, self.adult_ubi, self.senior_ubi]
    }

    pub fn replacement_rates(&self) -> [f64; 4] {
        [
            self.oas_replacement,
            self.ccb_replacement,
            self.ei_replacement,
            self.social_assistance_replacement,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{AgeLocks, Locks};

    #[test]
    fn test_get_with_cover_every_field() {
        let mut genome = Genome::default();
        for (i, field) in GenomeField::ALL.iter().enumerate() {
            genome = genome.with(*field, i as f64 + 1.0);
        }
        for (i, field) in GenomeField::ALL.iter().enumerate() {
            assert_eq!(genome.get(*field), i as f64 + 1.0, "{}", field.name());
        }
    }

    #[test]
    fn test_replacement_rates_never_locked() {
        let locks = Locks {
            ages: AgeLocks { child: true, youth: true, adult: true, senior: true },
            ..Default::default()
        };
        for field in GenomeField::REPLACEMENT {
            assert!(!field.is_locked(&locks));
        }
        assert!(GenomeField::YouthAgeCutoff.is_locked(&locks));
    }

    #[test]
    fn test_field_range_clamp() {
        let range = GenomeField::YouthAgeCutoff.range();
        assert_eq!(range.clamp(30.0), 21.0);
        assert_eq!(range.clamp(5.0), 13.0);
        assert_eq!(range.span(), 8.0);
    }
}
