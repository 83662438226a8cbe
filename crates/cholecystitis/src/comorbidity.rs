//! Surgical-risk calculation: Charlson index, ASA class and age.

use crate::record::{AsaClass, CholecystitisRecord};
use crate::severity::{severity_grade, SeverityGrade};
use serde::Serialize;

/// Surgical-risk tier, strictly ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl RiskTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "LOW",
            RiskTier::Moderate => "MODERATE",
            RiskTier::High => "HIGH",
            RiskTier::VeryHigh => "VERY_HIGH",
        }
    }

    /// `true` for tiers where early cholecystectomy is generally acceptable.
    pub fn is_operable(&self) -> bool {
        matches!(self, RiskTier::Low | RiskTier::Moderate)
    }
}

/// Derived surgical-risk profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SurgicalRiskProfile {
    /// Charlson comorbidity index, including the age increment.
    pub cci: u32,
    pub asa: AsaClass,
    pub tier: RiskTier,
}

/// Age-banded Charlson increment: 50–59 +1, 60–69 +2, 70–79 +3, ≥80 +4.
fn age_increment(age: f64) -> u32 {
    if age >= 80.0 {
        4
    } else if age >= 70.0 {
        3
    } else if age >= 60.0 {
        2
    } else if age >= 50.0 {
        1
    } else {
        0
    }
}

/// Charlson comorbidity index for the current record.
///
/// A pure additive sum of the weighted comorbidity flags plus the age
/// increment; the order flags were set never matters.
pub fn charlson_index(record: &CholecystitisRecord) -> u32 {
    let age_points = record
        .age_years
        .map(|age| age_increment(age.value()))
        .unwrap_or(0);
    record.comorbidities.weighted_points() + age_points
}

/// Derives the surgical-risk profile.
///
/// Requires age and ASA class; returns `None` until both are recorded.
/// Tier ladder (most severe first):
/// - VeryHigh: CCI ≥6 and ASA ≥III and Grade III disease
/// - High: CCI ≥6, or ASA ≥III with age >75, or jaundice
/// - Moderate: ASA ≥III, or age >70, or CCI ≥4
/// - Low: otherwise
///
/// The ladder is monotone non-decreasing in the CCI.
pub fn surgical_risk(record: &CholecystitisRecord) -> Option<SurgicalRiskProfile> {
    let age = record.age_years?.value();
    let asa = record.asa_class?;
    let cci = charlson_index(record);
    let asa_high = asa.is_three_or_higher();

    let tier = if cci >= 6 && asa_high && severity_grade(record) == SeverityGrade::GradeIII {
        RiskTier::VeryHigh
    } else if cci >= 6 || (asa_high && age > 75.0) || record.jaundice {
        RiskTier::High
    } else if asa_high || age > 70.0 || cci >= 4 {
        RiskTier::Moderate
    } else {
        RiskTier::Low
    };

    Some(SurgicalRiskProfile { cci, asa, tier })
}
