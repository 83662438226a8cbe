//! Adult Appendicitis Score (AAS).
//!
//! The only non-linear calculator: the RLQ-tenderness row depends on sex and
//! age, and the CRP row has two distinct point tables selected by symptom
//! duration. Unset demographics or labs score nothing rather than guessing.

use crate::record::{AppendicitisRecord, Sex, SymptomDuration};
use guideflow_types::ScoreResult;
use serde::Serialize;

/// Maximum attainable AAS score (2+2+3+4 clinical, 3+4+5 laboratory).
pub const AAS_MAX: u32 = 23;

/// AAS band partition: 0–10, 11–15, ≥16.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AasBand {
    Low,
    Intermediate,
    High,
}

impl AasBand {
    /// Band for a given score. Total over all of `u32`.
    pub fn classify(score: u32) -> Self {
        match score {
            0..=10 => AasBand::Low,
            11..=15 => AasBand::Intermediate,
            _ => AasBand::High,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AasBand::Low => "LOW",
            AasBand::Intermediate => "INTERMEDIATE",
            AasBand::High => "HIGH",
        }
    }

    fn interpretation(&self) -> &'static str {
        match self {
            AasBand::Low => "low probability of appendicitis",
            AasBand::Intermediate => "intermediate probability of appendicitis",
            AasBand::High => "high probability of appendicitis",
        }
    }
}

/// RLQ-tenderness row: 1 point for women aged 16–49, 3 points for all other
/// patients. Requires sex (and, for women, age) to be recorded.
fn tenderness_points(record: &AppendicitisRecord) -> u32 {
    if !record.aas_rlq_tenderness {
        return 0;
    }
    match record.aas_sex {
        Some(Sex::Male) => 3,
        Some(Sex::Female) => match record.age_years.map(|a| a.value()) {
            Some(age) if age >= 50.0 => 3,
            Some(age) if age >= 16.0 => 1,
            _ => 0,
        },
        None => 0,
    }
}

/// CRP rows, selected by symptom duration (mg/L).
fn crp_points(record: &AppendicitisRecord) -> u32 {
    let crp = match record.aas_crp_mg_l {
        Some(v) => v.value(),
        None => return 0,
    };
    match record.aas_symptom_duration {
        Some(SymptomDuration::Under24h) => {
            if crp >= 83.0 {
                1
            } else if crp >= 25.0 {
                5
            } else if crp >= 11.0 {
                3
            } else if crp >= 4.0 {
                2
            } else {
                0
            }
        }
        Some(SymptomDuration::AtLeast24h) => {
            if crp >= 152.0 {
                1
            } else if crp >= 12.0 {
                2
            } else {
                0
            }
        }
        None => 0,
    }
}

/// Computes the Adult Appendicitis Score.
pub fn aas(record: &AppendicitisRecord) -> ScoreResult<AasBand> {
    let mut value = 0;
    if record.aas_rlq_pain {
        value += 2;
    }
    if record.aas_pain_relocation {
        value += 2;
    }
    value += tenderness_points(record);
    value += record.aas_guarding.points();

    value += match record.aas_leukocytes.map(|v| v.value()) {
        Some(v) if v >= 14.0 => 3,
        Some(v) if v >= 10.9 => 2,
        Some(v) if v >= 7.2 => 1,
        _ => 0,
    };
    value += match record.aas_neutrophil_pct.map(|v| v.value()) {
        Some(v) if v >= 83.0 => 4,
        Some(v) if v >= 75.0 => 3,
        Some(v) if v >= 62.0 => 2,
        _ => 0,
    };
    value += crp_points(record);

    let band = AasBand::classify(value);
    ScoreResult {
        value,
        band,
        interpretation: band.interpretation(),
    }
}
