//! Tokyo diagnostic criteria and diagnosis certainty.

use crate::record::CholecystitisRecord;
use serde::Serialize;

/// Resolved state of the three Tokyo criterion groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TokyoCriteria {
    /// Criterion A: local signs of inflammation.
    pub local_signs: bool,
    /// Criterion B: systemic signs of inflammation.
    pub systemic_inflammation: bool,
    /// Criterion C: imaging findings characteristic of cholecystitis.
    pub imaging_findings: bool,
}

/// Diagnosis certainty derived from the criterion groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiagnosisCertainty {
    Definite,
    Suspected,
    Insufficient,
}

impl DiagnosisCertainty {
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosisCertainty::Definite => "DEFINITE",
            DiagnosisCertainty::Suspected => "SUSPECTED",
            DiagnosisCertainty::Insufficient => "INSUFFICIENT",
        }
    }

    /// `true` once the diagnosis is definite or suspected.
    pub fn is_established(&self) -> bool {
        !matches!(self, DiagnosisCertainty::Insufficient)
    }
}

/// Resolves the three criterion groups from the current record.
///
/// Criterion B thresholds: temperature ≥37.5 °C, CRP >3.0 mg/dL, leukocyte
/// count outside 4,000–10,000/µL. An unset measurement never triggers a
/// criterion.
pub fn tokyo_criteria(record: &CholecystitisRecord) -> TokyoCriteria {
    let local_signs = record.murphy_sign || record.ruq_pain || record.ruq_tenderness;

    let fever = record
        .temperature_c
        .is_some_and(|t| t.value() >= 37.5);
    let crp_elevated = record.crp_mg_dl.is_some_and(|c| c.value() > 3.0);
    let wbc_abnormal = record
        .leukocytes_per_ul
        .is_some_and(|w| w.value() < 4_000.0 || w.value() > 10_000.0);

    TokyoCriteria {
        local_signs,
        systemic_inflammation: fever || crp_elevated || wbc_abnormal,
        imaging_findings: record.any_imaging_positive(),
    }
}

/// Derives the diagnosis certainty.
///
/// Definite when local signs are corroborated by imaging (with or without
/// systemic inflammation); suspected when local and systemic signs are
/// present without imaging confirmation; insufficient otherwise.
pub fn diagnosis_certainty(record: &CholecystitisRecord) -> DiagnosisCertainty {
    let criteria = tokyo_criteria(record);
    if criteria.local_signs && criteria.imaging_findings {
        DiagnosisCertainty::Definite
    } else if criteria.local_signs && criteria.systemic_inflammation {
        DiagnosisCertainty::Suspected
    } else {
        DiagnosisCertainty::Insufficient
    }
}
