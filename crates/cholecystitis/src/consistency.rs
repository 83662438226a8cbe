//! Calculator self-checks.
//!
//! Cross-checks the derived classifications against the raw criteria they
//! were computed from. A disagreement indicates a classifier defect and is
//! surfaced as a hard failure, never clamped.

use crate::comorbidity::charlson_index;
use crate::diagnosis::{diagnosis_certainty, tokyo_criteria, DiagnosisCertainty};
use crate::record::CholecystitisRecord;
use crate::severity::{organ_dysfunction, severity_grade, SeverityGrade};

/// Maximum attainable Charlson index (all flags plus the ≥80 age increment).
pub const CCI_MAX: u32 = 41;

/// A violated classifier invariant. Always a defect.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuditError {
    #[error("Charlson index {value} exceeds its maximum of {max}")]
    CharlsonOutOfRange { value: u32, max: u32 },
    #[error("diagnosis certainty disagrees with the Tokyo criteria: {detail}")]
    DiagnosisInconsistent { detail: &'static str },
    #[error("severity grade disagrees with the organ-dysfunction check: {detail}")]
    SeverityInconsistent { detail: &'static str },
}

/// Recomputes the derived classifications and verifies their invariants.
pub fn audit(record: &CholecystitisRecord) -> Result<(), AuditError> {
    let cci = charlson_index(record);
    if cci > CCI_MAX {
        tracing::error!(cci, max = CCI_MAX, "Charlson invariant violated");
        return Err(AuditError::CharlsonOutOfRange {
            value: cci,
            max: CCI_MAX,
        });
    }

    let criteria = tokyo_criteria(record);
    let certainty = diagnosis_certainty(record);
    let expected = if criteria.local_signs && criteria.imaging_findings {
        DiagnosisCertainty::Definite
    } else if criteria.local_signs && criteria.systemic_inflammation {
        DiagnosisCertainty::Suspected
    } else {
        DiagnosisCertainty::Insufficient
    };
    if certainty != expected {
        tracing::error!(?certainty, ?expected, "diagnosis invariant violated");
        return Err(AuditError::DiagnosisInconsistent {
            detail: "certainty does not match the criterion groups",
        });
    }

    let grade = severity_grade(record);
    let dysfunction = organ_dysfunction(record);
    if dysfunction.is_some() && grade != SeverityGrade::GradeIII {
        return Err(AuditError::SeverityInconsistent {
            detail: "organ dysfunction present but grade is not III",
        });
    }
    if dysfunction.is_none() && grade == SeverityGrade::GradeIII {
        return Err(AuditError::SeverityInconsistent {
            detail: "grade III without any organ dysfunction",
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Comorbidities;

    #[test]
    fn test_audit_passes_on_an_empty_record() {
        assert!(audit(&CholecystitisRecord::new()).is_ok());
    }

    #[test]
    fn test_audit_passes_on_a_fully_loaded_record() {
        let mut record = CholecystitisRecord {
            murphy_sign: true,
            ruq_pain: true,
            ruq_tenderness: true,
            ultrasound_positive: true,
            ct_positive: true,
            vasopressor_support: true,
            palpable_mass: true,
            symptoms_over_72h: true,
            jaundice: true,
            comorbidities: Comorbidities {
                myocardial_infarction: true,
                congestive_heart_failure: true,
                peripheral_vascular_disease: true,
                cerebrovascular_disease: true,
                dementia: true,
                chronic_pulmonary_disease: true,
                connective_tissue_disease: true,
                peptic_ulcer_disease: true,
                mild_liver_disease: true,
                diabetes_uncomplicated: true,
                diabetes_end_organ_damage: true,
                hemiplegia: true,
                moderate_severe_renal_disease: true,
                solid_tumor_nonmetastatic: true,
                leukemia: true,
                lymphoma: true,
                moderate_severe_liver_disease: true,
                metastatic_solid_tumor: true,
                aids: true,
            },
            ..CholecystitisRecord::new()
        };
        record.set_age_years(85.0).unwrap();
        record.set_temperature_c(39.0).unwrap();
        record.set_leukocytes_per_ul(19_000.0).unwrap();

        assert_eq!(charlson_index(&record), CCI_MAX);
        assert!(audit(&record).is_ok());
    }
}
