//! Calculator self-checks.
//!
//! A derived value outside its documented range indicates a calculator defect,
//! not bad input; it must surface as a hard failure rather than be clamped.
//! Callers that want the guarantee (batch pipelines, test harnesses) run
//! [`audit`] after deriving results.

use crate::record::AppendicitisRecord;
use crate::scores::{aas, air, alvarado, pas, AAS_MAX, AIR_MAX, ALVARADO_MAX, PAS_MAX};

/// A violated calculator invariant. Always a defect.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuditError {
    #[error("{score} score {value} exceeds its documented maximum of {max}")]
    ScoreOutOfRange {
        score: &'static str,
        value: u32,
        max: u32,
    },
}

fn check(score: &'static str, value: u32, max: u32) -> Result<(), AuditError> {
    if value > max {
        tracing::error!(score, value, max, "score invariant violated");
        return Err(AuditError::ScoreOutOfRange { score, value, max });
    }
    Ok(())
}

/// Recomputes every score and verifies it lies within its documented range.
pub fn audit(record: &AppendicitisRecord) -> Result<(), AuditError> {
    check("alvarado", alvarado(record).value, ALVARADO_MAX)?;
    check("air", air(record).value, AIR_MAX)?;
    check("aas", aas(record).value, AAS_MAX)?;
    check("pas", pas(record).value, PAS_MAX)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::{Guarding, ReboundIntensity, Sex, SymptomDuration};

    #[test]
    fn test_audit_passes_on_an_empty_record() {
        assert!(audit(&AppendicitisRecord::new()).is_ok());
    }

    #[test]
    fn test_audit_passes_on_a_fully_loaded_record() {
        let mut record = AppendicitisRecord {
            alvarado_migratory_pain: true,
            alvarado_anorexia: true,
            alvarado_nausea_vomiting: true,
            alvarado_rlq_tenderness: true,
            alvarado_rebound_tenderness: true,
            alvarado_fever: true,
            alvarado_leukocytosis: true,
            alvarado_left_shift: true,
            air_vomiting: true,
            air_rlq_pain: true,
            air_rebound: ReboundIntensity::Strong,
            aas_rlq_pain: true,
            aas_pain_relocation: true,
            aas_rlq_tenderness: true,
            aas_guarding: Guarding::ModerateOrSevere,
            aas_sex: Some(Sex::Male),
            aas_symptom_duration: Some(SymptomDuration::Under24h),
            pas_fever: true,
            pas_anorexia: true,
            pas_nausea_vomiting: true,
            pas_migratory_pain: true,
            pas_rlq_tenderness: true,
            pas_cough_hop_percussion_pain: true,
            pas_leukocytosis: true,
            pas_neutrophilia: true,
            ..AppendicitisRecord::new()
        };
        record.set_air_temperature_c(39.5).unwrap();
        record.set_air_leukocytes(20.0).unwrap();
        record.set_air_neutrophil_pct(95.0).unwrap();
        record.set_air_crp_mg_l(200.0).unwrap();
        record.set_aas_leukocytes(20.0).unwrap();
        record.set_aas_neutrophil_pct(95.0).unwrap();
        record.set_aas_crp_mg_l(40.0).unwrap();
        record.set_age_years(45.0).unwrap();

        assert!(audit(&record).is_ok());
    }

    #[test]
    fn test_check_surfaces_a_defect() {
        let err = check("alvarado", 11, ALVARADO_MAX).expect_err("out of range");
        assert_eq!(
            err,
            AuditError::ScoreOutOfRange {
                score: "alvarado",
                value: 11,
                max: 10
            }
        );
    }
}
