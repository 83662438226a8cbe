//! Tokyo severity grading.
//!
//! Grade III (organ dysfunction) dominates regardless of other criteria; the
//! organ systems are checked in a fixed order and the first match
//! short-circuits. Grade II is met by marked leukocytosis, a palpable mass,
//! symptom duration over 72 h or severe local inflammation; otherwise Grade I.

use crate::record::CholecystitisRecord;
use serde::Serialize;

/// Tokyo severity grade, strictly ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SeverityGrade {
    GradeI,
    GradeII,
    GradeIII,
}

impl SeverityGrade {
    pub fn as_str(&self) -> &'static str {
        match self {
            SeverityGrade::GradeI => "GRADE_I",
            SeverityGrade::GradeII => "GRADE_II",
            SeverityGrade::GradeIII => "GRADE_III",
        }
    }
}

/// The organ system whose dysfunction forced Grade III.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrganDysfunction {
    Cardiovascular,
    Neurological,
    Respiratory,
    Renal,
    Hepatic,
    Hematologic,
}

/// Returns the first organ system with dysfunction, if any.
///
/// Check order: cardiovascular (systolic <90 mmHg or vasopressor support),
/// neurological (altered consciousness or Glasgow <13), respiratory
/// (PaO2/FiO2 <300 or mechanical ventilation), renal (creatinine >2.0 mg/dL
/// or urine output <400 mL/24 h), hepatic (bilirubin >2.0 mg/dL),
/// hematologic (platelets <100,000/µL).
pub fn organ_dysfunction(record: &CholecystitisRecord) -> Option<OrganDysfunction> {
    let hypotension = record
        .systolic_bp_mmhg
        .is_some_and(|bp| bp.value() < 90.0);
    if hypotension || record.vasopressor_support {
        return Some(OrganDysfunction::Cardiovascular);
    }

    let low_glasgow = record.glasgow_score.is_some_and(|g| g.value() < 13.0);
    if record.altered_consciousness || low_glasgow {
        return Some(OrganDysfunction::Neurological);
    }

    let low_oxygenation = record
        .pao2_fio2_ratio
        .is_some_and(|r| r.value() < 300.0);
    if low_oxygenation || record.mechanical_ventilation {
        return Some(OrganDysfunction::Respiratory);
    }

    let high_creatinine = record
        .creatinine_mg_dl
        .is_some_and(|c| c.value() > 2.0);
    let oliguria = record
        .urine_output_ml_24h
        .is_some_and(|u| u.value() < 400.0);
    if high_creatinine || oliguria {
        return Some(OrganDysfunction::Renal);
    }

    if record.bilirubin_mg_dl.is_some_and(|b| b.value() > 2.0) {
        return Some(OrganDysfunction::Hepatic);
    }

    if record
        .platelets_per_ul
        .is_some_and(|p| p.value() < 100_000.0)
    {
        return Some(OrganDysfunction::Hematologic);
    }

    None
}

/// Derives the severity grade from the current record.
pub fn severity_grade(record: &CholecystitisRecord) -> SeverityGrade {
    if organ_dysfunction(record).is_some() {
        return SeverityGrade::GradeIII;
    }

    let marked_leukocytosis = record
        .leukocytes_per_ul
        .is_some_and(|w| w.value() > 18_000.0);
    if marked_leukocytosis
        || record.palpable_mass
        || record.symptoms_over_72h
        || record.severe_local_inflammation
    {
        return SeverityGrade::GradeII;
    }

    SeverityGrade::GradeI
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_record_is_grade_one() {
        assert_eq!(
            severity_grade(&CholecystitisRecord::new()),
            SeverityGrade::GradeI
        );
    }

    #[test]
    fn test_each_organ_system_forces_grade_three() {
        let mut cardio = CholecystitisRecord::new();
        cardio.set_systolic_bp_mmhg(85.0).unwrap();
        assert_eq!(
            organ_dysfunction(&cardio),
            Some(OrganDysfunction::Cardiovascular)
        );

        let mut neuro = CholecystitisRecord::new();
        neuro.set_glasgow_score(12.0).unwrap();
        assert_eq!(
            organ_dysfunction(&neuro),
            Some(OrganDysfunction::Neurological)
        );

        let mut resp = CholecystitisRecord::new();
        resp.set_pao2_fio2_ratio(250.0).unwrap();
        assert_eq!(
            organ_dysfunction(&resp),
            Some(OrganDysfunction::Respiratory)
        );

        let mut renal = CholecystitisRecord::new();
        renal.set_urine_output_ml_24h(300.0).unwrap();
        assert_eq!(organ_dysfunction(&renal), Some(OrganDysfunction::Renal));

        let mut hepatic = CholecystitisRecord::new();
        hepatic.set_bilirubin_mg_dl(2.5).unwrap();
        assert_eq!(organ_dysfunction(&hepatic), Some(OrganDysfunction::Hepatic));

        let mut hematologic = CholecystitisRecord::new();
        hematologic.set_platelets_per_ul(80_000.0).unwrap();
        assert_eq!(
            organ_dysfunction(&hematologic),
            Some(OrganDysfunction::Hematologic)
        );

        for record in [cardio, neuro, resp, renal, hepatic, hematologic] {
            assert_eq!(severity_grade(&record), SeverityGrade::GradeIII);
        }
    }

    #[test]
    fn test_dysfunction_dominates_grade_two_criteria() {
        // Platelets 80,000 forces Grade III even with Grade II findings present.
        let mut record = CholecystitisRecord {
            palpable_mass: true,
            symptoms_over_72h: true,
            ..CholecystitisRecord::new()
        };
        record.set_platelets_per_ul(80_000.0).unwrap();
        assert_eq!(severity_grade(&record), SeverityGrade::GradeIII);
    }

    #[test]
    fn test_first_matching_system_short_circuits() {
        let mut record = CholecystitisRecord::new();
        record.set_systolic_bp_mmhg(80.0).unwrap();
        record.set_platelets_per_ul(50_000.0).unwrap();
        assert_eq!(
            organ_dysfunction(&record),
            Some(OrganDysfunction::Cardiovascular)
        );
    }

    #[test]
    fn test_grade_two_criteria() {
        let mut leukocytosis = CholecystitisRecord::new();
        leukocytosis.set_leukocytes_per_ul(19_000.0).unwrap();
        assert_eq!(severity_grade(&leukocytosis), SeverityGrade::GradeII);

        let mass = CholecystitisRecord {
            palpable_mass: true,
            ..CholecystitisRecord::new()
        };
        assert_eq!(severity_grade(&mass), SeverityGrade::GradeII);

        let duration = CholecystitisRecord {
            symptoms_over_72h: true,
            ..CholecystitisRecord::new()
        };
        assert_eq!(severity_grade(&duration), SeverityGrade::GradeII);

        let inflammation = CholecystitisRecord {
            severe_local_inflammation: true,
            ..CholecystitisRecord::new()
        };
        assert_eq!(severity_grade(&inflammation), SeverityGrade::GradeII);
    }

    #[test]
    fn test_leukocytosis_at_eighteen_thousand_stays_grade_one() {
        let mut record = CholecystitisRecord::new();
        record.set_leukocytes_per_ul(18_000.0).unwrap();
        assert_eq!(severity_grade(&record), SeverityGrade::GradeI);
    }

    #[test]
    fn test_grades_are_strictly_ordered() {
        assert!(SeverityGrade::GradeI < SeverityGrade::GradeII);
        assert!(SeverityGrade::GradeII < SeverityGrade::GradeIII);
    }
}
