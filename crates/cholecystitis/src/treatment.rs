//! Treatment pathway resolver.
//!
//! Keyed on severity grade and surgical-risk tier. The resolver needs an
//! established diagnosis and a computed risk profile; otherwise it returns
//! [`Resolution::Pending`] rather than guessing.

use crate::comorbidity::{surgical_risk, RiskTier};
use crate::diagnosis::diagnosis_certainty;
use crate::record::CholecystitisRecord;
use crate::severity::{severity_grade, SeverityGrade};
use guideflow_types::{Recommendation, Resolution};
use serde::Serialize;

/// Enumerated cholecystitis treatment pathways.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CholecystitisPathway {
    /// Grade III in a high-risk patient: urgent gallbladder drainage.
    UrgentPercutaneousDrainage,
    /// Grade III in an operable patient: organ support, then cholecystectomy
    /// once stabilised.
    IntensiveCareThenCholecystectomy,
    /// Grade II in a high-risk patient: antibiotics, drainage if needed.
    AntibioticsWithOptionalDrainage,
    /// Grade II in an operable patient: cholecystectomy within 72 h.
    EarlyCholecystectomy,
    /// Grade I in an operable patient.
    EarlyLaparoscopicCholecystectomy,
    /// Grade I in a high-risk patient.
    InitialConservativeManagement,
}

impl CholecystitisPathway {
    pub fn as_str(&self) -> &'static str {
        match self {
            CholecystitisPathway::UrgentPercutaneousDrainage => "URGENT_PERCUTANEOUS_DRAINAGE",
            CholecystitisPathway::IntensiveCareThenCholecystectomy => {
                "INTENSIVE_CARE_THEN_CHOLECYSTECTOMY"
            }
            CholecystitisPathway::AntibioticsWithOptionalDrainage => {
                "ANTIBIOTICS_WITH_OPTIONAL_DRAINAGE"
            }
            CholecystitisPathway::EarlyCholecystectomy => "EARLY_CHOLECYSTECTOMY",
            CholecystitisPathway::EarlyLaparoscopicCholecystectomy => {
                "EARLY_LAPAROSCOPIC_CHOLECYSTECTOMY"
            }
            CholecystitisPathway::InitialConservativeManagement => {
                "INITIAL_CONSERVATIVE_MANAGEMENT"
            }
        }
    }
}

fn criteria(grade: SeverityGrade, tier: RiskTier) -> Vec<String> {
    vec![
        format!("severity: {}", grade.as_str()),
        format!("surgical risk: {}", tier.as_str()),
    ]
}

/// Resolves the treatment pathway from the current record.
///
/// Identical inputs always produce identical pathway codes.
pub fn recommend(record: &CholecystitisRecord) -> Resolution<CholecystitisPathway> {
    if !diagnosis_certainty(record).is_established() {
        return Resolution::Pending {
            missing: vec!["diagnosis_certainty"],
        };
    }
    let Some(profile) = surgical_risk(record) else {
        let mut missing = Vec::new();
        if record.age_years.is_none() {
            missing.push("age_years");
        }
        if record.asa_class.is_none() {
            missing.push("asa_class");
        }
        return Resolution::Pending { missing };
    };

    let grade = severity_grade(record);
    let operable = profile.tier.is_operable();

    let recommendation = match (grade, operable) {
        (SeverityGrade::GradeIII, false) => Recommendation {
            pathway: CholecystitisPathway::UrgentPercutaneousDrainage,
            rationale: "Grade III cholecystitis with a prohibitive surgical risk: urgent \
                        percutaneous gallbladder drainage with organ support"
                .to_string(),
            criteria: criteria(grade, profile.tier),
            escalate_when: vec!["no clinical improvement after drainage"],
            advisories: vec!["broad-spectrum intravenous antibiotics and blood cultures"],
        },
        (SeverityGrade::GradeIII, true) => Recommendation {
            pathway: CholecystitisPathway::IntensiveCareThenCholecystectomy,
            rationale: "Grade III cholecystitis in an operable patient: intensive organ support, \
                        cholecystectomy once dysfunction has been reversed"
                .to_string(),
            criteria: criteria(grade, profile.tier),
            escalate_when: vec!["organ dysfunction refractory to support"],
            advisories: vec!["broad-spectrum intravenous antibiotics and blood cultures"],
        },
        (SeverityGrade::GradeII, false) => Recommendation {
            pathway: CholecystitisPathway::AntibioticsWithOptionalDrainage,
            rationale: "Grade II cholecystitis with elevated surgical risk: antibiotic therapy, \
                        gallbladder drainage if the response is inadequate"
                .to_string(),
            criteria: criteria(grade, profile.tier),
            escalate_when: vec!["no clinical improvement within 48-72h"],
            advisories: vec!["reassess operability after resolution"],
        },
        (SeverityGrade::GradeII, true) => Recommendation {
            pathway: CholecystitisPathway::EarlyCholecystectomy,
            rationale: "Grade II cholecystitis with acceptable surgical risk: early \
                        cholecystectomy within 72 h of onset"
                .to_string(),
            criteria: criteria(grade, profile.tier),
            escalate_when: Vec::new(),
            advisories: vec!["experienced surgical team advised for the difficult gallbladder"],
        },
        (SeverityGrade::GradeI, true) => Recommendation {
            pathway: CholecystitisPathway::EarlyLaparoscopicCholecystectomy,
            rationale: "Grade I cholecystitis with acceptable surgical risk: early laparoscopic \
                        cholecystectomy"
                .to_string(),
            criteria: criteria(grade, profile.tier),
            escalate_when: Vec::new(),
            advisories: Vec::new(),
        },
        (SeverityGrade::GradeI, false) => Recommendation {
            pathway: CholecystitisPathway::InitialConservativeManagement,
            rationale: "Grade I cholecystitis with elevated surgical risk: initial conservative \
                        management, interval surgery if risk improves"
                .to_string(),
            criteria: criteria(grade, profile.tier),
            escalate_when: vec!["no clinical improvement within 48-72h"],
            advisories: Vec::new(),
        },
    };

    tracing::debug!(pathway = recommendation.pathway.as_str(), "treatment resolved");
    Resolution::Ready(recommendation)
}
