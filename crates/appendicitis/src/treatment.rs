//! Treatment pathway resolver.
//!
//! A decision tree keyed first on classification, then on hemodynamic
//! stability and the complication found. The resolver never guesses: when a
//! branch needs a value that has not been supplied it returns
//! [`Resolution::Pending`] naming the missing fields.

use crate::record::{AppendicitisRecord, Classification, Complication, Stability};
use guideflow_types::{Recommendation, Resolution};
use serde::Serialize;

/// Abscess diameter at or above which percutaneous drainage is preferred over
/// antibiotics alone.
pub const ABSCESS_DRAINAGE_THRESHOLD_CM: f64 = 3.5;

/// Enumerated appendicitis treatment pathways.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppendicitisPathway {
    /// Uncomplicated disease with an appendicolith: operate, conservative
    /// management is disfavoured.
    LaparoscopicAppendectomy,
    /// Uncomplicated disease without exclusion criteria: surgery preferred,
    /// antibiotic-only management is a valid alternative.
    AppendectomyOrAntibiotics,
    /// Urgent surgery: unstable patient or free perforation.
    UrgentAppendectomy,
    /// Small abscess: antibiotics with scheduled reassessment.
    AntibioticsWithReassessment,
    /// Large abscess: percutaneous drainage plus antibiotics.
    PercutaneousDrainageWithAntibiotics,
    /// Phlegmon: conservative management first-line.
    AntibioticsFirstLine,
}

impl AppendicitisPathway {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppendicitisPathway::LaparoscopicAppendectomy => "LAPAROSCOPIC_APPENDECTOMY",
            AppendicitisPathway::AppendectomyOrAntibiotics => "APPENDECTOMY_OR_ANTIBIOTICS",
            AppendicitisPathway::UrgentAppendectomy => "URGENT_APPENDECTOMY",
            AppendicitisPathway::AntibioticsWithReassessment => "ANTIBIOTICS_WITH_REASSESSMENT",
            AppendicitisPathway::PercutaneousDrainageWithAntibiotics => {
                "PERCUTANEOUS_DRAINAGE_WITH_ANTIBIOTICS"
            }
            AppendicitisPathway::AntibioticsFirstLine => "ANTIBIOTICS_FIRST_LINE",
        }
    }
}

const ESCALATE_CONSERVATIVE: &[&str] = &[
    "no clinical improvement within 48-72h",
    "abscess growth on follow-up imaging",
    "new signs of sepsis",
];

const ESCALATE_DRAINAGE: &[&str] = &[
    "no clinical improvement within 48-72h",
    "persistent purulent drain output",
    "abscess growth on follow-up imaging",
    "new signs of sepsis",
];

const ADVISORY_COLONOSCOPY: &str =
    "age over 40: colonoscopy recommended after resolution (colorectal neoplasia risk)";

fn over_forty(record: &AppendicitisRecord) -> bool {
    record
        .age_years
        .map(|age| age.value() > 40.0)
        .unwrap_or(false)
}

fn uncomplicated(record: &AppendicitisRecord) -> Recommendation<AppendicitisPathway> {
    let advisories = vec![
        "single-dose preoperative antibiotic; no postoperative continuation",
        "routine abdominal drainage is not recommended",
    ];
    if record.appendicolith {
        Recommendation {
            pathway: AppendicitisPathway::LaparoscopicAppendectomy,
            rationale: "uncomplicated appendicitis with a visible appendicolith: antibiotic-only \
                        management fails in up to half of cases, so operative treatment is advised"
                .to_string(),
            criteria: vec![
                "classification: uncomplicated".to_string(),
                "appendicolith present".to_string(),
            ],
            escalate_when: Vec::new(),
            advisories,
        }
    } else {
        Recommendation {
            pathway: AppendicitisPathway::AppendectomyOrAntibiotics,
            rationale: "uncomplicated appendicitis without exclusion criteria: laparoscopic \
                        appendectomy is preferred; antibiotic-only management is an acceptable \
                        alternative after shared decision-making"
                .to_string(),
            criteria: vec![
                "classification: uncomplicated".to_string(),
                "no appendicolith".to_string(),
            ],
            escalate_when: Vec::new(),
            advisories,
        }
    }
}

fn urgent(criteria: Vec<String>) -> Recommendation<AppendicitisPathway> {
    Recommendation {
        pathway: AppendicitisPathway::UrgentAppendectomy,
        rationale: "urgent appendectomy with resuscitation; source control cannot wait"
            .to_string(),
        criteria,
        escalate_when: Vec::new(),
        advisories: vec!["broad-spectrum intravenous antibiotics on diagnosis"],
    }
}

fn abscess(
    record: &AppendicitisRecord,
    diameter_cm: f64,
) -> Recommendation<AppendicitisPathway> {
    let mut advisories = vec!["interval appendectomy is not routinely recommended"];
    if over_forty(record) {
        advisories.push(ADVISORY_COLONOSCOPY);
    }
    if diameter_cm < ABSCESS_DRAINAGE_THRESHOLD_CM {
        Recommendation {
            pathway: AppendicitisPathway::AntibioticsWithReassessment,
            rationale: format!(
                "periappendiceal abscess of {diameter_cm} cm (below {ABSCESS_DRAINAGE_THRESHOLD_CM} cm): \
                 antibiotics with imaging reassessment at 48-72h"
            ),
            criteria: vec![
                "classification: complicated".to_string(),
                "hemodynamically stable".to_string(),
                format!("abscess {diameter_cm} cm < {ABSCESS_DRAINAGE_THRESHOLD_CM} cm"),
            ],
            escalate_when: ESCALATE_CONSERVATIVE.to_vec(),
            advisories,
        }
    } else {
        Recommendation {
            pathway: AppendicitisPathway::PercutaneousDrainageWithAntibiotics,
            rationale: format!(
                "periappendiceal abscess of {diameter_cm} cm (at or above \
                 {ABSCESS_DRAINAGE_THRESHOLD_CM} cm): percutaneous drainage plus antibiotics, \
                 surgery reserved for failure"
            ),
            criteria: vec![
                "classification: complicated".to_string(),
                "hemodynamically stable".to_string(),
                format!("abscess {diameter_cm} cm >= {ABSCESS_DRAINAGE_THRESHOLD_CM} cm"),
            ],
            escalate_when: ESCALATE_DRAINAGE.to_vec(),
            advisories,
        }
    }
}

fn phlegmon(record: &AppendicitisRecord) -> Recommendation<AppendicitisPathway> {
    let mut advisories = vec!["interval appendectomy is not routinely recommended"];
    if over_forty(record) {
        advisories.push(ADVISORY_COLONOSCOPY);
    }
    Recommendation {
        pathway: AppendicitisPathway::AntibioticsFirstLine,
        rationale: "periappendiceal phlegmon (solid mass, no drainable collection): conservative \
                    management first-line, surgery only on failure"
            .to_string(),
        criteria: vec![
            "classification: complicated".to_string(),
            "hemodynamically stable".to_string(),
            "phlegmon without drainable collection".to_string(),
        ],
        escalate_when: ESCALATE_CONSERVATIVE.to_vec(),
        advisories,
    }
}

/// Resolves the treatment pathway from the current record.
///
/// Identical inputs always produce identical pathway codes.
pub fn recommend(record: &AppendicitisRecord) -> Resolution<AppendicitisPathway> {
    let Some(classification) = record.classification else {
        return Resolution::Pending {
            missing: vec!["classification"],
        };
    };

    let recommendation = match classification {
        Classification::Uncomplicated => uncomplicated(record),
        Classification::Complicated => {
            let Some(stability) = record.stability else {
                return Resolution::Pending {
                    missing: vec!["stability"],
                };
            };
            if stability == Stability::Unstable {
                // Unstable patients go to theatre regardless of abscess size.
                urgent(vec![
                    "classification: complicated".to_string(),
                    "hemodynamically unstable".to_string(),
                ])
            } else {
                let Some(complication) = record.complication else {
                    return Resolution::Pending {
                        missing: vec!["complication"],
                    };
                };
                match complication {
                    Complication::Perforation => urgent(vec![
                        "classification: complicated".to_string(),
                        "free perforation without abscess or phlegmon".to_string(),
                    ]),
                    Complication::Phlegmon => phlegmon(record),
                    Complication::Abscess => {
                        let Some(diameter) = record.abscess_diameter_cm else {
                            return Resolution::Pending {
                                missing: vec!["abscess_diameter_cm"],
                            };
                        };
                        abscess(record, diameter.value())
                    }
                }
            }
        }
    };

    tracing::debug!(pathway = recommendation.pathway.as_str(), "treatment resolved");
    Resolution::Ready(recommendation)
}
