//! Aggregate evaluation report.

use crate::comorbidity::SurgicalRiskProfile;
use crate::diagnosis::{DiagnosisCertainty, TokyoCriteria};
use crate::severity::{OrganDysfunction, SeverityGrade};
use crate::treatment::CholecystitisPathway;
use guideflow_types::Resolution;
use guideflow_wizard::WizardState;
use serde::Serialize;

/// Every derived result of a cholecystitis assessment, in one flat structure.
#[derive(Debug, Clone, Serialize)]
pub struct CholecystitisReport {
    pub tokyo_criteria: TokyoCriteria,
    pub diagnosis: DiagnosisCertainty,
    pub severity: SeverityGrade,
    /// The organ system that forced Grade III, when applicable.
    pub organ_dysfunction: Option<OrganDysfunction>,
    pub charlson_index: u32,
    /// `None` until age and ASA class are recorded.
    pub surgical_risk: Option<SurgicalRiskProfile>,
    pub treatment: Resolution<CholecystitisPathway>,
    pub wizard: WizardState,
}
