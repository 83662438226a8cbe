//! Assessment façade: one record, one wizard, pull-based derived values.

use crate::comorbidity::{self, SurgicalRiskProfile};
use crate::diagnosis::{self, DiagnosisCertainty, TokyoCriteria};
use crate::flow::{self, CholecystitisFlow};
use crate::record::CholecystitisRecord;
use crate::report::CholecystitisReport;
use crate::severity::{self, OrganDysfunction, SeverityGrade};
use crate::treatment::{self, CholecystitisPathway};
use guideflow_types::Resolution;
use guideflow_wizard::{Wizard, WizardError, WizardState};

/// An in-progress cholecystitis assessment session.
///
/// Owns the record and the wizard; every derived accessor recomputes from the
/// record. The cholecystitis flow has no skip rule, so no realignment is
/// needed after record mutations — mutate the record directly through
/// [`record_mut`](CholecystitisAssessment::record_mut).
#[derive(Debug, Clone)]
pub struct CholecystitisAssessment {
    record: CholecystitisRecord,
    wizard: Wizard,
}

impl Default for CholecystitisAssessment {
    fn default() -> Self {
        Self::new()
    }
}

impl CholecystitisAssessment {
    /// Starts a session with a zero-valued record at step 1.
    pub fn new() -> Self {
        Self::from_record(CholecystitisRecord::new())
    }

    /// Starts a session over an existing record (e.g. a deserialized payload).
    pub fn from_record(record: CholecystitisRecord) -> Self {
        Self {
            record,
            wizard: Wizard::new(flow::TOTAL_STEPS),
        }
    }

    /// Read access to the record.
    pub fn record(&self) -> &CholecystitisRecord {
        &self.record
    }

    /// Mutable access to the record.
    pub fn record_mut(&mut self) -> &mut CholecystitisRecord {
        &mut self.record
    }

    pub fn tokyo_criteria(&self) -> TokyoCriteria {
        diagnosis::tokyo_criteria(&self.record)
    }

    pub fn diagnosis(&self) -> DiagnosisCertainty {
        diagnosis::diagnosis_certainty(&self.record)
    }

    pub fn severity(&self) -> SeverityGrade {
        severity::severity_grade(&self.record)
    }

    pub fn organ_dysfunction(&self) -> Option<OrganDysfunction> {
        severity::organ_dysfunction(&self.record)
    }

    pub fn charlson_index(&self) -> u32 {
        comorbidity::charlson_index(&self.record)
    }

    /// Surgical-risk profile; `None` until age and ASA class are recorded.
    pub fn surgical_risk(&self) -> Option<SurgicalRiskProfile> {
        comorbidity::surgical_risk(&self.record)
    }

    pub fn treatment(&self) -> Resolution<CholecystitisPathway> {
        treatment::recommend(&self.record)
    }

    pub fn wizard_state(&self) -> WizardState {
        self.wizard.state()
    }

    /// Advances the wizard, applying the current step's gate.
    pub fn advance(&mut self) -> Result<u8, WizardError> {
        self.wizard.advance(&CholecystitisFlow::new(&self.record))
    }

    /// Retreats the wizard.
    pub fn retreat(&mut self) -> Result<u8, WizardError> {
        self.wizard.retreat(&CholecystitisFlow::new(&self.record))
    }

    /// Aggregates every derived value into a report.
    pub fn evaluate(&self) -> CholecystitisReport {
        CholecystitisReport {
            tokyo_criteria: self.tokyo_criteria(),
            diagnosis: self.diagnosis(),
            severity: self.severity(),
            organ_dysfunction: self.organ_dysfunction(),
            charlson_index: self.charlson_index(),
            surgical_risk: self.surgical_risk(),
            treatment: self.treatment(),
            wizard: self.wizard_state(),
        }
    }
}
