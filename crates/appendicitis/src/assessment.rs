//! Assessment façade: one record, one wizard, pull-based derived values.

use crate::flow::{self, AppendicitisFlow};
use crate::imaging::{self, ImagingRequirement};
use crate::record::AppendicitisRecord;
use crate::report::AppendicitisReport;
use crate::risk::{self, RiskLevel};
use crate::scores::{self, AasBand, AirBand, AlvaradoBand, PasBand};
use crate::treatment::{self, AppendicitisPathway};
use guideflow_types::{Resolution, ScoreResult};
use guideflow_wizard::{Wizard, WizardError, WizardState};

/// An in-progress appendicitis assessment session.
///
/// Owns the record and the wizard. Every derived accessor recomputes from the
/// record, so results are always consistent with the latest mutation and
/// recomputation is idempotent. Record mutations go through
/// [`update`](AppendicitisAssessment::update) so the wizard is realigned
/// whenever a classification change deactivates the step it rests on.
#[derive(Debug, Clone)]
pub struct AppendicitisAssessment {
    record: AppendicitisRecord,
    wizard: Wizard,
}

impl Default for AppendicitisAssessment {
    fn default() -> Self {
        Self::new()
    }
}

impl AppendicitisAssessment {
    /// Starts a session with a zero-valued record at step 1.
    pub fn new() -> Self {
        Self::from_record(AppendicitisRecord::new())
    }

    /// Starts a session over an existing record (e.g. a deserialized payload).
    pub fn from_record(record: AppendicitisRecord) -> Self {
        Self {
            record,
            wizard: Wizard::new(flow::TOTAL_STEPS),
        }
    }

    /// Read access to the record.
    pub fn record(&self) -> &AppendicitisRecord {
        &self.record
    }

    /// Mutates the record and realigns the wizard afterwards.
    pub fn update<R>(&mut self, mutate: impl FnOnce(&mut AppendicitisRecord) -> R) -> R {
        let out = mutate(&mut self.record);
        self.wizard.realign(&AppendicitisFlow::new(&self.record));
        out
    }

    pub fn alvarado(&self) -> ScoreResult<AlvaradoBand> {
        scores::alvarado(&self.record)
    }

    pub fn air(&self) -> ScoreResult<AirBand> {
        scores::air(&self.record)
    }

    pub fn aas(&self) -> ScoreResult<AasBand> {
        scores::aas(&self.record)
    }

    pub fn pas(&self) -> ScoreResult<PasBand> {
        scores::pas(&self.record)
    }

    /// Overall risk level; `None` until at least one applicable score is
    /// engaged.
    pub fn risk_level(&self) -> Option<RiskLevel> {
        risk::risk_level(&self.record)
    }

    pub fn imaging_requirement(&self) -> ImagingRequirement {
        imaging::imaging_requirement(&self.record)
    }

    pub fn treatment(&self) -> Resolution<AppendicitisPathway> {
        treatment::recommend(&self.record)
    }

    pub fn wizard_state(&self) -> WizardState {
        self.wizard.state()
    }

    /// Advances the wizard, applying the current step's gate and the skip
    /// rule.
    pub fn advance(&mut self) -> Result<u8, WizardError> {
        self.wizard.advance(&AppendicitisFlow::new(&self.record))
    }

    /// Retreats the wizard, applying the skip rule.
    pub fn retreat(&mut self) -> Result<u8, WizardError> {
        self.wizard.retreat(&AppendicitisFlow::new(&self.record))
    }

    /// Aggregates every derived value into a report.
    pub fn evaluate(&self) -> AppendicitisReport {
        AppendicitisReport {
            alvarado: self.alvarado(),
            air: self.air(),
            aas: self.aas(),
            pas: self.pas(),
            risk_level: self.risk_level(),
            imaging: self.imaging_requirement(),
            treatment: self.treatment(),
            wizard: self.wizard_state(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Classification;

    fn assessment_at_classification_step() -> AppendicitisAssessment {
        let mut assessment = AppendicitisAssessment::new();
        assessment.update(|r| {
            r.alvarado_migratory_pain = true;
            r.alvarado_rlq_tenderness = true;
            r.alvarado_fever = true;
        });
        assessment.advance().unwrap(); // 1 -> 2
        assessment.advance().unwrap(); // 2 -> 3 (low band, imaging may be omitted)
        assessment.advance().unwrap(); // 3 -> 4
        assessment
    }

    #[test]
    fn test_new_session_starts_at_step_one() {
        let assessment = AppendicitisAssessment::new();
        assert_eq!(assessment.wizard_state().current_step, 1);
        assert_eq!(assessment.wizard_state().total_steps, 8);
    }

    #[test]
    fn test_advance_from_step_four_skips_to_six_when_uncomplicated() {
        let mut assessment = assessment_at_classification_step();
        assessment.update(|r| r.classification = Some(Classification::Uncomplicated));
        assert_eq!(assessment.advance().unwrap(), 6);
        assert_eq!(assessment.retreat().unwrap(), 4);
    }

    #[test]
    fn test_advance_visits_step_five_when_complicated() {
        let mut assessment = assessment_at_classification_step();
        assessment.update(|r| r.classification = Some(Classification::Complicated));
        assert_eq!(assessment.advance().unwrap(), 5);
    }

    #[test]
    fn test_reclassification_realigns_the_wizard_off_step_five() {
        let mut assessment = assessment_at_classification_step();
        assessment.update(|r| r.classification = Some(Classification::Complicated));
        assessment.advance().unwrap();
        assert_eq!(assessment.wizard_state().current_step, 5);

        // Changing the classification deactivates the step the wizard is on.
        assessment.update(|r| r.classification = Some(Classification::Uncomplicated));
        assert_eq!(assessment.wizard_state().current_step, 4);
    }

    #[test]
    fn test_blocked_gate_reports_cannot_advance() {
        let mut assessment = AppendicitisAssessment::new();
        assessment.advance().unwrap(); // step 1 is always open
        let err = assessment.advance().expect_err("no score engaged yet");
        assert!(matches!(err, WizardError::StepIncomplete { step: 2, .. }));
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let mut assessment = AppendicitisAssessment::new();
        assessment.update(|r| {
            r.alvarado_fever = true;
            r.classification = Some(Classification::Uncomplicated);
        });
        let first = assessment.evaluate();
        let second = assessment.evaluate();
        assert_eq!(first.alvarado, second.alvarado);
        assert_eq!(first.risk_level, second.risk_level);
        assert_eq!(first.treatment, second.treatment);
    }
}
