//! The 8-step appendicitis assessment flow.
//!
//! Steps: 1 clinical presentation, 2 diagnostic scores, 3 imaging,
//! 4 classification, 5 complication characterisation, 6 treatment,
//! 7 clinical particularities, 8 surgical particularities.
//!
//! Step 5 is skipped in both directions when the classification is
//! uncomplicated; the skip is a lookup on (step, classification) so it can be
//! tested without driving a wizard.

use crate::imaging::{imaging_requirement, ImagingRequirement};
use crate::record::{AppendicitisRecord, Classification};
use crate::scores::{aas, air, alvarado, pas};
use guideflow_wizard::{FlowPlan, StepGate};

/// Number of steps in the appendicitis flow.
pub const TOTAL_STEPS: u8 = 8;

/// Step index of the complication-characterisation step.
pub const COMPLICATION_STEP: u8 = 5;

/// Flow plan borrowing the record it gates on.
pub struct AppendicitisFlow<'a> {
    record: &'a AppendicitisRecord,
}

impl<'a> AppendicitisFlow<'a> {
    pub fn new(record: &'a AppendicitisRecord) -> Self {
        Self { record }
    }

    fn uncomplicated(&self) -> bool {
        self.record.classification == Some(Classification::Uncomplicated)
    }

    fn any_score_engaged(&self) -> bool {
        alvarado(self.record).value > 0
            || air(self.record).value > 0
            || aas(self.record).value > 0
            || pas(self.record).value > 0
    }
}

impl FlowPlan for AppendicitisFlow<'_> {
    fn total_steps(&self) -> u8 {
        TOTAL_STEPS
    }

    fn gate(&self, step: u8) -> StepGate {
        match step {
            2 if !self.any_score_engaged() => StepGate::Blocked {
                reason: "at least one diagnostic score must be entered",
            },
            3 if imaging_requirement(self.record) == ImagingRequirement::Mandatory
                && !self.record.any_imaging_performed() =>
            {
                StepGate::Blocked {
                    reason: "required imaging has not been performed",
                }
            }
            4 if self.record.classification.is_none() => StepGate::Blocked {
                reason: "classification has not been selected",
            },
            _ => StepGate::Open,
        }
    }

    fn next_step(&self, step: u8) -> u8 {
        match step {
            4 if self.uncomplicated() => 6,
            s => s + 1,
        }
    }

    fn prev_step(&self, step: u8) -> u8 {
        match step {
            6 if self.uncomplicated() => 4,
            s => s - 1,
        }
    }

    fn is_active(&self, step: u8) -> bool {
        !(step == COMPLICATION_STEP && self.uncomplicated())
    }
}
