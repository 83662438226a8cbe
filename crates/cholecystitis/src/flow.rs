//! The 5-step cholecystitis assessment flow.
//!
//! Steps: 1 diagnostic criteria, 2 diagnosis, 3 severity grading, 4 surgical
//! risk, 5 recommendation. There is no conditional skip in this flow.

use crate::diagnosis::diagnosis_certainty;
use crate::record::CholecystitisRecord;
use guideflow_wizard::{FlowPlan, StepGate};

/// Number of steps in the cholecystitis flow.
pub const TOTAL_STEPS: u8 = 5;

/// Flow plan borrowing the record it gates on.
pub struct CholecystitisFlow<'a> {
    record: &'a CholecystitisRecord,
}

impl<'a> CholecystitisFlow<'a> {
    pub fn new(record: &'a CholecystitisRecord) -> Self {
        Self { record }
    }
}

impl FlowPlan for CholecystitisFlow<'_> {
    fn total_steps(&self) -> u8 {
        TOTAL_STEPS
    }

    fn gate(&self, step: u8) -> StepGate {
        match step {
            1 if !self.record.any_diagnostic_input() => StepGate::Blocked {
                reason: "no diagnostic criterion has been entered",
            },
            2 if !diagnosis_certainty(self.record).is_established() => StepGate::Blocked {
                reason: "the diagnosis has not been established",
            },
            4 if self.record.age_years.is_none() || self.record.asa_class.is_none() => {
                StepGate::Blocked {
                    reason: "age and ASA class are required",
                }
            }
            _ => StepGate::Open,
        }
    }

    fn next_step(&self, step: u8) -> u8 {
        step + 1
    }

    fn prev_step(&self, step: u8) -> u8 {
        step - 1
    }
}
