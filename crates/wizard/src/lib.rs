//! Step state machine for multi-step guideline assessments.
//!
//! Each guideline domain walks the clinician through an ordered sequence of
//! steps. The machine itself is domain-agnostic: a domain supplies a
//! [`FlowPlan`] describing its step count, per-step completion gates and the
//! skip-aware successor/predecessor lookup, and [`Wizard`] applies it.
//!
//! Transitions are explicit caller-driven actions. A blocked gate is an
//! expected, recoverable state ("cannot advance yet"), reported through
//! [`WizardError::StepIncomplete`] with the gating reason; nothing in the
//! record is touched by a refused transition.

use serde::Serialize;

/// Completion gate for a single step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepGate {
    /// The step's requirements are met; the wizard may leave it forward.
    Open,
    /// The step is incomplete.
    Blocked {
        /// Why the wizard cannot advance from this step.
        reason: &'static str,
    },
}

/// Domain-supplied description of a step sequence.
///
/// `next_step`/`prev_step` encode the conditional skip rules as a lookup from
/// the current step (and whatever record state the plan captures) to the
/// destination step, so the skip behaviour is testable in isolation.
pub trait FlowPlan {
    /// Number of steps in the sequence. Steps are numbered from 1.
    fn total_steps(&self) -> u8;

    /// Gate that must be open before the wizard may advance from `step`.
    fn gate(&self, step: u8) -> StepGate;

    /// Skip-aware successor of `step`.
    fn next_step(&self, step: u8) -> u8;

    /// Skip-aware predecessor of `step`.
    fn prev_step(&self, step: u8) -> u8;

    /// Whether the plan currently considers `step` reachable.
    ///
    /// A step excluded by a skip rule (for the record's current state) is
    /// inactive; the wizard must never rest on an inactive step.
    fn is_active(&self, _step: u8) -> bool {
        true
    }
}

/// Errors returned by wizard transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum WizardError {
    #[error("already at the final step")]
    AtFinalStep,
    #[error("already at the first step")]
    AtFirstStep,
    #[error("step {step} is incomplete: {reason}")]
    StepIncomplete { step: u8, reason: &'static str },
}

/// Snapshot of the wizard position, suitable for reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct WizardState {
    pub current_step: u8,
    pub total_steps: u8,
}

/// The step state machine.
///
/// Starts at step 1; the terminal state is the plan's last step. The current
/// step is only ever mutated by [`advance`](Wizard::advance),
/// [`retreat`](Wizard::retreat) and [`realign`](Wizard::realign).
#[derive(Debug, Clone)]
pub struct Wizard {
    current: u8,
    total: u8,
}

impl Wizard {
    /// Creates a wizard positioned on step 1 of a `total`-step sequence.
    pub fn new(total: u8) -> Self {
        Self {
            current: 1,
            total: total.max(1),
        }
    }

    /// The step the wizard currently rests on.
    pub fn current_step(&self) -> u8 {
        self.current
    }

    /// Number of steps in the sequence.
    pub fn total_steps(&self) -> u8 {
        self.total
    }

    /// Whether the wizard rests on the terminal step.
    pub fn is_final(&self) -> bool {
        self.current == self.total
    }

    /// Snapshot of the current position.
    pub fn state(&self) -> WizardState {
        WizardState {
            current_step: self.current,
            total_steps: self.total,
        }
    }

    /// Checks whether the wizard could advance right now.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::AtFinalStep`] on the terminal step, or
    /// [`WizardError::StepIncomplete`] when the current step's gate is blocked.
    pub fn can_advance(&self, plan: &impl FlowPlan) -> Result<(), WizardError> {
        if self.current >= self.total {
            return Err(WizardError::AtFinalStep);
        }
        match plan.gate(self.current) {
            StepGate::Open => Ok(()),
            StepGate::Blocked { reason } => Err(WizardError::StepIncomplete {
                step: self.current,
                reason,
            }),
        }
    }

    /// Advances to the plan's successor of the current step.
    ///
    /// # Errors
    ///
    /// Same conditions as [`can_advance`](Wizard::can_advance).
    pub fn advance(&mut self, plan: &impl FlowPlan) -> Result<u8, WizardError> {
        self.can_advance(plan)?;
        let next = plan.next_step(self.current).min(self.total);
        tracing::debug!(from = self.current, to = next, "wizard advance");
        self.current = next;
        Ok(next)
    }

    /// Retreats to the plan's predecessor of the current step.
    ///
    /// Retreating is never gated: revisiting an earlier step is always allowed.
    ///
    /// # Errors
    ///
    /// Returns [`WizardError::AtFirstStep`] on step 1.
    pub fn retreat(&mut self, plan: &impl FlowPlan) -> Result<u8, WizardError> {
        if self.current <= 1 {
            return Err(WizardError::AtFirstStep);
        }
        let prev = plan.prev_step(self.current).max(1);
        tracing::debug!(from = self.current, to = prev, "wizard retreat");
        self.current = prev;
        Ok(prev)
    }

    /// Moves back to the nearest active step if a record mutation deactivated
    /// the current one.
    ///
    /// Keeps the invariant that the wizard never rests on a step the plan's
    /// skip rules exclude. Step 1 must always be active.
    pub fn realign(&mut self, plan: &impl FlowPlan) -> u8 {
        while self.current > 1 && !plan.is_active(self.current) {
            self.current -= 1;
        }
        self.current
    }
}
