//! Wizard Store
//!
//! Session-scoped state for the launch wizard: the current step pointer and
//! the accumulating [`LaunchPlan`]. The store holds no completion flags; step
//! completion is recomputed from the plan on every query, so edits made from
//! anywhere (including jumping back to an earlier step) are reflected
//! immediately.
//!
//! Navigation is caller-driven. [`WizardStore::advance`] packages the gate the
//! navigation UI enforces (refuse to leave an incomplete step) while
//! [`WizardStore::set_step`] jumps unconditionally for review-style flows.

use tracing::debug;

use super::types::{LaunchPlan, SectionData, WizardError, WizardStep};

/// In-memory state store for one wizard session.
#[derive(Debug, Clone, PartialEq, Default, serde::Serialize, serde::Deserialize)]
pub struct WizardStore {
    current_step: WizardStep,
    plan: LaunchPlan,
}

impl WizardStore {
    /// Create a store at step 1 with an empty plan.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_step(&self) -> WizardStep {
        self.current_step
    }

    /// Total number of steps in the flow.
    pub fn total_steps(&self) -> usize {
        WizardStep::COUNT
    }

    /// Read access to the accumulated draft.
    pub fn plan(&self) -> &LaunchPlan {
        &self.plan
    }

    /// Replace one plan section wholesale. The other sections are untouched.
    pub fn apply_section(&mut self, section: SectionData) {
        debug!(section = %section.step(), "Updating launch plan section");
        self.plan.apply(section);
    }

    /// Whether the given step's gate passes right now.
    pub fn step_complete(&self, step: WizardStep) -> bool {
        self.plan.step_complete(step)
    }

    /// Whether the current step's gate passes right now.
    pub fn current_step_complete(&self) -> bool {
        self.plan.step_complete(self.current_step)
    }

    /// Jump to a step unconditionally. No completion gate applies; the step
    /// enum keeps the pointer in range.
    pub fn set_step(&mut self, step: WizardStep) {
        if step != self.current_step {
            debug!(from = %self.current_step, to = %step, "Jumping to wizard step");
            self.current_step = step;
        }
    }

    /// Move forward one step if the current step is complete.
    ///
    /// Returns the step that is current after the call. An incomplete step
    /// refuses with [`WizardError::IncompleteStep`] and changes nothing; a
    /// complete final step stays put.
    pub fn advance(&mut self) -> Result<WizardStep, WizardError> {
        if !self.current_step_complete() {
            return Err(WizardError::IncompleteStep {
                step: self.current_step,
            });
        }

        if let Some(next) = self.current_step.next() {
            debug!(from = %self.current_step, to = %next, "Advancing wizard step");
            self.current_step = next;
        }
        Ok(self.current_step)
    }

    /// Move back one step. Never gated; a no-op at step 1.
    ///
    /// Returns the step that is current after the call.
    pub fn go_back(&mut self) -> WizardStep {
        if let Some(previous) = self.current_step.previous() {
            debug!(from = %self.current_step, to = %previous, "Going back a wizard step");
            self.current_step = previous;
        }
        self.current_step
    }

    /// The steps whose gates pass right now, in flow order.
    pub fn completed_steps(&self) -> Vec<WizardStep> {
        WizardStep::all()
            .into_iter()
            .filter(|s| self.plan.step_complete(*s))
            .collect()
    }

    /// Get progress percentage (0-100), 20 points per completed step.
    pub fn progress_percent(&self) -> u8 {
        let completed = self.completed_steps().len();
        ((completed as f32 / WizardStep::COUNT as f32) * 100.0) as u8
    }

    /// Whether every step's gate passes and the plan could be finalized.
    pub fn is_ready_for_completion(&self) -> bool {
        self.plan.is_complete()
    }

    /// Discard the draft and return to step 1.
    pub fn reset(&mut self) {
        debug!("Resetting launch wizard");
        self.current_step = WizardStep::ProductDetails;
        self.plan = LaunchPlan::new();
    }
}

// ============================================================================
// Tests
// ============================================================================
