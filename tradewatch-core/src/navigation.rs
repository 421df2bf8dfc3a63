//! Navigation state: which investigation step the main panel shows.
//!
//! The state is a small `Copy` value owned by whoever drives rendering. It is
//! updated only by explicit selection; every step can be reached from every
//! other step, and there is no terminal state.

use serde::{Deserialize, Serialize};

use crate::step::{InvestigationStep, StepInfo, StepStatus, TIMELINE};

/// Currently selected investigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationState {
    current_step: InvestigationStep,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new(InvestigationStep::RiskAssessment)
    }
}

impl NavigationState {
    pub fn new(initial: InvestigationStep) -> Self {
        Self {
            current_step: initial,
        }
    }

    /// Select a step in place.
    pub fn select_step(&mut self, step: InvestigationStep) {
        self.current_step = step;
    }

    /// Return the state with `step` selected.
    #[must_use]
    pub fn select(self, step: InvestigationStep) -> Self {
        Self {
            current_step: step,
        }
    }

    pub fn current_step(&self) -> InvestigationStep {
        self.current_step
    }

    pub fn is_current(&self, step: InvestigationStep) -> bool {
        self.current_step == step
    }
}

/// Share of steps marked Completed, as a truncated integer percentage.
///
/// An empty slice yields 0.
pub fn compute_progress(steps: &[StepInfo]) -> u8 {
    if steps.is_empty() {
        return 0;
    }
    let completed = steps
        .iter()
        .filter(|s| s.status == StepStatus::Completed)
        .count();
    (completed * 100 / steps.len()) as u8
}

/// Progress of the fixed investigation timeline.
pub fn timeline_progress() -> u8 {
    compute_progress(&TIMELINE)
}
