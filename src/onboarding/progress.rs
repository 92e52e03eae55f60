//! Progress calculator — derives where a user is in the signup workflow.
//!
//! Milestones are evaluated strictly in registry order and the walk stops at
//! the first incomplete one, so a later milestone never counts while an
//! earlier one is unfinished.

use tracing::debug;

use super::model::{MilestoneDefinition, ProgressReport};
use super::phase::OnboardingPhase;
use super::registry::MilestoneRegistry;
use super::snapshot::UserSnapshot;

/// Computes progress reports against a fixed registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgressCalculator {
    registry: MilestoneRegistry,
}

impl ProgressCalculator {
    pub const fn new(registry: MilestoneRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> MilestoneRegistry {
        self.registry
    }

    /// Build a fresh report for `snapshot`.
    pub fn calculate(&self, snapshot: &UserSnapshot) -> ProgressReport {
        let mut current_step = 0;
        let mut completed_milestones = Vec::new();

        for milestone in self.registry.iter() {
            if !is_milestone_complete(snapshot, milestone) {
                break;
            }
            current_step = milestone.step + 1;
            completed_milestones.push(milestone.id);
        }

        let current_milestone = self.registry.get_milestone_by_step(current_step).copied();
        let next_milestone = self.registry.get_next_milestone(current_step).copied();
        let progress_percentage = percentage(current_step, self.registry.len());
        let missing = current_milestone
            .map(|m| missing_fields(snapshot, &m))
            .unwrap_or_default();

        debug!(
            current_step,
            completed = completed_milestones.len(),
            progress_percentage,
            "Calculated onboarding progress"
        );

        ProgressReport {
            current_step,
            current_milestone,
            next_milestone,
            phase: OnboardingPhase::classify(current_step),
            completed_milestones,
            progress_percentage,
            missing_fields: missing,
        }
    }
}

/// Whether every required field of `milestone` is present.
pub fn is_milestone_complete(snapshot: &UserSnapshot, milestone: &MilestoneDefinition) -> bool {
    milestone
        .required_fields
        .iter()
        .all(|field| snapshot.is_present(field))
}

/// Required fields of `milestone` that the snapshot does not satisfy.
pub fn missing_fields(snapshot: &UserSnapshot, milestone: &MilestoneDefinition) -> Vec<&'static str> {
    milestone
        .required_fields
        .iter()
        .copied()
        .filter(|field| !snapshot.is_present(field))
        .collect()
}

/// `round(100 * step / total)`, halves rounding up, clamped to 100.
fn percentage(step: u32, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let step = step as u64;
    let total = total as u64;
    let rounded = (200 * step + total) / (2 * total);
    rounded.min(100) as u8
}

/// Calculate progress against the reference registry.
pub fn calculate_progress(snapshot: &UserSnapshot) -> ProgressReport {
    ProgressCalculator::default().calculate(snapshot)
}
