//! Milestone and progress report data models.

use serde::Serialize;

use super::phase::OnboardingPhase;

/// Route a routing guard redirects to once every milestone is complete.
pub const COMPLETION_ROUTE: &str = "/dashboard";

/// A single checkpoint in the signup workflow.
///
/// Definitions are compiled into the binary and never mutated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MilestoneDefinition {
    /// Short unique identifier, e.g. "email_setup".
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    /// Zero-based position in the workflow.
    pub step: u32,
    /// UI route for this milestone. Passed through, never interpreted.
    pub route: &'static str,
    /// Snapshot fields that must all be present for the milestone to count.
    pub required_fields: &'static [&'static str],
}

/// Result of a progress calculation.
///
/// Built fresh for every call; has no identity beyond that call.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressReport {
    /// One past the step of the last completed milestone (0 if none).
    pub current_step: u32,
    pub current_milestone: Option<MilestoneDefinition>,
    pub next_milestone: Option<MilestoneDefinition>,
    pub phase: OnboardingPhase,
    /// Ids of completed milestones, in registry order.
    pub completed_milestones: Vec<&'static str>,
    /// 0..=100, rounded.
    pub progress_percentage: u8,
    /// Required fields of `current_milestone` still missing from the snapshot.
    pub missing_fields: Vec<&'static str>,
}

impl ProgressReport {
    /// Whether the user has finished every milestone.
    pub fn is_complete(&self) -> bool {
        self.current_milestone.is_none() && self.next_milestone.is_none()
    }

    /// Where a routing guard should send the user.
    pub fn resume_route(&self) -> &'static str {
        match self.current_milestone {
            Some(m) => m.route,
            None if self.is_complete() => COMPLETION_ROUTE,
            // Registry with gaps: the current step has no milestone of its own.
            None => self
                .next_milestone
                .map(|m| m.route)
                .unwrap_or(COMPLETION_ROUTE),
        }
    }
}
