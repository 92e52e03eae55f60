//! Onboarding progress engine — derives signup progress from user data.
//!
//! Progress is never stored. Each call walks the fixed milestone registry
//! against a snapshot of the user record and reports the current step, the
//! next milestone, the phase, and a completion percentage.

pub mod model;
pub mod phase;
pub mod progress;
pub mod registry;
pub mod routes;
pub mod snapshot;

pub use model::{COMPLETION_ROUTE, MilestoneDefinition, ProgressReport};
pub use phase::{OnboardingPhase, classify_phase};
pub use progress::{ProgressCalculator, calculate_progress, is_milestone_complete, missing_fields};
pub use registry::{MILESTONES, MilestoneRegistry, get_milestone_by_step, get_next_milestone};
pub use routes::{ProgressRouteState, progress_routes};
pub use snapshot::UserSnapshot;
