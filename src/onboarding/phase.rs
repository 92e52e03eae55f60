//! Phase classifier — coarse, user-facing grouping of workflow steps.

use serde::Serialize;

/// The five phases of the signup workflow.
///
/// Boundaries are step thresholds, independent of how the registry groups
/// its milestones: 0–1 AccountSetup, 2–8 InvestmentProfile,
/// 9–11 PersonalInformation, 12–14 InvestmentSetup, 15+ Complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum OnboardingPhase {
    #[serde(rename = "Account Setup")]
    AccountSetup,
    #[serde(rename = "Investment Profile")]
    InvestmentProfile,
    #[serde(rename = "Personal Information")]
    PersonalInformation,
    #[serde(rename = "Investment Setup")]
    InvestmentSetup,
    #[serde(rename = "Complete")]
    Complete,
}

impl OnboardingPhase {
    /// Map a step index to its phase. Total over every `u32`.
    pub fn classify(step: u32) -> Self {
        match step {
            0..=1 => Self::AccountSetup,
            2..=8 => Self::InvestmentProfile,
            9..=11 => Self::PersonalInformation,
            12..=14 => Self::InvestmentSetup,
            _ => Self::Complete,
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::AccountSetup => "Account Setup",
            Self::InvestmentProfile => "Investment Profile",
            Self::PersonalInformation => "Personal Information",
            Self::InvestmentSetup => "Investment Setup",
            Self::Complete => "Complete",
        }
    }

    /// Whether this phase is terminal (onboarding is done).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Complete)
    }
}

impl Default for OnboardingPhase {
    fn default() -> Self {
        Self::AccountSetup
    }
}

impl std::fmt::Display for OnboardingPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Shorthand for [`OnboardingPhase::classify`].
pub fn classify_phase(step: u32) -> OnboardingPhase {
    OnboardingPhase::classify(step)
}
