//! Milestone registry — the canonical, ordered list of signup milestones.

use super::model::MilestoneDefinition;

/// The fifteen reference milestones, ordered by ascending step.
pub static MILESTONES: &[MilestoneDefinition] = &[
    // ── Account Setup ───────────────────────────────────────────────────
    MilestoneDefinition {
        id: "email_setup",
        name: "Email Address",
        description: "Provide the email address used to sign in",
        step: 0,
        route: "/onboarding/email",
        required_fields: &["email"],
    },
    MilestoneDefinition {
        id: "password_setup",
        name: "Password",
        description: "Choose a password for the account",
        step: 1,
        route: "/onboarding/password",
        required_fields: &["password"],
    },
    // ── Investment Profile ──────────────────────────────────────────────
    MilestoneDefinition {
        id: "investment_goal",
        name: "Investment Goal",
        description: "Tell us what you are investing for",
        step: 2,
        route: "/onboarding/investment-goal",
        required_fields: &["investmentGoal"],
    },
    MilestoneDefinition {
        id: "risk_tolerance",
        name: "Risk Tolerance",
        description: "Describe how much volatility you are comfortable with",
        step: 3,
        route: "/onboarding/risk-tolerance",
        required_fields: &["riskTolerance"],
    },
    MilestoneDefinition {
        id: "investment_timeline",
        name: "Investment Timeline",
        description: "Set how long you plan to stay invested",
        step: 4,
        route: "/onboarding/timeline",
        required_fields: &["investmentTimeline"],
    },
    MilestoneDefinition {
        id: "investment_experience",
        name: "Investment Experience",
        description: "Share your prior investing experience",
        step: 5,
        route: "/onboarding/experience",
        required_fields: &["investmentExperience"],
    },
    MilestoneDefinition {
        id: "annual_income",
        name: "Annual Income",
        description: "Report your approximate yearly income",
        step: 6,
        route: "/onboarding/income",
        required_fields: &["annualIncome"],
    },
    MilestoneDefinition {
        id: "net_worth",
        name: "Net Worth",
        description: "Report your approximate net worth",
        step: 7,
        route: "/onboarding/net-worth",
        required_fields: &["netWorth"],
    },
    MilestoneDefinition {
        id: "liquidity_needs",
        name: "Liquidity Needs",
        description: "Indicate how soon you may need access to your funds",
        step: 8,
        route: "/onboarding/liquidity",
        required_fields: &["liquidityNeeds"],
    },
    // ── Personal Information ────────────────────────────────────────────
    MilestoneDefinition {
        id: "personal_details",
        name: "Personal Details",
        description: "Enter your legal name and date of birth",
        step: 9,
        route: "/onboarding/personal",
        required_fields: &["firstName", "lastName", "dateOfBirth"],
    },
    MilestoneDefinition {
        id: "contact_info",
        name: "Contact Information",
        description: "Add a phone number and residential address",
        step: 10,
        route: "/onboarding/contact",
        required_fields: &["phoneNumber", "address"],
    },
    MilestoneDefinition {
        id: "identity_verification",
        name: "Identity Verification",
        description: "Provide tax identification and citizenship details",
        step: 11,
        route: "/onboarding/identity",
        required_fields: &["taxId", "citizenship"],
    },
    // ── Investment Setup ────────────────────────────────────────────────
    MilestoneDefinition {
        id: "funding_source",
        name: "Funding Source",
        description: "Link the account you will fund investments from",
        step: 12,
        route: "/onboarding/funding",
        required_fields: &["fundingSource"],
    },
    MilestoneDefinition {
        id: "initial_investment",
        name: "Initial Investment",
        description: "Choose the amount of your first deposit",
        step: 13,
        route: "/onboarding/initial-investment",
        required_fields: &["initialInvestmentAmount"],
    },
    MilestoneDefinition {
        id: "review_complete",
        name: "Review & Confirm",
        description: "Accept the terms and confirm your application",
        step: 14,
        route: "/onboarding/review",
        required_fields: &["termsAccepted", "onboardingStatus"],
    },
];

/// Read-only view over an ordered milestone list.
///
/// Steps must be unique and ascending; contiguity is not required.
#[derive(Debug, Clone, Copy)]
pub struct MilestoneRegistry {
    milestones: &'static [MilestoneDefinition],
}

impl MilestoneRegistry {
    /// Wrap a custom milestone list.
    pub const fn new(milestones: &'static [MilestoneDefinition]) -> Self {
        Self { milestones }
    }

    /// The reference fifteen-milestone registry.
    pub fn standard() -> Self {
        Self::new(MILESTONES)
    }

    pub fn milestones(&self) -> &'static [MilestoneDefinition] {
        self.milestones
    }

    pub fn iter(&self) -> std::slice::Iter<'static, MilestoneDefinition> {
        self.milestones.iter()
    }

    pub fn len(&self) -> usize {
        self.milestones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.milestones.is_empty()
    }

    /// The milestone whose step equals `step` exactly.
    pub fn get_milestone_by_step(&self, step: u32) -> Option<&'static MilestoneDefinition> {
        self.milestones.iter().find(|m| m.step == step)
    }

    /// The first milestone (ascending step) with `step > current_step`.
    pub fn get_next_milestone(&self, current_step: u32) -> Option<&'static MilestoneDefinition> {
        self.milestones.iter().find(|m| m.step > current_step)
    }

    /// Look a milestone up by id, e.g. to map it to its route.
    pub fn get_milestone_by_id(&self, id: &str) -> Option<&'static MilestoneDefinition> {
        self.milestones.iter().find(|m| m.id == id)
    }
}

impl Default for MilestoneRegistry {
    fn default() -> Self {
        Self::standard()
    }
}

impl IntoIterator for MilestoneRegistry {
    type Item = &'static MilestoneDefinition;
    type IntoIter = std::slice::Iter<'static, MilestoneDefinition>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Lookup against the reference registry.
pub fn get_milestone_by_step(step: u32) -> Option<&'static MilestoneDefinition> {
    MilestoneRegistry::standard().get_milestone_by_step(step)
}

/// Lookup against the reference registry.
pub fn get_next_milestone(current_step: u32) -> Option<&'static MilestoneDefinition> {
    MilestoneRegistry::standard().get_next_milestone(current_step)
}
