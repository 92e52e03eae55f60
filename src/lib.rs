//! Onboarding Progress — derives signup workflow progress from user records.

pub mod config;
pub mod error;
pub mod onboarding;
