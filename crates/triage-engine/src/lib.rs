//! Rule-Based Triage Engine
//!
//! Estimates a coarse risk level from symptom input, explains the estimate,
//! and proposes a conservative next step. This is NOT a diagnostic system.
//!
//! The pipeline is a single synchronous pass with no I/O:
//! normalize -> danger patterns -> condition categories -> base score ->
//! risk policy -> action selection -> assembled result.

mod engine;
mod input;
mod matcher;
mod normalizer;
mod policy;
mod rules;
mod scoring;

pub use engine::{assess_risk, AssessmentResult, TriageEngine, DISCLAIMER};
pub use input::{AgeGroup, AssessmentInput, ParseAgeGroupError};
pub use matcher::{infer_condition_categories, match_danger_patterns, Escalation};
pub use normalizer::SymptomCorpus;
pub use policy::{select_action, ActionType, RecommendedAction, RiskLevel};
pub use rules::{ConditionCategory, DangerPattern, CONDITION_CATEGORIES, DANGER_PATTERNS};
pub use scoring::{compute_base_score, BaseScore};
