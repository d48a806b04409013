//! Danger Pattern Matching and Category Inference

use std::collections::HashSet;
use tracing::debug;

use crate::normalizer::SymptomCorpus;
use crate::policy::{ActionType, RiskLevel};
use crate::rules::{ConditionCategory, DangerPattern};

/// Forced outcome when a HIGH danger pattern fires
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Escalation {
    pub risk_level: RiskLevel,
    pub action_type: ActionType,
}

impl Escalation {
    /// Escalation implied by a set of firing patterns.
    ///
    /// Only HIGH patterns escalate. When several fire, the last one in table
    /// order sets the action type.
    pub fn from_matches(matches: &[&DangerPattern]) -> Option<Self> {
        matches
            .iter()
            .filter(|p| p.risk_level == RiskLevel::High)
            .last()
            .map(|p| Escalation {
                risk_level: RiskLevel::High,
                action_type: p.action_type,
            })
    }
}

/// Return every pattern that fires, in table order.
///
/// A pattern fires when `severity >= min_severity`, a primary keyword hits,
/// and either it has no co-symptoms or one of them hits too.
pub fn match_danger_patterns<'a>(
    patterns: &'a [DangerPattern],
    corpus: &SymptomCorpus,
    severity: i64,
) -> Vec<&'a DangerPattern> {
    patterns
        .iter()
        .filter(|p| severity >= p.min_severity)
        .filter(|p| corpus.contains_any(p.symptom_keywords))
        .filter(|p| p.co_symptoms.is_empty() || corpus.contains_any(p.co_symptoms))
        .inspect(|p| debug!("Danger pattern fired: {}", p.id))
        .collect()
}

/// Labels of every category with a keyword hit, table order, no repeats
pub fn infer_condition_categories(
    categories: &[ConditionCategory],
    corpus: &SymptomCorpus,
) -> Vec<&'static str> {
    let mut seen = HashSet::new();
    categories
        .iter()
        .filter(|c| corpus.contains_any(c.keywords))
        .map(|c| c.label)
        .filter(|label| seen.insert(*label))
        .collect()
}
