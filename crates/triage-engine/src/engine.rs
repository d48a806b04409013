//! Assessment Orchestration

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::debug;

use crate::input::AssessmentInput;
use crate::matcher::{infer_condition_categories, match_danger_patterns, Escalation};
use crate::normalizer::SymptomCorpus;
use crate::policy::{select_action, ActionType, RiskLevel};
use crate::rules::{ConditionCategory, DangerPattern, CONDITION_CATEGORIES, DANGER_PATTERNS};
use crate::scoring::compute_base_score;

/// Closing sentence of every explanation
pub const DISCLAIMER: &str = "This tool does NOT provide a medical diagnosis, does not replace a \
                              doctor, and may be inaccurate. It only offers a rough risk estimate \
                              and general next steps.";

/// Outcome of one assessment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    pub risk_level: RiskLevel,
    /// Danger explanations, then scoring reasons, then the disclaimer
    pub explanation: Vec<String>,
    /// Danger-pattern conditions first, then category labels
    pub possible_conditions: Vec<String>,
    pub action_type: ActionType,
    pub recommended_action: String,
    pub rules_matched: Vec<String>,
}

/// Triage engine over a pair of rule tables.
///
/// Holds only `'static` references, so it is `Copy` and can be shared
/// freely between threads.
#[derive(Debug, Clone, Copy)]
pub struct TriageEngine {
    danger_patterns: &'static [DangerPattern],
    categories: &'static [ConditionCategory],
}

impl TriageEngine {
    /// Engine with the built-in rule tables
    pub fn new() -> Self {
        Self::with_rules(DANGER_PATTERNS, CONDITION_CATEGORIES)
    }

    /// Engine with custom rule tables
    pub fn with_rules(
        danger_patterns: &'static [DangerPattern],
        categories: &'static [ConditionCategory],
    ) -> Self {
        Self {
            danger_patterns,
            categories,
        }
    }

    pub fn danger_patterns(&self) -> &'static [DangerPattern] {
        self.danger_patterns
    }

    pub fn categories(&self) -> &'static [ConditionCategory] {
        self.categories
    }

    /// Run the full pipeline. Total over its input: never fails or panics.
    pub fn assess(&self, input: &AssessmentInput) -> AssessmentResult {
        let corpus = SymptomCorpus::new(&input.symptom_text, &input.selected_symptoms);

        let mut explanation: Vec<String> = Vec::new();
        let mut conditions: Vec<String> = Vec::new();
        let mut rules: Vec<String> = Vec::new();

        let matches = match_danger_patterns(self.danger_patterns, &corpus, input.severity);
        for pattern in &matches {
            explanation.push(pattern.explanation.to_string());
            rules.push(pattern.rule_id());
            conditions.extend(pattern.possible_conditions.iter().map(|c| c.to_string()));
        }
        let escalation = Escalation::from_matches(&matches);

        let base = compute_base_score(input.severity, input.duration_days, input.age_group);
        explanation.extend(base.reasons.iter().map(|r| r.to_string()));
        rules.extend(base.rules.iter().map(|r| r.to_string()));

        let base_level = RiskLevel::from_score(base.score);
        let risk_level = escalation.map_or(base_level, |e| e.risk_level);

        conditions.extend(
            infer_condition_categories(self.categories, &corpus)
                .into_iter()
                .map(String::from),
        );

        let action = select_action(risk_level, escalation.is_some());

        explanation.push(DISCLAIMER.to_string());

        debug!(
            score = base.score,
            base_level = %base_level,
            risk_level = %risk_level,
            action = %action.action_type,
            patterns = matches.len(),
            "Assessment complete"
        );

        AssessmentResult {
            risk_level,
            explanation,
            possible_conditions: dedup_in_order(conditions),
            action_type: action.action_type,
            recommended_action: action.advice.to_string(),
            rules_matched: dedup_in_order(rules),
        }
    }
}

impl Default for TriageEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// Assess with the built-in rule tables
pub fn assess_risk(input: &AssessmentInput) -> AssessmentResult {
    TriageEngine::new().assess(input)
}

/// Drop repeats, keeping the first occurrence
fn dedup_in_order(items: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::with_capacity(items.len());
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
