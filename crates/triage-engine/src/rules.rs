//! Static rule tables
//!
//! Danger patterns and condition categories are constant data. Matching
//! walks them in declaration order, so order here is observable in results.

use crate::policy::{ActionType, RiskLevel};

/// Emergency rule: severity floor + primary keyword + optional co-symptom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DangerPattern {
    pub id: &'static str,
    pub description: &'static str,
    /// At least one must hit
    pub symptom_keywords: &'static [&'static str],
    /// If non-empty, at least one must also hit
    pub co_symptoms: &'static [&'static str],
    /// Pattern is skipped below this severity
    pub min_severity: i64,
    pub risk_level: RiskLevel,
    pub action_type: ActionType,
    pub possible_conditions: &'static [&'static str],
    /// Shown verbatim when the pattern fires
    pub explanation: &'static str,
}

impl DangerPattern {
    /// Identifier recorded in `rules_matched`
    pub fn rule_id(&self) -> String {
        format!("danger_pattern_{}", self.id)
    }
}

/// Coarse body-system grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConditionCategory {
    pub id: &'static str,
    pub label: &'static str,
    pub keywords: &'static [&'static str],
}

pub static DANGER_PATTERNS: &[DangerPattern] = &[
    DangerPattern {
        id: "chest_pain_breathlessness",
        description: "Chest pain combined with shortness of breath",
        symptom_keywords: &["chest pain", "pressure in chest"],
        co_symptoms: &["shortness of breath", "breathlessness"],
        min_severity: 6,
        risk_level: RiskLevel::High,
        action_type: ActionType::Emergency,
        possible_conditions: &["Possible cardiac or serious respiratory issue"],
        explanation: "Chest pain together with shortness of breath can indicate a serious \
                      cardiac or respiratory emergency.",
    },
    DangerPattern {
        id: "high_fever_seizure",
        description: "Very high fever with seizures or confusion",
        symptom_keywords: &["fever", "high fever"],
        co_symptoms: &["seizure", "seizures", "convulsion", "confusion"],
        min_severity: 7,
        risk_level: RiskLevel::High,
        action_type: ActionType::Emergency,
        possible_conditions: &["Possible severe infection or neurological emergency"],
        explanation: "Very high fever with seizures or confusion can indicate a severe \
                      infection or neurological emergency.",
    },
    DangerPattern {
        id: "difficulty_breathing",
        description: "Severe difficulty in breathing",
        symptom_keywords: &["shortness of breath", "trouble breathing", "wheezing"],
        co_symptoms: &[],
        min_severity: 7,
        risk_level: RiskLevel::High,
        action_type: ActionType::Emergency,
        possible_conditions: &["Possible severe asthma or respiratory distress"],
        explanation: "Severe difficulty in breathing can rapidly worsen and requires urgent \
                      assessment.",
    },
];

pub static CONDITION_CATEGORIES: &[ConditionCategory] = &[
    ConditionCategory {
        id: "respiratory",
        label: "Respiratory (lungs and breathing)",
        keywords: &["cough", "wheezing", "shortness of breath", "chest tightness"],
    },
    ConditionCategory {
        id: "cardiac",
        label: "Cardiac / circulation",
        keywords: &["chest pain", "palpitations", "pressure in chest"],
    },
    ConditionCategory {
        id: "infection",
        label: "Possible infection",
        keywords: &["fever", "chills", "sore throat", "body ache"],
    },
    ConditionCategory {
        id: "neurological",
        label: "Neurological",
        keywords: &["seizure", "seizures", "confusion", "weakness", "numbness"],
    },
    ConditionCategory {
        id: "digestive",
        label: "Digestive",
        keywords: &["abdominal pain", "nausea", "vomiting", "diarrhea"],
    },
];
