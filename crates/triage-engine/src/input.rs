//! Assessment input types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Patient age bracket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AgeGroup {
    Child,
    #[default]
    Adult,
    Senior,
}

impl AgeGroup {
    /// Wire tag for this age group
    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::Child => "child",
            AgeGroup::Adult => "adult",
            AgeGroup::Senior => "senior",
        }
    }

    /// Children and seniors score as more vulnerable to complications
    pub fn is_vulnerable(&self) -> bool {
        matches!(self, AgeGroup::Child | AgeGroup::Senior)
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when an age group tag is not recognised
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown age group '{0}' (expected child, adult or senior)")]
pub struct ParseAgeGroupError(pub String);

impl FromStr for AgeGroup {
    type Err = ParseAgeGroupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "child" => Ok(AgeGroup::Child),
            "adult" => Ok(AgeGroup::Adult),
            "senior" => Ok(AgeGroup::Senior),
            _ => Err(ParseAgeGroupError(s.to_string())),
        }
    }
}

/// Symptom report for a single assessment.
///
/// `severity` is expected in 1-10 and `duration_days` to be non-negative,
/// but neither is range checked: out-of-range values fall into the lowest
/// matching scoring bucket.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentInput {
    /// Free text description, may be empty
    #[serde(default)]
    pub symptom_text: String,
    /// Checkbox tags, each matched exactly as well as by substring
    #[serde(default)]
    pub selected_symptoms: Vec<String>,
    /// Days the symptoms have persisted
    pub duration_days: i64,
    /// Self-reported severity
    pub severity: i64,
    pub age_group: AgeGroup,
}

impl AssessmentInput {
    /// Create an input from free text with no selected tags
    pub fn new(symptom_text: impl Into<String>, severity: i64, duration_days: i64, age_group: AgeGroup) -> Self {
        Self {
            symptom_text: symptom_text.into(),
            selected_symptoms: Vec::new(),
            duration_days,
            severity,
            age_group,
        }
    }

    /// Attach selected symptom tags
    pub fn with_selected<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_symptoms = tags.into_iter().map(Into::into).collect();
        self
    }
}
