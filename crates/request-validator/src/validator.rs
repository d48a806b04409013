//! Assessment Request Validator

use serde_json::{Map, Value};
use tracing::debug;
use triage_engine::{AgeGroup, AssessmentInput};

use crate::error::{ValidationError, ValidationErrors};

/// Validator for assessment request bodies.
///
/// Checks types only. Numeric ranges are deliberately not enforced; the
/// engine sorts out-of-range values into its lowest buckets.
#[derive(Debug, Clone, Copy, Default)]
pub struct Validator;

impl Validator {
    /// Create a new validator
    pub fn new() -> Self {
        Self
    }

    /// Validate a request body and build the engine input.
    ///
    /// All problems are collected before returning, so a client sees every
    /// bad field at once.
    pub fn validate(&self, body: &Value) -> Result<AssessmentInput, ValidationErrors> {
        let obj = body.as_object().ok_or_else(|| {
            ValidationError::InvalidFormat("request body must be a JSON object".to_string())
        })?;

        let mut errors = Vec::new();

        let symptom_text = collect(&mut errors, self.symptom_text(obj));
        let selected_symptoms = collect(&mut errors, self.selected_symptoms(obj));
        let duration_days = collect(&mut errors, self.whole_number(obj, "durationDays"));
        let severity = collect(&mut errors, self.whole_number(obj, "severity"));
        let age_group = collect(&mut errors, self.age_group(obj));

        match (symptom_text, selected_symptoms, duration_days, severity, age_group) {
            (
                Some(symptom_text),
                Some(selected_symptoms),
                Some(duration_days),
                Some(severity),
                Some(age_group),
            ) if errors.is_empty() => Ok(AssessmentInput {
                symptom_text,
                selected_symptoms,
                duration_days,
                severity,
                age_group,
            }),
            _ => {
                debug!("Rejected assessment request: {:?}", errors);
                Err(ValidationErrors { errors })
            }
        }
    }

    /// Free text; absent or null means empty
    fn symptom_text(&self, obj: &Map<String, Value>) -> Result<String, ValidationError> {
        match obj.get("symptomText") {
            None | Some(Value::Null) => Ok(String::new()),
            Some(Value::String(s)) => Ok(s.clone()),
            Some(_) => Err(ValidationError::WrongType {
                field: "symptomText",
                expected: "string",
            }),
        }
    }

    /// Tag list; anything other than an array is treated as no tags
    fn selected_symptoms(&self, obj: &Map<String, Value>) -> Result<Vec<String>, ValidationError> {
        let Some(Value::Array(items)) = obj.get("selectedSymptoms") else {
            return Ok(Vec::new());
        };

        items
            .iter()
            .map(|item| {
                item.as_str().map(str::to_string).ok_or_else(|| {
                    ValidationError::InvalidFormat(
                        "selectedSymptoms must contain only strings".to_string(),
                    )
                })
            })
            .collect()
    }

    /// Required JSON number, floored to an integer.
    ///
    /// Every scoring threshold is an integer, so flooring never moves a value
    /// across a bucket boundary.
    fn whole_number(&self, obj: &Map<String, Value>, field: &'static str) -> Result<i64, ValidationError> {
        match obj.get(field) {
            None | Some(Value::Null) => Err(ValidationError::MissingField(field)),
            Some(Value::Number(n)) => n
                .as_i64()
                .or_else(|| n.as_f64().map(|f| f.floor() as i64))
                .ok_or(ValidationError::WrongType {
                    field,
                    expected: "number",
                }),
            Some(_) => Err(ValidationError::WrongType {
                field,
                expected: "number",
            }),
        }
    }

    fn age_group(&self, obj: &Map<String, Value>) -> Result<AgeGroup, ValidationError> {
        match obj.get("ageGroup") {
            None | Some(Value::Null) => Err(ValidationError::MissingField("ageGroup")),
            Some(Value::String(s)) if s.trim().is_empty() => {
                Err(ValidationError::MissingField("ageGroup"))
            }
            Some(Value::String(s)) => s
                .parse()
                .map_err(|_| ValidationError::InvalidAgeGroup(s.clone())),
            Some(_) => Err(ValidationError::WrongType {
                field: "ageGroup",
                expected: "string",
            }),
        }
    }
}

fn collect<T>(errors: &mut Vec<ValidationError>, result: Result<T, ValidationError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            errors.push(e);
            None
        }
    }
}
