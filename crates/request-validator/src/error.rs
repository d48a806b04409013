//! Validation Error Types

use thiserror::Error;

/// A single problem with a request body
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Body is not shaped like an assessment request
    #[error("Invalid request format: {0}")]
    InvalidFormat(String),

    /// Missing required field
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// Field present with the wrong JSON type
    #[error("{field} must be a {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    /// Age group not one of child, adult, senior
    #[error("ageGroup '{0}' is not one of child, adult, senior")]
    InvalidAgeGroup(String),
}

/// Every problem found in one request body, in field order
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("request failed validation with {} error(s)", .errors.len())]
pub struct ValidationErrors {
    pub errors: Vec<ValidationError>,
}

impl ValidationErrors {
    /// Human-readable messages, one per error
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        Self { errors: vec![error] }
    }
}
