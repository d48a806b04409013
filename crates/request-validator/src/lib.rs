//! Request Validation
//!
//! Turns an untyped JSON request body into a typed [`AssessmentInput`].
//! The triage engine performs no type checks of its own, so everything that
//! reaches it goes through here first.

mod error;
mod validator;

pub use error::{ValidationError, ValidationErrors};
pub use validator::Validator;

pub use triage_engine::AssessmentInput;
