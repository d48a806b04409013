//! HTTP route handlers

pub mod alerts;
pub mod assessments;
pub mod health;
pub mod metrics;
