//! Base Score Calculation
//!
//! Three independent additive factors. Each contributes exactly one bucket,
//! one reason sentence, and one rule id, always in the order
//! severity -> duration -> age.

use serde::Serialize;

use crate::input::AgeGroup;

/// Explainable base score
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BaseScore {
    pub score: i32,
    pub reasons: Vec<&'static str>,
    pub rules: Vec<&'static str>,
}

impl BaseScore {
    fn add(&mut self, points: i32, reason: &'static str, rule: &'static str) {
        self.score += points;
        self.reasons.push(reason);
        self.rules.push(rule);
    }
}

/// Score severity, duration and age group.
///
/// No range checks: severity below 1 lands in the mild bucket and negative
/// durations in the very-short bucket.
pub fn compute_base_score(severity: i64, duration_days: i64, age_group: AgeGroup) -> BaseScore {
    let mut base = BaseScore {
        score: 0,
        reasons: Vec::with_capacity(3),
        rules: Vec::with_capacity(3),
    };

    if severity >= 8 {
        base.add(4, "Reported symptom severity is very high (8–10).", "severity_very_high");
    } else if severity >= 5 {
        base.add(2, "Reported symptom severity is moderate to high (5–7).", "severity_moderate");
    } else {
        base.add(1, "Reported symptom severity is mild (1–4).", "severity_mild");
    }

    if duration_days >= 14 {
        base.add(3, "Symptoms have lasted 2 weeks or more.", "duration_long");
    } else if duration_days >= 7 {
        base.add(2, "Symptoms have lasted more than a week.", "duration_medium");
    } else if duration_days >= 3 {
        base.add(1, "Symptoms have lasted a few days.", "duration_short");
    } else {
        base.add(0, "Symptoms started recently (less than 3 days).", "duration_very_short");
    }

    if age_group.is_vulnerable() {
        base.add(
            2,
            "Age group (child/senior) can be more vulnerable to complications.",
            "age_vulnerable",
        );
    } else {
        base.add(0, "Adult age group with typically moderate baseline risk.", "age_adult");
    }

    base
}
