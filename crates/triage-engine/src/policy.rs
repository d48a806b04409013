//! Risk Policy and Action Selection

use serde::{Deserialize, Serialize};
use std::fmt;

/// Three-tier risk classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Map a base score onto the risk scale.
    ///
    /// `score >= 8` is HIGH, `4..8` is MEDIUM, anything lower is LOW.
    pub fn from_score(score: i32) -> Self {
        if score >= 8 {
            RiskLevel::High
        } else if score >= 4 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }

    /// Wire tag for this level
    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLevel::Low => "LOW",
            RiskLevel::Medium => "MEDIUM",
            RiskLevel::High => "HIGH",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Recommended next step category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ActionType {
    Home,
    Doctor,
    Emergency,
}

impl ActionType {
    /// Wire tag for this action
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::Home => "HOME",
            ActionType::Doctor => "DOCTOR",
            ActionType::Emergency => "EMERGENCY",
        }
    }

    /// Fixed advisory sentence shown for this action
    pub fn advice(&self) -> &'static str {
        match self {
            ActionType::Emergency => {
                "This pattern may represent an emergency. If symptoms are sudden, severe, or \
                 rapidly worsening, seek immediate in-person emergency care or call local \
                 emergency services."
            }
            ActionType::Doctor => {
                "Consider arranging a non-urgent appointment with a qualified doctor (for example \
                 a general physician, pediatrician, or relevant specialist) within the next \
                 24–72 hours, or sooner if symptoms worsen."
            }
            ActionType::Home => {
                "Symptoms currently appear lower risk. You may continue home care, rest, \
                 hydration, and monitor symptoms closely. If new warning signs appear or \
                 symptoms worsen, contact a doctor promptly."
            }
        }
    }
}

impl fmt::Display for ActionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Selected action with its advisory text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendedAction {
    pub action_type: ActionType,
    pub advice: &'static str,
}

/// Choose the next step from the final risk level.
///
/// An emergency pattern or a HIGH level always means EMERGENCY.
pub fn select_action(risk_level: RiskLevel, emergency: bool) -> RecommendedAction {
    let action_type = if emergency || risk_level == RiskLevel::High {
        ActionType::Emergency
    } else if risk_level == RiskLevel::Medium {
        ActionType::Doctor
    } else {
        ActionType::Home
    };

    RecommendedAction {
        action_type,
        advice: action_type.advice(),
    }
}
