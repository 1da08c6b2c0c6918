//! Overall risk level reported by an analysis.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Risk of adulteration stated in an analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Parse a single risk word, ignoring case.
    pub fn from_word(word: &str) -> Option<Self> {
        match word.trim().to_ascii_lowercase().as_str() {
            "low" => Some(RiskLevel::Low),
            "medium" => Some(RiskLevel::Medium),
            "high" => Some(RiskLevel::High),
            _ => None,
        }
    }

    /// Capitalized label ("Low", "Medium", "High").
    pub fn label(&self) -> &'static str {
        match self {
            RiskLevel::Low => "Low",
            RiskLevel::Medium => "Medium",
            RiskLevel::High => "High",
        }
    }

    /// CSS class used by the result badge.
    pub fn badge_class(&self) -> &'static str {
        match self {
            RiskLevel::Low => "risk-low",
            RiskLevel::Medium => "risk-medium",
            RiskLevel::High => "risk-high",
        }
    }

    /// Badge class for an optional level; absent levels render as unknown.
    pub fn badge_class_for(level: Option<RiskLevel>) -> &'static str {
        level.map(|l| l.badge_class()).unwrap_or("risk-unknown")
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Error returned when a string is not a risk word.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown risk level: {0}")]
pub struct UnknownRiskLevel(pub String);

impl FromStr for RiskLevel {
    type Err = UnknownRiskLevel;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RiskLevel::from_word(s).ok_or_else(|| UnknownRiskLevel(s.to_string()))
    }
}
