//! Line-based classifier for analysis text.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::analysis::{ClassifiedAnalysis, Section, SectionBuckets};
use super::extract;
use super::rules;
use crate::error::FoodGuardError;

/// How analysis text is split into sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    /// Walk lines with a section cursor driven by headings.
    #[default]
    LineBased,
    /// Filter whole-text sentences by keyword; older behavior.
    SentenceFilter,
}

impl FromStr for Strategy {
    type Err = FoodGuardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "line" | "line_based" | "lines" => Ok(Strategy::LineBased),
            "sentence" | "sentence_filter" | "legacy" => Ok(Strategy::SentenceFilter),
            other => Err(FoodGuardError::Config(format!(
                "unknown classification strategy '{}' (expected 'line' or 'sentence')",
                other
            ))),
        }
    }
}

/// Configuration for a [`Classifier`].
#[derive(Debug, Clone, Default)]
pub struct ClassifierConfig {
    /// Classification strategy.
    pub strategy: Strategy,
}

/// Splits freeform analysis text into typed sections.
///
/// Classification never fails: empty or unstructured input simply yields
/// an empty (or summary-only) result.
///
/// # Example
///
/// ```
/// use foodguard::{Classifier, RiskLevel};
///
/// let classifier = Classifier::new();
/// let result = classifier.classify("Recommendations:\n- Boil before drinking\nRisk Level: Medium");
///
/// assert_eq!(result.recommendations, vec!["Boil before drinking"]);
/// assert_eq!(result.risk_level, Some(RiskLevel::Medium));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Classifier {
    config: ClassifierConfig,
}

impl Classifier {
    /// Create a classifier using the line-based strategy.
    pub fn new() -> Self {
        Self::with_config(ClassifierConfig::default())
    }

    /// Create a classifier with custom configuration.
    pub fn with_config(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Switch the classification strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.config.strategy = strategy;
        self
    }

    pub fn config(&self) -> &ClassifierConfig {
        &self.config
    }

    /// Classify a block of analysis text.
    pub fn classify(&self, text: &str) -> ClassifiedAnalysis {
        match self.config.strategy {
            Strategy::LineBased => classify(text),
            Strategy::SentenceFilter => extract::classify_legacy(text),
        }
    }
}

/// Classify text line by line.
///
/// Headings move a section cursor; bulleted lines follow the cursor; plain
/// lines are routed by content keywords; lines under a risk heading only
/// contribute the risk level.
pub fn classify(text: &str) -> ClassifiedAnalysis {
    let mut buckets = SectionBuckets::default();
    let mut cursor = Section::Summary;

    for line in split_lines(text) {
        if let Some(section) = rules::heading_section(line) {
            cursor = section;
            continue;
        }

        if let Some((section, rest)) = rules::inline_heading(line) {
            cursor = section;
            if section == Section::Risk {
                if let Some(level) = rules::find_risk_word(rest) {
                    buckets.record_risk(level);
                }
            } else {
                buckets.push(section, rest.to_string());
            }
            continue;
        }

        if cursor == Section::Risk {
            if let Some(level) = rules::find_risk_word(line) {
                buckets.record_risk(level);
            }
            continue;
        }

        if let Some(item) = rules::strip_bullet(line) {
            let target = match cursor {
                Section::Summary | Section::Risk => Section::KeyPoints,
                other => other,
            };
            buckets.push(target, item.to_string());
            continue;
        }

        buckets.push(rules::keyword_section(line), line.to_string());
    }

    buckets.finish()
}

/// Trimmed, non-empty lines of the text.
pub(crate) fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n').map(str::trim).filter(|line| !line.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::risk::RiskLevel;

    #[test]
    fn test_empty_input() {
        let result = classify("");
        assert!(result.is_empty());
        assert_eq!(result, ClassifiedAnalysis::default());

        assert!(classify("  \n\n \r\n").is_empty());
    }

    #[test]
    fn test_inline_risk_heading() {
        let result = classify("Risk Level: High");
        assert_eq!(result.risk_level, Some(RiskLevel::High));
        assert_eq!(result.summary, "");
        assert_eq!(result.item_count(), 0);
    }

    #[test]
    fn test_inline_risk_heading_with_dash() {
        let result = classify("Risk Level - High");
        assert_eq!(result.risk_level, Some(RiskLevel::High));
        assert_eq!(result.summary, "");
    }

    #[test]
    fn test_bullets_default_to_key_points() {
        let result = classify("- Avoid excess sugar\n- Check packaging");
        assert_eq!(result.key_points, vec!["Avoid excess sugar", "Check packaging"]);
        assert!(result.recommendations.is_empty());
        assert!(result.indicators.is_empty());
    }

    #[test]
    fn test_heading_moves_cursor() {
        let result = classify("Recommendations:\n- Avoid raw milk\n- Boil before drinking");
        assert_eq!(result.recommendations, vec!["Avoid raw milk", "Boil before drinking"]);
        assert!(result.key_points.is_empty());
    }

    #[test]
    fn test_plain_sentence_priority() {
        let result = classify("You should avoid this product due to packaging concerns.");
        assert_eq!(
            result.recommendations,
            vec!["You should avoid this product due to packaging concerns."]
        );
        assert!(result.indicators.is_empty());
    }

    #[test]
    fn test_plain_lines_ignore_cursor() {
        let text = "Home Tests:\nThe milk looks normal.\nThe colour and texture are off.";
        let result = classify(text);
        assert_eq!(result.summary, "The milk looks normal.");
        assert_eq!(result.indicators, vec!["The colour and texture are off."]);
        assert!(result.home_tests.is_empty());
    }

    #[test]
    fn test_risk_section_consumes_lines() {
        let text = "Overall Risk:\nThis sample is medium risk.\nLater it became high.\n- ignored bullet";
        let result = classify(text);
        assert_eq!(result.risk_level, Some(RiskLevel::Medium));
        assert!(result.key_points.is_empty());
        assert_eq!(result.summary, "");
    }

    #[test]
    fn test_heading_after_risk_resumes() {
        let text = "Risk:\nLow\nKey Findings:\n- Seal intact";
        let result = classify(text);
        assert_eq!(result.risk_level, Some(RiskLevel::Low));
        assert_eq!(result.key_points, vec!["Seal intact"]);
    }

    #[test]
    fn test_summary_joined() {
        let text = "This is turmeric powder.\n\n\nIt appears bright yellow.";
        let result = classify(text);
        // "appears bright yellow" has no keyword.
        assert_eq!(result.summary, "This is turmeric powder. It appears bright yellow.");
    }

    #[test]
    fn test_numbered_bullets_under_home_tests() {
        let text = "Home tests\n1. Dissolve in water\n2. Watch for residue";
        let result = classify(text);
        assert_eq!(result.home_tests, vec!["Dissolve in water", "Watch for residue"]);
    }

    #[test]
    fn test_summary_heading_bullets_go_to_key_points() {
        let result = classify("Summary:\n* Product is honey");
        assert_eq!(result.key_points, vec!["Product is honey"]);
        assert_eq!(result.summary, "");
    }

    #[test]
    fn test_inline_summary() {
        let result = classify("Summary: Looks like pure ghee.");
        assert_eq!(result.summary, "Looks like pure ghee.");
    }

    #[test]
    fn test_classifier_strategy_switch() {
        let text = "Risk level: low. You should store it cool.";
        let line_based = Classifier::new().classify(text);
        let legacy = Classifier::new()
            .with_strategy(Strategy::SentenceFilter)
            .classify(text);

        assert_eq!(line_based.risk_level, Some(RiskLevel::Low));
        assert_eq!(legacy.risk_level, Some(RiskLevel::Low));
        assert_eq!(legacy.summary, text);
        assert_eq!(legacy.recommendations, vec!["You should store it cool."]);
    }

    #[test]
    fn test_strategy_from_str() {
        assert_eq!("line".parse::<Strategy>().unwrap(), Strategy::LineBased);
        assert_eq!("Legacy".parse::<Strategy>().unwrap(), Strategy::SentenceFilter);
        let err = "fuzzy".parse::<Strategy>().unwrap_err();
        assert!(matches!(err, FoodGuardError::Config(_)));
    }

    #[test]
    fn test_idempotent() {
        let text = "Findings:\n- Cloudy\nTest with iodine.\nRisk: high";
        assert_eq!(classify(text), classify(text));
    }
}
