//! Section and result types produced by the classifier.

use serde::{Deserialize, Serialize};

use crate::risk::RiskLevel;

/// A section of an analysis; also the classifier's cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Section {
    /// Free prose, the default bucket.
    Summary,
    /// Bulleted findings not otherwise categorized.
    KeyPoints,
    /// Sensory or physical signs of adulteration.
    Indicators,
    /// Advice for the reader.
    Recommendations,
    /// Procedures the reader can perform at home.
    HomeTests,
    /// Risk statement; lines are consumed for the risk level only.
    Risk,
}

impl Section {
    /// Human-readable heading for display.
    pub fn label(&self) -> &'static str {
        match self {
            Section::Summary => "Summary",
            Section::KeyPoints => "Key Findings",
            Section::Indicators => "Adulteration Indicators",
            Section::Recommendations => "Recommendations",
            Section::HomeTests => "Home Tests",
            Section::Risk => "Risk Assessment",
        }
    }
}

/// Typed sections extracted from freeform analysis text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifiedAnalysis {
    /// Unclassified lines joined into prose.
    pub summary: String,
    pub key_points: Vec<String>,
    pub indicators: Vec<String>,
    pub recommendations: Vec<String>,
    pub home_tests: Vec<String>,
    pub risk_level: Option<RiskLevel>,
}

impl ClassifiedAnalysis {
    /// True when nothing at all was extracted.
    pub fn is_empty(&self) -> bool {
        self.summary.is_empty()
            && self.key_points.is_empty()
            && self.indicators.is_empty()
            && self.recommendations.is_empty()
            && self.home_tests.is_empty()
            && self.risk_level.is_none()
    }

    /// Items of a list section; `Summary` and `Risk` have no list.
    pub fn items(&self, section: Section) -> &[String] {
        match section {
            Section::KeyPoints => &self.key_points,
            Section::Indicators => &self.indicators,
            Section::Recommendations => &self.recommendations,
            Section::HomeTests => &self.home_tests,
            Section::Summary | Section::Risk => &[],
        }
    }

    /// Total number of list items across all list sections.
    pub fn item_count(&self) -> usize {
        self.key_points.len()
            + self.indicators.len()
            + self.recommendations.len()
            + self.home_tests.len()
    }
}

/// Mutable accumulator used while classifying a single text.
#[derive(Debug, Default)]
pub(crate) struct SectionBuckets {
    summary: Vec<String>,
    key_points: Vec<String>,
    indicators: Vec<String>,
    recommendations: Vec<String>,
    home_tests: Vec<String>,
    risk_level: Option<RiskLevel>,
}

impl SectionBuckets {
    /// Append an item to the bucket for `section`.
    ///
    /// `Risk` has no bucket; callers handle risk lines before routing.
    pub(crate) fn push(&mut self, section: Section, item: String) {
        match section {
            Section::Summary => self.summary.push(item),
            Section::KeyPoints | Section::Risk => self.key_points.push(item),
            Section::Indicators => self.indicators.push(item),
            Section::Recommendations => self.recommendations.push(item),
            Section::HomeTests => self.home_tests.push(item),
        }
    }

    /// Record the risk level unless one was already found.
    pub(crate) fn record_risk(&mut self, level: RiskLevel) {
        if self.risk_level.is_none() {
            self.risk_level = Some(level);
        }
    }

    pub(crate) fn finish(self) -> ClassifiedAnalysis {
        ClassifiedAnalysis {
            summary: self.summary.join(" "),
            key_points: self.key_points,
            indicators: self.indicators,
            recommendations: self.recommendations,
            home_tests: self.home_tests,
            risk_level: self.risk_level,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(ClassifiedAnalysis::default().is_empty());
    }

    #[test]
    fn test_buckets_join_summary_with_spaces() {
        let mut buckets = SectionBuckets::default();
        buckets.push(Section::Summary, "First line.".into());
        buckets.push(Section::Summary, "Second line.".into());
        let result = buckets.finish();
        assert_eq!(result.summary, "First line. Second line.");
    }

    #[test]
    fn test_first_risk_level_wins() {
        let mut buckets = SectionBuckets::default();
        buckets.record_risk(RiskLevel::Medium);
        buckets.record_risk(RiskLevel::High);
        assert_eq!(buckets.finish().risk_level, Some(RiskLevel::Medium));
    }

    #[test]
    fn test_serializes_camel_case() {
        let result = ClassifiedAnalysis {
            key_points: vec!["a".into()],
            risk_level: Some(RiskLevel::Low),
            ..Default::default()
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["keyPoints"][0], "a");
        assert_eq!(json["homeTests"], serde_json::json!([]));
        assert_eq!(json["riskLevel"], "Low");
    }

    #[test]
    fn test_items_by_section() {
        let result = ClassifiedAnalysis {
            home_tests: vec!["Add iodine".into()],
            ..Default::default()
        };
        assert_eq!(result.items(Section::HomeTests), ["Add iodine".to_string()]);
        assert!(result.items(Section::Summary).is_empty());
        assert_eq!(result.item_count(), 1);
    }
}
