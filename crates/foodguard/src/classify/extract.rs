//! Whole-text extraction helpers.
//!
//! These predate the line-based classifier and work on sentences rather than
//! lines, so a sentence may land in several lists at once. They remain
//! available through [`Strategy::SentenceFilter`](super::Strategy).

use once_cell::sync::Lazy;
use regex::Regex;

use super::analysis::ClassifiedAnalysis;
use super::classifier::split_lines;
use super::rules;
use crate::risk::RiskLevel;

static RISK_STATEMENT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(risk\s*level|overall\s*risk)\s*[:\-]?\s*(low|medium|high)\b").unwrap()
});

/// Punctuation followed by whitespace; the sentence keeps its punctuation.
static SENTENCE_BREAK: Lazy<Regex> = Lazy::new(|| Regex::new(r"[.!?]\s+").unwrap());

static RECOMMENDATION_WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)recommend|should|avoid|consider|suggest").unwrap());

static HOME_TEST_WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)home\s*test|perform|procedure|mix|drop|add|observe").unwrap());

static INDICATOR_WORDS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)color|texture|smell|odor|packaging|sediment|foam|contaminant|impurity").unwrap()
});

/// First "Risk level: X" or "Overall risk X" statement in the text.
pub fn extract_risk_level(text: &str) -> Option<RiskLevel> {
    RISK_STATEMENT
        .captures(text)
        .and_then(|caps| caps.get(2))
        .and_then(|m| RiskLevel::from_word(m.as_str()))
}

/// Every bulleted line, marker removed.
pub fn extract_bullets(text: &str) -> Vec<String> {
    split_lines(text)
        .filter_map(rules::strip_bullet)
        .map(str::to_string)
        .collect()
}

pub fn extract_recommendations(text: &str) -> Vec<String> {
    filter_sentences(text, &RECOMMENDATION_WORDS)
}

pub fn extract_home_tests(text: &str) -> Vec<String> {
    filter_sentences(text, &HOME_TEST_WORDS)
}

pub fn extract_indicators(text: &str) -> Vec<String> {
    filter_sentences(text, &INDICATOR_WORDS)
}

/// Build a result from the sentence filters.
///
/// The summary is the whole trimmed text; bullets become key points.
pub fn classify_legacy(text: &str) -> ClassifiedAnalysis {
    let text = text.trim();
    ClassifiedAnalysis {
        summary: text.to_string(),
        key_points: extract_bullets(text),
        indicators: extract_indicators(text),
        recommendations: extract_recommendations(text),
        home_tests: extract_home_tests(text),
        risk_level: extract_risk_level(text),
    }
}

/// Split text into sentences at `.`, `!` or `?` followed by whitespace.
pub fn split_sentences(text: &str) -> Vec<&str> {
    let mut sentences = Vec::new();
    let mut start = 0;

    for m in SENTENCE_BREAK.find_iter(text) {
        // Punctuation is a single ASCII byte.
        sentences.push(&text[start..m.start() + 1]);
        start = m.end();
    }
    sentences.push(&text[start..]);

    sentences
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
}

fn filter_sentences(text: &str, pattern: &Regex) -> Vec<String> {
    split_sentences(text)
        .into_iter()
        .filter(|sentence| pattern.is_match(sentence))
        .map(str::to_string)
        .collect()
}
