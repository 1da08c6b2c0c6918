//! Heading and keyword tables driving classification.
//!
//! Both tables are ordered: the first matching entry wins. Adding a section
//! heading or keyword means adding a row here, not touching the classifier.

use once_cell::sync::Lazy;
use regex::Regex;

use super::analysis::Section;
use crate::risk::RiskLevel;

/// Recognized heading phrases, in normalized form.
pub static HEADINGS: &[(&str, Section)] = &[
    ("summary", Section::Summary),
    ("key findings", Section::KeyPoints),
    ("findings", Section::KeyPoints),
    ("indicators", Section::Indicators),
    ("adulteration indicators", Section::Indicators),
    ("recommendations", Section::Recommendations),
    ("home tests", Section::HomeTests),
    ("tests", Section::HomeTests),
    ("risk", Section::Risk),
    ("risk level", Section::Risk),
    ("overall risk", Section::Risk),
];

/// Content keywords for lines without a bullet marker, in priority order.
static KEYWORD_RULES: Lazy<Vec<(Regex, Section)>> = Lazy::new(|| {
    vec![
        (Regex::new(r"(?i)test|procedure|mix|drop|observe").unwrap(), Section::HomeTests),
        (Regex::new(r"(?i)recommend|should|avoid|consider|suggest").unwrap(), Section::Recommendations),
        (
            Regex::new(r"(?i)color|texture|odor|smell|packaging|sediment|foam|contaminant|impurity").unwrap(),
            Section::Indicators,
        ),
    ]
});

/// `-`, `•`, `*` or `12.` followed by whitespace.
static BULLET: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([-•*]|[0-9]+\.)\s+").unwrap());

static RISK_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)\b(low|medium|high)\b").unwrap());

/// Collapse whitespace, lowercase, and drop one trailing `:` or `-`.
pub fn normalize_heading(line: &str) -> String {
    let collapsed = line.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
    let stripped = collapsed
        .strip_suffix(':')
        .or_else(|| collapsed.strip_suffix('-'))
        .unwrap_or(collapsed.as_str());
    stripped.trim_end().to_string()
}

/// Section named by a bare heading line, if the line is one.
pub fn heading_section(line: &str) -> Option<Section> {
    let normalized = normalize_heading(line);
    HEADINGS
        .iter()
        .find(|(phrase, _)| *phrase == normalized)
        .map(|(_, section)| *section)
}

/// Split `Heading: rest` or `Heading - rest` into its section and the
/// non-empty remainder. The colon form is tried first.
pub fn inline_heading(line: &str) -> Option<(Section, &str)> {
    [":", " - "].into_iter().find_map(|separator| {
        let (head, rest) = line.split_once(separator)?;
        let rest = rest.trim();
        if rest.is_empty() {
            return None;
        }
        heading_section(head).map(|section| (section, rest))
    })
}

/// Remove a leading bullet marker, returning the item text.
pub fn strip_bullet(line: &str) -> Option<&str> {
    BULLET.find(line).map(|m| line[m.end()..].trim())
}

/// Section chosen by content keywords; `Summary` when nothing matches.
pub fn keyword_section(line: &str) -> Section {
    KEYWORD_RULES
        .iter()
        .find(|(pattern, _)| pattern.is_match(line))
        .map(|(_, section)| *section)
        .unwrap_or(Section::Summary)
}

/// First whole-word `low`, `medium` or `high` in the line.
pub fn find_risk_word(line: &str) -> Option<RiskLevel> {
    RISK_WORD
        .captures(line)
        .and_then(|caps| caps.get(1))
        .and_then(|m| RiskLevel::from_word(m.as_str()))
}
