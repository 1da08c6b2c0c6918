//! Classification of freeform analysis text into typed sections.
//!
//! Model output has no guaranteed grammar, so classification is heuristic:
//! heading phrases move a section cursor, bullets follow the cursor, and
//! plain sentences are routed by keywords. Misclassification is possible but
//! never an error.

mod analysis;
mod classifier;
mod extract;
mod rules;

pub use analysis::{ClassifiedAnalysis, Section};
pub use classifier::{classify, Classifier, ClassifierConfig, Strategy};
pub use extract::{
    classify_legacy, extract_bullets, extract_home_tests, extract_indicators,
    extract_recommendations, extract_risk_level, split_sentences,
};
pub use rules::{heading_section, keyword_section, normalize_heading, HEADINGS};
