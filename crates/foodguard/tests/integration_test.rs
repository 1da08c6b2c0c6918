//! Integration tests for FoodGuard.

use foodguard::classify::{extract_home_tests, extract_indicators, extract_recommendations};
use foodguard::{
    classify, AnalysisReport, AnalysisResponse, Classifier, ClassifiedAnalysis, Resolved, RiskLevel,
    Strategy,
};

/// A typical model answer with headings, bullets and loose prose.
const MODEL_OUTPUT: &str = "\
Summary:
The image shows a jar of golden honey with a handwritten label.
It is difficult to confirm purity from a photo alone.

Key Findings:
- Label lacks batch number
- Jar appears sealed

Adulteration Indicators:
1. Unusually thin consistency
2. Crystals absent after months of storage

Recommendations:
- Buy from certified sellers
- Keep the receipt

Home Tests:
- Drop a spoonful into water; pure honey settles
- Warm a sample and check for foam

Risk Level:
Medium - based on visible cues only

You should consult a lab for certainty.
";

// =============================================================================
// Classifier
// =============================================================================

#[test]
fn test_classify_full_model_output() {
    let result = classify(MODEL_OUTPUT);

    assert_eq!(
        result.summary,
        "The image shows a jar of golden honey with a handwritten label. \
         It is difficult to confirm purity from a photo alone."
    );
    assert_eq!(result.key_points, vec!["Label lacks batch number", "Jar appears sealed"]);
    assert_eq!(
        result.indicators,
        vec!["Unusually thin consistency", "Crystals absent after months of storage"]
    );
    assert_eq!(
        result.recommendations,
        vec!["Buy from certified sellers", "Keep the receipt"]
    );
    assert_eq!(
        result.home_tests,
        vec![
            "Drop a spoonful into water; pure honey settles",
            "Warm a sample and check for foam"
        ]
    );
    assert_eq!(result.risk_level, Some(RiskLevel::Medium));
}

#[test]
fn test_lines_after_risk_heading_are_consumed() {
    // The trailing sentence sits under the risk heading, so it only
    // contributes to the risk level.
    let result = classify(MODEL_OUTPUT);
    assert!(!result.recommendations.iter().any(|r| r.contains("consult a lab")));
}

#[test]
fn test_unstructured_text() {
    let text = "This looks like saffron.\nReal saffron releases color slowly in water.\n\
                Observe the water after ten minutes.\nI recommend buying sealed packs.";
    let result = classify(text);

    assert_eq!(result.summary, "This looks like saffron.");
    assert_eq!(result.indicators, vec!["Real saffron releases color slowly in water."]);
    assert_eq!(result.home_tests, vec!["Observe the water after ten minutes."]);
    assert_eq!(result.recommendations, vec!["I recommend buying sealed packs."]);
    assert_eq!(result.risk_level, None);
}

#[test]
fn test_windows_line_endings() {
    let result = classify("Recommendations:\r\n- Boil milk\r\n");
    assert_eq!(result.recommendations, vec!["Boil milk"]);
}

#[test]
fn test_classify_is_repeatable() {
    let classifier = Classifier::new();
    let first = classifier.classify(MODEL_OUTPUT);
    let second = classifier.classify(MODEL_OUTPUT);
    assert_eq!(first, second);
}

#[test]
fn test_json_shape() {
    let result = classify("Findings:\n- Clumps present\nRisk: low");
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(
        json,
        serde_json::json!({
            "summary": "",
            "keyPoints": ["Clumps present"],
            "indicators": [],
            "recommendations": [],
            "homeTests": [],
            "riskLevel": "Low"
        })
    );

    let back: ClassifiedAnalysis = serde_json::from_value(json).unwrap();
    assert_eq!(back, result);
}

// =============================================================================
// Sentence-filter strategy
// =============================================================================

#[test]
fn test_sentence_filter_strategy() {
    let text = "The smell is off. You should avoid it. Add a drop of iodine. Overall risk: high";
    let result = Classifier::new()
        .with_strategy(Strategy::SentenceFilter)
        .classify(text);

    assert_eq!(result.summary, text);
    assert_eq!(result.risk_level, Some(RiskLevel::High));
    assert_eq!(result.indicators, extract_indicators(text));
    assert_eq!(result.recommendations, extract_recommendations(text));
    assert_eq!(result.home_tests, extract_home_tests(text));
    assert_eq!(result.home_tests, vec!["Add a drop of iodine."]);
}

// =============================================================================
// Responses and reports
// =============================================================================

#[test]
fn test_report_from_endpoint_body() {
    let body = serde_json::json!({
        "analysis": MODEL_OUTPUT,
        "filename": "honey.jpg",
        "file_size": 204800,
        "content_type": "image/jpeg"
    })
    .to_string();

    let response = AnalysisResponse::from_http(200, &body);
    let report = AnalysisReport::from_response(&response, &Classifier::new());

    assert!(report.is_success());
    assert_eq!(report.risk_level, Some(RiskLevel::Medium));
    assert_eq!(report.image.filename_display(), "honey.jpg");
    assert_eq!(report.image.size_display(), "200 KB");
    match report.content {
        Resolved::Text(sections) => assert_eq!(sections.key_points.len(), 2),
        other => panic!("expected text content, got {:?}", other),
    }
}

#[test]
fn test_report_surfaces_server_error() {
    let response = AnalysisResponse::from_http(500, r#"{"error": "Model timed out"}"#);
    let report = AnalysisReport::from_response(&response, &Classifier::new());

    assert!(!report.is_success());
    assert_eq!(report.error.as_deref(), Some("Model timed out"));
    match report.content {
        Resolved::Text(sections) => assert_eq!(sections.summary, "Model timed out"),
        other => panic!("expected text content, got {:?}", other),
    }
}
