//! Display-ready report for an analysis response.

use serde::Serialize;

use crate::classify::Classifier;
use crate::response::{structured_risk_level, AnalysisResponse, ImageDetails, Resolved};
use crate::risk::RiskLevel;

/// Outcome of an analysis request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ReportStatus {
    Success,
    Error,
}

/// Everything the result view needs, in one record.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisReport {
    pub status: ReportStatus,
    /// Error surfaced from the server, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_status: Option<u16>,
    pub risk_level: Option<RiskLevel>,
    pub risk_badge: &'static str,
    pub content: Resolved,
    pub image: ImageDetails,
}

impl AnalysisReport {
    /// Build a report using the given classifier for any text content.
    pub fn from_response(response: &AnalysisResponse, classifier: &Classifier) -> Self {
        let content = response.resolve(classifier);
        let risk_level = match &content {
            Resolved::Text(sections) => sections.risk_level,
            Resolved::Structured(value) => structured_risk_level(value),
        };
        let status = if response.is_error() {
            ReportStatus::Error
        } else {
            ReportStatus::Success
        };

        Self {
            status,
            error: response.error_message().map(str::to_string),
            http_status: response.http_status,
            risk_level,
            risk_badge: RiskLevel::badge_class_for(risk_level),
            content,
            image: response.image_details(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.status == ReportStatus::Success
    }
}
