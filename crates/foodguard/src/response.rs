//! Responses from the image and barcode analysis endpoints.
//!
//! The endpoints return JSON whose `analysis` field is either plain text or
//! a nested structured object, and whose shape differs between success and
//! failure. This module decides what should be shown for a response: text is
//! classified into sections, structured objects are passed through, and
//! failures surface the server's error message rather than raw JSON.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::classify::{ClassifiedAnalysis, Classifier};
use crate::error::{FoodGuardError, Result};
use crate::risk::RiskLevel;

/// Text shown when a response carries neither analysis text nor an error.
pub const FALLBACK_TEXT: &str = "Analysis unavailable. Please try again.";

/// Error recorded for a failed request whose body has no `error` field.
pub const GENERIC_FAILURE: &str = "Image analysis failed";

/// Placeholder for missing image details.
pub const MISSING: &str = "—";

/// JSON body returned by an analysis endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AnalysisResponse {
    /// Analysis text or structured object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<Value>,
    /// Error reported by the server; usually a string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Upload size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Any other top-level fields.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
    /// HTTP status the body arrived with, when known.
    #[serde(skip)]
    pub http_status: Option<u16>,
}

/// What a response resolves to for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum Resolved {
    /// Plain text, classified into sections.
    Text(ClassifiedAnalysis),
    /// A structured analysis object, rendered as-is by the UI.
    Structured(Value),
}

impl AnalysisResponse {
    /// Parse a JSON body, failing only on malformed JSON.
    ///
    /// Fields are read leniently; see [`AnalysisResponse::from_value`].
    pub fn from_json(body: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(body)?;
        Ok(Self::from_value(value))
    }

    /// Build a response from parsed JSON.
    ///
    /// A metadata field of an unexpected type becomes `None` instead of
    /// discarding the body; `file_size` also accepts a numeric string. A
    /// top-level value that is not an object yields an empty response.
    pub fn from_value(value: Value) -> Self {
        let Value::Object(mut object) = value else {
            return Self::default();
        };

        let mut take_string = |key: &str| match object.remove(key) {
            Some(Value::String(s)) => Some(s),
            _ => None,
        };
        let status = take_string("status");
        let filename = take_string("filename");
        let content_type = take_string("content_type");

        Self {
            analysis: object.remove("analysis").filter(|v| !v.is_null()),
            error: object.remove("error").filter(|v| !v.is_null()),
            status,
            filename,
            file_size: object.remove("file_size").as_ref().and_then(lenient_size),
            content_type,
            extra: object,
            http_status: None,
        }
    }

    /// Build a response from an HTTP status and raw body.
    ///
    /// Never fails: a body that is not JSON becomes an error response naming
    /// the status, and a failed status without an `error` field gets a
    /// generic error message.
    pub fn from_http(status: u16, body: &str) -> Self {
        let mut response = Self::from_json(body).unwrap_or_else(|_| Self {
            error: Some(Value::String(format!("Non-JSON response (status {})", status))),
            ..Default::default()
        });

        if !(200..300).contains(&status) && response.error_message().is_none() {
            response.error = Some(Value::String(GENERIC_FAILURE.to_string()));
        }

        response.http_status = Some(status);
        response
    }

    /// Read a saved response body from disk.
    pub fn read_from(path: impl AsRef<Path>, status: u16) -> Result<Self> {
        let path = path.as_ref();
        let body = fs::read_to_string(path).map_err(|e| FoodGuardError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(Self::from_http(status, &body))
    }

    /// The server's error message, if it sent a string one.
    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().and_then(Value::as_str)
    }

    /// Analysis text, when `analysis` is a string.
    pub fn analysis_text(&self) -> Option<&str> {
        self.analysis.as_ref().and_then(Value::as_str)
    }

    /// Whether the request failed, by status code or error field.
    pub fn is_error(&self) -> bool {
        let failed_status = self
            .http_status
            .map(|s| !(200..300).contains(&s))
            .unwrap_or(false);
        failed_status || self.error.as_ref().is_some_and(is_truthy)
    }

    /// Decide what to display for this response.
    pub fn resolve(&self, classifier: &Classifier) -> Resolved {
        match self.successful_payload() {
            Some(Value::String(text)) => return Resolved::Text(classifier.classify(&text)),
            Some(value @ Value::Object(_)) => return Resolved::Structured(value),
            _ => {}
        }

        Resolved::Text(classifier.classify(self.fallback_text()))
    }

    /// Text fed to the classifier when nothing structured is available.
    pub fn fallback_text(&self) -> &str {
        self.analysis_text()
            .or_else(|| self.error_message())
            .unwrap_or(FALLBACK_TEXT)
    }

    /// Payload of a successful response.
    ///
    /// A nested `{"status": "success", "analysis": ...}` object yields its
    /// inner value (or itself when there is none); a top-level
    /// `"status": "success"` without analysis yields the whole response.
    fn successful_payload(&self) -> Option<Value> {
        match &self.analysis {
            Some(analysis) if is_truthy(analysis) => {
                let object = analysis.as_object()?;
                if object.get("status").and_then(Value::as_str) != Some("success") {
                    return None;
                }
                match object.get("analysis") {
                    Some(inner) if is_truthy(inner) => Some(inner.clone()),
                    _ => Some(analysis.clone()),
                }
            }
            _ if self.status.as_deref() == Some("success") => serde_json::to_value(self).ok(),
            _ => None,
        }
    }

    /// Filename, size and content type of the uploaded image.
    pub fn image_details(&self) -> ImageDetails {
        ImageDetails {
            filename: self.filename.clone().filter(|f| !f.is_empty()),
            size_kb: self.file_size.and_then(kilobytes),
            content_type: self.content_type.clone().filter(|c| !c.is_empty()),
        }
    }
}

/// Risk level stated in a structured analysis (`risk_assessment.risk_level`).
pub fn structured_risk_level(analysis: &Value) -> Option<RiskLevel> {
    analysis
        .pointer("/risk_assessment/risk_level")
        .and_then(Value::as_str)
        .and_then(RiskLevel::from_word)
}

/// Details of the uploaded image shown alongside the analysis.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDetails {
    pub filename: Option<String>,
    /// Size rounded to the nearest kilobyte.
    pub size_kb: Option<u64>,
    pub content_type: Option<String>,
}

impl ImageDetails {
    pub fn filename_display(&self) -> &str {
        self.filename.as_deref().unwrap_or(MISSING)
    }

    pub fn size_display(&self) -> String {
        match self.size_kb {
            Some(kb) => format!("{} KB", kb),
            None => MISSING.to_string(),
        }
    }

    pub fn content_type_display(&self) -> &str {
        self.content_type.as_deref().unwrap_or(MISSING)
    }
}

/// Size rounded to the nearest kilobyte; `None` for an empty file.
pub(crate) fn kilobytes(bytes: u64) -> Option<u64> {
    (bytes > 0).then(|| (bytes + 512) / 1024)
}

/// Byte count from a number or a numeric string.
fn lenient_size(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f.round() as u64)),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// JSON truthiness: null, false, 0 and "" are falsy.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
