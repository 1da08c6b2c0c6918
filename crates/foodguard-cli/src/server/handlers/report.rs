//! Endpoint response report handler.

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use foodguard::{AnalysisReport, AnalysisResponse};

use crate::server::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ReportParams {
    /// HTTP status the response body arrived with.
    #[serde(default)]
    pub status: Option<u16>,
}

/// POST /api/report - Turn a raw endpoint response body into a report.
///
/// The body is taken as text so malformed JSON still yields a report.
pub async fn build_report(
    State(state): State<AppState>,
    Query(params): Query<ReportParams>,
    body: String,
) -> Json<AnalysisReport> {
    let status = params.status.unwrap_or(200);
    let response = AnalysisResponse::from_http(status, &body);
    let report = AnalysisReport::from_response(&response, &state.classifier);

    if state.verbose {
        println!("report: HTTP {} -> {:?}", status, report.status);
    }

    Json(report)
}
