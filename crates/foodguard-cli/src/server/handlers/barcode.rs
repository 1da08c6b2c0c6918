//! Barcode validation handler.

use axum::Json;
use serde::{Deserialize, Serialize};

use foodguard::Barcode;

use crate::server::error::ApiError;

/// Raw barcode submission, validated by the handler.
#[derive(Debug, Deserialize)]
pub struct BarcodeSubmission {
    #[serde(rename = "Barcode")]
    pub barcode: String,
}

#[derive(Debug, Serialize)]
pub struct BarcodeResponse {
    pub message: &'static str,
    pub barcode: Barcode,
    pub status: &'static str,
}

/// POST /api/barcode - Validate a manually entered barcode.
pub async fn submit_barcode(
    Json(submission): Json<BarcodeSubmission>,
) -> Result<Json<BarcodeResponse>, ApiError> {
    let barcode = Barcode::parse(&submission.barcode)?;

    Ok(Json(BarcodeResponse {
        message: "Barcode processed successfully",
        barcode,
        status: "success",
    }))
}
