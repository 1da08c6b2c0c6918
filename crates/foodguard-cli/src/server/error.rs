//! API error types and handling.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use foodguard::{BarcodeError, FoodGuardError, ImageError};
use serde::Serialize;

/// API error type.
#[derive(Debug)]
pub enum ApiError {
    /// Malformed request body.
    BadRequest(String),
    /// Rejected barcode.
    Barcode(BarcodeError),
    /// Rejected image upload.
    Image(ImageError),
    /// Error from the foodguard library.
    FoodGuard(FoodGuardError),
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::Barcode(e) => (StatusCode::BAD_REQUEST, "invalid_barcode", e.to_string()),
            ApiError::Image(e) => (StatusCode::BAD_REQUEST, "invalid_image", e.to_string()),
            ApiError::FoodGuard(e) => (StatusCode::BAD_REQUEST, "foodguard_error", e.to_string()),
        };

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
                message,
            }),
        )
            .into_response()
    }
}

impl From<FoodGuardError> for ApiError {
    fn from(err: FoodGuardError) -> Self {
        ApiError::FoodGuard(err)
    }
}

impl From<BarcodeError> for ApiError {
    fn from(err: BarcodeError) -> Self {
        ApiError::Barcode(err)
    }
}

impl From<ImageError> for ApiError {
    fn from(err: ImageError) -> Self {
        ApiError::Image(err)
    }
}

impl From<axum::extract::multipart::MultipartError> for ApiError {
    fn from(err: axum::extract::multipart::MultipartError) -> Self {
        ApiError::BadRequest(err.body_text())
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            ApiError::Barcode(e) => write!(f, "Invalid barcode: {}", e),
            ApiError::Image(e) => write!(f, "Invalid image: {}", e),
            ApiError::FoodGuard(e) => write!(f, "FoodGuard error: {}", e),
        }
    }
}

impl std::error::Error for ApiError {}
