//! Image upload handler.

use axum::{
    extract::{Multipart, State},
    Json,
};
use serde::Serialize;

use foodguard::{ImageError, ImageUpload};

use crate::server::error::ApiError;
use crate::server::state::AppState;

#[derive(Debug, Serialize)]
pub struct ImageResponse {
    pub message: &'static str,
    pub filename: String,
    /// Size in bytes.
    pub size: u64,
    pub status: &'static str,
}

/// POST /api/image - Validate an uploaded food image (multipart field `image`).
pub async fn upload_image(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ImageResponse>, ApiError> {
    let mut upload = None;

    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some("image") {
            continue;
        }
        let filename = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;

        upload = Some(ImageUpload::new(
            filename.as_deref(),
            content_type.as_deref(),
            bytes.len() as u64,
        )?);
        break;
    }

    let upload = upload.ok_or(ImageError::Missing)?;

    if state.verbose {
        println!(
            "image: {} ({}, {} bytes)",
            upload.filename, upload.content_type, upload.size
        );
    }

    Ok(Json(ImageResponse {
        message: "Image processed successfully",
        filename: upload.filename,
        size: upload.size,
        status: "success",
    }))
}
