//! Validation of uploaded food images.

use serde::Serialize;
use thiserror::Error;

use crate::response::{kilobytes, ImageDetails};

/// Why an upload was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageError {
    #[error("No image file provided")]
    Missing,

    #[error("Only image files are allowed")]
    NotAnImage,
}

/// An accepted image upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageUpload {
    pub filename: String,
    pub content_type: String,
    /// Size in bytes.
    pub size: u64,
}

impl ImageUpload {
    /// Validate an uploaded file part; only `image/*` content is accepted.
    pub fn new(
        filename: Option<&str>,
        content_type: Option<&str>,
        size: u64,
    ) -> Result<Self, ImageError> {
        let content_type = content_type
            .map(|ct| ct.trim().to_ascii_lowercase())
            .filter(|ct| is_image_content_type(ct))
            .ok_or(ImageError::NotAnImage)?;

        Ok(Self {
            filename: filename.unwrap_or_default().to_string(),
            content_type,
            size,
        })
    }

    /// Details shown next to the analysis.
    pub fn details(&self) -> ImageDetails {
        ImageDetails {
            filename: Some(self.filename.clone()).filter(|f| !f.is_empty()),
            size_kb: kilobytes(self.size),
            content_type: Some(self.content_type.clone()),
        }
    }
}

/// Whether a MIME type names an image, e.g. `image/jpeg`.
pub fn is_image_content_type(content_type: &str) -> bool {
    content_type
        .trim()
        .get(..6)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("image/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_image() {
        let upload = ImageUpload::new(Some("honey.jpg"), Some("image/jpeg"), 204_800).unwrap();
        assert_eq!(upload.filename, "honey.jpg");
        assert_eq!(upload.content_type, "image/jpeg");
        assert_eq!(upload.size, 204_800);
    }

    #[test]
    fn test_rejects_non_image() {
        assert_eq!(
            ImageUpload::new(Some("notes.txt"), Some("text/plain"), 10),
            Err(ImageError::NotAnImage)
        );
        assert_eq!(
            ImageUpload::new(Some("photo.jpg"), None, 10),
            Err(ImageError::NotAnImage)
        );
    }

    #[test]
    fn test_content_type_check() {
        assert!(is_image_content_type("image/png"));
        assert!(is_image_content_type(" IMAGE/WEBP"));
        assert!(!is_image_content_type("image"));
        assert!(!is_image_content_type("application/octet-stream"));
        assert!(!is_image_content_type(""));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(ImageError::Missing.to_string(), "No image file provided");
        assert_eq!(ImageError::NotAnImage.to_string(), "Only image files are allowed");
    }

    #[test]
    fn test_details() {
        let upload = ImageUpload::new(None, Some("Image/PNG"), 1536).unwrap();
        let details = upload.details();
        assert_eq!(details.filename_display(), "—");
        assert_eq!(details.size_display(), "2 KB");
        assert_eq!(details.content_type_display(), "image/png");
    }
}
