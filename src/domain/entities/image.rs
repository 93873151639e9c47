//! Salon image storage contract.
//!
//! The directory only ever records the filename returned by the store.

use async_trait::async_trait;

use crate::shared::error::AppError;

/// File extensions accepted for salon images.
pub const ALLOWED_IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp"];

/// An image received with a salon creation request.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    /// Filename as supplied by the client (unsanitized)
    pub filename: String,

    /// Declared MIME type, if any
    pub content_type: Option<String>,

    /// Raw file contents
    pub data: Vec<u8>,
}

/// Storage backend for uploaded salon images.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ImageStore: Send + Sync {
    /// Persist an upload and return the stored filename.
    ///
    /// Returns `AppError::Validation` if the filename cannot be made safe.
    async fn save(&self, upload: ImageUpload) -> Result<String, AppError>;

    /// Remove a previously stored image.
    async fn remove(&self, filename: &str) -> Result<(), AppError>;
}
