//! Object storage abstraction for uploaded files.

use crate::error::AppError;
use async_trait::async_trait;

/// Bucket holding applicant resumes.
pub const RESUMES_BUCKET: &str = "resumes";
/// Bucket holding company logos.
pub const LOGOS_BUCKET: &str = "logos";
/// Bucket holding HR user avatars.
pub const AVATARS_BUCKET: &str = "avatars";

/// An uploaded file received from a multipart form.
#[derive(Debug, Clone)]
pub struct FileUpload {
    pub file_name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl FileUpload {
    pub fn is_pdf(&self) -> bool {
        self.content_type == "application/pdf"
    }

    pub fn is_image(&self) -> bool {
        self.content_type.starts_with("image/")
    }
}

/// Storage for publicly readable objects grouped in buckets.
///
/// # Implementations
///
/// - [`crate::infrastructure::storage::LocalStorage`] - filesystem-backed store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ObjectStorage: Send + Sync {
    /// Writes an object.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the object exists and `upsert` is false.
    /// Returns [`AppError::Internal`] on I/O errors.
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        content_type: &str,
        upsert: bool,
    ) -> Result<(), AppError>;

    /// Public URL of an object, `None` if the path cannot be addressed.
    fn public_url(&self, bucket: &str, path: &str) -> Option<String>;

    /// Deletes an object. Deleting a missing object is not an error.
    async fn remove(&self, bucket: &str, path: &str) -> Result<(), AppError>;

    /// Whether the store is reachable and writable.
    async fn health_check(&self) -> bool;
}
