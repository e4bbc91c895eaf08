//! Filesystem-backed object storage.
//!
//! ## Layout
//!
//! ```text
//! <root>/
//! ├── resumes/<unix_millis>-<name>.pdf
//! ├── logos/logos/<company_id>-<unix_millis>.png
//! └── avatars/avatars/<hr_user_id>-<unix_millis>.png
//! ```
//!
//! Objects are served read-only by the router under `/storage/{bucket}/...`,
//! so the public URL of an object is `<public_base_url>/storage/<bucket>/<path>`.

use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Component, Path, PathBuf};
use tokio::io::AsyncWriteExt;

use crate::domain::storage::ObjectStorage;
use crate::error::AppError;
use serde_json::json;

/// Bucket directories created at startup.
pub const BUCKETS: [&str; 3] = [
    crate::domain::storage::RESUMES_BUCKET,
    crate::domain::storage::LOGOS_BUCKET,
    crate::domain::storage::AVATARS_BUCKET,
];

#[derive(Clone, Debug)]
pub struct LocalStorage {
    root: PathBuf,
    public_base_url: String,
}

impl LocalStorage {
    /// Creates the store, making sure every bucket directory exists.
    pub async fn new(root: PathBuf, public_base_url: &str) -> std::io::Result<Self> {
        for bucket in BUCKETS {
            tokio::fs::create_dir_all(root.join(bucket)).await?;
        }

        Ok(Self {
            root,
            public_base_url: public_base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Resolves `bucket/path` inside the root, rejecting traversal.
    fn object_path(&self, bucket: &str, path: &str) -> Option<PathBuf> {
        if !BUCKETS.contains(&bucket) || path.is_empty() {
            return None;
        }

        let relative = Path::new(path);
        let only_normal = relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)));

        only_normal.then(|| self.root.join(bucket).join(relative))
    }

    fn invalid_path(bucket: &str, path: &str) -> AppError {
        AppError::bad_request(
            "Invalid object path",
            json!({ "bucket": bucket, "path": path }),
        )
    }
}

#[async_trait]
impl ObjectStorage for LocalStorage {
    async fn upload(
        &self,
        bucket: &str,
        path: &str,
        bytes: Vec<u8>,
        _content_type: &str,
        upsert: bool,
    ) -> Result<(), AppError> {
        let target = self
            .object_path(bucket, path)
            .ok_or_else(|| Self::invalid_path(bucket, path))?;

        let io_error = |e: std::io::Error| {
            tracing::error!(error = %e, bucket, path, "Failed to write object");
            AppError::internal("Failed to store file", json!({ "bucket": bucket }))
        };

        if let Some(parent) = target.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(io_error)?;
        }

        let mut options = tokio::fs::OpenOptions::new();
        options.write(true);
        if upsert {
            options.create(true).truncate(true);
        } else {
            options.create_new(true);
        }

        let mut file = match options.open(&target).await {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                return Err(AppError::conflict(
                    "The resource already exists",
                    json!({ "bucket": bucket, "path": path }),
                ));
            }
            Err(e) => return Err(io_error(e)),
        };

        file.write_all(&bytes).await.map_err(io_error)?;
        file.flush().await.map_err(io_error)?;

        tracing::debug!(bucket, path, size = bytes.len(), "Stored object");
        Ok(())
    }

    fn public_url(&self, bucket: &str, path: &str) -> Option<String> {
        self.object_path(bucket, path)?;
        Some(format!("{}/storage/{bucket}/{path}", self.public_base_url))
    }

    async fn remove(&self, bucket: &str, path: &str) -> Result<(), AppError> {
        let target = self
            .object_path(bucket, path)
            .ok_or_else(|| Self::invalid_path(bucket, path))?;

        match tokio::fs::remove_file(&target).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => {
                tracing::error!(error = %e, bucket, path, "Failed to remove object");
                Err(AppError::internal(
                    "Failed to remove file",
                    json!({ "bucket": bucket }),
                ))
            }
        }
    }

    async fn health_check(&self) -> bool {
        tokio::fs::metadata(&self.root)
            .await
            .is_ok_and(|m| m.is_dir())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::storage::{LOGOS_BUCKET, RESUMES_BUCKET};

    async fn store(name: &str) -> LocalStorage {
        let root = std::env::temp_dir().join(format!(
            "nextstep-storage-{name}-{}",
            std::process::id()
        ));
        let _ = tokio::fs::remove_dir_all(&root).await;
        LocalStorage::new(root, "http://localhost:3000/").await.unwrap()
    }

    #[tokio::test]
    async fn test_upload_and_remove() {
        let storage = store("upload").await;

        storage
            .upload(RESUMES_BUCKET, "1-Jane.pdf", b"%PDF".to_vec(), "application/pdf", false)
            .await
            .unwrap();

        let written = tokio::fs::read(storage.root().join("resumes/1-Jane.pdf"))
            .await
            .unwrap();
        assert_eq!(written, b"%PDF");

        storage.remove(RESUMES_BUCKET, "1-Jane.pdf").await.unwrap();
        assert!(
            tokio::fs::metadata(storage.root().join("resumes/1-Jane.pdf"))
                .await
                .is_err()
        );

        // removing twice is fine
        storage.remove(RESUMES_BUCKET, "1-Jane.pdf").await.unwrap();
    }

    #[tokio::test]
    async fn test_upload_without_upsert_conflicts() {
        let storage = store("conflict").await;

        storage
            .upload(RESUMES_BUCKET, "a.pdf", vec![1], "application/pdf", false)
            .await
            .unwrap();
        let second = storage
            .upload(RESUMES_BUCKET, "a.pdf", vec![2], "application/pdf", false)
            .await;

        assert!(matches!(second, Err(AppError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_upsert_overwrites_nested_path() {
        let storage = store("upsert").await;

        for bytes in [vec![1, 2, 3], vec![4]] {
            storage
                .upload(LOGOS_BUCKET, "logos/1-5.png", bytes, "image/png", true)
                .await
                .unwrap();
        }

        let written = tokio::fs::read(storage.root().join("logos/logos/1-5.png"))
            .await
            .unwrap();
        assert_eq!(written, vec![4]);
    }

    #[tokio::test]
    async fn test_rejects_traversal_and_unknown_bucket() {
        let storage = store("traversal").await;

        let escaped = storage
            .upload(RESUMES_BUCKET, "../secret", vec![1], "application/pdf", true)
            .await;
        assert!(matches!(escaped, Err(AppError::Validation { .. })));

        assert_eq!(storage.public_url("private", "x.pdf"), None);
        assert_eq!(storage.public_url(RESUMES_BUCKET, "/etc/passwd"), None);
    }

    #[tokio::test]
    async fn test_public_url() {
        let storage = store("url").await;

        assert_eq!(
            storage.public_url(LOGOS_BUCKET, "logos/1-5.png").as_deref(),
            Some("http://localhost:3000/storage/logos/logos/1-5.png")
        );
        assert!(storage.health_check().await);
    }
}
