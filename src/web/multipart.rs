//! Collecting `multipart/form-data` bodies into text fields and files.

use axum::extract::Multipart;
use serde_json::json;
use std::collections::HashMap;

use crate::domain::storage::FileUpload;
use crate::error::AppError;

/// A fully read multipart form.
#[derive(Debug, Default)]
pub struct MultipartForm {
    fields: HashMap<String, String>,
    files: HashMap<String, FileUpload>,
}

impl MultipartForm {
    /// Reads every part of the body.
    ///
    /// Parts with a file name are collected as files; a file input left
    /// empty by the browser (no name, no bytes) is skipped.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the body is malformed or exceeds
    /// the request body limit.
    pub async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut form = Self::default();

        while let Some(field) = multipart.next_field().await.map_err(malformed)? {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            match field.file_name().map(str::to_string) {
                Some(file_name) => {
                    let content_type = field
                        .content_type()
                        .unwrap_or("application/octet-stream")
                        .to_string();
                    let bytes = field.bytes().await.map_err(malformed)?;

                    if file_name.is_empty() && bytes.is_empty() {
                        continue;
                    }

                    form.files.insert(
                        name,
                        FileUpload {
                            file_name,
                            content_type,
                            bytes: bytes.to_vec(),
                        },
                    );
                }
                None => {
                    let value = field.text().await.map_err(malformed)?;
                    form.fields.insert(name, value);
                }
            }
        }

        Ok(form)
    }

    /// Text value of a field, empty when absent.
    pub fn text(&self, name: &str) -> String {
        self.fields.get(name).cloned().unwrap_or_default()
    }

    /// Text value of a field, `None` when absent or blank.
    pub fn optional(&self, name: &str) -> Option<String> {
        self.fields
            .get(name)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
            .map(str::to_string)
    }

    pub fn take_file(&mut self, name: &str) -> Option<FileUpload> {
        self.files.remove(name)
    }
}

fn malformed(e: axum::extract::multipart::MultipartError) -> AppError {
    tracing::debug!(error = %e, "Rejected multipart body");
    AppError::bad_request(
        "The upload could not be read, the file may be too large",
        json!({ "reason": e.body_text() }),
    )
}
