//! Company profile view and update, including logo upload.

use chrono::Utc;
use std::sync::Arc;

use crate::domain::entities::{Company, CompanyProfile};
use crate::domain::repositories::CompanyRepository;
use crate::domain::storage::{FileUpload, LOGOS_BUCKET, ObjectStorage};
use crate::error::AppError;
use crate::utils::file_name::image_object_path;
use serde_json::json;

pub struct CompanyService {
    repository: Arc<dyn CompanyRepository>,
    storage: Arc<dyn ObjectStorage>,
}

impl CompanyService {
    pub fn new(repository: Arc<dyn CompanyRepository>, storage: Arc<dyn ObjectStorage>) -> Self {
        Self {
            repository,
            storage,
        }
    }

    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the company does not exist.
    pub async fn get(&self, company_id: i64) -> Result<Company, AppError> {
        self.repository
            .find_by_id(company_id)
            .await?
            .ok_or_else(|| {
                AppError::not_found("Company profile not found", json!({ "id": company_id }))
            })
    }

    /// Resets the profile text to the default values, keeping the current logo.
    pub async fn restore_default(&self, company_id: i64) -> Result<Company, AppError> {
        let current = self.get(company_id).await?;
        let profile = CompanyProfile {
            logo_url: current.logo_url,
            ..CompanyProfile::default_profile()
        };
        self.repository.update(company_id, profile).await
    }

    /// Replaces the profile, uploading a new logo first when one is given.
    ///
    /// Without a new logo the stored `logo_url` is kept.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] for a blank name or a non-image logo.
    pub async fn update(
        &self,
        company_id: i64,
        profile: CompanyProfile,
        logo: Option<FileUpload>,
    ) -> Result<Company, AppError> {
        let profile = normalize(profile);

        if profile.name.is_empty() {
            return Err(AppError::bad_request(
                "Company name is required",
                json!({ "fields": ["name"] }),
            ));
        }

        let logo = logo.filter(|l| !l.bytes.is_empty());
        if let Some(logo) = &logo
            && !logo.is_image()
        {
            return Err(AppError::bad_request(
                "Logo must be an image",
                json!({ "content_type": logo.content_type }),
            ));
        }

        let current = self.get(company_id).await?;

        let logo_url = match logo {
            Some(logo) => {
                let path = image_object_path(
                    LOGOS_BUCKET,
                    company_id,
                    Utc::now().timestamp_millis(),
                );
                self.storage
                    .upload(LOGOS_BUCKET, &path, logo.bytes, &logo.content_type, true)
                    .await?;
                self.storage.public_url(LOGOS_BUCKET, &path)
            }
            None => current.logo_url,
        };

        let company = self
            .repository
            .update(company_id, CompanyProfile { logo_url, ..profile })
            .await?;

        tracing::info!(company_id, "Company profile updated");
        Ok(company)
    }
}

fn normalize(profile: CompanyProfile) -> CompanyProfile {
    let optional = |value: Option<String>| {
        value
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    };

    CompanyProfile {
        name: profile.name.trim().to_string(),
        logo_url: None,
        industry: optional(profile.industry),
        location: optional(profile.location),
        website: optional(profile.website),
        team_size: optional(profile.team_size),
        about: optional(profile.about),
    }
}
