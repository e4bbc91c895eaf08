//! Team roster, approvals and HR user profiles.

use chrono::Utc;
use std::sync::Arc;

use crate::domain::entities::{HrUser, ProfileUpdate};
use crate::domain::repositories::HrUserRepository;
use crate::domain::storage::{AVATARS_BUCKET, FileUpload, ObjectStorage};
use crate::error::AppError;
use crate::utils::file_name::image_object_path;
use crate::utils::web_link::validate_web_link;
use serde_json::json;
use validator::Validate;

/// Maximum number of words in a profile bio.
pub const MAX_BIO_WORDS: usize = 100;

/// Company members split by approval state.
#[derive(Debug, Clone, Default)]
pub struct TeamRoster {
    pub approved: Vec<HrUser>,
    pub pending: Vec<HrUser>,
}

/// Editable profile fields as submitted by the profile form.
///
/// Social links are shown to the whole team, so only http(s) URLs pass.
#[derive(Debug, Clone, Default, Validate)]
pub struct ProfileInput {
    pub name: Option<String>,
    pub position: Option<String>,
    pub bio: Option<String>,
    /// Comma-separated skills.
    pub skills: Option<String>,
    #[validate(url, custom(function = "validate_web_link"))]
    pub linkedin: Option<String>,
    #[validate(url, custom(function = "validate_web_link"))]
    pub github: Option<String>,
    #[validate(url, custom(function = "validate_web_link"))]
    pub website: Option<String>,
}

impl ProfileInput {
    /// Trims every field and drops the blank ones.
    fn cleaned(self) -> Self {
        let clean = |value: Option<String>| {
            value
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            name: clean(self.name),
            position: clean(self.position),
            bio: clean(self.bio),
            skills: clean(self.skills),
            linkedin: clean(self.linkedin),
            github: clean(self.github),
            website: clean(self.website),
        }
    }
}

pub struct TeamService {
    repository: Arc<dyn HrUserRepository>,
    storage: Arc<dyn ObjectStorage>,
}

impl TeamService {
    pub fn new(repository: Arc<dyn HrUserRepository>, storage: Arc<dyn ObjectStorage>) -> Self {
        Self {
            repository,
            storage,
        }
    }

    /// All members of the company, split into approved and pending.
    pub async fn roster(&self, company_id: i64) -> Result<TeamRoster, AppError> {
        let (approved, pending) = self
            .repository
            .list_by_company(company_id)
            .await?
            .into_iter()
            .partition(|u| u.approved);

        Ok(TeamRoster { approved, pending })
    }

    pub async fn pending_count(&self, company_id: i64) -> Result<i64, AppError> {
        self.repository.count_pending(company_id).await
    }

    /// Approves a pending member of the company, stamping `approved_at`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not belong to the company.
    pub async fn approve(&self, company_id: i64, id: i64) -> Result<HrUser, AppError> {
        let user = self
            .repository
            .approve(id, company_id)
            .await?
            .ok_or_else(|| AppError::not_found("HR user not found", json!({ "id": id })))?;

        tracing::info!(hr_user_id = id, company_id, "HR user approved");
        Ok(user)
    }

    /// Updates the signed-in user's own profile, uploading a new avatar first
    /// when one is given.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a link is not an http(s) URL, the
    /// bio exceeds [`MAX_BIO_WORDS`] words or the avatar is not an image.
    pub async fn update_profile(
        &self,
        user: &HrUser,
        input: ProfileInput,
        avatar: Option<FileUpload>,
    ) -> Result<HrUser, AppError> {
        let input = input.cleaned();
        input.validate()?;

        if let Some(bio) = &input.bio {
            let words = bio.split_whitespace().count();
            if words > MAX_BIO_WORDS {
                return Err(AppError::bad_request(
                    format!("Bio must be at most {MAX_BIO_WORDS} words"),
                    json!({ "field": "bio", "words": words }),
                ));
            }
        }

        let avatar = avatar.filter(|a| !a.bytes.is_empty());
        let avatar_url = match avatar {
            Some(avatar) if !avatar.is_image() => {
                return Err(AppError::bad_request(
                    "Avatar must be an image",
                    json!({ "content_type": avatar.content_type }),
                ));
            }
            Some(avatar) => {
                let path =
                    image_object_path(AVATARS_BUCKET, user.id, Utc::now().timestamp_millis());
                self.storage
                    .upload(AVATARS_BUCKET, &path, avatar.bytes, &avatar.content_type, true)
                    .await?;
                self.storage.public_url(AVATARS_BUCKET, &path)
            }
            None => user.avatar_url.clone(),
        };

        let update = ProfileUpdate {
            skills: parse_skills(input.skills.as_deref().unwrap_or_default()),
            name: input.name,
            avatar_url,
            position: input.position,
            bio: input.bio,
            linkedin: input.linkedin,
            github: input.github,
            website: input.website,
        };

        self.repository.update_profile(user.id, update).await
    }
}

/// Splits a comma-separated skill list, dropping blanks and duplicates.
pub fn parse_skills(raw: &str) -> Vec<String> {
    let mut skills: Vec<String> = Vec::new();
    for skill in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        if !skills.iter().any(|s| s.eq_ignore_ascii_case(skill)) {
            skills.push(skill.to_string());
        }
    }
    skills
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::Role;
    use crate::domain::repositories::MockHrUserRepository;
    use crate::domain::storage::MockObjectStorage;

    fn hr_user(id: i64, approved: bool) -> HrUser {
        HrUser {
            id,
            company_id: 1,
            email: format!("user{id}@acme.com"),
            name: None,
            role: Role::Hr,
            approved,
            approved_at: approved.then(Utc::now),
            avatar_url: None,
            position: None,
            bio: None,
            skills: vec![],
            linkedin: None,
            github: None,
            website: None,
            created_at: Utc::now(),
        }
    }

    fn with_update(mut user: HrUser, update: ProfileUpdate) -> HrUser {
        user.name = update.name;
        user.avatar_url = update.avatar_url;
        user.position = update.position;
        user.bio = update.bio;
        user.skills = update.skills;
        user.linkedin = update.linkedin;
        user.github = update.github;
        user.website = update.website;
        user
    }

    #[test]
    fn test_parse_skills() {
        assert_eq!(
            parse_skills(" Rust, SQL ,, rust, Figma "),
            vec!["Rust", "SQL", "Figma"]
        );
        assert!(parse_skills("").is_empty());
    }

    #[tokio::test]
    async fn test_roster_partitions_by_approval() {
        let mut repo = MockHrUserRepository::new();
        repo.expect_list_by_company()
            .withf(|company_id| *company_id == 1)
            .returning(|_| Ok(vec![hr_user(1, true), hr_user(42, false), hr_user(3, true)]));

        let roster = TeamService::new(Arc::new(repo), Arc::new(MockObjectStorage::new()))
            .roster(1)
            .await
            .unwrap();

        assert_eq!(roster.approved.len(), 2);
        assert_eq!(roster.pending.len(), 1);
        assert_eq!(roster.pending[0].id, 42);
    }

    #[tokio::test]
    async fn test_approve_pending_user() {
        let mut repo = MockHrUserRepository::new();
        repo.expect_approve()
            .withf(|id, company_id| *id == 42 && *company_id == 1)
            .times(1)
            .returning(|id, _| Ok(Some(hr_user(id, true))));

        let user = TeamService::new(Arc::new(repo), Arc::new(MockObjectStorage::new()))
            .approve(1, 42)
            .await
            .unwrap();

        assert!(user.approved);
        assert!(user.approved_at.is_some());
    }

    #[tokio::test]
    async fn test_approve_unknown_user() {
        let mut repo = MockHrUserRepository::new();
        repo.expect_approve().returning(|_, _| Ok(None));

        let err = TeamService::new(Arc::new(repo), Arc::new(MockObjectStorage::new()))
            .approve(1, 99)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_update_profile_rejects_long_bio() {
        let mut repo = MockHrUserRepository::new();
        repo.expect_update_profile().never();

        let input = ProfileInput {
            bio: Some("word ".repeat(MAX_BIO_WORDS + 1)),
            ..Default::default()
        };

        let err = TeamService::new(Arc::new(repo), Arc::new(MockObjectStorage::new()))
            .update_profile(&hr_user(1, true), input, None)
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::Validation { .. }));
    }

    #[tokio::test]
    async fn test_update_profile_rejects_script_links() {
        for field in ["linkedin", "github", "website"] {
            let mut repo = MockHrUserRepository::new();
            repo.expect_update_profile().never();

            let link = "javascript:fetch('/dashboard/team/9/approve',{method:'POST'})";
            let mut input = ProfileInput::default();
            let target = match field {
                "linkedin" => &mut input.linkedin,
                "github" => &mut input.github,
                _ => &mut input.website,
            };
            *target = Some(link.to_string());

            let err = TeamService::new(Arc::new(repo), Arc::new(MockObjectStorage::new()))
                .update_profile(&hr_user(9, true), input, None)
                .await
                .unwrap_err();

            assert!(matches!(err, AppError::Validation { .. }), "{field}");
            assert_eq!(err.to_error_info().details["fields"][0], field);
        }
    }

    #[tokio::test]
    async fn test_update_profile_keeps_web_links() {
        let mut repo = MockHrUserRepository::new();
        repo.expect_update_profile()
            .withf(|_, u| {
                u.linkedin.as_deref() == Some("https://www.linkedin.com/in/jane")
                    && u.website.is_none()
            })
            .times(1)
            .returning(|_, u| Ok(with_update(hr_user(7, true), u)));

        let input = ProfileInput {
            linkedin: Some(" https://www.linkedin.com/in/jane ".to_string()),
            website: Some("  ".to_string()),
            ..Default::default()
        };

        let user = TeamService::new(Arc::new(repo), Arc::new(MockObjectStorage::new()))
            .update_profile(&hr_user(7, true), input, None)
            .await
            .unwrap();

        assert_eq!(user.linkedin.as_deref(), Some("https://www.linkedin.com/in/jane"));
    }

    #[tokio::test]
    async fn test_update_profile_with_avatar() {
        let mut repo = MockHrUserRepository::new();
        let mut storage = MockObjectStorage::new();

        storage
            .expect_upload()
            .withf(|bucket, path, _, _, upsert| {
                bucket == AVATARS_BUCKET && path.starts_with("avatars/7-") && *upsert
            })
            .times(1)
            .returning(|_, _, _, _, _| Ok(()));
        storage
            .expect_public_url()
            .returning(|bucket, path| Some(format!("/storage/{bucket}/{path}")));
        repo.expect_update_profile()
            .withf(|id, u| {
                *id == 7
                    && u.skills == vec!["Rust".to_string(), "Hiring".to_string()]
                    && u.position.as_deref() == Some("Recruiter")
                    && u.github.is_none()
                    && u.avatar_url.is_some()
            })
            .times(1)
            .returning(|_, u| Ok(with_update(hr_user(7, true), u)));

        let input = ProfileInput {
            name: Some("Jane Doe".to_string()),
            position: Some(" Recruiter ".to_string()),
            skills: Some("Rust, Hiring".to_string()),
            github: Some(String::new()),
            ..Default::default()
        };
        let avatar = FileUpload {
            file_name: "me.jpg".to_string(),
            content_type: "image/jpeg".to_string(),
            bytes: vec![255, 216, 255],
        };

        let user = TeamService::new(Arc::new(repo), Arc::new(storage))
            .update_profile(&hr_user(7, true), input, Some(avatar))
            .await
            .unwrap();

        assert_eq!(user.name.as_deref(), Some("Jane Doe"));
    }
}
