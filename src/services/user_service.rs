//! User service - Handles user-related use cases.
//!
//! Each operation is a straight delegation to the repository. There is no
//! duplicate-email check, no password hashing and no transaction around
//! the lookup-then-delete sequence.

use async_trait::async_trait;
use std::sync::Arc;

use crate::domain::{avatar_public_url, AvatarFile, AvatarUpload, NewUser, User, UserDeletion};
use crate::errors::AppResult;
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Persist a new user and return it as stored
    async fn register(&self, input: NewUser) -> AppResult<User>;

    /// Look up a user by email; `None` means no such user
    async fn get_user_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Delete the user with this email; `None` if there was none
    async fn delete_user(&self, email: &str) -> AppResult<Option<UserDeletion>>;

    /// Record the public URL of an uploaded avatar for this email
    async fn update_avatar(&self, email: &str, file: AvatarFile) -> AppResult<AvatarUpload>;
}

/// Concrete implementation of UserService using repository.
pub struct UserManager {
    repo: Arc<dyn UserRepository>,
    avatar_base_url: String,
}

impl UserManager {
    /// Create new user service instance with repository
    pub fn new(repo: Arc<dyn UserRepository>, avatar_base_url: impl Into<String>) -> Self {
        Self {
            repo,
            avatar_base_url: avatar_base_url.into(),
        }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn register(&self, input: NewUser) -> AppResult<User> {
        let user = self.repo.create(input).await?;
        tracing::info!(user_id = user.id, "User registered");
        Ok(user)
    }

    async fn get_user_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.repo.find_by_email(email).await
    }

    async fn delete_user(&self, email: &str) -> AppResult<Option<UserDeletion>> {
        let Some(user) = self.repo.find_by_email(email).await? else {
            tracing::debug!(email, "Delete requested for unknown email");
            return Ok(None);
        };

        let affected = self.repo.delete_by_id(user.id).await?;
        tracing::info!(user_id = user.id, affected, "User deleted");

        Ok(Some(UserDeletion { affected }))
    }

    async fn update_avatar(&self, email: &str, file: AvatarFile) -> AppResult<AvatarUpload> {
        let url = avatar_public_url(&self.avatar_base_url, &file.file_name);

        let affected = self.repo.update_avatar_by_email(email, &url).await?;
        if affected == 0 {
            tracing::debug!(email, "Avatar recorded for unknown email");
        }

        Ok(AvatarUpload {
            url,
            size: file.bytes.len(),
        })
    }
}
