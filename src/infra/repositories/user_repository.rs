//! User repository implementation over the `Users` table.

use std::sync::Arc;

use async_trait::async_trait;
use sea_orm::{ColumnTrait, Condition, DatabaseConnection, Value};

use super::base::{DeleteRepository, ReadRepository, WriteRepository};
use super::entities::user::{self, ActiveModel, Entity as UserEntity, Model};
use crate::domain::{NewUser, User};
use crate::errors::AppResult;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// Email is a lookup key but not a unique one; every email-keyed read
/// resolves to the first match by id.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Persist a new user; omitted fields take the column defaults
    async fn create(&self, input: NewUser) -> AppResult<User>;

    /// Find the first user with this email address
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Remove a user by id, returning the rows affected
    async fn delete_by_id(&self, id: i64) -> AppResult<u64>;

    /// Set `avatar_url` on users with this email, returning the rows affected
    async fn update_avatar_by_email(&self, email: &str, url: &str) -> AppResult<u64>;
}

/// SeaORM-backed implementation of UserRepository
pub struct UserStore {
    db: Arc<DatabaseConnection>,
}

impl UserStore {
    /// Create new repository instance over a shared connection
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn email_is(email: &str) -> Condition {
        Condition::all().add(user::Column::Email.eq(email))
    }
}

impl ReadRepository<UserEntity> for UserStore {
    fn db(&self) -> &DatabaseConnection {
        self.db.as_ref()
    }
}

impl WriteRepository<UserEntity, Model, ActiveModel> for UserStore {
    fn db(&self) -> &DatabaseConnection {
        self.db.as_ref()
    }
}

impl DeleteRepository<UserEntity> for UserStore {
    fn db(&self) -> &DatabaseConnection {
        self.db.as_ref()
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn create(&self, input: NewUser) -> AppResult<User> {
        let model = self.insert(ActiveModel::from(input)).await?;
        Ok(User::from(model))
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = self.find_first(Self::email_is(email)).await?;
        Ok(result.map(User::from))
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<u64> {
        self.delete_by_pk(id).await
    }

    async fn update_avatar_by_email(&self, email: &str, url: &str) -> AppResult<u64> {
        self.update_column_where(
            user::Column::AvatarUrl,
            Value::from(url.to_string()),
            Self::email_is(email),
        )
        .await
    }
}
