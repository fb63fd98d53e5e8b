//! Shared test fixtures.

#![allow(dead_code)]

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{DatabaseBackend, DbErr, MockDatabase, MockExecResult};

use pickup_backend::domain::{NewUser, User};
use pickup_backend::errors::{AppError, AppResult};
use pickup_backend::infra::{Database, UserRepository};
use pickup_backend::services::UserManager;
use pickup_backend::AppState;

pub const AVATAR_BASE_URL: &str = "https://cdn.example.com/avatars";

/// In-memory stand-in for the `Users` table, applying the same column
/// defaults the real schema does.
#[derive(Default)]
pub struct InMemoryUsers {
    rows: Mutex<Vec<User>>,
    next_id: AtomicI64,
}

impl InMemoryUsers {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn snapshot(&self) -> Vec<User> {
        self.rows.lock().unwrap().clone()
    }
}

#[async_trait]
impl UserRepository for InMemoryUsers {
    async fn create(&self, input: NewUser) -> AppResult<User> {
        let birthday = input.birthday.ok_or_else(|| {
            AppError::Database(DbErr::Custom(
                "null value in column \"birthday\" violates not-null constraint".to_string(),
            ))
        })?;

        let user = User {
            id: self.next_id.fetch_add(1, Ordering::SeqCst) + 1,
            creation_date: Utc::now(),
            name: input.name.unwrap_or_default(),
            surname: input.surname.unwrap_or_default(),
            username: input.username.unwrap_or_default(),
            email: input.email.unwrap_or_default(),
            birthday,
            password: input.password.unwrap_or_default(),
            status: input.status.unwrap_or(0),
            avatar_url: input.avatar_url,
        };

        self.rows.lock().unwrap().push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let rows = self.rows.lock().unwrap();
        Ok(rows.iter().find(|u| u.email == email).cloned())
    }

    async fn delete_by_id(&self, id: i64) -> AppResult<u64> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|u| u.id != id);
        Ok((before - rows.len()) as u64)
    }

    async fn update_avatar_by_email(&self, email: &str, url: &str) -> AppResult<u64> {
        let mut rows = self.rows.lock().unwrap();
        let mut affected = 0;
        for user in rows.iter_mut().filter(|u| u.email == email) {
            user.avatar_url = Some(url.to_string());
            affected += 1;
        }
        Ok(affected)
    }
}

pub fn user_manager(repo: Arc<InMemoryUsers>) -> UserManager {
    UserManager::new(repo, AVATAR_BASE_URL)
}

/// App state over the in-memory repository. The database handle is a
/// SeaORM mock primed with one successful ping.
pub fn test_state(repo: Arc<InMemoryUsers>) -> AppState {
    let connection = MockDatabase::new(DatabaseBackend::Postgres)
        .append_exec_results([MockExecResult {
            last_insert_id: 0,
            rows_affected: 1,
        }])
        .into_connection();

    AppState::new(
        Arc::new(user_manager(repo)),
        Arc::new(Database::from_connection(connection)),
    )
}
