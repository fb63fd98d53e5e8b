//! User domain entity and related types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// User domain entity, as persisted and as returned to clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Storage-generated identifier
    #[schema(example = 1)]
    pub id: i64,
    /// Set by the storage engine at insert time; the column holds UTC
    pub creation_date: DateTime<Utc>,
    #[schema(example = "Ada")]
    pub name: String,
    #[schema(example = "Lovelace")]
    pub surname: String,
    #[schema(example = "ada")]
    pub username: String,
    #[schema(example = "ada@example.com")]
    pub email: String,
    #[schema(example = "1815-12-10")]
    pub birthday: NaiveDate,
    /// Stored as given; no hashing is applied
    pub password: String,
    #[schema(example = 0)]
    pub status: i16,
    pub avatar_url: Option<String>,
}

/// Registration payload.
///
/// Every field is optional; anything left out falls back to the column
/// default of the `Users` table. `birthday` has no default, so omitting it
/// makes the insert fail in storage.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NewUser {
    #[schema(example = "Ada")]
    pub name: Option<String>,
    #[schema(example = "Lovelace")]
    pub surname: Option<String>,
    #[schema(example = "ada")]
    pub username: Option<String>,
    #[schema(example = "ada@example.com")]
    pub email: Option<String>,
    #[schema(example = "1815-12-10")]
    pub birthday: Option<NaiveDate>,
    pub password: Option<String>,
    #[schema(example = 0)]
    pub status: Option<i16>,
    pub avatar_url: Option<String>,
}

/// Outcome of a delete-by-email that found its target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
pub struct UserDeletion {
    /// Rows removed (0 if the record vanished between lookup and delete)
    #[schema(example = 1)]
    pub affected: u64,
}

/// An uploaded avatar as handed over by the transport layer.
#[derive(Debug, Clone)]
pub struct AvatarFile {
    /// Name the client gave the file
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Result of recording an avatar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarUpload {
    pub url: String,
    pub size: usize,
}

/// Public URL for an avatar file.
///
/// The file name is used verbatim: no sanitization and no collision
/// avoidance, so two uploads named `me.png` map to the same URL.
pub fn avatar_public_url(base_url: &str, file_name: &str) -> String {
    format!("{}/{}", base_url.trim_end_matches('/'), file_name)
}
