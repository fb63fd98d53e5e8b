//! Application settings loaded from environment variables.

use std::env;

use super::constants::{DEFAULT_AVATAR_BASE_URL, DEFAULT_DATABASE_URL};

/// Application configuration
///
/// The listen address is not part of it: `serve --host/--port` owns that,
/// with `SERVER_HOST`/`SERVER_PORT` as fallbacks.
#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    /// Prefix for public avatar URLs (no trailing slash required)
    pub avatar_base_url: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("database_url", &"[REDACTED]")
            .field("avatar_base_url", &self.avatar_base_url)
            .finish()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            avatar_base_url: DEFAULT_AVATAR_BASE_URL.to_string(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string()),
            avatar_base_url: env::var("AVATAR_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_AVATAR_BASE_URL.to_string()),
        }
    }
}
