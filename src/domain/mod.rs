//! Domain layer - Core business entities and logic
//!
//! This module contains the core domain models that represent
//! business concepts independent of infrastructure concerns.

pub mod user;

pub use user::{avatar_public_url, AvatarFile, AvatarUpload, NewUser, User, UserDeletion};
