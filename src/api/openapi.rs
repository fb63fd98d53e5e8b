//! OpenAPI documentation configuration.
//!
//! Provides Swagger UI for API exploration and testing.

use utoipa::OpenApi;

use crate::api::handlers::user_handler;
use crate::domain::{NewUser, User, UserDeletion};

/// OpenAPI documentation for the PickUp backend
#[derive(OpenApi)]
#[openapi(
    info(
        title = "PickUp Backend",
        version = "0.1.0",
        description = "User registration, lookup, deletion and avatar upload",
        license(name = "MIT", url = "https://opensource.org/licenses/MIT")
    ),
    servers(
        (url = "http://localhost:3000", description = "Local development server")
    ),
    paths(
        user_handler::register,
        user_handler::get_by_email,
        user_handler::delete_user,
        user_handler::upload_avatar,
    ),
    components(
        schemas(
            User,
            NewUser,
            UserDeletion,
            user_handler::AvatarUploadForm,
            user_handler::AvatarUploadResponse,
        )
    ),
    tags(
        (name = "Users", description = "User management operations")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_lists_user_routes() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();

        for expected in [
            "/users/register",
            "/users/getByEmail",
            "/users/delete",
            "/users/upload-avatar",
        ] {
            assert!(
                paths.iter().any(|p| p.as_str() == expected),
                "missing {expected}"
            );
        }
    }
}
