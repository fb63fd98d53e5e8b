//! User handlers.

use axum::{
    extract::{multipart::MultipartError, DefaultBodyLimit, Multipart, State},
    http::StatusCode,
    response::Json,
    routing::{delete, get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::api::extractors::{JsonBody, QueryParams};
use crate::api::AppState;
use crate::config::{AVATAR_FILE_FIELD, AVATAR_UPLOADED_MESSAGE, MAX_AVATAR_UPLOAD_BYTES};
use crate::domain::{AvatarFile, NewUser, User, UserDeletion};
use crate::errors::{AppError, AppResult};

/// Email query parameter shared by the email-keyed routes
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmailQuery {
    /// Email address of the target user
    #[param(example = "ada@example.com")]
    pub email: String,
}

/// Multipart form accepted by the avatar upload route
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct AvatarUploadForm {
    /// Image file; its original name becomes part of the public URL
    #[schema(value_type = String, format = Binary)]
    pub file: Vec<u8>,
}

/// Avatar upload response
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AvatarUploadResponse {
    #[schema(example = "Avatar uploaded successfully")]
    pub message: String,
    #[schema(example = "https://tuo-bucket.supabase.co/storage/v1/object/public/avatars/me.png")]
    pub url: String,
    /// Upload size in bytes
    #[schema(example = 20480)]
    pub size: usize,
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/register", post(register))
        .route("/getByEmail", get(get_by_email))
        .route("/delete", delete(delete_user))
        .route(
            "/upload-avatar",
            post(upload_avatar).layer(DefaultBodyLimit::max(MAX_AVATAR_UPLOAD_BYTES)),
        )
}

/// Register a new user
#[utoipa::path(
    post,
    path = "/users/register",
    tag = "Users",
    request_body = NewUser,
    responses(
        (status = 201, description = "User registered", body = User),
        (status = 400, description = "Malformed JSON body"),
        (status = 500, description = "Storage rejected the record")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<NewUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    let user = state.user_service.register(payload).await?;

    Ok((StatusCode::CREATED, Json(user)))
}

/// Get a user by email (`null` if there is none)
#[utoipa::path(
    get,
    path = "/users/getByEmail",
    tag = "Users",
    params(EmailQuery),
    responses(
        (status = 200, description = "Matching user, or null", body = User),
        (status = 400, description = "Missing email parameter")
    )
)]
pub async fn get_by_email(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<EmailQuery>,
) -> AppResult<Json<Option<User>>> {
    let user = state.user_service.get_user_by_email(&query.email).await?;

    Ok(Json(user))
}

/// Delete a user by email (`null` if there is none)
#[utoipa::path(
    delete,
    path = "/users/delete",
    tag = "Users",
    params(EmailQuery),
    responses(
        (status = 200, description = "Deletion result, or null", body = UserDeletion),
        (status = 400, description = "Missing email parameter")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<EmailQuery>,
) -> AppResult<Json<Option<UserDeletion>>> {
    let deletion = state.user_service.delete_user(&query.email).await?;

    Ok(Json(deletion))
}

/// Upload an avatar and record its public URL
#[utoipa::path(
    post,
    path = "/users/upload-avatar",
    tag = "Users",
    params(EmailQuery),
    request_body(content = AvatarUploadForm, content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Avatar URL recorded", body = AvatarUploadResponse),
        (status = 400, description = "No file uploaded or missing email parameter"),
        (status = 413, description = "Upload exceeds the size limit")
    )
)]
pub async fn upload_avatar(
    State(state): State<AppState>,
    QueryParams(query): QueryParams<EmailQuery>,
    multipart: Multipart,
) -> AppResult<(StatusCode, Json<AvatarUploadResponse>)> {
    let file = read_avatar_file(multipart)
        .await?
        .ok_or_else(|| AppError::bad_request("No file uploaded"))?;

    let upload = state.user_service.update_avatar(&query.email, file).await?;

    Ok((
        StatusCode::CREATED,
        Json(AvatarUploadResponse {
            message: AVATAR_UPLOADED_MESSAGE.to_string(),
            url: upload.url,
            size: upload.size,
        }),
    ))
}

/// Pull the first `file` part that carries a filename; other parts are skipped.
async fn read_avatar_file(mut multipart: Multipart) -> AppResult<Option<AvatarFile>> {
    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        if field.name() != Some(AVATAR_FILE_FIELD) {
            continue;
        }
        let Some(file_name) = field.file_name().map(str::to_string) else {
            continue;
        };

        let bytes = field.bytes().await.map_err(multipart_error)?;

        return Ok(Some(AvatarFile {
            file_name,
            bytes: bytes.to_vec(),
        }));
    }

    Ok(None)
}

/// Keep the body-limit rejection distinct; everything else is a bad request.
fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::payload_too_large(e.body_text())
    } else {
        AppError::bad_request(e.body_text())
    }
}
