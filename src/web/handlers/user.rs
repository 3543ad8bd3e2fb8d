//! User handlers for the web API.

use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;

use crate::db::UserRepository;
use crate::message::{ensure_same_user, MessageService};
use crate::web::dto::{
    ApiResponse, ReceivedMessageResponse, SentMessageResponse, UserDetailResponse,
    UserSummaryResponse,
};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;
use crate::web::middleware::AuthUser;
use crate::MessagelyError;

/// GET /api/users - List all users.
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    responses(
        (status = 200, description = "All users, ordered by username", body = Vec<UserSummaryResponse>),
        (status = 401, description = "Unauthorized")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_users(
    State(state): State<Arc<AppState>>,
    AuthUser(_claims): AuthUser,
) -> Result<Json<ApiResponse<Vec<UserSummaryResponse>>>, ApiError> {
    let users = UserRepository::new(state.db.pool())
        .list_summaries()
        .await?;

    Ok(Json(ApiResponse::new(
        users.into_iter().map(UserSummaryResponse::from).collect(),
    )))
}

/// GET /api/users/:username - Get a user's own profile.
#[utoipa::path(
    get,
    path = "/users/{username}",
    tag = "users",
    params(
        ("username" = String, Path, description = "Username")
    ),
    responses(
        (status = 200, description = "User detail", body = UserDetailResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not your profile"),
        (status = 404, description = "User not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Path(username): Path<String>,
) -> Result<Json<ApiResponse<UserDetailResponse>>, ApiError> {
    ensure_same_user(auth.username(), &username)?;

    let user = UserRepository::new(state.db.pool())
        .get_by_username(&username)
        .await?
        .ok_or_else(|| MessagelyError::NotFound("user".to_string()))?;

    Ok(Json(ApiResponse::new(user.into())))
}

/// GET /api/users/:username/to - Messages received by a user.
#[utoipa::path(
    get,
    path = "/users/{username}/to",
    tag = "users",
    params(
        ("username" = String, Path, description = "Username")
    ),
    responses(
        (status = 200, description = "Received messages, newest first", body = Vec<ReceivedMessageResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not your inbox"),
        (status = 404, description = "User not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_received(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Path(username): Path<String>,
) -> Result<Json<ApiResponse<Vec<ReceivedMessageResponse>>>, ApiError> {
    let messages = MessageService::with_pool(state.db.pool())
        .list_received(auth.username(), &username)
        .await?;

    Ok(Json(ApiResponse::new(
        messages.into_iter().map(ReceivedMessageResponse::from).collect(),
    )))
}

/// GET /api/users/:username/from - Messages sent by a user.
#[utoipa::path(
    get,
    path = "/users/{username}/from",
    tag = "users",
    params(
        ("username" = String, Path, description = "Username")
    ),
    responses(
        (status = 200, description = "Sent messages, newest first", body = Vec<SentMessageResponse>),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Not your outbox"),
        (status = 404, description = "User not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_sent(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Path(username): Path<String>,
) -> Result<Json<ApiResponse<Vec<SentMessageResponse>>>, ApiError> {
    let messages = MessageService::with_pool(state.db.pool())
        .list_sent(auth.username(), &username)
        .await?;

    Ok(Json(ApiResponse::new(
        messages.into_iter().map(SentMessageResponse::from).collect(),
    )))
}
