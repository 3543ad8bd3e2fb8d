//! Message handlers for the web API.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::message::MessageService;
use crate::web::dto::{
    ApiResponse, CreatedMessageResponse, MessageDetailResponse, ReadReceiptResponse,
    SendMessageRequest, ValidatedJson,
};
use crate::web::error::ApiError;
use crate::web::handlers::AppState;
use crate::web::middleware::AuthUser;

/// GET /api/messages/:id - Get a message the caller sent or received.
#[utoipa::path(
    get,
    path = "/messages/{id}",
    tag = "messages",
    params(
        ("id" = i64, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "Message detail", body = MessageDetailResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller is neither sender nor recipient"),
        (status = 404, description = "Message not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_message(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<MessageDetailResponse>>, ApiError> {
    let detail = MessageService::with_pool(state.db.pool())
        .get_message(auth.username(), id)
        .await?;

    Ok(Json(ApiResponse::new(detail.into())))
}

/// POST /api/messages - Send a message from the caller.
#[utoipa::path(
    post,
    path = "/messages",
    tag = "messages",
    request_body = SendMessageRequest,
    responses(
        (status = 201, description = "Message sent", body = CreatedMessageResponse),
        (status = 400, description = "Malformed JSON"),
        (status = 401, description = "Unauthorized"),
        (status = 422, description = "Invalid body or unknown recipient")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn send_message(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<SendMessageRequest>,
) -> Result<(StatusCode, Json<ApiResponse<CreatedMessageResponse>>), ApiError> {
    let message = MessageService::with_pool(state.db.pool())
        .create_message(auth.username(), &req.to_username, &req.body)
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::new(message.into()))))
}

/// POST /api/messages/:id/read - Mark a message read.
#[utoipa::path(
    post,
    path = "/messages/{id}/read",
    tag = "messages",
    params(
        ("id" = i64, Path, description = "Message ID")
    ),
    responses(
        (status = 200, description = "Message marked read", body = ReadReceiptResponse),
        (status = 401, description = "Unauthorized"),
        (status = 403, description = "Caller is not the recipient"),
        (status = 404, description = "Message not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn mark_read(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<Json<ApiResponse<ReadReceiptResponse>>, ApiError> {
    let receipt = MessageService::with_pool(state.db.pool())
        .mark_read(auth.username(), id)
        .await?;

    Ok(Json(ApiResponse::new(receipt.into())))
}
