//! Authentication handlers.

use axum::{extract::State, http::StatusCode, Json};
use jsonwebtoken::{encode, EncodingKey, Header};
use std::sync::Arc;

use crate::auth::{authenticate, register as register_user, RegistrationRequest};
use crate::db::UserRepository;
use crate::web::dto::{ApiResponse, LoginRequest, RegisterRequest, TokenResponse, ValidatedJson};
use crate::web::error::ApiError;
use crate::web::middleware::JwtClaims;
use crate::{Database, MessagelyError};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database handle (the pool inside is shared).
    pub db: Database,
    /// JWT encoding key.
    pub encoding_key: EncodingKey,
    /// Access token expiry in seconds.
    pub token_expiry_secs: u64,
}

impl AppState {
    /// Create a new application state.
    pub fn new(db: Database, jwt_secret: &str, token_expiry_secs: u64) -> Self {
        Self {
            db,
            encoding_key: EncodingKey::from_secret(jwt_secret.as_bytes()),
            token_expiry_secs,
        }
    }

    /// Issue an access token for a user.
    pub fn issue_token(&self, username: &str) -> Result<String, ApiError> {
        let now = chrono::Utc::now().timestamp() as u64;
        let claims = JwtClaims {
            sub: username.to_string(),
            iat: now,
            exp: now.saturating_add(self.token_expiry_secs),
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key).map_err(|e| {
            tracing::error!("Failed to encode JWT: {}", e);
            ApiError::internal("Failed to generate token")
        })
    }
}

/// POST /api/auth/register - Register a new user.
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "auth",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "User registered", body = TokenResponse),
        (status = 409, description = "Username already exists"),
        (status = 422, description = "Validation error")
    )
)]
pub async fn register(
    State(state): State<Arc<AppState>>,
    ValidatedJson(req): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<ApiResponse<TokenResponse>>), ApiError> {
    let repo = UserRepository::new(state.db.pool());
    let request = RegistrationRequest::new(
        req.username,
        req.password,
        req.first_name,
        req.last_name,
        req.phone,
    );

    let user = register_user(&repo, &request)
        .await
        .map_err(MessagelyError::from)?;

    let token = state.issue_token(&user.username)?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::new(TokenResponse { token })),
    ))
}

/// POST /api/auth/login - User login.
#[utoipa::path(
    post,
    path = "/auth/login",
    tag = "auth",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Login successful", body = TokenResponse),
        (status = 401, description = "Invalid credentials")
    )
)]
pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<ApiResponse<TokenResponse>>, ApiError> {
    if req.username.is_empty() || req.password.is_empty() {
        return Err(ApiError::bad_request("Username and password are required"));
    }

    let repo = UserRepository::new(state.db.pool());
    let user = authenticate(&repo, &req.username, &req.password).await?;

    let token = state.issue_token(&user.username)?;
    Ok(Json(ApiResponse::new(TokenResponse { token })))
}
