//! Router configuration for the web API.

use axum::{
    middleware,
    routing::{get, post},
    Json, Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;

use super::handlers::{
    get_message, get_user, list_received, list_sent, list_users, login, mark_read, register,
    send_message, AppState,
};
use super::middleware::{create_cors_layer, jwt_auth, JwtState};
use super::openapi::ApiDoc;

/// Create the main API router.
pub fn create_router(
    app_state: Arc<AppState>,
    jwt_state: Arc<JwtState>,
    cors_origins: &[String],
) -> Router {
    // Auth routes (no authentication required)
    let auth_routes = Router::new()
        .route("/register", post(register))
        .route("/login", post(login));

    // User routes (authentication required)
    let user_routes = Router::new()
        .route("/", get(list_users))
        .route("/:username", get(get_user))
        .route("/:username/to", get(list_received))
        .route("/:username/from", get(list_sent));

    // Message routes (authentication required)
    let message_routes = Router::new()
        .route("/", post(send_message))
        .route("/:id", get(get_message))
        .route("/:id/read", post(mark_read));

    let api_routes = Router::new()
        .nest("/auth", auth_routes)
        .nest("/users", user_routes)
        .nest("/messages", message_routes);

    let jwt_state_for_middleware = jwt_state.clone();

    Router::new()
        .nest("/api", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(create_cors_layer(cors_origins))
                .layer(middleware::from_fn(move |req, next| {
                    let state = jwt_state_for_middleware.clone();
                    jwt_auth(state, req, next)
                })),
        )
        .with_state(app_state)
}

/// Create a health check router.
pub fn create_health_router() -> Router {
    Router::new().route("/health", get(health_check))
}

/// Health check handler.
async fn health_check() -> &'static str {
    "OK"
}

/// Create the router serving the OpenAPI document.
pub fn create_openapi_router() -> Router {
    Router::new().route("/api-docs/openapi.json", get(openapi_json))
}

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Assemble the full application: API, health check and OpenAPI document,
/// with gzip compression.
pub fn create_app(
    app_state: Arc<AppState>,
    jwt_state: Arc<JwtState>,
    cors_origins: &[String],
) -> Router {
    create_router(app_state, jwt_state, cors_origins)
        .merge(create_health_router())
        .merge(create_openapi_router())
        .layer(CompressionLayer::new())
}
