//! OpenAPI document for the web API.

use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::web::dto::{
    CreatedMessageResponse, LoginRequest, MessageDetailResponse, ReadReceiptResponse,
    ReceivedMessageResponse, RegisterRequest, SendMessageRequest, SentMessageResponse,
    TokenResponse, UserDetailResponse, UserSummaryResponse,
};
use crate::web::handlers;

#[derive(OpenApi)]
#[openapi(
    info(title = "Messagely API", description = "Direct messaging between registered users"),
    servers((url = "/api")),
    paths(
        handlers::auth::register,
        handlers::auth::login,
        handlers::user::list_users,
        handlers::user::get_user,
        handlers::user::list_received,
        handlers::user::list_sent,
        handlers::message::get_message,
        handlers::message::send_message,
        handlers::message::mark_read,
    ),
    components(schemas(
        RegisterRequest,
        LoginRequest,
        SendMessageRequest,
        TokenResponse,
        UserSummaryResponse,
        UserDetailResponse,
        MessageDetailResponse,
        CreatedMessageResponse,
        ReadReceiptResponse,
        SentMessageResponse,
        ReceivedMessageResponse,
    )),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration and login"),
        (name = "users", description = "User profiles and message lists"),
        (name = "messages", description = "Direct messages")
    )
)]
pub struct ApiDoc;

/// Registers the bearer JWT scheme referenced by `security(("bearer_auth" = []))`.
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            );
        }
    }
}
