//! Web API module for Messagely.
//!
//! This module exposes registration, login, user lookups and the direct
//! message operations as a JSON REST API.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod openapi;
pub mod router;
pub mod server;

pub use error::ApiError;
pub use handlers::AppState;
pub use middleware::JwtState;
pub use router::{create_app, create_router};
pub use server::WebServer;
