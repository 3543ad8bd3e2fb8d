//! API handlers for the web API.

pub mod auth;
pub mod message;
pub mod user;

pub use auth::*;
pub use message::*;
pub use user::*;
