//! Messagely - direct messaging between registered users.
//!
//! A JSON web API where users register, log in with a bearer token, send
//! each other messages and mark received messages read.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod message;
pub mod web;

pub use auth::{
    authenticate, hash_password, register, validate_password, verify_password, PasswordError,
    RegistrationError, RegistrationRequest, ValidationError,
};
pub use config::Config;
pub use db::{Database, DbPool, NewUser, User, UserRepository, UserSummary};
pub use error::{MessagelyError, Result};
pub use message::{
    Message, MessageDetail, MessageRepository, MessageService, NewMessage, ReadReceipt,
    ReceivedMessage, SentMessage,
};
pub use web::WebServer;
