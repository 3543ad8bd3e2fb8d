//! Direct messages for Messagely.
//!
//! This module provides:
//! - Message types and the unread → read lifecycle
//! - Access rules (who may view, who may mark read)
//! - Store contracts and their sqlx implementations
//! - The message service that ties them together

mod access;
mod repository;
mod service;
mod store;
mod types;

pub use access::{ensure_can_view, ensure_recipient, ensure_same_user};
pub use repository::MessageRepository;
pub use service::MessageService;
pub use store::{MessageStore, UserStore};
pub use types::{
    Message, MessageDetail, NewMessage, ReadReceipt, ReceivedMessage, SentMessage,
    MAX_BODY_LENGTH,
};
