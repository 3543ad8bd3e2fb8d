//! Response DTOs for the web API.
//!
//! Timestamps are rendered as RFC 3339 strings. Unread messages carry
//! `read_at: null`.

use serde::Serialize;
use utoipa::ToSchema;

use crate::db::{User, UserSummary};
use crate::message::{Message, MessageDetail, ReadReceipt, ReceivedMessage, SentMessage};

/// Generic API response wrapper.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a new API response.
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// Token issued by register and login.
#[derive(Debug, Serialize, ToSchema)]
pub struct TokenResponse {
    /// Access token (JWT).
    pub token: String,
}

/// Public user information.
#[derive(Debug, Serialize, ToSchema)]
pub struct UserSummaryResponse {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

impl From<UserSummary> for UserSummaryResponse {
    fn from(user: UserSummary) -> Self {
        Self {
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            phone: user.phone,
        }
    }
}

/// Full user information (for GET /api/users/{username}).
#[derive(Debug, Serialize, ToSchema)]
pub struct UserDetailResponse {
    pub username: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub join_at: String,
    pub last_login_at: Option<String>,
}

impl From<User> for UserDetailResponse {
    fn from(user: User) -> Self {
        Self {
            username: user.username,
            first_name: user.first_name,
            last_name: user.last_name,
            phone: user.phone,
            join_at: user.join_at.to_rfc3339(),
            last_login_at: user.last_login_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// Message with both participants resolved.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageDetailResponse {
    pub id: i64,
    pub body: String,
    pub sent_at: String,
    pub read_at: Option<String>,
    pub from_user: UserSummaryResponse,
    pub to_user: UserSummaryResponse,
}

impl From<MessageDetail> for MessageDetailResponse {
    fn from(detail: MessageDetail) -> Self {
        Self {
            id: detail.id,
            body: detail.body,
            sent_at: detail.sent_at.to_rfc3339(),
            read_at: detail.read_at.map(|t| t.to_rfc3339()),
            from_user: detail.from_user.into(),
            to_user: detail.to_user.into(),
        }
    }
}

/// Newly created message.
#[derive(Debug, Serialize, ToSchema)]
pub struct CreatedMessageResponse {
    pub id: i64,
    pub from_username: String,
    pub to_username: String,
    pub body: String,
    pub sent_at: String,
}

impl From<Message> for CreatedMessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            from_username: message.from_username,
            to_username: message.to_username,
            body: message.body,
            sent_at: message.sent_at.to_rfc3339(),
        }
    }
}

/// Result of marking a message read.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReadReceiptResponse {
    pub id: i64,
    pub read_at: String,
}

impl From<ReadReceipt> for ReadReceiptResponse {
    fn from(receipt: ReadReceipt) -> Self {
        Self {
            id: receipt.id,
            read_at: receipt.read_at.to_rfc3339(),
        }
    }
}

/// Entry in a user's sent list.
#[derive(Debug, Serialize, ToSchema)]
pub struct SentMessageResponse {
    pub id: i64,
    pub to_user: UserSummaryResponse,
    pub body: String,
    pub sent_at: String,
    pub read_at: Option<String>,
}

impl From<SentMessage> for SentMessageResponse {
    fn from(message: SentMessage) -> Self {
        Self {
            id: message.id,
            to_user: message.to_user.into(),
            body: message.body,
            sent_at: message.sent_at.to_rfc3339(),
            read_at: message.read_at.map(|t| t.to_rfc3339()),
        }
    }
}

/// Entry in a user's inbox.
#[derive(Debug, Serialize, ToSchema)]
pub struct ReceivedMessageResponse {
    pub id: i64,
    pub from_user: UserSummaryResponse,
    pub body: String,
    pub sent_at: String,
    pub read_at: Option<String>,
}

impl From<ReceivedMessage> for ReceivedMessageResponse {
    fn from(message: ReceivedMessage) -> Self {
        Self {
            id: message.id,
            from_user: message.from_user.into(),
            body: message.body,
            sent_at: message.sent_at.to_rfc3339(),
            read_at: message.read_at.map(|t| t.to_rfc3339()),
        }
    }
}
