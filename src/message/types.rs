//! Message types for Messagely.

use chrono::{DateTime, Utc};

use crate::db::UserSummary;

/// Maximum length for a message body, in characters.
pub const MAX_BODY_LENGTH: usize = 10_000;

/// A direct message between two users.
#[derive(Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Message {
    /// Message ID.
    pub id: i64,
    /// Sender username.
    pub from_username: String,
    /// Recipient username.
    pub to_username: String,
    /// Message body.
    pub body: String,
    /// When the message was sent.
    pub sent_at: DateTime<Utc>,
    /// When the recipient marked the message read (None while unread).
    pub read_at: Option<DateTime<Utc>>,
}

impl Message {
    /// Whether the recipient has read the message.
    pub fn is_read(&self) -> bool {
        self.read_at.is_some()
    }

    /// Whether `username` is the sender.
    pub fn is_sender(&self, username: &str) -> bool {
        self.from_username == username
    }

    /// Whether `username` is the recipient.
    pub fn is_recipient(&self, username: &str) -> bool {
        self.to_username == username
    }

    /// Whether `username` is the sender or the recipient.
    pub fn is_participant(&self, username: &str) -> bool {
        self.is_sender(username) || self.is_recipient(username)
    }
}

/// New message for creation.
#[derive(Debug, Clone)]
pub struct NewMessage {
    pub from_username: String,
    pub to_username: String,
    pub body: String,
    pub sent_at: DateTime<Utc>,
}

impl NewMessage {
    /// Create a new message stamped with the current time.
    pub fn new(
        from_username: impl Into<String>,
        to_username: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            from_username: from_username.into(),
            to_username: to_username.into(),
            body: body.into(),
            sent_at: Utc::now(),
        }
    }
}

/// A message with sender and recipient identities resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageDetail {
    pub id: i64,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
    pub from_user: UserSummary,
    pub to_user: UserSummary,
}

/// Result of marking a message read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadReceipt {
    pub id: i64,
    pub read_at: DateTime<Utc>,
}

/// A message in a user's sent list, with the recipient resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct SentMessage {
    pub id: i64,
    pub to_user: UserSummary,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
}

/// A message in a user's inbox, with the sender resolved.
#[derive(Debug, Clone, PartialEq)]
pub struct ReceivedMessage {
    pub id: i64,
    pub from_user: UserSummary,
    pub body: String,
    pub sent_at: DateTime<Utc>,
    pub read_at: Option<DateTime<Utc>>,
}
