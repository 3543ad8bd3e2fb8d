//! Message service for Messagely.
//!
//! This module holds the message access rules: who may read a message, who
//! may mark it read, and how new messages are validated before they are
//! stored. The caller identity is always trusted input from the request
//! layer; the service never re-authenticates.

use chrono::Utc;
use tracing::{debug, info};

use crate::db::{DbPool, UserRepository, UserSummary};
use crate::{MessagelyError, Result};

use super::access::{ensure_can_view, ensure_recipient, ensure_same_user};
use super::repository::MessageRepository;
use super::store::{MessageStore, UserStore};
use super::types::{
    Message, MessageDetail, NewMessage, ReadReceipt, ReceivedMessage, SentMessage,
    MAX_BODY_LENGTH,
};

/// Validate a message body.
fn validate_body(body: &str) -> Result<()> {
    if body.trim().is_empty() {
        return Err(MessagelyError::Validation(
            "message body is required".to_string(),
        ));
    }
    if body.chars().count() > MAX_BODY_LENGTH {
        return Err(MessagelyError::Validation(format!(
            "message body must be at most {MAX_BODY_LENGTH} characters"
        )));
    }
    Ok(())
}

/// Service for message operations.
pub struct MessageService<U, M> {
    users: U,
    messages: M,
}

impl<'a> MessageService<UserRepository<'a>, MessageRepository<'a>> {
    /// Create a service backed by the sqlx repositories on `pool`.
    pub fn with_pool(pool: &'a DbPool) -> Self {
        Self::new(UserRepository::new(pool), MessageRepository::new(pool))
    }
}

impl<U: UserStore, M: MessageStore> MessageService<U, M> {
    /// Create a new MessageService from its stores.
    pub fn new(users: U, messages: M) -> Self {
        Self { users, messages }
    }

    async fn load(&self, message_id: i64) -> Result<Message> {
        self.messages
            .find_by_id(message_id)
            .await?
            .ok_or_else(|| MessagelyError::NotFound("message".to_string()))
    }

    async fn summary(&self, username: &str) -> Result<UserSummary> {
        self.users
            .get_summary(username)
            .await?
            .ok_or_else(|| MessagelyError::NotFound("user".to_string()))
    }

    /// Get a message with sender and recipient identities.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the message doesn't exist
    /// - `Permission` if the caller is neither sender nor recipient
    pub async fn get_message(&self, caller: &str, message_id: i64) -> Result<MessageDetail> {
        let message = self.load(message_id).await?;
        ensure_can_view(&message, caller)?;

        let from_user = self.summary(&message.from_username).await?;
        let to_user = self.summary(&message.to_username).await?;

        Ok(MessageDetail {
            id: message.id,
            body: message.body,
            sent_at: message.sent_at,
            read_at: message.read_at,
            from_user,
            to_user,
        })
    }

    /// Send a message from the caller to `to_username`.
    ///
    /// # Errors
    ///
    /// Returns `Validation` if:
    /// - The body is empty or too long
    /// - The recipient is missing or doesn't exist
    /// - The caller no longer exists
    pub async fn create_message(
        &self,
        caller: &str,
        to_username: &str,
        body: &str,
    ) -> Result<Message> {
        validate_body(body)?;

        let to_username = to_username.trim();
        if to_username.is_empty() {
            return Err(MessagelyError::Validation(
                "recipient is required".to_string(),
            ));
        }
        if !self.users.user_exists(to_username).await? {
            return Err(MessagelyError::Validation(format!(
                "recipient '{to_username}' does not exist"
            )));
        }
        if !self.users.user_exists(caller).await? {
            return Err(MessagelyError::Validation(
                "sender does not exist".to_string(),
            ));
        }

        let message = self
            .messages
            .insert(&NewMessage::new(caller, to_username, body))
            .await?;

        info!(
            message_id = message.id,
            from = %message.from_username,
            to = %message.to_username,
            "Message sent"
        );
        Ok(message)
    }

    /// Mark a message read.
    ///
    /// Calling this again overwrites `read_at` with the current time; the
    /// recipient check is evaluated on every call.
    ///
    /// # Errors
    ///
    /// - `NotFound` if the message doesn't exist
    /// - `Permission` if the caller is not the recipient
    pub async fn mark_read(&self, caller: &str, message_id: i64) -> Result<ReadReceipt> {
        let message = self.load(message_id).await?;
        ensure_recipient(&message, caller)?;

        let read_at = Utc::now();
        if !self.messages.update_read_at(message.id, read_at).await? {
            return Err(MessagelyError::NotFound("message".to_string()));
        }

        debug!(message_id = message.id, reader = caller, "Message marked read");
        Ok(ReadReceipt {
            id: message.id,
            read_at,
        })
    }

    /// List messages sent by `username`. Only that user may list them.
    pub async fn list_sent(&self, caller: &str, username: &str) -> Result<Vec<SentMessage>> {
        ensure_same_user(caller, username)?;
        if !self.users.user_exists(username).await? {
            return Err(MessagelyError::NotFound("user".to_string()));
        }
        self.messages.list_from(username).await
    }

    /// List messages received by `username`. Only that user may list them.
    pub async fn list_received(
        &self,
        caller: &str,
        username: &str,
    ) -> Result<Vec<ReceivedMessage>> {
        ensure_same_user(caller, username)?;
        if !self.users.user_exists(username).await? {
            return Err(MessagelyError::NotFound("user".to_string()));
        }
        self.messages.list_to(username).await
    }
}
