//! Store contracts consumed by [`MessageService`](super::MessageService).
//!
//! The service only talks to storage through these traits; the sqlx
//! repositories implement them and are injected at construction time.

use std::future::Future;

use chrono::{DateTime, Utc};

use crate::db::{UserRepository, UserSummary};
use crate::Result;

use super::types::{Message, NewMessage, ReceivedMessage, SentMessage};

/// User lookups needed by the message core.
pub trait UserStore {
    /// Whether a user with this username exists.
    fn user_exists(&self, username: &str) -> impl Future<Output = Result<bool>> + Send;

    /// Identity summary for a user, if it exists.
    fn get_summary(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Option<UserSummary>>> + Send;
}

/// Message persistence needed by the message core.
pub trait MessageStore {
    /// Persist a new unread message and return it with its generated id.
    fn insert(&self, message: &NewMessage) -> impl Future<Output = Result<Message>> + Send;

    /// Find a message by id.
    fn find_by_id(&self, id: i64) -> impl Future<Output = Result<Option<Message>>> + Send;

    /// Set `read_at`, overwriting any earlier value.
    ///
    /// Returns false if no message has this id.
    fn update_read_at(
        &self,
        id: i64,
        read_at: DateTime<Utc>,
    ) -> impl Future<Output = Result<bool>> + Send;

    /// Messages sent by a user, newest first.
    fn list_from(&self, username: &str) -> impl Future<Output = Result<Vec<SentMessage>>> + Send;

    /// Messages received by a user, newest first.
    fn list_to(
        &self,
        username: &str,
    ) -> impl Future<Output = Result<Vec<ReceivedMessage>>> + Send;
}

impl UserStore for UserRepository<'_> {
    async fn user_exists(&self, username: &str) -> Result<bool> {
        self.username_exists(username).await
    }

    async fn get_summary(&self, username: &str) -> Result<Option<UserSummary>> {
        UserRepository::get_summary(self, username).await
    }
}
