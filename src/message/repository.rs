//! Message repository for Messagely.

use chrono::{DateTime, Utc};

use crate::db::{DbPool, UserSummary};
use crate::Result;

use super::store::MessageStore;
use super::types::{Message, NewMessage, ReceivedMessage, SentMessage};

/// Row of a message joined with the other party's identity.
#[derive(sqlx::FromRow)]
struct CounterpartRow {
    id: i64,
    body: String,
    sent_at: DateTime<Utc>,
    read_at: Option<DateTime<Utc>>,
    username: String,
    first_name: String,
    last_name: String,
    phone: String,
}

impl CounterpartRow {
    fn user(&self) -> UserSummary {
        UserSummary {
            username: self.username.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phone: self.phone.clone(),
        }
    }
}

impl From<CounterpartRow> for SentMessage {
    fn from(row: CounterpartRow) -> Self {
        Self {
            id: row.id,
            to_user: row.user(),
            body: row.body,
            sent_at: row.sent_at,
            read_at: row.read_at,
        }
    }
}

impl From<CounterpartRow> for ReceivedMessage {
    fn from(row: CounterpartRow) -> Self {
        Self {
            id: row.id,
            from_user: row.user(),
            body: row.body,
            sent_at: row.sent_at,
            read_at: row.read_at,
        }
    }
}

/// Repository for message operations.
#[derive(Clone, Copy)]
pub struct MessageRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> MessageRepository<'a> {
    /// Create a new repository instance.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Create a new message. It starts unread.
    pub async fn create(&self, message: &NewMessage) -> Result<Message> {
        let created = sqlx::query_as::<_, Message>(
            "INSERT INTO messages (from_username, to_username, body, sent_at)
             VALUES ($1, $2, $3, $4)
             RETURNING id, from_username, to_username, body, sent_at, read_at",
        )
        .bind(&message.from_username)
        .bind(&message.to_username)
        .bind(&message.body)
        .bind(message.sent_at)
        .fetch_one(self.pool)
        .await?;

        Ok(created)
    }

    /// Get a message by ID.
    pub async fn get_by_id(&self, id: i64) -> Result<Option<Message>> {
        let message = sqlx::query_as::<_, Message>(
            "SELECT id, from_username, to_username, body, sent_at, read_at
             FROM messages WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(message)
    }

    /// Set the read timestamp of a message.
    pub async fn mark_read(&self, id: i64, read_at: DateTime<Utc>) -> Result<bool> {
        let result = sqlx::query("UPDATE messages SET read_at = $1 WHERE id = $2")
            .bind(read_at)
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// List messages sent by a user, with recipient identities.
    ///
    /// Newest first; ids grow in insertion order.
    pub async fn list_sent(&self, username: &str) -> Result<Vec<SentMessage>> {
        let rows = sqlx::query_as::<_, CounterpartRow>(
            "SELECT m.id, m.body, m.sent_at, m.read_at,
                    u.username, u.first_name, u.last_name, u.phone
             FROM messages m
             JOIN users u ON u.username = m.to_username
             WHERE m.from_username = $1
             ORDER BY m.id DESC",
        )
        .bind(username)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(SentMessage::from).collect())
    }

    /// List messages received by a user, with sender identities.
    pub async fn list_received(&self, username: &str) -> Result<Vec<ReceivedMessage>> {
        let rows = sqlx::query_as::<_, CounterpartRow>(
            "SELECT m.id, m.body, m.sent_at, m.read_at,
                    u.username, u.first_name, u.last_name, u.phone
             FROM messages m
             JOIN users u ON u.username = m.from_username
             WHERE m.to_username = $1
             ORDER BY m.id DESC",
        )
        .bind(username)
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(ReceivedMessage::from).collect())
    }
}

impl MessageStore for MessageRepository<'_> {
    async fn insert(&self, message: &NewMessage) -> Result<Message> {
        self.create(message).await
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<Message>> {
        self.get_by_id(id).await
    }

    async fn update_read_at(&self, id: i64, read_at: DateTime<Utc>) -> Result<bool> {
        self.mark_read(id, read_at).await
    }

    async fn list_from(&self, username: &str) -> Result<Vec<SentMessage>> {
        self.list_sent(username).await
    }

    async fn list_to(&self, username: &str) -> Result<Vec<ReceivedMessage>> {
        self.list_received(username).await
    }
}
