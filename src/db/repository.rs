//! User repository for Messagely.
//!
//! This module provides CRUD operations for users in the database.

use chrono::Utc;

use super::user::{NewUser, User, UserSummary};
use super::DbPool;
use crate::Result;

/// Repository for user operations.
#[derive(Clone, Copy)]
pub struct UserRepository<'a> {
    pool: &'a DbPool,
}

impl<'a> UserRepository<'a> {
    /// Create a new UserRepository with the given database pool reference.
    pub fn new(pool: &'a DbPool) -> Self {
        Self { pool }
    }

    /// Create a new user in the database.
    ///
    /// `join_at` and `last_login_at` are both set to the current time.
    pub async fn create(&self, new_user: &NewUser) -> Result<User> {
        let now = Utc::now();
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (username, password, first_name, last_name, phone, join_at, last_login_at)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING username, password, first_name, last_name, phone, join_at, last_login_at",
        )
        .bind(&new_user.username)
        .bind(&new_user.password)
        .bind(&new_user.first_name)
        .bind(&new_user.last_name)
        .bind(&new_user.phone)
        .bind(now)
        .bind(now)
        .fetch_one(self.pool)
        .await?;

        Ok(user)
    }

    /// Get a user by username.
    pub async fn get_by_username(&self, username: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT username, password, first_name, last_name, phone, join_at, last_login_at
             FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        Ok(user)
    }

    /// Get the identity summary of a user.
    pub async fn get_summary(&self, username: &str) -> Result<Option<UserSummary>> {
        let summary = sqlx::query_as::<_, UserSummary>(
            "SELECT username, first_name, last_name, phone FROM users WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(self.pool)
        .await?;

        Ok(summary)
    }

    /// Check whether a username is registered.
    pub async fn username_exists(&self, username: &str) -> Result<bool> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE username = $1")
            .bind(username)
            .fetch_one(self.pool)
            .await?;
        Ok(count > 0)
    }

    /// Update the last login timestamp for a user.
    ///
    /// Returns false if the user does not exist.
    pub async fn update_last_login(&self, username: &str) -> Result<bool> {
        let result = sqlx::query("UPDATE users SET last_login_at = $1 WHERE username = $2")
            .bind(Utc::now())
            .bind(username)
            .execute(self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List all users, ordered by username.
    pub async fn list_summaries(&self) -> Result<Vec<UserSummary>> {
        let users = sqlx::query_as::<_, UserSummary>(
            "SELECT username, first_name, last_name, phone FROM users ORDER BY username",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    /// Count all users.
    pub async fn count(&self) -> Result<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }
}
