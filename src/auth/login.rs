//! Credential checks for Messagely.

use tracing::{debug, info};

use crate::auth::verify_password;
use crate::db::{User, UserRepository};
use crate::{MessagelyError, Result};

/// Message for every credential failure, so usernames can't be probed.
const INVALID_CREDENTIALS: &str = "invalid username or password";

/// Check a username/password pair and record the login.
///
/// Returns the user on success. Unknown users and wrong passwords both fail
/// with the same `Auth` error.
pub async fn authenticate(
    repo: &UserRepository<'_>,
    username: &str,
    password: &str,
) -> Result<User> {
    let user = repo
        .get_by_username(username)
        .await?
        .ok_or_else(|| MessagelyError::Auth(INVALID_CREDENTIALS.to_string()))?;

    if let Err(e) = verify_password(password, &user.password) {
        debug!(username, error = %e, "Password verification failed");
        return Err(MessagelyError::Auth(INVALID_CREDENTIALS.to_string()));
    }

    repo.update_last_login(&user.username).await?;
    info!(username = %user.username, "User logged in");

    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::{register, RegistrationRequest};
    use crate::db::Database;

    async fn setup() -> Database {
        let db = Database::open_in_memory().await.unwrap();
        let repo = UserRepository::new(db.pool());
        register(
            &repo,
            &RegistrationRequest::new("alice", "password123", "Alice", "A", "555-0100"),
        )
        .await
        .unwrap();
        db
    }

    #[tokio::test]
    async fn test_authenticate_success_updates_last_login() {
        let db = setup().await;
        let repo = UserRepository::new(db.pool());
        let before = repo.get_by_username("alice").await.unwrap().unwrap();

        let user = authenticate(&repo, "alice", "password123").await.unwrap();
        assert_eq!(user.username, "alice");

        let after = repo.get_by_username("alice").await.unwrap().unwrap();
        assert!(after.last_login_at >= before.last_login_at);
    }

    #[tokio::test]
    async fn test_authenticate_wrong_password() {
        let db = setup().await;
        let repo = UserRepository::new(db.pool());

        let result = authenticate(&repo, "alice", "wrong-password").await;
        match result {
            Err(MessagelyError::Auth(msg)) => assert_eq!(msg, INVALID_CREDENTIALS),
            other => panic!("expected auth error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_authenticate_unknown_user() {
        let db = setup().await;
        let repo = UserRepository::new(db.pool());

        let result = authenticate(&repo, "nobody", "password123").await;
        match result {
            Err(MessagelyError::Auth(msg)) => assert_eq!(msg, INVALID_CREDENTIALS),
            other => panic!("expected auth error, got {other:?}"),
        }
    }
}
