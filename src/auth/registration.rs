//! User registration for Messagely.

use thiserror::Error;
use tracing::info;

use crate::auth::validation::{validate_registration, ValidationError};
use crate::auth::{hash_password, PasswordError};
use crate::db::{NewUser, User, UserRepository};
use crate::MessagelyError;

/// Registration-specific errors.
#[derive(Error, Debug)]
pub enum RegistrationError {
    /// Validation failed.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Username already exists.
    #[error("username already exists")]
    UsernameExists,

    /// Password hashing failed.
    #[error("password error: {0}")]
    Password(#[from] PasswordError),

    /// Storage failed.
    #[error(transparent)]
    Storage(MessagelyError),
}

impl From<MessagelyError> for RegistrationError {
    fn from(err: MessagelyError) -> Self {
        match err {
            // Lost a race with a concurrent registration of the same name
            MessagelyError::Conflict(_) => RegistrationError::UsernameExists,
            other => RegistrationError::Storage(other),
        }
    }
}

impl From<RegistrationError> for MessagelyError {
    fn from(err: RegistrationError) -> Self {
        match err {
            RegistrationError::Validation(e) => MessagelyError::Validation(e.to_string()),
            RegistrationError::UsernameExists => {
                MessagelyError::Conflict("username already exists".to_string())
            }
            RegistrationError::Password(e @ (PasswordError::TooShort | PasswordError::TooLong)) => {
                MessagelyError::Validation(e.to_string())
            }
            RegistrationError::Password(e) => MessagelyError::Internal(e.to_string()),
            RegistrationError::Storage(e) => e,
        }
    }
}

/// Registration request data.
#[derive(Debug, Clone)]
pub struct RegistrationRequest {
    /// Desired username (3-30 alphanumeric + underscore).
    pub username: String,
    /// Password (8-128 characters).
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
}

impl RegistrationRequest {
    /// Create a new registration request.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: phone.into(),
        }
    }
}

/// Register a new user.
///
/// Validates the input, checks the username is free, hashes the password and
/// stores the user. Names and phone are stored trimmed.
pub async fn register(
    repo: &UserRepository<'_>,
    request: &RegistrationRequest,
) -> Result<User, RegistrationError> {
    validate_registration(
        &request.username,
        &request.password,
        &request.first_name,
        &request.last_name,
        &request.phone,
    )?;

    if repo.username_exists(&request.username).await? {
        return Err(RegistrationError::UsernameExists);
    }

    let password_hash = hash_password(&request.password)?;

    let new_user = NewUser::new(
        &request.username,
        password_hash,
        request.first_name.trim(),
        request.last_name.trim(),
        request.phone.trim(),
    );
    let user = repo.create(&new_user).await?;

    info!(username = %user.username, "User registered");
    Ok(user)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::verify_password;
    use crate::db::Database;

    fn alice() -> RegistrationRequest {
        RegistrationRequest::new("alice", "password123", " Alice ", "Anderson", "555-0100")
    }

    #[tokio::test]
    async fn test_register_success() {
        let db = Database::open_in_memory().await.unwrap();
        let repo = UserRepository::new(db.pool());

        let user = register(&repo, &alice()).await.unwrap();

        assert_eq!(user.username, "alice");
        assert_eq!(user.first_name, "Alice");
        assert_eq!(user.last_name, "Anderson");
        assert_eq!(user.phone, "555-0100");
        assert_ne!(user.password, "password123");
        assert!(verify_password("password123", &user.password).is_ok());
    }

    #[tokio::test]
    async fn test_register_duplicate_username() {
        let db = Database::open_in_memory().await.unwrap();
        let repo = UserRepository::new(db.pool());

        register(&repo, &alice()).await.unwrap();
        let result = register(&repo, &alice()).await;

        assert!(matches!(result, Err(RegistrationError::UsernameExists)));
    }

    #[tokio::test]
    async fn test_register_invalid_input() {
        let db = Database::open_in_memory().await.unwrap();
        let repo = UserRepository::new(db.pool());

        let request = RegistrationRequest::new("al", "password123", "Al", "A", "555");
        let result = register(&repo, &request).await;
        assert!(matches!(
            result,
            Err(RegistrationError::Validation(ValidationError::UsernameTooShort))
        ));

        let request = RegistrationRequest::new("alice", "short", "Alice", "A", "555");
        let result = register(&repo, &request).await;
        assert!(matches!(
            result,
            Err(RegistrationError::Validation(ValidationError::PasswordTooShort))
        ));

        assert_eq!(repo.count().await.unwrap(), 0);
    }

    #[test]
    fn test_error_conversion() {
        let err: MessagelyError = RegistrationError::UsernameExists.into();
        assert!(matches!(err, MessagelyError::Conflict(_)));

        let err: MessagelyError =
            RegistrationError::Validation(ValidationError::PhoneEmpty).into();
        assert!(matches!(err, MessagelyError::Validation(_)));

        let err: RegistrationError = MessagelyError::Conflict("UNIQUE".to_string()).into();
        assert!(matches!(err, RegistrationError::UsernameExists));

        let err: MessagelyError =
            RegistrationError::Password(PasswordError::HashError("out of memory".into())).into();
        assert!(matches!(err, MessagelyError::Internal(_)));

        let err: MessagelyError = RegistrationError::Password(PasswordError::TooShort).into();
        assert!(matches!(err, MessagelyError::Validation(_)));
    }
}
