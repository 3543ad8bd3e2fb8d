//! Input validation for user registration.

use thiserror::Error;

use super::password::{MAX_PASSWORD_LENGTH, MIN_PASSWORD_LENGTH};

/// Minimum username length.
pub const MIN_USERNAME_LENGTH: usize = 3;

/// Maximum username length.
pub const MAX_USERNAME_LENGTH: usize = 30;

/// Maximum length of first and last names.
pub const MAX_NAME_LENGTH: usize = 50;

/// Maximum phone number length.
pub const MAX_PHONE_LENGTH: usize = 30;

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("username must be at least {MIN_USERNAME_LENGTH} characters")]
    UsernameTooShort,

    #[error("username must be at most {MAX_USERNAME_LENGTH} characters")]
    UsernameTooLong,

    #[error("username can only contain alphanumeric characters and underscores")]
    UsernameInvalidChars,

    #[error("password must be at least {MIN_PASSWORD_LENGTH} characters")]
    PasswordTooShort,

    #[error("password must be at most {MAX_PASSWORD_LENGTH} characters")]
    PasswordTooLong,

    /// A name field is empty. Holds the field name.
    #[error("{0} cannot be empty")]
    NameEmpty(&'static str),

    /// A name field is too long. Holds the field name.
    #[error("{0} must be at most {MAX_NAME_LENGTH} characters")]
    NameTooLong(&'static str),

    #[error("phone cannot be empty")]
    PhoneEmpty,

    #[error("phone must be at most {MAX_PHONE_LENGTH} characters")]
    PhoneTooLong,

    #[error("phone can only contain digits, spaces and + - ( )")]
    PhoneInvalidChars,
}

/// Validate a username: 3-30 ASCII letters, digits or underscores.
pub fn validate_username(username: &str) -> Result<(), ValidationError> {
    let len = username.chars().count();
    if len < MIN_USERNAME_LENGTH {
        return Err(ValidationError::UsernameTooShort);
    }
    if len > MAX_USERNAME_LENGTH {
        return Err(ValidationError::UsernameTooLong);
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(ValidationError::UsernameInvalidChars);
    }
    Ok(())
}

/// Validate password length.
pub fn validate_registration_password(password: &str) -> Result<(), ValidationError> {
    let len = password.chars().count();
    if len < MIN_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }
    if len > MAX_PASSWORD_LENGTH {
        return Err(ValidationError::PasswordTooLong);
    }
    Ok(())
}

/// Validate a first or last name.
pub fn validate_name(field: &'static str, name: &str) -> Result<(), ValidationError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::NameEmpty(field));
    }
    if trimmed.chars().count() > MAX_NAME_LENGTH {
        return Err(ValidationError::NameTooLong(field));
    }
    Ok(())
}

/// Validate a phone number.
pub fn validate_phone(phone: &str) -> Result<(), ValidationError> {
    let trimmed = phone.trim();
    if trimmed.is_empty() {
        return Err(ValidationError::PhoneEmpty);
    }
    if trimmed.chars().count() > MAX_PHONE_LENGTH {
        return Err(ValidationError::PhoneTooLong);
    }
    if !trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'))
    {
        return Err(ValidationError::PhoneInvalidChars);
    }
    Ok(())
}

/// Validate all registration fields, reporting the first failure.
pub fn validate_registration(
    username: &str,
    password: &str,
    first_name: &str,
    last_name: &str,
    phone: &str,
) -> Result<(), ValidationError> {
    validate_username(username)?;
    validate_registration_password(password)?;
    validate_name("first_name", first_name)?;
    validate_name("last_name", last_name)?;
    validate_phone(phone)?;
    Ok(())
}
