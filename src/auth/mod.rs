//! Authentication module for Messagely.
//!
//! This module provides password hashing, registration input validation,
//! user registration and credential checks. Token issuance lives in the
//! web layer.

mod login;
mod password;
mod registration;
pub mod validation;

pub use login::authenticate;
pub use password::{
    hash_password, validate_password, verify_password, PasswordError, MAX_PASSWORD_LENGTH,
    MIN_PASSWORD_LENGTH,
};
pub use registration::{register, RegistrationError, RegistrationRequest};
pub use validation::ValidationError;
