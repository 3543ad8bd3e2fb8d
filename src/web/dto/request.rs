//! Request DTOs for the web API.

use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::web::dto::validation::{no_control_chars, not_empty_trimmed};

/// Login request.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// User registration request.
///
/// Only shape checks happen here. Field rules are enforced by registration.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct RegisterRequest {
    #[validate(custom(function = "not_empty_trimmed"))]
    pub username: String,
    pub password: String,
    #[validate(custom(function = "no_control_chars"))]
    pub first_name: String,
    #[validate(custom(function = "no_control_chars"))]
    pub last_name: String,
    pub phone: String,
}

/// Send message request.
///
/// Missing fields deserialize as empty so they fail validation (422) like
/// blank ones. The body length limit is enforced by the message service.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct SendMessageRequest {
    /// Recipient username.
    #[serde(default)]
    #[validate(custom(function = "not_empty_trimmed"))]
    pub to_username: String,
    /// Message text.
    #[serde(default)]
    #[validate(custom(function = "not_empty_trimmed"))]
    pub body: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_message_request_valid() {
        let req = SendMessageRequest {
            to_username: "bob".to_string(),
            body: "Hello\nthere".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_send_message_request_invalid() {
        let req = SendMessageRequest {
            to_username: "  ".to_string(),
            body: "   ".to_string(),
        };
        let errors = req.validate().unwrap_err();
        let fields = errors.field_errors();
        assert!(fields.contains_key("to_username"));
        assert!(fields.contains_key("body"));
    }

    #[test]
    fn test_send_message_request_missing_fields() {
        let req: SendMessageRequest = serde_json::from_str(r#"{"body":"hi"}"#).unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("to_username"));

        let req: SendMessageRequest = serde_json::from_str(r#"{"to_username":"bob"}"#).unwrap();
        let errors = req.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("body"));
    }

    #[test]
    fn test_register_request_deserialize() {
        let json = r#"{"username":"alice","password":"password123","first_name":"Alice","last_name":"A","phone":"555"}"#;
        let req: RegisterRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.username, "alice");
        assert!(req.validate().is_ok());
    }
}
