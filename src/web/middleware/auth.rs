//! JWT authentication middleware.

use axum::{
    async_trait,
    body::Body,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, Request},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use crate::web::error::ApiError;

/// JWT claims structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JwtClaims {
    /// Subject (username).
    pub sub: String,
    /// Issued at timestamp.
    pub iat: u64,
    /// Expiration timestamp.
    pub exp: u64,
    /// JWT ID (unique identifier).
    pub jti: String,
}

/// Application state for JWT authentication.
#[derive(Clone)]
pub struct JwtState {
    /// Decoding key for JWT verification.
    pub decoding_key: DecodingKey,
    /// Validation settings.
    pub validation: Validation,
}

impl JwtState {
    /// Create a new JWT state from a secret key.
    pub fn new(secret: &str) -> Self {
        let decoding_key = DecodingKey::from_secret(secret.as_bytes());
        let mut validation = Validation::default();
        validation.validate_exp = true;

        Self {
            decoding_key,
            validation,
        }
    }
}

/// Extractor for authenticated users.
///
/// Use this extractor to require authentication for a handler. The handler
/// receives the JWT claims if a valid bearer token is present.
#[derive(Debug, Clone)]
pub struct AuthUser(pub JwtClaims);

impl AuthUser {
    /// The authenticated username.
    pub fn username(&self) -> &str {
        &self.0.sub
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .and_then(|header| header.strip_prefix("Bearer "))
            .ok_or_else(|| ApiError::unauthorized("Missing authorization"))?;

        // Set by the jwt_auth middleware
        let jwt_state = parts
            .extensions
            .get::<Arc<JwtState>>()
            .ok_or_else(|| ApiError::internal("JWT state not configured"))?;

        let token_data =
            decode::<JwtClaims>(token, &jwt_state.decoding_key, &jwt_state.validation).map_err(
                |e| {
                    tracing::debug!("JWT validation failed: {}", e);
                    ApiError::unauthorized("Invalid or expired token")
                },
            )?;

        Ok(AuthUser(token_data.claims))
    }
}

/// Middleware function to inject JWT state into request extensions.
pub async fn jwt_auth(
    jwt_state: Arc<JwtState>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    request.extensions_mut().insert(jwt_state);
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    fn create_test_token(secret: &str, claims: &JwtClaims) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn claims_with_expiry(offset_secs: i64) -> JwtClaims {
        let now = chrono::Utc::now().timestamp();
        JwtClaims {
            sub: "alice".to_string(),
            iat: (now - 60) as u64,
            exp: (now + offset_secs) as u64,
            jti: uuid::Uuid::new_v4().to_string(),
        }
    }

    #[test]
    fn test_create_and_verify_token() {
        let secret = "test-secret";
        let state = JwtState::new(secret);

        let token = create_test_token(secret, &claims_with_expiry(3600));

        let decoded = decode::<JwtClaims>(&token, &state.decoding_key, &state.validation).unwrap();
        assert_eq!(decoded.claims.sub, "alice");
    }

    #[test]
    fn test_expired_token() {
        let secret = "test-secret";
        let state = JwtState::new(secret);

        let token = create_test_token(secret, &claims_with_expiry(-3600));

        let result = decode::<JwtClaims>(&token, &state.decoding_key, &state.validation);
        assert!(result.is_err());
    }

    #[test]
    fn test_invalid_secret() {
        let token = create_test_token("secret1", &claims_with_expiry(3600));
        let state = JwtState::new("secret2");

        let result = decode::<JwtClaims>(&token, &state.decoding_key, &state.validation);
        assert!(result.is_err());
    }

    #[test]
    fn test_auth_user_username() {
        let user = AuthUser(claims_with_expiry(3600));
        assert_eq!(user.username(), "alice");
    }
}
