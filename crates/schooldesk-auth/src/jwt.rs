//! JWT verification for access tokens.
//!
//! Tokens are HS256-signed with the platform's shared secret. When
//! [`JwtConfig::audience`] is set the `aud` claim must match it.
//!
//! # Example
//!
//! ```ignore
//! use schooldesk_auth::verify_token;
//! use schooldesk_config::JwtConfig;
//!
//! let claims = verify_token(&token, &JwtConfig::from_env())?;
//! println!("User ID: {}", claims.sub);
//! ```

use anyhow::anyhow;
use chrono::Utc;
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use uuid::Uuid;

use schooldesk_config::JwtConfig;
use schooldesk_core::AppError;

use crate::claims::Claims;

/// Mints an access token the way the auth platform does.
///
/// Used by `schooldesk-cli issue-token` and by tests; production tokens come
/// from the platform.
pub fn create_access_token(
    user_id: Uuid,
    email: &str,
    jwt_config: &JwtConfig,
) -> Result<String, AppError> {
    let now = Utc::now().timestamp() as usize;
    let exp = now + jwt_config.access_token_expiry.max(0) as usize;

    let claims = Claims {
        sub: user_id.to_string(),
        email: email.to_string(),
        aud: jwt_config.audience.clone(),
        exp,
        iat: now,
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(jwt_config.secret.as_bytes()),
    )
    .map_err(|e| AppError::internal(anyhow!("Failed to create token: {}", e)))
}

/// Verifies an access token and returns its claims.
///
/// Returns an unauthorized error when the signature is invalid, the token has
/// expired, the audience does not match, or the token is malformed.
pub fn verify_token(token: &str, jwt_config: &JwtConfig) -> Result<Claims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    match &jwt_config.audience {
        Some(audience) => validation.set_audience(&[audience]),
        None => validation.validate_aud = false,
    }

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(jwt_config.secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::unauthorized(anyhow!("Invalid or expired token")))
}
