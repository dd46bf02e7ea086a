use std::env;

use crate::env::{non_empty, parse_or};

/// Verification settings for the access tokens issued by the auth platform.
#[derive(Clone, Debug)]
pub struct JwtConfig {
    pub secret: String,
    /// Expected `aud` claim. Audience is not checked when unset.
    pub audience: Option<String>,
    /// Lifetime in seconds of tokens minted by `schooldesk-cli issue-token`.
    pub access_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        Self {
            secret: env::var("JWT_SECRET")
                .unwrap_or_else(|_| "your-secret-key-change-in-production".to_string()),
            audience: non_empty("JWT_AUDIENCE"),
            access_token_expiry: parse_or("JWT_ACCESS_EXPIRY", 3600), // 1 hour
        }
    }
}
