//! Authentication configuration

use serde::{Deserialize, Serialize};

use super::{env_or, env_parse_or};

/// JWT authentication configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AuthConfig {
    /// HS256 signing secret
    pub jwt_secret: String,

    /// Access token lifetime in days
    pub token_expiry_days: i64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: String::from("fallbacksecret"),
            token_expiry_days: 30,
        }
    }
}

impl AuthConfig {
    /// Load auth configuration from `JWT_SECRET` / `TOKEN_EXPIRY_DAYS`
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            jwt_secret: env_or("JWT_SECRET", &defaults.jwt_secret),
            token_expiry_days: env_parse_or("TOKEN_EXPIRY_DAYS", defaults.token_expiry_days),
        }
    }
}
