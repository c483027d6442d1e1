//! Configuration module
//!
//! Configuration is read from environment variables (optionally seeded from a
//! `.env` file by the binary). Every sub-config exposes `from_env()` together
//! with a `Default` suitable for tests.
//!
//! - `server` - HTTP server bind address
//! - `sms` - SMS provider selection and Twilio credentials
//! - `auth` - JWT secret and token lifetime
//! - `dispatch` - bulk dispatch pacing and code retention knobs

pub mod auth;
pub mod dispatch;
pub mod server;
pub mod sms;

pub use auth::AuthConfig;
pub use dispatch::DispatchConfig;
pub use server::ServerConfig;
pub use sms::{SmsConfig, TwilioConfig};

use serde::{Deserialize, Serialize};

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AppConfig {
    /// Server configuration
    pub server: ServerConfig,

    /// SMS provider configuration
    pub sms: SmsConfig,

    /// Authentication configuration
    pub auth: AuthConfig,

    /// Bulk dispatch configuration
    pub dispatch: DispatchConfig,
}

impl AppConfig {
    /// Load the full configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            server: ServerConfig::from_env(),
            sms: SmsConfig::from_env(),
            auth: AuthConfig::from_env(),
            dispatch: DispatchConfig::from_env(),
        }
    }
}

/// Read an environment variable, falling back to a default
pub(crate) fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Read and parse an environment variable, falling back to a default
pub(crate) fn env_parse_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
