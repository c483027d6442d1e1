//! SMS provider configuration

use serde::{Deserialize, Serialize};

use super::env_or;

/// SMS provider configuration
///
/// The registry always carries the mock provider; Twilio is added when
/// credentials are present in the environment.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SmsConfig {
    /// Provider used when a request does not name one ("mock" or "twilio")
    pub default_provider: String,

    /// Twilio credentials, if configured
    pub twilio: Option<TwilioConfig>,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            default_provider: String::from("mock"),
            twilio: None,
        }
    }
}

impl SmsConfig {
    /// Load SMS configuration from the environment
    ///
    /// Reads `SMS_PROVIDER` plus the `TWILIO_*` credential variables. If any
    /// Twilio variable is missing, the Twilio provider is left unconfigured.
    pub fn from_env() -> Self {
        Self {
            default_provider: env_or("SMS_PROVIDER", "mock"),
            twilio: TwilioConfig::from_env(),
        }
    }
}

/// Twilio REST API credentials
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TwilioConfig {
    /// Twilio account SID
    pub account_sid: String,

    /// Twilio auth token
    pub auth_token: String,

    /// Sender phone number (E.164)
    pub from_number: String,
}

impl TwilioConfig {
    /// Load Twilio credentials from the environment, `None` if incomplete
    pub fn from_env() -> Option<Self> {
        let account_sid = std::env::var("TWILIO_ACCOUNT_SID").ok()?;
        let auth_token = std::env::var("TWILIO_AUTH_TOKEN").ok()?;
        let from_number = std::env::var("TWILIO_PHONE_NUMBER").ok()?;
        Some(Self {
            account_sid,
            auth_token,
            from_number,
        })
    }
}
