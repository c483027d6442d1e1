//! Bulk dispatch and code retention configuration

use serde::{Deserialize, Serialize};

use super::env_parse_or;

/// Tuning knobs for the bulk dispatch job and the code store sweep
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DispatchConfig {
    /// Fixed delay between individual bulk sends, in milliseconds
    pub inter_message_delay_ms: u64,

    /// Minutes a verification code stays valid
    pub code_validity_minutes: i64,

    /// Seconds between expired-code sweeps
    pub cleanup_interval_secs: u64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            inter_message_delay_ms: 100,
            code_validity_minutes: 5,
            cleanup_interval_secs: 600,
        }
    }
}

impl DispatchConfig {
    /// Load dispatch configuration from the environment
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            inter_message_delay_ms: env_parse_or(
                "INTER_MESSAGE_DELAY_MS",
                defaults.inter_message_delay_ms,
            ),
            code_validity_minutes: env_parse_or(
                "CODE_VALIDITY_MINUTES",
                defaults.code_validity_minutes,
            ),
            cleanup_interval_secs: env_parse_or(
                "CODE_CLEANUP_INTERVAL_SECS",
                defaults.cleanup_interval_secs,
            ),
        }
    }
}
