//! Mock SMS provider for development and testing.
//!
//! Logs messages instead of sending them, tracks a send counter, and can be
//! configured to simulate failures.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use tracing::{info, warn};

use otp_core::errors::{DomainError, DomainResult};
use otp_core::services::provider::SmsProvider;
use otp_shared::utils::phone::{is_valid_phone_number, mask_phone_number};

/// Console-logging SMS provider
#[derive(Clone)]
pub struct MockSmsProvider {
    /// Number of messages "sent" so far
    message_count: Arc<AtomicU64>,
    /// Whether every send should fail (for testing failure paths)
    simulate_failure: bool,
}

impl MockSmsProvider {
    /// Create a new mock provider
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: false,
        }
    }

    /// Create a mock provider that fails every send
    pub fn failing() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            simulate_failure: true,
        }
    }

    /// Total number of messages sent through this provider
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }
}

impl Default for MockSmsProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SmsProvider for MockSmsProvider {
    async fn send(&self, phone_number: &str, message: &str) -> DomainResult<()> {
        if !is_valid_phone_number(phone_number) {
            return Err(DomainError::Provider {
                provider: "mock".to_string(),
                message: format!(
                    "Invalid phone number format: {}",
                    mask_phone_number(phone_number)
                ),
            });
        }

        if self.simulate_failure {
            warn!(
                phone = %mask_phone_number(phone_number),
                "mock provider simulating send failure"
            );
            return Err(DomainError::Provider {
                provider: "mock".to_string(),
                message: "Simulated SMS sending failure".to_string(),
            });
        }

        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;
        info!(
            target: "sms",
            provider = "mock",
            phone = %mask_phone_number(phone_number),
            count,
            body = message,
            "mock SMS sent"
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "mock"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_send_counts_messages() {
        let provider = MockSmsProvider::new();
        provider.send("+14155550100", "hello").await.unwrap();
        provider.send("+14155550101", "hello again").await.unwrap();
        assert_eq!(provider.message_count(), 2);
    }

    #[tokio::test]
    async fn test_invalid_phone_rejected() {
        let provider = MockSmsProvider::new();
        let err = provider.send("not-a-number", "hello").await.unwrap_err();
        assert!(matches!(err, DomainError::Provider { .. }));
        assert_eq!(provider.message_count(), 0);
    }

    #[tokio::test]
    async fn test_simulated_failure() {
        let provider = MockSmsProvider::failing();
        let err = provider.send("+14155550100", "hello").await.unwrap_err();
        assert!(err.to_string().contains("Simulated"));
    }
}
