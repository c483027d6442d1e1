//! SMS provider implementations
//!
//! Providers implement the core's `SmsProvider` trait. The registry is
//! assembled once at process start from configuration: the mock provider is
//! always present, Twilio only when credentials are configured.

use std::sync::Arc;

use otp_core::services::provider::ProviderRegistry;
use otp_shared::config::SmsConfig;

pub mod mock;
pub mod twilio;

pub use mock::MockSmsProvider;
pub use twilio::TwilioProvider;

/// Build the provider registry from configuration
///
/// Falls back to the mock default when the configured default provider has
/// no credentials, so a misconfigured process still boots.
pub fn build_provider_registry(config: &SmsConfig) -> ProviderRegistry {
    let mut default_provider = config.default_provider.clone();
    if default_provider == "twilio" && config.twilio.is_none() {
        tracing::warn!("Twilio selected as default but not configured, using mock provider");
        default_provider = "mock".to_string();
    }

    let mut registry = ProviderRegistry::new(default_provider);
    registry.register(Arc::new(MockSmsProvider::new()));
    if let Some(twilio) = &config.twilio {
        registry.register(Arc::new(TwilioProvider::new(twilio.clone())));
    }
    registry
}
