//! SMS provider gateway seam.
//!
//! The core never talks to a transport directly; it resolves a provider by
//! name from the registry and calls `send`. Implementations live in the
//! infra crate. Providers must be safe to call concurrently; pacing is the
//! caller's responsibility.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::{DomainError, DomainResult};

/// Uniform capability to send a text message to a phone number
#[async_trait]
pub trait SmsProvider: Send + Sync {
    /// Send an SMS message; may be slow or remotely rate-limited
    async fn send(&self, phone_number: &str, message: &str) -> DomainResult<()>;

    /// Provider name as recorded in the delivery log (e.g. "twilio", "mock")
    fn name(&self) -> &str;
}

impl std::fmt::Debug for dyn SmsProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SmsProvider")
            .field("name", &self.name())
            .finish()
    }
}

/// Named set of configured providers with a default
///
/// Providers are constructed once at process start and injected; there are
/// no module-level singletons.
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn SmsProvider>>,
    default_provider: String,
}

impl ProviderRegistry {
    /// Build a registry; `default_provider` is used when requests name none
    pub fn new(default_provider: impl Into<String>) -> Self {
        Self {
            providers: HashMap::new(),
            default_provider: default_provider.into(),
        }
    }

    /// Register a provider under its own name
    pub fn register(&mut self, provider: Arc<dyn SmsProvider>) {
        self.providers.insert(provider.name().to_string(), provider);
    }

    /// Resolve a provider by name, or the default when `None`
    ///
    /// An unknown name is a validation error: it is rejected before any
    /// code is generated or logged.
    pub fn resolve(&self, name: Option<&str>) -> DomainResult<Arc<dyn SmsProvider>> {
        let name = name.unwrap_or(&self.default_provider);
        self.providers.get(name).cloned().ok_or_else(|| {
            DomainError::validation(format!("Unknown SMS provider '{}'", name))
        })
    }

    /// Name of the default provider
    pub fn default_provider(&self) -> &str {
        &self.default_provider
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct NullProvider(&'static str);

    #[async_trait]
    impl SmsProvider for NullProvider {
        async fn send(&self, _phone_number: &str, _message: &str) -> DomainResult<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            self.0
        }
    }

    #[test]
    fn test_resolve_default_and_named() {
        let mut registry = ProviderRegistry::new("mock");
        registry.register(Arc::new(NullProvider("mock")));
        registry.register(Arc::new(NullProvider("twilio")));

        assert_eq!(registry.resolve(None).unwrap().name(), "mock");
        assert_eq!(registry.resolve(Some("twilio")).unwrap().name(), "twilio");
    }

    #[test]
    fn test_unknown_provider_is_validation_error() {
        let mut registry = ProviderRegistry::new("mock");
        registry.register(Arc::new(NullProvider("mock")));

        let err = registry.resolve(Some("nexmo")).unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
    }
}
