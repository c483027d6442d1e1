//! Application state assembly.
//!
//! Everything is constructed once from configuration and injected; handlers
//! receive the state through `web::Data`. Providers, repositories, and
//! services are wired here and nowhere else.

use std::sync::Arc;
use std::time::Duration;

use otp_core::repositories::{CodeRepository, DeliveryLogRepository, UserRepository};
use otp_core::services::{
    AnalyticsService, AuthService, BulkDispatcher, OtpService, TokenService,
};
use otp_infra::memory::{InMemoryCodeStore, InMemoryDeliveryLog, InMemoryUserStore};
use otp_infra::sms::build_provider_registry;
use otp_shared::config::AppConfig;

/// Shared services injected into every handler
#[derive(Clone)]
pub struct AppState {
    pub otp: Arc<OtpService>,
    pub dispatcher: BulkDispatcher,
    pub analytics: Arc<AnalyticsService>,
    pub auth: Arc<AuthService>,
    /// Kept for the retention sweep spawned at startup
    pub codes: Arc<dyn CodeRepository>,
}

impl AppState {
    /// Wire all services from configuration
    pub fn from_config(config: &AppConfig) -> Self {
        let registry = Arc::new(build_provider_registry(&config.sms));
        let codes: Arc<dyn CodeRepository> = Arc::new(InMemoryCodeStore::new());
        let delivery_log: Arc<dyn DeliveryLogRepository> = Arc::new(InMemoryDeliveryLog::new());
        let users: Arc<dyn UserRepository> = Arc::new(InMemoryUserStore::new());

        let otp = Arc::new(OtpService::new(
            registry,
            codes.clone(),
            delivery_log.clone(),
            config.dispatch.code_validity_minutes,
        ));
        let dispatcher = BulkDispatcher::new(
            otp.clone(),
            Duration::from_millis(config.dispatch.inter_message_delay_ms),
        );
        let analytics = Arc::new(AnalyticsService::new(delivery_log));
        let tokens = TokenService::new(
            config.auth.jwt_secret.clone(),
            config.auth.token_expiry_days,
        );
        let auth = Arc::new(AuthService::new(users, tokens));

        Self {
            otp,
            dispatcher,
            analytics,
            auth,
            codes,
        }
    }
}
