//! Business services

pub mod analytics;
pub mod auth;
pub mod cleanup;
pub mod codegen;
pub mod dispatch;
pub mod otp;
pub mod provider;

pub use analytics::AnalyticsService;
pub use auth::{AuthContext, AuthService, TokenService};
pub use cleanup::CodeCleanupTask;
pub use dispatch::{BulkDispatcher, BulkSendParams};
pub use otp::OtpService;
pub use provider::{ProviderRegistry, SmsProvider};
