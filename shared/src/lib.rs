//! Shared utilities and common types for the OTP relay server
//!
//! This crate provides functionality used across all server crates:
//! - Configuration types loaded from environment variables
//! - The API response envelope
//! - Utility functions (phone validation and masking)

pub mod config;
pub mod types;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{AppConfig, AuthConfig, DispatchConfig, ServerConfig, SmsConfig, TwilioConfig};
pub use types::response::ApiResponse;
pub use utils::phone;
