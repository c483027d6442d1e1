//! Domain error taxonomy
//!
//! A single `DomainError` enum covers the whole core: validation rejections,
//! provider transport failures, lookup misses, verification outcomes, and
//! auth failures. The API layer maps each variant to an HTTP status.

use thiserror::Error;

/// Convenience alias for results carrying a [`DomainError`]
pub type DomainResult<T> = Result<T, DomainError>;

/// Errors produced by the core services
#[derive(Debug, Error)]
pub enum DomainError {
    /// Malformed or missing input, rejected before any side effect
    #[error("{message}")]
    Validation { message: String },

    /// The SMS provider rejected or failed to deliver a message
    #[error("SMS provider '{provider}' failed: {message}")]
    Provider { provider: String, message: String },

    /// No matching entity (OTP record, user, ...) was found
    #[error("{resource} not found")]
    NotFound { resource: String },

    /// The submitted code does not match the most recent one
    #[error("Invalid OTP. Please try again.")]
    CodeMismatch,

    /// The most recent code is past its validity window
    #[error("OTP has expired. Please request a new one.")]
    CodeExpired,

    /// Login failed; deliberately does not distinguish user from password
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Missing or invalid bearer token
    #[error("Not authorized: {message}")]
    Unauthorized { message: String },

    /// Authenticated but lacking the required role
    #[error("Not authorized as an admin")]
    Forbidden,

    /// Unexpected internal failure
    #[error("{message}")]
    Internal { message: String },
}

impl DomainError {
    /// Shorthand for a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Shorthand for a not-found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Shorthand for an unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    /// Shorthand for an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DomainError::validation("Phone number is required");
        assert_eq!(err.to_string(), "Phone number is required");

        let err = DomainError::Provider {
            provider: "twilio".to_string(),
            message: "401 Unauthorized".to_string(),
        };
        assert!(err.to_string().contains("twilio"));

        let err = DomainError::not_found("OTP");
        assert_eq!(err.to_string(), "OTP not found");
    }
}
