//! Verification code entity for SMS-based phone verification.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Length of the verification code
pub const CODE_LENGTH: usize = 6;

/// Minutes a verification code stays valid
pub const DEFAULT_VALIDITY_MINUTES: i64 = 5;

/// A single one-time password issued to a phone number
///
/// Codes are never mutated: issuance appends a new row, successful
/// verification deletes it. Several rows may exist for one phone number at a
/// time; only the most recently created one is ever consulted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationCode {
    /// Unique identifier for the code row
    pub id: Uuid,

    /// Phone number this code was sent to (E.164)
    pub phone_number: String,

    /// The 6-digit verification code
    pub code: String,

    /// Timestamp when the code was created
    pub created_at: DateTime<Utc>,
}

impl VerificationCode {
    /// Create a new verification code row for a phone number
    pub fn new(phone_number: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            phone_number: phone_number.into(),
            code: code.into(),
            created_at: Utc::now(),
        }
    }

    /// Whether the code is past the given validity window
    pub fn is_expired(&self, validity_minutes: i64) -> bool {
        Utc::now() > self.created_at + Duration::minutes(validity_minutes)
    }
}
