//! Delivery log entry for SMS send attempts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Terminal outcome of a send attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryStatus {
    Sent,
    Delivered,
    Failed,
}

/// What kind of message the attempt carried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageType {
    Otp,
    Bulk,
    Other,
}

impl MessageType {
    /// Stable lowercase name used as a JSON map key in analytics
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Otp => "otp",
            MessageType::Bulk => "bulk",
            MessageType::Other => "other",
        }
    }
}

/// Audit row for one send attempt
///
/// Append-only: every dispatch attempt, single or bulk, writes exactly one
/// record whatever the outcome. Records are never updated or deleted; the
/// analytics aggregator is their only reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryRecord {
    /// Unique identifier for the record
    pub id: Uuid,

    /// Target phone number
    pub phone_number: String,

    /// Terminal outcome of the attempt
    pub status: DeliveryStatus,

    /// Message category
    pub message_type: MessageType,

    /// Name of the provider that handled the attempt
    pub provider: String,

    /// The message body that was sent
    pub message: String,

    /// User the attempt is attributed to, if any
    pub user_id: Option<Uuid>,

    /// Provider error detail for failed attempts
    pub error_message: Option<String>,

    /// Timestamp when the attempt was recorded
    pub created_at: DateTime<Utc>,
}

impl DeliveryRecord {
    /// Record a successful delivery
    pub fn delivered(
        phone_number: impl Into<String>,
        message_type: MessageType,
        provider: impl Into<String>,
        message: impl Into<String>,
        user_id: Option<Uuid>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            phone_number: phone_number.into(),
            status: DeliveryStatus::Delivered,
            message_type,
            provider: provider.into(),
            message: message.into(),
            user_id,
            error_message: None,
            created_at: Utc::now(),
        }
    }

    /// Record a failed attempt with the provider error detail
    pub fn failed(
        phone_number: impl Into<String>,
        message_type: MessageType,
        provider: impl Into<String>,
        message: impl Into<String>,
        user_id: Option<Uuid>,
        error_message: impl Into<String>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            phone_number: phone_number.into(),
            status: DeliveryStatus::Failed,
            message_type,
            provider: provider.into(),
            message: message.into(),
            user_id,
            error_message: Some(error_message.into()),
            created_at: Utc::now(),
        }
    }
}
