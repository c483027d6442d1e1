use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /api/otp/send`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SendOtpRequest {
    /// Target phone number in E.164 format
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone_number: String,

    /// Provider name; the configured default when absent
    pub provider: Option<String>,
}

/// Body of `POST /api/otp/verify`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct VerifyOtpRequest {
    #[validate(length(min = 1, message = "Phone number is required"))]
    pub phone_number: String,

    /// 6-digit code as received by SMS
    #[validate(length(equal = 6, message = "OTP must be 6 digits"))]
    pub otp: String,
}

/// Body of `POST /api/otp/bulk-send`
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BulkSendRequest {
    /// Target phone numbers, cycled round-robin by the batch
    #[validate(length(min = 1, message = "Phone numbers array is required"))]
    pub phone_numbers: Vec<String>,

    /// Number of messages to send in total
    #[serde(rename = "totalSMS")]
    pub total_sms: u32,

    /// Messages per pacing window
    pub pause_after: u32,

    /// Pause between pacing windows, in seconds
    pub pause_seconds: u64,

    /// Provider name; the configured default when absent
    pub provider: Option<String>,
}

/// Acceptance response of `POST /api/otp/bulk-send` (202)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BulkSendAck {
    pub success: bool,
    pub message: String,
    /// Acknowledged message count, capped at the target list length
    pub total_messages: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bulk_request_wire_names() {
        let body = serde_json::json!({
            "phoneNumbers": ["+14155550100"],
            "totalSMS": 5,
            "pauseAfter": 2,
            "pauseSeconds": 10,
        });
        let request: BulkSendRequest = serde_json::from_value(body).unwrap();
        assert_eq!(request.total_sms, 5);
        assert_eq!(request.pause_after, 2);
        assert_eq!(request.pause_seconds, 10);
        assert!(request.provider.is_none());
    }

    #[test]
    fn test_ack_wire_names() {
        let ack = BulkSendAck {
            success: true,
            message: "Bulk OTP sending started".to_string(),
            total_messages: 3,
        };
        let json = serde_json::to_string(&ack).unwrap();
        assert!(json.contains("\"totalMessages\":3"));
    }

    #[test]
    fn test_validation_messages() {
        use validator::Validate;

        let request = SendOtpRequest {
            phone_number: String::new(),
            provider: None,
        };
        assert!(request.validate().is_err());

        let request = BulkSendRequest {
            phone_numbers: vec![],
            total_sms: 5,
            pause_after: 2,
            pause_seconds: 10,
            provider: None,
        };
        assert!(request.validate().is_err());
    }
}
