//! Twilio SMS provider over the Messages REST API.

use std::collections::HashMap;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, error};

use otp_core::errors::{DomainError, DomainResult};
use otp_core::services::provider::SmsProvider;
use otp_shared::config::TwilioConfig;
use otp_shared::utils::phone::mask_phone_number;

const TWILIO_API_BASE: &str = "https://api.twilio.com/2010-04-01";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Sends SMS through the Twilio Messages API
///
/// One reqwest client is built at construction and reused; the provider is
/// safe to call concurrently.
pub struct TwilioProvider {
    config: TwilioConfig,
    client: Client,
}

impl TwilioProvider {
    /// Create a provider from Twilio credentials
    pub fn new(config: TwilioConfig) -> Self {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .unwrap_or_default();
        Self { config, client }
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/Accounts/{}/Messages.json",
            TWILIO_API_BASE, self.config.account_sid
        )
    }

    fn provider_error(message: impl Into<String>) -> DomainError {
        DomainError::Provider {
            provider: "twilio".to_string(),
            message: message.into(),
        }
    }
}

#[async_trait]
impl SmsProvider for TwilioProvider {
    async fn send(&self, phone_number: &str, message: &str) -> DomainResult<()> {
        let mut form: HashMap<&str, &str> = HashMap::new();
        form.insert("To", phone_number);
        form.insert("From", &self.config.from_number);
        form.insert("Body", message);

        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.config.account_sid, Some(&self.config.auth_token))
            .form(&form)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "request to Twilio failed");
                Self::provider_error(format!("request failed: {}", e))
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!(
                status = %status,
                phone = %mask_phone_number(phone_number),
                body,
                "Twilio rejected message"
            );
            return Err(Self::provider_error(format!("{}: {}", status, body)));
        }

        debug!(
            phone = %mask_phone_number(phone_number),
            "Twilio accepted message"
        );
        Ok(())
    }

    fn name(&self) -> &str {
        "twilio"
    }
}
