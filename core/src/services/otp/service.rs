//! OTP issuance and verification service.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use otp_shared::utils::phone::mask_phone_number;

use crate::domain::entities::{DeliveryRecord, MessageType, VerificationCode};
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{CodeRepository, DeliveryLogRepository};
use crate::services::codegen;
use crate::services::provider::ProviderRegistry;

/// Issues one-time passwords and verifies submitted codes
///
/// Issuance writes exactly one `VerificationCode` row and exactly one
/// `DeliveryRecord` per call, whatever the provider outcome. Verification
/// consults only the most recent code for a phone number and consumes it on
/// success.
pub struct OtpService {
    providers: Arc<ProviderRegistry>,
    codes: Arc<dyn CodeRepository>,
    delivery_log: Arc<dyn DeliveryLogRepository>,
    code_validity_minutes: i64,
}

impl OtpService {
    /// Create a new OTP service
    pub fn new(
        providers: Arc<ProviderRegistry>,
        codes: Arc<dyn CodeRepository>,
        delivery_log: Arc<dyn DeliveryLogRepository>,
        code_validity_minutes: i64,
    ) -> Self {
        Self {
            providers,
            codes,
            delivery_log,
            code_validity_minutes,
        }
    }

    /// The configured provider registry
    pub fn providers(&self) -> &ProviderRegistry {
        &self.providers
    }

    /// Message body embedding the code and the validity statement
    fn message_body(&self, code: &str) -> String {
        format!(
            "Your OTP verification code is: {}. Valid for {} minutes.",
            code, self.code_validity_minutes
        )
    }

    /// Generate, persist, and send an OTP to a phone number
    ///
    /// Resolves the provider first so an unknown provider name is rejected
    /// before any row is written. After that point every outcome is logged:
    /// a successful send appends a `Delivered` record, a provider failure
    /// appends a `Failed` record with the error detail and the error is
    /// propagated to the caller.
    pub async fn send_otp(
        &self,
        phone_number: &str,
        provider_name: Option<&str>,
        user_id: Option<Uuid>,
        message_type: MessageType,
    ) -> DomainResult<()> {
        let provider = self.providers.resolve(provider_name)?;

        let code = codegen::generate_code();
        self.codes
            .insert(VerificationCode::new(phone_number, &code))
            .await?;

        let body = self.message_body(&code);
        match provider.send(phone_number, &body).await {
            Ok(()) => {
                info!(
                    phone = %mask_phone_number(phone_number),
                    provider = provider.name(),
                    "OTP sent"
                );
                self.delivery_log
                    .append(DeliveryRecord::delivered(
                        phone_number,
                        message_type,
                        provider.name(),
                        &body,
                        user_id,
                    ))
                    .await?;
                Ok(())
            }
            Err(err) => {
                warn!(
                    phone = %mask_phone_number(phone_number),
                    provider = provider.name(),
                    error = %err,
                    "OTP send failed"
                );
                self.delivery_log
                    .append(DeliveryRecord::failed(
                        phone_number,
                        message_type,
                        provider.name(),
                        &body,
                        user_id,
                        err.to_string(),
                    ))
                    .await?;
                Err(err)
            }
        }
    }

    /// Verify a submitted code against the most recent one for the phone
    ///
    /// The newest code wins; older outstanding codes for the same number
    /// remain permanently unusable. A matching code is deleted so it can be
    /// used only once.
    pub async fn verify_otp(&self, phone_number: &str, submitted_code: &str) -> DomainResult<()> {
        let latest = self
            .codes
            .find_latest_by_phone(phone_number)
            .await?
            .ok_or_else(|| DomainError::not_found("OTP"))?;

        if latest.is_expired(self.code_validity_minutes) {
            return Err(DomainError::CodeExpired);
        }

        if latest.code != submitted_code {
            return Err(DomainError::CodeMismatch);
        }

        self.codes.delete_by_id(latest.id).await?;
        info!(
            phone = %mask_phone_number(phone_number),
            "OTP verified and consumed"
        );
        Ok(())
    }
}
