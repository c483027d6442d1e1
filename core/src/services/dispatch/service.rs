//! Rate-limited, fault-tolerant bulk OTP dispatch.
//!
//! A bulk request is validated synchronously, acknowledged immediately, and
//! then processed by a single detached background task. The task walks the
//! target list round-robin, runs full OTP issuance per iteration, absorbs
//! per-target failures, and paces itself with a fixed inter-message delay
//! plus a longer pause after every window of sends.

use std::cmp::min;
use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info, warn};
use uuid::Uuid;

use otp_shared::utils::phone::mask_phone_number;

use crate::domain::entities::MessageType;
use crate::errors::{DomainError, DomainResult};
use crate::services::otp::OtpService;

/// Parameters of one bulk send request
///
/// The spawned task owns its own copy; later mutation of the originating
/// request can never be observed by a running batch.
#[derive(Debug, Clone)]
pub struct BulkSendParams {
    /// Target phone numbers, cycled round-robin
    pub phone_numbers: Vec<String>,
    /// Number of messages to send in total
    pub total_sms: u32,
    /// Messages per pacing window
    pub pause_after: u32,
    /// Pause between pacing windows, in seconds
    pub pause_seconds: u64,
    /// Provider name; the registry default when `None`
    pub provider: Option<String>,
    /// User the batch is attributed to
    pub user_id: Option<Uuid>,
}

impl BulkSendParams {
    /// Pre-flight validation, run before any side effect
    ///
    /// A violation means the job never starts: no code rows, no delivery
    /// records.
    pub fn validate(&self) -> DomainResult<()> {
        if self.phone_numbers.is_empty() {
            return Err(DomainError::validation("Phone numbers array is required"));
        }
        if self.total_sms == 0 || self.pause_after == 0 || self.pause_seconds == 0 {
            return Err(DomainError::validation(
                "Valid totalSMS, pauseAfter, and pauseSeconds are required",
            ));
        }
        Ok(())
    }

    /// Count reported back in the acceptance response
    pub fn acknowledged_count(&self) -> u32 {
        min(self.total_sms, self.phone_numbers.len() as u32)
    }
}

/// Orchestrates bulk OTP batches
#[derive(Clone)]
pub struct BulkDispatcher {
    otp: Arc<OtpService>,
    inter_message_delay: Duration,
}

impl BulkDispatcher {
    /// Create a dispatcher sending through the given OTP service
    pub fn new(otp: Arc<OtpService>, inter_message_delay: Duration) -> Self {
        Self {
            otp,
            inter_message_delay,
        }
    }

    /// Validate a batch and start it as a detached background task
    ///
    /// Returns the acknowledged message count immediately; the caller never
    /// learns how the batch ends. No join handle is kept and no cancellation
    /// is possible: completion is observable only through the delivery log
    /// and process logs.
    pub fn spawn(&self, params: BulkSendParams) -> DomainResult<u32> {
        params.validate()?;
        // Reject unknown providers up front, before acceptance.
        self.otp.providers().resolve(params.provider.as_deref())?;

        let acknowledged = params.acknowledged_count();
        let dispatcher = self.clone();
        tokio::spawn(async move {
            dispatcher.run_batch(params).await;
        });

        Ok(acknowledged)
    }

    /// Execute one batch to completion
    ///
    /// Iteration `i` targets `phone_numbers[i % len]`, so `total_sms` larger
    /// than the target list wraps around and repeats numbers. A failed send
    /// is already logged as a `Failed` record by the OTP service; the loop
    /// notes it and moves on. After every `pause_after` iterations with work
    /// remaining the task sleeps `pause_seconds`; every iteration with work
    /// remaining is additionally followed by the fixed inter-message delay.
    ///
    /// Callers other than [`spawn`](Self::spawn) must validate the params
    /// first.
    pub async fn run_batch(&self, params: BulkSendParams) {
        let total = params.total_sms as usize;
        info!(
            total_sms = params.total_sms,
            targets = params.phone_numbers.len(),
            pause_after = params.pause_after,
            pause_seconds = params.pause_seconds,
            "starting bulk OTP batch"
        );

        let mut sent = 0u32;
        let mut window = 0u32;
        for i in 0..total {
            let phone_number = &params.phone_numbers[i % params.phone_numbers.len()];

            match self
                .otp
                .send_otp(
                    phone_number,
                    params.provider.as_deref(),
                    params.user_id,
                    MessageType::Bulk,
                )
                .await
            {
                Ok(()) => {
                    sent += 1;
                    debug!(
                        phone = %mask_phone_number(phone_number),
                        sent,
                        total_sms = params.total_sms,
                        "bulk OTP sent"
                    );
                }
                Err(err) => {
                    // One bad number must not abort the batch.
                    warn!(
                        phone = %mask_phone_number(phone_number),
                        error = %err,
                        "bulk OTP send failed, continuing"
                    );
                }
            }

            window += 1;
            let remaining = i + 1 < total;
            if window >= params.pause_after && remaining {
                debug!(
                    window,
                    pause_seconds = params.pause_seconds,
                    "pacing window reached, pausing"
                );
                tokio::time::sleep(Duration::from_secs(params.pause_seconds)).await;
                window = 0;
            }
            if remaining {
                tokio::time::sleep(self.inter_message_delay).await;
            }
        }

        info!(sent, total_sms = params.total_sms, "bulk OTP batch completed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(targets: &[&str], total: u32) -> BulkSendParams {
        BulkSendParams {
            phone_numbers: targets.iter().map(|s| s.to_string()).collect(),
            total_sms: total,
            pause_after: 2,
            pause_seconds: 1,
            provider: None,
            user_id: None,
        }
    }

    #[test]
    fn test_validate_rejects_empty_targets() {
        let p = params(&[], 5);
        assert!(matches!(
            p.validate().unwrap_err(),
            DomainError::Validation { .. }
        ));
    }

    #[test]
    fn test_validate_rejects_non_positive_knobs() {
        for (total, pause_after, pause_seconds) in [(0, 2, 1), (5, 0, 1), (5, 2, 0)] {
            let mut p = params(&["+14155550100"], total);
            p.pause_after = pause_after;
            p.pause_seconds = pause_seconds;
            assert!(p.validate().is_err(), "expected rejection");
        }
    }

    #[test]
    fn test_acknowledged_count_is_capped_by_targets() {
        assert_eq!(params(&["+1", "+2"], 5).acknowledged_count(), 2);
        assert_eq!(params(&["+1", "+2", "+3"], 2).acknowledged_count(), 2);
    }
}
