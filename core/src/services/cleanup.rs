//! Periodic retention sweep for the verification code store.
//!
//! Superseded and expired code rows would otherwise accumulate forever:
//! issuance appends, and only successful verification deletes. This task
//! deletes rows older than the validity window on a fixed interval.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use tracing::{error, info};

use crate::errors::DomainResult;
use crate::repositories::CodeRepository;

/// Background sweep deleting expired verification codes
pub struct CodeCleanupTask {
    codes: Arc<dyn CodeRepository>,
    interval: Duration,
    max_age: chrono::Duration,
}

impl CodeCleanupTask {
    /// Create a sweep running every `interval_secs`, deleting rows older
    /// than `validity_minutes`
    pub fn new(codes: Arc<dyn CodeRepository>, interval_secs: u64, validity_minutes: i64) -> Self {
        Self {
            codes,
            interval: Duration::from_secs(interval_secs),
            max_age: chrono::Duration::minutes(validity_minutes),
        }
    }

    /// Run a single sweep, returning how many rows were deleted
    pub async fn run_once(&self) -> DomainResult<u64> {
        let cutoff = Utc::now() - self.max_age;
        let deleted = self.codes.delete_created_before(cutoff).await?;
        if deleted > 0 {
            info!(deleted, "expired verification codes removed");
        }
        Ok(deleted)
    }

    /// Start the sweep as a detached background task
    pub fn spawn(self) {
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(self.interval);
            // The first tick completes immediately; skip it so the sweep
            // starts one interval after boot.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if let Err(err) = self.run_once().await {
                    error!(error = %err, "verification code sweep failed");
                }
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::VerificationCode;
    use crate::services::otp::tests::mocks::VecCodeRepository;
    use chrono::Duration as ChronoDuration;

    #[tokio::test]
    async fn run_once_removes_only_expired_rows() {
        let codes = Arc::new(VecCodeRepository::new());
        let now = Utc::now();
        codes.insert_at(
            VerificationCode::new("+14155550100", "111111"),
            now - ChronoDuration::minutes(10),
        );
        codes.insert_at(VerificationCode::new("+14155550101", "222222"), now);

        let task = CodeCleanupTask::new(codes.clone(), 600, 5);
        assert_eq!(task.run_once().await.unwrap(), 1);
        assert_eq!(codes.len(), 1);

        // Nothing left to sweep.
        assert_eq!(task.run_once().await.unwrap(), 0);
    }
}
