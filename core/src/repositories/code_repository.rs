//! Verification code store interface.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::VerificationCode;
use crate::errors::DomainResult;

/// Persistence seam for verification codes
///
/// Implementations must make `find_latest_by_phone` deterministic: the row
/// with the greatest `created_at` wins, and among rows sharing a timestamp
/// the most recently inserted one wins.
#[async_trait]
pub trait CodeRepository: Send + Sync {
    /// Persist a newly issued code
    async fn insert(&self, code: VerificationCode) -> DomainResult<()>;

    /// Fetch the most recently created code for a phone number
    async fn find_latest_by_phone(&self, phone_number: &str)
        -> DomainResult<Option<VerificationCode>>;

    /// Delete a code row by id; returns whether a row was removed
    async fn delete_by_id(&self, id: Uuid) -> DomainResult<bool>;

    /// Delete all rows created before the cutoff; returns the count removed
    ///
    /// Used by the retention sweep to keep superseded and expired codes from
    /// accumulating.
    async fn delete_created_before(&self, cutoff: DateTime<Utc>) -> DomainResult<u64>;
}
