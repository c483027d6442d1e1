//! Delivery log interface.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::{DeliveryRecord, DeliveryStatus, MessageType};
use crate::errors::DomainResult;

/// Half-open time window over `created_at`, unbounded ends allowed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimeRange {
    /// Inclusive lower bound
    pub start: Option<DateTime<Utc>>,
    /// Inclusive upper bound
    pub end: Option<DateTime<Utc>>,
}

impl TimeRange {
    /// The unbounded range (all time)
    pub fn all() -> Self {
        Self::default()
    }

    /// Everything from `start` onwards
    pub fn since(start: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end: None,
        }
    }

    /// The closed range `[start, end]`
    pub fn between(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    /// Whether a timestamp falls inside the range
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start.map_or(true, |s| at >= s) && self.end.map_or(true, |e| at <= e)
    }
}

/// Append-only persistence seam for delivery records
#[async_trait]
pub trait DeliveryLogRepository: Send + Sync {
    /// Append one record; records are never updated or deleted
    async fn append(&self, record: DeliveryRecord) -> DomainResult<()>;

    /// Count records in a range, optionally filtered by status
    async fn count_in_range(
        &self,
        range: TimeRange,
        status: Option<DeliveryStatus>,
    ) -> DomainResult<u64>;

    /// Count records in a range grouped by message type
    async fn count_by_type_in_range(
        &self,
        range: TimeRange,
    ) -> DomainResult<HashMap<MessageType, u64>>;

    /// All records in a range, oldest first (used for daily bucketing)
    async fn list_in_range(&self, range: TimeRange) -> DomainResult<Vec<DeliveryRecord>>;

    /// The user's most recent records, newest first, capped at `limit`
    async fn recent_for_user(
        &self,
        user_id: Uuid,
        limit: usize,
    ) -> DomainResult<Vec<DeliveryRecord>>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_time_range_contains() {
        let now = Utc::now();
        let range = TimeRange::between(now - Duration::hours(1), now);
        assert!(range.contains(now - Duration::minutes(30)));
        assert!(!range.contains(now - Duration::hours(2)));
        assert!(!range.contains(now + Duration::minutes(1)));

        assert!(TimeRange::all().contains(now - Duration::days(365)));
        assert!(TimeRange::since(now).contains(now));
        assert!(!TimeRange::since(now).contains(now - Duration::seconds(1)));
    }
}
