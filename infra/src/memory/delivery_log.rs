//! In-memory delivery log.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use otp_core::domain::entities::{DeliveryRecord, DeliveryStatus, MessageType};
use otp_core::errors::DomainResult;
use otp_core::repositories::{DeliveryLogRepository, TimeRange};

/// Append-only delivery log held in memory
#[derive(Clone)]
pub struct InMemoryDeliveryLog {
    records: Arc<RwLock<Vec<DeliveryRecord>>>,
}

impl InMemoryDeliveryLog {
    /// Create an empty log
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
        }
    }

    /// Total number of records ever appended
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }
}

impl Default for InMemoryDeliveryLog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl DeliveryLogRepository for InMemoryDeliveryLog {
    async fn append(&self, record: DeliveryRecord) -> DomainResult<()> {
        self.records.write().await.push(record);
        Ok(())
    }

    async fn count_in_range(
        &self,
        range: TimeRange,
        status: Option<DeliveryStatus>,
    ) -> DomainResult<u64> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| range.contains(r.created_at))
            .filter(|r| status.map_or(true, |s| r.status == s))
            .count() as u64)
    }

    async fn count_by_type_in_range(
        &self,
        range: TimeRange,
    ) -> DomainResult<HashMap<MessageType, u64>> {
        let records = self.records.read().await;
        let mut counts = HashMap::new();
        for record in records.iter().filter(|r| range.contains(r.created_at)) {
            *counts.entry(record.message_type).or_insert(0) += 1;
        }
        Ok(counts)
    }

    async fn list_in_range(&self, range: TimeRange) -> DomainResult<Vec<DeliveryRecord>> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| range.contains(r.created_at))
            .cloned()
            .collect())
    }

    async fn recent_for_user(
        &self,
        user_id: Uuid,
        limit: usize,
    ) -> DomainResult<Vec<DeliveryRecord>> {
        let records = self.records.read().await;
        let mut matching: Vec<DeliveryRecord> = records
            .iter()
            .filter(|r| r.user_id == Some(user_id))
            .cloned()
            .collect();
        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        matching.truncate(limit);
        Ok(matching)
    }
}
