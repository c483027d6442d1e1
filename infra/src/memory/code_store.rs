//! In-memory verification code store.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use otp_core::domain::entities::VerificationCode;
use otp_core::errors::DomainResult;
use otp_core::repositories::CodeRepository;

/// Row with its insertion sequence number
///
/// The sequence makes `find_latest_by_phone` deterministic when two rows
/// share a `created_at`: the higher sequence (inserted later) wins.
#[derive(Debug, Clone)]
struct StoredCode {
    seq: u64,
    code: VerificationCode,
}

/// RwLock-protected code store
#[derive(Clone)]
pub struct InMemoryCodeStore {
    rows: Arc<RwLock<Vec<StoredCode>>>,
    next_seq: Arc<AtomicU64>,
}

impl InMemoryCodeStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(Vec::new())),
            next_seq: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Number of rows currently held
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }
}

impl Default for InMemoryCodeStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CodeRepository for InMemoryCodeStore {
    async fn insert(&self, code: VerificationCode) -> DomainResult<()> {
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst);
        self.rows.write().await.push(StoredCode { seq, code });
        Ok(())
    }

    async fn find_latest_by_phone(
        &self,
        phone_number: &str,
    ) -> DomainResult<Option<VerificationCode>> {
        let rows = self.rows.read().await;
        Ok(rows
            .iter()
            .filter(|row| row.code.phone_number == phone_number)
            .max_by_key(|row| (row.code.created_at, row.seq))
            .map(|row| row.code.clone()))
    }

    async fn delete_by_id(&self, id: Uuid) -> DomainResult<bool> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|row| row.code.id != id);
        Ok(rows.len() < before)
    }

    async fn delete_created_before(&self, cutoff: DateTime<Utc>) -> DomainResult<u64> {
        let mut rows = self.rows.write().await;
        let before = rows.len();
        rows.retain(|row| row.code.created_at >= cutoff);
        Ok((before - rows.len()) as u64)
    }
}
