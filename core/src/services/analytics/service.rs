//! SMS analytics aggregation.
//!
//! Pure read-side rollups over the delivery log: period summaries, daily
//! buckets, and per-user recent activity. Nothing here writes.

use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

use chrono::{DateTime, Datelike, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::{DeliveryRecord, DeliveryStatus};
use crate::errors::DomainResult;
use crate::repositories::{DeliveryLogRepository, TimeRange};

/// How many records `user_activity` returns at most
pub const RECENT_ACTIVITY_LIMIT: usize = 50;

/// How many days of history the daily rollup covers
const DAILY_WINDOW_DAYS: i64 = 30;

/// Counts for one reporting period
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodStats {
    pub total: u64,
    pub delivered: u64,
    pub failed: u64,
    /// `delivered / total` as a percentage string, `"0%"` for an empty period
    pub success_rate: String,
    /// Counts keyed by lowercase message type name
    pub message_types: HashMap<String, u64>,
}

/// The standard period summaries
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmsAnalytics {
    pub today: PeriodStats,
    pub last7_days: PeriodStats,
    pub this_month: PeriodStats,
    pub all_time: PeriodStats,
}

/// Per-day outcome counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyCount {
    pub delivered: u64,
    pub failed: u64,
    pub total: u64,
}

/// Read-only rollups over the delivery log
pub struct AnalyticsService {
    delivery_log: Arc<dyn DeliveryLogRepository>,
}

impl AnalyticsService {
    /// Create a new analytics service
    pub fn new(delivery_log: Arc<dyn DeliveryLogRepository>) -> Self {
        Self { delivery_log }
    }

    /// Format a success rate as the API exposes it
    ///
    /// `"0%"` when there is nothing to rate, otherwise two decimals, e.g.
    /// `"75.00%"`.
    pub fn success_rate(delivered: u64, total: u64) -> String {
        if total == 0 {
            "0%".to_string()
        } else {
            format!("{:.2}%", delivered as f64 / total as f64 * 100.0)
        }
    }

    /// Summaries for today, the last 7 days, this month, and all time
    pub async fn summary(&self) -> DomainResult<SmsAnalytics> {
        let now = Utc::now();
        let today = start_of_day(now);
        let last7 = start_of_day(now - Duration::days(7));
        let month_start = start_of_day(now)
            .with_day(1)
            .expect("day 1 exists in every month");

        Ok(SmsAnalytics {
            today: self.stats_for(TimeRange::between(today, now)).await?,
            last7_days: self.stats_for(TimeRange::between(last7, now)).await?,
            this_month: self.stats_for(TimeRange::between(month_start, now)).await?,
            all_time: self.stats_for(TimeRange::all()).await?,
        })
    }

    /// Daily outcome counts for the last 30 days, keyed `YYYY-MM-DD`
    ///
    /// The map is ordered by date; days without traffic are absent.
    pub async fn daily_counts(&self) -> DomainResult<BTreeMap<String, DailyCount>> {
        let cutoff = start_of_day(Utc::now() - Duration::days(DAILY_WINDOW_DAYS));
        let records = self
            .delivery_log
            .list_in_range(TimeRange::since(cutoff))
            .await?;

        let mut buckets: BTreeMap<String, DailyCount> = BTreeMap::new();
        for record in records {
            let day = record.created_at.format("%Y-%m-%d").to_string();
            let bucket = buckets.entry(day).or_default();
            match record.status {
                DeliveryStatus::Delivered => bucket.delivered += 1,
                DeliveryStatus::Failed => bucket.failed += 1,
                DeliveryStatus::Sent => {}
            }
            bucket.total += 1;
        }
        Ok(buckets)
    }

    /// The user's most recent delivery records, newest first
    pub async fn user_activity(&self, user_id: Uuid) -> DomainResult<Vec<DeliveryRecord>> {
        self.delivery_log
            .recent_for_user(user_id, RECENT_ACTIVITY_LIMIT)
            .await
    }

    async fn stats_for(&self, range: TimeRange) -> DomainResult<PeriodStats> {
        let total = self.delivery_log.count_in_range(range, None).await?;
        let delivered = self
            .delivery_log
            .count_in_range(range, Some(DeliveryStatus::Delivered))
            .await?;
        let failed = self
            .delivery_log
            .count_in_range(range, Some(DeliveryStatus::Failed))
            .await?;
        let by_type = self.delivery_log.count_by_type_in_range(range).await?;

        Ok(PeriodStats {
            total,
            delivered,
            failed,
            success_rate: Self::success_rate(delivered, total),
            message_types: by_type
                .into_iter()
                .map(|(message_type, count)| (message_type.as_str().to_string(), count))
                .collect(),
        })
    }
}

/// Midnight (UTC) of the day containing `at`
fn start_of_day(at: DateTime<Utc>) -> DateTime<Utc> {
    at.date_naive()
        .and_hms_opt(0, 0, 0)
        .expect("midnight is a valid time")
        .and_utc()
}
