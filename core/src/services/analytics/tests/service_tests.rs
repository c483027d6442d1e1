use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::{DeliveryRecord, MessageType};
use crate::repositories::DeliveryLogRepository;
use crate::services::analytics::{AnalyticsService, RECENT_ACTIVITY_LIMIT};
use crate::services::otp::tests::mocks::VecDeliveryLog;

fn delivered_at(hours_ago: i64, message_type: MessageType) -> DeliveryRecord {
    let mut record =
        DeliveryRecord::delivered("+14155550100", message_type, "mock", "body", None);
    record.created_at = Utc::now() - Duration::hours(hours_ago);
    record
}

fn failed_at(hours_ago: i64) -> DeliveryRecord {
    let mut record = DeliveryRecord::failed(
        "+14155550100",
        MessageType::Bulk,
        "mock",
        "body",
        None,
        "boom",
    );
    record.created_at = Utc::now() - Duration::hours(hours_ago);
    record
}

#[tokio::test]
async fn summary_counts_and_rates_per_period() {
    let log = Arc::new(VecDeliveryLog::new());
    // Three delivered and one failed within the last hour, plus one
    // delivered ten days ago that only all-time should see.
    for _ in 0..3 {
        log.append(delivered_at(0, MessageType::Otp)).await.unwrap();
    }
    log.append(failed_at(0)).await.unwrap();
    log.append(delivered_at(24 * 10, MessageType::Other))
        .await
        .unwrap();

    let analytics = AnalyticsService::new(log);
    let summary = analytics.summary().await.unwrap();

    assert_eq!(summary.today.total, 4);
    assert_eq!(summary.today.delivered, 3);
    assert_eq!(summary.today.failed, 1);
    assert_eq!(summary.today.success_rate, "75.00%");
    assert_eq!(summary.today.message_types.get("otp"), Some(&3));
    assert_eq!(summary.today.message_types.get("bulk"), Some(&1));

    assert_eq!(summary.last7_days.total, 4);
    assert_eq!(summary.all_time.total, 5);
    assert_eq!(summary.all_time.message_types.get("other"), Some(&1));
}

#[tokio::test]
async fn summary_of_empty_log_reports_zero_rate() {
    let analytics = AnalyticsService::new(Arc::new(VecDeliveryLog::new()));
    let summary = analytics.summary().await.unwrap();
    assert_eq!(summary.all_time.total, 0);
    assert_eq!(summary.all_time.success_rate, "0%");
}

#[tokio::test]
async fn daily_counts_bucket_by_calendar_date() {
    let log = Arc::new(VecDeliveryLog::new());
    log.append(delivered_at(0, MessageType::Otp)).await.unwrap();
    log.append(delivered_at(0, MessageType::Otp)).await.unwrap();
    log.append(failed_at(24 * 2)).await.unwrap();
    // Outside the 30-day window, must not appear.
    log.append(failed_at(24 * 40)).await.unwrap();

    let analytics = AnalyticsService::new(log);
    let daily = analytics.daily_counts().await.unwrap();

    assert_eq!(daily.len(), 2);
    let today_key = Utc::now().format("%Y-%m-%d").to_string();
    let today = &daily[&today_key];
    assert_eq!(today.delivered, 2);
    assert_eq!(today.failed, 0);
    assert_eq!(today.total, 2);

    let two_days_ago_key = (Utc::now() - Duration::days(2))
        .format("%Y-%m-%d")
        .to_string();
    assert_eq!(daily[&two_days_ago_key].failed, 1);

    // Keys are zero-padded ISO dates, so lexicographic order is date order.
    for key in daily.keys() {
        assert_eq!(key.len(), 10);
    }
}

#[tokio::test]
async fn user_activity_is_newest_first_and_capped() {
    let log = Arc::new(VecDeliveryLog::new());
    let user_id = Uuid::new_v4();
    for i in 0..(RECENT_ACTIVITY_LIMIT + 10) {
        let mut record = DeliveryRecord::delivered(
            "+14155550100",
            MessageType::Bulk,
            "mock",
            format!("body {}", i),
            Some(user_id),
        );
        record.created_at = Utc::now() - Duration::minutes((RECENT_ACTIVITY_LIMIT + 10 - i) as i64);
        log.append(record).await.unwrap();
    }
    // Another user's record must not leak in.
    log.append(DeliveryRecord::delivered(
        "+14155550101",
        MessageType::Otp,
        "mock",
        "other user",
        Some(Uuid::new_v4()),
    ))
    .await
    .unwrap();

    let analytics = AnalyticsService::new(log);
    let activity = analytics.user_activity(user_id).await.unwrap();

    assert_eq!(activity.len(), RECENT_ACTIVITY_LIMIT);
    assert!(activity.iter().all(|r| r.user_id == Some(user_id)));
    let last_body = format!("body {}", RECENT_ACTIVITY_LIMIT + 9);
    assert_eq!(activity[0].message, last_body);
}
