//! Read-side analytics over the delivery log

pub mod service;

pub use service::{
    AnalyticsService, DailyCount, PeriodStats, SmsAnalytics, RECENT_ACTIVITY_LIMIT,
};

#[cfg(test)]
mod tests;
