//! Bulk OTP dispatch job

pub mod service;

pub use service::{BulkDispatcher, BulkSendParams};
