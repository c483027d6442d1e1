//! Request and response DTOs
//!
//! Wire field names are camelCase throughout.

pub mod otp;
pub mod user;

pub use otp::{BulkSendAck, BulkSendRequest, SendOtpRequest, VerifyOtpRequest};
pub use user::{CreateUserRequest, LoginRequest, LoginResponse};
