//! Domain entities

pub mod delivery_record;
pub mod user;
pub mod verification_code;

pub use delivery_record::{DeliveryRecord, DeliveryStatus, MessageType};
pub use user::{User, UserRole};
pub use verification_code::VerificationCode;
