//! In-process storage implementations
//!
//! The storage backend is an external concern at the interface boundary;
//! these implementations keep everything in memory behind the core's
//! repository traits. They are internally synchronized and safe to share
//! across request handlers and background tasks.

pub mod code_store;
pub mod delivery_log;
pub mod user_store;

pub use code_store::InMemoryCodeStore;
pub use delivery_log::InMemoryDeliveryLog;
pub use user_store::InMemoryUserStore;
