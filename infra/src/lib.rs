//! # Infrastructure Layer
//!
//! Concrete implementations behind the core's seams:
//! - **SMS**: the mock console provider and the Twilio REST provider, plus
//!   registry construction from configuration
//! - **Memory**: in-process implementations of the code store, delivery
//!   log, and user store

pub mod memory;
pub mod sms;

pub use memory::{InMemoryCodeStore, InMemoryDeliveryLog, InMemoryUserStore};
pub use sms::{build_provider_registry, MockSmsProvider, TwilioProvider};
