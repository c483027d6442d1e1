//! Repository traits defining the persistence seams
//!
//! Storage itself is an external collaborator: the core only talks to these
//! async traits. The infra crate supplies the concrete implementations.

pub mod code_repository;
pub mod delivery_log;
pub mod user_repository;

pub use code_repository::CodeRepository;
pub use delivery_log::{DeliveryLogRepository, TimeRange};
pub use user_repository::UserRepository;
