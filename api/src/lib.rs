//! HTTP layer for the OTP relay backend.
//!
//! Thin actix-web handlers over the core services: request DTOs are
//! validated, calls are delegated, and domain errors are mapped to HTTP
//! statuses. All state is built once at startup and injected; there are no
//! module-level singletons.

pub mod app;
pub mod dto;
pub mod error;
pub mod middleware;
pub mod routes;

pub use app::AppState;
pub use error::{ApiError, ApiResult};
