//! CORS configuration.
//!
//! Permissive in development; in production origins come from the
//! `ALLOWED_ORIGINS` environment variable (comma-separated).

use actix_cors::Cors;
use actix_web::http::{header, Method};
use std::env;

/// Build the CORS middleware for the current environment
pub fn create_cors() -> Cors {
    let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
    let max_age = env::var("CORS_MAX_AGE")
        .ok()
        .and_then(|v| v.parse::<usize>().ok())
        .unwrap_or(3600);

    let cors = Cors::default()
        .allowed_methods(vec![
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ORIGIN,
        ])
        .max_age(max_age);

    if environment == "production" {
        let origins = env::var("ALLOWED_ORIGINS").unwrap_or_default();
        origins
            .split(',')
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .fold(cors, |cors, origin| cors.allowed_origin(origin))
    } else {
        log::info!("Configuring permissive CORS for development");
        cors.allow_any_origin()
    }
}
