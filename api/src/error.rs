//! Domain error to HTTP response mapping.

use std::fmt;

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};

use otp_core::errors::DomainError;
use otp_shared::types::response::ApiResponse;

/// Handler result shorthand
pub type ApiResult = Result<HttpResponse, ApiError>;

/// Wrapper giving [`DomainError`] an HTTP representation
///
/// Every handler returns this as its error type; actix renders the response
/// through [`ResponseError`], so the status mapping lives in exactly one
/// place.
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl From<validator::ValidationErrors> for ApiError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let message = errors
            .field_errors()
            .values()
            .flat_map(|errs| errs.iter())
            .filter_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .next()
            .unwrap_or_else(|| "Invalid request data".to_string());
        Self(DomainError::validation(message))
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match &self.0 {
            DomainError::Validation { .. }
            | DomainError::CodeMismatch
            | DomainError::CodeExpired => StatusCode::BAD_REQUEST,
            DomainError::NotFound { .. } => StatusCode::NOT_FOUND,
            DomainError::InvalidCredentials | DomainError::Unauthorized { .. } => {
                StatusCode::UNAUTHORIZED
            }
            DomainError::Forbidden => StatusCode::FORBIDDEN,
            DomainError::Provider { .. } | DomainError::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let body = match &self.0 {
            // Server-side failures answer with a stable message and carry
            // the detail in the error field.
            DomainError::Provider { .. } => {
                ApiResponse::<()>::failure("Failed to send OTP").with_error(self.0.to_string())
            }
            DomainError::Internal { .. } => {
                ApiResponse::<()>::failure("Internal server error").with_error(self.0.to_string())
            }
            other => ApiResponse::<()>::failure(other.to_string()),
        };
        HttpResponse::build(self.status_code()).json(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (DomainError::validation("bad"), StatusCode::BAD_REQUEST),
            (DomainError::CodeMismatch, StatusCode::BAD_REQUEST),
            (DomainError::CodeExpired, StatusCode::BAD_REQUEST),
            (DomainError::not_found("OTP"), StatusCode::NOT_FOUND),
            (DomainError::InvalidCredentials, StatusCode::UNAUTHORIZED),
            (
                DomainError::unauthorized("no token"),
                StatusCode::UNAUTHORIZED,
            ),
            (DomainError::Forbidden, StatusCode::FORBIDDEN),
            (
                DomainError::internal("boom"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];
        for (err, status) in cases {
            assert_eq!(ApiError(err).status_code(), status);
        }
    }

    #[test]
    fn test_provider_failure_body_carries_detail() {
        let err = ApiError(DomainError::Provider {
            provider: "twilio".to_string(),
            message: "503 from upstream".to_string(),
        });
        let response = err.error_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_validation_errors_use_first_message() {
        use validator::Validate;

        #[derive(Validate)]
        struct Probe {
            #[validate(length(min = 1, message = "Phone number is required"))]
            phone: String,
        }

        let err: ApiError = Probe {
            phone: String::new(),
        }
        .validate()
        .unwrap_err()
        .into();
        assert_eq!(err.to_string(), "Phone number is required");
    }
}
