//! OTP send, verify, and bulk dispatch handlers.

use actix_web::{web, HttpResponse};
use log::info;
use validator::Validate;

use otp_core::domain::entities::MessageType;
use otp_core::errors::DomainError;
use otp_core::services::{AuthContext, BulkSendParams};
use otp_shared::types::response::ApiResponse;
use otp_shared::utils::phone::is_valid_phone_number;

use crate::app::AppState;
use crate::dto::{BulkSendAck, BulkSendRequest, SendOtpRequest, VerifyOtpRequest};
use crate::error::ApiResult;

/// `POST /api/otp/send` - issue and send a single OTP
pub async fn send_otp(
    state: web::Data<AppState>,
    request: web::Json<SendOtpRequest>,
) -> ApiResult {
    request.validate()?;
    if !is_valid_phone_number(&request.phone_number) {
        return Err(DomainError::validation("Invalid phone number format").into());
    }

    state
        .otp
        .send_otp(
            &request.phone_number,
            request.provider.as_deref(),
            None,
            MessageType::Otp,
        )
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message("OTP sent successfully")))
}

/// `POST /api/otp/verify` - verify and consume the most recent OTP
pub async fn verify_otp(
    state: web::Data<AppState>,
    request: web::Json<VerifyOtpRequest>,
) -> ApiResult {
    request.validate()?;

    state
        .otp
        .verify_otp(&request.phone_number, &request.otp)
        .await?;

    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message("OTP verified successfully")))
}

/// `POST /api/otp/bulk-send` - validate, acknowledge, and run in background
///
/// Answers 202 as soon as the batch is accepted. Any pre-flight failure
/// (empty targets, non-positive knobs, unknown provider) answers before a
/// single row is written.
pub async fn bulk_send(
    state: web::Data<AppState>,
    caller: web::ReqData<AuthContext>,
    request: web::Json<BulkSendRequest>,
) -> ApiResult {
    let request = request.into_inner();
    let params = BulkSendParams {
        phone_numbers: request.phone_numbers,
        total_sms: request.total_sms,
        pause_after: request.pause_after,
        pause_seconds: request.pause_seconds,
        provider: request.provider,
        user_id: Some(caller.user_id),
    };

    let total_messages = state.dispatcher.spawn(params)?;
    info!(
        "bulk OTP batch accepted: {} messages for user {}",
        total_messages, caller.user_id
    );

    Ok(HttpResponse::Accepted().json(BulkSendAck {
        success: true,
        message: "Bulk OTP sending started".to_string(),
        total_messages,
    }))
}
