//! SMS analytics handlers.

use actix_web::{web, HttpResponse};

use otp_core::services::AuthContext;
use otp_shared::types::response::ApiResponse;

use crate::app::AppState;
use crate::error::ApiResult;

/// `GET /api/analytics/sms` (admin) - period summaries
pub async fn sms_summary(state: web::Data<AppState>) -> ApiResult {
    let summary = state.analytics.summary().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(summary)))
}

/// `GET /api/analytics/sms/daily` (admin) - daily outcome buckets
pub async fn sms_daily(state: web::Data<AppState>) -> ApiResult {
    let buckets = state.analytics.daily_counts().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(buckets)))
}

/// `GET /api/analytics/user` - the caller's recent delivery records
pub async fn user_activity(
    state: web::Data<AppState>,
    caller: web::ReqData<AuthContext>,
) -> ApiResult {
    let activity = state.analytics.user_activity(caller.user_id).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(activity)))
}
