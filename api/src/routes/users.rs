//! User management and login handlers.

use actix_web::{web, HttpResponse};
use uuid::Uuid;
use validator::Validate;

use otp_shared::types::response::ApiResponse;

use crate::app::AppState;
use crate::dto::{CreateUserRequest, LoginRequest, LoginResponse};
use crate::error::ApiResult;

/// `POST /api/users/login` - authenticate and issue a token
pub async fn login(state: web::Data<AppState>, request: web::Json<LoginRequest>) -> ApiResult {
    request.validate()?;

    let (user, token) = state.auth.login(&request.email, &request.password).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(LoginResponse { token, user })))
}

/// `POST /api/users` (admin) - create a user
pub async fn create_user(
    state: web::Data<AppState>,
    request: web::Json<CreateUserRequest>,
) -> ApiResult {
    request.validate()?;

    let user = state
        .auth
        .register(
            &request.name,
            &request.email,
            &request.password,
            request.role(),
        )
        .await?;
    Ok(HttpResponse::Created()
        .json(ApiResponse::success(user).with_message("User created successfully")))
}

/// `GET /api/users` (admin) - list all users
pub async fn list_users(state: web::Data<AppState>) -> ApiResult {
    let users = state.auth.list_users().await?;
    Ok(HttpResponse::Ok().json(ApiResponse::success(users)))
}

/// `DELETE /api/users/{id}` (admin) - remove a user
pub async fn delete_user(state: web::Data<AppState>, id: web::Path<Uuid>) -> ApiResult {
    state.auth.delete_user(id.into_inner()).await?;
    Ok(HttpResponse::Ok().json(ApiResponse::<()>::message("User deleted successfully")))
}
