//! JWT authentication middleware.
//!
//! Extracts the bearer token from the Authorization header, resolves it to an
//! [`AuthContext`] through the auth service, and injects the context into the
//! request extensions where handlers read it via `web::ReqData<AuthContext>`.
//! A missing or invalid token answers 401; the admin-only variant answers 403
//! for authenticated non-admin callers.

use std::future::{ready, Ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::header::AUTHORIZATION;
use actix_web::{Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;

use otp_core::errors::DomainError;
use otp_core::services::AuthService;

use crate::error::ApiError;

/// Authentication middleware factory
pub struct JwtAuth {
    auth: Arc<AuthService>,
    require_admin: bool,
}

impl JwtAuth {
    /// Require any authenticated caller
    pub fn new(auth: Arc<AuthService>) -> Self {
        Self {
            auth,
            require_admin: false,
        }
    }

    /// Require an authenticated admin caller
    pub fn admin_only(auth: Arc<AuthService>) -> Self {
        Self {
            auth,
            require_admin: true,
        }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            auth: self.auth.clone(),
            require_admin: self.require_admin,
        }))
    }
}

pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    auth: Arc<AuthService>,
    require_admin: bool,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);
        let auth = self.auth.clone();
        let require_admin = self.require_admin;

        Box::pin(async move {
            let token = match bearer_token(&req) {
                Some(token) => token,
                None => {
                    return Ok(reject(
                        req,
                        DomainError::unauthorized("Missing or invalid Authorization header"),
                    ));
                }
            };

            let context = match auth.authenticate(&token).await {
                Ok(context) => context,
                Err(err) => return Ok(reject(req, err)),
            };

            if require_admin && !context.is_admin() {
                return Ok(reject(req, DomainError::Forbidden));
            }

            req.extensions_mut().insert(context);
            service
                .call(req)
                .await
                .map(|res| res.map_into_left_body())
        })
    }
}

/// Pull the token out of `Authorization: Bearer <token>`
fn bearer_token(req: &ServiceRequest) -> Option<String> {
    req.headers()
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(|token| token.trim().to_string())
        .filter(|token| !token.is_empty())
}

fn reject<B>(req: ServiceRequest, err: DomainError) -> ServiceResponse<EitherBody<B>> {
    let response = ApiError(err).error_response().map_into_right_body();
    req.into_response(response)
}
