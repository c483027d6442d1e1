//! Route registration

pub mod analytics;
pub mod health;
pub mod otp;
pub mod users;

use actix_web::web;

use crate::app::AppState;
use crate::middleware::JwtAuth;

/// Register all routes and attach per-scope auth middleware
///
/// Usage: `App::new().configure(routes::configure(state))`.
pub fn configure(state: AppState) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        let auth = state.auth.clone();
        cfg.app_data(web::Data::new(state))
            .route("/health", web::get().to(health::health_check))
            .service(
                web::scope("/api")
                    .service(
                        web::scope("/otp")
                            .route("/send", web::post().to(otp::send_otp))
                            .route("/verify", web::post().to(otp::verify_otp))
                            .service(
                                web::resource("/bulk-send")
                                    .wrap(JwtAuth::new(auth.clone()))
                                    .route(web::post().to(otp::bulk_send)),
                            ),
                    )
                    .service(
                        web::scope("/analytics")
                            .service(
                                web::resource("/sms")
                                    .wrap(JwtAuth::admin_only(auth.clone()))
                                    .route(web::get().to(analytics::sms_summary)),
                            )
                            .service(
                                web::resource("/sms/daily")
                                    .wrap(JwtAuth::admin_only(auth.clone()))
                                    .route(web::get().to(analytics::sms_daily)),
                            )
                            .service(
                                web::resource("/user")
                                    .wrap(JwtAuth::new(auth.clone()))
                                    .route(web::get().to(analytics::user_activity)),
                            ),
                    )
                    .service(
                        web::scope("/users")
                            .route("/login", web::post().to(users::login))
                            .service(
                                web::resource("")
                                    .wrap(JwtAuth::admin_only(auth.clone()))
                                    .route(web::post().to(users::create_user))
                                    .route(web::get().to(users::list_users)),
                            )
                            .service(
                                web::resource("/{id}")
                                    .wrap(JwtAuth::admin_only(auth))
                                    .route(web::delete().to(users::delete_user)),
                            ),
                    ),
            );
    }
}
