use actix_web::{web, HttpRequest, HttpResponse};

use crate::error::{AppError, AppResult};

pub mod groups;
pub mod system;

pub use groups::{ApiDomain, RouteGroupFn, RouteGroups};

/// Registers the built-in endpoints and mounts every route group under its
/// prefix.
pub fn configure(cfg: &mut web::ServiceConfig, groups: &RouteGroups) {
    cfg.route("/", web::get().to(system::root))
        .route("/health", web::get().to(system::health))
        .route("/favicon.ico", web::get().to(system::favicon))
        .route("/openapi.json", web::get().to(system::openapi_json));

    groups.mount(cfg);
}

pub async fn not_found(request: HttpRequest) -> AppResult<HttpResponse> {
    Err(AppError::NotFound(format!(
        "No route for {} {}",
        request.method(),
        request.path()
    )))
}

pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _request| AppError::BadRequest(err.to_string()).into())
}

pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _request| AppError::BadRequest(err.to_string()).into())
}
