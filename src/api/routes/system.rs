use actix_web::{web, HttpResponse};
use serde::{Deserialize, Serialize};
use utoipa::openapi::OpenApi;
use utoipa::ToSchema;

use crate::config::Settings;

pub const ROOT_MESSAGE: &str = "5500 Backend is running!";

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub env: String,
}

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is up", body = RootResponse)
    ),
    tag = "System"
)]
pub async fn root() -> web::Json<RootResponse> {
    web::Json(RootResponse {
        message: ROOT_MESSAGE.to_string(),
    })
}

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Health check passed", body = HealthResponse)
    ),
    tag = "System"
)]
pub async fn health(settings: web::Data<Settings>) -> web::Json<HealthResponse> {
    web::Json(HealthResponse {
        status: "ok".to_string(),
        env: settings.app_env.clone(),
    })
}

#[utoipa::path(
    get,
    path = "/favicon.ico",
    responses(
        (status = 204, description = "No favicon is served")
    ),
    tag = "System"
)]
pub async fn favicon() -> HttpResponse {
    HttpResponse::NoContent().finish()
}

pub async fn openapi_json(doc: web::Data<OpenApi>) -> HttpResponse {
    HttpResponse::Ok().json(doc.get_ref())
}
