use actix_web::{http::header, http::StatusCode, test as actix_test};
use checkin_backend::api::routes::system::{HealthResponse, RootResponse};
use checkin_backend::middleware::REQUEST_ID_HEADER;
use checkin_backend::{build_app, AppContext};
use uuid::Uuid;

use crate::common;

#[actix_rt::test]
async fn root_reports_running_message() {
    let app = actix_test::init_service(build_app(AppContext::new(common::test_settings()))).await;

    let request = actix_test::TestRequest::get().uri("/").to_request();
    let body: RootResponse = actix_test::call_and_read_body_json(&app, request).await;

    assert_eq!(body.message, "5500 Backend is running!");
}

#[actix_rt::test]
async fn health_reports_ok_and_environment() {
    let settings = checkin_backend::Settings {
        app_env: "prod".to_string(),
        ..common::test_settings()
    };
    let app = actix_test::init_service(build_app(AppContext::new(settings))).await;

    let request = actix_test::TestRequest::get().uri("/health").to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let body: HealthResponse = actix_test::read_body_json(response).await;
    assert_eq!(body.status, "ok");
    assert_eq!(body.env, "prod");
}

#[actix_rt::test]
async fn favicon_returns_no_content() {
    let app = actix_test::init_service(build_app(AppContext::new(common::test_settings()))).await;

    let request = actix_test::TestRequest::get().uri("/favicon.ico").to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let body = actix_test::read_body(response).await;
    assert!(body.is_empty());
}

#[actix_rt::test]
async fn openapi_document_is_served_with_app_title() {
    let settings = checkin_backend::Settings {
        app_name: "Class Connect".to_string(),
        ..common::test_settings()
    };
    let app = actix_test::init_service(build_app(AppContext::new(settings))).await;

    let request = actix_test::TestRequest::get().uri("/openapi.json").to_request();
    let body: serde_json::Value = actix_test::call_and_read_body_json(&app, request).await;

    assert_eq!(body["info"]["title"], "Class Connect");
    assert!(body["paths"]["/"]["get"].is_object());
}

#[actix_rt::test]
async fn unknown_path_returns_json_not_found() {
    let app = actix_test::init_service(build_app(AppContext::new(common::test_settings()))).await;

    let request = actix_test::TestRequest::get().uri("/does-not-exist").to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body: serde_json::Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "NOT_FOUND");
    assert_eq!(body["message"], "No route for GET /does-not-exist");
}

#[actix_rt::test]
async fn responses_carry_request_id() {
    let app = actix_test::init_service(build_app(AppContext::new(common::test_settings()))).await;

    let first = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/health").to_request(),
    )
    .await;
    let second = actix_test::call_service(
        &app,
        actix_test::TestRequest::get().uri("/missing").to_request(),
    )
    .await;

    let first_id = first
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Uuid::parse_str(value).ok())
        .expect("request id on success");
    let second_id = second
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| Uuid::parse_str(value).ok())
        .expect("request id on 404");

    assert_ne!(first_id, second_id);
}

#[actix_rt::test]
async fn security_headers_are_present_on_built_app() {
    let app = actix_test::init_service(build_app(AppContext::new(common::test_settings()))).await;

    let request = actix_test::TestRequest::get().uri("/").to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(
        response.headers().get("X-Content-Type-Options").unwrap(),
        "nosniff"
    );
    assert_eq!(response.headers().get("X-Frame-Options").unwrap(), "DENY");
}

#[actix_rt::test]
async fn built_app_applies_configured_cors_policy() {
    let settings = common::settings_with_origins(&["https://a.test", "https://b.test"]);
    let app = actix_test::init_service(build_app(AppContext::new(settings))).await;

    let request = actix_test::TestRequest::get()
        .uri("/health")
        .insert_header((header::ORIGIN, "https://a.test"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "https://a.test"
    );
    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS)
            .unwrap(),
        "true"
    );
}

#[actix_rt::test]
async fn built_app_defaults_to_wildcard_cors() {
    let app = actix_test::init_service(build_app(AppContext::new(common::test_settings()))).await;

    let request = actix_test::TestRequest::get()
        .uri("/")
        .insert_header((header::ORIGIN, "https://anywhere.test"))
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(
        response
            .headers()
            .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
            .unwrap(),
        "*"
    );
}
