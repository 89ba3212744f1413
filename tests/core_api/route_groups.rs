use actix_web::{http::StatusCode, test as actix_test, web, HttpResponse};
use checkin_backend::api::routes::{ApiDomain, RouteGroups};
use checkin_backend::{build_app, AppContext};
use serde::Deserialize;

use crate::common;

#[derive(Deserialize)]
struct CheckinRequest {
    student_id: String,
}

#[derive(Deserialize)]
struct Paging {
    page: u32,
}

async fn list_courses() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "courses": [] }))
}

async fn check_in(body: web::Json<CheckinRequest>) -> HttpResponse {
    HttpResponse::Created().json(serde_json::json!({ "student_id": body.student_id }))
}

async fn list_sessions(query: web::Query<Paging>) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "page": query.page }))
}

fn groups() -> RouteGroups {
    RouteGroups::new()
        .register(ApiDomain::Courses, |cfg| {
            cfg.route("", web::get().to(list_courses));
        })
        .register(ApiDomain::Public, |cfg| {
            cfg.route("/checkin", web::post().to(check_in));
        })
        .register(ApiDomain::Sessions, |cfg| {
            cfg.route("/", web::get().to(list_sessions));
        })
}

fn context() -> AppContext {
    AppContext::new(common::test_settings()).with_route_groups(groups())
}

#[actix_rt::test]
async fn registered_group_is_reachable_under_its_prefix() {
    let app = actix_test::init_service(build_app(context())).await;

    let request = actix_test::TestRequest::get().uri("/api/courses").to_request();
    let body: serde_json::Value = actix_test::call_and_read_body_json(&app, request).await;

    assert_eq!(body["courses"], serde_json::json!([]));
}

#[actix_rt::test]
async fn group_routes_are_not_mounted_at_root() {
    let app = actix_test::init_service(build_app(context())).await;

    let request = actix_test::TestRequest::post().uri("/checkin").to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_rt::test]
async fn json_body_is_handed_to_group_handler() {
    let app = actix_test::init_service(build_app(context())).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/public/checkin")
        .set_json(serde_json::json!({ "student_id": "s-1" }))
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body: serde_json::Value = actix_test::read_body_json(response).await;
    assert_eq!(body["student_id"], "s-1");
}

#[actix_rt::test]
async fn malformed_json_body_returns_bad_request() {
    let app = actix_test::init_service(build_app(context())).await;

    let request = actix_test::TestRequest::post()
        .uri("/api/public/checkin")
        .insert_header(("content-type", "application/json"))
        .set_payload("{\"student_id\":")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[actix_rt::test]
async fn invalid_query_returns_bad_request() {
    let app = actix_test::init_service(build_app(context())).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/sessions/?page=first")
        .to_request();
    let response = actix_test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = actix_test::read_body_json(response).await;
    assert_eq!(body["code"], "BAD_REQUEST");
}

#[actix_rt::test]
async fn unregistered_prefix_returns_json_not_found() {
    let app = actix_test::init_service(build_app(context())).await;

    for uri in ["/api/surveys", "/api/surveys/42", "/api/admin/tools"] {
        let request = actix_test::TestRequest::get().uri(uri).to_request();
        let response = actix_test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "uri {uri}");

        let body: serde_json::Value = actix_test::read_body_json(response).await;
        assert_eq!(body["code"], "NOT_FOUND");
    }
}

#[actix_rt::test]
async fn unknown_path_under_registered_prefix_returns_not_found() {
    let app = actix_test::init_service(build_app(context())).await;

    let request = actix_test::TestRequest::get()
        .uri("/api/courses/unknown/path")
        .to_request();
    let response = actix_test::call_service(&app, request).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
