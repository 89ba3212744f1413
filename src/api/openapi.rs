use utoipa::openapi::tag::TagBuilder;
use utoipa::OpenApi;

use crate::api::routes::system::{HealthResponse, RootResponse};
use crate::api::routes::ApiDomain;
use crate::config::Settings;

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::api::routes::system::root,
        crate::api::routes::system::health,
        crate::api::routes::system::favicon,
    ),
    components(schemas(RootResponse, HealthResponse)),
    tags(
        (name = "System", description = "Liveness and diagnostics"),
    ),
    info(
        title = "5500 Backend",
        version = "0.1.0",
        description = "Backend for QR code-based classroom checkin system"
    )
)]
pub struct ApiDoc;

/// The served document: titled after the configured app name, with one tag
/// per route group.
pub fn build_openapi(settings: &Settings) -> utoipa::openapi::OpenApi {
    let mut doc = ApiDoc::openapi();
    doc.info.title = settings.app_name.clone();

    let tags = doc.tags.get_or_insert_with(Vec::new);
    for domain in ApiDomain::ALL {
        tags.push(
            TagBuilder::new()
                .name(domain.tag())
                .description(Some(format!("Routes under {}", domain.prefix())))
                .build(),
        );
    }

    doc
}
