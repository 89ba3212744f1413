use std::time::Instant;

use actix_web::body::MessageBody;
use actix_web::dev::{Service as _, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::header::{HeaderName, HeaderValue};
use actix_web::{web, App};
use sqlx::PgPool;
use tracing::{info, Instrument};

use crate::api::openapi::build_openapi;
use crate::api::routes::{self, RouteGroups};
use crate::config::Settings;
use crate::middleware::request_logging::status_class;
use crate::middleware::{RequestContext, REQUEST_ID_HEADER};
use crate::observability::error_tracking::capture_server_error;
use crate::security::{cors_middleware, security_headers, CorsPolicy};

/// Everything a worker needs to build its copy of the application.
#[derive(Clone)]
pub struct AppContext {
    pub settings: web::Data<Settings>,
    pub cors: CorsPolicy,
    pub route_groups: RouteGroups,
    pub db_pool: Option<PgPool>,
    openapi: web::Data<utoipa::openapi::OpenApi>,
}

impl AppContext {
    pub fn new(settings: Settings) -> Self {
        let cors = CorsPolicy::from_origins(&settings.cors_origins);
        let openapi = web::Data::new(build_openapi(&settings));
        Self {
            settings: web::Data::new(settings),
            cors,
            route_groups: RouteGroups::default(),
            db_pool: None,
            openapi,
        }
    }

    pub fn with_db_pool(mut self, pool: PgPool) -> Self {
        self.db_pool = Some(pool);
        self
    }

    pub fn with_route_groups(mut self, route_groups: RouteGroups) -> Self {
        self.route_groups = route_groups;
        self
    }
}

pub fn build_app(
    ctx: AppContext,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(ctx.settings.clone())
        .app_data(ctx.openapi.clone())
        .app_data(routes::json_config())
        .app_data(routes::query_config())
        .configure(|cfg| {
            if let Some(pool) = &ctx.db_pool {
                cfg.app_data(web::Data::new(pool.clone()));
            }
        })
        .configure(|cfg| routes::configure(cfg, &ctx.route_groups))
        .default_service(web::to(routes::not_found))
        .wrap(security_headers(&ctx.settings))
        .wrap(cors_middleware(&ctx.cors))
        .wrap_fn(|req, srv| {
            let request = RequestContext::capture(&req);
            let span = request.span();
            let start = Instant::now();

            let fut = srv.call(req);
            async move {
                let mut response = fut.await?;
                if let Ok(value) = HeaderValue::from_str(&request.request_id) {
                    response
                        .headers_mut()
                        .insert(HeaderName::from_static(REQUEST_ID_HEADER), value);
                }

                let status = response.status().as_u16();
                info!(
                    status,
                    status_class = status_class(status),
                    latency_ms = start.elapsed().as_millis() as u64,
                    "request completed"
                );
                capture_server_error(&request, status);
                Ok::<_, actix_web::Error>(response)
            }
            .instrument(span)
        })
}
