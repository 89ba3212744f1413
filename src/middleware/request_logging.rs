//! Per-request context captured by the logging wrapper installed in
//! [`crate::app::build_app`].

use actix_web::dev::ServiceRequest;
use actix_web::http::header;
use tracing::Span;
use uuid::Uuid;

pub const REQUEST_ID_HEADER: &str = "x-request-id";

const UNKNOWN: &str = "unknown";

/// What the shell knows about a request before handing it to a route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    pub request_id: String,
    pub method: String,
    pub path: String,
    pub client_ip: String,
    pub user_agent: String,
}

impl RequestContext {
    /// Captures the request under a freshly generated id.
    pub fn capture(req: &ServiceRequest) -> Self {
        Self {
            request_id: Uuid::new_v4().to_string(),
            method: req.method().to_string(),
            path: req.path().to_string(),
            client_ip: client_ip(req),
            user_agent: user_agent(req),
        }
    }

    pub fn span(&self) -> Span {
        tracing::info_span!(
            "request",
            request_id = %self.request_id,
            method = %self.method,
            path = %self.path,
            client_ip = %self.client_ip,
            user_agent = %self.user_agent
        )
    }
}

/// Peer address as resolved by actix-web. Forwarded headers only count
/// through actix's trusted-proxy handling.
fn client_ip(req: &ServiceRequest) -> String {
    req.connection_info()
        .realip_remote_addr()
        .map_or_else(|| UNKNOWN.to_string(), str::to_string)
}

fn user_agent(req: &ServiceRequest) -> String {
    req.headers()
        .get(header::USER_AGENT)
        .and_then(|value| value.to_str().ok())
        .unwrap_or(UNKNOWN)
        .to_string()
}

pub fn status_class(status: u16) -> &'static str {
    match status {
        100..=199 => "1xx",
        200..=299 => "2xx",
        300..=399 => "3xx",
        400..=499 => "4xx",
        500..=599 => "5xx",
        _ => UNKNOWN,
    }
}
