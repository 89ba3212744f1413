use tracing::error;
use uuid::Uuid;

use crate::middleware::request_logging::RequestContext;

/// Logs a server-side failure under a new event id so it can be matched to
/// the request that caused it. Statuses below 500 are ignored.
pub fn capture_server_error(ctx: &RequestContext, status: u16) -> Option<Uuid> {
    if status < 500 {
        return None;
    }

    let event_id = Uuid::new_v4();
    error!(
        event_id = %event_id,
        request_id = %ctx.request_id,
        method = %ctx.method,
        path = %ctx.path,
        status,
        "unexpected server error"
    );
    Some(event_id)
}
