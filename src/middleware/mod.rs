pub mod request_logging;

pub use request_logging::{RequestContext, REQUEST_ID_HEADER};
