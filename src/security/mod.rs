pub mod cors;
pub mod headers;

pub use cors::{cors_middleware, AllowedOrigins, CorsPolicy};
pub use headers::security_headers;
