//! HTTP shell for the QR code classroom check-in backend: configuration
//! resolution, CORS policy, built-in endpoints and route-group mounting.

pub mod api;
pub mod app;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod lifecycle;
pub mod middleware;
pub mod observability;
pub mod security;

pub use app::{build_app, AppContext};
pub use config::Settings;
