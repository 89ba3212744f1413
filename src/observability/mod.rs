pub mod error_tracking;
pub mod logging;

pub use logging::init_tracing;
