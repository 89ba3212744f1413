use thiserror::Error;

use crate::config::ConfigParseError;

/// Anything that stops the process before it starts serving traffic.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration could not be resolved: {0}")]
    Config(#[from] ConfigParseError),

    #[error("logging could not be initialised: {0}")]
    Logging(#[from] tracing_subscriber::util::TryInitError),

    #[error("invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::ParseError),

    #[error("database pool could not be created: {0}")]
    Database(#[from] sqlx::Error),

    #[error("schema bootstrap failed: {0}")]
    Schema(#[from] sqlx::migrate::MigrateError),

    #[error("server failed: {0}")]
    Io(#[from] std::io::Error),
}
