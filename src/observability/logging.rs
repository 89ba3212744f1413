use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Settings;
use crate::error::StartupError;

/// Builds the env filter from `LOG_LEVEL`, e.g. `info` or
/// `checkin_backend=debug,actix_web=info`.
pub fn env_filter(settings: &Settings) -> Result<EnvFilter, StartupError> {
    Ok(EnvFilter::try_new(settings.log_level.trim())?)
}

/// Installs the global subscriber. JSON lines when `LOG_JSON` is set,
/// human-readable output otherwise.
pub fn init_tracing(settings: &Settings) -> Result<(), StartupError> {
    let filter = env_filter(settings)?;

    if settings.log_json {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .json()
                    .with_current_span(true)
                    .with_span_list(true),
            )
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact())
            .try_init()?;
    }

    Ok(())
}
