use std::time::Duration;

use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::Settings;

const ACQUIRE_TIMEOUT: Duration = Duration::from_secs(10);

/// Creates the shared pool without opening a connection. Route groups and the
/// schema step connect on first use; only a malformed URL fails here.
pub fn create_pool(settings: &Settings) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(settings.database_max_connections)
        .acquire_timeout(ACQUIRE_TIMEOUT)
        .connect_lazy(&settings.database_url)
}
