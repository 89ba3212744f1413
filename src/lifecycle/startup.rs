use tracing::info;

use crate::config::Settings;
use crate::error::StartupError;
use crate::infrastructure::db::{SchemaBootstrapper, SchemaOutcome};
use crate::security::CorsPolicy;

/// Logs the resolved configuration without secrets.
pub fn log_resolved_settings(settings: &Settings, cors: &CorsPolicy) {
    let cors = serde_json::to_string(cors).unwrap_or_else(|_| "<unserializable>".to_string());
    info!(
        app_name = %settings.app_name,
        app_env = %settings.app_env,
        host = %settings.host,
        port = settings.port,
        cors = %cors,
        admin_emails = settings.admin_emails.len(),
        jwt_expire_hours = settings.jwt_expire_hours,
        public_app_url = %settings.public_app_url,
        openrouter_configured = settings.openrouter_api_key.is_some(),
        auto_create_schema = settings.auto_create_schema,
        "configuration resolved"
    );
}

/// Runs the one-off steps that must finish before the server accepts
/// connections. Returns the schema outcome when the schema step ran.
pub async fn prepare(
    settings: &Settings,
    schema: &dyn SchemaBootstrapper,
) -> Result<Option<SchemaOutcome>, StartupError> {
    if !settings.auto_create_schema {
        info!("automatic schema creation disabled");
        return Ok(None);
    }

    info!("ensuring database schema");
    let outcome = schema.ensure_schema().await?;
    Ok(Some(outcome))
}
