pub mod coerce;
pub mod defaults;
pub mod list;
pub mod sources;

use std::fmt;
use std::path::{Path, PathBuf};

use figment::Figment;
use serde::Deserialize;
use thiserror::Error;

pub use list::{parse_list, ListInput};
pub use sources::{KeyValueSource, RECOGNISED_KEYS};

#[derive(Debug, Error)]
pub enum ConfigParseError {
    #[error("invalid configuration value: {0}")]
    Extract(#[from] Box<figment::Error>),

    #[error("{key} is not a valid JSON array of strings: {source}")]
    MalformedList {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to read {}: {source}", path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

/// Resolved runtime configuration. Built once in `main` and shared read-only
/// with every component that needs it.
#[derive(Clone, PartialEq, Eq)]
pub struct Settings {
    pub app_name: String,
    pub app_env: String,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub database_max_connections: u32,
    pub jwt_secret: String,
    pub jwt_expire_hours: u32,
    pub cors_origins: Vec<String>,
    pub admin_emails: Vec<String>,
    pub maintenance_admin_password: Option<String>,
    pub system_default_activity_id: Option<String>,
    pub openrouter_api_base: String,
    pub openrouter_api_key: Option<String>,
    pub openrouter_default_model: String,
    pub public_app_url: String,
    pub log_level: String,
    pub log_json: bool,
    pub auto_create_schema: bool,
    pub migrations_dir: PathBuf,
}

#[derive(Debug, Deserialize)]
struct RawSettings {
    #[serde(default = "defaults::default_app_name")]
    app_name: String,
    #[serde(default = "defaults::default_app_env")]
    app_env: String,
    #[serde(default = "defaults::default_host")]
    host: String,
    #[serde(
        default = "defaults::default_port",
        deserialize_with = "coerce::integer"
    )]
    port: u16,
    #[serde(default = "defaults::default_database_url")]
    database_url: String,
    #[serde(
        default = "defaults::default_database_max_connections",
        deserialize_with = "coerce::integer"
    )]
    database_max_connections: u32,
    #[serde(default = "defaults::default_jwt_secret")]
    jwt_secret: String,
    #[serde(
        default = "defaults::default_jwt_expire_hours",
        deserialize_with = "coerce::integer"
    )]
    jwt_expire_hours: u32,
    #[serde(default)]
    cors_origins: ListInput,
    #[serde(default)]
    admin_emails: ListInput,
    #[serde(default)]
    maintenance_admin_password: Option<String>,
    #[serde(default)]
    system_default_activity_id: Option<String>,
    #[serde(default = "defaults::default_openrouter_api_base")]
    openrouter_api_base: String,
    #[serde(default)]
    openrouter_api_key: Option<String>,
    #[serde(default = "defaults::default_openrouter_default_model")]
    openrouter_default_model: String,
    #[serde(default = "defaults::default_public_app_url")]
    public_app_url: String,
    #[serde(default = "defaults::default_log_level")]
    log_level: String,
    #[serde(default, deserialize_with = "coerce::boolean")]
    log_json: bool,
    #[serde(default, deserialize_with = "coerce::boolean")]
    auto_create_schema: bool,
    #[serde(default = "defaults::default_migrations_dir")]
    migrations_dir: PathBuf,
}

impl RawSettings {
    fn resolve(self) -> Result<Settings, ConfigParseError> {
        Ok(Settings {
            cors_origins: parse_list("CORS_ORIGINS", self.cors_origins)?,
            admin_emails: parse_list("ADMIN_EMAILS", self.admin_emails)?,
            app_name: self.app_name,
            app_env: self.app_env,
            host: self.host,
            port: self.port,
            database_url: self.database_url,
            database_max_connections: self.database_max_connections,
            jwt_secret: self.jwt_secret,
            jwt_expire_hours: self.jwt_expire_hours,
            maintenance_admin_password: self.maintenance_admin_password,
            system_default_activity_id: self.system_default_activity_id,
            openrouter_api_base: self.openrouter_api_base,
            openrouter_api_key: self.openrouter_api_key,
            openrouter_default_model: self.openrouter_default_model,
            public_app_url: self.public_app_url,
            log_level: self.log_level,
            log_json: self.log_json,
            auto_create_schema: self.auto_create_schema,
            migrations_dir: self.migrations_dir,
        })
    }
}

impl Settings {
    /// Resolves settings from the process environment layered over the
    /// `.env` file in the working directory.
    pub fn load() -> Result<Self, ConfigParseError> {
        Self::load_with_env_file(Path::new(defaults::DEFAULT_ENV_FILE))
    }

    pub fn load_with_env_file(env_file: &Path) -> Result<Self, ConfigParseError> {
        let figment = Figment::new()
            .merge(KeyValueSource::env_file(env_file)?)
            .merge(KeyValueSource::environment());

        Self::from_figment(&figment)
    }

    /// Extracts settings from an arbitrary figment; keys absent from every
    /// provider take their defaults.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigParseError> {
        figment
            .extract::<RawSettings>()
            .map_err(Box::new)?
            .resolve()
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            app_name: defaults::default_app_name(),
            app_env: defaults::default_app_env(),
            host: defaults::default_host(),
            port: defaults::default_port(),
            database_url: defaults::default_database_url(),
            database_max_connections: defaults::default_database_max_connections(),
            jwt_secret: defaults::default_jwt_secret(),
            jwt_expire_hours: defaults::default_jwt_expire_hours(),
            cors_origins: Vec::new(),
            admin_emails: Vec::new(),
            maintenance_admin_password: None,
            system_default_activity_id: None,
            openrouter_api_base: defaults::default_openrouter_api_base(),
            openrouter_api_key: None,
            openrouter_default_model: defaults::default_openrouter_default_model(),
            public_app_url: defaults::default_public_app_url(),
            log_level: defaults::default_log_level(),
            log_json: false,
            auto_create_schema: false,
            migrations_dir: defaults::default_migrations_dir(),
        }
    }
}

fn redact<T>(value: &Option<T>) -> &'static str {
    if value.is_some() {
        "[REDACTED]"
    } else {
        "None"
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("app_name", &self.app_name)
            .field("app_env", &self.app_env)
            .field("host", &self.host)
            .field("port", &self.port)
            .field("database_url", &"[REDACTED]")
            .field("database_max_connections", &self.database_max_connections)
            .field("jwt_secret", &"[REDACTED]")
            .field("jwt_expire_hours", &self.jwt_expire_hours)
            .field("cors_origins", &self.cors_origins)
            .field("admin_emails", &self.admin_emails)
            .field(
                "maintenance_admin_password",
                &redact(&self.maintenance_admin_password),
            )
            .field(
                "system_default_activity_id",
                &self.system_default_activity_id,
            )
            .field("openrouter_api_base", &self.openrouter_api_base)
            .field("openrouter_api_key", &redact(&self.openrouter_api_key))
            .field("openrouter_default_model", &self.openrouter_default_model)
            .field("public_app_url", &self.public_app_url)
            .field("log_level", &self.log_level)
            .field("log_json", &self.log_json)
            .field("auto_create_schema", &self.auto_create_schema)
            .field("migrations_dir", &self.migrations_dir)
            .finish()
    }
}
