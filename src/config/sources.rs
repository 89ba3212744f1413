use std::collections::HashSet;
use std::path::Path;

use figment::providers::Env;
use figment::value::{Dict, Map, Value};
use figment::{Error, Metadata, Profile, Provider};
use tracing::warn;

use super::ConfigParseError;

/// Every key the resolver understands. Anything else in the environment or
/// the `.env` file is ignored.
pub const RECOGNISED_KEYS: &[&str] = &[
    "APP_NAME",
    "APP_ENV",
    "HOST",
    "PORT",
    "DATABASE_URL",
    "DATABASE_MAX_CONNECTIONS",
    "JWT_SECRET",
    "JWT_EXPIRE_HOURS",
    "CORS_ORIGINS",
    "ADMIN_EMAILS",
    "MAINTENANCE_ADMIN_PASSWORD",
    "SYSTEM_DEFAULT_ACTIVITY_ID",
    "OPENROUTER_API_BASE",
    "OPENROUTER_API_KEY",
    "OPENROUTER_DEFAULT_MODEL",
    "PUBLIC_APP_URL",
    "LOG_LEVEL",
    "LOG_JSON",
    "AUTO_CREATE_SCHEMA",
    "MIGRATIONS_DIR",
];

fn canonical_key(key: &str) -> Option<&'static str> {
    RECOGNISED_KEYS
        .iter()
        .copied()
        .find(|known| known.eq_ignore_ascii_case(key))
}

/// Flat key/value pairs handed to figment as plain strings. Typing happens
/// during extraction so that list and integer rules live in one place.
#[derive(Debug, Clone)]
pub struct KeyValueSource {
    name: String,
    pairs: Dict,
    upper_case: HashSet<&'static str>,
}

impl KeyValueSource {
    fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pairs: Dict::new(),
            upper_case: HashSet::new(),
        }
    }

    /// Stores a recognised key under its lower-case name. When one source
    /// carries a key under several spellings the upper-case spelling wins.
    fn insert(&mut self, key: &str, value: String) {
        let Some(canonical) = canonical_key(key) else {
            return;
        };
        let name = canonical.to_ascii_lowercase();

        if self.pairs.contains_key(&name) {
            warn!(
                key = canonical,
                source = %self.name,
                "setting supplied under several spellings; the upper-case one wins"
            );
        }

        if key == canonical {
            self.upper_case.insert(canonical);
        } else if self.upper_case.contains(canonical) {
            return;
        }
        self.pairs.insert(name, Value::from(value));
    }

    /// Recognised process environment variables, matched case-insensitively.
    pub fn environment() -> Self {
        let mut source = Self::new("environment variable(s)");
        for (key, value) in Env::raw().lowercase(false).iter() {
            source.insert(key.as_str(), value);
        }
        source
    }

    /// Recognised entries of a local `.env` file. A missing file contributes
    /// nothing; an unreadable or malformed one is an error.
    pub fn env_file(path: &Path) -> Result<Self, ConfigParseError> {
        let mut source = Self::new(format!("env file `{}`", path.display()));
        let entries = match dotenvy::from_path_iter(path) {
            Ok(entries) => entries,
            Err(err) if err.not_found() => return Ok(source),
            Err(err) => {
                return Err(ConfigParseError::EnvFile {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        };

        for entry in entries {
            let (key, value) = entry.map_err(|err| ConfigParseError::EnvFile {
                path: path.to_path_buf(),
                source: err,
            })?;
            source.insert(&key, value);
        }

        Ok(source)
    }
}

impl Provider for KeyValueSource {
    fn metadata(&self) -> Metadata {
        Metadata::named(self.name.clone())
    }

    fn data(&self) -> Result<Map<Profile, Dict>, Error> {
        Ok(Profile::Default.collect(self.pairs.clone()))
    }
}
