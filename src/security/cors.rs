use actix_cors::Cors;
use serde::Serialize;

const PREFLIGHT_MAX_AGE_SECS: usize = 600;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", content = "origins", rename_all = "snake_case")]
pub enum AllowedOrigins {
    Any,
    List(Vec<String>),
}

/// Cross-origin rules derived from the configured origin list.
///
/// An empty list opens the API to every origin without credentials, since a
/// wildcard origin cannot be combined with credentialed requests. A non-empty
/// list is used verbatim and credentials are allowed. Methods and request
/// headers are unrestricted either way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CorsPolicy {
    pub origins: AllowedOrigins,
    pub allow_credentials: bool,
}

impl CorsPolicy {
    pub fn from_origins(origins: &[String]) -> Self {
        if origins.is_empty() {
            Self {
                origins: AllowedOrigins::Any,
                allow_credentials: false,
            }
        } else {
            Self {
                origins: AllowedOrigins::List(origins.to_vec()),
                allow_credentials: true,
            }
        }
    }

    pub fn allows_origin(&self, origin: &str) -> bool {
        match &self.origins {
            AllowedOrigins::Any => true,
            AllowedOrigins::List(allowlist) => allowlist
                .iter()
                .any(|allowed| allowed == "*" || allowed == origin),
        }
    }
}

pub fn cors_middleware(policy: &CorsPolicy) -> Cors {
    let cors = Cors::default()
        .allow_any_method()
        .allow_any_header()
        .max_age(PREFLIGHT_MAX_AGE_SECS);

    let cors = match &policy.origins {
        AllowedOrigins::Any => cors.allow_any_origin().send_wildcard(),
        AllowedOrigins::List(_) => {
            let matcher = policy.clone();
            cors.allowed_origin_fn(move |origin, _| {
                origin
                    .to_str()
                    .map(|value| matcher.allows_origin(value))
                    .unwrap_or(false)
            })
        }
    };

    if policy.allow_credentials {
        cors.supports_credentials()
    } else {
        cors
    }
}
