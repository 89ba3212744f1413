use actix_web::middleware::DefaultHeaders;

use crate::config::Settings;

const LOCAL_ENVIRONMENTS: &[&str] = &["dev", "development", "local", "test"];

/// Whether the deployment is served over TLS and should pin browsers to it.
pub fn enforces_https(app_env: &str) -> bool {
    !LOCAL_ENVIRONMENTS
        .iter()
        .any(|local| local.eq_ignore_ascii_case(app_env.trim()))
}

/// Hardening headers added to every response. HSTS is withheld for local
/// environments, which are served over plain HTTP.
pub fn security_headers(settings: &Settings) -> DefaultHeaders {
    let headers = DefaultHeaders::new()
        .add(("X-Content-Type-Options", "nosniff"))
        .add(("X-Frame-Options", "DENY"))
        .add(("Referrer-Policy", "strict-origin-when-cross-origin"));

    if enforces_https(&settings.app_env) {
        headers.add((
            "Strict-Transport-Security",
            "max-age=31536000; includeSubDomains",
        ))
    } else {
        headers
    }
}
