#![allow(dead_code)]

use checkin_backend::Settings;

/// Settings for a local test deployment: no configured origins, `test`
/// environment.
pub fn test_settings() -> Settings {
    Settings {
        app_env: "test".to_string(),
        ..Settings::default()
    }
}

pub fn settings_with_origins(origins: &[&str]) -> Settings {
    Settings {
        cors_origins: origins.iter().map(|origin| origin.to_string()).collect(),
        ..test_settings()
    }
}

pub fn production_settings() -> Settings {
    Settings {
        app_env: "prod".to_string(),
        ..Settings::default()
    }
}
