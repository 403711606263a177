use std::{collections::HashMap, fs, path::Path};

use tracing::warn;

use crate::DEFAULT_API_BASE_URL;

pub const SETTINGS_FILE: &str = "division_admin.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub log_filter: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.into(),
            log_filter: "info".into(),
        }
    }
}

/// Defaults, then `division_admin.toml` in the working directory, then the
/// process environment.
pub fn load_settings() -> Settings {
    load_settings_from(Path::new(SETTINGS_FILE), |name| std::env::var(name).ok())
}

pub fn load_settings_from(path: &Path, env: impl Fn(&str) -> Option<String>) -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string(path) {
        match toml::from_str::<HashMap<String, String>>(&raw) {
            Ok(file_cfg) => {
                if let Some(v) = file_cfg.get("api_base_url").and_then(|v| non_empty(v)) {
                    settings.api_base_url = v;
                }
                if let Some(v) = file_cfg.get("log_filter").and_then(|v| non_empty(v)) {
                    settings.log_filter = v;
                }
            }
            Err(err) => {
                warn!(path = %path.display(), %err, "ignoring malformed settings file");
            }
        }
    }

    if let Some(v) = env("DIVISION_API_BASE_URL").as_deref().and_then(non_empty) {
        settings.api_base_url = v;
    }
    if let Some(v) = env("APP__API_BASE_URL").as_deref().and_then(non_empty) {
        settings.api_base_url = v;
    }
    if let Some(v) = env("APP__LOG_FILTER").as_deref().and_then(non_empty) {
        settings.log_filter = v;
    }

    settings
}

fn non_empty(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
