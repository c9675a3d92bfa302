//! Runtime configuration loaded from the environment.

use std::path::PathBuf;

use qr_artifact::StyleConfig;

use super::ConfigError;
use super::defaults::{LOGO_PATH, PUBLIC_BASE_URL, SETTINGS, STORAGE_ROOT};
use super::validation::validate_setting;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub storage_root: PathBuf,
    pub public_base_url: String,
    pub logo_path: Option<PathBuf>,
}

impl AppConfig {
    /// Load configuration from process environment variables.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, falling back to defaults and
    /// validating every value.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut values = Vec::with_capacity(SETTINGS.len());
        for def in SETTINGS {
            let value = lookup(def.key)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| def.default.to_string());
            if value.is_empty() {
                if def.required {
                    return Err(ConfigError::Missing(def.key));
                }
            } else {
                validate_setting(def.key, &value).map_err(|message| ConfigError::Invalid {
                    key: def.key,
                    message,
                })?;
            }
            values.push((def.key, value));
        }

        let g = |key: &str| -> String {
            values
                .iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| v.clone())
                .unwrap_or_default()
        };

        let logo = g(LOGO_PATH);
        Ok(Self {
            storage_root: PathBuf::from(g(STORAGE_ROOT)),
            public_base_url: g(PUBLIC_BASE_URL),
            logo_path: (!logo.is_empty()).then(|| PathBuf::from(logo)),
        })
    }

    /// The fixed style policy, with the configured logo if any.
    pub fn style(&self) -> StyleConfig {
        match &self.logo_path {
            Some(path) => StyleConfig::default().with_logo_path(path),
            None => StyleConfig::default(),
        }
    }
}
