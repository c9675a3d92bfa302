//! Configuration: setting definitions, validation, loading from the environment.

pub mod app_config;
pub mod defaults;
pub mod validation;

pub use app_config::AppConfig;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("required setting {0} is not set")]
    Missing(&'static str),
    #[error("validation error for {key}: {message}")]
    Invalid { key: &'static str, message: String },
}
