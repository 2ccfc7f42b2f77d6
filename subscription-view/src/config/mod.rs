use crate::error::ViewError;
use config::{Config as Cfg, File};
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct ViewConfig {
    #[serde(default = "default_service_name")]
    pub service_name: String,
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub log_format: LogFormat,
    /// Whether the attach-plan select filters options as the user types.
    #[serde(default = "default_plan_search")]
    pub plan_search: bool,
}

#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Pretty,
}

fn default_service_name() -> String {
    "subscription-view".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_plan_search() -> bool {
    true
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            service_name: default_service_name(),
            log_level: default_log_level(),
            log_format: LogFormat::default(),
            plan_search: default_plan_search(),
        }
    }
}

impl ViewConfig {
    /// Load from an optional `configuration` file, then `APP__*` environment overrides.
    pub fn load() -> Result<Self, ViewError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        let config: ViewConfig = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    /// Load from an explicit file; environment overrides still apply.
    pub fn from_file(path: &Path) -> Result<Self, ViewError> {
        let config = Cfg::builder()
            .add_source(File::from(path).required(true))
            .add_source(
                config::Environment::with_prefix("APP")
                    .prefix_separator("__")
                    .separator("__"),
            )
            .build()?;

        let config: ViewConfig = config.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ViewError> {
        if self.service_name.trim().is_empty() {
            return Err(ViewError::ConfigError(anyhow::anyhow!(
                "service_name must not be empty"
            )));
        }

        if self.log_level.trim().is_empty() {
            return Err(ViewError::ConfigError(anyhow::anyhow!(
                "log_level must not be empty"
            )));
        }

        Ok(())
    }
}
