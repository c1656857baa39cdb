use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

pub use hubspot_core::TapConfig;

/// Prefix for environment overrides (TAP_HUBSPOT_ACCESS_TOKEN, TAP_HUBSPOT_LOGGING__LEVEL)
pub const ENV_PREFIX: &str = "TAP_HUBSPOT";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(flatten)]
    pub tap: TapConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (trace, debug, info, warn, error)
    pub level: String,

    /// JSON formatted logs
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

impl AppConfig {
    /// Load defaults, then the optional config file, then `TAP_HUBSPOT_*` variables
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_with_env(config_file, None)
    }

    /// Same as [`AppConfig::load`], reading overrides from `env` instead of the process
    pub fn load_with_env(
        config_file: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            // Start with defaults
            .add_source(config::Config::try_from(&Self::default())?);

        // Format follows the file extension (json, yaml, toml)
        if let Some(path) = config_file {
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let s = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    // Values stay strings; `streams`/`fields` split on ',' when deserialized
                    .source(env),
            )
            .build()?;

        let config = s.try_deserialize()?;
        Ok(config)
    }
}
