use anyhow::{Context, Result};
use ::config::{Config, ConfigBuilder, Environment};
use ::config::builder::DefaultState;
use log::info;
use serde::Deserialize;
use url::Url;

use crate::assessment::WeightStrategy;

const DEFAULT_API_URL: &str = "http://localhost:8000";

/// Runtime configuration.
///
/// Sources, lowest priority first: built-in defaults, the API URL embedded at build time,
/// a `.env` file, then `WORKFORCE_*` environment variables.
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_url: Url,
    pub prompts_path: String,
    pub request_timeout_secs: u64,
    pub log_level: String,
    pub weight_strategy: WeightStrategy,
}

#[derive(Deserialize)]
struct RawConfig {
    api_url: String,
    prompts_path: String,
    request_timeout_secs: u64,
    log_level: String,
    weight_strategy: WeightStrategy,
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        if let Err(e) = dotenvy::dotenv() {
            info!("No .env file loaded ({}), using process environment", e);
        }
        Self::build(Self::defaults()?.add_source(Environment::with_prefix("WORKFORCE")))
    }

    /// Defaults plus explicit overrides, ignoring the environment.
    pub fn with_overrides(overrides: &[(&str, &str)]) -> Result<Self> {
        let mut builder = Self::defaults()?;
        for (key, value) in overrides {
            builder = builder.set_override(*key, *value)?;
        }
        Self::build(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        let api_url = option_env!("WORKFORCE_API_URL")
            .filter(|v| !v.is_empty())
            .unwrap_or(DEFAULT_API_URL);

        Ok(Config::builder()
            .set_default("api_url", api_url)?
            .set_default("prompts_path", "assessment/prompts/")?
            .set_default("request_timeout_secs", 15i64)?
            .set_default("log_level", "info")?
            .set_default("weight_strategy", "literal")?)
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let raw: RawConfig = builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")?;

        let api_url = Url::parse(&raw.api_url)
            .with_context(|| format!("Invalid api_url: {}", raw.api_url))?;
        info!("🔧 API endpoint: {}", api_url);

        Ok(Self {
            api_url,
            prompts_path: raw.prompts_path,
            request_timeout_secs: raw.request_timeout_secs,
            log_level: raw.log_level,
            weight_strategy: raw.weight_strategy,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::with_overrides(&[]).unwrap();
        assert_eq!(config.prompts_path, "assessment/prompts/");
        assert_eq!(config.request_timeout_secs, 15);
        assert_eq!(config.log_level, "info");
        assert_eq!(config.weight_strategy, WeightStrategy::Literal);
    }

    #[test]
    fn test_overrides_are_parsed() {
        let config = AppConfig::with_overrides(&[
            ("api_url", "https://api.workforce.test/v1"),
            ("request_timeout_secs", "30"),
            ("weight_strategy", "derived_remainder"),
        ])
        .unwrap();
        assert_eq!(config.api_url.as_str(), "https://api.workforce.test/v1");
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(config.weight_strategy, WeightStrategy::DerivedRemainder);
    }

    #[test]
    fn test_invalid_url_is_rejected() {
        assert!(AppConfig::with_overrides(&[("api_url", "not a url")]).is_err());
    }
}
