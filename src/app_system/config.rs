use std::env;
use std::str::FromStr;

use thiserror::Error;

pub const DEFAULT_API_URL: &str = "http://localhost:3001";
pub const DEFAULT_CHANNEL_BUFFER: usize = 32;

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid environment override for `{key}`: `{value}`")]
    InvalidEnvOverride { key: String, value: String },
    #[error("configuration validation failed: {0}")]
    Validation(String),
}

/// Which product/cart service the storefront talks to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GatewayKind {
    /// The in-process actor system.
    Memory,
    /// A REST backend at `GatewayConfig::api_url`.
    Http,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogFormat {
    Compact,
    Pretty,
    Json,
}

#[derive(Clone, Debug, PartialEq)]
pub struct GatewayConfig {
    pub kind: GatewayKind,
    pub api_url: String,
    pub channel_buffer: usize,
}

#[derive(Clone, Debug, PartialEq)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
}

#[derive(Clone, Debug, PartialEq)]
pub struct StorefrontConfig {
    pub gateway: GatewayConfig,
    pub logging: LoggingConfig,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            gateway: GatewayConfig {
                kind: GatewayKind::Memory,
                api_url: DEFAULT_API_URL.to_string(),
                channel_buffer: DEFAULT_CHANNEL_BUFFER,
            },
            logging: LoggingConfig { level: "info".to_string(), format: LogFormat::Compact },
        }
    }
}

impl FromStr for GatewayKind {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "http" => Ok(Self::Http),
            other => Err(ConfigError::Validation(format!(
                "unsupported gateway `{other}` (expected memory|http)"
            ))),
        }
    }
}

impl FromStr for LogFormat {
    type Err = ConfigError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(ConfigError::Validation(format!(
                "unsupported log format `{other}` (expected compact|pretty|json)"
            ))),
        }
    }
}

impl StorefrontConfig {
    /// Defaults overridden by `STOREFRONT_*` environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup("STOREFRONT_GATEWAY") {
            config.gateway.kind = value.parse()?;
        }
        if let Some(value) = lookup("STOREFRONT_API_URL") {
            config.gateway.api_url = value;
        }
        if let Some(value) = lookup("STOREFRONT_CHANNEL_BUFFER") {
            config.gateway.channel_buffer = value.trim().parse().map_err(|_| {
                ConfigError::InvalidEnvOverride { key: "STOREFRONT_CHANNEL_BUFFER".to_string(), value: value.clone() }
            })?;
        }
        if let Some(value) = lookup("STOREFRONT_LOG_LEVEL") {
            config.logging.level = value;
        }
        if let Some(value) = lookup("STOREFRONT_LOG_FORMAT") {
            config.logging.format = value.parse()?;
        }

        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.gateway.channel_buffer == 0 {
            return Err(ConfigError::Validation("channel buffer must be at least 1".to_string()));
        }
        if self.gateway.kind == GatewayKind::Http
            && !(self.gateway.api_url.starts_with("http://") || self.gateway.api_url.starts_with("https://"))
        {
            return Err(ConfigError::Validation(format!(
                "api url `{}` must start with http:// or https://",
                self.gateway.api_url
            )));
        }
        Ok(())
    }
}
