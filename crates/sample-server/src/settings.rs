//! Server configuration
//!
//! Layered with the `config` crate: built-in defaults, then an optional
//! `sample-api.{toml,yaml,json}` file, then `SAMPLE_API_*` environment
//! variables.

use anyhow::{Context, Result};
use config::{builder::DefaultState, Config, ConfigBuilder, Environment, File};
use serde::Deserialize;
use std::net::SocketAddr;

/// Base name of the optional config file in the working directory
pub const CONFIG_FILE: &str = "sample-api";

/// Prefix for environment overrides, e.g. `SAMPLE_API_BIND_ADDRESS`
pub const ENV_PREFIX: &str = "SAMPLE_API";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub bind_address: String,
    /// Fallback filter directive when `RUST_LOG` is unset
    pub log_level: String,
    pub log_format: LogFormat,
}

impl ServerConfig {
    pub fn load() -> Result<Self> {
        let builder = Config::builder()
            .add_source(File::with_name(CONFIG_FILE).required(false))
            .add_source(Environment::with_prefix(ENV_PREFIX));
        Self::from_builder(builder)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        builder
            .set_default("bind_address", "0.0.0.0:8000")?
            .set_default("log_level", "info")?
            .set_default("log_format", "text")?
            .build()
            .context("Failed to read configuration sources")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.bind_address
            .parse()
            .with_context(|| format!("Failed to parse bind address '{}'", self.bind_address))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(content: &str) -> Result<ServerConfig> {
        ServerConfig::from_builder(
            Config::builder().add_source(File::from_str(content, FileFormat::Toml)),
        )
    }

    #[test]
    fn test_defaults() {
        let config = ServerConfig::from_builder(Config::builder()).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:8000");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Text);
        assert_eq!(config.socket_addr().unwrap().port(), 8000);
    }

    #[test]
    fn test_file_overrides_defaults() {
        let config = from_toml(
            r#"
            bind_address = "127.0.0.1:9000"
            log_format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:9000");
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn test_unknown_log_format() {
        assert!(from_toml(r#"log_format = "xml""#).is_err());
    }

    #[test]
    fn test_bad_bind_address() {
        let config = from_toml(r#"bind_address = "not-an-address""#).unwrap();
        assert!(config.socket_addr().is_err());
    }
}
