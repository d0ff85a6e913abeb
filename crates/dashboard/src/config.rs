//! Dashboard configuration

use anyhow::{Context, Result};
use serde::Deserialize;

/// Dashboard configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Instance name attached to structured log events
    #[serde(default = "default_instance_name")]
    pub instance_name: String,

    /// Address the HTTP server binds to
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// HTTP server port
    #[serde(default = "default_api_port")]
    pub api_port: u16,

    /// Seed for a reproducible metric stream, OS entropy when unset
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_instance_name() -> String {
    std::env::var("HOSTNAME").unwrap_or_else(|_| "tuning-dashboard".to_string())
}

fn default_bind_address() -> String {
    "0.0.0.0".to_string()
}

fn default_api_port() -> u16 {
    5000
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            instance_name: default_instance_name(),
            bind_address: default_bind_address(),
            api_port: default_api_port(),
            seed: None,
        }
    }
}

impl DashboardConfig {
    /// Load configuration from an optional `dashboard.{toml,yaml,json}` file
    /// and `DASHBOARD_*` environment variables
    pub fn load() -> Result<Self> {
        let config = config::Config::builder()
            .add_source(config::File::with_name("dashboard").required(false))
            .add_source(config::Environment::with_prefix("DASHBOARD").try_parsing(true))
            .build()
            .context("Failed to read dashboard configuration")?;

        config
            .try_deserialize()
            .context("Invalid dashboard configuration")
    }

    /// Socket address string for the HTTP listener
    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_address, self.api_port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DashboardConfig::default();

        assert_eq!(config.api_port, 5000);
        assert_eq!(config.listen_addr(), "0.0.0.0:5000");
        assert!(config.seed.is_none());
    }

    #[test]
    fn test_deserialize_overrides() {
        let config: DashboardConfig = config::Config::builder()
            .set_override("api_port", 8088)
            .unwrap()
            .set_override("seed", 42)
            .unwrap()
            .set_override("bind_address", "127.0.0.1")
            .unwrap()
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap();

        assert_eq!(config.listen_addr(), "127.0.0.1:8088");
        assert_eq!(config.seed, Some(42));
        assert!(!config.instance_name.is_empty());
    }
}
