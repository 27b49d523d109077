//! Configuration types for the addressmon service

use std::path::Path;
use std::time::Duration;

use addressmon_table::TableOptions;
use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub table: TableOptions,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

impl Config {
    /// Reject settings that can never produce a table
    pub fn validate(&self) -> crate::Result<()> {
        if self.source.base_url.trim().is_empty() {
            return Err(crate::AddressmonError::Config(
                "source.base_url must not be empty".to_string(),
            ));
        }
        if self.source.request_timeout_seconds == 0 {
            return Err(crate::AddressmonError::Config(
                "source.request_timeout_seconds must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// Where the address dump and the known-devices list are fetched from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_dump_path")]
    pub dump_path: String,
    #[serde(default = "default_known_devices_path")]
    pub known_devices_path: String,
    /// Append `v=<unixtime>` to the dump URL as well
    #[serde(default)]
    pub cache_bust_dump: bool,
    #[serde(default = "default_request_timeout")]
    pub request_timeout_seconds: u64,
}

impl SourceConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_seconds)
    }
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            dump_path: default_dump_path(),
            known_devices_path: default_known_devices_path(),
            cache_bust_dump: false,
            request_timeout_seconds: default_request_timeout(),
        }
    }
}

/// Dashboard configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default = "default_dashboard_port")]
    pub port: u16,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            port: default_dashboard_port(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

fn default_dump_path() -> String {
    "/dump/?dump".to_string()
}

fn default_known_devices_path() -> String {
    "/known_devs.json".to_string()
}

fn default_request_timeout() -> u64 {
    10
}

fn default_true() -> bool {
    true
}

fn default_dashboard_port() -> u16 {
    11120
}

/// Load configuration from a JSON file
pub fn load_config(path: &Path) -> crate::Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        crate::AddressmonError::Config(format!("Failed to read config file {:?}: {}", path, e))
    })?;
    let config: Config = serde_json::from_str(&content)?;
    Ok(config)
}
