//! Configuration loading for the SOW API server.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Environment variable overriding `server.addr`
pub const ADDR_ENV: &str = "API_SERVER_ADDR";

/// Environment variable pointing at the TOML config file
pub const CONFIG_PATH_ENV: &str = "SOW_SERVICE_CONFIG";

pub const DEFAULT_CONFIG_FILE: &str = "sow-service.toml";

pub const DEFAULT_ADDR: &str = "0.0.0.0:8080";

/// Default request body limit (2 MiB)
pub const DEFAULT_MAX_BODY_BYTES: usize = 2 * 1024 * 1024;

pub const DEFAULT_LOG_FILTER: &str = "sow_api_server=info,tower_http=debug";

#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    pub server: Option<ServerSection>,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct ServerSection {
    pub addr: Option<String>,
    pub max_body_bytes: Option<usize>,
}

#[derive(Debug, Deserialize, Default, Clone)]
pub struct LoggingSection {
    pub filter: Option<String>,
}

impl Config {
    /// Bind address, defaulting to `0.0.0.0:8080`
    pub fn addr(&self) -> String {
        self.server
            .as_ref()
            .and_then(|server| server.addr.clone())
            .unwrap_or_else(|| DEFAULT_ADDR.to_string())
    }

    /// Maximum accepted request body in bytes
    pub fn max_body_bytes(&self) -> usize {
        self.server
            .as_ref()
            .and_then(|server| server.max_body_bytes)
            .unwrap_or(DEFAULT_MAX_BODY_BYTES)
    }

    /// Log filter used when `RUST_LOG` is not set
    pub fn log_filter(&self) -> String {
        self.logging
            .as_ref()
            .and_then(|logging| logging.filter.clone())
            .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
    }

    /// Apply an address override (from `API_SERVER_ADDR`)
    pub fn with_addr_override(mut self, addr: Option<String>) -> Self {
        if let Some(addr) = addr.filter(|a| !a.trim().is_empty()) {
            self.server.get_or_insert_with(ServerSection::default).addr = Some(addr);
        }
        self
    }
}

pub fn default_config_path() -> PathBuf {
    std::env::var_os(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE))
}

pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let config: Config =
        toml::from_str(&contents).context("Failed to parse config file as TOML")?;
    Ok(config)
}

/// Load the config file (if any) and apply environment overrides.
pub fn load_from_env() -> Result<Config> {
    let config = load_config(&default_config_path())?;
    Ok(config.with_addr_override(std::env::var(ADDR_ENV).ok()))
}
