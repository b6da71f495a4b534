use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::net::{IpAddr, SocketAddr};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::redirector::Redirector;

/// Typed configuration errors (surfaced through `anyhow` by callers).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid search base url {0:?}: expected absolute http(s) url ending in '/'")]
    InvalidBaseUrl(String),
    #[error("invalid bind address {0:?}")]
    InvalidBind(String),
}

/// Search target (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Article base URL the encoded query is appended to.
    pub base_url: String,
}

/// Global configuration loaded from `~/.config/wikiseek/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikiseekConfig {
    /// Address the page server binds to.
    pub bind: String,
    /// TCP port for the page server (overridden by `wikiseek serve <PORT>`).
    pub port: u16,
    /// Optional HTML file served instead of the built-in page.
    #[serde(default)]
    pub page: Option<PathBuf>,
    /// Seconds to wait for a client to send its request head.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
    /// Optional search target; if missing, English Wikipedia is used.
    #[serde(default)]
    pub search: Option<SearchConfig>,
}

fn default_request_timeout_secs() -> u64 {
    5
}

impl Default for WikiseekConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1".to_string(),
            port: 8080,
            page: None,
            request_timeout_secs: default_request_timeout_secs(),
            search: None,
        }
    }
}

impl WikiseekConfig {
    /// Socket address from `bind` and `port`.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let ip: IpAddr = self
            .bind
            .parse()
            .map_err(|_| ConfigError::InvalidBind(self.bind.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Redirector for the configured search target.
    pub fn redirector(&self) -> Result<Redirector, ConfigError> {
        match &self.search {
            Some(search) => Redirector::with_base(&search.base_url),
            None => Ok(Redirector::default()),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("wikiseek")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<WikiseekConfig> {
    load_from(&config_path()?)
}

/// Like [`load_or_init`] for an explicit path.
pub fn load_from(path: &Path) -> Result<WikiseekConfig> {
    if !path.exists() {
        let default_cfg = WikiseekConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)
            .with_context(|| format!("writing default config {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: WikiseekConfig =
        toml::from_str(&data).with_context(|| format!("parsing config {}", path.display()))?;
    Ok(cfg)
}
