use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Global configuration loaded from `~/.config/wp-remover/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RemoverConfig {
    /// Hard limit for one XML-RPC call, in seconds.
    pub request_timeout_secs: u64,
    /// TCP/TLS connect limit, in seconds. Clamped to `request_timeout_secs`.
    pub connect_timeout_secs: u64,
    /// Response bodies are truncated to this many bytes.
    pub max_response_bytes: u64,
    /// Endpoint path resolved against the normalized blog URL.
    pub xmlrpc_path: String,
    /// Visit posts in random order (default) or in file order.
    pub shuffle_posts: bool,
    /// Optional `User-Agent` header; libcurl sends none when unset.
    pub user_agent: Option<String>,
}

impl Default for RemoverConfig {
    fn default() -> Self {
        Self {
            request_timeout_secs: 20,
            connect_timeout_secs: 10,
            max_response_bytes: 10_000_000,
            xmlrpc_path: "xmlrpc.php".to_string(),
            shuffle_posts: true,
            user_agent: None,
        }
    }
}

impl RemoverConfig {
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs.min(self.request_timeout_secs))
    }

    /// Rejects values libcurl would read as "no limit".
    pub fn validate(&self) -> Result<()> {
        if self.request_timeout_secs == 0 {
            anyhow::bail!("request_timeout_secs must be at least 1");
        }
        if self.connect_timeout_secs == 0 {
            anyhow::bail!("connect_timeout_secs must be at least 1");
        }
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("wp-remover")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<RemoverConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = RemoverConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path. Missing keys take their defaults.
pub fn load_from(path: &Path) -> Result<RemoverConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: RemoverConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("invalid config: {}", path.display()))?;
    Ok(cfg)
}
