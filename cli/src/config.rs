//! Client configuration: where the todo service lives and how long to wait.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::{Deserialize, Serialize};

pub const BASE_URL_ENV: &str = "TODOLIST_BASE_URL";

/// CLI configuration (TOML). Missing fields take their defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CliConfig {
    /// Base URL of the todo service, e.g. `http://127.0.0.1:3000`.
    pub base_url: String,

    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000".to_string(),
            timeout_secs: 10,
        }
    }
}

impl CliConfig {
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(anyhow!("base_url must not be empty"));
        }
        if self.timeout_secs == 0 {
            return Err(anyhow!("timeout_secs must be > 0"));
        }
        Ok(())
    }

    /// Environment first, then the command-line flag; the last one set wins.
    pub fn with_overrides(mut self, env_base_url: Option<String>, flag_base_url: Option<String>) -> Self {
        if let Some(url) = env_base_url.filter(|u| !u.is_empty()) {
            self.base_url = url;
        }
        if let Some(url) = flag_base_url {
            self.base_url = url;
        }
        self
    }
}

/// Load config from a TOML file.
///
/// If the file is missing, returns `CliConfig::default()`.
pub fn load_config(path: &Path) -> Result<CliConfig> {
    if !path.exists() {
        return Ok(CliConfig::default());
    }
    let raw = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let config: CliConfig = toml::from_str(&raw).with_context(|| format!("parse {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

/// File (if any), then `TODOLIST_BASE_URL`, then `--base-url`.
pub fn resolve(path: Option<&Path>, flag_base_url: Option<String>) -> Result<CliConfig> {
    let config = match path {
        Some(path) => load_config(path)?,
        None => CliConfig::default(),
    };
    let config = config.with_overrides(std::env::var(BASE_URL_ENV).ok(), flag_base_url);
    config.validate()?;
    Ok(config)
}
