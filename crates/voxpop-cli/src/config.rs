use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable consulted when `--base-url` is not passed.
pub const BASE_URL_ENV: &str = "VOXPOP_BASE_URL";

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    pub base_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        match Self::default_path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Invalid config at {}", path.display()))?;
        Ok(config)
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("voxpop").join("config.toml"))
    }
}

/// Resolve the backend base URL based on priority:
/// 1. `--base-url` flag
/// 2. `VOXPOP_BASE_URL` environment variable
/// 3. `base_url` in `<config_dir>/voxpop/config.toml`
pub fn resolve_base_url(flag: Option<&str>) -> Result<String> {
    if let Some(url) = flag {
        return Ok(url.to_string());
    }

    if let Ok(url) = std::env::var(BASE_URL_ENV)
        && !url.trim().is_empty()
    {
        return Ok(url);
    }

    if let Some(url) = Config::load()?.base_url {
        return Ok(url);
    }

    let config_hint = Config::default_path()
        .map(|path| path.display().to_string())
        .unwrap_or_else(|| "the voxpop config file".to_string());
    anyhow::bail!(
        "No backend configured. Pass --base-url, set {}, or add base_url to {}",
        BASE_URL_ENV,
        config_hint
    )
}
