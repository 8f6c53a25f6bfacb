//! zoro configuration loading.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use zoro_core::store::CorruptStatePolicy;

/// Top-level zoro configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZoroConfig {
    /// Directory holding the persisted history and sort state.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// What to do when the persisted history cannot be decoded.
    #[serde(default)]
    pub on_corrupt: CorruptStatePolicy,
    /// `strftime` pattern used to display dates.
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

fn default_data_dir() -> PathBuf {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".local").join("share").join("zoro"))
        .unwrap_or_else(|| PathBuf::from(".zoro"))
}

fn default_date_format() -> String {
    "%b %-d, %Y".to_string()
}

impl Default for ZoroConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            on_corrupt: CorruptStatePolicy::default(),
            date_format: default_date_format(),
        }
    }
}

/// Resolve environment variable references like `${VAR_NAME}` in a string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = s.to_string();
    while let Some(start) = result.find("${") {
        if let Some(end) = result[start..].find('}') {
            let var_name = &result[start + 2..start + end];
            let value = std::env::var(var_name).unwrap_or_default();
            result = format!(
                "{}{}{}",
                &result[..start],
                value,
                &result[start + end + 1..]
            );
        } else {
            break;
        }
    }
    result
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `zoro.toml` in the current directory
/// 2. `~/.config/zoro/config.toml`
///
/// Environment variable override: `ZORO_DATA_DIR`.
pub fn load_config() -> Result<ZoroConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<ZoroConfig> {
    let config_path = if let Some(p) = path {
        if p.exists() {
            Some(p.to_path_buf())
        } else {
            anyhow::bail!("config file not found: {}", p.display());
        }
    } else {
        let local = PathBuf::from("zoro.toml");
        if local.exists() {
            Some(local)
        } else if let Some(home) = dirs_path() {
            let global = home.join("config.toml");
            if global.exists() {
                Some(global)
            } else {
                None
            }
        } else {
            None
        }
    };

    let mut config = match config_path {
        Some(path) => {
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            parse_config(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => ZoroConfig::default(),
    };

    if let Ok(dir) = std::env::var("ZORO_DATA_DIR") {
        if !dir.is_empty() {
            config.data_dir = PathBuf::from(dir);
        }
    }

    let resolved = resolve_env_vars(&config.data_dir.to_string_lossy());
    config.data_dir = PathBuf::from(resolved);

    tracing::debug!(data_dir = %config.data_dir.display(), "loaded configuration");
    Ok(config)
}

/// Parse a TOML config document.
pub fn parse_config(content: &str) -> Result<ZoroConfig> {
    let config = toml::from_str::<ZoroConfig>(content)?;
    anyhow::ensure!(
        !config.date_format.trim().is_empty(),
        "date_format must not be empty"
    );
    Ok(config)
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("zoro"))
}
