use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

/// Shortest cycle the dashboard will run; a zero rate would spin a core.
pub const MIN_REFRESH_RATE_MS: u64 = 50;

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub colors: ColorsConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    pub refresh_rate_ms: u64,
    pub highlight_secs: u64,
    pub log_file: Option<PathBuf>,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            refresh_rate_ms: 500,
            highlight_secs: 5,
            log_file: None,
        }
    }
}

impl GeneralConfig {
    pub fn refresh_interval(&self) -> Duration {
        Duration::from_millis(self.refresh_rate_ms.max(MIN_REFRESH_RATE_MS))
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ColorsConfig {
    pub responsive: String,
    pub unresponsive: String,
    pub highlight: String,
}

impl Default for ColorsConfig {
    fn default() -> Self {
        ColorsConfig {
            responsive: "green".to_string(),
            unresponsive: "red".to_string(),
            highlight: "red".to_string(),
        }
    }
}

pub fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("memdash").join("config.toml"))
}

pub fn load_config() -> Config {
    match config_path() {
        Some(path) if path.exists() => load_config_from_path(&path),
        _ => Config::default(),
    }
}

pub fn load_config_from_path(path: &Path) -> Config {
    match std::fs::read_to_string(path) {
        Ok(contents) => toml::from_str(&contents).unwrap_or_default(),
        Err(_) => Config::default(),
    }
}
