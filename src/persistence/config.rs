use super::error::Result;
use super::files::read_file;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// User settings stored in config.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Desktop notification when a session completes
    #[serde(default = "default_true")]
    pub notifications: bool,

    /// Number of days shown in the stats chart
    #[serde(default = "default_stats_days")]
    pub stats_days: usize,

    /// Log filter directive (e.g. "info", "debug")
    #[serde(default)]
    pub log_level: Option<String>,
}

fn default_true() -> bool {
    true
}

fn default_stats_days() -> usize {
    7
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            notifications: true,
            stats_days: default_stats_days(),
            log_level: None,
        }
    }
}

/// Load config.json from the data directory.
///
/// A missing file gives the defaults. An unreadable or corrupt one is an
/// error; the caller falls back to defaults and reports it once logging is up.
pub fn load_config(dir: &Path) -> Result<AppConfig> {
    let path = dir.join(CONFIG_FILE_NAME);

    match read_file(&path)? {
        Some(content) => Ok(serde_json::from_str(&content)?),
        None => Ok(AppConfig::default()),
    }
}
