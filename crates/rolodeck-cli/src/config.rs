//! Optional user configuration. A missing file is not an error; every
//! field has a default and CLI flags override file values.

use anyhow::{Context, Result};
use rolodeck_client::{DEFAULT_API_URL, DEFAULT_NATIONALITIES};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Profiles fetched when neither the config file nor --count says
/// otherwise. Matches the size of the original gallery page.
pub const DEFAULT_COUNT: usize = 12;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_count")]
    pub count: usize,

    #[serde(default = "default_nationalities")]
    pub nationalities: Vec<String>,

    #[serde(default = "default_api_url")]
    pub api_url: String,
}

fn default_count() -> usize {
    DEFAULT_COUNT
}

fn default_nationalities() -> Vec<String> {
    DEFAULT_NATIONALITIES.iter().map(|s| s.to_string()).collect()
}

fn default_api_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            count: default_count(),
            nationalities: default_nationalities(),
            api_url: default_api_url(),
        }
    }
}

impl Config {
    /// Load from the explicit `--config` path or the default location.
    /// No file at either means defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Some(path) => Self::load_from(&path),
                None => Ok(Self::default()),
            },
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config file {}", path.display()))
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("rolodeck").join("config.toml"))
    }
}
