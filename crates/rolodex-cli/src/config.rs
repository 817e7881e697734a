use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// File name of the configuration inside the data directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

fn default_per_page() -> usize {
    4
}

/// User configuration, read from `config.toml` in the data directory.
/// A missing file means defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Override of the phone book file location
    #[serde(default)]
    pub store_path: Option<PathBuf>,

    /// Contacts shown per page while browsing
    #[serde(default = "default_per_page")]
    pub per_page: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_path: None,
            per_page: default_per_page(),
        }
    }
}

impl Config {
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        let config =
            toml::from_str(&content).with_context(|| format!("Invalid config at {}", path.display()))?;
        Ok(config)
    }
}
