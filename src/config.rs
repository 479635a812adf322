// Config module for loadorder.toml and its location

use crate::constants;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub fn config_dir() -> String {
    std::env::var("LO_DIR").unwrap_or_else(|_| ".".to_string())
}

pub fn config_path() -> String {
    let dir = config_dir();
    if dir == "." {
        constants::CONFIG_FILE.to_string()
    } else {
        format!("{}/{}", dir, constants::CONFIG_FILE)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub repository: RepositorySpec,
    #[serde(default)]
    pub source: SourceSpec,
}

/// GitHub repository holding the load order files
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RepositorySpec {
    pub user: String,
    pub repo: String,
    pub path: String,
    pub branch: String,
}

impl Default for RepositorySpec {
    fn default() -> Self {
        Self {
            user: constants::DEFAULT_GITHUB_USER.to_string(),
            repo: constants::DEFAULT_GITHUB_REPO.to_string(),
            path: constants::DEFAULT_LOAD_ORDERS_PATH.to_string(),
            branch: constants::DEFAULT_BRANCH.to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SourceSpec {
    /// Read load orders from this directory instead of GitHub
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_dir: Option<String>,
}

impl Config {
    pub fn exists() -> bool {
        Path::new(&config_path()).exists()
    }

    /// Load the config file, falling back to defaults when it is absent
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();
        if !Path::new(&path).exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(&path)?;
        toml::from_str(&text).map_err(|e| anyhow::anyhow!("Invalid {}: {}", path, e))
    }

    pub fn save(&self) -> anyhow::Result<()> {
        let dir = config_dir();
        std::fs::create_dir_all(&dir)?;
        let path = config_path();
        let text = toml::to_string_pretty(self)?;
        std::fs::write(&path, text)?;
        Ok(())
    }
}
