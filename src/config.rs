use crate::error::{ReleaseError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Runtime configuration for gitmoji-release.
///
/// Everything has a sensible default so the tool works without any
/// configuration file at all.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ReleaseConfig {
    /// Manifest whose `package.version` is read and bumped
    #[serde(default = "default_manifest")]
    pub manifest: String,

    /// Remote that `git push --follow-tags` targets
    #[serde(default = "default_remote")]
    pub remote: String,

    /// Whether to create a hosting-platform release via `gh` after pushing
    #[serde(default = "default_github_release")]
    pub github_release: bool,
}

fn default_manifest() -> String {
    "Cargo.toml".to_string()
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_github_release() -> bool {
    true
}

impl Default for ReleaseConfig {
    fn default() -> Self {
        ReleaseConfig {
            manifest: default_manifest(),
            remote: default_remote(),
            github_release: default_github_release(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Lookup order:
/// 1. Custom path provided as parameter
/// 2. `release.toml` in the current directory
/// 3. `gitmoji-release.toml` in the user config directory
/// 4. Default configuration if no file found
pub fn load_config(config_path: Option<&str>) -> Result<ReleaseConfig> {
    let raw = if let Some(path) = config_path {
        fs::read_to_string(path)?
    } else if Path::new("./release.toml").exists() {
        fs::read_to_string("./release.toml")?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("gitmoji-release.toml");
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(ReleaseConfig::default());
        }
    } else {
        return Ok(ReleaseConfig::default());
    };

    toml::from_str(&raw).map_err(|e| ReleaseError::config(e.to_string()))
}
