use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::fetch::FetchOptions;

/// Tool settings loaded from `~/.config/pld/config.toml`. Every field is optional.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PldConfig {
    /// Program invoked for `addToLocalMaven` artifacts.
    pub installer_program: String,
    /// Default local repository when `--local-maven-repository` is not given.
    pub local_repository: Option<PathBuf>,
    /// Report artifacts without a derivable download URL as errors.
    pub strict_coordinates: bool,
    /// Follow HTTP redirects (jar hosts commonly redirect to a CDN).
    pub follow_redirects: bool,
    /// Optional User-Agent header for downloads.
    pub user_agent: Option<String>,
}

impl Default for PldConfig {
    fn default() -> Self {
        Self {
            installer_program: "mvn".to_string(),
            local_repository: None,
            strict_coordinates: false,
            follow_redirects: true,
            user_agent: None,
        }
    }
}

impl PldConfig {
    pub fn fetch_options(&self) -> FetchOptions {
        FetchOptions {
            follow_redirects: self.follow_redirects,
            user_agent: self.user_agent.clone(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("pld")?;
    Ok(xdg_dirs.get_config_file("config.toml"))
}

/// Loads the config file if present, otherwise built-in defaults.
///
/// The file is never created: images built from a read-only layer must still work.
pub fn load() -> Result<PldConfig> {
    load_from(&config_path()?)
}

pub fn load_from(path: &Path) -> Result<PldConfig> {
    if !path.exists() {
        tracing::debug!("no config at {}, using defaults", path.display());
        return Ok(PldConfig::default());
    }
    let data =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: PldConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
