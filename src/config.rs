//! User configuration
//!
//! One YAML file holds everything Dockhand remembers between runs: the
//! activated bundle set, where the spec files live, which repo the
//! specs come from, the container host's address and any local repo
//! overrides. The file is optional; a missing file loads as defaults.
//!
//! The core never reads this itself. Commands load a `Config` and pass
//! the values into the resolver and compiler explicitly.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{DockhandError, Result};

/// Config filename inside the platform config directory.
pub const CONFIG_FILE: &str = "dockhand.yml";

/// Gateway address of the default boot2docker VM.
pub const DEFAULT_BOOT2DOCKER_IP: &str = "192.168.59.103";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Names of the bundles the user has switched on.
    pub bundles: Vec<String>,

    /// Directory the spec YAML files are loaded from.
    pub specs_path: Option<PathBuf>,

    /// Remote of the repo that holds the spec files.
    pub specs_repo: Option<String>,

    /// Address the container host is reachable at.
    pub boot2docker_ip: String,

    /// Local source overrides: repo remote path -> checkout to use
    /// instead of the managed copy.
    pub repo_overrides: BTreeMap<String, PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            bundles: Vec::new(),
            specs_path: None,
            specs_repo: None,
            boot2docker_ip: DEFAULT_BOOT2DOCKER_IP.to_string(),
            repo_overrides: BTreeMap::new(),
        }
    }
}

impl Config {
    /// Default config file location under the platform config dir.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("dockhand")
            .join(CONFIG_FILE)
    }

    /// Load configuration from `path`, defaults when the file is absent.
    pub fn load(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }
        let content =
            std::fs::read_to_string(path).map_err(|e| DockhandError::ConfigReadFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        serde_yaml::from_str(&content).map_err(|e| DockhandError::ConfigParseFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Save configuration to `path`.
    ///
    /// Writes to a temporary file in the same directory and renames it
    /// into place, so readers never observe a half-written config.
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| DockhandError::FileWriteFailed {
                path: parent.display().to_string(),
                reason: e.to_string(),
            })?;
        }
        let content = serde_yaml::to_string(self)?;

        let tmp_path = path.with_extension("yml.tmp");
        std::fs::write(&tmp_path, &content).map_err(|e| DockhandError::FileWriteFailed {
            path: tmp_path.display().to_string(),
            reason: e.to_string(),
        })?;
        std::fs::rename(&tmp_path, path).map_err(|e| DockhandError::FileWriteFailed {
            path: path.display().to_string(),
            reason: e.to_string(),
        })
    }

    /// Mark bundles as activated, keeping the set sorted and unique.
    pub fn activate_bundles(&mut self, names: &[String]) {
        for name in names {
            if !self.bundles.contains(name) {
                self.bundles.push(name.clone());
            }
        }
        self.bundles.sort();
    }

    /// Remove bundles from the activated set. Unknown names are no-ops.
    pub fn deactivate_bundles(&mut self, names: &[String]) {
        self.bundles.retain(|bundle| !names.contains(bundle));
    }
}
