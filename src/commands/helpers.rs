//! Command helper utilities

use std::path::PathBuf;

use crate::config::Config;
use crate::error::{DockhandError, Result};
use crate::source::Repo;
use crate::specs::{SpecUniverse, loading};

/// Resolve the config file path from the global flag, falling back to
/// the platform default location.
pub fn config_path(flag: Option<PathBuf>) -> PathBuf {
    flag.unwrap_or_else(Config::default_path)
}

/// Resolve the specs directory: global flag first, then the config file.
pub fn specs_dir(flag: Option<PathBuf>, config: &Config) -> Result<PathBuf> {
    flag.or_else(|| config.specs_path.clone())
        .ok_or(DockhandError::SpecsPathNotSet)
}

/// Load the full spec universe for a command invocation.
pub fn load_universe(flag: Option<PathBuf>, config: &Config) -> Result<SpecUniverse> {
    let dir = specs_dir(flag, config)?;
    loading::load_universe(&dir)
}

/// The designated specs repo, when one is configured.
pub fn specs_repo(config: &Config) -> Option<Repo> {
    config.specs_repo.as_deref().map(Repo::new)
}

/// Load config from an explicit or default path.
pub fn load_config(flag: Option<PathBuf>) -> Result<(Config, PathBuf)> {
    let path = config_path(flag);
    let config = Config::load(&path)?;
    Ok((config, path))
}
