//! Configuration file handling
//!
//! Settings live in a TOML file with a single `[verify]` table:
//!
//! ```toml
//! [verify]
//! instance_types = ["m5.large", "c5.2xlarge"]
//! retry = false
//! store = "verified.json"
//! ```
//!
//! Relative `store` paths are resolved against the directory holding the
//! config file.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::status::ResourceTypeId;
use crate::validation::validate_resource_type;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "FLEETCHECK_CONFIG";

/// Config file looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = "fleetcheck.toml";

/// Status store used when neither config nor flags name one.
pub const DEFAULT_STORE_FILE: &str = "verified.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub verify: VerifyConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyConfig {
    /// Types requested when none are given on the command line
    #[serde(default)]
    pub instance_types: Vec<ResourceTypeId>,
    /// Retry inconclusive types by default
    #[serde(default)]
    pub retry: bool,
    /// Status store snapshot path
    #[serde(default = "default_store")]
    pub store: PathBuf,
}

fn default_store() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_FILE)
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            instance_types: Vec::new(),
            retry: false,
            store: default_store(),
        }
    }
}

impl Config {
    /// Parse config content, rejecting malformed instance type names.
    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config TOML")?;
        for id in &config.verify.instance_types {
            validate_resource_type(id.as_str())
                .with_context(|| format!("Invalid entry in verify.instance_types: '{id}'"))?;
        }
        Ok(config)
    }
}

/// Load a config file, resolving a relative store path against its directory.
pub fn load_config(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let mut config = Config::parse(&content)
        .with_context(|| format!("Invalid config file: {}", path.display()))?;

    if config.verify.store.is_relative() {
        if let Some(parent) = path.parent() {
            config.verify.store = parent.join(&config.verify.store);
        }
    }

    Ok(config)
}

/// Find the config file to use, if any.
///
/// Order: explicit path, `FLEETCHECK_CONFIG`, `./fleetcheck.toml`, then
/// `<user config dir>/fleetcheck/config.toml`. Only the explicit path and the
/// environment variable are returned without checking that the file exists.
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    if let Some(path) = env::var_os(CONFIG_ENV_VAR).filter(|v| !v.is_empty()) {
        return Some(PathBuf::from(path));
    }

    let local = PathBuf::from(LOCAL_CONFIG_FILE);
    if local.exists() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("fleetcheck").join("config.toml"))
        .filter(|path| path.exists())
}
