//! Effective settings for a command run: config file values with
//! command-line overrides applied on top.

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::fs::config::{load_config, resolve_config_path, Config};
use crate::models::status::ResourceTypeId;

/// Values given on the command line. Empty or unset fields fall through to
/// the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub types: Vec<ResourceTypeId>,
    pub retry: bool,
    pub store: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub requested: Vec<ResourceTypeId>,
    pub retry: bool,
    pub store: PathBuf,
}

/// Merge overrides into a config. `--retry` can only turn retry on.
pub fn resolve_settings(config: Config, overrides: Overrides) -> Settings {
    let verify = config.verify;
    Settings {
        requested: if overrides.types.is_empty() {
            verify.instance_types
        } else {
            overrides.types
        },
        retry: overrides.retry || verify.retry,
        store: overrides.store.unwrap_or(verify.store),
    }
}

/// Locate and load the config file (if any), then apply overrides.
pub fn load_settings(config_path: Option<&Path>, overrides: Overrides) -> Result<Settings> {
    let config = match resolve_config_path(config_path) {
        Some(path) => {
            debug!(path = %path.display(), "loading config");
            load_config(&path)?
        }
        None => Config::default(),
    };
    Ok(resolve_settings(config, overrides))
}
