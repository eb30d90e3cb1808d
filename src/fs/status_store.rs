//! Read-only loading of status store snapshots.
//!
//! The snapshot is a single JSON or TOML document mapping each resource type
//! to its last known verification status:
//!
//! ```json
//! { "m5.large": { "attempted": true, "confirmed": true, "metric": 42 } }
//! ```
//!
//! Whoever runs the verifications owns writing this file back.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

use crate::models::status::StatusStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read status store {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to parse status store {} as JSON: {source}", .path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to parse status store {} as TOML: {source}", .path.display())]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Unsupported status store format: {} (expected .json or .toml)", .path.display())]
    UnsupportedFormat { path: PathBuf },
}

/// On-disk encoding of a status store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreFormat {
    Json,
    Toml,
}

impl StoreFormat {
    /// Pick the format from a file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "json" => Some(StoreFormat::Json),
            "toml" => Some(StoreFormat::Toml),
            _ => None,
        }
    }
}

/// Parse a snapshot held in memory. `path` is only used for error messages.
pub fn parse_store(
    content: &str,
    format: StoreFormat,
    path: &Path,
) -> Result<StatusStore, StoreError> {
    match format {
        StoreFormat::Json => serde_json::from_str(content).map_err(|source| StoreError::Json {
            path: path.to_path_buf(),
            source,
        }),
        StoreFormat::Toml => toml::from_str(content).map_err(|source| StoreError::Toml {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load a snapshot from disk.
///
/// A missing file is an empty store, so a first run verifies every requested
/// type. Records claiming confirmation without an attempt are kept as-is and
/// reported at warn level.
pub fn load_store(path: &Path) -> Result<StatusStore, StoreError> {
    let format = StoreFormat::from_path(path).ok_or_else(|| StoreError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "status store not found, starting empty");
            return Ok(StatusStore::new());
        }
        Err(source) => {
            return Err(StoreError::Read {
                path: path.to_path_buf(),
                source,
            })
        }
    };

    let store = parse_store(&content, format, path)?;
    for id in store.malformed() {
        warn!(
            resource_type = %id,
            "status record is confirmed but not attempted; treating as confirmed"
        );
    }
    debug!(path = %path.display(), entries = store.len(), "loaded status store");

    Ok(store)
}
