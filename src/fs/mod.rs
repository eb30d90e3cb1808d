pub mod config;
pub mod status_store;

pub use config::{load_config, resolve_config_path, Config, VerifyConfig};
pub use status_store::{load_store, parse_store, StoreError, StoreFormat};
