pub mod plan;
pub mod settings;
pub mod status;

pub use settings::{load_settings, resolve_settings, Overrides, Settings};
