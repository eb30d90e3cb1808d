//! Input validation for resource type identifiers supplied on the command line.
//!
//! The library treats resource type IDs as opaque strings. These checks only
//! guard the CLI boundary so that typos such as stray whitespace or shell
//! separators are rejected before they reach the reconciler.

use anyhow::{bail, Result};

/// Maximum allowed length for a resource type ID.
pub const MAX_RESOURCE_TYPE_LENGTH: usize = 128;

/// Validates a resource type ID such as `m5.large` or `p3dn.24xlarge`.
///
/// An ID is valid if:
/// - It is not empty
/// - It is no longer than MAX_RESOURCE_TYPE_LENGTH bytes
/// - It contains only ASCII alphanumerics, dots, dashes, and underscores
///
/// # Examples
///
/// ```
/// use fleetcheck::validation::validate_resource_type;
///
/// assert!(validate_resource_type("m5.large").is_ok());
/// assert!(validate_resource_type("").is_err());
/// assert!(validate_resource_type("m5 large").is_err());
/// ```
pub fn validate_resource_type(id: &str) -> Result<()> {
    if id.is_empty() {
        bail!("Resource type cannot be empty");
    }

    if id.len() > MAX_RESOURCE_TYPE_LENGTH {
        bail!(
            "Resource type too long: {} characters (max {})",
            id.len(),
            MAX_RESOURCE_TYPE_LENGTH
        );
    }

    let valid_chars = id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_');
    if !valid_chars {
        bail!("Resource type '{id}' contains invalid characters. Use only alphanumeric characters, dots (.), dashes (-), and underscores (_)");
    }

    Ok(())
}

/// Clap value parser for resource type arguments.
pub fn clap_resource_type_validator(s: &str) -> Result<String, String> {
    validate_resource_type(s).map_err(|e| e.to_string())?;
    Ok(s.to_string())
}
