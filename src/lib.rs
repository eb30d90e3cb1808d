pub mod commands;
pub mod completions;
pub mod fs;
pub mod logging;
pub mod models;
pub mod reconcile;
pub mod validation;

pub use models::status::{ResourceTypeId, StatusClass, StatusStore, VerificationStatus};
pub use reconcile::{classify, reconcile, Decision, Reconciliation};
