pub mod status;

pub use status::{ResourceTypeId, StatusClass, StatusStore, VerificationStatus};
