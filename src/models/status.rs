//! Verification status data model.
//!
//! A status store maps each instance type to the outcome of its most recent
//! verification attempt. The store is produced and persisted by whatever runs
//! the verifications; this crate only reads snapshots of it.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt;

/// Metric value recorded when an attempt produced no usable measurement.
pub const NO_METRIC: i64 = -1;

/// Identifier of a provisionable resource class, e.g. `m5.large`.
///
/// Comparison and ordering are byte-wise on the underlying string, so
/// `M5.large` and `m5.large` are distinct types.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResourceTypeId(String);

impl ResourceTypeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ResourceTypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ResourceTypeId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for ResourceTypeId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Borrow<str> for ResourceTypeId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for ResourceTypeId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::validation::validate_resource_type(s)?;
        Ok(Self(s.to_string()))
    }
}

/// Coarse classification of a status record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// Last attempt proved the type usable
    Confirmed,
    /// Attempted at least once, never proved usable
    Inconclusive,
    /// No attempt has completed yet
    NeverAttempted,
}

impl fmt::Display for StatusClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusClass::Confirmed => write!(f, "confirmed"),
            StatusClass::Inconclusive => write!(f, "inconclusive"),
            StatusClass::NeverAttempted => write!(f, "never attempted"),
        }
    }
}

fn no_metric() -> i64 {
    NO_METRIC
}

/// Last known verification outcome for one resource type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerificationStatus {
    /// An attempt has completed, successfully or not
    #[serde(default)]
    pub attempted: bool,
    /// The most recent attempt proved the type usable
    #[serde(default)]
    pub confirmed: bool,
    /// Opaque measurement from the last attempt (e.g. seconds to boot)
    #[serde(default = "no_metric")]
    pub metric: i64,
}

impl Default for VerificationStatus {
    fn default() -> Self {
        Self::never_attempted()
    }
}

impl VerificationStatus {
    pub const fn never_attempted() -> Self {
        Self {
            attempted: false,
            confirmed: false,
            metric: NO_METRIC,
        }
    }

    pub const fn confirmed(metric: i64) -> Self {
        Self {
            attempted: true,
            confirmed: true,
            metric,
        }
    }

    pub const fn inconclusive(metric: i64) -> Self {
        Self {
            attempted: true,
            confirmed: false,
            metric,
        }
    }

    /// `confirmed` wins over `attempted`, so a record that claims confirmation
    /// without an attempt still classifies as confirmed.
    pub fn class(&self) -> StatusClass {
        if self.confirmed {
            StatusClass::Confirmed
        } else if self.attempted {
            StatusClass::Inconclusive
        } else {
            StatusClass::NeverAttempted
        }
    }

    /// False when the record claims confirmation without any attempt.
    pub fn is_well_formed(&self) -> bool {
        !self.confirmed || self.attempted
    }

    pub fn has_metric(&self) -> bool {
        self.metric != NO_METRIC
    }
}

/// Snapshot of persisted verification statuses, keyed by resource type.
///
/// Iteration order is unspecified. Callers that need a stable order must sort.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusStore {
    entries: HashMap<ResourceTypeId, VerificationStatus>,
}

impl StatusStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace the status for a type, returning the previous one.
    pub fn insert(
        &mut self,
        id: impl Into<ResourceTypeId>,
        status: VerificationStatus,
    ) -> Option<VerificationStatus> {
        self.entries.insert(id.into(), status)
    }

    pub fn get(&self, id: &str) -> Option<&VerificationStatus> {
        self.entries.get(id)
    }

    /// Status for `id`, or the never-attempted default when absent.
    pub fn status_of(&self, id: &str) -> VerificationStatus {
        self.entries.get(id).copied().unwrap_or_default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    pub fn keys(&self) -> impl Iterator<Item = &ResourceTypeId> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ResourceTypeId, &VerificationStatus)> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Keys whose records violate `confirmed => attempted`, sorted ascending.
    pub fn malformed(&self) -> Vec<&ResourceTypeId> {
        let mut keys: Vec<&ResourceTypeId> = self
            .entries
            .iter()
            .filter(|(_, status)| !status.is_well_formed())
            .map(|(id, _)| id)
            .collect();
        keys.sort();
        keys
    }
}

impl<K: Into<ResourceTypeId>> FromIterator<(K, VerificationStatus)> for StatusStore {
    fn from_iter<T: IntoIterator<Item = (K, VerificationStatus)>>(iter: T) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}
