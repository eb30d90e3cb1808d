//! Verification reconciliation
//!
//! Decides, from a requested set of instance types and a snapshot of their
//! persisted verification statuses, which types are already confirmed usable
//! and which must be (re-)verified before scheduling work on them.
//!
//! The candidate set is the union of the requested types and every type the
//! store knows about, so stale unconfirmed entries surface even when the
//! caller no longer names them. A requested type missing from the store is
//! treated as never attempted.

use serde::Serialize;
use std::collections::BTreeSet;

use crate::models::status::{ResourceTypeId, StatusClass, StatusStore, VerificationStatus};


/// What to do with a single candidate type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Already usable, schedule without checks
    Confirmed,
    /// Needs a verification run now
    Verify,
    /// Inconclusive and retry is off
    Skip,
}

/// Outcome of a reconciliation. Every list is sorted ascending and no type
/// appears in more than one list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Reconciliation {
    pub confirmed: Vec<ResourceTypeId>,
    pub to_verify: Vec<ResourceTypeId>,
    /// Inconclusive types held back until a retry is requested
    pub skipped: Vec<ResourceTypeId>,
}

impl Reconciliation {
    /// True when nothing needs verifying.
    pub fn is_settled(&self) -> bool {
        self.to_verify.is_empty()
    }

    pub fn decision_for(&self, id: &str) -> Option<Decision> {
        let found = |list: &[ResourceTypeId]| list.iter().any(|k| k.as_str() == id);
        if found(&self.confirmed) {
            Some(Decision::Confirmed)
        } else if found(&self.to_verify) {
            Some(Decision::Verify)
        } else if found(&self.skipped) {
            Some(Decision::Skip)
        } else {
            None
        }
    }
}

/// Classify one status record.
pub fn classify(status: &VerificationStatus, retry_inconclusive: bool) -> Decision {
    match status.class() {
        StatusClass::Confirmed => Decision::Confirmed,
        StatusClass::NeverAttempted => Decision::Verify,
        StatusClass::Inconclusive if retry_inconclusive => Decision::Verify,
        StatusClass::Inconclusive => Decision::Skip,
    }
}

/// Split the candidate types into confirmed and to-verify lists.
///
/// Pure and total: performs no I/O, never mutates its inputs, and yields the
/// same output for the same inputs regardless of the order of `requested` or
/// the store's iteration order. Duplicates in `requested` are collapsed.
pub fn reconcile<'a, I>(
    requested: I,
    store: &'a StatusStore,
    retry_inconclusive: bool,
) -> Reconciliation
where
    I: IntoIterator<Item = &'a ResourceTypeId>,
{
    let candidates: BTreeSet<&ResourceTypeId> =
        requested.into_iter().chain(store.keys()).collect();

    let mut result = Reconciliation::default();
    for id in candidates {
        let list = match classify(&store.status_of(id.as_str()), retry_inconclusive) {
            Decision::Confirmed => &mut result.confirmed,
            Decision::Verify => &mut result.to_verify,
            Decision::Skip => &mut result.skipped,
        };
        list.push(id.clone());
    }
    result
}
