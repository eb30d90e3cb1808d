//! Status store inspection
//! Usage: fleetcheck status [--store PATH] [--types a,b]

use anyhow::Result;
use colored::{ColoredString, Colorize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::commands::settings::{load_settings, Overrides};
use crate::fs::status_store::load_store;
use crate::models::status::{ResourceTypeId, StatusClass, StatusStore, VerificationStatus};

fn class_indicator(class: StatusClass) -> ColoredString {
    match class {
        StatusClass::Confirmed => "✓".green().bold(),
        StatusClass::Inconclusive => "✗".yellow().bold(),
        StatusClass::NeverAttempted => "○".white().dimmed(),
    }
}

/// Entries to display, sorted by type. A non-empty `filter` limits output to
/// those types, including ones the store has never seen.
pub fn select_entries<'a>(
    store: &'a StatusStore,
    filter: &'a [ResourceTypeId],
) -> Vec<(&'a ResourceTypeId, VerificationStatus)> {
    let mut entries: Vec<(&ResourceTypeId, VerificationStatus)> = if filter.is_empty() {
        store.iter().map(|(id, status)| (id, *status)).collect()
    } else {
        filter
            .iter()
            .map(|id| (id, store.status_of(id.as_str())))
            .collect()
    };
    entries.sort_by(|a, b| a.0.cmp(b.0));
    entries.dedup_by(|a, b| a.0 == b.0);
    entries
}

/// Table of entries with class and metric, followed by malformed-record
/// warnings. Printed with `{}`.
pub struct StatusReport<'a> {
    store: &'a StatusStore,
    filter: &'a [ResourceTypeId],
}

impl<'a> StatusReport<'a> {
    pub fn new(store: &'a StatusStore, filter: &'a [ResourceTypeId]) -> Self {
        Self { store, filter }
    }
}

impl fmt::Display for StatusReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let entries = select_entries(self.store, self.filter);
        if entries.is_empty() {
            return writeln!(f, "{}", "No verification status recorded".dimmed());
        }

        let width = entries
            .iter()
            .map(|(id, _)| id.as_str().len())
            .max()
            .unwrap_or(0);

        for (id, status) in &entries {
            let metric = if status.has_metric() {
                status.metric.to_string()
            } else {
                "-".to_string()
            };
            writeln!(
                f,
                "  {} {:<width$}  {:<16} {}",
                class_indicator(status.class()),
                id.as_str(),
                status.class().to_string(),
                metric,
            )?;
        }

        let mut malformed = entries
            .iter()
            .filter(|(_, status)| !status.is_well_formed())
            .peekable();
        if malformed.peek().is_some() {
            writeln!(f)?;
        }
        for (id, _) in malformed {
            writeln!(
                f,
                "{} {id} is marked confirmed but was never attempted",
                "Warning:".yellow().bold()
            )?;
        }

        Ok(())
    }
}

/// What `fleetcheck status` shows: the resolved store and the types given
/// with `--types`.
#[derive(Debug)]
pub struct StatusQuery {
    pub store_path: PathBuf,
    pub store: StatusStore,
    pub filter: Vec<ResourceTypeId>,
}

/// Resolve the store path and load it. The configured `instance_types` list
/// never filters the listing, so stale entries outside it stay visible.
pub fn load_status(config_path: Option<&Path>, mut overrides: Overrides) -> Result<StatusQuery> {
    let filter = std::mem::take(&mut overrides.types);
    let settings = load_settings(config_path, overrides)?;
    let store = load_store(&settings.store)?;

    Ok(StatusQuery {
        store_path: settings.store,
        store,
        filter,
    })
}

/// Execute the status command
pub fn execute(config_path: Option<&Path>, overrides: Overrides) -> Result<()> {
    let query = load_status(config_path, overrides)?;

    println!(
        "{} {}\n",
        "Status store:".bold(),
        query.store_path.display()
    );
    print!("{}", StatusReport::new(&query.store, &query.filter));

    Ok(())
}
