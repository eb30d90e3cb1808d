//! Verification plan command
//! Usage: fleetcheck plan [--types a,b] [--retry] [--store PATH] [--json]

use anyhow::{Context, Result};
use colored::Colorize;
use std::fmt;
use std::path::Path;
use tracing::info;

use crate::commands::settings::{load_settings, Overrides, Settings};
use crate::fs::status_store::load_store;
use crate::models::status::{ResourceTypeId, StatusClass, StatusStore};
use crate::reconcile::{reconcile, Reconciliation};

/// Load the snapshot named by `settings` and reconcile it.
pub fn build_plan(settings: &Settings) -> Result<(StatusStore, Reconciliation)> {
    let store = load_store(&settings.store)?;
    let plan = reconcile(&settings.requested, &store, settings.retry);

    info!(
        requested = settings.requested.len(),
        known = store.len(),
        confirmed = plan.confirmed.len(),
        to_verify = plan.to_verify.len(),
        skipped = plan.skipped.len(),
        retry = settings.retry,
        "reconciled verification status"
    );

    Ok((store, plan))
}

fn metric_suffix(store: &StatusStore, id: &ResourceTypeId) -> String {
    let status = store.status_of(id.as_str());
    if status.has_metric() {
        format!(" (metric {})", status.metric)
    } else {
        String::new()
    }
}

/// Human-readable rendering of a plan, printed with `{}`.
pub struct PlanReport<'a> {
    plan: &'a Reconciliation,
    store: &'a StatusStore,
}

impl<'a> PlanReport<'a> {
    pub fn new(plan: &'a Reconciliation, store: &'a StatusStore) -> Self {
        Self { plan, store }
    }
}

impl fmt::Display for PlanReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (plan, store) = (self.plan, self.store);

        writeln!(f, "{} ({})", "Confirmed".green().bold(), plan.confirmed.len())?;
        for id in &plan.confirmed {
            writeln!(f, "  {} {id}{}", "✓".green(), metric_suffix(store, id))?;
        }

        writeln!(f, "{} ({})", "To verify".cyan().bold(), plan.to_verify.len())?;
        for id in &plan.to_verify {
            let reason = match store.status_of(id.as_str()).class() {
                StatusClass::Inconclusive => "retrying inconclusive",
                _ => "never attempted",
            };
            let tag = format!("[{reason}]");
            writeln!(f, "  {} {id} {}", "→".cyan(), tag.as_str().dimmed())?;
        }

        if !plan.skipped.is_empty() {
            writeln!(
                f,
                "{} ({}) {}",
                "Skipped".yellow().bold(),
                plan.skipped.len(),
                "rerun with --retry to verify".dimmed()
            )?;
            for id in &plan.skipped {
                writeln!(f, "  {} {id}{}", "−".yellow(), metric_suffix(store, id))?;
            }
        }

        Ok(())
    }
}

/// Execute the plan command
pub fn execute(config_path: Option<&Path>, overrides: Overrides, json: bool) -> Result<()> {
    let settings = load_settings(config_path, overrides)?;
    let (store, plan) = build_plan(&settings)?;

    if json {
        let rendered =
            serde_json::to_string_pretty(&plan).context("Failed to serialize plan as JSON")?;
        println!("{rendered}");
    } else {
        print!("{}", PlanReport::new(&plan, &store));
    }

    Ok(())
}
