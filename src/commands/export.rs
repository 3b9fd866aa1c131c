//! CSV export command.

use crate::report::export::export_csv;
use crate::stats::build_report;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Write the enriched tables as CSV files under `out_dir` (the working
/// directory when unset).
pub fn handle_export(data: Option<PathBuf>, out_dir: Option<PathBuf>) -> Result<()> {
    let dataset = super::load_dataset(data)?;
    let report = build_report(&dataset)?;

    let out_dir = out_dir.unwrap_or_else(|| PathBuf::from("."));
    let files = export_csv(&report, &out_dir)
        .with_context(|| format!("exporting CSV files to {}", out_dir.display()))?;

    println!(
        "Files saved: {}, {}",
        files.batsmen.display(),
        files.bowlers.display()
    );
    Ok(())
}
