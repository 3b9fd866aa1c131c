//! Chart rendering command.

use crate::report::charts::render_charts;
use crate::stats::build_report;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Render the six chart panels into a single PNG.
pub fn handle_charts(data: Option<PathBuf>, output: Option<PathBuf>) -> Result<()> {
    let dataset = super::load_dataset(data)?;
    let report = build_report(&dataset)?;

    let chart_path =
        output.unwrap_or_else(|| PathBuf::from(format!("ipl_{}_report.png", report.season)));
    render_charts(&report, &chart_path)
        .with_context(|| format!("rendering charts to {}", chart_path.display()))?;

    println!("Chart panels saved: {}", chart_path.display());
    Ok(())
}
