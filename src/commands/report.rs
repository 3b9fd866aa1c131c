//! The full report command: every sink in one pass.

use crate::report::{charts::render_charts, export::export_csv, print_report};
use crate::stats::build_report;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Configuration for the full report run.
#[derive(Debug, Default)]
pub struct ReportParams {
    pub data: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub charts: Option<PathBuf>,
    pub no_charts: bool,
    pub no_export: bool,
}

/// Run the whole pipeline: console sections, then the chart PNG, then the
/// CSV export. The sinks are independent; disabling one does not affect
/// the others.
pub fn handle_report(params: ReportParams) -> Result<()> {
    let dataset = super::load_dataset(params.data)?;
    let report = build_report(&dataset)?;

    print_report(&report);

    if !params.no_charts {
        let chart_path = params
            .charts
            .unwrap_or_else(|| PathBuf::from(format!("ipl_{}_report.png", report.season)));
        render_charts(&report, &chart_path)
            .with_context(|| format!("rendering charts to {}", chart_path.display()))?;
        println!("\nChart panels saved: {}", chart_path.display());
    }

    if !params.no_export {
        let out_dir = params.out_dir.unwrap_or_else(|| PathBuf::from("."));
        let files = export_csv(&report, &out_dir)
            .with_context(|| format!("exporting CSV files to {}", out_dir.display()))?;
        println!(
            "Files saved: {}, {}",
            files.batsmen.display(),
            files.bowlers.display()
        );
    }

    Ok(())
}
