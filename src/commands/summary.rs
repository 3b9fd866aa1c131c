//! Console-only statistics summary.

use crate::report::print_report;
use crate::stats::build_report;
use anyhow::Result;
use std::path::PathBuf;

/// Print the computed report, either as the banner-delimited text
/// sections or as one pretty-printed JSON document.
pub fn handle_summary(data: Option<PathBuf>, as_json: bool) -> Result<()> {
    let dataset = super::load_dataset(data)?;
    let report = build_report(&dataset)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&report);
    }

    Ok(())
}
