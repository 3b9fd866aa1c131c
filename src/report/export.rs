//! File sink: CSV export of the enriched tables.
//!
//! Each table goes to its own file with a header row taken from the
//! record's serde renames, in field definition order, no index column.
//! Existing files are overwritten on every run.

use crate::error::Result;
use crate::models::SeasonReport;
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Paths of the two exported files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFiles {
    pub batsmen: PathBuf,
    pub bowlers: PathBuf,
}

/// Write both enriched tables as CSV under `out_dir`.
///
/// File names carry the season, e.g. `ipl_2025_top_batsmen.csv` and
/// `ipl_2025_top_bowlers.csv`.
pub fn export_csv(report: &SeasonReport, out_dir: &Path) -> Result<ExportedFiles> {
    let batsmen = out_dir.join(format!("ipl_{}_top_batsmen.csv", report.season));
    let bowlers = out_dir.join(format!("ipl_{}_top_bowlers.csv", report.season));

    write_table(&batsmen, &report.batting)?;
    write_table(&bowlers, &report.bowling)?;

    Ok(ExportedFiles { batsmen, bowlers })
}

fn write_table<T: Serialize>(path: &Path, records: &[T]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}
