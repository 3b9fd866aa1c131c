//! Command implementations for the IPL statistics CLI
//!
//! Each handler is a thin wrapper over the library: resolve the dataset,
//! run the pipeline, hand the result to the requested sinks. Handlers use
//! [`anyhow`] to attach file-path context to failures on the way out.

pub mod charts;
pub mod export;
pub mod report;
pub mod summary;

use crate::dataset::SeasonDataset;
use crate::DATA_PATH_ENV_VAR;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Resolve the dataset: explicit `--data` path, then the
/// `IPL_STATS_DATA` env var, then the built-in season tables.
pub fn load_dataset(data: Option<PathBuf>) -> Result<SeasonDataset> {
    let path = data.or_else(|| std::env::var(DATA_PATH_ENV_VAR).ok().map(PathBuf::from));

    match path {
        Some(path) => SeasonDataset::from_json_file(&path)
            .with_context(|| format!("loading dataset from {}", path.display())),
        None => Ok(SeasonDataset::season_2025()),
    }
}
