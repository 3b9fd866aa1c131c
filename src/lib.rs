//! IPL Season Statistics CLI Library
//!
//! A Rust library for generating descriptive-statistics reports over an
//! IPL season's top batting and bowling performers: formatted console
//! summaries, derived per-match rates, chart panels, Pearson correlation
//! matrices, and CSV export.
//!
//! ## Features
//!
//! - **Explicit Datasets**: The input tables are plain values, built in or
//!   loaded from a JSON file, never global state
//! - **Derived Rates**: Runs- and wickets-per-match, rounded to 2 decimals
//! - **Summaries**: Totals, means, sample standard deviation, and distinct
//!   max/min leader selections
//! - **Team Aggregation**: Zero-filled outer join of per-team totals
//! - **Correlation**: Pairwise Pearson matrices over the numeric columns
//! - **Sinks**: Console tables, a six-panel chart PNG, and CSV files, all
//!   independent consumers of the computed report
//!
//! ## Quick Start
//!
//! ```rust
//! use ipl_stats::{dataset::SeasonDataset, stats::build_report};
//!
//! # fn example() -> ipl_stats::Result<()> {
//! let dataset = SeasonDataset::season_2025();
//! let report = build_report(&dataset)?;
//!
//! assert_eq!(report.batting_summary.total_runs, 3313);
//! assert_eq!(report.bowling_summary.best_economy_bowler, "Noor Ahmad");
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Point the CLI at an alternative dataset without passing `--data` every
//! time:
//! ```bash
//! export IPL_STATS_DATA=/path/to/season.json
//! ```

pub mod cli;
pub mod commands;
pub mod dataset;
pub mod error;
pub mod models;
pub mod report;
pub mod stats;

// Re-export commonly used types
pub use cli::types::{Season, Team};
pub use dataset::SeasonDataset;
pub use error::{Result, StatsError};
pub use models::SeasonReport;

pub const DATA_PATH_ENV_VAR: &str = "IPL_STATS_DATA";
