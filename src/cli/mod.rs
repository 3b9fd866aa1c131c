//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Dataset source options shared between commands
#[derive(Debug, Args)]
pub struct DataOpts {
    /// Path to a JSON dataset (or set `IPL_STATS_DATA` env var);
    /// defaults to the built-in IPL 2025 tables.
    #[clap(long, short)]
    pub data: Option<PathBuf>,
}

#[derive(Debug, Parser)]
#[clap(name = "ipl-stats", about = "IPL season statistics report generator")]
pub struct IplStats {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the full report: console sections, chart panels, and CSV export.
    Report {
        #[clap(flatten)]
        data: DataOpts,

        /// Directory for the exported CSV files (defaults to the working
        /// directory).
        #[clap(long)]
        out_dir: Option<PathBuf>,

        /// Output path for the chart PNG (defaults to
        /// `ipl_<season>_report.png` in the working directory).
        #[clap(long)]
        charts: Option<PathBuf>,

        /// Skip the chart sink.
        #[clap(long)]
        no_charts: bool,

        /// Skip the CSV export sink.
        #[clap(long)]
        no_export: bool,
    },

    /// Print the computed statistics without touching the filesystem.
    Summary {
        #[clap(flatten)]
        data: DataOpts,

        /// Output the whole report as JSON instead of text sections.
        #[clap(long)]
        json: bool,
    },

    /// Export the enriched tables as CSV files.
    Export {
        #[clap(flatten)]
        data: DataOpts,

        /// Directory for the exported CSV files (defaults to the working
        /// directory).
        #[clap(long)]
        out_dir: Option<PathBuf>,
    },

    /// Render the chart panels as a PNG.
    Charts {
        #[clap(flatten)]
        data: DataOpts,

        /// Output path for the chart PNG.
        #[clap(long, short)]
        output: Option<PathBuf>,
    },
}
