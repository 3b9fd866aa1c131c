//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use ipl_stats::{
    cli::{Commands, IplStats},
    commands::{
        charts::handle_charts,
        export::handle_export,
        report::{handle_report, ReportParams},
        summary::handle_summary,
    },
};

/// Run the CLI.
fn main() -> anyhow::Result<()> {
    let app = IplStats::parse();

    match app.command {
        Commands::Report {
            data,
            out_dir,
            charts,
            no_charts,
            no_export,
        } => handle_report(ReportParams {
            data: data.data,
            out_dir,
            charts,
            no_charts,
            no_export,
        })?,

        Commands::Summary { data, json } => handle_summary(data.data, json)?,

        Commands::Export { data, out_dir } => handle_export(data.data, out_dir)?,

        Commands::Charts { data, output } => handle_charts(data.data, output)?,
    }

    Ok(())
}
