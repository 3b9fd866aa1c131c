//! Report sinks: console text, chart panels, and CSV export.
//!
//! Each sink is a terminal consumer of the computed [`SeasonReport`]; none
//! of them feeds anything back into the statistics pipeline. The console
//! renderers return `String`s so output can be asserted on without
//! capturing stdout.

pub mod charts;
pub mod export;

use crate::models::{
    BattingSummary, BowlingSummary, CorrelationMatrix, EnrichedBattingRecord,
    EnrichedBowlingRecord, SeasonReport, TeamTotals,
};
use tabled::{builder::Builder, Table, Tabled};

const BANNER_WIDTH: usize = 70;

/// Full-width `=` banner used between report sections.
pub fn banner() -> String {
    "=".repeat(BANNER_WIDTH)
}

/// Full-width `-` rule used under section titles.
pub fn rule() -> String {
    "-".repeat(BANNER_WIDTH)
}

/// Console row for the batting table, with floats pre-formatted.
#[derive(Tabled)]
struct BattingRow {
    #[tabled(rename = "Player")]
    player: String,
    #[tabled(rename = "Team")]
    team: String,
    #[tabled(rename = "Runs")]
    runs: u32,
    #[tabled(rename = "Matches")]
    matches: u32,
    #[tabled(rename = "Average")]
    average: String,
    #[tabled(rename = "Strike_Rate")]
    strike_rate: String,
    #[tabled(rename = "Runs_Per_Match")]
    runs_per_match: String,
}

impl From<&EnrichedBattingRecord> for BattingRow {
    fn from(record: &EnrichedBattingRecord) -> Self {
        Self {
            player: record.player.clone(),
            team: record.team.to_string(),
            runs: record.runs,
            matches: record.matches,
            average: format!("{:.1}", record.average),
            strike_rate: format!("{:.1}", record.strike_rate),
            runs_per_match: format!("{:.2}", record.runs_per_match),
        }
    }
}

/// Console row for the bowling table.
#[derive(Tabled)]
struct BowlingRow {
    #[tabled(rename = "Player")]
    player: String,
    #[tabled(rename = "Team")]
    team: String,
    #[tabled(rename = "Wickets")]
    wickets: u32,
    #[tabled(rename = "Matches")]
    matches: u32,
    #[tabled(rename = "Economy")]
    economy: String,
    #[tabled(rename = "Average")]
    average: String,
    #[tabled(rename = "Wickets_Per_Match")]
    wickets_per_match: String,
}

impl From<&EnrichedBowlingRecord> for BowlingRow {
    fn from(record: &EnrichedBowlingRecord) -> Self {
        Self {
            player: record.player.clone(),
            team: record.team.to_string(),
            wickets: record.wickets,
            matches: record.matches,
            economy: format!("{:.1}", record.economy),
            average: format!("{:.1}", record.average),
            wickets_per_match: format!("{:.2}", record.wickets_per_match),
        }
    }
}

#[derive(Tabled)]
struct TeamRow {
    #[tabled(rename = "Team")]
    team: String,
    #[tabled(rename = "Total_Runs")]
    total_runs: u32,
    #[tabled(rename = "Total_Wickets")]
    total_wickets: u32,
}

impl From<&TeamTotals> for TeamRow {
    fn from(totals: &TeamTotals) -> Self {
        Self {
            team: totals.team.to_string(),
            total_runs: totals.total_runs,
            total_wickets: totals.total_wickets,
        }
    }
}

/// Render the enriched batting table as ASCII.
pub fn render_batting_table(records: &[EnrichedBattingRecord]) -> String {
    Table::new(records.iter().map(BattingRow::from)).to_string()
}

/// Render the enriched bowling table as ASCII.
pub fn render_bowling_table(records: &[EnrichedBowlingRecord]) -> String {
    Table::new(records.iter().map(BowlingRow::from)).to_string()
}

/// Render the per-team totals table as ASCII.
pub fn render_team_totals(totals: &[TeamTotals]) -> String {
    Table::new(totals.iter().map(TeamRow::from)).to_string()
}

/// Render the batting summary lines (totals as integers, the rest to two
/// decimals).
pub fn render_batting_summary(summary: &BattingSummary) -> String {
    format!(
        "Total Runs: {}\n\
         Average Runs: {:.2}\n\
         Highest Score: {} by {}\n\
         Standard Deviation: {:.2}",
        summary.total_runs,
        summary.mean_runs,
        summary.highest_runs,
        summary.highest_scorer,
        summary.std_dev_runs,
    )
}

/// Render the bowling summary lines.
pub fn render_bowling_summary(summary: &BowlingSummary) -> String {
    format!(
        "Total Wickets: {}\n\
         Average Wickets: {:.2}\n\
         Best Bowler: {} with {} wickets\n\
         Best Economy: {} by {}",
        summary.total_wickets,
        summary.mean_wickets,
        summary.best_bowler,
        summary.best_bowler_wickets,
        summary.best_economy,
        summary.best_economy_bowler,
    )
}

/// Render a correlation matrix with row and column labels, coefficients
/// to four decimals.
pub fn render_correlation(matrix: &CorrelationMatrix) -> String {
    let mut builder = Builder::default();

    let mut header = vec![String::new()];
    header.extend(matrix.labels.iter().cloned());
    builder.push_record(header);

    for (label, row) in matrix.labels.iter().zip(&matrix.values) {
        let mut record = vec![label.clone()];
        record.extend(row.iter().map(|v| format!("{v:.4}")));
        builder.push_record(record);
    }

    format!("{}:\n{}", matrix.title, builder.build())
}

/// Print every console section of the report, banner-delimited.
pub fn print_report(report: &SeasonReport) {
    println!("{}", banner());
    println!("IPL {} STATISTICS ANALYSIS", report.season);
    println!("{}", banner());

    println!(
        "\nTOP {} RUN SCORERS - IPL {}",
        report.batting.len(),
        report.season
    );
    println!("{}", rule());
    println!("{}", render_batting_table(&report.batting));

    println!("\nBATTING STATISTICS:");
    println!("{}", render_batting_summary(&report.batting_summary));

    println!("\n{}", banner());
    println!(
        "TOP {} WICKET TAKERS - IPL {}",
        report.bowling.len(),
        report.season
    );
    println!("{}", rule());
    println!("{}", render_bowling_table(&report.bowling));

    println!("\nBOWLING STATISTICS:");
    println!("{}", render_bowling_summary(&report.bowling_summary));

    println!("\n{}", banner());
    println!("TEAM-WISE PERFORMANCE");
    println!("{}", rule());
    println!("{}", render_team_totals(&report.team_totals));

    println!("\n{}", banner());
    println!("CORRELATION ANALYSIS");
    println!("{}", rule());
    println!("\n{}", render_correlation(&report.batting_correlation));
    println!("\n{}", render_correlation(&report.bowling_correlation));
}
