//! Record and output models used for printing, CSV export, and JSON
//! serialization.

use crate::cli::types::{Season, Team};
use serde::{Deserialize, Serialize};

/// One row of the batting table: a player's season batting line.
///
/// Field order is the CSV column order; the serde renames are the exported
/// header names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BattingRecord {
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "Team")]
    pub team: Team,
    #[serde(rename = "Runs")]
    pub runs: u32,
    #[serde(rename = "Matches")]
    pub matches: u32,
    #[serde(rename = "Average")]
    pub average: f64,
    #[serde(rename = "Strike_Rate")]
    pub strike_rate: f64,
}

/// A [`BattingRecord`] with the derived runs-per-match rate appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedBattingRecord {
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "Team")]
    pub team: Team,
    #[serde(rename = "Runs")]
    pub runs: u32,
    #[serde(rename = "Matches")]
    pub matches: u32,
    #[serde(rename = "Average")]
    pub average: f64,
    #[serde(rename = "Strike_Rate")]
    pub strike_rate: f64,
    #[serde(rename = "Runs_Per_Match")]
    pub runs_per_match: f64,
}

/// One row of the bowling table: a player's season bowling line.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BowlingRecord {
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "Team")]
    pub team: Team,
    #[serde(rename = "Wickets")]
    pub wickets: u32,
    #[serde(rename = "Matches")]
    pub matches: u32,
    #[serde(rename = "Economy")]
    pub economy: f64,
    #[serde(rename = "Average")]
    pub average: f64,
}

/// A [`BowlingRecord`] with the derived wickets-per-match rate appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedBowlingRecord {
    #[serde(rename = "Player")]
    pub player: String,
    #[serde(rename = "Team")]
    pub team: Team,
    #[serde(rename = "Wickets")]
    pub wickets: u32,
    #[serde(rename = "Matches")]
    pub matches: u32,
    #[serde(rename = "Economy")]
    pub economy: f64,
    #[serde(rename = "Average")]
    pub average: f64,
    #[serde(rename = "Wickets_Per_Match")]
    pub wickets_per_match: f64,
}

/// Per-team union of summed batting and bowling totals.
///
/// Produced by grouping both tables by team code and outer-joining the
/// sums; a team present in only one table carries 0 on the other side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamTotals {
    #[serde(rename = "Team")]
    pub team: Team,
    #[serde(rename = "Total_Runs")]
    pub total_runs: u32,
    #[serde(rename = "Total_Wickets")]
    pub total_wickets: u32,
}

/// Aggregate statistics over the batting table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BattingSummary {
    /// Sum of runs across all rows.
    pub total_runs: u32,
    /// Arithmetic mean of runs.
    pub mean_runs: f64,
    /// Largest runs value (first occurrence wins ties).
    pub highest_runs: u32,
    /// Player holding [`Self::highest_runs`].
    pub highest_scorer: String,
    /// Sample standard deviation (N-1 denominator) of runs.
    pub std_dev_runs: f64,
}

/// Aggregate statistics over the bowling table.
///
/// `best_bowler` is a max-wickets selection; `best_economy_bowler` is a
/// **min**-economy selection. The two use distinct policies on purpose.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BowlingSummary {
    pub total_wickets: u32,
    pub mean_wickets: f64,
    pub best_bowler: String,
    pub best_bowler_wickets: u32,
    pub best_economy_bowler: String,
    pub best_economy: f64,
}

/// A symmetric Pearson correlation matrix over a set of named columns.
#[derive(Debug, Clone, Serialize)]
pub struct CorrelationMatrix {
    /// Section heading shown above the matrix.
    pub title: String,
    /// Column labels, in matrix order.
    pub labels: Vec<String>,
    /// Row-major coefficient grid; `values[i][j]` correlates column `i`
    /// with column `j`.
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Coefficient for the column pair `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i][j]
    }
}

/// The fully computed season report: enriched tables plus every derived
/// aggregate, ready for the console, chart, and file sinks.
#[derive(Debug, Clone, Serialize)]
pub struct SeasonReport {
    pub season: Season,
    pub batting: Vec<EnrichedBattingRecord>,
    pub bowling: Vec<EnrichedBowlingRecord>,
    pub batting_summary: BattingSummary,
    pub bowling_summary: BowlingSummary,
    pub team_totals: Vec<TeamTotals>,
    pub batting_correlation: CorrelationMatrix,
    pub bowling_correlation: CorrelationMatrix,
}
