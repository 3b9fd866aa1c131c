//! The statistics pipeline: enrichment, summaries, team aggregation, and
//! correlation.
//!
//! Everything here is pure computation over in-memory tables. The sinks
//! (console, charts, CSV) live in [`crate::report`] and consume the
//! [`SeasonReport`] this module produces; nothing here touches the
//! filesystem or a display.

use crate::dataset::SeasonDataset;
use crate::error::{Result, StatsError};
use crate::models::{
    BattingRecord, BattingSummary, BowlingRecord, BowlingSummary, CorrelationMatrix,
    EnrichedBattingRecord, EnrichedBowlingRecord, SeasonReport, TeamTotals,
};
use std::collections::BTreeMap;

/// Round to two decimal places, ties to even.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round_ties_even() / 100.0
}

/// Derived per-match rate: `metric / matches`, rounded to 2 decimals.
///
/// Precondition: `matches > 0`. Datasets are validated at load
/// ([`SeasonDataset::validate`]), so the division here is safe.
pub fn per_match_rate(metric: u32, matches: u32) -> f64 {
    debug_assert!(matches > 0, "matches must be validated before enrichment");
    round2(f64::from(metric) / f64::from(matches))
}

/// Arithmetic mean of a non-empty slice.
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample standard deviation (N-1 denominator).
///
/// Undefined for fewer than two values, which is rejected rather than
/// returning NaN.
pub fn sample_std_dev(values: &[f64], table: &'static str) -> Result<f64> {
    if values.len() < 2 {
        return Err(StatsError::InsufficientRows { table, needed: 2 });
    }
    let m = mean(values);
    let sum_sq: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    Ok((sum_sq / (values.len() - 1) as f64).sqrt())
}

/// Select the row with the largest key; ties go to the first occurrence
/// in input order.
///
/// This is one of two distinct selection policies. Use
/// [`leader_by_min`] for metrics where smaller is better (economy);
/// the two are deliberately separate functions so a caller cannot invert
/// one by accident.
pub fn leader_by_max<T, K>(rows: &[T], key: K) -> Option<&T>
where
    K: Fn(&T) -> f64,
{
    rows.iter().fold(None, |best, row| match best {
        Some(current) if key(row) <= key(current) => Some(current),
        _ => Some(row),
    })
}

/// Select the row with the smallest key; ties go to the first occurrence
/// in input order. The minimizing counterpart of [`leader_by_max`].
pub fn leader_by_min<T, K>(rows: &[T], key: K) -> Option<&T>
where
    K: Fn(&T) -> f64,
{
    rows.iter().fold(None, |best, row| match best {
        Some(current) if key(row) >= key(current) => Some(current),
        _ => Some(row),
    })
}

/// Append the runs-per-match column to each batting record.
pub fn enrich_batting(records: &[BattingRecord]) -> Vec<EnrichedBattingRecord> {
    records
        .iter()
        .map(|r| EnrichedBattingRecord {
            player: r.player.clone(),
            team: r.team,
            runs: r.runs,
            matches: r.matches,
            average: r.average,
            strike_rate: r.strike_rate,
            runs_per_match: per_match_rate(r.runs, r.matches),
        })
        .collect()
}

/// Append the wickets-per-match column to each bowling record.
pub fn enrich_bowling(records: &[BowlingRecord]) -> Vec<EnrichedBowlingRecord> {
    records
        .iter()
        .map(|r| EnrichedBowlingRecord {
            player: r.player.clone(),
            team: r.team,
            wickets: r.wickets,
            matches: r.matches,
            economy: r.economy,
            average: r.average,
            wickets_per_match: per_match_rate(r.wickets, r.matches),
        })
        .collect()
}

/// Aggregate statistics over the batting table.
pub fn summarize_batting(records: &[EnrichedBattingRecord]) -> Result<BattingSummary> {
    let top = leader_by_max(records, |r| f64::from(r.runs))
        .ok_or(StatsError::EmptyTable { table: "batting" })?;
    let runs: Vec<f64> = records.iter().map(|r| f64::from(r.runs)).collect();

    Ok(BattingSummary {
        total_runs: records.iter().map(|r| r.runs).sum(),
        mean_runs: mean(&runs),
        highest_runs: top.runs,
        highest_scorer: top.player.clone(),
        std_dev_runs: sample_std_dev(&runs, "batting")?,
    })
}

/// Aggregate statistics over the bowling table.
///
/// Best bowler maximizes wickets; best economy *minimizes* economy.
pub fn summarize_bowling(records: &[EnrichedBowlingRecord]) -> Result<BowlingSummary> {
    let best = leader_by_max(records, |r| f64::from(r.wickets))
        .ok_or(StatsError::EmptyTable { table: "bowling" })?;
    let thriftiest = leader_by_min(records, |r| r.economy)
        .ok_or(StatsError::EmptyTable { table: "bowling" })?;
    let wickets: Vec<f64> = records.iter().map(|r| f64::from(r.wickets)).collect();

    Ok(BowlingSummary {
        total_wickets: records.iter().map(|r| r.wickets).sum(),
        mean_wickets: mean(&wickets),
        best_bowler: best.player.clone(),
        best_bowler_wickets: best.wickets,
        best_economy_bowler: thriftiest.player.clone(),
        best_economy: thriftiest.economy,
    })
}

/// Group both tables by team, sum the primary metric of each, and outer
/// join on the team code with zero fill.
///
/// The output is dense: a team appearing in only one table still gets a
/// row, with 0 for the missing side. Rows come out in team-code order.
pub fn team_totals(
    batting: &[EnrichedBattingRecord],
    bowling: &[EnrichedBowlingRecord],
) -> Vec<TeamTotals> {
    let mut totals: BTreeMap<crate::cli::types::Team, (u32, u32)> = BTreeMap::new();
    for record in batting {
        totals.entry(record.team).or_insert((0, 0)).0 += record.runs;
    }
    for record in bowling {
        totals.entry(record.team).or_insert((0, 0)).1 += record.wickets;
    }

    totals
        .into_iter()
        .map(|(team, (total_runs, total_wickets))| TeamTotals {
            team,
            total_runs,
            total_wickets,
        })
        .collect()
}

/// Pearson correlation coefficient between two equal-length columns.
fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let mx = mean(x);
    let my = mean(y);
    let cov: f64 = x.iter().zip(y).map(|(a, b)| (a - mx) * (b - my)).sum();
    let sx: f64 = x.iter().map(|a| (a - mx).powi(2)).sum::<f64>().sqrt();
    let sy: f64 = y.iter().map(|b| (b - my).powi(2)).sum::<f64>().sqrt();
    cov / (sx * sy)
}

/// Pairwise Pearson correlation matrix over named columns.
///
/// The diagonal is pinned to exactly 1.0 and the off-diagonal entries are
/// mirrored, so the result is symmetric by construction. Requires at
/// least two rows per column.
pub fn correlation_matrix(
    title: &str,
    table: &'static str,
    labels: &[&str],
    columns: &[Vec<f64>],
) -> Result<CorrelationMatrix> {
    if columns.iter().any(|c| c.len() < 2) {
        return Err(StatsError::InsufficientRows { table, needed: 2 });
    }

    let n = columns.len();
    let mut values = vec![vec![0.0; n]; n];
    for i in 0..n {
        values[i][i] = 1.0;
        for j in (i + 1)..n {
            let r = pearson(&columns[i], &columns[j]);
            values[i][j] = r;
            values[j][i] = r;
        }
    }

    Ok(CorrelationMatrix {
        title: title.to_string(),
        labels: labels.iter().map(|l| l.to_string()).collect(),
        values,
    })
}

/// Correlation of (runs, average, strike rate) over the batting table.
pub fn batting_correlation(records: &[EnrichedBattingRecord]) -> Result<CorrelationMatrix> {
    correlation_matrix(
        "Batting Metrics Correlation",
        "batting",
        &["Runs", "Average", "Strike_Rate"],
        &[
            records.iter().map(|r| f64::from(r.runs)).collect(),
            records.iter().map(|r| r.average).collect(),
            records.iter().map(|r| r.strike_rate).collect(),
        ],
    )
}

/// Correlation of (wickets, economy, average) over the bowling table.
pub fn bowling_correlation(records: &[EnrichedBowlingRecord]) -> Result<CorrelationMatrix> {
    correlation_matrix(
        "Bowling Metrics Correlation",
        "bowling",
        &["Wickets", "Economy", "Average"],
        &[
            records.iter().map(|r| f64::from(r.wickets)).collect(),
            records.iter().map(|r| r.economy).collect(),
            records.iter().map(|r| r.average).collect(),
        ],
    )
}

/// Run the full forward pass over a dataset: validate, enrich, summarize,
/// aggregate, correlate.
///
/// This is the single entry point the sinks consume. Any failure (empty
/// table, zero matches, too few rows for correlation) propagates as a
/// hard error; there is no partial result.
pub fn build_report(dataset: &SeasonDataset) -> Result<SeasonReport> {
    dataset.validate()?;

    let batting = enrich_batting(&dataset.batting);
    let bowling = enrich_bowling(&dataset.bowling);
    let batting_summary = summarize_batting(&batting)?;
    let bowling_summary = summarize_bowling(&bowling)?;
    let team_totals = team_totals(&batting, &bowling);
    let batting_correlation = batting_correlation(&batting)?;
    let bowling_correlation = bowling_correlation(&bowling)?;

    Ok(SeasonReport {
        season: dataset.season,
        batting,
        bowling,
        batting_summary,
        bowling_summary,
        team_totals,
        batting_correlation,
        bowling_correlation,
    })
}

#[cfg(test)]
mod tests;
