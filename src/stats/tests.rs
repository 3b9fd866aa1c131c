//! Unit tests for the statistics pipeline

use super::*;
use crate::cli::types::Team;

fn season() -> SeasonDataset {
    SeasonDataset::season_2025()
}

#[test]
fn test_round2_half_even() {
    // 0.125 and 0.375 are exact in binary, so these exercise the
    // tie-to-even rule without representation noise.
    assert_eq!(round2(0.125), 0.12);
    assert_eq!(round2(0.375), 0.38);
    assert_eq!(round2(46.92857142857143), 46.93);
    assert_eq!(round2(1.1538461538461537), 1.15);
}

#[test]
fn test_per_match_rate_known_values() {
    assert_eq!(per_match_rate(759, 15), 50.6);
    assert_eq!(per_match_rate(600, 15), 40.0);
    assert_eq!(per_match_rate(657, 14), 46.93);
    assert_eq!(per_match_rate(25, 15), 1.67);
    assert_eq!(per_match_rate(13, 14), 0.93);
}

#[test]
fn test_enrich_batting_appends_rate() {
    let enriched = enrich_batting(&season().batting);
    let rates: Vec<f64> = enriched.iter().map(|r| r.runs_per_match).collect();
    assert_eq!(rates, vec![50.6, 47.8, 46.93, 40.0, 41.43]);
}

#[test]
fn test_enrich_bowling_appends_rate() {
    let enriched = enrich_bowling(&season().bowling);
    let rates: Vec<f64> = enriched.iter().map(|r| r.wickets_per_match).collect();
    assert_eq!(rates, vec![1.67, 1.57, 1.15, 1.17, 0.93]);
}

#[test]
fn test_summarize_batting_known_values() {
    let summary = summarize_batting(&enrich_batting(&season().batting)).unwrap();

    assert_eq!(summary.total_runs, 3313);
    assert!((summary.mean_runs - 662.6).abs() < 1e-9);
    assert_eq!(summary.highest_scorer, "Sai Sudharsan");
    assert_eq!(summary.highest_runs, 759);
    // Sample std dev of [759, 717, 657, 600, 580] = sqrt(23025.2 / 4)
    assert!((summary.std_dev_runs - (23025.2f64 / 4.0).sqrt()).abs() < 1e-9);
}

#[test]
fn test_summarize_bowling_known_values() {
    let summary = summarize_bowling(&enrich_bowling(&season().bowling)).unwrap();

    assert_eq!(summary.total_wickets, 89);
    assert!((summary.mean_wickets - 17.8).abs() < 1e-9);
    assert_eq!(summary.best_bowler, "Prasidh Krishna");
    assert_eq!(summary.best_bowler_wickets, 25);
    // Best economy is the MINIMUM economy, not the maximum.
    assert_eq!(summary.best_economy_bowler, "Noor Ahmad");
    assert_eq!(summary.best_economy, 7.5);
}

#[test]
fn test_summarize_empty_tables() {
    assert!(matches!(
        summarize_batting(&[]),
        Err(StatsError::EmptyTable { table: "batting" })
    ));
    assert!(matches!(
        summarize_bowling(&[]),
        Err(StatsError::EmptyTable { table: "bowling" })
    ));
}

#[test]
fn test_leader_by_max_first_occurrence_tie_break() {
    let rows = vec![("a", 3.0), ("b", 5.0), ("c", 5.0), ("d", 1.0)];
    let winner = leader_by_max(&rows, |r| r.1).unwrap();
    assert_eq!(winner.0, "b");
}

#[test]
fn test_leader_by_min_first_occurrence_tie_break() {
    let rows = vec![("a", 3.0), ("b", 1.0), ("c", 1.0), ("d", 4.0)];
    let winner = leader_by_min(&rows, |r| r.1).unwrap();
    assert_eq!(winner.0, "b");
}

#[test]
fn test_leaders_on_empty_slice() {
    let rows: Vec<(&str, f64)> = vec![];
    assert!(leader_by_max(&rows, |r| r.1).is_none());
    assert!(leader_by_min(&rows, |r| r.1).is_none());
}

#[test]
fn test_team_totals_merges_both_tables() {
    let dataset = season();
    let totals = team_totals(
        &enrich_batting(&dataset.batting),
        &enrich_bowling(&dataset.bowling),
    );

    // Union of the team codes from both tables, in code order.
    let teams: Vec<Team> = totals.iter().map(|t| t.team).collect();
    assert_eq!(
        teams,
        vec![
            Team::CSK,
            Team::DC,
            Team::GT,
            Team::KKR,
            Team::LSG,
            Team::MI,
            Team::RCB
        ]
    );

    let rcb = totals.iter().find(|t| t.team == Team::RCB).unwrap();
    assert_eq!(rcb.total_runs, 657);
    assert_eq!(rcb.total_wickets, 35); // Hazlewood 22 + Siraj 13
}

#[test]
fn test_team_totals_zero_fills_missing_side() {
    let dataset = season();
    let totals = team_totals(
        &enrich_batting(&dataset.batting),
        &enrich_bowling(&dataset.bowling),
    );

    // MI bats but takes no wickets in these tables; CSK the reverse.
    let mi = totals.iter().find(|t| t.team == Team::MI).unwrap();
    assert_eq!((mi.total_runs, mi.total_wickets), (717, 0));

    let csk = totals.iter().find(|t| t.team == Team::CSK).unwrap();
    assert_eq!((csk.total_runs, csk.total_wickets), (0, 15));
}

#[test]
fn test_correlation_diagonal_and_symmetry() {
    let dataset = season();
    for matrix in [
        batting_correlation(&enrich_batting(&dataset.batting)).unwrap(),
        bowling_correlation(&enrich_bowling(&dataset.bowling)).unwrap(),
    ] {
        for i in 0..3 {
            assert_eq!(matrix.get(i, i), 1.0);
            for j in 0..3 {
                assert!((matrix.get(i, j) - matrix.get(j, i)).abs() < 1e-12);
                assert!(matrix.get(i, j) >= -1.0 - 1e-12);
                assert!(matrix.get(i, j) <= 1.0 + 1e-12);
            }
        }
    }
}

#[test]
fn test_correlation_perfectly_linear_columns() {
    let x = vec![1.0, 2.0, 3.0, 4.0];
    let doubled: Vec<f64> = x.iter().map(|v| v * 2.0).collect();
    let negated: Vec<f64> = x.iter().map(|v| -v).collect();

    let matrix = correlation_matrix(
        "test",
        "test",
        &["x", "2x", "-x"],
        &[x, doubled, negated],
    )
    .unwrap();

    assert!((matrix.get(0, 1) - 1.0).abs() < 1e-12);
    assert!((matrix.get(0, 2) + 1.0).abs() < 1e-12);
}

#[test]
fn test_correlation_rejects_single_row() {
    let result = correlation_matrix("test", "batting", &["a", "b"], &[vec![1.0], vec![2.0]]);
    assert!(matches!(
        result,
        Err(StatsError::InsufficientRows {
            table: "batting",
            needed: 2
        })
    ));
}

#[test]
fn test_sample_std_dev_rejects_single_value() {
    assert!(matches!(
        sample_std_dev(&[1.0], "batting"),
        Err(StatsError::InsufficientRows { .. })
    ));
}

#[test]
fn test_build_report_full_pass() {
    let report = build_report(&season()).unwrap();

    assert_eq!(report.season.as_u16(), 2025);
    assert_eq!(report.batting.len(), 5);
    assert_eq!(report.bowling.len(), 5);
    assert_eq!(report.batting_summary.total_runs, 3313);
    assert_eq!(report.bowling_summary.total_wickets, 89);
    assert_eq!(report.team_totals.len(), 7);
    assert_eq!(report.batting_correlation.labels.len(), 3);
    assert_eq!(report.bowling_correlation.labels.len(), 3);
}

#[test]
fn test_build_report_rejects_invalid_dataset() {
    let mut dataset = season();
    dataset.bowling[0].matches = 0;
    assert!(matches!(
        build_report(&dataset),
        Err(StatsError::ZeroMatches { .. })
    ));
}
