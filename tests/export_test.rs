//! Integration tests for the file and chart sinks

use ipl_stats::{
    dataset::SeasonDataset,
    models::{EnrichedBattingRecord, EnrichedBowlingRecord},
    report::{charts::render_charts, export::export_csv},
    stats::build_report,
};

#[test]
fn test_export_writes_both_files() {
    let report = build_report(&SeasonDataset::season_2025()).unwrap();
    let dir = tempfile::tempdir().unwrap();

    let files = export_csv(&report, dir.path()).unwrap();

    assert_eq!(
        files.batsmen.file_name().unwrap(),
        "ipl_2025_top_batsmen.csv"
    );
    assert_eq!(
        files.bowlers.file_name().unwrap(),
        "ipl_2025_top_bowlers.csv"
    );
    assert!(files.batsmen.exists());
    assert!(files.bowlers.exists());
}

#[test]
fn test_export_header_order_and_no_index_column() {
    let report = build_report(&SeasonDataset::season_2025()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let files = export_csv(&report, dir.path()).unwrap();

    let batsmen = std::fs::read_to_string(&files.batsmen).unwrap();
    let header = batsmen.lines().next().unwrap();
    assert_eq!(
        header,
        "Player,Team,Runs,Matches,Average,Strike_Rate,Runs_Per_Match"
    );

    let bowlers = std::fs::read_to_string(&files.bowlers).unwrap();
    let header = bowlers.lines().next().unwrap();
    assert_eq!(
        header,
        "Player,Team,Wickets,Matches,Economy,Average,Wickets_Per_Match"
    );

    // One header plus one line per record, nothing else.
    assert_eq!(batsmen.lines().count(), 6);
    assert_eq!(bowlers.lines().count(), 6);
}

#[test]
fn test_export_round_trip_preserves_rows() {
    let report = build_report(&SeasonDataset::season_2025()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let files = export_csv(&report, dir.path()).unwrap();

    let mut reader = csv::Reader::from_path(&files.batsmen).unwrap();
    let parsed: Vec<EnrichedBattingRecord> =
        reader.deserialize().collect::<Result<_, _>>().unwrap();
    assert_eq!(parsed, report.batting);

    let mut reader = csv::Reader::from_path(&files.bowlers).unwrap();
    let parsed: Vec<EnrichedBowlingRecord> =
        reader.deserialize().collect::<Result<_, _>>().unwrap();
    assert_eq!(parsed, report.bowling);
}

#[test]
fn test_export_overwrites_existing_files() {
    let report = build_report(&SeasonDataset::season_2025()).unwrap();
    let dir = tempfile::tempdir().unwrap();

    let first = export_csv(&report, dir.path()).unwrap();
    std::fs::write(&first.batsmen, "stale contents").unwrap();

    let second = export_csv(&report, dir.path()).unwrap();
    assert_eq!(first, second);

    let contents = std::fs::read_to_string(&second.batsmen).unwrap();
    assert!(contents.starts_with("Player,Team,Runs"));
}

#[test]
fn test_export_to_missing_directory_fails() {
    let report = build_report(&SeasonDataset::season_2025()).unwrap();
    let result = export_csv(&report, std::path::Path::new("/nonexistent/dir"));
    assert!(result.is_err());
}

#[test]
#[ignore = "Font rendering not available in test environment"]
fn test_render_charts_writes_png() {
    let report = build_report(&SeasonDataset::season_2025()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("report.png");

    render_charts(&report, &path).unwrap();
    assert!(path.exists());
    assert!(std::fs::metadata(&path).unwrap().len() > 0);
}
