//! Unit tests for error display formatting

use super::*;

#[test]
fn test_zero_matches_display() {
    let err = StatsError::ZeroMatches {
        player: "Test Player".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Record for Test Player has zero matches played"
    );
}

#[test]
fn test_empty_table_display() {
    let err = StatsError::EmptyTable { table: "batting" };
    assert_eq!(err.to_string(), "The batting table is empty");
}

#[test]
fn test_insufficient_rows_display() {
    let err = StatsError::InsufficientRows {
        table: "bowling",
        needed: 2,
    };
    assert_eq!(err.to_string(), "The bowling table needs at least 2 rows");
}

#[test]
fn test_unknown_team_display() {
    let err = StatsError::UnknownTeam {
        code: "XYZ".to_string(),
    };
    assert_eq!(err.to_string(), "Unknown team code: XYZ");
}

#[test]
fn test_chart_wraps_message() {
    let err = StatsError::chart("backend exploded");
    assert_eq!(err.to_string(), "Chart rendering failed: backend exploded");
}

#[test]
fn test_io_error_conversion() {
    let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
    let err: StatsError = io_err.into();
    assert!(matches!(err, StatsError::Io(_)));
}
