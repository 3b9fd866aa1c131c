//! Season dataset construction and validation.
//!
//! The two input tables are explicit values handed to the pipeline, never
//! module-level state. [`SeasonDataset::season_2025`] builds the built-in
//! season; [`SeasonDataset::from_json_file`] loads the same shape from a
//! JSON document so the dataset can be swapped without recompiling.

use crate::cli::types::{Season, Team};
use crate::error::{Result, StatsError};
use crate::models::{BattingRecord, BowlingRecord};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// The input to the report pipeline: one batting table and one bowling
/// table for a single season.
///
/// Invariants checked by [`SeasonDataset::validate`]:
/// - both tables are non-empty;
/// - every record has `matches > 0` (divisor safety for the per-match
///   rates).
///
/// Tables are read in insertion order; player names need not be unique,
/// and team codes may repeat across the two tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeasonDataset {
    pub season: Season,
    pub batting: Vec<BattingRecord>,
    pub bowling: Vec<BowlingRecord>,
}

impl SeasonDataset {
    /// The built-in IPL 2025 top-performer tables.
    pub fn season_2025() -> Self {
        let batting = vec![
            batting("Sai Sudharsan", Team::GT, 759, 15, 50.6, 148.5),
            batting("Suryakumar Yadav", Team::MI, 717, 15, 47.8, 165.2),
            batting("Virat Kohli", Team::RCB, 657, 14, 46.9, 142.3),
            batting("Mitchell Marsh", Team::LSG, 600, 15, 40.0, 155.8),
            batting("Shreyas Iyer", Team::KKR, 580, 14, 41.4, 138.9),
        ];
        let bowling = vec![
            bowling("Prasidh Krishna", Team::GT, 25, 15, 8.2, 18.5),
            bowling("Josh Hazlewood", Team::RCB, 22, 14, 7.8, 19.2),
            bowling("Noor Ahmad", Team::CSK, 15, 13, 7.5, 22.1),
            bowling("Khaleel Ahmed", Team::DC, 14, 12, 8.5, 23.5),
            bowling("Mohammed Siraj", Team::RCB, 13, 14, 8.9, 25.3),
        ];

        Self {
            season: Season::new(2025),
            batting,
            bowling,
        }
    }

    /// Load a dataset from a JSON file and validate it.
    ///
    /// The document shape matches the `Serialize` form of this struct:
    /// `{"season": 2025, "batting": [...], "bowling": [...]}` with the
    /// exported column names (`Player`, `Team`, `Runs`, ...) as keys.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let file = File::open(path)?;
        let dataset: SeasonDataset = serde_json::from_reader(BufReader::new(file))?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Check the table invariants, rejecting malformed input up front
    /// rather than letting a division fault surface mid-pipeline.
    pub fn validate(&self) -> Result<()> {
        if self.batting.is_empty() {
            return Err(StatsError::EmptyTable { table: "batting" });
        }
        if self.bowling.is_empty() {
            return Err(StatsError::EmptyTable { table: "bowling" });
        }
        for record in &self.batting {
            if record.matches == 0 {
                return Err(StatsError::ZeroMatches {
                    player: record.player.clone(),
                });
            }
        }
        for record in &self.bowling {
            if record.matches == 0 {
                return Err(StatsError::ZeroMatches {
                    player: record.player.clone(),
                });
            }
        }
        Ok(())
    }
}

fn batting(
    player: &str,
    team: Team,
    runs: u32,
    matches: u32,
    average: f64,
    strike_rate: f64,
) -> BattingRecord {
    BattingRecord {
        player: player.to_string(),
        team,
        runs,
        matches,
        average,
        strike_rate,
    }
}

fn bowling(
    player: &str,
    team: Team,
    wickets: u32,
    matches: u32,
    economy: f64,
    average: f64,
) -> BowlingRecord {
    BowlingRecord {
        player: player.to_string(),
        team,
        wickets,
        matches,
        economy,
        average,
    }
}
