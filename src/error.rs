//! Error types for the IPL statistics CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, StatsError>;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV serialization failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Chart rendering failed: {message}")]
    Chart { message: String },

    #[error("Record for {player} has zero matches played")]
    ZeroMatches { player: String },

    #[error("The {table} table is empty")]
    EmptyTable { table: &'static str },

    #[error("The {table} table needs at least {needed} rows")]
    InsufficientRows { table: &'static str, needed: usize },

    #[error("Unknown team code: {code}")]
    UnknownTeam { code: String },

    #[error("Failed to parse season year: {0}")]
    InvalidSeason(#[from] std::num::ParseIntError),
}

impl StatsError {
    /// Wrap a chart backend error.
    ///
    /// The plotters error types are generic over the backend, so the chart
    /// sink carries them as rendered messages instead of nested type
    /// parameters.
    pub fn chart<E: std::fmt::Display>(err: E) -> Self {
        StatsError::Chart {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests;
