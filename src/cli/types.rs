//! Type-safe wrappers and enums for IPL season data.

use crate::error::{Result, StatsError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// IPL franchise codes.
///
/// The closed set of team codes a record may carry. Codes serialize as
/// their short form (e.g. `"RCB"`) in both CSV and JSON.
///
/// # Examples
///
/// ```rust
/// use ipl_stats::Team;
///
/// let team: Team = "RCB".parse().unwrap();
/// assert_eq!(team, Team::RCB);
/// assert_eq!(team.to_string(), "RCB");
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Team {
    /// Chennai Super Kings
    CSK,
    /// Delhi Capitals
    DC,
    /// Gujarat Titans
    GT,
    /// Kolkata Knight Riders
    KKR,
    /// Lucknow Super Giants
    LSG,
    /// Mumbai Indians
    MI,
    /// Punjab Kings
    PBKS,
    /// Royal Challengers Bengaluru
    RCB,
    /// Rajasthan Royals
    RR,
    /// Sunrisers Hyderabad
    SRH,
}

impl Team {
    /// Get the short team code.
    pub fn as_str(&self) -> &'static str {
        match self {
            Team::CSK => "CSK",
            Team::DC => "DC",
            Team::GT => "GT",
            Team::KKR => "KKR",
            Team::LSG => "LSG",
            Team::MI => "MI",
            Team::PBKS => "PBKS",
            Team::RCB => "RCB",
            Team::RR => "RR",
            Team::SRH => "SRH",
        }
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Team {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "CSK" => Ok(Team::CSK),
            "DC" => Ok(Team::DC),
            "GT" => Ok(Team::GT),
            "KKR" => Ok(Team::KKR),
            "LSG" => Ok(Team::LSG),
            "MI" => Ok(Team::MI),
            "PBKS" => Ok(Team::PBKS),
            "RCB" => Ok(Team::RCB),
            "RR" => Ok(Team::RR),
            "SRH" => Ok(Team::SRH),
            _ => Err(StatsError::UnknownTeam {
                code: s.to_string(),
            }),
        }
    }
}

/// Type-safe wrapper for season years
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2025)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}
