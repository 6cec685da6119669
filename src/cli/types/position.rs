//! Fantasy football position types and utilities.

use crate::error::EngineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fantasy football player positions.
///
/// `FLEX` never appears on a normalized player; it only exists as a filter
/// that matches RB, WR and TE.
///
/// # Examples
///
/// ```rust
/// use ff_trade_wizard::Position;
///
/// let flex: Position = "flex".parse().unwrap();
/// assert!(flex.matches(Position::WR));
/// assert!(!flex.matches(Position::QB));
/// assert_eq!(Position::DEF.to_string(), "D/ST");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    QB,
    RB,
    WR,
    TE,
    K,
    #[serde(rename = "D/ST")]
    DEF,
    FLEX,
}

impl Position {
    /// Positions a FLEX slot accepts.
    pub fn get_eligible_positions(&self) -> Vec<Position> {
        match self {
            Position::FLEX => vec![Position::RB, Position::WR, Position::TE],
            other => vec![*other],
        }
    }

    /// Whether a player at `player_position` passes this position used as a filter.
    pub fn matches(&self, player_position: Position) -> bool {
        self.get_eligible_positions().contains(&player_position)
    }

    /// Convert an ESPN `defaultPositionId` to a Position.
    pub fn from_espn_id(id: i64) -> Result<Self, EngineError> {
        match id {
            0 | 1 => Ok(Position::QB), // ESPN uses both 0 and 1 for QB
            2 => Ok(Position::RB),
            3 => Ok(Position::WR),
            4 | 6 => Ok(Position::TE),
            5 | 17 => Ok(Position::K),
            16 => Ok(Position::DEF),
            _ => Err(EngineError::InvalidPosition {
                position: id.to_string(),
            }),
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Position::QB => "QB",
            Position::RB => "RB",
            Position::WR => "WR",
            Position::TE => "TE",
            Position::K => "K",
            Position::DEF => "D/ST",
            Position::FLEX => "FLEX",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Position {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "QB" => Ok(Position::QB),
            "RB" => Ok(Position::RB),
            "WR" => Ok(Position::WR),
            "TE" => Ok(Position::TE),
            "K" | "PK" => Ok(Position::K),
            "DEF" | "D/ST" | "DST" => Ok(Position::DEF),
            "FLEX" => Ok(Position::FLEX),
            other => Err(EngineError::InvalidPosition {
                position: other.to_string(),
            }),
        }
    }
}
