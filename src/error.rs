//! Error types for the FF Trade Wizard engine

use thiserror::Error;

use crate::cli::types::PlayerId;


pub type Result<T> = std::result::Result<T, EngineError>;

/// Which side of a proposed trade an error or verdict refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum TradeSide {
    #[serde(rename = "team_a")]
    TeamA,
    #[serde(rename = "team_b")]
    TeamB,
}

impl std::fmt::Display for TradeSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TradeSide::TeamA => write!(f, "Team A"),
            TradeSide::TeamB => write!(f, "Team B"),
        }
    }
}

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid header value: {0}")]
    InvalidHeader(#[from] reqwest::header::InvalidHeaderValue),

    #[error("Failed to parse number: {0}")]
    InvalidNumber(#[from] std::num::ParseIntError),

    /// A raw upstream record could not be turned into a `Player`.
    #[error("Player record rejected: {field} {reason}")]
    Normalization { field: String, reason: String },

    /// A trade referenced IDs that are not in the current player pool.
    #[error("Unknown player id(s): {}", join_ids(.ids))]
    UnknownPlayers { ids: Vec<PlayerId> },

    #[error("{side} has no players in the proposed trade")]
    EmptyRoster { side: TradeSide },

    /// Raised by a `PlayerSource` when fresh data could not be obtained.
    #[error("Upstream player data unavailable: {reason}")]
    UpstreamUnavailable { reason: String },

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid value for {name}: {value}")]
    InvalidConfig { name: String, value: String },
}

impl EngineError {
    pub fn normalization(field: &str, reason: impl Into<String>) -> Self {
        EngineError::Normalization {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn upstream(reason: impl std::fmt::Display) -> Self {
        EngineError::UpstreamUnavailable {
            reason: reason.to_string(),
        }
    }

    /// True for errors caused by a bad trade request rather than the environment.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            EngineError::UnknownPlayers { .. }
                | EngineError::EmptyRoster { .. }
                | EngineError::InvalidPosition { .. }
        )
    }
}

fn join_ids(ids: &[PlayerId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}
