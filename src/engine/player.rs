//! Canonical player record produced by the normalizer.

use serde::{Deserialize, Serialize};

use crate::cli::types::{PlayerId, Position};
use crate::espn::types::FREE_AGENT;

/// Neutral strength-of-schedule index: an average slate of opponents.
pub const NEUTRAL_MATCHUP_DIFFICULTY: f64 = 1.0;

/// A normalized player.
///
/// Every analytic field has already been defaulted, coerced and clamped by
/// the normalizer, so downstream code can read them without checks. A
/// `Player` is never mutated after normalization; a refresh builds new ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub team: String,
    pub position: Position,
    /// Fantasy points accumulated this season.
    pub season_points: f64,
    /// Games played to date; 0 means the season-points rate is unknown.
    pub games_played: u32,
    /// Projected points for the next scoring period.
    pub weekly_projection: f64,
    pub percent_owned: f64,
    pub percent_started: f64,
    pub remaining_games: u32,
    /// Strength-of-schedule index, 1.0 = average, higher = harder.
    pub matchup_difficulty: f64,
    /// Share of team opportunities, 0..=1.
    pub usage_rate: f64,
    pub next_opponent: Option<String>,
}

impl Player {
    /// A player with identity only and every analytic field at its default.
    pub fn new(id: impl Into<PlayerId>, name: impl Into<String>, position: Position) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            team: FREE_AGENT.to_string(),
            position,
            season_points: 0.0,
            games_played: 0,
            weekly_projection: 0.0,
            percent_owned: 0.0,
            percent_started: 0.0,
            remaining_games: 0,
            matchup_difficulty: NEUTRAL_MATCHUP_DIFFICULTY,
            usage_rate: 0.0,
            next_opponent: None,
        }
    }

    /// Display string for the upcoming schedule, e.g. `@ DAL (SOS 1.10)`.
    pub fn matchup_label(&self) -> String {
        match &self.next_opponent {
            Some(opp) => format!("{} (SOS {:.2})", opp, self.matchup_difficulty),
            None if self.remaining_games == 0 => "Season over".to_string(),
            None => format!("SOS {:.2}", self.matchup_difficulty),
        }
    }
}
