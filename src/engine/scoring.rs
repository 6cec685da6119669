//! Rest-of-season (ROS) scoring.
//!
//! ```text
//! base_ros       = season_points_rate * remaining_games
//! usage_factor   = 0.5 + 0.5 * usage_rate                 in [0.5, 1.0]
//! matchup_factor = clamp(2.0 - matchup_difficulty, 0.5, 1.5)
//! ros_score      = base_ros * usage_factor * matchup_factor
//! ```
//!
//! `season_points_rate` is points per game played, or the weekly projection
//! when no games have been played yet. Normalization fills in games played
//! from the current week when a feed only reports season points. The score is monotone: non-decreasing
//! in rate, usage and remaining games, non-increasing in matchup difficulty.

use serde::Serialize;

use super::player::{Player, NEUTRAL_MATCHUP_DIFFICULTY};


pub const MIN_USAGE_FACTOR: f64 = 0.5;
pub const MIN_MATCHUP_FACTOR: f64 = 0.5;
pub const MAX_MATCHUP_FACTOR: f64 = 1.5;

/// Every intermediate value of one ROS computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub season_points_rate: f64,
    pub remaining_games: u32,
    pub base_ros: f64,
    pub usage_factor: f64,
    pub matchup_factor: f64,
    pub ros_score: f64,
}

/// Negative, NaN and infinite inputs carry no value.
fn non_negative(x: f64) -> f64 {
    if x.is_finite() && x > 0.0 {
        x
    } else {
        0.0
    }
}

/// Points per game to date, or next week's projection for players without games.
pub fn season_points_rate(player: &Player) -> f64 {
    if player.games_played == 0 {
        non_negative(player.weekly_projection)
    } else {
        non_negative(player.season_points) / player.games_played as f64
    }
}

pub fn usage_factor(usage_rate: f64) -> f64 {
    let usage = if usage_rate.is_nan() {
        0.0
    } else {
        usage_rate.clamp(0.0, 1.0)
    };
    MIN_USAGE_FACTOR + (1.0 - MIN_USAGE_FACTOR) * usage
}

pub fn matchup_factor(matchup_difficulty: f64) -> f64 {
    let difficulty = if matchup_difficulty.is_nan() {
        NEUTRAL_MATCHUP_DIFFICULTY
    } else {
        matchup_difficulty.max(0.0)
    };
    (2.0 - difficulty).clamp(MIN_MATCHUP_FACTOR, MAX_MATCHUP_FACTOR)
}

pub fn breakdown(player: &Player) -> ScoreBreakdown {
    let rate = season_points_rate(player);
    let usage = usage_factor(player.usage_rate);
    let matchup = matchup_factor(player.matchup_difficulty);

    if player.remaining_games == 0 {
        return ScoreBreakdown {
            season_points_rate: rate,
            remaining_games: 0,
            base_ros: 0.0,
            usage_factor: usage,
            matchup_factor: matchup,
            ros_score: 0.0,
        };
    }

    let base_ros = rate * player.remaining_games as f64;
    ScoreBreakdown {
        season_points_rate: rate,
        remaining_games: player.remaining_games,
        base_ros,
        usage_factor: usage,
        matchup_factor: matchup,
        ros_score: base_ros * usage * matchup,
    }
}

/// ROS value of a single player. Pure and deterministic.
pub fn score(player: &Player) -> f64 {
    breakdown(player).ros_score
}
