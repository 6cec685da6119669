//! Trade evaluation.
//!
//! Both sides are scored with the same ROS function used for rankings, summed,
//! and compared by relative difference:
//!
//! ```text
//! delta_a  = team_a_total - team_b_total
//! relative = |delta_a| / max(team_a_total, team_b_total, epsilon)
//! ```
//!
//! The verdict favors the side with the larger total. Swapping the sides
//! negates `delta_a` and flips who is favored, nothing else.

use serde::{Deserialize, Serialize};
use std::{borrow::Borrow, fmt};

use super::{player::Player, pool::PlayerPool, scoring};
use crate::{
    cli::types::{PlayerId, Position},
    config::VerdictThresholds,
    error::{EngineError, Result, TradeSide},
};

#[cfg(test)]
mod tests;

/// Player ids offered by each side, in the order given.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TradeRequest {
    pub team_a_ids: Vec<PlayerId>,
    pub team_b_ids: Vec<PlayerId>,
}

impl TradeRequest {
    pub fn new<A, B>(team_a_ids: A, team_b_ids: B) -> Self
    where
        A: IntoIterator,
        A::Item: Into<PlayerId>,
        B: IntoIterator,
        B::Item: Into<PlayerId>,
    {
        Self {
            team_a_ids: team_a_ids.into_iter().map(Into::into).collect(),
            team_b_ids: team_b_ids.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Verdict {
    Fair,
    SlightEdge { favors: TradeSide },
    BigWin { favors: TradeSide },
}

impl Verdict {
    pub fn favors(&self) -> Option<TradeSide> {
        match self {
            Verdict::Fair => None,
            Verdict::SlightEdge { favors } | Verdict::BigWin { favors } => Some(*favors),
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Fair => write!(f, "Fair"),
            Verdict::SlightEdge { favors } => write!(f, "Slight Edge for {}", favors),
            Verdict::BigWin { favors } => write!(f, "Big Win for {}", favors),
        }
    }
}

/// One scored player on one side of the trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeLine {
    pub id: PlayerId,
    pub name: String,
    pub team: String,
    pub position: Position,
    pub ros_score: f64,
}

impl TradeLine {
    fn scored(player: &Player) -> Self {
        Self {
            id: player.id.clone(),
            name: player.name.clone(),
            team: player.team.clone(),
            position: player.position,
            ros_score: scoring::score(player),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeResult {
    pub team_a_total: f64,
    pub team_b_total: f64,
    pub delta_a: f64,
    /// `|delta_a|` over the larger total; what the verdict was derived from.
    pub relative_delta: f64,
    pub verdict: Verdict,
    pub team_a: Vec<TradeLine>,
    pub team_b: Vec<TradeLine>,
}

/// Map two side totals to a verdict. Returns the relative delta alongside it.
pub fn classify_verdict(
    team_a_total: f64,
    team_b_total: f64,
    thresholds: &VerdictThresholds,
) -> (f64, Verdict) {
    let delta_a = team_a_total - team_b_total;
    if delta_a == 0.0 || delta_a.is_nan() {
        return (0.0, Verdict::Fair);
    }

    let denominator = team_a_total.max(team_b_total).max(thresholds.epsilon);
    let relative = delta_a.abs() / denominator;
    let favors = if delta_a > 0.0 {
        TradeSide::TeamA
    } else {
        TradeSide::TeamB
    };

    let verdict = if relative < thresholds.fair_below {
        Verdict::Fair
    } else if relative <= thresholds.big_win_above {
        Verdict::SlightEdge { favors }
    } else {
        Verdict::BigWin { favors }
    };
    (relative, verdict)
}

/// Score and compare two already-resolved sides.
pub fn evaluate<P>(team_a: &[P], team_b: &[P], thresholds: &VerdictThresholds) -> Result<TradeResult>
where
    P: Borrow<Player>,
{
    if team_a.is_empty() {
        return Err(EngineError::EmptyRoster {
            side: TradeSide::TeamA,
        });
    }
    if team_b.is_empty() {
        return Err(EngineError::EmptyRoster {
            side: TradeSide::TeamB,
        });
    }

    let lines_a: Vec<TradeLine> = team_a.iter().map(|p| TradeLine::scored(p.borrow())).collect();
    let lines_b: Vec<TradeLine> = team_b.iter().map(|p| TradeLine::scored(p.borrow())).collect();
    let team_a_total: f64 = lines_a.iter().map(|l| l.ros_score).sum();
    let team_b_total: f64 = lines_b.iter().map(|l| l.ros_score).sum();
    let (relative_delta, verdict) = classify_verdict(team_a_total, team_b_total, thresholds);

    Ok(TradeResult {
        team_a_total,
        team_b_total,
        delta_a: team_a_total - team_b_total,
        relative_delta,
        verdict,
        team_a: lines_a,
        team_b: lines_b,
    })
}

/// Validate a request against `pool`, then evaluate it.
///
/// Empty sides are reported first (Team A before Team B); after that every
/// unknown id from both sides is reported at once.
pub fn evaluate_request(
    pool: &PlayerPool,
    request: &TradeRequest,
    thresholds: &VerdictThresholds,
) -> Result<TradeResult> {
    if request.team_a_ids.is_empty() {
        return Err(EngineError::EmptyRoster {
            side: TradeSide::TeamA,
        });
    }
    if request.team_b_ids.is_empty() {
        return Err(EngineError::EmptyRoster {
            side: TradeSide::TeamB,
        });
    }

    let resolved = pool
        .resolve(request.team_a_ids.iter().chain(&request.team_b_ids))
        .map_err(|ids| EngineError::UnknownPlayers { ids })?;
    let (team_a, team_b) = resolved.split_at(request.team_a_ids.len());

    evaluate(team_a, team_b, thresholds)
}
