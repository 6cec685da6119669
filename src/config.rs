//! Engine and upstream configuration.
//!
//! Everything that used to be a magic number in the scoring and trade paths
//! lives here so it can be tuned without touching the algorithms:
//! - `TierCutoffs`: pool quantiles for the S/A/B/C tiers
//! - `VerdictThresholds`: relative trade-delta boundaries
//! - `PoolPolicy`: which normalized players make it into the pool
//! - `FetchSettings`: ESPN request parameters, read from the environment

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::{
    cli::types::{Position, Season, Week},
    error::{EngineError, Result},
};

pub const SEASON_ENV_VAR: &str = "ESPN_SEASON";
pub const MAX_PLAYERS_ENV_VAR: &str = "ESPN_MAX_PLAYERS";
pub const MIN_PERCENT_OWNED_ENV_VAR: &str = "ESPN_MIN_PERCENT_OWNED";
pub const CURRENT_WEEK_ENV_VAR: &str = "ESPN_CURRENT_WEEK";
pub const ESPN_S2_ENV_VAR: &str = "ESPN_S2";
pub const SWID_ENV_VAR: &str = "ESPN_SWID";

/// Cumulative pool fractions that close each tier, best first.
///
/// With the defaults the top 10% of the pool is S, the next 15% A, and so on;
/// whatever is left after `c` is D.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TierCutoffs {
    pub s: f64,
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl Default for TierCutoffs {
    fn default() -> Self {
        Self {
            s: 0.10,
            a: 0.25,
            b: 0.50,
            c: 0.75,
        }
    }
}

impl TierCutoffs {
    pub fn as_array(&self) -> [f64; 4] {
        [self.s, self.a, self.b, self.c]
    }

    /// Cutoffs must be strictly increasing fractions in (0, 1].
    pub fn validate(&self) -> Result<()> {
        let cutoffs = self.as_array();
        let in_range = cutoffs.iter().all(|c| *c > 0.0 && *c <= 1.0);
        let increasing = cutoffs.windows(2).all(|w| w[0] < w[1]);
        if in_range && increasing {
            Ok(())
        } else {
            Err(EngineError::InvalidConfig {
                name: "tier cutoffs".to_string(),
                value: format!("{:?}", cutoffs),
            })
        }
    }
}

/// Relative delta boundaries for trade verdicts.
///
/// `relative = |delta_a| / max(team_a_total, team_b_total, epsilon)`:
/// below `fair_below` is Fair, above `big_win_above` is a Big Win, anything in
/// between is a Slight Edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VerdictThresholds {
    pub fair_below: f64,
    pub big_win_above: f64,
    pub epsilon: f64,
}

impl Default for VerdictThresholds {
    fn default() -> Self {
        Self {
            fair_below: 0.05,
            big_win_above: 0.20,
            epsilon: 1e-9,
        }
    }
}

impl VerdictThresholds {
    pub fn validate(&self) -> Result<()> {
        let ok = self.epsilon > 0.0
            && self.fair_below >= 0.0
            && self.fair_below <= self.big_win_above;
        if ok {
            Ok(())
        } else {
            Err(EngineError::InvalidConfig {
                name: "verdict thresholds".to_string(),
                value: format!(
                    "fair_below={} big_win_above={} epsilon={}",
                    self.fair_below, self.big_win_above, self.epsilon
                ),
            })
        }
    }
}

/// Filters applied to successfully normalized players before they enter the pool.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PoolPolicy {
    pub excluded_positions: Vec<Position>,
    pub min_percent_owned: f64,
}

impl Default for PoolPolicy {
    fn default() -> Self {
        Self {
            excluded_positions: vec![Position::K, Position::DEF],
            min_percent_owned: 0.0,
        }
    }
}

impl PoolPolicy {
    pub fn admits(&self, position: Position, percent_owned: f64) -> bool {
        !self.excluded_positions.contains(&position) && percent_owned >= self.min_percent_owned
    }
}

/// Full set of tunables the engine needs for one refresh/ranking/trade cycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub tiers: TierCutoffs,
    pub verdict: VerdictThresholds,
    pub pool: PoolPolicy,
    /// First scoring period that still counts as "remaining" in schedule data.
    pub current_week: Week,
}

impl EngineConfig {
    pub fn validate(&self) -> Result<()> {
        self.tiers.validate()?;
        self.verdict.validate()
    }
}

/// ESPN request parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchSettings {
    pub season: Season,
    pub max_players: u32,
    pub min_percent_owned: f64,
    pub current_week: Week,
    pub espn_s2: Option<String>,
    pub swid: Option<String>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            season: Season::default(),
            max_players: 400,
            min_percent_owned: 20.0,
            current_week: Week::default(),
            espn_s2: None,
            swid: None,
        }
    }
}

impl FetchSettings {
    /// Read settings from the process environment, falling back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Read settings through an arbitrary lookup function.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Ok(Self {
            season: parse_or(&lookup, SEASON_ENV_VAR, defaults.season)?,
            max_players: parse_or(&lookup, MAX_PLAYERS_ENV_VAR, defaults.max_players)?,
            min_percent_owned: parse_or(
                &lookup,
                MIN_PERCENT_OWNED_ENV_VAR,
                defaults.min_percent_owned,
            )?,
            current_week: parse_or(&lookup, CURRENT_WEEK_ENV_VAR, defaults.current_week)?,
            espn_s2: non_empty(lookup(ESPN_S2_ENV_VAR)),
            swid: non_empty(lookup(SWID_ENV_VAR)),
        })
    }
}

fn parse_or<T, F>(lookup: &F, name: &str, default: T) -> Result<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    match non_empty(lookup(name)) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map_err(|_| EngineError::InvalidConfig {
                name: name.to_string(),
                value: raw,
            }),
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
