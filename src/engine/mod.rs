//! The fantasy analytics engine.
//!
//! [`FantasyEngine`] owns the tunables and a handle to the shared
//! [`PoolCache`]. It exposes the three read operations (`rank_players`,
//! `list_player_pool`, `evaluate_trade`) and `refresh`, which pulls a feed from
//! a [`PlayerSource`] and either publishes a new pool or falls back to the
//! last good one.

pub mod normalize;
pub mod player;
pub mod pool;
pub mod schedule;
pub mod scoring;
pub mod tier;
pub mod trade;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt, sync::Arc};
use tracing::{info, warn};

use crate::{
    cli::types::Position,
    config::EngineConfig,
    core::cache::{PoolCache, PoolSnapshot},
    error::{EngineError, Result},
    source::{PlayerSource, RawFeed},
};

use normalize::normalize_feed;
use player::Player;
use pool::PlayerPool;
use scoring::ScoreBreakdown;
use tier::Tier;
use trade::{TradeRequest, TradeResult};

/// Where the pool behind a response came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PoolStatus {
    /// The latest refresh succeeded.
    Fresh,
    /// The latest refresh failed; serving the last good pool.
    Fallback,
    /// No refresh has ever succeeded.
    NoData,
}

impl PoolStatus {
    fn of(snapshot: Option<&PoolSnapshot>) -> Self {
        match snapshot {
            None => PoolStatus::NoData,
            Some(s) if s.stale => PoolStatus::Fallback,
            Some(_) => PoolStatus::Fresh,
        }
    }
}

impl fmt::Display for PoolStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            PoolStatus::Fresh => "fresh",
            PoolStatus::Fallback => "fallback",
            PoolStatus::NoData => "no data",
        };
        write!(f, "{}", s)
    }
}

/// Summary of one `refresh` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RefreshOutcome {
    pub status: PoolStatus,
    pub accepted: usize,
    pub rejected: usize,
    pub filtered: usize,
    pub duplicates: usize,
    /// Why the refresh fell back, when it did.
    pub error: Option<String>,
}

/// One ranked player.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RosResult {
    /// 1-based position in the sorted output.
    pub rank: usize,
    pub player: Player,
    pub ros_score: f64,
    pub tier: Tier,
    pub season_points: f64,
    pub week_projection: f64,
    pub matchup: String,
    pub breakdown: ScoreBreakdown,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rankings {
    pub status: PoolStatus,
    pub players: Vec<RosResult>,
}

#[derive(Debug, Clone)]
pub struct FantasyEngine {
    config: EngineConfig,
    cache: Arc<PoolCache>,
}

impl FantasyEngine {
    pub fn new(config: EngineConfig, cache: Arc<PoolCache>) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, cache })
    }

    /// Default tunables and a private, empty cache.
    pub fn with_defaults() -> Self {
        Self {
            config: EngineConfig::default(),
            cache: Arc::new(PoolCache::new()),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn cache(&self) -> &Arc<PoolCache> {
        &self.cache
    }

    pub fn status(&self) -> PoolStatus {
        PoolStatus::of(self.cache.snapshot().as_deref())
    }

    /// Fetch from `source` and apply the result.
    pub async fn refresh<S>(&self, source: &S) -> RefreshOutcome
    where
        S: PlayerSource + ?Sized,
    {
        info!("refreshing player pool from {}", source.describe());
        self.ingest(source.fetch().await)
    }

    /// Apply the outcome of a fetch: publish a new pool on success, mark the
    /// cached pool stale on failure. A feed that yields no usable players
    /// counts as a failure.
    pub fn ingest(&self, fetched: Result<RawFeed>) -> RefreshOutcome {
        let feed = match fetched {
            Ok(feed) => feed,
            Err(e) => return self.fall_back(e, 0, 0, 0, 0),
        };

        let report = normalize_feed(&feed, &self.config);
        if report.players.is_empty() {
            let reason = EngineError::upstream(format!(
                "feed produced no usable players ({} records)",
                feed.players.len()
            ));
            return self.fall_back(
                reason,
                0,
                report.rejected.len(),
                report.filtered,
                report.duplicates,
            );
        }

        let accepted = report.players.len();
        let snapshot = self.cache.replace(PlayerPool::new(report.players));
        info!(
            generation = snapshot.generation,
            players = accepted,
            "published player pool"
        );
        RefreshOutcome {
            status: PoolStatus::Fresh,
            accepted,
            rejected: report.rejected.len(),
            filtered: report.filtered,
            duplicates: report.duplicates,
            error: None,
        }
    }

    fn fall_back(
        &self,
        error: EngineError,
        accepted: usize,
        rejected: usize,
        filtered: usize,
        duplicates: usize,
    ) -> RefreshOutcome {
        let status = match self.cache.mark_stale() {
            Some(snapshot) => {
                warn!(
                    generation = snapshot.generation,
                    age_secs = snapshot.age_secs(),
                    "upstream unavailable, serving cached pool: {}", error
                );
                PoolStatus::Fallback
            }
            None => {
                warn!("upstream unavailable and no cached pool: {}", error);
                PoolStatus::NoData
            }
        };
        RefreshOutcome {
            status,
            accepted,
            rejected,
            filtered,
            duplicates,
            error: Some(error.to_string()),
        }
    }

    /// Score every player, tier them against the whole pool, then keep the
    /// ones matching `position`, best first.
    pub fn rank_players(&self, position: Option<Position>) -> Rankings {
        let snapshot = self.cache.snapshot();
        let status = PoolStatus::of(snapshot.as_deref());
        let Some(snapshot) = snapshot else {
            return Rankings {
                status,
                players: Vec::new(),
            };
        };

        let players = rank_pool(&snapshot.pool, position, &self.config);
        Rankings { status, players }
    }

    /// Pool members matching `position`, in pool order. Empty when there has
    /// never been a pool.
    pub fn list_player_pool(&self, position: Option<Position>) -> Vec<Player> {
        self.cache
            .snapshot()
            .map(|s| s.pool.filter(position).cloned().collect())
            .unwrap_or_default()
    }

    pub fn evaluate_trade(&self, request: &TradeRequest) -> Result<TradeResult> {
        let snapshot = self.cache.snapshot();
        let empty = PlayerPool::default();
        let pool = snapshot.as_ref().map_or(&empty, |s| s.pool.as_ref());
        trade::evaluate_request(pool, request, &self.config.verdict)
    }
}

fn rank_pool(pool: &PlayerPool, position: Option<Position>, config: &EngineConfig) -> Vec<RosResult> {
    let breakdowns: Vec<ScoreBreakdown> = pool.players().par_iter().map(scoring::breakdown).collect();
    let scores: Vec<f64> = breakdowns.iter().map(|b| b.ros_score).collect();
    let tiers = tier::classify_pool(&scores, &config.tiers);

    let mut ranked: Vec<RosResult> = pool
        .players()
        .iter()
        .zip(breakdowns)
        .zip(tiers)
        .filter(|((p, _), _)| position.map_or(true, |pos| pos.matches(p.position)))
        .map(|((p, b), tier)| RosResult {
            rank: 0,
            player: p.clone(),
            ros_score: b.ros_score,
            tier,
            season_points: p.season_points,
            week_projection: p.weekly_projection,
            matchup: p.matchup_label(),
            breakdown: b,
        })
        .collect();

    ranked.sort_by(compare_ranked);
    for (i, r) in ranked.iter_mut().enumerate() {
        r.rank = i + 1;
    }
    ranked
}

/// Highest score first; ties by name, then id, so output order is stable.
fn compare_ranked(a: &RosResult, b: &RosResult) -> Ordering {
    b.ros_score
        .total_cmp(&a.ros_score)
        .then_with(|| a.player.name.cmp(&b.player.name))
        .then_with(|| a.player.id.cmp(&b.player.id))
}
