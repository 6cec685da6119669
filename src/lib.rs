//! FF Trade Wizard Library
//!
//! Rest-of-season (ROS) analytics for fantasy football: turns loosely typed
//! upstream player and schedule records into a ranked, tiered player pool and
//! judges multi-player trades against the same scoring model.
//!
//! ## Features
//!
//! - **Defensive normalization**: tolerates renamed fields, numeric strings and partial schedules
//! - **ROS scoring**: per-game rate × remaining games, adjusted for usage and matchup difficulty
//! - **Pool-relative tiers**: S/A/B/C/D by quantile of the scored pool
//! - **Trade verdicts**: Fair / Slight Edge / Big Win by relative difference
//! - **Fallback pool**: the last good pool keeps serving when ESPN is down
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use ff_trade_wizard::{config::FetchSettings, espn::EspnSource, FantasyEngine, Position};
//!
//! # async fn example() -> ff_trade_wizard::Result<()> {
//! let engine = FantasyEngine::with_defaults();
//! let source = EspnSource::new(FetchSettings::from_env()?)?;
//! engine.refresh(&source).await;
//!
//! for r in engine.rank_players(Some(Position::WR)).players.iter().take(10) {
//!     println!("{:>3}. {} {:.1} [{}]", r.rank, r.player.name, r.ros_score, r.tier);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! ```bash
//! export ESPN_SEASON=2025
//! export ESPN_MAX_PLAYERS=400
//! export ESPN_MIN_PERCENT_OWNED=20
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod espn;
pub mod source;

// Re-export commonly used types
pub use cli::types::{PlayerId, Position, Season, Week};
pub use config::{EngineConfig, FetchSettings};
pub use engine::{
    player::Player,
    tier::Tier,
    trade::{TradeRequest, TradeResult, Verdict},
    FantasyEngine, PoolStatus, Rankings, RosResult,
};
pub use error::{EngineError, Result, TradeSide};
pub use source::{FileSource, PlayerSource, RawFeed};
