//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use types::{PlayerId, Position, Season, Week};

/// Where the player pool comes from; shared by every subcommand.
#[derive(Debug, Clone, Default, Args)]
pub struct SourceArgs {
    /// Read players (and optional schedule) from a JSON file instead of ESPN.
    #[clap(long, global = true)]
    pub file: Option<PathBuf>,

    /// Season year (or set `ESPN_SEASON`).
    #[clap(long, short, global = true)]
    pub season: Option<Season>,

    /// Current scoring period; earlier games no longer count as remaining
    /// (or set `ESPN_CURRENT_WEEK`).
    #[clap(long, short, global = true)]
    pub week: Option<Week>,

    /// Keep kickers and team defenses in the pool (left out by default).
    #[clap(long = "include-k-dst", global = true)]
    pub include_k_dst: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rank players by rest-of-season value, with tiers.
    Rankings {
        /// Only show one position: QB, RB, WR, TE, K, D/ST or FLEX
        /// (K and D/ST need `--include-k-dst`).
        #[clap(short = 'p', long = "position")]
        position: Option<Position>,

        /// Show at most this many players.
        #[clap(long)]
        limit: Option<usize>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// List the normalized player pool.
    Players {
        /// Only show one position: QB, RB, WR, TE, K, D/ST or FLEX
        /// (K and D/ST need `--include-k-dst`).
        #[clap(short = 'p', long = "position")]
        position: Option<Position>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Compare two sets of players with the ROS model.
    ///
    /// Ids may be space-separated or repeated: `-a 1 2 -b 3`.
    Trade {
        /// Player ids on Team A's side.
        #[clap(short = 'a', long = "team-a", required = true, num_args = 1..)]
        team_a: Vec<PlayerId>,

        /// Player ids on Team B's side.
        #[clap(short = 'b', long = "team-b", required = true, num_args = 1..)]
        team_b: Vec<PlayerId>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(
    name = "ff-trade-wizard",
    about = "Rest-of-season fantasy football rankings and trade verdicts"
)]
pub struct FfTradeWizard {
    #[clap(flatten)]
    pub source: SourceArgs,

    #[clap(subcommand)]
    pub command: Commands,
}
