//! `rankings`: ROS-ranked, tiered players.

use crate::{
    cli::types::Position,
    engine::{PoolStatus, Rankings},
    Result,
};

use super::{common::CommandContext, position_label};

pub fn handle_rankings(
    ctx: &CommandContext,
    position: Option<Position>,
    limit: Option<usize>,
    as_json: bool,
) -> Result<()> {
    let mut rankings = ctx.engine.rank_players(position);
    if let Some(limit) = limit {
        rankings.players.truncate(limit);
    }

    if as_json {
        println!("{}", serde_json::to_string_pretty(&rankings)?);
    } else {
        print!("{}", render_rankings(&rankings, position));
    }
    Ok(())
}

/// Text table, one line per player.
pub fn render_rankings(rankings: &Rankings, position: Option<Position>) -> String {
    if rankings.status == PoolStatus::NoData {
        return "No rankings: no player data available.\n".to_string();
    }

    let mut out = format!(
        "ROS rankings ({}, {} players, {})\n",
        position_label(position),
        rankings.players.len(),
        rankings.status
    );
    out.push_str(&format!(
        "{:>4}  {:<4} {:<26} {:<5} {:<4} {:>8} {:>7} {:>6}  {}\n",
        "#", "Tier", "Player", "Pos", "Team", "ROS", "Season", "Proj", "Matchup"
    ));
    for r in &rankings.players {
        out.push_str(&format!(
            "{:>4}  {:<4} {:<26} {:<5} {:<4} {:>8.2} {:>7.1} {:>6.1}  {}\n",
            r.rank,
            r.tier.to_string(),
            r.player.name,
            r.player.position.to_string(),
            r.player.team,
            r.ros_score,
            r.season_points,
            r.week_projection,
            r.matchup
        ));
    }
    out
}
