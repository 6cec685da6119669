//! `players`: the normalized pool as the engine sees it.

use serde::Serialize;

use crate::{
    cli::types::Position,
    engine::{player::Player, PoolStatus},
    Result,
};

use super::{common::CommandContext, position_label};

#[derive(Debug, Serialize)]
struct PlayerListing<'a> {
    status: PoolStatus,
    players: &'a [Player],
}

pub fn handle_players(ctx: &CommandContext, position: Option<Position>, as_json: bool) -> Result<()> {
    let status = ctx.engine.status();
    let players = ctx.engine.list_player_pool(position);

    if as_json {
        let listing = PlayerListing {
            status,
            players: &players,
        };
        println!("{}", serde_json::to_string_pretty(&listing)?);
    } else {
        print!("{}", render_players(status, &players, position));
    }
    Ok(())
}

pub fn render_players(status: PoolStatus, players: &[Player], position: Option<Position>) -> String {
    if status == PoolStatus::NoData {
        return "No players: no player data available.\n".to_string();
    }

    let mut out = format!(
        "Player pool ({}, {} players, {})\n",
        position_label(position),
        players.len(),
        status
    );
    for p in players {
        out.push_str(&format!(
            "{:>10}  {:<26} {:<5} {:<4} {:>7.1} pts {:>3} gp {:>5.1}% owned  {}\n",
            p.id.to_string(),
            p.name,
            p.position.to_string(),
            p.team,
            p.season_points,
            p.games_played,
            p.percent_owned,
            p.matchup_label()
        ));
    }
    out
}
