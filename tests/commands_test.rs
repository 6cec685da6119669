//! Integration tests for command handlers and their text output

use ff_trade_wizard::{
    commands::{
        common::CommandContext, players::render_players, rankings::render_rankings,
        trade::render_trade,
    },
    FantasyEngine, FileSource, PoolStatus, Position, TradeRequest,
};
use serde_json::json;
use std::io::Write;
use tempfile::NamedTempFile;

fn pool_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    let body = json!({
        "players": [
            {"id": "101", "name": "Josh Allen", "position": "QB", "team": "BUF",
             "seasonPoints": 200, "gamesPlayed": 8, "usageRate": 1.0, "percentOwned": 100},
            {"id": "201", "name": "Bijan Robinson", "position": "RB", "team": "ATL",
             "seasonPoints": 160, "gamesPlayed": 8, "usageRate": 0.8, "percentOwned": 99},
            {"id": "301", "name": "Amon-Ra St. Brown", "position": "WR", "team": "DET",
             "seasonPoints": 144, "gamesPlayed": 8, "usageRate": 0.6, "percentOwned": 99}
        ],
        "schedule": [
            {"team": "BUF", "remainingGames": 9, "sos": 1.0, "nextOpponent": "@ MIA"},
            {"team": "ATL", "remainingGames": 9, "sos": 0.9},
            {"team": "DET", "remainingGames": 8, "sos": 1.1}
        ]
    });
    write!(file, "{}", body).unwrap();
    file
}

async fn context() -> (CommandContext, NamedTempFile) {
    let file = pool_file();
    let ctx =
        CommandContext::refreshed(FantasyEngine::with_defaults(), &FileSource::new(file.path()))
            .await;
    (ctx, file)
}

#[tokio::test]
async fn test_rankings_text() {
    let (ctx, _file) = context().await;
    assert_eq!(ctx.outcome.status, PoolStatus::Fresh);

    let text = render_rankings(&ctx.engine.rank_players(None), None);
    let lines: Vec<&str> = text.lines().collect();
    assert!(lines[0].starts_with("ROS rankings (ALL, 3 players, fresh)"));
    assert!(lines[2].contains("Josh Allen"));
    assert!(lines[2].contains("@ MIA (SOS 1.00)"));
    assert!(lines[2].contains("S"));
    assert_eq!(lines.len(), 5);
}

#[tokio::test]
async fn test_rankings_json_shape() {
    let (ctx, _file) = context().await;
    let json = serde_json::to_value(ctx.engine.rank_players(Some(Position::FLEX))).unwrap();

    assert_eq!(json["status"], "fresh");
    let players = json["players"].as_array().unwrap();
    assert_eq!(players.len(), 2);
    assert_eq!(players[0]["rank"], 1);
    assert_eq!(players[0]["player"]["id"], "201");
    assert!(players[0]["tier"].is_string());
}

#[tokio::test]
async fn test_players_text() {
    let (ctx, _file) = context().await;
    let players = ctx.engine.list_player_pool(Some(Position::WR));
    let text = render_players(ctx.engine.status(), &players, Some(Position::WR));

    assert!(text.starts_with("Player pool (WR, 1 players, fresh)"));
    assert!(text.contains("Amon-Ra St. Brown"));
}

#[tokio::test]
async fn test_trade_text() {
    let (ctx, _file) = context().await;
    let result = ctx
        .engine
        .evaluate_trade(&TradeRequest::new(["201"], ["301"]))
        .unwrap();
    let text = render_trade(&result);

    assert!(text.contains("Team A"));
    assert!(text.contains("Bijan Robinson"));
    assert!(text.contains("Verdict: Big Win for Team A"));
}

#[tokio::test]
async fn test_missing_file_reports_no_data() {
    let dir = tempfile::tempdir().unwrap();
    let ctx = CommandContext::refreshed(
        FantasyEngine::with_defaults(),
        &FileSource::new(dir.path().join("missing.json")),
    )
    .await;

    assert_eq!(ctx.outcome.status, PoolStatus::NoData);
    let text = render_rankings(&ctx.engine.rank_players(None), None);
    assert_eq!(text, "No rankings: no player data available.\n");
}
