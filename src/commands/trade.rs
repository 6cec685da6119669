//! `trade`: verdict for a proposed trade.

use crate::{
    cli::types::PlayerId,
    engine::trade::{TradeLine, TradeRequest, TradeResult},
    Result,
};

use super::common::CommandContext;

pub fn handle_trade(
    ctx: &CommandContext,
    team_a: Vec<PlayerId>,
    team_b: Vec<PlayerId>,
    as_json: bool,
) -> Result<()> {
    let request = TradeRequest {
        team_a_ids: team_a,
        team_b_ids: team_b,
    };
    let result = ctx.engine.evaluate_trade(&request)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        print!("{}", render_trade(&result));
    }
    Ok(())
}

fn render_side(out: &mut String, label: &str, lines: &[TradeLine], total: f64) {
    out.push_str(&format!("{} ({:.2})\n", label, total));
    for l in lines {
        out.push_str(&format!(
            "  {:>10}  {:<26} {:<5} {:<4} {:>8.2}\n",
            l.id.to_string(),
            l.name,
            l.position.to_string(),
            l.team,
            l.ros_score
        ));
    }
}

pub fn render_trade(result: &TradeResult) -> String {
    let mut out = String::new();
    render_side(&mut out, "Team A", &result.team_a, result.team_a_total);
    render_side(&mut out, "Team B", &result.team_b, result.team_b_total);
    out.push_str(&format!(
        "Delta (A - B): {:+.2} ({:.1}%)\nVerdict: {}\n",
        result.delta_a,
        result.relative_delta * 100.0,
        result.verdict
    ));
    out
}
