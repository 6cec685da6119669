use serde_json::Value;

use crate::core::values::{lenient_f64, lenient_i64};
use crate::espn::types::{StatSource, StatSplit};


/// Select every stat block on a player matching `source` and `split`.
/// ESPN keys: `statSourceId` (0 = actual, 1 = projected) and
/// `statSplitTypeId` (0 = season total, 1 = weekly).
pub fn select_stat_blocks(player: &Value, source: StatSource, split: StatSplit) -> Vec<&Value> {
    let Some(stats) = player.get("stats").and_then(|v| v.as_array()) else {
        return Vec::new();
    };
    stats
        .iter()
        .filter(|s| {
            let src = s.get("statSourceId").and_then(lenient_i64);
            let spl = s.get("statSplitTypeId").and_then(lenient_i64);
            src == Some(source.id() as i64) && spl == Some(split.id() as i64)
        })
        .collect()
}

fn applied_total(block: &Value) -> Option<f64> {
    block.get("appliedTotal").and_then(lenient_f64)
}

fn block_key(block: &Value, key: &str) -> i64 {
    block.get(key).and_then(lenient_i64).unwrap_or(0)
}

/// Season-to-date fantasy points from the most recent actual season block.
pub fn season_total_points(player: &Value) -> Option<f64> {
    select_stat_blocks(player, StatSource::Actual, StatSplit::Season)
        .into_iter()
        .filter_map(|b| applied_total(b).map(|pts| (block_key(b, "seasonId"), pts)))
        .max_by_key(|(season, _)| *season)
        .map(|(_, pts)| pts)
}

/// Number of weeks with an actual scored line, or `None` when the record has
/// no weekly actuals at all.
pub fn weekly_games_played(player: &Value) -> Option<u32> {
    let played = select_stat_blocks(player, StatSource::Actual, StatSplit::Weekly)
        .into_iter()
        .filter(|b| block_key(b, "scoringPeriodId") > 0 && applied_total(b).is_some())
        .count();
    (played > 0).then_some(played as u32)
}

/// Projected points for the latest scoring period ESPN projected.
pub fn latest_weekly_projection(player: &Value) -> Option<f64> {
    select_stat_blocks(player, StatSource::Projected, StatSplit::Weekly)
        .into_iter()
        .filter_map(|b| applied_total(b).map(|pts| (block_key(b, "scoringPeriodId"), pts)))
        .max_by_key(|(period, _)| *period)
        .map(|(_, pts)| pts)
}
