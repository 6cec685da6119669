//! Team schedule index built from raw schedule records.
//!
//! Accepts the ESPN `proTeamSchedules` shape (`settings.proTeams[]` with
//! `proGamesByScoringPeriod`) as well as flat per-team records such as
//! `{"team": "MIN", "remainingGames": 7, "sos": 1.1}`. Anything it cannot
//! read is skipped with a debug log; a partial schedule simply leaves some
//! teams without an entry.

use serde_json::Value;
use std::collections::HashMap;
use tracing::debug;

use crate::cli::types::Week;
use crate::core::values::{first_present, lenient_f64, lenient_i64, lenient_string, lookup_path};
use crate::espn::types::pro_team_abbrev;

const ABBREV_PATHS: &[&[&str]] = &[&["abbrev"], &["team"], &["teamAbbrev"], &["abbreviation"]];
const TEAM_ID_PATHS: &[&[&str]] = &[&["id"], &["proTeamId"], &["teamId"]];
const REMAINING_PATHS: &[&[&str]] = &[&["remainingGames"], &["remaining_games"]];
const DIFFICULTY_PATHS: &[&[&str]] = &[
    &["matchupDifficulty"],
    &["matchup_difficulty"],
    &["sos"],
    &["strengthOfSchedule"],
];
const NEXT_OPPONENT_PATHS: &[&[&str]] = &[&["nextOpponent"], &["next_opponent"]];
const WEEK_PATHS: &[&[&str]] = &[&["week"], &["scoringPeriodId"]];

/// What the schedule knows about one team. Fields stay `None` when the
/// source did not provide them.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamSchedule {
    pub abbrev: String,
    pub remaining_games: Option<u32>,
    pub matchup_difficulty: Option<f64>,
    pub next_opponent: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct ScheduleIndex {
    by_abbrev: HashMap<String, TeamSchedule>,
    current_week: Week,
}

impl ScheduleIndex {
    pub fn from_records(records: &[Value], current_week: Week) -> Self {
        let teams = flatten_team_records(records);

        // Opponent ids need resolving against the whole set before entries are built
        let mut abbrev_by_id: HashMap<i64, String> = HashMap::new();
        for team in &teams {
            if let (Some(id), Some(abbrev)) = (team_id(team), team_abbrev(team)) {
                abbrev_by_id.insert(id, abbrev);
            }
        }

        let mut by_abbrev = HashMap::new();
        for team in teams {
            let Some(abbrev) = team_abbrev(team) else {
                debug!("skipping schedule record without a team: {}", team);
                continue;
            };
            let entry = TeamSchedule {
                remaining_games: remaining_games(team, current_week),
                matchup_difficulty: first_present(team, DIFFICULTY_PATHS)
                    .and_then(|(_, v)| lenient_f64(v))
                    .map(|d| d.max(0.0)),
                next_opponent: next_opponent(team, current_week, &abbrev_by_id),
                abbrev: abbrev.clone(),
            };
            by_abbrev.insert(abbrev, entry);
        }

        Self {
            by_abbrev,
            current_week,
        }
    }

    /// Week the index was built for; weeks before it are treated as played.
    pub fn current_week(&self) -> Week {
        self.current_week
    }

    pub fn get(&self, team: &str) -> Option<&TeamSchedule> {
        self.by_abbrev.get(&team.trim().to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.by_abbrev.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_abbrev.is_empty()
    }
}

fn flatten_team_records(records: &[Value]) -> Vec<&Value> {
    let mut teams = Vec::new();
    for record in records {
        let nested = lookup_path(record, &["settings", "proTeams"])
            .or_else(|| lookup_path(record, &["proTeams"]))
            .and_then(|v| v.as_array());
        match (nested, record.as_array()) {
            (Some(inner), _) => teams.extend(inner.iter()),
            (None, Some(inner)) => teams.extend(inner.iter()),
            (None, None) if record.is_object() => teams.push(record),
            _ => debug!("skipping schedule record of unexpected shape"),
        }
    }
    teams
}

fn team_id(team: &Value) -> Option<i64> {
    first_present(team, TEAM_ID_PATHS).and_then(|(_, v)| lenient_i64(v))
}

fn team_abbrev(team: &Value) -> Option<String> {
    first_present(team, ABBREV_PATHS)
        .and_then(|(_, v)| lenient_string(v))
        .or_else(|| team_id(team).and_then(pro_team_abbrev).map(str::to_string))
        .map(|a| a.to_uppercase())
}

/// `(scoring period, games in that period)` for periods at or after `current_week`.
fn upcoming_periods(team: &Value, current_week: Week) -> Option<Vec<(u16, &Value)>> {
    let by_period = team.get("proGamesByScoringPeriod")?.as_object()?;
    let mut periods: Vec<(u16, &Value)> = by_period
        .iter()
        .filter_map(|(k, v)| k.trim().parse::<u16>().ok().map(|p| (p, v)))
        .filter(|(p, _)| *p >= current_week.as_u16())
        .collect();
    periods.sort_by_key(|(p, _)| *p);
    Some(periods)
}

fn upcoming_games(team: &Value, current_week: Week) -> Option<Vec<&Value>> {
    let games = team.get("games")?.as_array()?;
    let mut upcoming: Vec<(i64, &Value)> = games
        .iter()
        .filter_map(|g| {
            first_present(g, WEEK_PATHS)
                .and_then(|(_, w)| lenient_i64(w))
                .map(|w| (w, g))
        })
        .filter(|(w, _)| *w >= current_week.as_u16() as i64)
        .collect();
    upcoming.sort_by_key(|(w, _)| *w);
    Some(upcoming.into_iter().map(|(_, g)| g).collect())
}

fn remaining_games(team: &Value, current_week: Week) -> Option<u32> {
    if let Some((_, v)) = first_present(team, REMAINING_PATHS) {
        if let Some(n) = lenient_f64(v) {
            return Some(n.max(0.0).floor() as u32);
        }
    }
    if let Some(periods) = upcoming_periods(team, current_week) {
        let count = periods
            .iter()
            .map(|(_, games)| games.as_array().map_or(1, |g| g.len()))
            .sum::<usize>();
        return Some(count as u32);
    }
    upcoming_games(team, current_week).map(|g| g.len() as u32)
}

fn next_opponent(
    team: &Value,
    current_week: Week,
    abbrev_by_id: &HashMap<i64, String>,
) -> Option<String> {
    if let Some(opp) = first_present(team, NEXT_OPPONENT_PATHS).and_then(|(_, v)| lenient_string(v)) {
        return Some(opp);
    }

    if let Some(periods) = upcoming_periods(team, current_week) {
        let own_id = team_id(team)?;
        let game = periods
            .iter()
            .find_map(|(_, games)| games.as_array().and_then(|g| g.first()))?;
        let home = game.get("homeProTeamId").and_then(lenient_i64)?;
        let away = game.get("awayProTeamId").and_then(lenient_i64)?;
        let (prefix, opp_id) = if home == own_id { ("vs", away) } else { ("@", home) };
        let name = abbrev_by_id
            .get(&opp_id)
            .cloned()
            .or_else(|| pro_team_abbrev(opp_id).map(str::to_string))
            .unwrap_or_else(|| format!("#{opp_id}"));
        return Some(format!("{prefix} {name}"));
    }

    upcoming_games(team, current_week)?
        .into_iter()
        .find_map(|g| g.get("opponent").and_then(lenient_string))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn espn_schedule() -> Value {
        json!({
            "settings": {
                "proTeams": [
                    {
                        "id": 16,
                        "abbrev": "MIN",
                        "byeWeek": 6,
                        "proGamesByScoringPeriod": {
                            "8": [{"homeProTeamId": 16, "awayProTeamId": 6}],
                            "9": [{"homeProTeamId": 9, "awayProTeamId": 16}],
                            "10": [{"homeProTeamId": 16, "awayProTeamId": 3}],
                            "7": [{"homeProTeamId": 4, "awayProTeamId": 16}]
                        }
                    },
                    {
                        "id": 6,
                        "abbrev": "DAL",
                        "proGamesByScoringPeriod": {
                            "8": [{"homeProTeamId": 16, "awayProTeamId": 6}]
                        }
                    }
                ]
            }
        })
    }

    #[test]
    fn test_espn_shape_counts_remaining_periods() {
        let index = ScheduleIndex::from_records(&[espn_schedule()], Week::new(8));
        assert_eq!(index.len(), 2);

        let min = index.get("min").unwrap();
        assert_eq!(min.remaining_games, Some(3));
        assert_eq!(min.next_opponent.as_deref(), Some("vs DAL"));
        assert!(min.matchup_difficulty.is_none());

        let dal = index.get("DAL").unwrap();
        assert_eq!(dal.remaining_games, Some(1));
        assert_eq!(dal.next_opponent.as_deref(), Some("@ MIN"));
    }

    #[test]
    fn test_espn_shape_after_last_game() {
        let index = ScheduleIndex::from_records(&[espn_schedule()], Week::new(11));
        let min = index.get("MIN").unwrap();
        assert_eq!(min.remaining_games, Some(0));
        assert!(min.next_opponent.is_none());
    }

    #[test]
    fn test_flat_records() {
        let records = vec![
            json!({"team": "cin", "remainingGames": "7", "sos": 0.85, "nextOpponent": "@ PIT"}),
            json!({"teamAbbrev": "KC", "strengthOfSchedule": -0.3}),
        ];
        let index = ScheduleIndex::from_records(&records, Week::default());

        let cin = index.get("CIN").unwrap();
        assert_eq!(cin.remaining_games, Some(7));
        assert_eq!(cin.matchup_difficulty, Some(0.85));
        assert_eq!(cin.next_opponent.as_deref(), Some("@ PIT"));

        let kc = index.get("KC").unwrap();
        assert_eq!(kc.remaining_games, None);
        assert_eq!(kc.matchup_difficulty, Some(0.0));
    }

    #[test]
    fn test_flat_games_list() {
        let records = vec![json!({
            "team": "SF",
            "games": [
                {"week": 3, "opponent": "LAR"},
                {"week": 5, "opponent": "SEA"},
                {"week": 4, "opponent": "ARI"},
                {"opponent": "no week"}
            ]
        })];
        let index = ScheduleIndex::from_records(&records, Week::new(4));
        let sf = index.get("SF").unwrap();
        assert_eq!(sf.remaining_games, Some(2));
        assert_eq!(sf.next_opponent.as_deref(), Some("ARI"));
    }

    #[test]
    fn test_team_resolved_from_id_only() {
        let records = vec![json!({"proTeamId": 33, "remainingGames": 5})];
        let index = ScheduleIndex::from_records(&records, Week::default());
        assert_eq!(index.get("BAL").unwrap().remaining_games, Some(5));
    }

    #[test]
    fn test_garbage_records_are_skipped() {
        let records = vec![json!("nonsense"), json!(42), json!({"remainingGames": 3})];
        let index = ScheduleIndex::from_records(&records, Week::default());
        assert!(index.is_empty());
    }

    #[test]
    fn test_top_level_array_record() {
        let records = vec![json!([{"team": "NE", "remainingGames": 2}])];
        let index = ScheduleIndex::from_records(&records, Week::default());
        assert_eq!(index.get("NE").unwrap().remaining_games, Some(2));
    }
}
