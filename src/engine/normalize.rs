//! Raw upstream records to canonical [`Player`]s.
//!
//! Normalization is a pipeline of field-extraction rules. Each rule lists the
//! keys the field has been seen under (first hit wins), how to coerce the
//! value, and the default used when nothing readable is found. Only identity
//! fields (`id`, `name`, `position`) are required; everything else degrades to
//! its default and the anomaly is logged at debug level.

use serde_json::Value;
use std::collections::HashSet;
use tracing::{debug, info, warn};

use super::player::{Player, NEUTRAL_MATCHUP_DIFFICULTY};
use super::schedule::{ScheduleIndex, TeamSchedule};
use crate::{
    cli::types::{PlayerId, Position},
    config::EngineConfig,
    core::values::{first_present, lenient_f64, lenient_i64, lenient_string, lookup_path},
    error::{EngineError, Result},
    espn::{compute, types::pro_team_abbrev, types::FREE_AGENT},
    source::RawFeed,
};


type Paths = &'static [&'static [&'static str]];

const ID_PATHS: Paths = &[&["id"], &["playerId"], &["player_id"]];
const NAME_PATHS: Paths = &[&["fullName"], &["name"], &["full_name"], &["displayName"]];
const POSITION_NAME_PATHS: Paths = &[&["position"], &["pos"]];
const POSITION_ID_PATHS: Paths = &[&["defaultPositionId"], &["positionId"]];
const TEAM_PATHS: Paths = &[&["team"], &["proTeam"], &["proTeamAbbrev"]];
const TEAM_ID_PATHS: Paths = &[&["proTeamId"]];
const NEXT_OPPONENT_PATHS: Paths = &[&["nextOpponent"], &["next_opponent"]];

/// A numeric field: where to look, what to use when absent, and the valid range.
struct NumericRule {
    field: &'static str,
    paths: Paths,
    default: f64,
    min: f64,
    max: f64,
}

const SEASON_POINTS: NumericRule = NumericRule {
    field: "season_points",
    paths: &[&["seasonPoints"], &["season_points"], &["totalPoints"]],
    default: 0.0,
    min: 0.0,
    max: f64::MAX,
};

const GAMES_PLAYED: NumericRule = NumericRule {
    field: "games_played",
    paths: &[&["gamesPlayed"], &["games_played"]],
    default: 0.0,
    min: 0.0,
    max: u32::MAX as f64,
};

const WEEKLY_PROJECTION: NumericRule = NumericRule {
    field: "weekly_projection",
    paths: &[
        &["weeklyProjection"],
        &["weekly_projection"],
        &["projectedPoints"],
        &["fppg"],
    ],
    default: 0.0,
    min: 0.0,
    max: f64::MAX,
};

const PERCENT_OWNED: NumericRule = NumericRule {
    field: "percent_owned",
    paths: &[
        &["percentOwned"],
        &["percent_owned"],
        &["ownership", "percentOwned"],
    ],
    default: 0.0,
    min: 0.0,
    max: 100.0,
};

const PERCENT_STARTED: NumericRule = NumericRule {
    field: "percent_started",
    paths: &[
        &["percentStarted"],
        &["percent_started"],
        &["ownership", "percentStarted"],
    ],
    default: 0.0,
    min: 0.0,
    max: 100.0,
};

const REMAINING_GAMES: NumericRule = NumericRule {
    field: "remaining_games",
    paths: &[&["remainingGames"], &["remaining_games"]],
    default: 0.0,
    min: 0.0,
    max: u32::MAX as f64,
};

const MATCHUP_DIFFICULTY: NumericRule = NumericRule {
    field: "matchup_difficulty",
    paths: &[
        &["matchupDifficulty"],
        &["matchup_difficulty"],
        &["sos"],
        &["strengthOfSchedule"],
    ],
    default: NEUTRAL_MATCHUP_DIFFICULTY,
    min: 0.0,
    max: f64::MAX,
};

const USAGE_RATE: NumericRule = NumericRule {
    field: "usage_rate",
    paths: &[&["usageRate"], &["usage_rate"], &["usage"]],
    default: 0.0,
    min: 0.0,
    max: 1.0,
};

/// Per-record anomaly log.
struct FieldLog<'a> {
    player: &'a str,
    anomalies: usize,
}

impl FieldLog<'_> {
    fn note(&mut self, field: &str, detail: impl std::fmt::Display) {
        debug!(player = self.player, field, "{}", detail);
        self.anomalies += 1;
    }
}

impl NumericRule {
    /// First alias that holds a readable number.
    fn read(&self, record: &Value, log: &mut FieldLog) -> Option<f64> {
        let (path, value) = first_present(record, self.paths)?;
        match lenient_f64(value) {
            Some(n) => {
                if value.is_string() {
                    log.note(self.field, format!("coerced string {} at {}", value, path.join(".")));
                }
                Some(n)
            }
            None => {
                log.note(self.field, format!("unreadable value {} at {}", value, path.join(".")));
                None
            }
        }
    }

    /// Apply the default and clamp into range.
    fn finish(&self, value: Option<f64>, log: &mut FieldLog) -> f64 {
        let Some(v) = value else {
            return self.default;
        };
        if v < self.min || v > self.max {
            log.note(self.field, format!("clamped {} into [{}, {}]", v, self.min, self.max));
        }
        v.clamp(self.min, self.max)
    }

    fn extract(&self, record: &Value, log: &mut FieldLog) -> f64 {
        let value = self.read(record, log);
        self.finish(value, log)
    }
}

fn whole(value: f64, field: &str, log: &mut FieldLog) -> u32 {
    if value.fract() != 0.0 {
        log.note(field, format!("truncated fractional count {}", value));
    }
    value.floor() as u32
}

/// ESPN sometimes wraps the player object (`playerPoolEntry.player`, `player`).
fn unwrap_envelope(record: &Value) -> &Value {
    if record.get("id").is_some() {
        return record;
    }
    lookup_path(record, &["playerPoolEntry", "player"])
        .or_else(|| lookup_path(record, &["player"]))
        .filter(|v| v.is_object())
        .unwrap_or(record)
}

fn extract_id(record: &Value) -> Result<PlayerId> {
    let (_, value) = first_present(record, ID_PATHS)
        .ok_or_else(|| EngineError::normalization("id", "is missing"))?;
    lenient_string(value)
        .map(PlayerId::new)
        .ok_or_else(|| EngineError::normalization("id", format!("has unsupported value {}", value)))
}

fn extract_name(record: &Value) -> Result<String> {
    if let Some(name) = first_present(record, NAME_PATHS).and_then(|(_, v)| lenient_string(v)) {
        return Ok(name);
    }
    let first = lookup_path(record, &["firstName"]).and_then(lenient_string);
    let last = lookup_path(record, &["lastName"]).and_then(lenient_string);
    match (first, last) {
        (Some(f), Some(l)) => Ok(format!("{f} {l}")),
        (Some(n), None) | (None, Some(n)) => Ok(n),
        (None, None) => Err(EngineError::normalization("name", "is missing")),
    }
}

fn extract_position(record: &Value) -> Result<Position> {
    let position = if let Some((_, value)) = first_present(record, POSITION_NAME_PATHS) {
        match (lenient_i64(value), lenient_string(value)) {
            (Some(espn_id), _) => Position::from_espn_id(espn_id),
            (None, Some(name)) => name.parse::<Position>(),
            (None, None) => Err(EngineError::InvalidPosition {
                position: value.to_string(),
            }),
        }
    } else if let Some((_, value)) = first_present(record, POSITION_ID_PATHS) {
        let espn_id = lenient_i64(value).ok_or_else(|| EngineError::InvalidPosition {
            position: value.to_string(),
        })?;
        Position::from_espn_id(espn_id)
    } else {
        return Err(EngineError::normalization("position", "is missing"));
    };

    match position {
        Ok(Position::FLEX) => Err(EngineError::normalization(
            "position",
            "FLEX is a lineup slot, not a player position",
        )),
        Ok(pos) => Ok(pos),
        Err(EngineError::InvalidPosition { position }) => Err(EngineError::normalization(
            "position",
            format!("'{}' is not a known position", position),
        )),
        Err(other) => Err(other),
    }
}

fn extract_team(record: &Value, log: &mut FieldLog) -> String {
    if let Some(team) = first_present(record, TEAM_PATHS).and_then(|(_, v)| lenient_string(v)) {
        return team.to_uppercase();
    }
    if let Some((_, value)) = first_present(record, TEAM_ID_PATHS) {
        match lenient_i64(value).and_then(pro_team_abbrev) {
            Some(abbrev) => return abbrev.to_string(),
            None => log.note("team", format!("unknown pro team id {}", value)),
        }
    }
    FREE_AGENT.to_string()
}

/// Normalize one raw record against a schedule index.
///
/// Fails only when `id`, `name` or `position` is missing or unreadable.
pub fn normalize_record(record: &Value, schedule: &ScheduleIndex) -> Result<Player> {
    normalize_logged(record, schedule).map(|(player, _)| player)
}

fn normalize_logged(record: &Value, schedule: &ScheduleIndex) -> Result<(Player, usize)> {
    let record = unwrap_envelope(record);

    let id = extract_id(record)?;
    let name = extract_name(record)?;
    let position = extract_position(record)?;

    let id_label = id.to_string();
    let mut log = FieldLog {
        player: &id_label,
        anomalies: 0,
    };

    let team = extract_team(record, &mut log);
    let team_schedule: Option<&TeamSchedule> = schedule.get(&team);

    let season_points = SEASON_POINTS.read(record, &mut log).or_else(|| compute::season_total_points(record));
    let season_points = SEASON_POINTS.finish(season_points, &mut log);

    let games_played = GAMES_PLAYED
        .read(record, &mut log)
        .or_else(|| compute::weekly_games_played(record).map(f64::from));
    let games_played = match games_played {
        None if season_points > 0.0 && schedule.current_week().weeks_completed() > 0 => {
            let inferred = schedule.current_week().weeks_completed();
            log.note(
                "games_played",
                format!("no count, inferred {} from current week {}", inferred, schedule.current_week()),
            );
            inferred
        }
        other => whole(GAMES_PLAYED.finish(other, &mut log), "games_played", &mut log),
    };

    let weekly_projection = WEEKLY_PROJECTION
        .read(record, &mut log)
        .or_else(|| compute::latest_weekly_projection(record));
    let weekly_projection = WEEKLY_PROJECTION.finish(weekly_projection, &mut log);

    let percent_owned = PERCENT_OWNED.extract(record, &mut log);
    let percent_started = PERCENT_STARTED.extract(record, &mut log);

    let remaining_games = REMAINING_GAMES
        .read(record, &mut log)
        .or_else(|| team_schedule.and_then(|s| s.remaining_games).map(f64::from));
    if remaining_games.is_none() {
        log.note("remaining_games", format!("no schedule data for team {}", team));
    }
    let remaining_games = whole(
        REMAINING_GAMES.finish(remaining_games, &mut log),
        "remaining_games",
        &mut log,
    );

    let matchup_difficulty = MATCHUP_DIFFICULTY
        .read(record, &mut log)
        .or_else(|| team_schedule.and_then(|s| s.matchup_difficulty));
    let matchup_difficulty = MATCHUP_DIFFICULTY.finish(matchup_difficulty, &mut log);

    // Some feeds report usage as a percentage
    let usage_rate = USAGE_RATE.read(record, &mut log).map(|u| {
        if u > 1.0 && u <= 100.0 {
            log.note("usage_rate", format!("read {} as a percentage", u));
            u / 100.0
        } else {
            u
        }
    });
    let usage_rate = USAGE_RATE.finish(usage_rate, &mut log);

    let next_opponent = first_present(record, NEXT_OPPONENT_PATHS)
        .and_then(|(_, v)| lenient_string(v))
        .or_else(|| team_schedule.and_then(|s| s.next_opponent.clone()));

    let anomalies = log.anomalies;
    Ok((
        Player {
            id,
            name,
            team,
            position,
            season_points,
            games_played,
            weekly_projection,
            percent_owned,
            percent_started,
            remaining_games,
            matchup_difficulty,
            usage_rate,
            next_opponent,
        },
        anomalies,
    ))
}

/// Outcome of normalizing one upstream feed.
#[derive(Debug, Default)]
pub struct NormalizeReport {
    /// Players admitted to the pool, in feed order.
    pub players: Vec<Player>,
    /// Records dropped because an identity field was unusable.
    pub rejected: Vec<EngineError>,
    /// Valid players left out by the pool policy.
    pub filtered: usize,
    /// Later records whose id was already taken.
    pub duplicates: usize,
    /// Optional fields that were coerced, clamped or defaulted unexpectedly.
    pub anomalies: usize,
}

/// Normalize every player record in `feed`, applying the pool policy.
pub fn normalize_feed(feed: &RawFeed, config: &EngineConfig) -> NormalizeReport {
    let schedule = ScheduleIndex::from_records(&feed.schedule, config.current_week);
    if schedule.is_empty() && !feed.schedule.is_empty() {
        warn!(
            "schedule data present ({} records) but no team could be read",
            feed.schedule.len()
        );
    }

    let mut report = NormalizeReport::default();
    let mut seen: HashSet<PlayerId> = HashSet::new();

    for record in &feed.players {
        match normalize_logged(record, &schedule) {
            Ok((player, anomalies)) => {
                report.anomalies += anomalies;
                if !config.pool.admits(player.position, player.percent_owned) {
                    debug!(
                        player = %player.id,
                        "filtered {} ({}, {:.1}% owned)",
                        player.name,
                        player.position,
                        player.percent_owned
                    );
                    report.filtered += 1;
                    continue;
                }
                if !seen.insert(player.id.clone()) {
                    warn!(player = %player.id, "duplicate player record, keeping the first");
                    report.duplicates += 1;
                    continue;
                }
                report.players.push(player);
            }
            Err(e) => {
                warn!("dropping player record: {}", e);
                report.rejected.push(e);
            }
        }
    }

    info!(
        accepted = report.players.len(),
        rejected = report.rejected.len(),
        filtered = report.filtered,
        duplicates = report.duplicates,
        anomalies = report.anomalies,
        teams = schedule.len(),
        "normalized upstream feed"
    );
    report
}
