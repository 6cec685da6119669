//! Command implementations for the FF Trade Wizard CLI

pub mod common;
pub mod players;
pub mod rankings;
pub mod trade;

use crate::{
    cli::{types::Position, SourceArgs},
    config::{EngineConfig, FetchSettings, PoolPolicy},
    Result,
};

/// Fetch settings from the environment, with CLI flags taking precedence.
pub fn resolve_fetch_settings(args: &SourceArgs) -> Result<FetchSettings> {
    resolve_fetch_settings_with(args, FetchSettings::from_env()?)
}

/// Same as [`resolve_fetch_settings`] with the environment already read.
pub fn resolve_fetch_settings_with(args: &SourceArgs, mut settings: FetchSettings) -> Result<FetchSettings> {
    if let Some(season) = args.season {
        settings.season = season;
    }
    if let Some(week) = args.week {
        settings.current_week = week;
    }
    Ok(settings)
}

/// Engine tunables for one run. The ownership floor only applies to ESPN,
/// whose feed includes every rostered deep-league body; file feeds are taken
/// as curated.
pub fn engine_config_for(settings: &FetchSettings, args: &SourceArgs) -> EngineConfig {
    let defaults = PoolPolicy::default();
    EngineConfig {
        pool: PoolPolicy {
            min_percent_owned: if args.file.is_some() {
                0.0
            } else {
                settings.min_percent_owned
            },
            excluded_positions: if args.include_k_dst {
                Vec::new()
            } else {
                defaults.excluded_positions
            },
        },
        current_week: settings.current_week,
        ..EngineConfig::default()
    }
}

fn position_label(position: Option<Position>) -> String {
    position.map_or_else(|| "ALL".to_string(), |p| p.to_string())
}
