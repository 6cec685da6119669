//! Shared setup for every command: pick a source, build the engine, refresh.

use std::sync::Arc;

use crate::{
    cli::SourceArgs,
    core::cache::PoolCache,
    engine::{FantasyEngine, PoolStatus, RefreshOutcome},
    espn::EspnSource,
    source::{FileSource, PlayerSource},
    Result,
};

use super::{engine_config_for, resolve_fetch_settings};

/// Engine with a freshly attempted refresh, ready for one command.
pub struct CommandContext {
    pub engine: FantasyEngine,
    pub outcome: RefreshOutcome,
}

impl CommandContext {
    /// Resolve settings, build the source named by `args`, and refresh once.
    pub async fn new(args: &SourceArgs) -> Result<Self> {
        let settings = resolve_fetch_settings(args)?;
        let config = engine_config_for(&settings, args);
        let source: Box<dyn PlayerSource> = match &args.file {
            Some(path) => Box::new(FileSource::new(path)),
            None => Box::new(EspnSource::new(settings)?),
        };
        let engine = FantasyEngine::new(config, Arc::new(PoolCache::new()))?;
        Ok(Self::refreshed(engine, source.as_ref()).await)
    }

    /// Refresh `engine` from `source` and report the outcome on stderr.
    pub async fn refreshed(engine: FantasyEngine, source: &dyn PlayerSource) -> Self {
        let outcome = engine.refresh(source).await;
        report_outcome(&outcome);
        Self { engine, outcome }
    }
}

fn report_outcome(outcome: &RefreshOutcome) {
    let reason = outcome.error.as_deref().unwrap_or("unknown error");
    match outcome.status {
        PoolStatus::Fresh => {
            if outcome.rejected > 0 {
                eprintln!(
                    "Loaded {} players ({} records could not be read)",
                    outcome.accepted, outcome.rejected
                );
            }
        }
        PoolStatus::Fallback => eprintln!("Upstream unavailable, using cached pool: {}", reason),
        PoolStatus::NoData => eprintln!("No player data available: {}", reason),
    }
}
