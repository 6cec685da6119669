//! JSON file source, for offline runs and fixtures.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{PlayerSource, RawFeed};
use crate::error::{EngineError, Result};

#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl PlayerSource for FileSource {
    async fn fetch(&self) -> Result<RawFeed> {
        let text = tokio::fs::read_to_string(&self.path)
            .await
            .map_err(|e| EngineError::upstream(format!("{}: {}", self.path.display(), e)))?;
        let value: serde_json::Value = serde_json::from_str(&text)
            .map_err(|e| EngineError::upstream(format!("{}: {}", self.path.display(), e)))?;
        let feed = RawFeed::from_value(value).map_err(|e| match e {
            EngineError::UpstreamUnavailable { .. } => e,
            other => EngineError::upstream(format!("{}: {}", self.path.display(), other)),
        })?;
        debug!(
            path = %self.path.display(),
            players = feed.players.len(),
            schedule = feed.schedule.len(),
            "read player feed from file"
        );
        Ok(feed)
    }

    fn describe(&self) -> String {
        format!("file {}", self.path.display())
    }
}
