//! Upstream data sources.
//!
//! The engine never talks to the network or the filesystem itself; it asks a
//! [`PlayerSource`] for a [`RawFeed`] and reacts to the outcome. Any source
//! failure must surface as [`EngineError::UpstreamUnavailable`] so the engine
//! can fall back to its cached pool.

pub mod file;

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{EngineError, Result};

pub use file::FileSource;

/// Raw, unvalidated records exactly as the upstream delivered them.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RawFeed {
    #[serde(default)]
    pub players: Vec<Value>,
    #[serde(default)]
    pub schedule: Vec<Value>,
}

impl RawFeed {
    pub fn new(players: Vec<Value>, schedule: Vec<Value>) -> Self {
        Self { players, schedule }
    }

    /// Accepts either a bare array of player records or an object with
    /// `players` and optional `schedule` arrays.
    pub fn from_value(value: Value) -> Result<Self> {
        match value {
            Value::Array(players) => Ok(Self::new(players, Vec::new())),
            Value::Object(map) if map.contains_key("players") => {
                Ok(serde_json::from_value(Value::Object(map))?)
            }
            other => Err(EngineError::upstream(format!(
                "expected a player array or an object with `players`, got {}",
                kind(&other)
            ))),
        }
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object without `players`",
    }
}

/// Anything that can produce a fresh feed of raw player and schedule records.
#[async_trait]
pub trait PlayerSource: Send + Sync {
    async fn fetch(&self) -> Result<RawFeed>;

    /// Short label for logs.
    fn describe(&self) -> String;
}
