//! ESPN Fantasy Football v3 player source.

use async_trait::async_trait;
use reqwest::{header::HeaderMap, Client};
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::{
    config::FetchSettings,
    core::{
        filters::{build_players_filter, IntoHeaderValue, FANTASY_FILTER_HEADER},
        http::espn_header_map,
    },
    error::{EngineError, Result},
    source::{PlayerSource, RawFeed},
};

#[cfg(test)]
mod tests;

/// Base path for ESPN Fantasy Football v3 API.
pub const FFL_BASE_URL: &str = "https://lm-api-reads.fantasy.espn.com/apis/v3/games/ffl";

const USER_AGENT: &str = concat!("ff-trade-wizard/", env!("CARGO_PKG_VERSION"));

/// Fetches the active player pool and the pro-team schedule for one season.
#[derive(Debug, Clone)]
pub struct EspnSource {
    client: Client,
    base_url: String,
    settings: FetchSettings,
}

impl EspnSource {
    pub fn new(settings: FetchSettings) -> Result<Self> {
        Self::with_base_url(FFL_BASE_URL, settings)
    }

    /// Point the source at another host, e.g. a mock server.
    pub fn with_base_url(base_url: impl Into<String>, settings: FetchSettings) -> Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            settings,
        })
    }

    pub fn settings(&self) -> &FetchSettings {
        &self.settings
    }

    fn players_url(&self) -> String {
        format!("{}/seasons/{}/players", self.base_url, self.settings.season)
    }

    fn season_url(&self) -> String {
        format!("{}/seasons/{}", self.base_url, self.settings.season)
    }

    async fn get_json(&self, url: &str, params: &[(&str, &str)], headers: HeaderMap) -> Result<Value> {
        let res = self
            .client
            .get(url)
            .headers(headers)
            .query(params)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;
        Ok(res)
    }

    /// `GET /seasons/{season}/players?view=players_wl&scoringPeriodId=0`
    pub async fn fetch_players(&self) -> Result<Vec<Value>> {
        let mut headers = espn_header_map(&self.settings)?;
        headers.insert(
            FANTASY_FILTER_HEADER,
            build_players_filter(self.settings.max_players).to_header_value()?,
        );
        let url = self.players_url();
        debug!(%url, limit = self.settings.max_players, "requesting ESPN players");

        let body = self
            .get_json(&url, &[("view", "players_wl"), ("scoringPeriodId", "0")], headers)
            .await?;
        match body {
            Value::Array(players) => Ok(players),
            Value::Object(mut map) => match map.remove("players") {
                Some(Value::Array(players)) => Ok(players),
                _ => Err(EngineError::upstream("ESPN players response has no player list")),
            },
            _ => Err(EngineError::upstream("ESPN players response is not a list")),
        }
    }

    /// `GET /seasons/{season}?view=proTeamSchedules_wl`
    pub async fn fetch_schedule(&self) -> Result<Value> {
        let headers = espn_header_map(&self.settings)?;
        let url = self.season_url();
        debug!(%url, "requesting ESPN pro team schedules");
        self.get_json(&url, &[("view", "proTeamSchedules_wl")], headers)
            .await
    }
}

#[async_trait]
impl PlayerSource for EspnSource {
    async fn fetch(&self) -> Result<RawFeed> {
        let players = self.fetch_players().await.map_err(|e| match e {
            EngineError::UpstreamUnavailable { .. } => e,
            other => EngineError::upstream(other),
        })?;

        let schedule = match self.fetch_schedule().await {
            Ok(value) => vec![value],
            Err(e) => {
                warn!("ESPN schedule unavailable, continuing without it: {}", e);
                Vec::new()
            }
        };

        info!(
            season = %self.settings.season,
            players = players.len(),
            schedule = !schedule.is_empty(),
            "fetched ESPN feed"
        );
        Ok(RawFeed::new(players, schedule))
    }

    fn describe(&self) -> String {
        format!("ESPN season {}", self.settings.season)
    }
}
