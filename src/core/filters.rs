//! `X-Fantasy-Filter` header bodies for ESPN's `/players` endpoint.
//!
//! ESPN wraps every filter value in an object with a `value` field, e.g.
//! `{"filterActive": {"value": true}}`. The player pool request only needs a
//! result cap and the active-player flag.

use crate::Result;
use reqwest::header::HeaderValue;
use serde::Serialize;

/// Header name ESPN reads the filter from.
pub const FANTASY_FILTER_HEADER: &str = "x-fantasy-filter";

#[derive(Debug, Serialize)]
pub struct Val<T> {
    pub value: T,
}

#[derive(Debug, Default, Serialize)]
pub struct PlayerLimit {
    pub limit: u32,
}

/// Top-level filter object.
///
/// # Examples
///
/// ```rust
/// use ff_trade_wizard::core::filters::{build_players_filter, IntoHeaderValue};
///
/// let header = build_players_filter(400).to_header_value().unwrap();
/// assert_eq!(
///     header.to_str().unwrap(),
///     r#"{"players":{"limit":400},"filterActive":{"value":true}}"#
/// );
/// ```
#[derive(Debug, Default, Serialize)]
pub struct PlayersFilter {
    pub players: PlayerLimit,

    #[serde(rename = "filterActive", skip_serializing_if = "Option::is_none")]
    pub filter_active: Option<Val<bool>>,
}

/// General-purpose helper: any Serialize → JSON → HeaderValue
pub trait IntoHeaderValue {
    fn to_header_value(&self) -> Result<HeaderValue>;
}

impl<T> IntoHeaderValue for T
where
    T: Serialize,
{
    fn to_header_value(&self) -> Result<HeaderValue> {
        let s = serde_json::to_string(self)?;
        Ok(HeaderValue::from_str(&s)?)
    }
}

/// Active players only, capped at `max_players`.
pub fn build_players_filter(max_players: u32) -> PlayersFilter {
    PlayersFilter {
        players: PlayerLimit { limit: max_players },
        filter_active: Some(Val { value: true }),
    }
}
