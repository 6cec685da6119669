//! HTTP header helpers for ESPN requests

use crate::{config::FetchSettings, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, COOKIE};

/// Default headers for every ESPN request.
///
/// Always asks for JSON; adds whichever of the `SWID` and `espn_s2` cookies
/// are configured (private leagues). Public player data needs neither.
pub fn espn_header_map(settings: &FetchSettings) -> Result<HeaderMap> {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Some(cookie) = cookie_value(settings) {
        h.insert(COOKIE, HeaderValue::from_str(&cookie)?);
    }
    Ok(h)
}

fn cookie_value(settings: &FetchSettings) -> Option<String> {
    let pairs: Vec<String> = [("SWID", &settings.swid), ("espn_s2", &settings.espn_s2)]
        .into_iter()
        .filter_map(|(name, value)| {
            let value = value.as_deref()?.trim();
            (!value.is_empty()).then(|| format!("{}={}", name, value))
        })
        .collect();
    (!pairs.is_empty()).then(|| pairs.join("; "))
}
