//! Shared plumbing used by the engine and the ESPN source:
//! - `cache`: the fallback player-pool snapshot
//! - `filters`: ESPN `X-Fantasy-Filter` bodies
//! - `http`: request headers
//! - `values`: lenient readers for loosely typed JSON

pub mod cache;
pub mod filters;
pub mod http;
pub mod values;

pub use cache::{PoolCache, PoolSnapshot};
pub use filters::{build_players_filter, IntoHeaderValue, PlayersFilter, Val};
