//! ESPN Fantasy Football v3 upstream: HTTP source, stat-block helpers and
//! id tables.

pub mod compute;
pub mod http;
pub mod types;

pub use http::{EspnSource, FFL_BASE_URL};
