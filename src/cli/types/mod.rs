//! Type-safe wrappers and enums for fantasy football data.

pub mod ids;
pub mod position;
pub mod time;

pub use ids::PlayerId;
pub use position::Position;
pub use time::{Season, Week};
