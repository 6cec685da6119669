//! Season and week newtypes.
//!
//! `Season` picks the ESPN game year the player feed is fetched for. `Week`
//! splits the schedule: periods before it are played, periods from it on
//! make up the rest-of-season window that ROS scoring projects over.

use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// NFL season by starting year (`2025` covers the 2025-26 season).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Season(pub u16);

impl Season {
    /// `FromStr` is the CLI and `ESPN_SEASON` entry point; this is for code.
    pub fn new(year: u16) -> Self {
        Self(year)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }
}

impl Default for Season {
    fn default() -> Self {
        Self(2025)
    }
}

impl fmt::Display for Season {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Season {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

/// The current ESPN scoring period.
///
/// Games in this period still count as remaining; earlier ones count toward
/// games played when a feed gives no explicit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Week(pub u16);

impl Week {
    pub fn new(week: u16) -> Self {
        Self(week)
    }

    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Scoring periods finished before this one.
    pub fn weeks_completed(&self) -> u32 {
        u32::from(self.0.saturating_sub(1))
    }
}

/// Opening week: nothing played, the whole schedule remains.
impl Default for Week {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Week {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Week {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.trim().parse()?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weeks_completed() {
        assert_eq!(Week::default().weeks_completed(), 0);
        assert_eq!(Week::new(11).weeks_completed(), 10);
        assert_eq!(Week::new(0).weeks_completed(), 0);
    }

    #[test]
    fn test_parse_trims_input() {
        assert_eq!(" 9 ".parse::<Week>().unwrap(), Week::new(9));
        assert_eq!("2024".parse::<Season>().unwrap(), Season::new(2024));
        assert!("week nine".parse::<Week>().is_err());
    }
}
