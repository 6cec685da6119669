//! Unit tests for ESPN identifier tables

use super::*;

#[cfg(test)]
mod types_tests {
    use super::*;

    #[test]
    fn test_stat_source_ids() {
        assert_eq!(StatSource::Actual.id(), 0);
        assert_eq!(StatSource::Projected.id(), 1);
    }

    #[test]
    fn test_stat_split_ids() {
        assert_eq!(StatSplit::Season.id(), 0);
        assert_eq!(StatSplit::Weekly.id(), 1);
    }

    #[test]
    fn test_pro_team_abbrev_known_ids() {
        assert_eq!(pro_team_abbrev(16), Some("MIN"));
        assert_eq!(pro_team_abbrev(4), Some("CIN"));
        assert_eq!(pro_team_abbrev(25), Some("SF"));
        assert_eq!(pro_team_abbrev(0), Some(FREE_AGENT));
    }

    #[test]
    fn test_pro_team_abbrev_unknown_ids() {
        // 31 and 32 were never assigned
        assert_eq!(pro_team_abbrev(31), None);
        assert_eq!(pro_team_abbrev(-1), None);
    }
}
