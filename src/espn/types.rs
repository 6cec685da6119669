//! ESPN identifiers: stat sources, stat splits and pro team ids.

#[cfg(test)]
mod tests;

/// Stat source for ESPN player stats
///     - Actual (game results):    statSourceId = 0
///     - Projected:                statSourceId = 1
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatSource {
    Actual,
    Projected,
}

impl StatSource {
    /// ESPN statSourceId corresponding to this source
    pub fn id(self) -> u64 {
        match self {
            StatSource::Actual => 0,
            StatSource::Projected => 1,
        }
    }
}

/// Stat split for ESPN player stats
///     - Season total:  statSplitTypeId = 0
///     - Single week:   statSplitTypeId = 1
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatSplit {
    Season,
    Weekly,
}

impl StatSplit {
    pub fn id(self) -> u64 {
        match self {
            StatSplit::Season => 0,
            StatSplit::Weekly => 1,
        }
    }
}

/// Free agents carry proTeamId 0.
pub const FREE_AGENT: &str = "FA";

const PRO_TEAMS: &[(i64, &str)] = &[
    (0, FREE_AGENT),
    (1, "ATL"),
    (2, "BUF"),
    (3, "CHI"),
    (4, "CIN"),
    (5, "CLE"),
    (6, "DAL"),
    (7, "DEN"),
    (8, "DET"),
    (9, "GB"),
    (10, "TEN"),
    (11, "IND"),
    (12, "KC"),
    (13, "LV"),
    (14, "LAR"),
    (15, "MIA"),
    (16, "MIN"),
    (17, "NE"),
    (18, "NO"),
    (19, "NYG"),
    (20, "NYJ"),
    (21, "PHI"),
    (22, "ARI"),
    (23, "PIT"),
    (24, "LAC"),
    (25, "SF"),
    (26, "SEA"),
    (27, "TB"),
    (28, "WSH"),
    (29, "CAR"),
    (30, "JAX"),
    (33, "BAL"),
    (34, "HOU"),
];

/// Map an ESPN `proTeamId` to its abbreviation.
pub fn pro_team_abbrev(pro_team_id: i64) -> Option<&'static str> {
    PRO_TEAMS
        .iter()
        .find(|(id, _)| *id == pro_team_id)
        .map(|(_, abbrev)| *abbrev)
}
