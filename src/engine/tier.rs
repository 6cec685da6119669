//! Pool-relative tiering.
//!
//! Tiers are quantiles of the scored pool, not absolute point bands. The
//! distribution is built once per ranking request and every player is
//! classified against the same thresholds, so the result is an ordered
//! partition: a higher score never lands in a lower tier.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::config::TierCutoffs;

/// Ordinal tier label; variants are declared worst-first so `Ord` ranks S highest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Tier {
    D,
    C,
    B,
    A,
    S,
}

impl Tier {
    /// Best first.
    pub const ALL: [Tier; 5] = [Tier::S, Tier::A, Tier::B, Tier::C, Tier::D];
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Tier::S => "S",
            Tier::A => "A",
            Tier::B => "B",
            Tier::C => "C",
            Tier::D => "D",
        };
        write!(f, "{}", s)
    }
}

/// Minimum score needed for S, A, B and C in one scored pool.
#[derive(Debug, Clone, PartialEq)]
pub struct TierDistribution {
    thresholds: [f64; 4],
    pool_size: usize,
}

impl TierDistribution {
    pub fn from_scores(scores: &[f64], cutoffs: &TierCutoffs) -> Self {
        if scores.is_empty() {
            return Self {
                thresholds: [f64::INFINITY; 4],
                pool_size: 0,
            };
        }

        let mut sorted: Vec<f64> = scores
            .iter()
            .map(|s| if s.is_nan() { 0.0 } else { *s })
            .collect();
        sorted.sort_by(|a, b| b.total_cmp(a));

        let n = sorted.len();
        let mut thresholds = [0.0; 4];
        for (slot, fraction) in thresholds.iter_mut().zip(cutoffs.as_array()) {
            let count = ((fraction * n as f64).ceil() as usize).clamp(1, n);
            *slot = sorted[count - 1];
        }

        Self {
            thresholds,
            pool_size: n,
        }
    }

    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    pub fn thresholds(&self) -> [f64; 4] {
        self.thresholds
    }

    /// Scores equal to a threshold take the higher tier. A non-positive
    /// score is always D.
    pub fn classify(&self, score: f64) -> Tier {
        if score.is_nan() || score <= 0.0 {
            return Tier::D;
        }
        let [s, a, b, c] = self.thresholds;
        if score >= s {
            Tier::S
        } else if score >= a {
            Tier::A
        } else if score >= b {
            Tier::B
        } else if score >= c {
            Tier::C
        } else {
            Tier::D
        }
    }
}

/// Build the distribution from `scores` and classify all of them in one pass.
pub fn classify_pool(scores: &[f64], cutoffs: &TierCutoffs) -> Vec<Tier> {
    let distribution = TierDistribution::from_scores(scores, cutoffs);
    scores.iter().map(|s| distribution.classify(*s)).collect()
}
