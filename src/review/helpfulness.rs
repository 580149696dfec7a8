use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Vote tally attached to a review: `helpful` of `total` voters found the
/// review helpful. Also used as the per-user accumulator when ranking
/// reviewers, where both fields are sums over all of a user's reviews.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Helpfulness {
    pub helpful: u64,
    pub total: u64,
}

#[derive(Debug, Error, PartialEq)]
pub enum HelpfulnessParseError {
    #[error("Helpfulness must be of the form \"helpful/total\"")]
    MissingSeparator,
    #[error("Helpfulness vote count is not a non-negative integer")]
    InvalidCount(#[from] std::num::ParseIntError),
}

impl Helpfulness {
    /// Sentinel ratio for a tally with no votes at all. Ranks below every
    /// real ratio, which is always in `[0.0, 1.0]` for sane vote counts.
    pub const NO_VOTES_RATIO: f64 = -5.0;

    pub fn new(helpful: u64, total: u64) -> Self {
        Helpfulness { helpful, total }
    }

    /// Ratio of helpful to total votes.
    ///
    /// - `total == 0` maps to [`Self::NO_VOTES_RATIO`].
    /// - `helpful == 0` with a positive total is an exact `0.0`.
    pub fn ratio(&self) -> f64 {
        if self.total == 0 {
            Self::NO_VOTES_RATIO
        } else if self.helpful == 0 {
            0.0
        } else {
            self.helpful as f64 / self.total as f64
        }
    }

    /// Fold another tally into this one.
    pub fn accumulate(&mut self, other: Helpfulness) {
        self.helpful += other.helpful;
        self.total += other.total;
    }
}

impl FromStr for Helpfulness {
    type Err = HelpfulnessParseError;

    /// Parse the `"helpful/total"` wire form, e.g. `"3/4"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (helpful, total) = s
            .split_once('/')
            .ok_or(HelpfulnessParseError::MissingSeparator)?;
        Ok(Helpfulness {
            helpful: helpful.trim().parse()?,
            total: total.trim().parse()?,
        })
    }
}

impl fmt::Display for Helpfulness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.helpful, self.total)
    }
}
