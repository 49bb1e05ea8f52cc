//! Gameweek numbering for the draft season.

use crate::error::{DraftError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Last gameweek of a Premier League season.
pub const SEASON_GAMEWEEKS: u8 = 38;

/// Type-safe wrapper for gameweek numbers ("event" upstream).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Gameweek(pub u8);

impl Gameweek {
    pub fn new(gw: u8) -> Self {
        Self(gw)
    }

    pub fn as_u8(&self) -> u8 {
        self.0
    }

    /// `self` when it lies in `1..=last`.
    pub fn within_season(self, last: Gameweek) -> Result<Self> {
        if (1..=last.0).contains(&self.0) {
            Ok(self)
        } else {
            Err(DraftError::GameweekOutOfRange {
                gameweek: self.0,
                last: last.0,
            })
        }
    }

    /// The following gameweek, or `None` once `last` has been reached.
    pub fn next(&self, last: Gameweek) -> Option<Gameweek> {
        if self.0 >= last.0 {
            None
        } else {
            Some(Gameweek(self.0 + 1))
        }
    }
}

impl Default for Gameweek {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for Gameweek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Gameweek {
    type Err = DraftError;

    fn from_str(s: &str) -> Result<Self> {
        Ok(Self(s.parse()?))
    }
}
