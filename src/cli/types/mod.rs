//! Type-safe wrappers for draft league identifiers.

pub mod ids;
pub mod time;

pub use ids::{EntryId, LeagueId, ManagerId, PlayerId, TeamId};
pub use time::{Gameweek, SEASON_GAMEWEEKS};
