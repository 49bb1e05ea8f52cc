//! Scoring aggregation: pure functions over fetched records.
//!
//! - `fixtures`: per-fixture summaries and the gameweek bonus map
//! - `bonus`: 3/2/1 bonus from BPS
//! - `squad`: manager totals over the starting eleven
//! - `standings`: league table order
//! - `matchups`: head-to-head pairings per gameweek

pub mod bonus;
pub mod fixtures;
pub mod lookup;
pub mod matchups;
pub mod squad;
pub mod standings;

pub use bonus::{allocate_bonus, BonusMap};
pub use fixtures::{merge_fixtures, FixtureSummary};
pub use lookup::LookupTables;
pub use matchups::{matchups_for, next_gameweek_preview, Matchup, MatchupPreview};
pub use squad::{MultiplierPolicy, ScoredSquad, SquadScorer};
pub use standings::{rank_standings, RankedStanding};
