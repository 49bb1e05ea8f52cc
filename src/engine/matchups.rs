//! Head-to-head pairings for a gameweek.

use serde::Serialize;

use crate::{
    cli::types::{Gameweek, ManagerId},
    fpl::types::Match,
};

/// Pairings per gameweek when the league size is unknown (a six-manager league).
pub const DEFAULT_MATCHUPS_PER_GAMEWEEK: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Matchup {
    pub gameweek: Gameweek,
    pub home: ManagerId,
    pub away: ManagerId,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "matchups", rename_all = "snake_case")]
pub enum MatchupPreview {
    Available(Vec<Matchup>),
    /// Season over, or the upstream listed fewer pairings than the league plays.
    Unavailable,
}

/// Every manager plays once a gameweek.
pub fn matchups_per_gameweek(league_entries: usize) -> usize {
    match league_entries / 2 {
        0 => DEFAULT_MATCHUPS_PER_GAMEWEEK,
        n => n,
    }
}

/// Pairings scheduled for `gameweek`, in upstream order, at most `cap`.
/// A match listing the same manager on both sides is skipped.
pub fn matchups_for(matches: &[Match], gameweek: Gameweek, cap: usize) -> Vec<Matchup> {
    matches
        .iter()
        .filter(|m| m.event == gameweek && m.league_entry_1 != m.league_entry_2)
        .take(cap)
        .map(|m| Matchup {
            gameweek,
            home: m.league_entry_1,
            away: m.league_entry_2,
        })
        .collect()
}

/// Manager ids of a pairing list, both sides in order.
pub fn manager_order(matchups: &[Matchup]) -> Vec<ManagerId> {
    matchups.iter().flat_map(|m| [m.home, m.away]).collect()
}

/// The gameweek after `current`, all-or-nothing.
pub fn next_gameweek_preview(
    matches: &[Match],
    current: Gameweek,
    last: Gameweek,
    cap: usize,
) -> MatchupPreview {
    let Some(next) = current.next(last) else {
        return MatchupPreview::Unavailable;
    };

    let matchups = matchups_for(matches, next, cap);
    if matchups.len() == cap {
        MatchupPreview::Available(matchups)
    } else {
        MatchupPreview::Unavailable
    }
}
