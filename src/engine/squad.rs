//! Manager totals from a squad, live stats and provisional bonus.

use serde::Serialize;

use crate::{
    cli::types::PlayerId,
    engine::bonus::BonusMap,
    fpl::types::{LiveStats, SquadPick, StatLine},
};


/// Picks at list index `0..STARTING_XI` start; the rest are on the bench.
pub const STARTING_XI: usize = 11;

/// Live points above which a benched player is highlighted strongly.
pub const BENCH_STRONG_ABOVE: i32 = 5;
/// Live points above which a benched player is highlighted lightly.
pub const BENCH_LIGHT_ABOVE: i32 = 1;

/// Whether a pick's points multiplier counts towards the manager total.
///
/// Draft leagues have no captaincy and deliver a multiplier of 1, so the
/// default ignores it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MultiplierPolicy {
    #[default]
    Ignore,
    Apply,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Slot {
    Starter,
    Bench,
}

/// Presentation class of a squad row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RowEmphasis {
    /// Starter who has played minutes.
    Active,
    /// Starter yet to play.
    Idle,
    BenchStrong,
    BenchLight,
    BenchNeutral,
}

/// Where a row's bonus came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BonusSource {
    /// Finalised by the upstream.
    Official,
    /// Computed from BPS; replaced once the official figure lands.
    Provisional,
    None,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ResolvedBonus {
    pub points: i32,
    pub source: BonusSource,
}

/// Official bonus when non-zero, else the computed award, never both.
pub fn resolve_bonus(stats: &StatLine, player: PlayerId, computed: &BonusMap) -> ResolvedBonus {
    if stats.bonus != 0 {
        return ResolvedBonus {
            points: stats.bonus,
            source: BonusSource::Official,
        };
    }
    match computed.get(&player) {
        Some(&award) => ResolvedBonus {
            points: i32::from(award),
            source: BonusSource::Provisional,
        },
        None => ResolvedBonus {
            points: 0,
            source: BonusSource::None,
        },
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoredRow {
    pub pick: SquadPick,
    pub slot: Slot,
    pub emphasis: RowEmphasis,
    pub stats: StatLine,
    pub bonus: ResolvedBonus,
    /// Live points plus resolved bonus.
    pub points: i32,
    /// What this row adds to the manager total.
    pub counted: i32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ScoredSquad {
    pub total: i32,
    pub rows: Vec<ScoredRow>,
}

fn emphasis_for(slot: Slot, stats: &StatLine) -> RowEmphasis {
    match slot {
        Slot::Bench if stats.total_points > BENCH_STRONG_ABOVE => RowEmphasis::BenchStrong,
        Slot::Bench if stats.total_points > BENCH_LIGHT_ABOVE => RowEmphasis::BenchLight,
        Slot::Bench => RowEmphasis::BenchNeutral,
        Slot::Starter if stats.minutes > 0 => RowEmphasis::Active,
        Slot::Starter => RowEmphasis::Idle,
    }
}

/// Scores squads against one gameweek's live stats and bonus map.
#[derive(Debug, Clone, Copy)]
pub struct SquadScorer<'a> {
    live: &'a LiveStats,
    bonus: &'a BonusMap,
    policy: MultiplierPolicy,
}

impl<'a> SquadScorer<'a> {
    pub fn new(live: &'a LiveStats, bonus: &'a BonusMap, policy: MultiplierPolicy) -> Self {
        Self {
            live,
            bonus,
            policy,
        }
    }

    /// Rows keep the pick order; only starters add to the total.
    pub fn score(&self, picks: &[SquadPick]) -> ScoredSquad {
        let mut total = 0;
        let rows = picks
            .iter()
            .enumerate()
            .map(|(index, pick)| {
                let slot = if index < STARTING_XI {
                    Slot::Starter
                } else {
                    Slot::Bench
                };
                let stats = self.live.stat_line(pick.element);
                let bonus = resolve_bonus(&stats, pick.element, self.bonus);
                let points = stats.total_points + bonus.points;

                let counted = match (slot, self.policy) {
                    (Slot::Bench, _) => 0,
                    (Slot::Starter, MultiplierPolicy::Ignore) => points,
                    (Slot::Starter, MultiplierPolicy::Apply) => points * pick.multiplier,
                };
                total += counted;

                ScoredRow {
                    pick: *pick,
                    slot,
                    emphasis: emphasis_for(slot, &stats),
                    stats,
                    bonus,
                    points,
                    counted,
                }
            })
            .collect();

        ScoredSquad { total, rows }
    }
}
