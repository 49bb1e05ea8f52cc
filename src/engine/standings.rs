//! League table ordering.

use serde::Serialize;
use std::cmp::Ordering;

use crate::fpl::types::StandingEntry;

#[derive(Debug, Clone, Serialize)]
pub struct RankedStanding {
    /// 1-based.
    pub rank: usize,
    pub entry: StandingEntry,
}

/// Descending total, ties broken by descending points differential.
pub fn compare_standings(a: &StandingEntry, b: &StandingEntry) -> Ordering {
    b.total
        .cmp(&a.total)
        .then_with(|| b.differential().cmp(&a.differential()))
}

/// Orders the table; entries equal on both keys keep their upstream order.
pub fn rank_standings(entries: &[StandingEntry]) -> Vec<RankedStanding> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(compare_standings);

    sorted
        .into_iter()
        .enumerate()
        .map(|(i, entry)| RankedStanding { rank: i + 1, entry })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::ManagerId;

    fn entry(id: u32, total: i32, points_for: i32, points_against: i32) -> StandingEntry {
        StandingEntry {
            league_entry: ManagerId::new(id),
            matches_won: 0,
            matches_drawn: 0,
            matches_lost: 0,
            matches_played: 0,
            points_for,
            points_against,
            total,
            rank: None,
            last_rank: None,
            rank_sort: None,
        }
    }

    fn order(ranked: &[RankedStanding]) -> Vec<u32> {
        ranked.iter().map(|r| r.entry.league_entry.as_u32()).collect()
    }

    #[test]
    fn test_differential_breaks_ties() {
        let ranked = rank_standings(&[entry(1, 10, 102, 100), entry(2, 10, 105, 100)]);
        assert_eq!(order(&ranked), vec![2, 1]);
    }

    #[test]
    fn test_total_beats_differential() {
        let ranked = rank_standings(&[
            entry(1, 10, 150, 100),
            entry(2, 10, 102, 100),
            entry(3, 12, 80, 120),
        ]);
        assert_eq!(order(&ranked), vec![3, 1, 2]);
        assert_eq!(ranked.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![1, 2, 3]);
    }

    #[test]
    fn test_full_ties_keep_input_order() {
        let ranked = rank_standings(&[entry(4, 9, 50, 50), entry(2, 9, 60, 60), entry(7, 9, 0, 0)]);
        assert_eq!(order(&ranked), vec![4, 2, 7]);
    }

    #[test]
    fn test_empty_table() {
        assert!(rank_standings(&[]).is_empty());
    }
}
