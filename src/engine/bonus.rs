//! Provisional bonus points from a fixture's BPS list.

use std::collections::BTreeMap;

use crate::{cli::types::PlayerId, fpl::types::ElementValue};

/// Player id to awarded bonus (1..=3).
pub type BonusMap = BTreeMap<PlayerId, u8>;

/// Bonus for the best BPS score in a fixture.
pub const TOP_BONUS: u8 = 3;

/// Award 3/2/1 bonus by descending score, one tier per distinct score.
///
/// Every player tied on a score shares that score's tier, and the next
/// distinct score drops exactly one tier. Allocation stops once the tiers
/// run out or a non-positive score is reached.
pub fn allocate_bonus(scores: &[ElementValue]) -> BonusMap {
    let mut ranked = scores.to_vec();
    ranked.sort_by(|a, b| b.value.cmp(&a.value));

    let mut bonus = BonusMap::new();
    let mut tier = TOP_BONUS;
    let mut last_score: Option<i32> = None;

    for entry in ranked {
        if matches!(last_score, Some(prev) if prev != entry.value) {
            tier -= 1;
        }
        last_score = Some(entry.value);

        if tier == 0 || entry.value <= 0 {
            break;
        }
        bonus.insert(entry.element, tier);
    }

    bonus
}
