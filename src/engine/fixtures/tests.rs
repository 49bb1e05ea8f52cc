//! Unit tests for fixture merging

use super::*;
use crate::fpl::types::Bootstrap;
use serde_json::json;

#[cfg(test)]
mod merge_tests {
    use super::*;

    fn lookups() -> LookupTables {
        let bootstrap: Bootstrap = serde_json::from_value(json!({
            "elements": [
                {"id": 1, "web_name": "Raya", "team": 1, "element_type": 1},
                {"id": 2, "web_name": "Saka", "team": 1, "element_type": 3},
                {"id": 3, "web_name": "Odegaard", "team": 1, "element_type": 3},
                {"id": 4, "web_name": "Palmer", "team": 7, "element_type": 3},
                {"id": 5, "web_name": "Jackson", "team": 7, "element_type": 4},
                {"id": 6, "web_name": "Caicedo", "team": 7, "element_type": 3}
            ],
            "teams": [
                {"id": 1, "name": "Arsenal", "short_name": "ARS"},
                {"id": 7, "name": "Chelsea", "short_name": "CHE"}
            ],
            "element_types": []
        }))
        .unwrap();
        LookupTables::from_bootstrap(&bootstrap)
    }

    fn fixture(value: serde_json::Value) -> Fixture {
        serde_json::from_value(value).unwrap()
    }

    fn finished_fixture() -> Fixture {
        fixture(json!({
            "id": 1,
            "started": true,
            "finished": true,
            "minutes": 90,
            "team_h": 1,
            "team_a": 7,
            "team_h_score": 2,
            "team_a_score": 1,
            "stats": [
                {"s": "goals_scored", "h": [{"element": 2, "value": 2}], "a": [{"element": 4, "value": 1}]},
                {"s": "assists", "h": [{"element": 3, "value": 1}], "a": []},
                {"s": "yellow_cards", "h": [], "a": [{"element": 6, "value": 1}]},
                {"s": "saves", "h": [{"element": 1, "value": 3}], "a": []},
                {"s": "bps", "h": [
                    {"element": 2, "value": 40},
                    {"element": 3, "value": 30},
                    {"element": 1, "value": 22}
                ], "a": [
                    {"element": 4, "value": 30},
                    {"element": 5, "value": 12},
                    {"element": 6, "value": 8}
                ]}
            ]
        }))
    }

    #[test]
    fn test_fixture_states() {
        let mut f = finished_fixture();
        assert_eq!(FixtureState::of(&f), FixtureState::FullTime);

        f.finished = false;
        f.minutes = 67;
        assert_eq!(FixtureState::of(&f), FixtureState::InProgress(67));
        assert_eq!(FixtureState::of(&f).to_string(), "67'");

        f.started = false;
        assert_eq!(FixtureState::of(&f), FixtureState::NotStarted);
        assert_eq!(FixtureState::NotStarted.to_string(), "NA");
    }

    #[test]
    fn test_bonus_from_combined_sides() {
        let summary = merge_fixtures(Gameweek::new(5), &[finished_fixture()], &lookups());

        assert_eq!(summary.bonus.get(&PlayerId::new(2)), Some(&3));
        assert_eq!(summary.bonus.get(&PlayerId::new(3)), Some(&2));
        assert_eq!(summary.bonus.get(&PlayerId::new(4)), Some(&2));
        assert_eq!(summary.bonus.get(&PlayerId::new(1)), Some(&1));
        assert_eq!(summary.bonus.len(), 4);
    }

    #[test]
    fn test_unrecognised_categories_are_ignored() {
        let summary = merge_fixtures(Gameweek::new(5), &[finished_fixture()], &lookups());
        let report = &summary.fixtures[0];

        let home: Vec<StatCategory> = report.home.iter().map(|a| a.category).collect();
        assert_eq!(
            home,
            vec![
                StatCategory::GoalsScored,
                StatCategory::Assists,
                StatCategory::Bps
            ]
        );
        let away: Vec<StatCategory> = report.away.iter().map(|a| a.category).collect();
        assert_eq!(
            away,
            vec![
                StatCategory::GoalsScored,
                StatCategory::YellowCards,
                StatCategory::Bps
            ]
        );
    }

    #[test]
    fn test_summary_text() {
        let summary = merge_fixtures(Gameweek::new(5), &[finished_fixture()], &lookups());
        let text = summary.to_string();

        assert!(text.starts_with("FT:: ARS [2 - 1] CHE"));
        assert!(text.contains("HOME ⚽: Saka(2) ⤵️: Odegaard(1) BPS: Saka(40) Odegaard(30) Raya(22)"));
        assert!(text.contains("AWAY ⚽: Palmer(1) 🟨: Caicedo BPS: Palmer(30) Jackson(12) Caicedo(8)"));
    }

    #[test]
    fn test_unstarted_fixture_has_no_events_or_bonus() {
        let mut f = finished_fixture();
        f.started = false;
        f.finished = false;
        f.team_h_score = None;
        f.team_a_score = None;

        let summary = merge_fixtures(Gameweek::new(5), &[f], &lookups());
        assert!(summary.bonus.is_empty());
        assert!(summary.fixtures[0].home.is_empty());
        assert_eq!(summary.to_string(), "NA:: ARS [- - -] CHE");
    }

    #[test]
    fn test_headline_is_first_summary_line() {
        let summary = merge_fixtures(Gameweek::new(5), &[finished_fixture()], &lookups());
        let report = &summary.fixtures[0];

        assert_eq!(report.headline(), "FT:: ARS [2 - 1] CHE");
        assert_eq!(report.to_string().lines().next(), Some(report.headline().as_str()));
    }

    #[test]
    fn test_bps_display_is_sorted_and_capped() {
        let f = fixture(json!({
            "id": 2, "started": true, "finished": false, "minutes": 30,
            "team_h": 1, "team_a": 7, "team_h_score": 0, "team_a_score": 0,
            "stats": [{"s": "bps", "h": [
                {"element": 1, "value": 3},
                {"element": 2, "value": 9},
                {"element": 3, "value": 7},
                {"element": 4, "value": 5},
                {"element": 5, "value": 11},
                {"element": 6, "value": 1}
            ], "a": []}]
        }));

        let summary = merge_fixtures(Gameweek::new(5), &[f], &lookups());
        let bps = &summary.fixtures[0].home[0];
        let values: Vec<i32> = bps.entries.iter().map(|e| e.value).collect();
        assert_eq!(values, vec![11, 9, 7, 5, 3]);
    }

    #[test]
    fn test_bonus_merges_across_fixtures() {
        let first = finished_fixture();
        let second = fixture(json!({
            "id": 3, "started": true, "finished": false, "minutes": 55,
            "team_h": 7, "team_a": 1,
            "stats": [{"s": "bps", "h": [{"element": 50, "value": 20}], "a": [{"element": 60, "value": 18}]}]
        }));

        let summary = merge_fixtures(Gameweek::new(5), &[first, second], &lookups());
        assert_eq!(summary.bonus.get(&PlayerId::new(50)), Some(&3));
        assert_eq!(summary.bonus.get(&PlayerId::new(60)), Some(&2));
        assert_eq!(summary.bonus.get(&PlayerId::new(2)), Some(&3));
    }

    #[test]
    fn test_merge_is_idempotent() {
        let fixtures = vec![finished_fixture()];
        let t = lookups();

        let a = merge_fixtures(Gameweek::new(5), &fixtures, &t);
        let b = merge_fixtures(Gameweek::new(5), &fixtures, &t);
        assert_eq!(a.bonus, b.bonus);
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_empty_gameweek() {
        let summary = merge_fixtures(Gameweek::new(1), &[], &lookups());
        assert_eq!(summary, FixtureSummary::empty(Gameweek::new(1)));
        assert_eq!(summary.to_string(), "");
    }
}
