//! Gameweek fixture summaries and the gameweek-wide provisional bonus map.

use serde::Serialize;
use std::fmt;

use crate::{
    cli::types::{Gameweek, PlayerId},
    engine::{
        bonus::{allocate_bonus, BonusMap},
        lookup::LookupTables,
    },
    fpl::types::{ElementValue, Fixture, FixtureStat},
};

#[cfg(test)]
mod tests;

/// BPS entries listed per side in a summary.
pub const BPS_DISPLAY_LIMIT: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "minutes", rename_all = "snake_case")]
pub enum FixtureState {
    NotStarted,
    InProgress(u16),
    FullTime,
}

impl FixtureState {
    pub fn of(fixture: &Fixture) -> Self {
        if fixture.finished {
            FixtureState::FullTime
        } else if !fixture.started {
            FixtureState::NotStarted
        } else {
            FixtureState::InProgress(fixture.minutes)
        }
    }

    pub fn has_events(&self) -> bool {
        !matches!(self, FixtureState::NotStarted)
    }
}

impl fmt::Display for FixtureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FixtureState::NotStarted => write!(f, "NA"),
            FixtureState::InProgress(minutes) => write!(f, "{}'", minutes),
            FixtureState::FullTime => write!(f, "FT"),
        }
    }
}

/// Stat categories rendered in a summary; anything else upstream is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatCategory {
    GoalsScored,
    Assists,
    YellowCards,
    RedCards,
    OwnGoals,
    PenaltiesSaved,
    PenaltiesMissed,
    Bps,
}

impl StatCategory {
    pub fn from_identifier(identifier: &str) -> Option<Self> {
        match identifier {
            "goals_scored" => Some(StatCategory::GoalsScored),
            "assists" => Some(StatCategory::Assists),
            "yellow_cards" => Some(StatCategory::YellowCards),
            "red_cards" => Some(StatCategory::RedCards),
            "own_goals" => Some(StatCategory::OwnGoals),
            "penalties_saved" => Some(StatCategory::PenaltiesSaved),
            "penalties_missed" => Some(StatCategory::PenaltiesMissed),
            "bps" => Some(StatCategory::Bps),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            StatCategory::GoalsScored => "⚽",
            StatCategory::Assists => "⤵️",
            StatCategory::YellowCards => "🟨",
            StatCategory::RedCards => "🟥",
            StatCategory::OwnGoals => "OG",
            StatCategory::PenaltiesSaved => "PS",
            StatCategory::PenaltiesMissed => "PM",
            StatCategory::Bps => "BPS",
        }
    }

    /// Counts worth printing next to the name.
    pub fn shows_values(&self) -> bool {
        matches!(
            self,
            StatCategory::GoalsScored | StatCategory::Assists | StatCategory::Bps
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatEntry {
    pub player: PlayerId,
    pub name: String,
    pub value: i32,
}

/// One side's entries for one category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatAnnotation {
    pub category: StatCategory,
    pub entries: Vec<StatEntry>,
}

impl StatAnnotation {
    fn build(category: StatCategory, values: &[ElementValue], lookups: &LookupTables) -> Option<Self> {
        if values.is_empty() {
            return None;
        }

        let mut values = values.to_vec();
        if category == StatCategory::Bps {
            values.sort_by(|a, b| b.value.cmp(&a.value));
            values.truncate(BPS_DISPLAY_LIMIT);
        }

        let entries = values
            .into_iter()
            .map(|ev| StatEntry {
                player: ev.element,
                name: lookups.player_name(ev.element).to_string(),
                value: ev.value,
            })
            .collect();

        Some(Self { category, entries })
    }
}

impl fmt::Display for StatAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.category.label())?;
        for entry in &self.entries {
            if self.category.shows_values() {
                write!(f, " {}({})", entry.name, entry.value)?;
            } else {
                write!(f, " {}", entry.name)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixtureReport {
    pub id: u32,
    pub state: FixtureState,
    pub home_team: String,
    pub away_team: String,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub home: Vec<StatAnnotation>,
    pub away: Vec<StatAnnotation>,
}

fn score_text(score: Option<i32>) -> String {
    score.map(|s| s.to_string()).unwrap_or_else(|| "-".to_string())
}

fn join_annotations(annotations: &[StatAnnotation]) -> String {
    annotations
        .iter()
        .map(|a| a.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

impl FixtureReport {
    /// `"{state}:: {home} [{h} - {a}] {away}"`, with `-` for a missing score.
    pub fn headline(&self) -> String {
        format!(
            "{}:: {} [{} - {}] {}",
            self.state,
            self.home_team,
            score_text(self.home_score),
            score_text(self.away_score),
            self.away_team
        )
    }
}

impl fmt::Display for FixtureReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.headline())?;
        if self.state.has_events() {
            write!(f, "\n  HOME {}", join_annotations(&self.home))?;
            write!(f, "\n  AWAY {}", join_annotations(&self.away))?;
        }
        Ok(())
    }
}

/// Every fixture of a gameweek plus the provisional bonus derived from BPS.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixtureSummary {
    pub gameweek: Gameweek,
    pub fixtures: Vec<FixtureReport>,
    pub bonus: BonusMap,
}

impl FixtureSummary {
    pub fn empty(gameweek: Gameweek) -> Self {
        Self {
            gameweek,
            fixtures: Vec::new(),
            bonus: BonusMap::new(),
        }
    }
}

impl fmt::Display for FixtureSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, report) in self.fixtures.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", report)?;
        }
        Ok(())
    }
}

fn report_fixture(fixture: &Fixture, lookups: &LookupTables, bonus: &mut BonusMap) -> FixtureReport {
    let state = FixtureState::of(fixture);
    let mut home = Vec::new();
    let mut away = Vec::new();

    if state.has_events() {
        for stat in &fixture.stats {
            let Some(category) = StatCategory::from_identifier(&stat.identifier) else {
                continue;
            };
            if category == StatCategory::Bps {
                // A player appears in one fixture per gameweek, so overwriting is safe.
                bonus.extend(fixture_bonus(stat));
            }
            home.extend(StatAnnotation::build(category, &stat.home, lookups));
            away.extend(StatAnnotation::build(category, &stat.away, lookups));
        }
    }

    FixtureReport {
        id: fixture.id,
        state,
        home_team: lookups.team_short_name(fixture.team_h).to_string(),
        away_team: lookups.team_short_name(fixture.team_a).to_string(),
        home_score: fixture.team_h_score,
        away_score: fixture.team_a_score,
        home,
        away,
    }
}

/// Bonus for one fixture's BPS category, home and away ranked together.
pub fn fixture_bonus(bps: &FixtureStat) -> BonusMap {
    let combined: Vec<ElementValue> = bps.home.iter().chain(bps.away.iter()).copied().collect();
    allocate_bonus(&combined)
}

/// Summarise a gameweek's fixtures and collect provisional bonus.
pub fn merge_fixtures(
    gameweek: Gameweek,
    fixtures: &[Fixture],
    lookups: &LookupTables,
) -> FixtureSummary {
    let mut bonus = BonusMap::new();
    let reports = fixtures
        .iter()
        .map(|fixture| report_fixture(fixture, lookups, &mut bonus))
        .collect();

    FixtureSummary {
        gameweek,
        fixtures: reports,
        bonus,
    }
}
