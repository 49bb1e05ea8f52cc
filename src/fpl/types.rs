use crate::cli::types::{EntryId, Gameweek, ManagerId, PlayerId, TeamId};
use chrono::{DateTime, Utc};
use serde::{de::Error, Deserialize, Deserializer, Serialize};
use std::collections::{BTreeMap, HashMap};


/// Live elements arrive keyed by the player id as a string.
fn de_player_key_map<'de, D, V>(deserializer: D) -> Result<HashMap<PlayerId, V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    let raw: BTreeMap<String, V> = Deserialize::deserialize(deserializer)?;
    raw.into_iter()
        .map(|(k, v)| {
            k.parse::<u32>()
                .map(|id| (PlayerId::new(id), v))
                .map_err(D::Error::custom)
        })
        .collect()
}

/// ICT and expected-goal figures come as numbers on some endpoints and
/// decimal strings on others.
fn de_flex_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Flex {
        Num(f64),
        Str(String),
        Null(()),
    }

    match Flex::deserialize(deserializer)? {
        Flex::Num(v) => Ok(v),
        Flex::Str(s) if s.trim().is_empty() => Ok(0.0),
        Flex::Str(s) => s.trim().parse::<f64>().map_err(D::Error::custom),
        Flex::Null(()) => Ok(0.0),
    }
}

/// `null` collapses to the type's default.
fn de_null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn default_multiplier() -> i32 {
    1
}

/// `/game`: where the season currently is.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GameState {
    #[serde(default)]
    pub current_event: Option<Gameweek>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub current_event_finished: bool,
    #[serde(default)]
    pub next_event: Option<Gameweek>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub processing_status: String,
    #[serde(default, deserialize_with = "de_null_default")]
    pub trades_time_for_approval: bool,
    #[serde(default, deserialize_with = "de_null_default")]
    pub waivers_processed: bool,
}

/// One player's cumulative live statistics for a gameweek.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct StatLine {
    pub minutes: i32,
    pub goals_scored: i32,
    pub assists: i32,
    pub clean_sheets: i32,
    pub goals_conceded: i32,
    pub own_goals: i32,
    pub penalties_saved: i32,
    pub penalties_missed: i32,
    pub yellow_cards: i32,
    pub red_cards: i32,
    pub saves: i32,
    /// Official bonus; stays 0 until the upstream finalises it.
    pub bonus: i32,
    pub bps: i32,
    pub total_points: i32,
    pub in_dreamteam: bool,
    #[serde(deserialize_with = "de_flex_f64")]
    pub influence: f64,
    #[serde(deserialize_with = "de_flex_f64")]
    pub creativity: f64,
    #[serde(deserialize_with = "de_flex_f64")]
    pub threat: f64,
    #[serde(deserialize_with = "de_flex_f64")]
    pub ict_index: f64,
    #[serde(deserialize_with = "de_flex_f64")]
    pub expected_goals: f64,
    #[serde(deserialize_with = "de_flex_f64")]
    pub expected_assists: f64,
    #[serde(deserialize_with = "de_flex_f64")]
    pub expected_goal_involvements: f64,
    #[serde(deserialize_with = "de_flex_f64")]
    pub expected_goals_conceded: f64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LiveElement {
    #[serde(default)]
    pub stats: StatLine,
}

/// `/event/{gw}/live`
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LiveStats {
    #[serde(default, deserialize_with = "de_player_key_map")]
    pub elements: HashMap<PlayerId, LiveElement>,
}

impl LiveStats {
    /// Stats for `player`; a missing id yields a zero-valued line.
    pub fn stat_line(&self, player: PlayerId) -> StatLine {
        self.elements
            .get(&player)
            .map(|el| el.stats)
            .unwrap_or_default()
    }
}

/// One (player, value) pair inside a fixture stat category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct ElementValue {
    pub element: PlayerId,
    pub value: i32,
}

/// A categorised in-match event list, e.g. `goals_scored` or `bps`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct FixtureStat {
    #[serde(rename = "s", alias = "identifier")]
    pub identifier: String,
    #[serde(rename = "h", default)]
    pub home: Vec<ElementValue>,
    #[serde(rename = "a", default)]
    pub away: Vec<ElementValue>,
}

/// `/event/{gw}/fixtures` entry
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Fixture {
    pub id: u32,
    #[serde(default)]
    pub event: Option<Gameweek>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub started: bool,
    #[serde(default, deserialize_with = "de_null_default")]
    pub finished: bool,
    #[serde(default, deserialize_with = "de_null_default")]
    pub finished_provisional: bool,
    #[serde(default, deserialize_with = "de_null_default")]
    pub minutes: u16,
    pub team_h: TeamId,
    pub team_a: TeamId,
    #[serde(default)]
    pub team_h_score: Option<i32>,
    #[serde(default)]
    pub team_a_score: Option<i32>,
    #[serde(default)]
    pub kickoff_time: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "de_null_default")]
    pub stats: Vec<FixtureStat>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LeagueInfo {
    #[serde(default)]
    pub id: u32,
    #[serde(default)]
    pub name: String,
    #[serde(default, deserialize_with = "de_null_default")]
    pub scoring: String,
    #[serde(default, deserialize_with = "de_null_default")]
    pub draft_status: String,
    #[serde(default)]
    pub start_event: Option<Gameweek>,
    #[serde(default)]
    pub stop_event: Option<Gameweek>,
    #[serde(default)]
    pub max_entries: Option<u32>,
}

/// A manager in the league.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LeagueEntry {
    pub id: ManagerId,
    pub entry_id: EntryId,
    #[serde(default, deserialize_with = "de_null_default")]
    pub entry_name: String,
    #[serde(default, deserialize_with = "de_null_default")]
    pub player_first_name: String,
    #[serde(default, deserialize_with = "de_null_default")]
    pub player_last_name: String,
    #[serde(default, deserialize_with = "de_null_default")]
    pub short_name: String,
}

/// A head-to-head match between two managers.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Match {
    pub event: Gameweek,
    pub league_entry_1: ManagerId,
    #[serde(default, deserialize_with = "de_null_default")]
    pub league_entry_1_points: i32,
    pub league_entry_2: ManagerId,
    #[serde(default, deserialize_with = "de_null_default")]
    pub league_entry_2_points: i32,
    #[serde(default, deserialize_with = "de_null_default")]
    pub started: bool,
    #[serde(default, deserialize_with = "de_null_default")]
    pub finished: bool,
    #[serde(default)]
    pub winning_league_entry: Option<ManagerId>,
    #[serde(default)]
    pub winning_method: Option<String>,
}

/// League table row; owned by the upstream, read-only here.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StandingEntry {
    pub league_entry: ManagerId,
    #[serde(default, deserialize_with = "de_null_default")]
    pub matches_won: u32,
    #[serde(default, deserialize_with = "de_null_default")]
    pub matches_drawn: u32,
    #[serde(default, deserialize_with = "de_null_default")]
    pub matches_lost: u32,
    #[serde(default, deserialize_with = "de_null_default")]
    pub matches_played: u32,
    #[serde(default, deserialize_with = "de_null_default")]
    pub points_for: i32,
    #[serde(default, deserialize_with = "de_null_default")]
    pub points_against: i32,
    #[serde(default, deserialize_with = "de_null_default")]
    pub total: i32,
    #[serde(default)]
    pub rank: Option<u32>,
    #[serde(default)]
    pub last_rank: Option<u32>,
    #[serde(default)]
    pub rank_sort: Option<u32>,
}

impl StandingEntry {
    pub fn differential(&self) -> i32 {
        self.points_for - self.points_against
    }
}

/// `/league/{id}/details`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LeagueDetails {
    #[serde(default)]
    pub league: LeagueInfo,
    #[serde(default)]
    pub league_entries: Vec<LeagueEntry>,
    #[serde(default)]
    pub matches: Vec<Match>,
    #[serde(default)]
    pub standings: Vec<StandingEntry>,
}

/// One roster slot. `position` is 1-based: 1-11 start, 12-15 sit on the bench.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct SquadPick {
    pub element: PlayerId,
    #[serde(default)]
    pub position: u8,
    #[serde(default, deserialize_with = "de_null_default")]
    pub is_captain: bool,
    #[serde(default, deserialize_with = "de_null_default")]
    pub is_vice_captain: bool,
    #[serde(default = "default_multiplier")]
    pub multiplier: i32,
}

/// `/entry/{entry}/event/{gw}`
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct EntryPicks {
    #[serde(default)]
    pub picks: Vec<SquadPick>,
}

/// Catalogue profile for a footballer.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PlayerProfile {
    pub id: PlayerId,
    #[serde(default, deserialize_with = "de_null_default")]
    pub web_name: String,
    #[serde(default, deserialize_with = "de_null_default")]
    pub first_name: String,
    #[serde(default, deserialize_with = "de_null_default")]
    pub second_name: String,
    pub team: TeamId,
    /// Position id (1 GK, 2 DEF, 3 MID, 4 FWD).
    pub element_type: u8,
    #[serde(default, deserialize_with = "de_null_default")]
    pub status: String,
    #[serde(default, deserialize_with = "de_null_default")]
    pub total_points: i32,
    #[serde(default, deserialize_with = "de_null_default")]
    pub minutes: i32,
    #[serde(default, deserialize_with = "de_null_default")]
    pub goals_scored: i32,
    #[serde(default, deserialize_with = "de_null_default")]
    pub assists: i32,
    #[serde(default, deserialize_with = "de_null_default")]
    pub bonus: i32,
    #[serde(default, deserialize_with = "de_flex_f64")]
    pub form: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Team {
    pub id: TeamId,
    #[serde(default, deserialize_with = "de_null_default")]
    pub name: String,
    #[serde(default, deserialize_with = "de_null_default")]
    pub short_name: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ElementType {
    pub id: u8,
    #[serde(default, deserialize_with = "de_null_default")]
    pub singular_name_short: String,
}

/// `/bootstrap-static`: the player catalogue plus club and position tables.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Bootstrap {
    #[serde(default)]
    pub elements: Vec<PlayerProfile>,
    #[serde(default)]
    pub teams: Vec<Team>,
    #[serde(default)]
    pub element_types: Vec<ElementType>,
}
