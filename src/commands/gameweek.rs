//! One rendering cycle: fetch every resource for a gameweek, degrade failures
//! to empty records with an explicit status, and assemble the view model.

use futures_util::{stream, StreamExt};
use serde::Serialize;
use std::{collections::HashMap, future::Future, time::Duration};
use tracing::{info, warn};

use crate::{
    cli::types::{EntryId, Gameweek, LeagueId, ManagerId, PlayerId},
    config::AppConfig,
    engine::{
        fixtures::{merge_fixtures, FixtureSummary},
        lookup::LookupTables,
        matchups::{matchups_for, matchups_per_gameweek, next_gameweek_preview, MatchupPreview},
        squad::{BonusSource, MultiplierPolicy, RowEmphasis, ScoredRow, Slot, SquadScorer},
        standings::rank_standings,
    },
    error::DraftError,
    fpl::{
        source::DraftSource,
        types::{Bootstrap, EntryPicks, Fixture, LeagueDetails, LeagueEntry, LiveStats},
    },
    Result,
};


/// Whether a resource arrived intact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "reason", rename_all = "snake_case")]
pub enum ResourceStatus {
    Ready,
    /// Not requested this cycle, e.g. game state when the gameweek is given.
    NotFetched,
    Unavailable(String),
}

impl ResourceStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, ResourceStatus::Ready)
    }
}

/// A resource, or its empty default plus the reason it is empty.
#[derive(Debug, Clone)]
pub struct Fetched<T> {
    pub data: T,
    pub status: ResourceStatus,
}

impl<T: Default> Fetched<T> {
    pub fn ready(data: T) -> Self {
        Self {
            data,
            status: ResourceStatus::Ready,
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            data: T::default(),
            status: ResourceStatus::Unavailable(reason.into()),
        }
    }
}

/// Run one fetch under `timeout`; failures become an empty record.
pub async fn fetch_or_default<T, F>(resource: &str, timeout: Duration, fut: F) -> Fetched<T>
where
    T: Default,
    F: Future<Output = Result<T>>,
{
    let err = match tokio::time::timeout(timeout, fut).await {
        Ok(Ok(data)) => return Fetched::ready(data),
        Ok(Err(e)) => e,
        Err(_) => DraftError::Timeout {
            resource: resource.to_string(),
            seconds: timeout.as_secs(),
        },
    };
    warn!(resource, error = %err, "fetch failed, using empty record");
    Fetched::unavailable(err.to_string())
}

/// Knobs for one cycle, usually taken from [`AppConfig`].
#[derive(Debug, Clone)]
pub struct CycleOptions {
    pub fetch_timeout: Duration,
    pub cycle_deadline: Duration,
    pub fetch_concurrency: usize,
    pub max_gameweek: Gameweek,
    pub multiplier_policy: MultiplierPolicy,
}

impl From<&AppConfig> for CycleOptions {
    fn from(config: &AppConfig) -> Self {
        Self {
            fetch_timeout: config.fetch_timeout,
            cycle_deadline: config.cycle_deadline,
            fetch_concurrency: config.fetch_concurrency.max(1),
            max_gameweek: config.max_gameweek,
            multiplier_policy: config.multiplier_policy,
        }
    }
}

impl Default for CycleOptions {
    fn default() -> Self {
        Self::from(&AppConfig::default())
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PlayerRow {
    pub player: PlayerId,
    pub name: String,
    pub team: String,
    pub position: String,
    pub minutes: i32,
    pub goals_scored: i32,
    pub assists: i32,
    pub goals_conceded: i32,
    pub yellow_cards: i32,
    pub bonus: i32,
    pub bonus_source: BonusSource,
    pub points: i32,
    pub slot: Slot,
    pub emphasis: RowEmphasis,
}

impl PlayerRow {
    fn from_scored(row: &ScoredRow, lookups: &LookupTables) -> Self {
        let player = row.pick.element;
        Self {
            player,
            name: lookups.player_name(player).to_string(),
            team: lookups.player_team(player).to_string(),
            position: lookups.player_position(player).to_string(),
            minutes: row.stats.minutes,
            goals_scored: row.stats.goals_scored,
            assists: row.stats.assists,
            goals_conceded: row.stats.goals_conceded,
            yellow_cards: row.stats.yellow_cards,
            bonus: row.bonus.points,
            bonus_source: row.bonus.source,
            points: row.points,
            slot: row.slot,
            emphasis: row.emphasis,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ManagerCard {
    pub manager: ManagerId,
    pub name: String,
    pub total: i32,
    pub rows: Vec<PlayerRow>,
    /// Status of this manager's squad fetch.
    pub status: ResourceStatus,
}

#[derive(Debug, Clone, Serialize)]
pub struct MatchupView {
    pub home: ManagerCard,
    pub away: ManagerCard,
}

#[derive(Debug, Clone, Serialize)]
pub struct StandingRow {
    pub rank: usize,
    pub manager: ManagerId,
    pub name: String,
    pub won: u32,
    pub drawn: u32,
    pub lost: u32,
    pub points_for: i32,
    pub points_against: i32,
    pub total: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FixturePairing {
    pub home: String,
    pub away: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NextFixtures {
    Available {
        gameweek: Gameweek,
        pairings: Vec<FixturePairing>,
    },
    Unavailable,
}

/// Status of every league-wide resource behind the page.
#[derive(Debug, Clone, Serialize)]
pub struct SectionStatus {
    pub game: ResourceStatus,
    pub league: ResourceStatus,
    pub catalogue: ResourceStatus,
    pub live: ResourceStatus,
    pub fixtures: ResourceStatus,
}

impl SectionStatus {
    fn all_unavailable(reason: &str) -> Self {
        let status = ResourceStatus::Unavailable(reason.to_string());
        Self {
            game: status.clone(),
            league: status.clone(),
            catalogue: status.clone(),
            live: status.clone(),
            fixtures: status,
        }
    }

    /// `(resource, reason)` for every degraded section.
    pub fn degraded(&self) -> Vec<(&'static str, &str)> {
        [
            ("game state", &self.game),
            ("league", &self.league),
            ("player catalogue", &self.catalogue),
            ("live stats", &self.live),
            ("fixtures", &self.fixtures),
        ]
        .into_iter()
        .filter_map(|(name, status)| match status {
            ResourceStatus::Ready | ResourceStatus::NotFetched => None,
            ResourceStatus::Unavailable(reason) => Some((name, reason.as_str())),
        })
        .collect()
    }
}

/// Everything the presentation layer needs for one gameweek.
#[derive(Debug, Clone, Serialize)]
pub struct GameweekView {
    pub gameweek: Gameweek,
    pub league_name: String,
    pub matchups: Vec<MatchupView>,
    pub standings: Vec<StandingRow>,
    pub next_fixtures: NextFixtures,
    pub fixtures: FixtureSummary,
    pub status: SectionStatus,
}

impl GameweekView {
    /// The page served when a cycle cannot complete.
    pub fn unavailable(gameweek: Gameweek, reason: &str) -> Self {
        Self {
            gameweek,
            league_name: String::new(),
            matchups: Vec::new(),
            standings: Vec::new(),
            next_fixtures: NextFixtures::Unavailable,
            fixtures: FixtureSummary::empty(gameweek),
            status: SectionStatus::all_unavailable(reason),
        }
    }
}

/// Fetched inputs of one cycle.
#[derive(Debug, Clone)]
pub struct CycleInputs {
    pub gameweek: Gameweek,
    pub game: ResourceStatus,
    pub league: Fetched<LeagueDetails>,
    pub bootstrap: Fetched<Bootstrap>,
    pub live: Fetched<LiveStats>,
    pub fixtures: Fetched<Vec<Fixture>>,
    pub squads: HashMap<ManagerId, Fetched<EntryPicks>>,
}

fn manager_name(entry: &LeagueEntry) -> String {
    if entry.player_first_name.is_empty() {
        entry.entry_name.clone()
    } else {
        entry.player_first_name.clone()
    }
}

/// Combine fetched inputs into the view model. Pure; never fails.
pub fn assemble_view(inputs: &CycleInputs, opts: &CycleOptions) -> GameweekView {
    let gameweek = inputs.gameweek;
    let league = &inputs.league.data;
    let lookups = LookupTables::from_bootstrap(&inputs.bootstrap.data);
    let summary = merge_fixtures(gameweek, &inputs.fixtures.data, &lookups);

    let names: HashMap<ManagerId, String> = league
        .league_entries
        .iter()
        .map(|e| (e.id, manager_name(e)))
        .collect();
    let name_of = |id: ManagerId| names.get(&id).cloned().unwrap_or_default();

    let cap = matchups_per_gameweek(league.league_entries.len());
    let scorer = SquadScorer::new(&inputs.live.data, &summary.bonus, opts.multiplier_policy);

    let card = |manager: ManagerId| -> ManagerCard {
        let (picks, status) = match inputs.squads.get(&manager) {
            Some(fetched) => (fetched.data.picks.as_slice(), fetched.status.clone()),
            None => (
                &[][..],
                ResourceStatus::Unavailable("manager not in league entries".to_string()),
            ),
        };
        let scored = scorer.score(picks);
        ManagerCard {
            manager,
            name: name_of(manager),
            total: scored.total,
            rows: scored
                .rows
                .iter()
                .map(|row| PlayerRow::from_scored(row, &lookups))
                .collect(),
            status,
        }
    };

    let matchups = matchups_for(&league.matches, gameweek, cap)
        .into_iter()
        .map(|m| MatchupView {
            home: card(m.home),
            away: card(m.away),
        })
        .collect();

    let standings = rank_standings(&league.standings)
        .into_iter()
        .map(|ranked| StandingRow {
            rank: ranked.rank,
            manager: ranked.entry.league_entry,
            name: name_of(ranked.entry.league_entry),
            won: ranked.entry.matches_won,
            drawn: ranked.entry.matches_drawn,
            lost: ranked.entry.matches_lost,
            points_for: ranked.entry.points_for,
            points_against: ranked.entry.points_against,
            total: ranked.entry.total,
        })
        .collect();

    let next_fixtures =
        match next_gameweek_preview(&league.matches, gameweek, opts.max_gameweek, cap) {
            MatchupPreview::Available(next) => NextFixtures::Available {
                gameweek: next.first().map(|m| m.gameweek).unwrap_or(gameweek),
                pairings: next
                    .iter()
                    .map(|m| FixturePairing {
                        home: name_of(m.home),
                        away: name_of(m.away),
                    })
                    .collect(),
            },
            MatchupPreview::Unavailable => NextFixtures::Unavailable,
        };

    GameweekView {
        gameweek,
        league_name: league.league.name.clone(),
        matchups,
        standings,
        next_fixtures,
        fixtures: summary,
        status: SectionStatus {
            game: inputs.game.clone(),
            league: inputs.league.status.clone(),
            catalogue: inputs.bootstrap.status.clone(),
            live: inputs.live.status.clone(),
            fixtures: inputs.fixtures.status.clone(),
        },
    }
}

/// Squads for every league entry, at most `concurrency` in flight.
pub async fn fetch_squads(
    source: &dyn DraftSource,
    entries: &[LeagueEntry],
    gameweek: Gameweek,
    opts: &CycleOptions,
) -> HashMap<ManagerId, Fetched<EntryPicks>> {
    let ids: Vec<(ManagerId, EntryId)> = entries.iter().map(|e| (e.id, e.entry_id)).collect();

    stream::iter(ids)
        .map(move |(manager, entry)| async move {
            let resource = format!("squad {}", entry);
            let picks = fetch_or_default(
                &resource,
                opts.fetch_timeout,
                source.entry_picks(entry, gameweek),
            )
            .await;
            (manager, picks)
        })
        .buffer_unordered(opts.fetch_concurrency.max(1))
        .collect()
        .await
}

/// The gameweek to show and the status of the game-state fetch behind it.
/// `requested` overrides the upstream's current gameweek.
pub async fn resolve_gameweek(
    source: &dyn DraftSource,
    requested: Option<Gameweek>,
    opts: &CycleOptions,
) -> (Gameweek, ResourceStatus) {
    if let Some(gw) = requested {
        return (gw, ResourceStatus::NotFetched);
    }

    let fetched = fetch_or_default("game state", opts.fetch_timeout, source.game()).await;
    match (fetched.data.current_event, fetched.status) {
        (Some(gw), status) => (gw, status),
        (None, ResourceStatus::Ready) => (
            fetched.data.next_event.unwrap_or_default(),
            ResourceStatus::Unavailable("season has not started".to_string()),
        ),
        (None, status) => (Gameweek::default(), status),
    }
}

/// Fetch everything for one resolved gameweek.
pub async fn gather_inputs(
    source: &dyn DraftSource,
    league_id: LeagueId,
    gameweek: Gameweek,
    game: ResourceStatus,
    opts: &CycleOptions,
) -> CycleInputs {
    let (league, bootstrap, live, fixtures) = tokio::join!(
        fetch_or_default("league", opts.fetch_timeout, source.league_details(league_id)),
        fetch_or_default("player catalogue", opts.fetch_timeout, source.bootstrap()),
        fetch_or_default("live stats", opts.fetch_timeout, source.live(gameweek)),
        fetch_or_default("fixtures", opts.fetch_timeout, source.fixtures(gameweek)),
    );

    let squads = fetch_squads(source, &league.data.league_entries, gameweek, opts).await;

    CycleInputs {
        gameweek,
        game,
        league,
        bootstrap,
        live,
        fixtures,
        squads,
    }
}

/// One full cycle under the cycle deadline. Always yields a page.
pub async fn run_cycle(
    source: &dyn DraftSource,
    league_id: LeagueId,
    requested: Option<Gameweek>,
    opts: &CycleOptions,
) -> GameweekView {
    let mut resolved = requested;
    let cycle = async {
        let (gameweek, game) = resolve_gameweek(source, requested, opts).await;
        resolved = Some(gameweek);
        let inputs = gather_inputs(source, league_id, gameweek, game, opts).await;
        assemble_view(&inputs, opts)
    };
    let outcome = tokio::time::timeout(opts.cycle_deadline, cycle).await;

    match outcome {
        Ok(view) => {
            info!(
                league = %league_id,
                gameweek = %view.gameweek,
                matchups = view.matchups.len(),
                degraded = view.status.degraded().len(),
                "gameweek view built"
            );
            view
        }
        Err(_) => {
            let reason = format!(
                "cycle exceeded {}s deadline",
                opts.cycle_deadline.as_secs()
            );
            warn!(league = %league_id, %reason, "serving degraded page");
            GameweekView::unavailable(resolved.unwrap_or_default(), &reason)
        }
    }
}
