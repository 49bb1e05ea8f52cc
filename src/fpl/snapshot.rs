// src/fpl/snapshot.rs
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

use crate::{
    cli::types::{EntryId, Gameweek, LeagueId},
    core::{snapshot_path, try_read_to_string},
    error::DraftError,
    fpl::{
        source::DraftSource,
        types::{Bootstrap, EntryPicks, Fixture, GameState, LeagueDetails, LiveStats},
    },
    Result,
};

/// Reads upstream resources saved as JSON files in one directory:
/// `game.json`, `league.json`, `bootstrap-static.json`, `live-{gw}.json`,
/// `fixtures-{gw}.json` and `entry-{entry}-{gw}.json`.
///
/// The league file holds a single league, so `league_details` ignores the id.
#[derive(Debug, Clone)]
pub struct SnapshotSource {
    dir: PathBuf,
}

impl SnapshotSource {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn read<T: DeserializeOwned>(&self, resource: &str) -> Result<T> {
        let path = snapshot_path(&self.dir, resource);
        let s = try_read_to_string(&path).ok_or_else(|| DraftError::SnapshotMissing {
            path: path.display().to_string(),
        })?;
        Ok(serde_json::from_str(&s)?)
    }
}

#[async_trait]
impl DraftSource for SnapshotSource {
    async fn game(&self) -> Result<GameState> {
        self.read("game")
    }

    async fn league_details(&self, _league_id: LeagueId) -> Result<LeagueDetails> {
        self.read("league")
    }

    async fn bootstrap(&self) -> Result<Bootstrap> {
        self.read("bootstrap-static")
    }

    async fn live(&self, gameweek: Gameweek) -> Result<LiveStats> {
        self.read(&format!("live-{}", gameweek))
    }

    async fn fixtures(&self, gameweek: Gameweek) -> Result<Vec<Fixture>> {
        self.read(&format!("fixtures-{}", gameweek))
    }

    async fn entry_picks(&self, entry: EntryId, gameweek: Gameweek) -> Result<EntryPicks> {
        self.read(&format!("entry-{}-{}", entry, gameweek))
    }
}
