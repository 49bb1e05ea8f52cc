//! The data-fetch seam: everything the gameweek assembly reads from upstream.

use async_trait::async_trait;

use crate::{
    cli::types::{EntryId, Gameweek, LeagueId},
    fpl::types::{Bootstrap, EntryPicks, Fixture, GameState, LeagueDetails, LiveStats},
    Result,
};

/// Typed access to the draft API resources. Implementations return an error
/// on transport or decode failure; degrading to defaults is the caller's job.
#[async_trait]
pub trait DraftSource: Send + Sync {
    async fn game(&self) -> Result<GameState>;

    async fn league_details(&self, league_id: LeagueId) -> Result<LeagueDetails>;

    async fn bootstrap(&self) -> Result<Bootstrap>;

    async fn live(&self, gameweek: Gameweek) -> Result<LiveStats>;

    async fn fixtures(&self, gameweek: Gameweek) -> Result<Vec<Fixture>>;

    async fn entry_picks(&self, entry: EntryId, gameweek: Gameweek) -> Result<EntryPicks>;
}
