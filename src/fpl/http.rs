use async_trait::async_trait;
use reqwest::{header::HeaderMap, Client};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::debug;

use crate::{
    cli::types::{EntryId, Gameweek, LeagueId},
    core::default_header_map,
    fpl::{
        source::DraftSource,
        types::{Bootstrap, EntryPicks, Fixture, GameState, LeagueDetails, LiveStats},
    },
    Result,
};


/// Reads the draft API over HTTPS.
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    base_url: String,
    headers: HeaderMap,
}

impl HttpSource {
    /// `timeout` bounds each request, connect through body.
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            headers: default_header_map()?,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "fetching");

        let res = self
            .client
            .get(&url)
            .headers(self.headers.clone())
            .send()
            .await?
            .error_for_status()?
            .json::<T>()
            .await?;

        Ok(res)
    }
}

#[async_trait]
impl DraftSource for HttpSource {
    async fn game(&self) -> Result<GameState> {
        self.get_json("/game").await
    }

    async fn league_details(&self, league_id: LeagueId) -> Result<LeagueDetails> {
        self.get_json(&format!("/league/{}/details", league_id)).await
    }

    async fn bootstrap(&self) -> Result<Bootstrap> {
        self.get_json("/bootstrap-static").await
    }

    async fn live(&self, gameweek: Gameweek) -> Result<LiveStats> {
        self.get_json(&format!("/event/{}/live", gameweek)).await
    }

    async fn fixtures(&self, gameweek: Gameweek) -> Result<Vec<Fixture>> {
        self.get_json(&format!("/event/{}/fixtures", gameweek)).await
    }

    async fn entry_picks(&self, entry: EntryId, gameweek: Gameweek) -> Result<EntryPicks> {
        self.get_json(&format!("/entry/{}/event/{}", entry, gameweek))
            .await
    }
}
