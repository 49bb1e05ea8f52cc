//! Service configuration loaded from environment variables.
//!
//! All settings come from environment variables (or a `.env` file via
//! `dotenvy`); command-line flags override them in `main`.

use std::{net::SocketAddr, path::PathBuf, time::Duration};

use crate::{
    cli::types::{Gameweek, LeagueId, SEASON_GAMEWEEKS},
    engine::squad::MultiplierPolicy,
    error::{DraftError, Result},
    LEAGUE_ID_ENV_VAR,
};

pub const DEFAULT_API_BASE: &str = "https://draft.premierleague.com/api";

/// Top-level configuration, loaded once at startup via [`AppConfig::from_env`].
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// League to display; required before a cycle can run.
    pub league_id: Option<LeagueId>,
    /// Upstream API base URL, without trailing slash.
    pub api_base: String,
    /// Socket address for `serve`.
    pub listen_addr: SocketAddr,
    /// Timeout applied to every single upstream fetch.
    pub fetch_timeout: Duration,
    /// Budget for one whole rendering cycle.
    pub cycle_deadline: Duration,
    /// Max in-flight squad fetches.
    pub fetch_concurrency: usize,
    /// Last gameweek of the season.
    pub max_gameweek: Gameweek,
    pub multiplier_policy: MultiplierPolicy,
    /// When set, resources are read from JSON files in this directory.
    pub snapshot_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            league_id: None,
            api_base: DEFAULT_API_BASE.to_string(),
            listen_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            fetch_timeout: Duration::from_secs(10),
            cycle_deadline: Duration::from_secs(30),
            fetch_concurrency: 6,
            max_gameweek: Gameweek::new(SEASON_GAMEWEEKS),
            multiplier_policy: MultiplierPolicy::Ignore,
            snapshot_dir: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to defaults when a variable is unset or unparsable, except
    /// for `LISTEN_ADDR` and `DRAFT_LEAGUE_ID`, which are rejected when malformed.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let defaults = Self::default();

        let league_id = match std::env::var(LEAGUE_ID_ENV_VAR) {
            Ok(raw) => Some(raw.trim().parse::<LeagueId>()?),
            Err(_) => None,
        };

        let listen_addr = match std::env::var("LISTEN_ADDR") {
            Ok(raw) => raw.parse().map_err(|_| DraftError::InvalidConfig {
                key: "LISTEN_ADDR".to_string(),
                value: raw.clone(),
            })?,
            Err(_) => defaults.listen_addr,
        };

        let api_base = std::env::var("DRAFT_API_BASE")
            .map(|s| s.trim_end_matches('/').to_string())
            .unwrap_or(defaults.api_base);

        let multiplier_policy = if parse_env_bool("DRAFT_APPLY_MULTIPLIER", false) {
            MultiplierPolicy::Apply
        } else {
            MultiplierPolicy::Ignore
        };

        Ok(Self {
            league_id,
            api_base,
            listen_addr,
            fetch_timeout: Duration::from_secs(parse_env("DRAFT_FETCH_TIMEOUT_SECS", 10)),
            cycle_deadline: Duration::from_secs(parse_env("DRAFT_CYCLE_DEADLINE_SECS", 30)),
            fetch_concurrency: parse_env("DRAFT_FETCH_CONCURRENCY", 6usize).max(1),
            max_gameweek: Gameweek::new(parse_env("DRAFT_MAX_GAMEWEEK", SEASON_GAMEWEEKS)),
            multiplier_policy,
            snapshot_dir: std::env::var("DRAFT_SNAPSHOT_DIR").ok().map(PathBuf::from),
        })
    }

    /// The configured league, or the error naming the env var to set.
    pub fn require_league_id(&self) -> Result<LeagueId> {
        self.league_id.ok_or_else(|| DraftError::MissingLeagueId {
            env_var: LEAGUE_ID_ENV_VAR.to_string(),
        })
    }
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Accepts `true`/`1`/`false`/`0` (case-insensitive).
fn parse_env_bool(key: &str, default: bool) -> bool {
    match std::env::var(key)
        .ok()
        .map(|v| v.trim().to_ascii_lowercase())
        .as_deref()
    {
        Some("true") | Some("1") => true,
        Some("false") | Some("0") => false,
        _ => default,
    }
}
