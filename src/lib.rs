//! Fantasy Draft League Live Scores Library
//!
//! Polls a fantasy draft league's backend, merges live fixture statistics,
//! squads and standings into per-manager scores, and renders a status page.
//!
//! ## Features
//!
//! - **Provisional Bonus**: 3/2/1 bonus from in-match BPS until the official figure lands
//! - **Live Totals**: Starting eleven summed per manager, bench shown but not counted
//! - **Standings**: League table ordered by points, differential as tie-break
//! - **Matchups**: Current and next gameweek head-to-head pairings
//! - **Graceful Degradation**: Every upstream failure becomes an empty section with a status
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use draft_live::{
//!     commands::gameweek::{run_cycle, CycleOptions},
//!     fpl::SnapshotSource,
//!     render::render_page,
//!     Gameweek, LeagueId,
//! };
//!
//! # async fn example() {
//! let source = SnapshotSource::new("./snapshots");
//! let opts = CycleOptions::default();
//!
//! let view = run_cycle(&source, LeagueId::new(29143), Some(Gameweek::new(5)), &opts).await;
//! println!("{}", render_page(&view));
//! # }
//! ```
//!
//! ## Environment Configuration
//!
//! Set your league ID to avoid passing it in every command:
//! ```bash
//! export DRAFT_LEAGUE_ID=29143
//! ```

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod engine;
pub mod error;
pub mod fpl;
pub mod render;

// Re-export commonly used types
pub use cli::types::{EntryId, Gameweek, LeagueId, ManagerId, PlayerId, TeamId};
pub use error::{DraftError, Result};

pub const LEAGUE_ID_ENV_VAR: &str = "DRAFT_LEAGUE_ID";
