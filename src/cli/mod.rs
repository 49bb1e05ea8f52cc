//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::{net::SocketAddr, path::PathBuf};
use types::{Gameweek, LeagueId};

/// Source arguments shared between commands
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// League ID (or set `DRAFT_LEAGUE_ID` env var).
    #[clap(long, short)]
    pub league_id: Option<LeagueId>,

    /// Read upstream resources from JSON files in this directory instead of the API
    /// (or set `DRAFT_SNAPSHOT_DIR`).
    #[clap(long)]
    pub snapshot_dir: Option<PathBuf>,

    /// Apply each pick's points multiplier to starters (or set `DRAFT_APPLY_MULTIPLIER`).
    #[clap(long)]
    pub apply_multiplier: bool,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the live status page over HTTP, recomputed on every request.
    Serve {
        #[clap(flatten)]
        source: SourceArgs,

        /// Address to bind (or set `LISTEN_ADDR`).
        #[clap(long)]
        listen: Option<SocketAddr>,
    },

    /// Compute one gameweek and print it to stdout.
    Render {
        #[clap(flatten)]
        source: SourceArgs,

        /// Gameweek to render; defaults to the upstream's current gameweek.
        #[clap(long, short)]
        gameweek: Option<Gameweek>,

        /// Output the view model as JSON instead of HTML.
        #[clap(long)]
        json: bool,
    },
}

#[derive(Debug, Parser)]
#[clap(name = "draft-live", about = "Live scores for a fantasy draft league")]
pub struct DraftLive {
    #[clap(subcommand)]
    pub command: Commands,
}
