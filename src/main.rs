//! Entry point: parse CLI and dispatch to command handlers.

use clap::Parser;
use draft_live::{
    cli::{Commands, DraftLive},
    commands::{common::apply_source_args, render::handle_render, serve::handle_serve},
    config::AppConfig,
};
use tracing_subscriber::EnvFilter;

/// Run the CLI.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let app = DraftLive::parse();
    let config = AppConfig::from_env()?;

    match app.command {
        Commands::Serve { source, listen } => {
            let mut config = apply_source_args(config, &source);
            if let Some(addr) = listen {
                config.listen_addr = addr;
            }
            handle_serve(&config).await?
        }

        Commands::Render {
            source,
            gameweek,
            json,
        } => {
            let config = apply_source_args(config, &source);
            handle_render(&config, gameweek, json).await?
        }
    }

    Ok(())
}
