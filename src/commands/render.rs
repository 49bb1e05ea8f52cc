//! `render` command: one cycle printed to stdout.

use crate::{
    cli::types::Gameweek,
    commands::gameweek::{run_cycle, CycleOptions},
    config::AppConfig,
    render::render_page,
    Result,
};

use super::common::build_source;

/// Compute `gameweek` (or the current one) and print it as HTML or JSON.
pub async fn handle_render(
    config: &AppConfig,
    gameweek: Option<Gameweek>,
    as_json: bool,
) -> Result<()> {
    let gameweek = gameweek
        .map(|gw| gw.within_season(config.max_gameweek))
        .transpose()?;
    let league_id = config.require_league_id()?;
    let source = build_source(config)?;
    let opts = CycleOptions::from(config);

    let view = run_cycle(source.as_ref(), league_id, gameweek, &opts).await;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", render_page(&view));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cli::types::LeagueId, DraftError};
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_rejects_gameweek_outside_season() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig {
            league_id: Some(LeagueId::new(29143)),
            snapshot_dir: Some(dir.path().to_path_buf()),
            ..AppConfig::default()
        };

        for gw in [0, 39] {
            match handle_render(&config, Some(Gameweek::new(gw)), true).await {
                Err(DraftError::GameweekOutOfRange { gameweek, last }) => {
                    assert_eq!(gameweek, gw);
                    assert_eq!(last, 38);
                }
                other => panic!("Expected GameweekOutOfRange, got {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_renders_degraded_page_from_empty_snapshot() {
        let dir = TempDir::new().unwrap();
        let config = AppConfig {
            league_id: Some(LeagueId::new(29143)),
            snapshot_dir: Some(dir.path().to_path_buf()),
            ..AppConfig::default()
        };

        assert!(handle_render(&config, Some(Gameweek::new(38)), false)
            .await
            .is_ok());
    }
}
