//! Helpers shared by the `serve` and `render` commands.

use std::sync::Arc;

use tracing::info;

use crate::{
    cli::SourceArgs,
    config::AppConfig,
    engine::squad::MultiplierPolicy,
    fpl::{DraftSource, HttpSource, SnapshotSource},
    Result,
};

/// Layer command-line flags over the environment configuration.
pub fn apply_source_args(mut config: AppConfig, args: &SourceArgs) -> AppConfig {
    if let Some(id) = args.league_id {
        config.league_id = Some(id);
    }
    if let Some(dir) = &args.snapshot_dir {
        config.snapshot_dir = Some(dir.clone());
    }
    if args.apply_multiplier {
        config.multiplier_policy = MultiplierPolicy::Apply;
    }
    config
}

/// The snapshot directory when one is configured, the live API otherwise.
pub fn build_source(config: &AppConfig) -> Result<Arc<dyn DraftSource>> {
    match &config.snapshot_dir {
        Some(dir) => {
            info!(dir = %dir.display(), "reading resources from snapshot files");
            Ok(Arc::new(SnapshotSource::new(dir.clone())))
        }
        None => {
            info!(base = %config.api_base, "reading resources from the draft API");
            Ok(Arc::new(HttpSource::new(
                config.api_base.clone(),
                config.fetch_timeout,
            )?))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::types::LeagueId;
    use std::path::PathBuf;

    fn args(league: Option<u32>, dir: Option<&str>, apply: bool) -> SourceArgs {
        SourceArgs {
            league_id: league.map(LeagueId::new),
            snapshot_dir: dir.map(PathBuf::from),
            apply_multiplier: apply,
        }
    }

    #[test]
    fn test_flags_override_environment() {
        let base = AppConfig {
            league_id: Some(LeagueId::new(1)),
            ..AppConfig::default()
        };
        let config = apply_source_args(base, &args(Some(29143), Some("/tmp/snap"), true));

        assert_eq!(config.league_id, Some(LeagueId::new(29143)));
        assert_eq!(config.snapshot_dir, Some(PathBuf::from("/tmp/snap")));
        assert_eq!(config.multiplier_policy, MultiplierPolicy::Apply);
    }

    #[test]
    fn test_absent_flags_keep_environment() {
        let base = AppConfig {
            league_id: Some(LeagueId::new(7)),
            multiplier_policy: MultiplierPolicy::Apply,
            ..AppConfig::default()
        };
        let config = apply_source_args(base, &args(None, None, false));

        assert_eq!(config.league_id, Some(LeagueId::new(7)));
        assert!(config.snapshot_dir.is_none());
        assert_eq!(config.multiplier_policy, MultiplierPolicy::Apply);
    }

    #[test]
    fn test_build_source_from_either_backend() {
        assert!(build_source(&AppConfig::default()).is_ok());

        let config = AppConfig {
            snapshot_dir: Some(PathBuf::from("/nonexistent")),
            ..AppConfig::default()
        };
        assert!(build_source(&config).is_ok());
    }
}
