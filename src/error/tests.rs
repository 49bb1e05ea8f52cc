//! Unit tests for error handling

use super::*;
use std::io;

#[cfg(test)]
mod draft_error_tests {
    use super::*;

    #[test]
    fn test_json_error_conversion() {
        let json_error = serde_json::from_str::<serde_json::Value>("invalid json").unwrap_err();
        let draft_error = DraftError::from(json_error);

        match draft_error {
            DraftError::Json(_) => (),
            _ => panic!("Expected Json error variant"),
        }
    }

    #[test]
    fn test_io_error_conversion() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let draft_error = DraftError::from(io_error);

        match draft_error {
            DraftError::Io(_) => (),
            _ => panic!("Expected Io error variant"),
        }
    }

    #[test]
    fn test_invalid_header_error_conversion() {
        let header_error = reqwest::header::HeaderValue::from_str("invalid\nheader").unwrap_err();
        let draft_error = DraftError::from(header_error);

        match draft_error {
            DraftError::InvalidHeader(_) => (),
            _ => panic!("Expected InvalidHeader error variant"),
        }
    }

    #[test]
    fn test_parse_int_error_conversion() {
        let parse_error = "not_a_number".parse::<u32>().unwrap_err();
        let draft_error = DraftError::from(parse_error);

        match draft_error {
            DraftError::InvalidId(_) => (),
            _ => panic!("Expected InvalidId error variant"),
        }
    }

    #[test]
    fn test_missing_league_id_error() {
        let error = DraftError::MissingLeagueId {
            env_var: "DRAFT_LEAGUE_ID".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("League ID not provided"));
        assert!(error_string.contains("DRAFT_LEAGUE_ID"));
    }

    #[test]
    fn test_timeout_error() {
        let error = DraftError::Timeout {
            resource: "live stats".to_string(),
            seconds: 10,
        };

        assert_eq!(error.to_string(), "Fetching live stats timed out after 10s");
    }

    #[test]
    fn test_snapshot_missing_error() {
        let error = DraftError::SnapshotMissing {
            path: "/tmp/live-5.json".to_string(),
        };

        let error_string = error.to_string();
        assert!(error_string.contains("Snapshot file not found"));
        assert!(error_string.contains("live-5.json"));
    }

    #[test]
    fn test_invalid_config_error() {
        let error = DraftError::InvalidConfig {
            key: "LISTEN_ADDR".to_string(),
            value: "nowhere".to_string(),
        };

        assert_eq!(error.to_string(), "Invalid value for LISTEN_ADDR: nowhere");
    }

    #[test]
    fn test_error_source_chain() {
        let io_error = io::Error::new(io::ErrorKind::NotFound, "File not found");
        let draft_error = DraftError::from(io_error);

        let error_trait: &dyn std::error::Error = &draft_error;
        assert!(error_trait.source().is_some());
    }

    #[test]
    fn test_gameweek_out_of_range_error() {
        let error = DraftError::GameweekOutOfRange {
            gameweek: 0,
            last: 38,
        };
        assert_eq!(error.to_string(), "Gameweek 0 is outside 1-38");
    }

    #[test]
    fn test_result_type_alias_error() {
        fn test_function() -> Result<String> {
            Err(DraftError::SnapshotMissing {
                path: "game.json".to_string(),
            })
        }

        match test_function().unwrap_err() {
            DraftError::SnapshotMissing { path } => assert_eq!(path, "game.json"),
            _ => panic!("Expected SnapshotMissing error"),
        }
    }
}
