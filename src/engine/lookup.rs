//! Name tables for one aggregation run, built from the player catalogue.

use std::collections::HashMap;

use crate::{
    cli::types::{PlayerId, TeamId},
    fpl::types::Bootstrap,
};

/// Shown for a club or position the catalogue does not know.
pub const UNKNOWN_LABEL: &str = "NA";

#[derive(Debug, Clone)]
struct PlayerRef {
    name: String,
    team: TeamId,
    element_type: u8,
}

/// Player, club and position names. Lookups never fail: a missing player
/// has a blank name, a missing club or position reads [`UNKNOWN_LABEL`].
#[derive(Debug, Clone, Default)]
pub struct LookupTables {
    players: HashMap<PlayerId, PlayerRef>,
    teams: HashMap<TeamId, String>,
    positions: HashMap<u8, String>,
}

impl LookupTables {
    pub fn from_bootstrap(bootstrap: &Bootstrap) -> Self {
        let players = bootstrap
            .elements
            .iter()
            .map(|p| {
                (
                    p.id,
                    PlayerRef {
                        name: p.web_name.clone(),
                        team: p.team,
                        element_type: p.element_type,
                    },
                )
            })
            .collect();

        let teams = bootstrap
            .teams
            .iter()
            .map(|t| (t.id, t.short_name.clone()))
            .collect();

        let positions = bootstrap
            .element_types
            .iter()
            .map(|et| (et.id, et.singular_name_short.clone()))
            .collect();

        Self {
            players,
            teams,
            positions,
        }
    }

    pub fn player_name(&self, player: PlayerId) -> &str {
        self.players
            .get(&player)
            .map(|p| p.name.as_str())
            .unwrap_or("")
    }

    pub fn team_short_name(&self, team: TeamId) -> &str {
        self.teams
            .get(&team)
            .map(String::as_str)
            .unwrap_or(UNKNOWN_LABEL)
    }

    pub fn player_team(&self, player: PlayerId) -> &str {
        self.players
            .get(&player)
            .map(|p| self.team_short_name(p.team))
            .unwrap_or(UNKNOWN_LABEL)
    }

    pub fn player_position(&self, player: PlayerId) -> &str {
        self.players
            .get(&player)
            .and_then(|p| self.positions.get(&p.element_type))
            .map(String::as_str)
            .unwrap_or(UNKNOWN_LABEL)
    }
}
