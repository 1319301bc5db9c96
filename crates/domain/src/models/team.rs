//! Team domain models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A team as stored, without roster details.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Team {
    pub id: Uuid,
    pub name: String,
    pub sport_id: Uuid,
}

/// A team with its roster summary loaded eagerly: sport bounds, the active
/// captain (if any) and the count of active players.
///
/// "Active" means the membership link has not been marked as left. This is
/// the input shape the validation engine consumes; the roster repository
/// produces it in one read so checks never trigger further loads.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TeamRoster {
    pub team_id: Uuid,
    pub name: String,
    pub sport_id: Uuid,
    pub sport_name: String,
    pub min_players: i32,
    pub max_players: i32,
    /// User id of the active captain link, if the team has one.
    pub captain_user_id: Option<Uuid>,
    pub active_player_count: i64,
}

impl TeamRoster {
    /// Whether an active captain link exists.
    pub fn has_captain(&self) -> bool {
        self.captain_user_id.is_some()
    }

    /// Whether the active player count satisfies the sport's bounds.
    pub fn player_count_in_bounds(&self) -> bool {
        self.active_player_count >= self.min_players as i64
            && self.active_player_count <= self.max_players as i64
    }

    /// Whether the team can take one more active member.
    pub fn has_open_seat(&self) -> bool {
        self.active_player_count < self.max_players as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(count: i64, min: i32, max: i32) -> TeamRoster {
        TeamRoster {
            team_id: Uuid::nil(),
            name: "Lions".to_string(),
            sport_id: Uuid::nil(),
            sport_name: "Football".to_string(),
            min_players: min,
            max_players: max,
            captain_user_id: Some(Uuid::nil()),
            active_player_count: count,
        }
    }

    #[test]
    fn test_player_count_in_bounds() {
        assert!(roster(8, 8, 11).player_count_in_bounds());
        assert!(roster(11, 8, 11).player_count_in_bounds());
        assert!(!roster(7, 8, 11).player_count_in_bounds());
        assert!(!roster(12, 8, 11).player_count_in_bounds());
    }

    #[test]
    fn test_has_open_seat() {
        assert!(roster(10, 8, 11).has_open_seat());
        assert!(!roster(11, 8, 11).has_open_seat());
    }

    #[test]
    fn test_has_captain() {
        let mut team = roster(8, 8, 11);
        assert!(team.has_captain());
        team.captain_user_id = None;
        assert!(!team.has_captain());
    }
}
