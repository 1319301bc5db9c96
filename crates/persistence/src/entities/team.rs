//! Team entities (database row mappings).

use chrono::{DateTime, Utc};
use domain::models::{Team, TeamRoster};
use sqlx::FromRow;
use uuid::Uuid;

/// Database row mapping for the teams table.
#[derive(Debug, Clone, FromRow)]
pub struct TeamEntity {
    pub id: Uuid,
    pub name: String,
    pub sport_id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<TeamEntity> for Team {
    fn from(entity: TeamEntity) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            sport_id: entity.sport_id,
        }
    }
}

/// A team joined with its sport bounds, active captain and active player
/// count, loaded in one query for the validation engine.
#[derive(Debug, Clone, FromRow)]
pub struct TeamRosterEntity {
    pub team_id: Uuid,
    pub name: String,
    pub sport_id: Uuid,
    pub sport_name: String,
    pub min_players: i32,
    pub max_players: i32,
    pub captain_user_id: Option<Uuid>,
    pub active_player_count: i64,
}

impl From<TeamRosterEntity> for TeamRoster {
    fn from(entity: TeamRosterEntity) -> Self {
        Self {
            team_id: entity.team_id,
            name: entity.name,
            sport_id: entity.sport_id,
            sport_name: entity.sport_name,
            min_players: entity.min_players,
            max_players: entity.max_players,
            captain_user_id: entity.captain_user_id,
            active_player_count: entity.active_player_count,
        }
    }
}
