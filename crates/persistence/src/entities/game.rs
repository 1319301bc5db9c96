//! Match entities (database row mappings).

use chrono::{DateTime, Utc};
use domain::models::{Game, MatchStatus, MatchType, TeamMatch};
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum for match_type that maps to the PostgreSQL enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "match_type", rename_all = "lowercase")]
pub enum MatchTypeDb {
    Public,
    Private,
}

impl From<MatchTypeDb> for MatchType {
    fn from(db: MatchTypeDb) -> Self {
        match db {
            MatchTypeDb::Public => MatchType::Public,
            MatchTypeDb::Private => MatchType::Private,
        }
    }
}

impl From<MatchType> for MatchTypeDb {
    fn from(match_type: MatchType) -> Self {
        match match_type {
            MatchType::Public => MatchTypeDb::Public,
            MatchType::Private => MatchTypeDb::Private,
        }
    }
}

/// Database enum for match_status that maps to the PostgreSQL enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "match_status", rename_all = "lowercase")]
pub enum MatchStatusDb {
    Pending,
    Confirmed,
    Cancelled,
}

impl From<MatchStatusDb> for MatchStatus {
    fn from(db: MatchStatusDb) -> Self {
        match db {
            MatchStatusDb::Pending => MatchStatus::Pending,
            MatchStatusDb::Confirmed => MatchStatus::Confirmed,
            MatchStatusDb::Cancelled => MatchStatus::Cancelled,
        }
    }
}

impl From<MatchStatus> for MatchStatusDb {
    fn from(status: MatchStatus) -> Self {
        match status {
            MatchStatus::Pending => MatchStatusDb::Pending,
            MatchStatus::Confirmed => MatchStatusDb::Confirmed,
            MatchStatus::Cancelled => MatchStatusDb::Cancelled,
        }
    }
}

/// Database row mapping for the matches table.
#[derive(Debug, Clone, FromRow)]
pub struct GameEntity {
    pub id: Uuid,
    #[sqlx(rename = "type")]
    pub match_type: MatchTypeDb,
    pub status: MatchStatusDb,
    pub created_at: DateTime<Utc>,
}

impl From<GameEntity> for Game {
    fn from(entity: GameEntity) -> Self {
        Self {
            id: entity.id,
            match_type: entity.match_type.into(),
            status: entity.status.into(),
            created_at: entity.created_at,
        }
    }
}

/// Database row mapping for the team_matches table.
#[derive(Debug, Clone, FromRow)]
pub struct TeamMatchEntity {
    pub id: Uuid,
    pub team_id: Uuid,
    pub match_id: Uuid,
    pub score: i32,
    pub is_winner: bool,
}

impl From<TeamMatchEntity> for TeamMatch {
    fn from(entity: TeamMatchEntity) -> Self {
        Self {
            id: entity.id,
            team_id: entity.team_id,
            match_id: entity.match_id,
            score: entity.score,
            is_winner: entity.is_winner,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_status_conversion_round_trip() {
        for status in [
            MatchStatus::Pending,
            MatchStatus::Confirmed,
            MatchStatus::Cancelled,
        ] {
            let db: MatchStatusDb = status.into();
            assert_eq!(MatchStatus::from(db), status);
        }
    }

    #[test]
    fn test_match_type_conversion_round_trip() {
        for match_type in [MatchType::Public, MatchType::Private] {
            let db: MatchTypeDb = match_type.into();
            assert_eq!(MatchType::from(db), match_type);
        }
    }
}
