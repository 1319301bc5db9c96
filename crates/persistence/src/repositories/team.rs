//! Team roster repository for database operations.
//!
//! Read-only to the workflows except for `add_member_tx`, which the
//! invitation engine uses when a team invitation is accepted.

use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::entities::{TeamEntity, TeamRosterEntity};
use crate::metrics::QueryTimer;

/// Shared SELECT for roster summaries: team + sport bounds + active captain
/// + active player count in one query.
const ROSTER_SELECT: &str = r#"
    SELECT t.id AS team_id, t.name, t.sport_id, s.name AS sport_name,
           s.min_players, s.max_players,
           (SELECT l.user_id FROM user_team_links l
             WHERE l.team_id = t.id AND l.is_captain AND NOT l.has_left_team
             LIMIT 1) AS captain_user_id,
           (SELECT COUNT(*) FROM user_team_links l
             WHERE l.team_id = t.id AND NOT l.has_left_team) AS active_player_count
    FROM teams t
    JOIN sports s ON s.id = t.sport_id
"#;

/// Repository for team-roster database operations.
#[derive(Clone)]
pub struct TeamRepository {
    pool: PgPool,
}

impl TeamRepository {
    /// Creates a new TeamRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Find a team by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<TeamEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_team_by_id");
        let result = sqlx::query_as::<_, TeamEntity>(
            r#"
            SELECT id, name, sport_id, created_at
            FROM teams
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Load a team's roster summary.
    pub async fn find_roster(&self, team_id: Uuid) -> Result<Option<TeamRosterEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_team_roster");
        let sql = format!("{ROSTER_SELECT} WHERE t.id = $1");
        let result = sqlx::query_as::<_, TeamRosterEntity>(&sql)
            .bind(team_id)
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        result
    }
}

/// Load a team's roster summary within a transaction.
pub async fn find_roster_tx(
    tx: &mut Transaction<'_, Postgres>,
    team_id: Uuid,
) -> Result<Option<TeamRosterEntity>, sqlx::Error> {
    let sql = format!("{ROSTER_SELECT} WHERE t.id = $1");
    sqlx::query_as::<_, TeamRosterEntity>(&sql)
        .bind(team_id)
        .fetch_optional(&mut **tx)
        .await
}

/// Find the team a user actively captains, if any.
pub async fn find_captained_roster_tx(
    tx: &mut Transaction<'_, Postgres>,
    user_id: Uuid,
) -> Result<Option<TeamRosterEntity>, sqlx::Error> {
    let sql = format!(
        r#"{ROSTER_SELECT}
        WHERE EXISTS (
            SELECT 1 FROM user_team_links l
            WHERE l.team_id = t.id AND l.user_id = $1
              AND l.is_captain AND NOT l.has_left_team
        )
        LIMIT 1"#
    );
    sqlx::query_as::<_, TeamRosterEntity>(&sql)
        .bind(user_id)
        .fetch_optional(&mut **tx)
        .await
}

/// Find the team a user actively captains in a given sport, if any.
pub async fn find_captained_roster_in_sport_tx(
    tx: &mut Transaction<'_, Postgres>,
    user_id: Uuid,
    sport_id: Uuid,
) -> Result<Option<TeamRosterEntity>, sqlx::Error> {
    let sql = format!(
        r#"{ROSTER_SELECT}
        WHERE t.sport_id = $2 AND EXISTS (
            SELECT 1 FROM user_team_links l
            WHERE l.team_id = t.id AND l.user_id = $1
              AND l.is_captain AND NOT l.has_left_team
        )
        LIMIT 1"#
    );
    sqlx::query_as::<_, TeamRosterEntity>(&sql)
        .bind(user_id)
        .bind(sport_id)
        .fetch_optional(&mut **tx)
        .await
}

/// Find the team participating in a match that a user actively captains.
pub async fn find_captained_roster_in_match_tx(
    tx: &mut Transaction<'_, Postgres>,
    match_id: Uuid,
    user_id: Uuid,
) -> Result<Option<TeamRosterEntity>, sqlx::Error> {
    let sql = format!(
        r#"{ROSTER_SELECT}
        JOIN team_matches tm ON tm.team_id = t.id
        WHERE tm.match_id = $1 AND EXISTS (
            SELECT 1 FROM user_team_links l
            WHERE l.team_id = t.id AND l.user_id = $2
              AND l.is_captain AND NOT l.has_left_team
        )
        LIMIT 1"#
    );
    sqlx::query_as::<_, TeamRosterEntity>(&sql)
        .bind(match_id)
        .bind(user_id)
        .fetch_optional(&mut **tx)
        .await
}

/// Add a user as a non-captain active member of a team.
pub async fn add_member_tx(
    tx: &mut Transaction<'_, Postgres>,
    team_id: Uuid,
    user_id: Uuid,
) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        INSERT INTO user_team_links (user_id, team_id, is_captain, has_left_team, start_date)
        VALUES ($1, $2, FALSE, FALSE, NOW())
        "#,
    )
    .bind(user_id)
    .bind(team_id)
    .execute(&mut **tx)
    .await?;
    Ok(())
}
