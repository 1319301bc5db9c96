//! Match repository for database operations.

use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::entities::{GameEntity, MatchStatusDb, MatchTypeDb, TeamMatchEntity};
use crate::metrics::QueryTimer;

/// Repository for match-related database operations.
#[derive(Clone)]
pub struct GameRepository {
    pool: PgPool,
}

impl GameRepository {
    /// Creates a new GameRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Find a match by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<GameEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_match_by_id");
        let result = sqlx::query_as::<_, GameEntity>(
            r#"
            SELECT id, type, status, created_at
            FROM matches
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }

    /// Team assignments of a match.
    pub async fn team_matches(&self, match_id: Uuid) -> Result<Vec<TeamMatchEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_team_matches");
        let result = sqlx::query_as::<_, TeamMatchEntity>(
            r#"
            SELECT id, team_id, match_id, score, is_winner
            FROM team_matches
            WHERE match_id = $1
            ORDER BY created_at
            "#,
        )
        .bind(match_id)
        .fetch_all(&self.pool)
        .await;
        timer.record();
        result
    }
}

/// Create a match in `pending` status.
pub async fn create_match_tx(
    tx: &mut Transaction<'_, Postgres>,
    match_type: MatchTypeDb,
) -> Result<GameEntity, sqlx::Error> {
    sqlx::query_as::<_, GameEntity>(
        r#"
        INSERT INTO matches (type, status)
        VALUES ($1, 'pending')
        RETURNING id, type, status, created_at
        "#,
    )
    .bind(match_type)
    .fetch_one(&mut **tx)
    .await
}

/// Find a match by ID within a transaction.
pub async fn find_match_tx(
    tx: &mut Transaction<'_, Postgres>,
    id: Uuid,
) -> Result<Option<GameEntity>, sqlx::Error> {
    sqlx::query_as::<_, GameEntity>(
        r#"
        SELECT id, type, status, created_at
        FROM matches
        WHERE id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(&mut **tx)
    .await
}

/// Assign a team to a match (score 0, no winner yet).
pub async fn add_team_match_tx(
    tx: &mut Transaction<'_, Postgres>,
    match_id: Uuid,
    team_id: Uuid,
) -> Result<TeamMatchEntity, sqlx::Error> {
    sqlx::query_as::<_, TeamMatchEntity>(
        r#"
        INSERT INTO team_matches (team_id, match_id, score, is_winner)
        VALUES ($1, $2, 0, FALSE)
        RETURNING id, team_id, match_id, score, is_winner
        "#,
    )
    .bind(team_id)
    .bind(match_id)
    .fetch_one(&mut **tx)
    .await
}

/// Move a match from one status to another.
///
/// Conditional on the current status so a match already resolved by another
/// path is left untouched; returns the number of rows changed.
pub async fn transition_match_tx(
    tx: &mut Transaction<'_, Postgres>,
    match_id: Uuid,
    from: MatchStatusDb,
    to: MatchStatusDb,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE matches
        SET status = $3, updated_at = NOW()
        WHERE id = $1 AND status = $2
        "#,
    )
    .bind(match_id)
    .bind(from)
    .bind(to)
    .execute(&mut **tx)
    .await?;
    Ok(result.rows_affected())
}
