//! Invitation repository for database operations.

use chrono::{DateTime, Utc};
use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::entities::{InvitationEntity, InvitationKindDb, InvitationStatusDb};
use crate::metrics::QueryTimer;

const INVITATION_COLUMNS: &str =
    "id, sender_id, receiver_id, type, status, invitable_type, invitable_id, created_at";

/// Repository for invitation-related database operations.
#[derive(Clone)]
pub struct InvitationRepository {
    pool: PgPool,
}

impl InvitationRepository {
    /// Creates a new InvitationRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Find an invitation by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<InvitationEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_invitation_by_id");
        let sql = format!("SELECT {INVITATION_COLUMNS} FROM invitations WHERE id = $1");
        let result = sqlx::query_as::<_, InvitationEntity>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Match invitations ripe for the expire pass: still pending or already
    /// rejected, created at or before the cutoff.
    pub async fn find_expirable_match_invitations(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<InvitationEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_expirable_match_invitations");
        let sql = format!(
            r#"
            SELECT {INVITATION_COLUMNS}
            FROM invitations
            WHERE type = 'match'
              AND status IN ('pending', 'rejected')
              AND created_at <= $1
            ORDER BY created_at
            "#
        );
        let result = sqlx::query_as::<_, InvitationEntity>(&sql)
            .bind(cutoff)
            .fetch_all(&self.pool)
            .await;
        timer.record();
        result
    }

    /// Accepted match invitations still inside the grace window, for the
    /// confirm pass.
    pub async fn find_accepted_match_invitations_since(
        &self,
        cutoff: DateTime<Utc>,
    ) -> Result<Vec<InvitationEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_accepted_match_invitations");
        let sql = format!(
            r#"
            SELECT {INVITATION_COLUMNS}
            FROM invitations
            WHERE type = 'match'
              AND status = 'accepted'
              AND created_at > $1
            ORDER BY created_at
            "#
        );
        let result = sqlx::query_as::<_, InvitationEntity>(&sql)
            .bind(cutoff)
            .fetch_all(&self.pool)
            .await;
        timer.record();
        result
    }
}

/// Insert a pending invitation.
pub async fn create_invitation_tx(
    tx: &mut Transaction<'_, Postgres>,
    sender_id: Uuid,
    receiver_id: Uuid,
    kind: InvitationKindDb,
    invitable_type: Option<&str>,
    invitable_id: Option<Uuid>,
) -> Result<InvitationEntity, sqlx::Error> {
    let sql = format!(
        r#"
        INSERT INTO invitations (sender_id, receiver_id, type, status, invitable_type, invitable_id)
        VALUES ($1, $2, $3, 'pending', $4, $5)
        RETURNING {INVITATION_COLUMNS}
        "#
    );
    sqlx::query_as::<_, InvitationEntity>(&sql)
        .bind(sender_id)
        .bind(receiver_id)
        .bind(kind)
        .bind(invitable_type)
        .bind(invitable_id)
        .fetch_one(&mut **tx)
        .await
}

/// Whether an active (pending/accepted) invitation already exists for the
/// (sender, receiver, kind, target) tuple.
pub async fn active_duplicate_exists_tx(
    tx: &mut Transaction<'_, Postgres>,
    sender_id: Uuid,
    receiver_id: Uuid,
    kind: InvitationKindDb,
    invitable_id: Option<Uuid>,
) -> Result<bool, sqlx::Error> {
    sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM invitations
            WHERE sender_id = $1
              AND receiver_id = $2
              AND type = $3
              AND invitable_id IS NOT DISTINCT FROM $4
              AND status IN ('pending', 'accepted')
        )
        "#,
    )
    .bind(sender_id)
    .bind(receiver_id)
    .bind(kind)
    .bind(invitable_id)
    .fetch_one(&mut **tx)
    .await
}

/// Load an invitation with a row lock, serializing concurrent responses.
pub async fn find_invitation_for_update_tx(
    tx: &mut Transaction<'_, Postgres>,
    id: Uuid,
) -> Result<Option<InvitationEntity>, sqlx::Error> {
    let sql = format!("SELECT {INVITATION_COLUMNS} FROM invitations WHERE id = $1 FOR UPDATE");
    sqlx::query_as::<_, InvitationEntity>(&sql)
        .bind(id)
        .fetch_optional(&mut **tx)
        .await
}

/// Set an invitation's status.
pub async fn set_invitation_status_tx(
    tx: &mut Transaction<'_, Postgres>,
    id: Uuid,
    status: InvitationStatusDb,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE invitations
        SET status = $2, updated_at = NOW()
        WHERE id = $1
        "#,
    )
    .bind(id)
    .bind(status)
    .execute(&mut **tx)
    .await?;
    Ok(result.rows_affected())
}

/// Pending team invitations sent by a captain, for the capacity ceiling.
pub async fn count_pending_team_invitations_tx(
    tx: &mut Transaction<'_, Postgres>,
    sender_id: Uuid,
) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM invitations
        WHERE sender_id = $1 AND type = 'team' AND status = 'pending'
        "#,
    )
    .bind(sender_id)
    .fetch_one(&mut **tx)
    .await
}

/// Delete every invitation targeting a team. Used when the team disbands.
pub async fn delete_team_invitations_tx(
    tx: &mut Transaction<'_, Postgres>,
    team_id: Uuid,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        DELETE FROM invitations
        WHERE invitable_type = 'team' AND invitable_id = $1
        "#,
    )
    .bind(team_id)
    .execute(&mut **tx)
    .await?;
    Ok(result.rows_affected())
}
