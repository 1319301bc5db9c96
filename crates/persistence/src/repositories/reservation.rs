//! Reservation repository for database operations.

use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::entities::{NewReservation, ReservationEntity, ReservationStatusDb};
use crate::metrics::QueryTimer;

const RESERVATION_COLUMNS: &str =
    "id, user_id, time_slot_instance_id, match_id, date, total_price, auto_confirm, status, created_at";

/// Repository for reservation-related database operations.
#[derive(Clone)]
pub struct ReservationRepository {
    pool: PgPool,
}

impl ReservationRepository {
    /// Creates a new ReservationRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Find a reservation by ID.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ReservationEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_reservation_by_id");
        let sql = format!("SELECT {RESERVATION_COLUMNS} FROM reservations WHERE id = $1");
        let result = sqlx::query_as::<_, ReservationEntity>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await;
        timer.record();
        result
    }
}

/// Insert a reservation.
pub async fn create_reservation_tx(
    tx: &mut Transaction<'_, Postgres>,
    new: &NewReservation,
) -> Result<ReservationEntity, sqlx::Error> {
    let sql = format!(
        r#"
        INSERT INTO reservations
            (user_id, time_slot_instance_id, match_id, date, total_price, auto_confirm, status)
        VALUES ($1, $2, $3, NOW(), $4, $5, $6)
        RETURNING {RESERVATION_COLUMNS}
        "#
    );
    sqlx::query_as::<_, ReservationEntity>(&sql)
        .bind(new.user_id)
        .bind(new.time_slot_instance_id)
        .bind(new.match_id)
        .bind(new.total_price)
        .bind(new.auto_confirm)
        .bind(new.status)
        .fetch_one(&mut **tx)
        .await
}

/// Find the reservation backing a match, if any.
pub async fn find_reservation_by_match_tx(
    tx: &mut Transaction<'_, Postgres>,
    match_id: Uuid,
) -> Result<Option<ReservationEntity>, sqlx::Error> {
    let sql = format!("SELECT {RESERVATION_COLUMNS} FROM reservations WHERE match_id = $1");
    sqlx::query_as::<_, ReservationEntity>(&sql)
        .bind(match_id)
        .fetch_optional(&mut **tx)
        .await
}

/// Set a reservation's status unconditionally.
pub async fn set_reservation_status_tx(
    tx: &mut Transaction<'_, Postgres>,
    id: Uuid,
    status: ReservationStatusDb,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE reservations
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

/// Move a reservation from one status to another; a no-op when the current
/// status differs. Returns the number of rows changed.
pub async fn transition_reservation_tx(
    tx: &mut Transaction<'_, Postgres>,
    id: Uuid,
    from: ReservationStatusDb,
    to: ReservationStatusDb,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE reservations
        SET status = $3, updated_at = NOW()
        WHERE id = $1 AND status = $2
        "#,
    )
    .bind(id)
    .bind(from)
    .bind(to)
    .execute(&mut **tx)
    .await?;
    Ok(result.rows_affected())
}
