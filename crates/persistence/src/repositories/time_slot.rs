//! Time slot repository for database operations.

use sqlx::{PgPool, Postgres, Transaction};
use uuid::Uuid;

use crate::entities::{SlotFacilityEntity, TimeSlotInstanceEntity};
use crate::metrics::QueryTimer;

/// Repository for time-slot-related database operations.
#[derive(Clone)]
pub struct TimeSlotRepository {
    pool: PgPool,
}

impl TimeSlotRepository {
    /// Creates a new TimeSlotRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns a reference to the connection pool.
    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    /// Find a time slot instance by ID.
    pub async fn find_by_id(
        &self,
        id: Uuid,
    ) -> Result<Option<TimeSlotInstanceEntity>, sqlx::Error> {
        let timer = QueryTimer::new("find_time_slot_by_id");
        let result = sqlx::query_as::<_, TimeSlotInstanceEntity>(
            r#"
            SELECT id, recurring_time_slot_id, date, start_time, end_time, status
            FROM time_slot_instances
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await;
        timer.record();
        result
    }
}

/// Load a time slot with the facility behind its recurring schedule.
pub async fn find_slot_facility_tx(
    tx: &mut Transaction<'_, Postgres>,
    time_slot_id: Uuid,
) -> Result<Option<SlotFacilityEntity>, sqlx::Error> {
    sqlx::query_as::<_, SlotFacilityEntity>(
        r#"
        SELECT i.id AS time_slot_id, i.status, r.sport_facility_id AS facility_id
        FROM time_slot_instances i
        JOIN recurring_time_slots r ON r.id = i.recurring_time_slot_id
        WHERE i.id = $1
        "#,
    )
    .bind(time_slot_id)
    .fetch_optional(&mut **tx)
    .await
}

/// Sports supported by a facility.
pub async fn facility_sport_ids_tx(
    tx: &mut Transaction<'_, Postgres>,
    facility_id: Uuid,
) -> Result<Vec<Uuid>, sqlx::Error> {
    sqlx::query_scalar::<_, Uuid>(
        r#"
        SELECT sport_id FROM facility_sports WHERE sport_facility_id = $1
        "#,
    )
    .bind(facility_id)
    .fetch_all(&mut **tx)
    .await
}

/// Claim a slot: available → reserved.
///
/// Conditional update; returns the number of rows changed. Zero means the
/// slot was not available and the caller lost the race (or the slot was
/// under maintenance/blocked).
pub async fn claim_slot_tx(
    tx: &mut Transaction<'_, Postgres>,
    time_slot_id: Uuid,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE time_slot_instances
        SET status = 'reserved', updated_at = NOW()
        WHERE id = $1 AND status = 'available'
        "#,
    )
    .bind(time_slot_id)
    .execute(&mut **tx)
    .await?;
    Ok(result.rows_affected())
}

/// Release a slot: reserved → available.
///
/// Conditional like the claim, so releasing an already-available slot is a
/// no-op rather than an error.
pub async fn release_slot_tx(
    tx: &mut Transaction<'_, Postgres>,
    time_slot_id: Uuid,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        r#"
        UPDATE time_slot_instances
        SET status = 'available', updated_at = NOW()
        WHERE id = $1 AND status = 'reserved'
        "#,
    )
    .bind(time_slot_id)
    .execute(&mut **tx)
    .await?;
    Ok(result.rows_affected())
}
