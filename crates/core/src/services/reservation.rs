//! Simple (non-match) reservation workflow.

use domain::models::{CreateReservationRequest, Reservation};
use persistence::entities::{NewReservation, ReservationStatusDb};
use persistence::repositories::{claim_slot_tx, create_reservation_tx};
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::error::CoreError;

/// Orchestrates plain slot bookings: one transaction that records a
/// completed reservation and claims the slot.
#[derive(Clone)]
pub struct ReservationService {
    pool: PgPool,
}

impl ReservationService {
    /// Create a new reservation service.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Book a time slot directly, without a match.
    ///
    /// Creates the reservation as `completed` with price 0 and claims the
    /// slot. Both writes share one transaction: if the conditional claim
    /// finds the slot anything but `available`, the whole operation rolls
    /// back and `SlotUnavailable` is returned.
    pub async fn create_simple_reservation(
        &self,
        request: &CreateReservationRequest,
        user_id: Uuid,
    ) -> Result<Reservation, CoreError> {
        let mut tx = self.pool.begin().await.map_err(CoreError::from)?;

        let reservation = create_reservation_tx(
            &mut tx,
            &NewReservation {
                user_id,
                time_slot_instance_id: request.time_slot_id,
                match_id: None,
                total_price: 0.0,
                auto_confirm: false,
                status: ReservationStatusDb::Completed,
            },
        )
        .await?;

        let claimed = claim_slot_tx(&mut tx, request.time_slot_id).await?;
        if claimed == 0 {
            // Dropping the transaction rolls the reservation back.
            return Err(CoreError::SlotUnavailable);
        }

        tx.commit().await.map_err(CoreError::from)?;

        info!(
            reservation_id = %reservation.id,
            time_slot_id = %request.time_slot_id,
            user_id = %user_id,
            "Created simple reservation"
        );

        Ok(reservation.into())
    }
}
