//! Expiry sweep over match invitations.
//!
//! Two idempotent passes with a fixed 5-minute grace window:
//!
//! 1. Expire: pending/rejected match invitations older than the window are
//!    canceled; a still-pending match is cancelled with them, and its
//!    reservation either survives as confirmed (`auto_confirm`) or is
//!    cancelled with the slot released.
//! 2. Confirm: accepted match invitations inside the window confirm a
//!    still-pending match and its pending reservation; the slot stays
//!    reserved.
//!
//! Each invitation is settled in its own transaction; a failing row is
//! logged and skipped so one bad row never halts the batch. The scheduler
//! runs one sweep at a time, and every state change is a conditional
//! update, so a rerun over the same rows is a no-op.

use chrono::{DateTime, Duration, Utc};
use domain::models::InvitableRef;
use persistence::entities::{
    InvitationEntity, InvitationStatusDb, MatchStatusDb, ReservationStatusDb,
};
use persistence::repositories::{
    find_reservation_by_match_tx, release_slot_tx, set_invitation_status_tx,
    set_reservation_status_tx, transition_match_tx, transition_reservation_tx,
    InvitationRepository,
};
use serde::Serialize;
use sqlx::PgPool;
use tracing::{debug, warn};

use crate::error::CoreError;

/// Minutes an unanswered (or rejected) match invitation is allowed to hold
/// its match before the sweep settles it.
pub const GRACE_MINUTES: i64 = 5;

/// Counts of invitations settled by one sweep run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SweepOutcome {
    pub expired: u64,
    pub confirmed: u64,
}

/// Periodic reconciliation of match invitations with their matches,
/// reservations and time slots.
#[derive(Clone)]
pub struct ExpirySweepService {
    pool: PgPool,
}

impl ExpirySweepService {
    /// Create a new sweep service.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Run both passes against the given clock value.
    ///
    /// `now` is injected so the grace window is deterministic under test;
    /// the scheduled job passes the wall clock.
    pub async fn run(&self, now: DateTime<Utc>) -> Result<SweepOutcome, CoreError> {
        let cutoff = now - Duration::minutes(GRACE_MINUTES);
        let repository = InvitationRepository::new(self.pool.clone());
        let mut outcome = SweepOutcome::default();

        for invitation in repository.find_expirable_match_invitations(cutoff).await? {
            match self.expire_one(&invitation).await {
                Ok(()) => outcome.expired += 1,
                Err(err) => warn!(
                    invitation_id = %invitation.id,
                    error = %err,
                    "Skipping invitation in expire pass"
                ),
            }
        }

        for invitation in repository
            .find_accepted_match_invitations_since(cutoff)
            .await?
        {
            match self.confirm_one(&invitation).await {
                Ok(()) => outcome.confirmed += 1,
                Err(err) => warn!(
                    invitation_id = %invitation.id,
                    error = %err,
                    "Skipping invitation in confirm pass"
                ),
            }
        }

        debug!(
            expired = outcome.expired,
            confirmed = outcome.confirmed,
            "Invitation sweep finished"
        );

        Ok(outcome)
    }

    /// Cancel one stale invitation and settle its match and reservation.
    async fn expire_one(&self, invitation: &InvitationEntity) -> Result<(), CoreError> {
        let mut tx = self.pool.begin().await.map_err(CoreError::from)?;

        set_invitation_status_tx(&mut tx, invitation.id, InvitationStatusDb::Canceled).await?;

        if let Some(InvitableRef::Match(match_id)) = invitation.invitable() {
            let cancelled = transition_match_tx(
                &mut tx,
                match_id,
                MatchStatusDb::Pending,
                MatchStatusDb::Cancelled,
            )
            .await?;

            // Only the run that actually cancels the match settles its
            // reservation; a match already resolved elsewhere is left alone.
            if cancelled > 0 {
                if let Some(reservation) = find_reservation_by_match_tx(&mut tx, match_id).await? {
                    if reservation.auto_confirm {
                        set_reservation_status_tx(
                            &mut tx,
                            reservation.id,
                            ReservationStatusDb::Confirmed,
                        )
                        .await?;
                    } else {
                        set_reservation_status_tx(
                            &mut tx,
                            reservation.id,
                            ReservationStatusDb::Cancelled,
                        )
                        .await?;
                        release_slot_tx(&mut tx, reservation.time_slot_instance_id).await?;
                    }
                }
            }
        }

        tx.commit().await.map_err(CoreError::from)?;
        Ok(())
    }

    /// Confirm the match and reservation behind one accepted invitation.
    async fn confirm_one(&self, invitation: &InvitationEntity) -> Result<(), CoreError> {
        let mut tx = self.pool.begin().await.map_err(CoreError::from)?;

        if let Some(InvitableRef::Match(match_id)) = invitation.invitable() {
            let confirmed = transition_match_tx(
                &mut tx,
                match_id,
                MatchStatusDb::Pending,
                MatchStatusDb::Confirmed,
            )
            .await?;

            if confirmed > 0 {
                if let Some(reservation) = find_reservation_by_match_tx(&mut tx, match_id).await? {
                    transition_reservation_tx(
                        &mut tx,
                        reservation.id,
                        ReservationStatusDb::Pending,
                        ReservationStatusDb::Confirmed,
                    )
                    .await?;
                }
            }
        }

        tx.commit().await.map_err(CoreError::from)?;
        Ok(())
    }
}
