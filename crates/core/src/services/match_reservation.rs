//! Match reservation workflow.
//!
//! Builds a match-backed booking in one transaction: validation, match and
//! team-match rows, the pending reservation, the slot claim, and (for
//! private matches) the challenge invitation to the opposing captain.

use std::sync::Arc;

use domain::models::{
    CreateMatchReservationRequest, MatchType, NotificationDraft, ReservationDetails,
    SlotFacilityView, TeamRoster,
};
use domain::services::{
    validate_facility_compatibility, validate_teams, NotificationResult, NotificationSink,
};
use persistence::entities::{InvitationKindDb, NewReservation, ReservationStatusDb};
use persistence::repositories::{
    add_team_match_tx, claim_slot_tx, create_invitation_tx, create_match_tx,
    create_reservation_tx, facility_sport_ids_tx, find_roster_tx, find_slot_facility_tx,
};
use sqlx::{PgPool, Postgres, Transaction};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::CoreError;

/// Orchestrates creation of match-backed reservations.
#[derive(Clone)]
pub struct MatchReservationService {
    pool: PgPool,
    notifications: Arc<dyn NotificationSink>,
}

impl MatchReservationService {
    /// Create a new match reservation service.
    pub fn new(pool: PgPool, notifications: Arc<dyn NotificationSink>) -> Self {
        Self {
            pool,
            notifications,
        }
    }

    /// Create a match plus its backing reservation and slot claim.
    ///
    /// All writes share one transaction. Validation runs first and aborts
    /// with the full aggregated error set before anything is written; any
    /// later failure (including losing the slot race) rolls the whole
    /// transaction back, so no orphan match, team assignment, reservation
    /// or slot claim can survive. The invitation notification for private
    /// matches is recorded after commit and never affects the outcome.
    pub async fn create_match_reservation(
        &self,
        request: &CreateMatchReservationRequest,
        user_id: Uuid,
    ) -> Result<ReservationDetails, CoreError> {
        let mut tx = self.pool.begin().await.map_err(CoreError::from)?;

        let team1 = load_roster(&mut tx, request.team1_id).await?;
        let team2 = match request.team2_id {
            Some(team2_id) => Some(load_roster(&mut tx, team2_id).await?),
            None => None,
        };
        let slot = load_slot(&mut tx, request.time_slot_id).await?;

        let mut errors = validate_teams(&team1, team2.as_ref(), request.match_type);
        errors.extend(validate_facility_compatibility(&team1, team2.as_ref(), &slot));
        if !errors.is_empty() {
            return Err(CoreError::Validation(errors));
        }

        let game = create_match_tx(&mut tx, request.match_type.into()).await?;

        let mut team_matches = vec![add_team_match_tx(&mut tx, game.id, team1.team_id).await?];
        if request.match_type == MatchType::Private {
            if let Some(team2) = &team2 {
                team_matches.push(add_team_match_tx(&mut tx, game.id, team2.team_id).await?);
            }
        }

        let reservation = create_reservation_tx(
            &mut tx,
            &NewReservation {
                user_id,
                time_slot_instance_id: request.time_slot_id,
                match_id: Some(game.id),
                total_price: 0.0,
                auto_confirm: request.auto_confirm,
                status: ReservationStatusDb::Pending,
            },
        )
        .await?;

        let claimed = claim_slot_tx(&mut tx, request.time_slot_id).await?;
        if claimed == 0 {
            return Err(CoreError::SlotUnavailable);
        }

        let mut invitation_notice = None;
        if request.match_type == MatchType::Private {
            if let Some(team2) = &team2 {
                let sender = captain_of(&team1, "team1")?;
                let receiver = captain_of(team2, "team2")?;
                let invitation = create_invitation_tx(
                    &mut tx,
                    sender,
                    receiver,
                    InvitationKindDb::Match,
                    Some("match"),
                    Some(game.id),
                )
                .await?;
                invitation_notice = Some(NotificationDraft::match_invitation(
                    receiver,
                    invitation.id,
                    &team1.sport_name,
                    &team1.name,
                ));
            }
        }

        tx.commit().await.map_err(CoreError::from)?;

        if let Some(draft) = invitation_notice {
            if let NotificationResult::Failed(err) = self.notifications.notify(draft).await {
                warn!(
                    match_id = %game.id,
                    error = %err,
                    "Match invitation notification was not recorded"
                );
            }
        }

        info!(
            reservation_id = %reservation.id,
            match_id = %game.id,
            match_type = ?request.match_type,
            user_id = %user_id,
            "Created match reservation"
        );

        Ok(ReservationDetails {
            reservation: reservation.into(),
            game: Some(game.into()),
            team_matches: team_matches.into_iter().map(Into::into).collect(),
        })
    }
}

async fn load_roster(
    tx: &mut Transaction<'_, Postgres>,
    team_id: Uuid,
) -> Result<TeamRoster, CoreError> {
    find_roster_tx(tx, team_id)
        .await?
        .map(TeamRoster::from)
        .ok_or_else(|| CoreError::NotFound(format!("Team {team_id} not found")))
}

async fn load_slot(
    tx: &mut Transaction<'_, Postgres>,
    time_slot_id: Uuid,
) -> Result<SlotFacilityView, CoreError> {
    let slot = find_slot_facility_tx(tx, time_slot_id)
        .await?
        .ok_or_else(|| CoreError::NotFound(format!("Time slot {time_slot_id} not found")))?;
    let supported_sport_ids = facility_sport_ids_tx(tx, slot.facility_id).await?;
    Ok(SlotFacilityView {
        time_slot_id: slot.time_slot_id,
        status: slot.status.into(),
        facility_id: slot.facility_id,
        supported_sport_ids,
    })
}

fn captain_of(team: &TeamRoster, key: &str) -> Result<Uuid, CoreError> {
    // Guaranteed present once validation has passed.
    team.captain_user_id
        .ok_or_else(|| CoreError::NotFound(format!("Active captain of {key} not found")))
}
