//! Invitation lifecycle engine.
//!
//! State machine per invitation: `pending` is initial; `accepted`,
//! `rejected` and `canceled` are terminal. Creation resolves the target
//! entity from the invitation kind through an explicit tag lookup and
//! rejects active duplicates; responding applies the receiver's decision
//! and, for team invitations, the membership cascade. Match resolution is
//! deferred to the expiry sweep so match/reservation consistency lives in
//! one place.

use std::sync::Arc;

use domain::models::{
    InvitableRef, Invitation, InvitationDecision, InvitationKind, InvitationStatus,
    NotificationDraft, TeamRoster,
};
use domain::services::{validate_team_player_count, NotificationResult, NotificationSink};
use persistence::entities::InvitationStatusDb;
use persistence::repositories::{
    active_duplicate_exists_tx, add_member_tx, count_pending_team_invitations_tx,
    create_invitation_tx, delete_team_invitations_tx, find_captained_roster_in_match_tx,
    find_captained_roster_in_sport_tx, find_captained_roster_tx, find_invitation_for_update_tx,
    find_match_tx, find_roster_tx, set_invitation_status_tx,
};
use shared::validation::FieldError;
use sqlx::{PgPool, Postgres, Transaction};
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::CoreError;

/// Orchestrates invitation creation, responses and cascades.
#[derive(Clone)]
pub struct InvitationService {
    pool: PgPool,
    notifications: Arc<dyn NotificationSink>,
}

impl InvitationService {
    /// Create a new invitation service.
    pub fn new(pool: PgPool, notifications: Arc<dyn NotificationSink>) -> Self {
        Self {
            pool,
            notifications,
        }
    }

    /// Create a pending invitation from `sender_id` to `receiver_id`.
    ///
    /// The target is resolved from the kind (`team` → Team, `match` →
    /// Match, `friend` → none) and must exist. An active (pending or
    /// accepted) invitation for the same tuple rejects the call with
    /// `DuplicateInvitation`; the partial unique index closes the race two
    /// concurrent creations would otherwise win together.
    ///
    /// Team invitations also enforce the capacity ceiling: active members
    /// plus pending invitations from the captain must stay below the
    /// sport's maximum. Match invitations (challenging into a public match)
    /// require the receiver to captain a team in the match and the sender
    /// to captain a same-sport team that can field a legal side.
    pub async fn create(
        &self,
        kind: InvitationKind,
        sender_id: Uuid,
        receiver_id: Uuid,
        invitable_id: Option<Uuid>,
    ) -> Result<Invitation, CoreError> {
        if sender_id == receiver_id {
            return Err(CoreError::Validation(vec![FieldError::new(
                "receiver_id",
                "You cannot send an invitation to yourself.",
            )]));
        }
        let invitable = resolve_invitable(kind, invitable_id)?;

        let mut tx = self.pool.begin().await.map_err(CoreError::from)?;

        self.ensure_target_exists(&mut tx, invitable).await?;

        let duplicate = active_duplicate_exists_tx(
            &mut tx,
            sender_id,
            receiver_id,
            kind.into(),
            invitable.map(|r| r.id()),
        )
        .await?;
        if duplicate {
            return Err(CoreError::DuplicateInvitation);
        }

        let mut match_notice_teams = None;
        match kind {
            InvitationKind::Team => {
                let roster = find_captained_roster_tx(&mut tx, sender_id)
                    .await?
                    .map(TeamRoster::from)
                    .ok_or_else(|| {
                        CoreError::Unauthorized(
                            "Only a team captain can send team invitations".to_string(),
                        )
                    })?;
                let pending = count_pending_team_invitations_tx(&mut tx, sender_id).await?;
                if roster.active_player_count + pending >= roster.max_players as i64 {
                    return Err(CoreError::TeamCapacityExceeded);
                }
            }
            InvitationKind::Match => {
                let match_id = invitable
                    .map(|r| r.id())
                    .ok_or_else(|| CoreError::NotFound("Match not found".to_string()))?;
                let receiver_team = find_captained_roster_in_match_tx(&mut tx, match_id, receiver_id)
                    .await?
                    .map(TeamRoster::from)
                    .ok_or_else(|| {
                        CoreError::Validation(vec![FieldError::new(
                            "invitation",
                            "Receiver is not part of any team in this match.",
                        )])
                    })?;
                let sender_team =
                    find_captained_roster_in_sport_tx(&mut tx, sender_id, receiver_team.sport_id)
                        .await?
                        .map(TeamRoster::from)
                        .ok_or_else(|| {
                            CoreError::Validation(vec![FieldError::new(
                                "invitation",
                                "You must be a captain of a team in the same sport to send this invitation.",
                            )])
                        })?;
                let errors = validate_team_player_count(&sender_team, "team1");
                if !errors.is_empty() {
                    return Err(CoreError::Validation(errors));
                }
                match_notice_teams = Some((sender_team.sport_name, sender_team.name));
            }
            InvitationKind::Friend => {}
        }

        let entity = create_invitation_tx(
            &mut tx,
            sender_id,
            receiver_id,
            kind.into(),
            invitable.map(|r| r.tag()),
            invitable.map(|r| r.id()),
        )
        .await?;

        tx.commit().await.map_err(CoreError::from)?;

        if let Some((sport_name, team_name)) = match_notice_teams {
            let draft =
                NotificationDraft::match_invitation(receiver_id, entity.id, &sport_name, &team_name);
            if let NotificationResult::Failed(err) = self.notifications.notify(draft).await {
                warn!(
                    invitation_id = %entity.id,
                    error = %err,
                    "Match invitation notification was not recorded"
                );
            }
        }

        info!(
            invitation_id = %entity.id,
            kind = %kind,
            sender_id = %sender_id,
            receiver_id = %receiver_id,
            "Created invitation"
        );

        Ok(entity.into())
    }

    /// Apply the receiver's decision to a pending invitation.
    ///
    /// Fails `Unauthorized` when the actor is not the receiver and
    /// `AlreadyResolved` when the invitation has left `pending`. Accepting
    /// a team invitation adds the actor as a non-captain member of the
    /// sender's team; the capacity check happens before the status flip in
    /// the same transaction, so a full team rejects the whole operation
    /// with `TeamFull` and the invitation stays pending. Match invitations
    /// only change status here; the expiry sweep settles the match,
    /// reservation and slot.
    pub async fn respond(
        &self,
        invitation_id: Uuid,
        decision: InvitationDecision,
        actor_id: Uuid,
    ) -> Result<Invitation, CoreError> {
        let mut tx = self.pool.begin().await.map_err(CoreError::from)?;

        let entity = find_invitation_for_update_tx(&mut tx, invitation_id)
            .await?
            .ok_or_else(|| CoreError::NotFound(format!("Invitation {invitation_id} not found")))?;

        if entity.receiver_id != actor_id {
            return Err(CoreError::Unauthorized(
                "Only the invitation receiver may respond".to_string(),
            ));
        }
        if entity.status != InvitationStatusDb::Pending {
            return Err(CoreError::AlreadyResolved);
        }

        let new_status = InvitationStatus::from(decision);

        let mut invitation = Invitation::from(entity);
        if invitation.kind == InvitationKind::Team && decision == InvitationDecision::Accepted {
            let roster = find_captained_roster_tx(&mut tx, invitation.sender_id)
                .await?
                .map(TeamRoster::from)
                .ok_or_else(|| {
                    CoreError::NotFound("Inviting captain no longer leads a team".to_string())
                })?;
            if !roster.has_open_seat() {
                return Err(CoreError::TeamFull);
            }
            add_member_tx(&mut tx, roster.team_id, actor_id).await?;
        }

        set_invitation_status_tx(&mut tx, invitation_id, new_status.into()).await?;

        tx.commit().await.map_err(CoreError::from)?;

        info!(
            invitation_id = %invitation_id,
            decision = ?decision,
            actor_id = %actor_id,
            "Invitation resolved"
        );

        invitation.status = new_status;
        Ok(invitation)
    }

    /// Delete every invitation targeting a team. Called when the team
    /// disbands.
    pub async fn purge_for_team(&self, team_id: Uuid) -> Result<u64, CoreError> {
        let mut tx = self.pool.begin().await.map_err(CoreError::from)?;
        let deleted = delete_team_invitations_tx(&mut tx, team_id).await?;
        tx.commit().await.map_err(CoreError::from)?;

        if deleted > 0 {
            info!(team_id = %team_id, deleted, "Purged invitations of disbanded team");
        }
        Ok(deleted)
    }

    async fn ensure_target_exists(
        &self,
        tx: &mut Transaction<'_, Postgres>,
        invitable: Option<InvitableRef>,
    ) -> Result<(), CoreError> {
        match invitable {
            Some(InvitableRef::Match(id)) => {
                find_match_tx(tx, id)
                    .await?
                    .ok_or_else(|| CoreError::NotFound(format!("Match {id} not found")))?;
            }
            Some(InvitableRef::Team(id)) => {
                find_roster_tx(tx, id)
                    .await?
                    .ok_or_else(|| CoreError::NotFound(format!("Team {id} not found")))?;
            }
            None => {}
        }
        Ok(())
    }
}

/// Resolve the target reference for an invitation kind.
///
/// The explicit kind → tag table: friend invitations carry no target; team
/// and match invitations require an id of the matching entity.
fn resolve_invitable(
    kind: InvitationKind,
    invitable_id: Option<Uuid>,
) -> Result<Option<InvitableRef>, CoreError> {
    match kind.invitable_tag() {
        None => Ok(None),
        Some(tag) => {
            let id = invitable_id.ok_or_else(|| {
                CoreError::Validation(vec![FieldError::new(
                    "invitable_id",
                    format!("{kind} invitations require a target id."),
                )])
            })?;
            Ok(InvitableRef::from_parts(tag, id))
        }
    }
}
