//! Integration tests for the invitation expiry sweep.
//!
//! The sweep takes its clock value as a parameter, so these tests move time
//! forward by running the sweep "in the future" instead of backdating rows.

mod common;

use std::sync::Arc;

use chrono::{Duration, Utc};
use courtbook_core::services::{
    DbNotificationSink, ExpirySweepService, InvitationService, MatchReservationService,
};
use domain::models::{CreateMatchReservationRequest, InvitationDecision, MatchType};
use sqlx::PgPool;
use uuid::Uuid;

struct MatchFixture {
    slot: Uuid,
    match_id: Uuid,
    reservation_id: Uuid,
    invitation_id: Uuid,
    receiver_id: Uuid,
}

/// Create a private match reservation and return the ids of everything the
/// sweep may touch.
async fn seed_private_match(pool: &PgPool, auto_confirm: bool) -> MatchFixture {
    let sport = common::create_sport(pool, 2, 10).await;
    let team1 = common::create_team(pool, sport, 5).await;
    let team2 = common::create_team(pool, sport, 5).await;
    let facility = common::create_facility(pool, &[sport]).await;
    let slot = common::create_slot(pool, facility, "available").await;

    let service = MatchReservationService::new(
        pool.clone(),
        Arc::new(DbNotificationSink::new(pool.clone())),
    );
    let details = service
        .create_match_reservation(
            &CreateMatchReservationRequest {
                time_slot_id: slot,
                match_type: MatchType::Private,
                team1_id: team1.team_id,
                team2_id: Some(team2.team_id),
                auto_confirm,
            },
            team1.captain_id,
        )
        .await
        .expect("match reservation should succeed");

    let match_id = details.game.expect("match attached").id;
    let invitation_id = sqlx::query_scalar::<_, Uuid>(
        "SELECT id FROM invitations WHERE invitable_type = 'match' AND invitable_id = $1",
    )
    .bind(match_id)
    .fetch_one(pool)
    .await
    .expect("invitation exists");

    MatchFixture {
        slot,
        match_id,
        reservation_id: details.reservation.id,
        invitation_id,
        receiver_id: team2.captain_id,
    }
}

#[tokio::test]
async fn test_expired_invitation_without_auto_confirm_frees_everything() {
    let _guard = common::db_lock().lock().await;
    let Some(pool) = common::try_pool().await else {
        return;
    };

    let fixture = seed_private_match(&pool, false).await;

    let sweep = ExpirySweepService::new(pool.clone());
    let outcome = sweep
        .run(Utc::now() + Duration::minutes(6))
        .await
        .expect("sweep should succeed");

    assert!(outcome.expired >= 1);
    assert_eq!(
        common::invitation_status(&pool, fixture.invitation_id).await,
        "canceled"
    );
    assert_eq!(
        common::match_status(&pool, fixture.match_id).await,
        "cancelled"
    );
    assert_eq!(
        common::reservation_status(&pool, fixture.reservation_id).await,
        "cancelled"
    );
    assert_eq!(common::slot_status(&pool, fixture.slot).await, "available");
}

#[tokio::test]
async fn test_expired_invitation_with_auto_confirm_keeps_booking() {
    let _guard = common::db_lock().lock().await;
    let Some(pool) = common::try_pool().await else {
        return;
    };

    let fixture = seed_private_match(&pool, true).await;

    let sweep = ExpirySweepService::new(pool.clone());
    sweep
        .run(Utc::now() + Duration::minutes(6))
        .await
        .expect("sweep should succeed");

    assert_eq!(
        common::invitation_status(&pool, fixture.invitation_id).await,
        "canceled"
    );
    assert_eq!(
        common::match_status(&pool, fixture.match_id).await,
        "cancelled"
    );
    // The booking survives the declined match and the slot stays claimed.
    assert_eq!(
        common::reservation_status(&pool, fixture.reservation_id).await,
        "confirmed"
    );
    assert_eq!(common::slot_status(&pool, fixture.slot).await, "reserved");
}

#[tokio::test]
async fn test_rejected_invitation_is_swept_like_pending() {
    let _guard = common::db_lock().lock().await;
    let Some(pool) = common::try_pool().await else {
        return;
    };

    let fixture = seed_private_match(&pool, false).await;

    let invitations = InvitationService::new(
        pool.clone(),
        Arc::new(DbNotificationSink::new(pool.clone())),
    );
    invitations
        .respond(
            fixture.invitation_id,
            InvitationDecision::Rejected,
            fixture.receiver_id,
        )
        .await
        .expect("rejection should succeed");

    let sweep = ExpirySweepService::new(pool.clone());
    sweep
        .run(Utc::now() + Duration::minutes(6))
        .await
        .expect("sweep should succeed");

    assert_eq!(
        common::invitation_status(&pool, fixture.invitation_id).await,
        "canceled"
    );
    assert_eq!(
        common::match_status(&pool, fixture.match_id).await,
        "cancelled"
    );
    assert_eq!(
        common::reservation_status(&pool, fixture.reservation_id).await,
        "cancelled"
    );
    assert_eq!(common::slot_status(&pool, fixture.slot).await, "available");
}

#[tokio::test]
async fn test_accepted_invitation_confirms_match_and_reservation() {
    let _guard = common::db_lock().lock().await;
    let Some(pool) = common::try_pool().await else {
        return;
    };

    let fixture = seed_private_match(&pool, false).await;

    let invitations = InvitationService::new(
        pool.clone(),
        Arc::new(DbNotificationSink::new(pool.clone())),
    );
    invitations
        .respond(
            fixture.invitation_id,
            InvitationDecision::Accepted,
            fixture.receiver_id,
        )
        .await
        .expect("acceptance should succeed");

    let sweep = ExpirySweepService::new(pool.clone());
    let outcome = sweep
        .run(Utc::now() + Duration::minutes(2))
        .await
        .expect("sweep should succeed");

    assert!(outcome.confirmed >= 1);
    assert_eq!(
        common::invitation_status(&pool, fixture.invitation_id).await,
        "accepted"
    );
    assert_eq!(
        common::match_status(&pool, fixture.match_id).await,
        "confirmed"
    );
    assert_eq!(
        common::reservation_status(&pool, fixture.reservation_id).await,
        "confirmed"
    );
    assert_eq!(common::slot_status(&pool, fixture.slot).await, "reserved");
}

#[tokio::test]
async fn test_fresh_pending_invitation_is_left_alone() {
    let _guard = common::db_lock().lock().await;
    let Some(pool) = common::try_pool().await else {
        return;
    };

    let fixture = seed_private_match(&pool, false).await;

    let sweep = ExpirySweepService::new(pool.clone());
    // Inside the grace window: nothing to expire yet.
    sweep
        .run(Utc::now() + Duration::minutes(2))
        .await
        .expect("sweep should succeed");

    assert_eq!(
        common::invitation_status(&pool, fixture.invitation_id).await,
        "pending"
    );
    assert_eq!(
        common::match_status(&pool, fixture.match_id).await,
        "pending"
    );
    assert_eq!(common::slot_status(&pool, fixture.slot).await, "reserved");
}

#[tokio::test]
async fn test_sweep_is_idempotent() {
    let _guard = common::db_lock().lock().await;
    let Some(pool) = common::try_pool().await else {
        return;
    };

    let fixture = seed_private_match(&pool, false).await;

    let sweep = ExpirySweepService::new(pool.clone());
    let when = Utc::now() + Duration::minutes(6);
    sweep.run(when).await.expect("first sweep should succeed");
    let second = sweep.run(when).await.expect("second sweep should succeed");

    // Everything already settled; the rerun changes nothing.
    assert_eq!(second.expired, 0);
    assert_eq!(
        common::invitation_status(&pool, fixture.invitation_id).await,
        "canceled"
    );
    assert_eq!(
        common::match_status(&pool, fixture.match_id).await,
        "cancelled"
    );
    assert_eq!(common::slot_status(&pool, fixture.slot).await, "available");
}
