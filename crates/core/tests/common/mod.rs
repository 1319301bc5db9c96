//! Common test utilities for integration tests.
//!
//! These tests run against a real PostgreSQL database named by the
//! `TEST_DATABASE_URL` environment variable. When the variable is not set
//! the tests print a notice and pass without exercising anything, so the
//! suite stays green on machines without a database.

// Helper utilities shared across the integration test binaries; not every
// binary uses all of them.
#![allow(dead_code)]

use fake::faker::name::en::Name;
use fake::Fake;
use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::sync::OnceLock;
use std::time::Duration;
use tokio::sync::Mutex;
use uuid::Uuid;

/// Serializes database tests within one binary: sweeps and counts observe
/// the whole database, so overlapping tests would see each other's rows.
pub fn db_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

/// Connect to the test database and apply migrations, or `None` when
/// `TEST_DATABASE_URL` is not set.
pub async fn try_pool() -> Option<PgPool> {
    let database_url = match std::env::var("TEST_DATABASE_URL") {
        Ok(url) => url,
        Err(_) => {
            eprintln!("TEST_DATABASE_URL not set; skipping integration test");
            return None;
        }
    };

    let pool = PgPoolOptions::new()
        .max_connections(10)
        .acquire_timeout(Duration::from_secs(30))
        .connect(&database_url)
        .await
        .expect("Failed to connect to test database");

    sqlx::migrate!("../persistence/src/migrations")
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    Some(pool)
}

pub async fn create_user(pool: &PgPool) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO users (name, email) VALUES ($1, $2) RETURNING id",
    )
    .bind(Name().fake::<String>())
    .bind(format!("{}@example.test", Uuid::new_v4()))
    .fetch_one(pool)
    .await
    .expect("insert user")
}

pub async fn create_sport(pool: &PgPool, min_players: i32, max_players: i32) -> Uuid {
    sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO sports (name, min_players, max_players) VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(format!("sport-{}", Uuid::new_v4()))
    .bind(min_players)
    .bind(max_players)
    .fetch_one(pool)
    .await
    .expect("insert sport")
}

pub struct SeededTeam {
    pub team_id: Uuid,
    pub captain_id: Uuid,
}

/// Create a team with an active captain and `player_count` active members
/// in total (captain included).
pub async fn create_team(pool: &PgPool, sport_id: Uuid, player_count: i64) -> SeededTeam {
    assert!(player_count >= 1, "a captained team has at least one member");

    let team_id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO teams (name, sport_id) VALUES ($1, $2) RETURNING id",
    )
    .bind(format!("team-{}", Uuid::new_v4()))
    .bind(sport_id)
    .fetch_one(pool)
    .await
    .expect("insert team");

    let captain_id = create_user(pool).await;
    sqlx::query(
        "INSERT INTO user_team_links (user_id, team_id, is_captain) VALUES ($1, $2, TRUE)",
    )
    .bind(captain_id)
    .bind(team_id)
    .execute(pool)
    .await
    .expect("insert captain link");

    for _ in 1..player_count {
        add_active_member(pool, team_id).await;
    }

    SeededTeam {
        team_id,
        captain_id,
    }
}

/// Create a team with active members but no captain link.
pub async fn create_team_without_captain(pool: &PgPool, sport_id: Uuid, player_count: i64) -> Uuid {
    let team_id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO teams (name, sport_id) VALUES ($1, $2) RETURNING id",
    )
    .bind(format!("team-{}", Uuid::new_v4()))
    .bind(sport_id)
    .fetch_one(pool)
    .await
    .expect("insert team");

    for _ in 0..player_count {
        add_active_member(pool, team_id).await;
    }

    team_id
}

/// Add a fresh user as an active non-captain member.
pub async fn add_active_member(pool: &PgPool, team_id: Uuid) -> Uuid {
    let user_id = create_user(pool).await;
    sqlx::query(
        "INSERT INTO user_team_links (user_id, team_id, is_captain) VALUES ($1, $2, FALSE)",
    )
    .bind(user_id)
    .bind(team_id)
    .execute(pool)
    .await
    .expect("insert member link");
    user_id
}

pub async fn create_facility(pool: &PgPool, sport_ids: &[Uuid]) -> Uuid {
    let facility_id = sqlx::query_scalar::<_, Uuid>(
        "INSERT INTO sport_facilities (name) VALUES ($1) RETURNING id",
    )
    .bind(format!("facility-{}", Uuid::new_v4()))
    .fetch_one(pool)
    .await
    .expect("insert facility");

    for sport_id in sport_ids {
        sqlx::query(
            "INSERT INTO facility_sports (sport_facility_id, sport_id) VALUES ($1, $2)",
        )
        .bind(facility_id)
        .bind(sport_id)
        .execute(pool)
        .await
        .expect("insert facility sport");
    }

    facility_id
}

/// Create a bookable time slot instance at the facility with the given
/// status (`available`, `reserved`, ...).
pub async fn create_slot(pool: &PgPool, facility_id: Uuid, status: &str) -> Uuid {
    let recurring_id = sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO recurring_time_slots (sport_facility_id, day_of_week, start_time, end_time)
        VALUES ($1, 1, '10:00', '11:00')
        RETURNING id
        "#,
    )
    .bind(facility_id)
    .fetch_one(pool)
    .await
    .expect("insert recurring slot");

    sqlx::query_scalar::<_, Uuid>(
        r#"
        INSERT INTO time_slot_instances (recurring_time_slot_id, date, start_time, end_time, status)
        VALUES ($1, CURRENT_DATE, NOW(), NOW() + INTERVAL '1 hour', $2::time_slot_status)
        RETURNING id
        "#,
    )
    .bind(recurring_id)
    .bind(status)
    .fetch_one(pool)
    .await
    .expect("insert slot instance")
}

pub async fn slot_status(pool: &PgPool, slot_id: Uuid) -> String {
    sqlx::query_scalar::<_, String>("SELECT status::text FROM time_slot_instances WHERE id = $1")
        .bind(slot_id)
        .fetch_one(pool)
        .await
        .expect("slot status")
}

pub async fn match_status(pool: &PgPool, match_id: Uuid) -> String {
    sqlx::query_scalar::<_, String>("SELECT status::text FROM matches WHERE id = $1")
        .bind(match_id)
        .fetch_one(pool)
        .await
        .expect("match status")
}

pub async fn reservation_status(pool: &PgPool, reservation_id: Uuid) -> String {
    sqlx::query_scalar::<_, String>("SELECT status::text FROM reservations WHERE id = $1")
        .bind(reservation_id)
        .fetch_one(pool)
        .await
        .expect("reservation status")
}

pub async fn invitation_status(pool: &PgPool, invitation_id: Uuid) -> String {
    sqlx::query_scalar::<_, String>("SELECT status::text FROM invitations WHERE id = $1")
        .bind(invitation_id)
        .fetch_one(pool)
        .await
        .expect("invitation status")
}

pub async fn count_reservations_for_slot(pool: &PgPool, slot_id: Uuid) -> i64 {
    sqlx::query_scalar::<_, i64>(
        "SELECT COUNT(*) FROM reservations WHERE time_slot_instance_id = $1",
    )
    .bind(slot_id)
    .fetch_one(pool)
    .await
    .expect("count reservations")
}

pub async fn count_team_matches_for_team(pool: &PgPool, team_id: Uuid) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM team_matches WHERE team_id = $1")
        .bind(team_id)
        .fetch_one(pool)
        .await
        .expect("count team matches")
}

pub async fn count_invitations_from(pool: &PgPool, sender_id: Uuid) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM invitations WHERE sender_id = $1")
        .bind(sender_id)
        .fetch_one(pool)
        .await
        .expect("count invitations")
}

pub async fn count_notifications_for(pool: &PgPool, user_id: Uuid) -> i64 {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM notifications WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await
        .expect("count notifications")
}

pub async fn is_active_member(pool: &PgPool, team_id: Uuid, user_id: Uuid) -> bool {
    sqlx::query_scalar::<_, bool>(
        r#"
        SELECT EXISTS(
            SELECT 1 FROM user_team_links
            WHERE team_id = $1 AND user_id = $2 AND NOT has_left_team
        )
        "#,
    )
    .bind(team_id)
    .bind(user_id)
    .fetch_one(pool)
    .await
    .expect("membership check")
}
