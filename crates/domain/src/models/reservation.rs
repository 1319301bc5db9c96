//! Reservation domain models and request types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::game::{Game, MatchType, TeamMatch};

/// Lifecycle state of a reservation.
///
/// Simple reservations are created `Completed`; match-backed reservations
/// start `Pending` and are resolved by the expiry sweep. `Paid`,
/// `Completed` and `NoShow` belong to the payment/attendance flows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    Paid,
    Cancelled,
    Completed,
    NoShow,
}

impl std::fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReservationStatus::Pending => write!(f, "pending"),
            ReservationStatus::Confirmed => write!(f, "confirmed"),
            ReservationStatus::Paid => write!(f, "paid"),
            ReservationStatus::Cancelled => write!(f, "cancelled"),
            ReservationStatus::Completed => write!(f, "completed"),
            ReservationStatus::NoShow => write!(f, "no_show"),
        }
    }
}

/// A booking binding a user to a time slot, optionally backed by a match.
///
/// `auto_confirm` decides what happens to the booking when its match
/// invitation goes unanswered or is rejected: `true` keeps the booking
/// (confirmed), `false` cancels it and frees the slot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Reservation {
    pub id: Uuid,
    pub user_id: Uuid,
    pub time_slot_instance_id: Uuid,
    pub match_id: Option<Uuid>,
    pub date: DateTime<Utc>,
    pub total_price: f64,
    pub auto_confirm: bool,
    pub status: ReservationStatus,
    pub created_at: DateTime<Utc>,
}

/// A reservation with its match and team assignments, as returned by the
/// match reservation workflow for the caller to serialize.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ReservationDetails {
    pub reservation: Reservation,
    pub game: Option<Game>,
    pub team_matches: Vec<TeamMatch>,
}

/// Parameters for a simple (non-match) reservation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CreateReservationRequest {
    pub time_slot_id: Uuid,
}

/// Parameters for a match-backed reservation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct CreateMatchReservationRequest {
    pub time_slot_id: Uuid,
    pub match_type: MatchType,
    pub team1_id: Uuid,
    pub team2_id: Option<Uuid>,
    /// Keep the booking even if the match invitation is declined.
    #[serde(default)]
    pub auto_confirm: bool,
}
