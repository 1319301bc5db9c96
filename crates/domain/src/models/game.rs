//! Match domain models.
//!
//! The scheduled-contest entity is named `Game` because `match` is a
//! reserved word; the backing table is still `matches`.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Visibility of a match.
///
/// A private match fixes both teams up front and runs through the
/// invitation flow; a public match starts with one team and an open slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchType {
    Public,
    Private,
}

/// Lifecycle state of a match.
///
/// Created as `Pending`; only invitation acceptance/rejection/expiry logic
/// moves it to `Confirmed` or `Cancelled`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchStatus {
    Pending,
    Confirmed,
    Cancelled,
}

impl std::fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MatchStatus::Pending => write!(f, "pending"),
            MatchStatus::Confirmed => write!(f, "confirmed"),
            MatchStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

/// A scheduled contest between one or two teams.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Game {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub match_type: MatchType,
    pub status: MatchStatus,
    pub created_at: DateTime<Utc>,
}

/// Join row assigning a team to a match, with its score and outcome.
///
/// A private match always has exactly two of these; a public match may have
/// one until the open slot fills.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TeamMatch {
    pub id: Uuid,
    pub team_id: Uuid,
    pub match_id: Uuid,
    pub score: i32,
    pub is_winner: bool,
}
