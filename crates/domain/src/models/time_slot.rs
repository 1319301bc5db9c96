//! Time slot domain models.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Availability state of a bookable time-slot instance.
///
/// Exactly one reservation may hold a slot in `Reserved`; the claim is a
/// conditional update that only succeeds from `Available`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimeSlotStatus {
    Available,
    Reserved,
    Maintenance,
    Blocked,
}

impl std::fmt::Display for TimeSlotStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeSlotStatus::Available => write!(f, "available"),
            TimeSlotStatus::Reserved => write!(f, "reserved"),
            TimeSlotStatus::Maintenance => write!(f, "maintenance"),
            TimeSlotStatus::Blocked => write!(f, "blocked"),
        }
    }
}

/// A single bookable interval generated from a recurring facility schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TimeSlotInstance {
    pub id: Uuid,
    pub recurring_time_slot_id: Uuid,
    pub date: NaiveDate,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: TimeSlotStatus,
}

/// A time slot joined with the facility behind it and the sports that
/// facility supports, loaded in one read for compatibility checks.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct SlotFacilityView {
    pub time_slot_id: Uuid,
    pub status: TimeSlotStatus,
    pub facility_id: Uuid,
    pub supported_sport_ids: Vec<Uuid>,
}

impl SlotFacilityView {
    /// Whether the facility behind this slot supports the given sport.
    pub fn supports_sport(&self, sport_id: Uuid) -> bool {
        self.supported_sport_ids.contains(&sport_id)
    }
}
