//! Time slot entities (database row mappings).

use chrono::{DateTime, NaiveDate, Utc};
use domain::models::{TimeSlotInstance, TimeSlotStatus};
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum for time_slot_status that maps to the PostgreSQL enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "time_slot_status", rename_all = "lowercase")]
pub enum TimeSlotStatusDb {
    Available,
    Reserved,
    Maintenance,
    Blocked,
}

impl From<TimeSlotStatusDb> for TimeSlotStatus {
    fn from(db: TimeSlotStatusDb) -> Self {
        match db {
            TimeSlotStatusDb::Available => TimeSlotStatus::Available,
            TimeSlotStatusDb::Reserved => TimeSlotStatus::Reserved,
            TimeSlotStatusDb::Maintenance => TimeSlotStatus::Maintenance,
            TimeSlotStatusDb::Blocked => TimeSlotStatus::Blocked,
        }
    }
}

impl From<TimeSlotStatus> for TimeSlotStatusDb {
    fn from(status: TimeSlotStatus) -> Self {
        match status {
            TimeSlotStatus::Available => TimeSlotStatusDb::Available,
            TimeSlotStatus::Reserved => TimeSlotStatusDb::Reserved,
            TimeSlotStatus::Maintenance => TimeSlotStatusDb::Maintenance,
            TimeSlotStatus::Blocked => TimeSlotStatusDb::Blocked,
        }
    }
}

/// Database row mapping for the time_slot_instances table.
#[derive(Debug, Clone, FromRow)]
pub struct TimeSlotInstanceEntity {
    pub id: Uuid,
    pub recurring_time_slot_id: Uuid,
    pub date: NaiveDate,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub status: TimeSlotStatusDb,
}

impl From<TimeSlotInstanceEntity> for TimeSlotInstance {
    fn from(entity: TimeSlotInstanceEntity) -> Self {
        Self {
            id: entity.id,
            recurring_time_slot_id: entity.recurring_time_slot_id,
            date: entity.date,
            start_time: entity.start_time,
            end_time: entity.end_time,
            status: entity.status.into(),
        }
    }
}

/// A time slot joined with the facility behind its recurring schedule.
#[derive(Debug, Clone, FromRow)]
pub struct SlotFacilityEntity {
    pub time_slot_id: Uuid,
    pub status: TimeSlotStatusDb,
    pub facility_id: Uuid,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_conversion_round_trip() {
        for status in [
            TimeSlotStatus::Available,
            TimeSlotStatus::Reserved,
            TimeSlotStatus::Maintenance,
            TimeSlotStatus::Blocked,
        ] {
            let db: TimeSlotStatusDb = status.into();
            assert_eq!(TimeSlotStatus::from(db), status);
        }
    }
}
