//! Reservation entities (database row mappings).

use chrono::{DateTime, Utc};
use domain::models::{Reservation, ReservationStatus};
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum for reservation_status that maps to the PostgreSQL enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "reservation_status", rename_all = "snake_case")]
pub enum ReservationStatusDb {
    Pending,
    Confirmed,
    Paid,
    Cancelled,
    Completed,
    NoShow,
}

impl From<ReservationStatusDb> for ReservationStatus {
    fn from(db: ReservationStatusDb) -> Self {
        match db {
            ReservationStatusDb::Pending => ReservationStatus::Pending,
            ReservationStatusDb::Confirmed => ReservationStatus::Confirmed,
            ReservationStatusDb::Paid => ReservationStatus::Paid,
            ReservationStatusDb::Cancelled => ReservationStatus::Cancelled,
            ReservationStatusDb::Completed => ReservationStatus::Completed,
            ReservationStatusDb::NoShow => ReservationStatus::NoShow,
        }
    }
}

impl From<ReservationStatus> for ReservationStatusDb {
    fn from(status: ReservationStatus) -> Self {
        match status {
            ReservationStatus::Pending => ReservationStatusDb::Pending,
            ReservationStatus::Confirmed => ReservationStatusDb::Confirmed,
            ReservationStatus::Paid => ReservationStatusDb::Paid,
            ReservationStatus::Cancelled => ReservationStatusDb::Cancelled,
            ReservationStatus::Completed => ReservationStatusDb::Completed,
            ReservationStatus::NoShow => ReservationStatusDb::NoShow,
        }
    }
}

/// Database row mapping for the reservations table.
#[derive(Debug, Clone, FromRow)]
pub struct ReservationEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub time_slot_instance_id: Uuid,
    pub match_id: Option<Uuid>,
    pub date: DateTime<Utc>,
    pub total_price: f64,
    pub auto_confirm: bool,
    pub status: ReservationStatusDb,
    pub created_at: DateTime<Utc>,
}

impl From<ReservationEntity> for Reservation {
    fn from(entity: ReservationEntity) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            time_slot_instance_id: entity.time_slot_instance_id,
            match_id: entity.match_id,
            date: entity.date,
            total_price: entity.total_price,
            auto_confirm: entity.auto_confirm,
            status: entity.status.into(),
            created_at: entity.created_at,
        }
    }
}

/// Column values for inserting a reservation.
#[derive(Debug, Clone)]
pub struct NewReservation {
    pub user_id: Uuid,
    pub time_slot_instance_id: Uuid,
    pub match_id: Option<Uuid>,
    pub total_price: f64,
    pub auto_confirm: bool,
    pub status: ReservationStatusDb,
}
