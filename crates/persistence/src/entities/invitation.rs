//! Invitation entities (database row mappings).

use chrono::{DateTime, Utc};
use domain::models::{InvitableRef, Invitation, InvitationKind, InvitationStatus};
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum for invitation_kind that maps to the PostgreSQL enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "invitation_kind", rename_all = "lowercase")]
pub enum InvitationKindDb {
    Friend,
    Team,
    Match,
}

impl From<InvitationKindDb> for InvitationKind {
    fn from(db: InvitationKindDb) -> Self {
        match db {
            InvitationKindDb::Friend => InvitationKind::Friend,
            InvitationKindDb::Team => InvitationKind::Team,
            InvitationKindDb::Match => InvitationKind::Match,
        }
    }
}

impl From<InvitationKind> for InvitationKindDb {
    fn from(kind: InvitationKind) -> Self {
        match kind {
            InvitationKind::Friend => InvitationKindDb::Friend,
            InvitationKind::Team => InvitationKindDb::Team,
            InvitationKind::Match => InvitationKindDb::Match,
        }
    }
}

/// Database enum for invitation_status that maps to the PostgreSQL enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "invitation_status", rename_all = "lowercase")]
pub enum InvitationStatusDb {
    Pending,
    Accepted,
    Rejected,
    Canceled,
}

impl From<InvitationStatusDb> for InvitationStatus {
    fn from(db: InvitationStatusDb) -> Self {
        match db {
            InvitationStatusDb::Pending => InvitationStatus::Pending,
            InvitationStatusDb::Accepted => InvitationStatus::Accepted,
            InvitationStatusDb::Rejected => InvitationStatus::Rejected,
            InvitationStatusDb::Canceled => InvitationStatus::Canceled,
        }
    }
}

impl From<InvitationStatus> for InvitationStatusDb {
    fn from(status: InvitationStatus) -> Self {
        match status {
            InvitationStatus::Pending => InvitationStatusDb::Pending,
            InvitationStatus::Accepted => InvitationStatusDb::Accepted,
            InvitationStatus::Rejected => InvitationStatusDb::Rejected,
            InvitationStatus::Canceled => InvitationStatusDb::Canceled,
        }
    }
}

/// Database row mapping for the invitations table.
#[derive(Debug, Clone, FromRow)]
pub struct InvitationEntity {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    #[sqlx(rename = "type")]
    pub kind: InvitationKindDb,
    pub status: InvitationStatusDb,
    pub invitable_type: Option<String>,
    pub invitable_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl InvitationEntity {
    /// Rebuild the typed target reference from the stored (tag, id) pair.
    pub fn invitable(&self) -> Option<InvitableRef> {
        match (&self.invitable_type, self.invitable_id) {
            (Some(tag), Some(id)) => InvitableRef::from_parts(tag, id),
            _ => None,
        }
    }
}

impl From<InvitationEntity> for Invitation {
    fn from(entity: InvitationEntity) -> Self {
        let invitable = entity.invitable();
        Self {
            id: entity.id,
            sender_id: entity.sender_id,
            receiver_id: entity.receiver_id,
            kind: entity.kind.into(),
            status: entity.status.into(),
            invitable,
            created_at: entity.created_at,
        }
    }
}
