//! Notification entities (database row mappings).

use chrono::{DateTime, Utc};
use domain::models::{NotifiableRef, Notification, NotificationType};
use sqlx::FromRow;
use uuid::Uuid;

/// Database enum for notification_type that maps to the PostgreSQL enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, sqlx::Type)]
#[sqlx(type_name = "notification_type", rename_all = "snake_case")]
pub enum NotificationTypeDb {
    FriendNotification,
    TeamNotification,
    MatchNotification,
}

impl From<NotificationTypeDb> for NotificationType {
    fn from(db: NotificationTypeDb) -> Self {
        match db {
            NotificationTypeDb::FriendNotification => NotificationType::FriendNotification,
            NotificationTypeDb::TeamNotification => NotificationType::TeamNotification,
            NotificationTypeDb::MatchNotification => NotificationType::MatchNotification,
        }
    }
}

impl From<NotificationType> for NotificationTypeDb {
    fn from(notification_type: NotificationType) -> Self {
        match notification_type {
            NotificationType::FriendNotification => NotificationTypeDb::FriendNotification,
            NotificationType::TeamNotification => NotificationTypeDb::TeamNotification,
            NotificationType::MatchNotification => NotificationTypeDb::MatchNotification,
        }
    }
}

/// Database row mapping for the notifications table.
#[derive(Debug, Clone, FromRow)]
pub struct NotificationEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    #[sqlx(rename = "type")]
    pub notification_type: NotificationTypeDb,
    pub title: String,
    pub message: String,
    pub notifiable_type: Option<String>,
    pub notifiable_id: Option<Uuid>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

impl From<NotificationEntity> for Notification {
    fn from(entity: NotificationEntity) -> Self {
        let notifiable = match (&entity.notifiable_type, entity.notifiable_id) {
            (Some(tag), Some(id)) => NotifiableRef::from_parts(tag, id),
            _ => None,
        };
        Self {
            id: entity.id,
            user_id: entity.user_id,
            notification_type: entity.notification_type.into(),
            title: entity.title,
            message: entity.message,
            notifiable,
            is_read: entity.is_read,
            created_at: entity.created_at,
        }
    }
}
