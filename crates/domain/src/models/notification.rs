//! Notification domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Category of a notification, matching the invitation kind it announces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationType {
    FriendNotification,
    TeamNotification,
    MatchNotification,
}

impl std::fmt::Display for NotificationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationType::FriendNotification => write!(f, "friend_notification"),
            NotificationType::TeamNotification => write!(f, "team_notification"),
            NotificationType::MatchNotification => write!(f, "match_notification"),
        }
    }
}

/// Reference to the entity a notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum NotifiableRef {
    Invitation(Uuid),
    Match(Uuid),
}

impl NotifiableRef {
    /// The storage tag for this reference.
    pub fn tag(&self) -> &'static str {
        match self {
            NotifiableRef::Invitation(_) => "invitation",
            NotifiableRef::Match(_) => "match",
        }
    }

    /// The referenced entity id.
    pub fn id(&self) -> Uuid {
        match self {
            NotifiableRef::Invitation(id) | NotifiableRef::Match(id) => *id,
        }
    }

    /// Rebuild a reference from its stored (tag, id) pair.
    pub fn from_parts(tag: &str, id: Uuid) -> Option<Self> {
        match tag {
            "invitation" => Some(NotifiableRef::Invitation(id)),
            "match" => Some(NotifiableRef::Match(id)),
            _ => None,
        }
    }
}

/// A stored notification record.
///
/// Read/unread lifecycle and deletion belong to the notification feature
/// outside this core; workflows only ever append.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    #[serde(rename = "type")]
    pub notification_type: NotificationType,
    pub title: String,
    pub message: String,
    pub notifiable: Option<NotifiableRef>,
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}

/// A notification about to be recorded.
#[derive(Debug, Clone, Validate)]
pub struct NotificationDraft {
    pub user_id: Uuid,
    pub notification_type: NotificationType,
    #[validate(length(max = 255, message = "Title must be at most 255 characters"))]
    pub title: String,
    pub message: String,
    pub notifiable: Option<NotifiableRef>,
}

impl NotificationDraft {
    /// Draft a match-invitation notification for the receiving captain.
    pub fn match_invitation(
        receiver_id: Uuid,
        invitation_id: Uuid,
        sport_name: &str,
        opposing_team_name: &str,
    ) -> Self {
        Self {
            user_id: receiver_id,
            notification_type: NotificationType::MatchNotification,
            title: "Match invitation".to_string(),
            message: format!(
                "You have received an invitation for a {} match against {}.",
                sport_name, opposing_team_name
            ),
            notifiable: Some(NotifiableRef::Invitation(invitation_id)),
        }
    }
}
