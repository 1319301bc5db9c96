//! Invitation domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// What an invitation asks the receiver to join.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvitationKind {
    Friend,
    Team,
    Match,
}

impl InvitationKind {
    /// Tag of the target entity this kind refers to, if any.
    ///
    /// Friend invitations carry no target; team and match invitations
    /// reference a team or a match respectively.
    pub fn invitable_tag(&self) -> Option<&'static str> {
        match self {
            InvitationKind::Friend => None,
            InvitationKind::Team => Some("team"),
            InvitationKind::Match => Some("match"),
        }
    }
}

impl std::fmt::Display for InvitationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvitationKind::Friend => write!(f, "friend"),
            InvitationKind::Team => write!(f, "team"),
            InvitationKind::Match => write!(f, "match"),
        }
    }
}

/// Lifecycle state of an invitation.
///
/// `Pending` is initial; the other three are terminal and never
/// re-transition. `Canceled` is reached only through the expiry sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvitationStatus {
    Pending,
    Accepted,
    Rejected,
    Canceled,
}

impl InvitationStatus {
    /// Terminal states never transition again.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, InvitationStatus::Pending)
    }

    /// Active states block duplicate invitations for the same tuple.
    pub fn is_active(&self) -> bool {
        matches!(self, InvitationStatus::Pending | InvitationStatus::Accepted)
    }
}

impl std::fmt::Display for InvitationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvitationStatus::Pending => write!(f, "pending"),
            InvitationStatus::Accepted => write!(f, "accepted"),
            InvitationStatus::Rejected => write!(f, "rejected"),
            InvitationStatus::Canceled => write!(f, "canceled"),
        }
    }
}

/// The receiver's answer to a pending invitation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InvitationDecision {
    Accepted,
    Rejected,
}

impl From<InvitationDecision> for InvitationStatus {
    fn from(decision: InvitationDecision) -> Self {
        match decision {
            InvitationDecision::Accepted => InvitationStatus::Accepted,
            InvitationDecision::Rejected => InvitationStatus::Rejected,
        }
    }
}

/// Reference to the entity an invitation targets.
///
/// Stored as a (tag, id) pair; modeled as a tagged union so target
/// resolution is an explicit match, never runtime type inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum InvitableRef {
    Team(Uuid),
    Match(Uuid),
}

impl InvitableRef {
    /// The storage tag for this reference.
    pub fn tag(&self) -> &'static str {
        match self {
            InvitableRef::Team(_) => "team",
            InvitableRef::Match(_) => "match",
        }
    }

    /// The referenced entity id.
    pub fn id(&self) -> Uuid {
        match self {
            InvitableRef::Team(id) | InvitableRef::Match(id) => *id,
        }
    }

    /// Rebuild a reference from its stored (tag, id) pair.
    pub fn from_parts(tag: &str, id: Uuid) -> Option<Self> {
        match tag {
            "team" => Some(InvitableRef::Team(id)),
            "match" => Some(InvitableRef::Match(id)),
            _ => None,
        }
    }
}

/// A polymorphic edge between two users: friend request, team invite or
/// match challenge.
///
/// Invariant: at most one active (pending/accepted) invitation exists per
/// (sender, receiver, kind, target) tuple.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Invitation {
    pub id: Uuid,
    pub sender_id: Uuid,
    pub receiver_id: Uuid,
    pub kind: InvitationKind,
    pub status: InvitationStatus,
    pub invitable: Option<InvitableRef>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_invitable_tag() {
        assert_eq!(InvitationKind::Friend.invitable_tag(), None);
        assert_eq!(InvitationKind::Team.invitable_tag(), Some("team"));
        assert_eq!(InvitationKind::Match.invitable_tag(), Some("match"));
    }

    #[test]
    fn test_status_terminality() {
        assert!(!InvitationStatus::Pending.is_terminal());
        assert!(InvitationStatus::Accepted.is_terminal());
        assert!(InvitationStatus::Rejected.is_terminal());
        assert!(InvitationStatus::Canceled.is_terminal());
    }

    #[test]
    fn test_active_statuses() {
        assert!(InvitationStatus::Pending.is_active());
        assert!(InvitationStatus::Accepted.is_active());
        assert!(!InvitationStatus::Rejected.is_active());
        assert!(!InvitationStatus::Canceled.is_active());
    }

    #[test]
    fn test_decision_to_status() {
        assert_eq!(
            InvitationStatus::from(InvitationDecision::Accepted),
            InvitationStatus::Accepted
        );
        assert_eq!(
            InvitationStatus::from(InvitationDecision::Rejected),
            InvitationStatus::Rejected
        );
    }

    #[test]
    fn test_invitable_ref_parts_round_trip() {
        let id = Uuid::new_v4();
        let team = InvitableRef::Team(id);
        assert_eq!(InvitableRef::from_parts(team.tag(), team.id()), Some(team));

        let game = InvitableRef::Match(id);
        assert_eq!(InvitableRef::from_parts(game.tag(), game.id()), Some(game));
    }

    #[test]
    fn test_invitable_ref_unknown_tag() {
        assert_eq!(InvitableRef::from_parts("facility", Uuid::nil()), None);
    }
}
