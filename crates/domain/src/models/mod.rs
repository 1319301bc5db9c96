//! Domain models for the Courtbook backend.

pub mod game;
pub mod invitation;
pub mod notification;
pub mod payment;
pub mod reservation;
pub mod sport;
pub mod team;
pub mod time_slot;

pub use game::{Game, MatchStatus, MatchType, TeamMatch};
pub use invitation::{
    InvitableRef, Invitation, InvitationDecision, InvitationKind, InvitationStatus,
};
pub use notification::{NotifiableRef, Notification, NotificationDraft, NotificationType};
pub use payment::{Payment, PaymentMethod};
pub use reservation::{
    CreateMatchReservationRequest, CreateReservationRequest, Reservation, ReservationDetails,
    ReservationStatus,
};
pub use sport::Sport;
pub use team::{Team, TeamRoster};
pub use time_slot::{SlotFacilityView, TimeSlotInstance, TimeSlotStatus};
